//! DOT document generation for the collected image graph.

use std::fmt::Write;

use crate::model::ImageGraph;

/// Shell-invocation prefix the runtime prepends to layer and container
/// commands. Dropped from edge labels when it leads the command.
const SHELL_PREFIX: &str = "/bin/sh -c ";

/// Longest edge label kept; anything longer is cut, no ellipsis.
const LABEL_MAX: usize = 48;

/// Node token for an identifier: an alphabetic prefix plus the first 16
/// characters. Identifiers may begin with a digit, which DOT forbids as a
/// bare node name. An absent identifier maps to the shared null node.
fn node_token(id: Option<&str>) -> String {
    match id {
        Some(id) => format!("i{}", id.chars().take(16).collect::<String>()),
        None => "null".to_string(),
    }
}

/// Shorten a command for use as an edge label: drop the shell-invocation
/// prefix when present at the start, then keep at most [`LABEL_MAX`]
/// characters.
fn clean_command(command: &str) -> String {
    let stripped = command.strip_prefix(SHELL_PREFIX).unwrap_or(command);
    stripped.chars().take(LABEL_MAX).collect()
}

/// Escape a string for embedding inside a double-quoted DOT label.
fn escape_label(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch == '\\' || ch == '"' {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Render the graph as a DOT document.
///
/// Image nodes come first (gray, labeled with their newline-joined tags),
/// then one edge per build layer from parent to child, then per container an
/// edge from its image plus a diamond node (filled while running, dashed
/// otherwise). Map iteration order keeps the document stable across runs.
pub fn render_dot(graph: &ImageGraph) -> String {
    let mut out = String::new();
    out.push_str("digraph docker_image {\n");
    out.push_str("  node [style=\"dashed\"];\n");

    for (id, tags) in &graph.tagged_images {
        let label = tags
            .iter()
            .map(|tag| escape_label(tag))
            .collect::<Vec<_>>()
            .join("\\n");
        let _ = writeln!(
            &mut out,
            "  {} [label=\"{}\", style=\"filled\", fillcolor=\"#CCCCCC\"];",
            node_token(Some(id.as_str())),
            label,
        );
    }

    for (id, entry) in &graph.history {
        let _ = writeln!(
            &mut out,
            "  {} -> {} [label=\"{}\"];",
            node_token(entry.parent.as_deref()),
            node_token(Some(id.as_str())),
            escape_label(&clean_command(&entry.created_by)),
        );
    }

    for (id, process) in &graph.processes {
        let _ = writeln!(
            &mut out,
            "  {} -> {} [label=\"{}\"];",
            node_token(Some(process.image.as_str())),
            node_token(Some(id.as_str())),
            escape_label(&clean_command(&process.command)),
        );
        let _ = writeln!(
            &mut out,
            "  {} [label=\"{}\", shape=\"diamond\", style=\"{}\"];",
            node_token(Some(id.as_str())),
            escape_label(&process.name),
            if process.running { "filled" } else { "dashed" },
        );
    }

    out.push_str("}\n");
    out
}

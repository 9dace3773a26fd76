//! Correlation model: images, their build layers, and containers.
//!
//! Three passes over the runtime's tables produce three maps keyed by
//! identifier; the emitter renders them without any further computation.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::runtime::ContainerRuntime;
use crate::table::parse_table;

pub const IMAGE_HEADERS: [&str; 5] = ["REPOSITORY", "TAG", "IMAGE ID", "CREATED", "VIRTUAL SIZE"];
pub const HISTORY_HEADERS: [&str; 4] = ["IMAGE", "CREATED", "CREATED BY", "SIZE"];
pub const PS_HEADERS: [&str; 7] = [
    "CONTAINER ID",
    "IMAGE",
    "COMMAND",
    "CREATED",
    "STATUS",
    "PORTS",
    "NAMES",
];

/// Placeholder the runtime prints in place of a repository:tag pair for
/// anonymous images. Never recorded as a tag.
pub const UNTAGGED: &str = "<none>:<none>";

/// Image id -> `repository:tag` labels, in the runtime's listing order.
pub type TaggedImages = BTreeMap<String, Vec<String>>;

/// One build layer: the command that created it and the next-older layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub created_by: String,
    pub parent: Option<String>,
}

/// Layer id -> history entry, one per distinct layer seen across all chains.
pub type History = BTreeMap<String, HistoryEntry>;

/// One container: the image it was launched from, its command, liveness, name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessEntry {
    pub image: String,
    pub command: String,
    pub running: bool,
    pub name: String,
}

/// Container id -> process entry.
pub type Processes = BTreeMap<String, ProcessEntry>;

/// Everything the emitter needs, built once per run and then read-only.
#[derive(Debug, Default)]
pub struct ImageGraph {
    pub tagged_images: TaggedImages,
    pub history: History,
    pub processes: Processes,
}

struct ImageRow {
    repository: String,
    tag: String,
    id: String,
}

struct HistoryRow {
    image: String,
    created_by: String,
}

struct PsRow {
    id: String,
    image: String,
    command: String,
    status: String,
    name: String,
}

/// Collect the three tables and correlate them by identifier.
///
/// History is fetched at most once per distinct image id: an id already in
/// the history map (from its own earlier listing row, or as an ancestor of a
/// previously walked image) is not fetched again.
pub fn build_image_graph(runtime: &impl ContainerRuntime) -> Result<ImageGraph> {
    let mut graph = ImageGraph::default();

    // 1) Image pass: group tags by id, walk each new id's layer history.
    let images = parse_table(&IMAGE_HEADERS, &runtime.images()?, |cols| ImageRow {
        repository: cols[0].clone(),
        tag: cols[1].clone(),
        id: cols[2].clone(),
    })?;

    for row in images {
        let tag = format!("{}:{}", row.repository, row.tag);
        if tag != UNTAGGED {
            graph
                .tagged_images
                .entry(row.id.clone())
                .or_default()
                .push(tag);
        }

        if graph.history.contains_key(&row.id) {
            continue;
        }
        collect_history(runtime, &row.id, &mut graph.history)?;
    }

    // 2) Process pass: resolve each container's image through the tag sets.
    let processes = parse_table(&PS_HEADERS, &runtime.ps()?, |cols| PsRow {
        id: cols[0].clone(),
        image: cols[1].clone(),
        command: cols[2].clone(),
        status: cols[4].clone(),
        name: cols[6].clone(),
    })?;

    for row in processes {
        let image = resolve_image(&graph.tagged_images, &row.image);
        graph.processes.insert(
            row.id,
            ProcessEntry {
                image,
                command: row.command,
                running: row.status.starts_with("Up "),
                name: row.name,
            },
        );
    }

    Ok(graph)
}

/// Walk one image's history table newest-first, linking each layer to the one
/// below it as its parent. The oldest layer keeps `parent: None`.
fn collect_history(
    runtime: &impl ContainerRuntime,
    image_id: &str,
    history: &mut History,
) -> Result<()> {
    let rows = parse_table(&HISTORY_HEADERS, &runtime.history(image_id)?, |cols| {
        HistoryRow {
            image: cols[0].clone(),
            created_by: cols[2].clone(),
        }
    })?;

    let mut last_child: Option<String> = None;
    for row in rows {
        if let Some(child) = &last_child {
            if let Some(entry) = history.get_mut(child) {
                entry.parent = Some(row.image.clone());
            }
        }

        history.insert(
            row.image.clone(),
            HistoryEntry {
                created_by: row.created_by,
                parent: None,
            },
        );
        last_child = Some(row.image);
    }

    Ok(())
}

/// Prefer the image id whose tag set contains the raw reference; keep the raw
/// reference verbatim when nothing matches.
fn resolve_image(tagged_images: &TaggedImages, raw: &str) -> String {
    tagged_images
        .iter()
        .find(|(_, tags)| tags.iter().any(|tag| tag == raw))
        .map(|(id, _)| id.clone())
        .unwrap_or_else(|| raw.to_string())
}

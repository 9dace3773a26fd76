use crate::error::{GraphError, Result};

/// Find the starting character offset of each header label in `text`.
///
/// The search is strictly left-to-right and never backtracks: each label must
/// occur at or after the end of the previous match, so a label can never match
/// inside an earlier column's text.
///
/// Example:
/// locate(&["foo", "bar", "baz"], "foo    bar  baz") == [0, 7, 12]
pub fn locate(labels: &[&str], text: &str) -> Result<Vec<usize>> {
    let mut offsets = Vec::with_capacity(labels.len());
    // Byte cursor for the search; reported offsets are character positions.
    let mut cursor = 0;

    for label in labels {
        let found = match text[cursor..].find(label) {
            Some(i) => cursor + i,
            None => {
                return Err(GraphError::LabelNotFound {
                    label: (*label).to_string(),
                    header: text.trim_end().to_string(),
                });
            }
        };
        offsets.push(text[..found].chars().count());
        cursor = found + label.len();
    }

    Ok(offsets)
}

/// Slice a data row at the header's column offsets.
///
/// Each column ends one character short of the next column's start (the
/// alignment padding always includes at least one separator space); the last
/// column runs to the true end of the row. Every piece is right-trimmed, with
/// embedded whitespace kept verbatim. A row shorter than the offsets imply
/// yields empty strings for the missing columns instead of failing.
///
/// Example:
/// split("foo    bar  baz", &[0, 7, 12]) == ["foo", "bar", "baz"]
pub fn split(row: &str, offsets: &[usize]) -> Vec<String> {
    let chars: Vec<char> = row.chars().collect();

    let mut cuts = offsets.to_vec();
    cuts.push(chars.len() + 1);

    cuts.windows(2)
        .map(|pair| {
            let start = pair[0].min(chars.len());
            let end = pair[1].saturating_sub(1).clamp(start, chars.len());
            let piece: String = chars[start..end].iter().collect();
            piece.trim_end().to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn locate_finds_each_label_start() {
        let offsets = locate(&["foo", "bar", "baz"], "foo    bar  baz").unwrap();
        assert_eq!(offsets, vec![0, 7, 12]);
    }

    #[test]
    fn locate_empty_labels_is_empty() {
        let offsets = locate(&[], "anything at all").unwrap();
        assert!(offsets.is_empty());
    }

    #[test]
    fn locate_offsets_are_strictly_increasing() {
        let header = "IMAGE               CREATED             CREATED BY          SIZE";
        let offsets = locate(&["IMAGE", "CREATED", "CREATED BY", "SIZE"], header).unwrap();
        assert_eq!(offsets, vec![0, 20, 40, 60]);
        assert!(offsets.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn locate_resumes_after_previous_match() {
        // "ID" must match the standalone column, not the tail of "CONTAINER ID".
        let offsets = locate(&["CONTAINER ID", "ID"], "CONTAINER ID   ID").unwrap();
        assert_eq!(offsets, vec![0, 15]);
    }

    #[test]
    fn locate_never_backtracks() {
        // "foo" only occurs before the cursor left by matching "bar".
        let err = locate(&["bar", "foo"], "foo bar").unwrap_err();
        assert!(matches!(err, GraphError::LabelNotFound { ref label, .. } if label == "foo"));
    }

    #[test]
    fn locate_missing_label_names_the_label() {
        let err = locate(&["REPOSITORY", "TAG"], "REPOSITORY   SIZE").unwrap_err();
        match err {
            GraphError::LabelNotFound { label, header } => {
                assert_eq!(label, "TAG");
                assert_eq!(header, "REPOSITORY   SIZE");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn locate_reports_character_offsets() {
        let offsets = locate(&["x"], "héllo x").unwrap();
        assert_eq!(offsets, vec![6]);
    }

    #[test]
    fn split_cuts_at_offsets_and_trims() {
        let cols = split("foo    bar  baz", &[0, 7, 12]);
        assert_eq!(cols, vec!["foo", "bar", "baz"]);
    }

    #[test]
    fn split_keeps_embedded_whitespace() {
        let cols = split("a value    second", &[0, 11]);
        assert_eq!(cols, vec!["a value", "second"]);
    }

    #[test]
    fn split_short_row_degrades_to_empty_columns() {
        let cols = split("foo", &[0, 7, 12]);
        assert_eq!(cols, vec!["foo", "", ""]);
    }

    #[test]
    fn split_empty_offsets_is_empty() {
        assert!(split("whatever", &[]).is_empty());
    }

    #[test]
    fn split_with_single_space_padding_reconstructs_the_row() {
        let row = "foo bar baz";
        let cols = split(row, &[0, 4, 8]);
        assert_eq!(cols.join(" "), row);
    }

    #[test]
    fn split_counts_characters_not_bytes() {
        let cols = split("héllo      x", &[0, 11]);
        assert_eq!(cols, vec!["héllo", "x"]);
    }
}

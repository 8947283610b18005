//! Splitting a `yaml` block into one chunk per entry.

use regex::Regex;
use std::sync::LazyLock;

/// A list item whose first key is `id`, e.g. `  - id: "0001"`.
static ENTRY_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*-[ \t]*id:").expect("Invalid entry start regex"));

/// Split a block into entry chunks.
///
/// Every chunk starts at a line opening a new entry and runs up to the next
/// such line or the end of the block. Text before the first entry (section
/// comments and the like) belongs to no chunk. Blank chunks and chunks that
/// never mention `id:` are dropped.
///
/// # Example
///
/// ```rust
/// use projectlist::markdown::entries::split_entries;
///
/// let block = "# Active\n  - id: \"0001\"\n    title: A\n  - id: \"0002\"\n    title: B\n";
/// let chunks: Vec<&str> = split_entries(block).collect();
/// assert_eq!(chunks.len(), 2);
/// assert!(chunks[0].contains("title: A"));
/// assert!(chunks[1].contains("title: B"));
/// ```
pub fn split_entries(block: &str) -> impl Iterator<Item = &str> + '_ {
    let starts: Vec<usize> = ENTRY_START_RE.find_iter(block).map(|m| m.start()).collect();

    if let Some(&first) = starts.first()
        && !block[..first].trim().is_empty()
    {
        log::trace!("Dropping {first} bytes before the first entry");
    }

    let ends: Vec<usize> = starts
        .iter()
        .skip(1)
        .copied()
        .chain(std::iter::once(block.len()))
        .collect();

    starts
        .into_iter()
        .zip(ends)
        .map(move |(start, end)| &block[start..end])
        .filter(|chunk| {
            let keep = !chunk.trim().is_empty() && chunk.contains("id:");
            if !keep {
                log::trace!("Skipping chunk without an id: {chunk:?}");
            }
            keep
        })
}

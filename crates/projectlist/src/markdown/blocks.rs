//! Fenced `yaml` block extraction.
//!
//! Project lists keep their entries in fenced code blocks tagged `yaml`:
//!
//! ````markdown
//! ## Active Projects
//!
//! ```yaml
//!   - id: "0001"
//!     title: "First Project"
//!     status: implementing
//! ```
//! ````
//!
//! Only the text between the opening fence line and the next fence is
//! returned. Untagged blocks and blocks tagged with anything else are
//! ignored.

use regex::Regex;
use std::sync::LazyLock;

/// Opening fence, the `yaml` tag, a line break, then everything up to the
/// nearest closing fence.
static YAML_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```yaml\n(.*?)```").expect("Invalid yaml block regex"));

/// Iterate over the inner text of every `yaml` fenced block in `content`.
///
/// Blocks are yielded in document order. Matching is non-greedy, so each
/// block stops at the first closing fence after it opens.
///
/// # Example
///
/// ```rust
/// use projectlist::markdown::blocks::yaml_blocks;
///
/// let content = "# List\n\n```yaml\n- id: \"0001\"\n```\n\n```rust\nfn main() {}\n```\n";
/// let blocks: Vec<&str> = yaml_blocks(content).collect();
/// assert_eq!(blocks, vec!["- id: \"0001\"\n"]);
/// ```
pub fn yaml_blocks(content: &str) -> impl Iterator<Item = &str> + '_ {
    YAML_BLOCK_RE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Separator between blocks: one fully blank line.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Splits a document into trimmed, non-empty block strings.
///
/// Runs of more than two newlines produce empty pieces that are dropped, so
/// any number of blank lines separates exactly two blocks. Order is preserved.
pub fn split_blocks(document: &str) -> Vec<&str> {
    document
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

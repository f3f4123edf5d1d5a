/// Split the inclusive range `[from, to]` into consecutive inclusive chunks
/// of at most `max_span` blocks.
///
/// Yields nothing when `from > to`. A `max_span` of zero is treated as one.
pub fn block_ranges(from: u64, to: u64, max_span: u64) -> impl Iterator<Item = (u64, u64)> {
    let span = max_span.max(1);
    let mut next = Some(from).filter(|start| *start <= to);
    std::iter::from_fn(move || {
        let start = next?;
        let end = start.saturating_add(span - 1).min(to);
        next = end.checked_add(1).filter(|n| *n <= to);
        Some((start, end))
    })
}

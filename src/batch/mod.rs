//! Batch partitioning.
//!
//! Splits the entry list into contiguous chunks, one per worker. Each worker
//! processes its chunk sequentially, so results within a chunk preserve
//! input order; ordering across chunks is unconstrained.

/// Partitions `items` into at most `workers` contiguous, near-equal chunks.
///
/// Chunk size is `items.len() / workers` and the final chunk absorbs any
/// remainder. When there are fewer items than workers, each item gets its
/// own chunk; empty chunks are never produced. Concatenating the returned
/// chunks reproduces the input exactly.
pub fn partition<T>(mut items: Vec<T>, workers: usize) -> Vec<Vec<T>> {
    if items.is_empty() {
        return Vec::new();
    }
    if workers <= 1 {
        return vec![items];
    }

    let chunk_size = (items.len() / workers).max(1);
    let mut chunks = Vec::with_capacity(workers);
    while chunks.len() + 1 < workers && items.len() > chunk_size {
        let rest = items.split_off(chunk_size);
        chunks.push(items);
        items = rest;
    }
    chunks.push(items);
    chunks
}

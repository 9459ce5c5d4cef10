/// Composite cache key for one search page.
///
/// The genre set is sorted and deduplicated before joining, so identical
/// filter combinations hit the same entry regardless of UI interaction
/// order, and different pages or genre sets never collide.
pub fn search_key(query: &str, page: u32, genre_ids: &[u32]) -> String {
    let mut genres = genre_ids.to_vec();
    genres.sort_unstable();
    genres.dedup();
    let csv = genres
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",");

    format!(
        "{}-page{}-genres{}",
        query.trim().to_lowercase(),
        page,
        csv
    )
}

/// Key namespace for per-item detail records.
pub fn details_key(id: i64) -> String {
    format!("details-{}", id)
}

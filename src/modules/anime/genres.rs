/// Genre display name -> metadata-API genre id.
///
/// Selections arrive from the UI by display name; the metadata API filters
/// by numeric id.
pub const GENRES: &[(&str, u32)] = &[
    ("Action", 1),
    ("Adventure", 2),
    ("Comedy", 4),
    ("Drama", 8),
    ("Fantasy", 10),
    ("Horror", 14),
    ("Mystery", 7),
    ("Romance", 22),
    ("Sci-Fi", 24),
    ("Slice of Life", 36),
    ("Sports", 30),
    ("Thriller", 41),
];

pub fn genre_id(name: &str) -> Option<u32> {
    GENRES
        .iter()
        .find(|(genre, _)| *genre == name)
        .map(|(_, id)| *id)
}

/// Resolve a set of selected genre names, silently skipping unknown ones.
pub fn genre_ids<'a, I>(names: I) -> Vec<u32>
where
    I: IntoIterator<Item = &'a str>,
{
    names.into_iter().filter_map(genre_id).collect()
}

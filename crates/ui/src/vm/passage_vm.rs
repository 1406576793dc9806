use literacy_core::model::Passage;

/// `N. title` lines, numbered from 1.
#[must_use]
pub fn map_passage_listing(passages: &[Passage]) -> Vec<String> {
    passages
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{}. {}", i + 1, p.title()))
        .collect()
}

/// Turn a typed 1-based number into a zero-based index.
///
/// Returns `None` for anything that is not a positive integer.
#[must_use]
pub fn parse_selection(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok()?.checked_sub(1)
}

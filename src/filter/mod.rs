use crate::model::Member;

/// Case-insensitive substring match against every field of the member.
///
/// An empty query matches every member.
pub fn matches(member: &Member, query: &str) -> bool {
    matches_folded(member, &query.to_lowercase())
}

fn matches_folded(member: &Member, needle: &str) -> bool {
    needle.is_empty()
        || member
            .field_values()
            .iter()
            .any(|value| value.to_lowercase().contains(needle))
}

/// Derives the filtered view from the full set, preserving order.
pub fn search(query: &str, members: &[Member]) -> Vec<Member> {
    let needle = query.to_lowercase();
    members
        .iter()
        .filter(|m| matches_folded(m, &needle))
        .cloned()
        .collect()
}

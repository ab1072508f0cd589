use crate::knowledge::KnowledgeBase;
use crate::models::{CargoType, Destination, MatchResult};
use crate::normalize::normalize_text;

const CARGO_PHRASE_PREFIXES: [&str; 2] = ["tipo de ", "transporte de "];

/// Finds the catalog entities named in an already-normalized inquiry.
///
/// Matching is plain substring containment, not word-aware: a short catalog
/// name also matches inside a longer word of the inquiry.
pub fn match_entities<'kb>(normalized_inquiry: &str, kb: &'kb KnowledgeBase) -> MatchResult<'kb> {
    let destinations = kb
        .destinations()
        .unwrap_or_default()
        .iter()
        .filter(|destination| destination_named(normalized_inquiry, destination))
        .collect();

    let cargo_types = kb
        .cargo_types()
        .unwrap_or_default()
        .iter()
        .filter(|cargo| cargo_type_named(normalized_inquiry, cargo))
        .collect();

    MatchResult {
        destinations,
        cargo_types,
    }
}

fn destination_named(normalized_inquiry: &str, destination: &Destination) -> bool {
    let name = normalize_text(&destination.name);
    !name.is_empty() && normalized_inquiry.contains(&name)
}

fn cargo_type_named(normalized_inquiry: &str, cargo: &CargoType) -> bool {
    let name = normalize_text(&cargo.name);
    if name.is_empty() {
        return false;
    }

    normalized_inquiry.contains(&name)
        || CARGO_PHRASE_PREFIXES
            .iter()
            .any(|prefix| normalized_inquiry.contains(&format!("{prefix}{name}")))
}

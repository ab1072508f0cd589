use crate::normalize::{contains_any, normalize_text};

/// Category keywords that steer the intent resolvers.
///
/// Entries may be written with accents or capitals; they are normalized
/// before being compared against an inquiry.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordSets {
    pub pricing: Vec<String>,
    pub transit_time: Vec<String>,
    pub general_service: Vec<String>,
}

impl Default for KeywordSets {
    fn default() -> Self {
        Self {
            pricing: owned(&["preco", "custo", "quanto custa", "tarifas", "cotacao"]),
            transit_time: owned(&["tempo", "transito", "quanto tempo", "demora", "prazo"]),
            general_service: owned(&["servicos", "informacao", "ajuda"]),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeywordHits {
    pub pricing: bool,
    pub transit_time: bool,
    pub general_service: bool,
}

impl KeywordSets {
    pub fn scan(&self, normalized_inquiry: &str) -> KeywordHits {
        KeywordHits {
            pricing: hits(normalized_inquiry, &self.pricing),
            transit_time: hits(normalized_inquiry, &self.transit_time),
            general_service: hits(normalized_inquiry, &self.general_service),
        }
    }
}

fn hits(normalized_inquiry: &str, keywords: &[String]) -> bool {
    let needles = keywords
        .iter()
        .map(|keyword| normalize_text(keyword))
        .filter(|keyword| !keyword.is_empty())
        .collect::<Vec<_>>();
    contains_any(normalized_inquiry, &needles)
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

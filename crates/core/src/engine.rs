use crate::composer::ResponseComposer;
use crate::keywords::KeywordSets;
use crate::knowledge::KnowledgeBase;
use crate::matcher::match_entities;
use crate::messages;
use crate::normalize::normalize_text;
use crate::resolvers::{run_resolvers, InquiryContext, Resolver};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Answered,
    NothingFound,
    CatalogUnavailable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub lines: Vec<String>,
    pub destinations_matched: usize,
    pub cargo_types_matched: usize,
    pub fired: Vec<Resolver>,
    pub outcome: Outcome,
}

/// Answers one inquiry against a knowledge base snapshot.
///
/// Total over every input: the result always holds at least one line and no
/// line appears twice.
pub fn resolve(kb: &KnowledgeBase, keywords: &KeywordSets, inquiry: &str) -> Resolution {
    if kb.is_degraded() {
        return Resolution {
            lines: vec![messages::CATALOG_UNAVAILABLE.to_string()],
            destinations_matched: 0,
            cargo_types_matched: 0,
            fired: Vec::new(),
            outcome: Outcome::CatalogUnavailable,
        };
    }

    let normalized = normalize_text(inquiry);
    let ctx = InquiryContext {
        normalized: &normalized,
        kb,
        matched: match_entities(&normalized, kb),
        keywords: keywords.scan(&normalized),
    };

    let mut out = ResponseComposer::new();
    let fired = run_resolvers(&ctx, &mut out);
    let outcome = if fired.contains(&Resolver::Fallback) {
        Outcome::NothingFound
    } else {
        Outcome::Answered
    };

    Resolution {
        lines: out.finish(),
        destinations_matched: ctx.matched.destinations.len(),
        cargo_types_matched: ctx.matched.cargo_types.len(),
        fired,
        outcome,
    }
}

pub fn resolve_inquiry(kb: &KnowledgeBase, keywords: &KeywordSets, inquiry: &str) -> Vec<String> {
    resolve(kb, keywords, inquiry).lines
}

pub mod composer;
pub mod engine;
pub mod keywords;
pub mod knowledge;
pub mod matcher;
pub mod messages;
pub mod models;
pub mod normalize;
pub mod resolvers;

#[cfg(test)]
mod fixtures;

pub use composer::ResponseComposer;
pub use engine::{resolve, resolve_inquiry, Outcome, Resolution};
pub use keywords::{KeywordHits, KeywordSets};
pub use knowledge::KnowledgeBase;
pub use matcher::match_entities;
pub use models::*;
pub use normalize::normalize_text;
pub use resolvers::{InquiryContext, Resolver};

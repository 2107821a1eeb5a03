//! Automatic column mapping between a marketplace template and a seller file.
//!
//! The engine is a set of pure functions over immutable inputs:
//!
//! - [`normalize_name`] reduces a name to lowercase ASCII alphanumerics
//! - [`similarity`] scores two raw names
//! - [`suggest_defaults`] proposes a conflict-free target-to-source assignment
//! - [`merge_defaults`] folds a proposal into a caller-held assignment without
//!   overwriting manual choices
//!
//! [`MappingSession`] wraps these for callers that want a command-driven
//! editing workflow; it owns all mutable state, the engine owns none.

#![deny(unsafe_code)]

mod check;
mod engine;
mod error;
mod merge;
mod normalize;
mod score;
mod state;

pub use check::{CompletenessReport, check_completeness, summarize};
pub use engine::{MatchKind, Suggestion, suggest, suggest_defaults};
pub use error::{MappingError, Result};
pub use merge::merge_defaults;
pub use normalize::normalize_name;
pub use score::{ACCEPT_THRESHOLD, Candidate, SUBSTRING_SCORE, rank_candidates, similarity};
pub use state::{MappingSession, SessionCommand};

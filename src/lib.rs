//! Merges item statistics from the remote item database into the bilingual localization file.
//!
//! Text is loaded into a [`TextCorpus`], every [`Ruleset`] proposes candidate id sets and renders
//! text for the ids they resolve to, and the [`GenerationDriver`] writes the merged result.

pub mod corpus;
pub mod error;
pub mod functions;
pub mod generate;
pub mod resolver;
pub mod ruleset;
pub mod settings;
pub mod statics;
pub mod types;

pub use corpus::{GenerateReport, TextCorpus};
pub use error::{Error, Result};
pub use generate::{ApplyReport, GenerationDriver};
pub use resolver::IdResolver;
pub use ruleset::{Ruleset, RulesetOverrides};
pub use settings::Settings;
pub use types::*;

//! Core contracts for Packlab learning packs.
//!
//! This crate defines the canonical pack types, the cross-field invariant
//! checks, and the validation report vocabulary shared by the parsing and
//! scoring crates.

pub mod model;
pub mod report;
pub mod sample;
pub mod validate;

pub use model::{AnswerOption, Item, ItemKind, Pack};
pub use report::{IssueSeverity, ValidationIssue, ValidationReport};
pub use sample::sample_pack;
pub use validate::{validate_item, validate_pack};

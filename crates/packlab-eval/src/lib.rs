//! Heuristic quality scoring for validated packs.

pub mod quality;

pub use quality::{score_pack, QualityReport};

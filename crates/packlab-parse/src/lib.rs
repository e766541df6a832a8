//! Parsing pipeline for learning packs.
//!
//! Raw JSON text from a pasted snippet, an uploaded file, or a URL flows
//! through a lenient preprocessor, a structural JSON parse, and a schema
//! check that collects every violation with its field path. A separate
//! auto-fix pass repairs structurally incomplete drafts without inventing
//! correctness.

pub mod autofix;
pub mod errors;
pub mod parse;
pub mod preprocess;
pub mod schema;
mod shape;
pub mod source;

pub use autofix::{auto_fix, fix_pack_text};
pub use errors::{ParseError, Result};
pub use parse::{parse_pack_text, parse_pack_value};
pub use preprocess::preprocess;
pub use schema::pack_json_schema;
pub use source::{parse_from_source, parse_pack_file, parse_pack_url, read_source, PackSource};

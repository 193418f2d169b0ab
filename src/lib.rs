//! Post-processing for generated OpenAPI 3.0 documents.
//!
//! Two fixes, applied in order:
//! - [`normalize::normalize`] collapses `["integer"|"number", "string"]` type
//!   unions back to the numeric type.
//! - [`enums::rewrite_enums`] replaces integer-described enums that the API
//!   actually sends as strings with explicit string enums.
pub mod cli;
pub mod document;
pub mod enums;
pub mod fixup;
pub mod normalize;

pub use fixup::{FixSummary, fix_document, fix_file};

//! The fix pipeline: normalize type unions, then rewrite string enums.
use std::path::Path;

use anyhow::Result;
use serde_json::Value;
use tracing::info;

use crate::document::{read_document, write_document};
use crate::enums::rewrite_enums;
use crate::normalize::normalize;

/// What a fix pass changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixSummary {
    /// numeric/string `type` unions collapsed
    pub type_unions: usize,
    /// known enum schemas replaced, in table order
    pub string_enums: Vec<&'static str>,
}

pub fn fix_document(spec: &mut Value) -> FixSummary {
    let type_unions = normalize(spec);
    let string_enums = rewrite_enums(spec);
    FixSummary { type_unions, string_enums }
}

/// Read `input`, fix it, write the result to `output` (which may be `input`).
pub fn fix_file(input: &Path, output: &Path) -> Result<FixSummary> {
    let mut spec = read_document(input)?;
    let summary = fix_document(&mut spec);
    write_document(output, &spec)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        type_unions = summary.type_unions,
        string_enums = ?summary.string_enums,
        "fixed OpenAPI document"
    );
    Ok(summary)
}

// ------------------------------- Tests ------------------------------------ //

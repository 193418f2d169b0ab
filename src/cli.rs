//! Minimal CLI: fix an OpenAPI JSON document in place (or into a second file)
use std::path::{Path, PathBuf};
use clap::Parser;

pub const DEFAULT_INPUT: &str = "openapi/v1.json";

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// collapse numeric/string type unions and restore string enums in a generated OpenAPI document
#[derive(Parser, Debug)]
#[command(name = "openapi-fixup", version)]
pub struct CommandLineInterface {
    /// OpenAPI JSON document to fix
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// where to write the fixed document (overwrites the input if omitted)
    output: Option<PathBuf>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn input_path(&self) -> &Path {
        &self.input
    }
    pub fn output_path(&self) -> &Path {
        self.output.as_deref().unwrap_or(&self.input)
    }
    pub fn run(&self) -> anyhow::Result<()> {
        let output = self.output_path();
        crate::fixup::fix_file(self.input_path(), output)?;
        println!("{}", confirmation_line(output));
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn confirmation_line(output: &Path) -> String {
    format!("Fixed OpenAPI spec: {}", output.display())
}

//! `folio render` command implementation.

use std::path::PathBuf;

use clap::Args;
use folio_renderer::Mode;

use super::GlobalArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args, Debug)]
pub(crate) struct RenderArgs {
    /// Markdown file to render.
    file: PathBuf,

    /// Output mode: document or terminal (overrides config).
    #[arg(short, long)]
    mode: Option<Mode>,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the file cannot be read.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let config = global.load_config(self.mode)?;

        let markdown = std::fs::read_to_string(&self.file).map_err(|e| {
            std::io::Error::new(e.kind(), format!("{}: {e}", self.file.display()))
        })?;

        let html = folio_renderer::render(&markdown, config.render.mode);
        output.line(&html)?;
        Ok(())
    }
}

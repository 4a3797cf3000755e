//! `folio grep` command implementation.

use clap::Args;

use super::{GlobalArgs, open_blog};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the grep command.
#[derive(Args, Debug)]
pub(crate) struct GrepArgs {
    /// Keyword matched against post titles, previews and tags (case-insensitive).
    keyword: String,
}

impl GrepArgs {
    /// Execute the grep command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the manifest cannot be loaded.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let config = global.load_config(None)?;
        let blog = open_blog(&config);

        output.info(&format!("Searching for \"{}\"...", self.keyword));
        let posts = blog.search(&self.keyword)?;
        tracing::info!(keyword = %self.keyword, results = posts.len(), "Searched posts");

        for post in &posts {
            output.line(&format!("▶ LOG_{}: {}", post.id, post.title))?;
            if !post.preview.is_empty() {
                output.line(&format!("  {}", post.preview))?;
            }
            output.line("")?;
        }

        if posts.is_empty() {
            output.warning(&summary(0));
        } else {
            output.success(&summary(posts.len()));
        }
        Ok(())
    }
}

/// Result count line.
fn summary(count: usize) -> String {
    if count == 0 {
        "No results found".to_owned()
    } else {
        format!("Found {count} result(s)")
    }
}

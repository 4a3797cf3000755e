//! `folio read` command implementation.

use clap::Args;
use folio_blog::BlogError;
use folio_renderer::Mode;

use super::{GlobalArgs, open_blog};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the read command.
#[derive(Args, Debug)]
pub(crate) struct ReadArgs {
    /// Post id from the manifest (e.g., 001).
    id: String,

    /// Output mode: document or terminal (overrides config).
    #[arg(short, long)]
    mode: Option<Mode>,
}

impl ReadArgs {
    /// Execute the read command.
    ///
    /// # Errors
    ///
    /// Returns an error if the post is unknown or cannot be loaded.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let config = global.load_config(self.mode)?;
        let blog = open_blog(&config);

        let rendered = match blog.render_post(&self.id, config.render.mode) {
            Ok(rendered) => rendered,
            Err(err @ BlogError::PostNotFound(_)) => {
                if let Ok(manifest) = blog.manifest() {
                    let ids: Vec<&str> = manifest.posts.iter().map(|p| p.id.as_str()).collect();
                    output.info(&format!("Available logs: {}", ids.join(", ")));
                }
                return Err(err.into());
            }
            Err(err) => return Err(err.into()),
        };

        output.highlight(&format!("LOG_{} - {}", rendered.post.id, rendered.post.title));
        output.line(&rendered.html)?;
        output.separator();
        output.info("Use 'folio logs' to view all logs");
        Ok(())
    }
}

//! `folio logs` command implementation.

use folio_blog::Post;

use super::{GlobalArgs, open_blog};
use crate::error::CliError;
use crate::output::Output;

/// List every post in the manifest.
///
/// # Errors
///
/// Returns an error if configuration fails or the manifest cannot be loaded.
pub(crate) fn execute(global: &GlobalArgs) -> Result<(), CliError> {
    let output = Output::new();
    let config = global.load_config(None)?;
    let blog = open_blog(&config);
    let manifest = blog.manifest()?;

    output.success("SYSTEM LOGS");
    output.separator();

    if manifest.posts.is_empty() {
        output.warning("No logs published");
        return Ok(());
    }

    for post in &manifest.posts {
        output.line(&format!("{} {}", output.status_tag(post), entry_title(post)))?;
        if let Some(meta) = entry_meta(post) {
            output.line(&format!("    {meta}"))?;
        }
        if !post.preview.is_empty() {
            output.line(&format!("    {}", post.preview))?;
        }
        output.line("")?;
    }

    output.info("Use 'folio read <ID>' to open a log");
    Ok(())
}

fn entry_title(post: &Post) -> String {
    format!("LOG_{} - {}", post.id, post.title)
}

/// Date and tags line, if the post has either.
fn entry_meta(post: &Post) -> Option<String> {
    let tags = post.tags.join(", ");
    match (post.date.is_empty(), tags.is_empty()) {
        (true, true) => None,
        (false, true) => Some(post.date.clone()),
        (true, false) => Some(tags),
        (false, false) => Some(format!("{} | {tags}", post.date)),
    }
}

//! CLI command implementations.

pub(crate) mod grep;
pub(crate) mod logs;
pub(crate) mod read;
pub(crate) mod render;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use folio_blog::{Blog, BlogConfig};
use folio_cache::{Cache, MemoryCache, NullCache};
use folio_config::{CliSettings, Config};
use folio_renderer::Mode;
use folio_storage::FsStorage;

use crate::error::CliError;

pub(crate) use grep::GrepArgs;
pub(crate) use read::ReadArgs;
pub(crate) use render::RenderArgs;

/// Options shared by all commands.
#[derive(Args, Debug)]
pub(crate) struct GlobalArgs {
    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding manifest.json and the posts (overrides config).
    #[arg(long, global = true, env = "FOLIO_CONTENT_DIR")]
    content_dir: Option<PathBuf>,

    /// Disable caching.
    #[arg(long, global = true)]
    no_cache: bool,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    /// Load configuration, letting command-line flags take precedence.
    pub(crate) fn load_config(&self, mode: Option<Mode>) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            content_dir: self.content_dir.clone(),
            mode,
            cache_enabled: self.no_cache.then_some(false),
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }
}

/// Open the blog in the configured content directory.
pub(crate) fn open_blog(config: &Config) -> Blog {
    let cache: Box<dyn Cache> = if config.cache.enabled {
        Box::new(MemoryCache::new())
    } else {
        Box::new(NullCache)
    };
    tracing::debug!(
        dir = %config.content_resolved.dir.display(),
        cache = config.cache.enabled,
        "Opening blog"
    );

    let storage = Arc::new(FsStorage::new(config.content_resolved.dir.clone()));
    let blog_config = BlogConfig {
        manifest_path: config.content_resolved.manifest.clone(),
    };
    Blog::new(storage, cache.as_ref(), blog_config)
}

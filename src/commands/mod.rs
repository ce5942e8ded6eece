use std::path::PathBuf;

use sitekick::config::Site;

pub mod build;
pub mod clean;
pub mod preview;
pub mod publish;
pub mod serve;

pub type CmdResult<T> = sitekick::Result<(T, i32)>;

/// Flags shared by every subcommand, resolved once in main.
pub struct GlobalArgs {
    pub site_root: PathBuf,
    pub generator: Option<String>,
}

impl GlobalArgs {
    /// Resolve the site configuration for this invocation, applying the
    /// global generator override on top of the settings selection.
    pub fn resolve_site(&self, settings_override: Option<&str>) -> sitekick::Result<Site> {
        let mut site = Site::resolve(&self.site_root, settings_override)?;
        if let Some(generator) = &self.generator {
            site.generator = generator.clone();
        }
        Ok(site)
    }
}

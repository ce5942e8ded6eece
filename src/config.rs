//! Site configuration resolution.
//!
//! Everything a task needs is resolved once at startup into a [`Site`] and
//! passed explicitly into each task. The settings files themselves belong to
//! the generator; the only key the runner reads out of them is `OUTPUT_PATH`.

use std::path::{Path, PathBuf};

use crate::{Error, Result};

pub const DEFAULT_SETTINGS_FILE: &str = "settings.py";
pub const LOCAL_SETTINGS_FILE: &str = "local_settings.py";
pub const PREVIEW_SETTINGS_FILE: &str = "preview_settings.py";
pub const CONTENT_DIR: &str = "content";
pub const DEFAULT_OUTPUT_PATH: &str = "output";
pub const DEFAULT_GENERATOR: &str = "pelican";
pub const DEFAULT_REMOTE: &str = "origin";
pub const DEFAULT_BRANCH: &str = "master";

/// Resolved site layout and publish target for one invocation.
#[derive(Debug, Clone)]
pub struct Site {
    pub root: PathBuf,
    pub settings_file: PathBuf,
    pub content_dir: PathBuf,
    pub output_dir: PathBuf,
    pub generator: String,
    pub remote: String,
    pub branch: String,
}

impl Site {
    /// Resolve the effective configuration for a site root.
    ///
    /// Selection order: explicit override → `local_settings.py` →
    /// `settings.py`. No candidate found is fatal.
    pub fn resolve(root: &Path, settings_override: Option<&str>) -> Result<Self> {
        let settings_file = resolve_settings_file(root, settings_override)?;
        let output_path =
            read_output_path(&settings_file)?.unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());

        Ok(Site {
            root: root.to_path_buf(),
            settings_file,
            content_dir: root.join(CONTENT_DIR),
            output_dir: root.join(output_path),
            generator: DEFAULT_GENERATOR.to_string(),
            remote: DEFAULT_REMOTE.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
        })
    }

    /// Variant of this site using the preview settings file when one exists.
    ///
    /// Preview settings differ from production only in pointing asset
    /// references at local paths; with no preview file present the effective
    /// settings are reused as-is.
    pub fn for_preview(&self) -> Result<Self> {
        let preview = self.root.join(PREVIEW_SETTINGS_FILE);
        if preview.exists() {
            let mut site = Site::resolve(&self.root, Some(PREVIEW_SETTINGS_FILE))?;
            site.generator = self.generator.clone();
            site.remote = self.remote.clone();
            site.branch = self.branch.clone();
            Ok(site)
        } else {
            Ok(self.clone())
        }
    }
}

fn resolve_settings_file(root: &Path, settings_override: Option<&str>) -> Result<PathBuf> {
    if let Some(name) = settings_override {
        let path = if Path::new(name).is_absolute() {
            PathBuf::from(name)
        } else {
            root.join(name)
        };
        if !path.exists() {
            return Err(Error::SettingsNotFound(path.display().to_string()));
        }
        return Ok(path);
    }

    let local = root.join(LOCAL_SETTINGS_FILE);
    if local.exists() {
        return Ok(local);
    }

    let default = root.join(DEFAULT_SETTINGS_FILE);
    if default.exists() {
        return Ok(default);
    }

    Err(Error::SettingsNotFound(format!(
        "neither {} nor {} in {}",
        LOCAL_SETTINGS_FILE,
        DEFAULT_SETTINGS_FILE,
        root.display()
    )))
}

/// Scan a settings file for the `OUTPUT_PATH` assignment.
///
/// Returns None when the key is absent; the generator's own default applies
/// then. Values may be single- or double-quoted, optionally followed by a
/// comment.
fn read_output_path(settings_file: &Path) -> Result<Option<String>> {
    let contents = std::fs::read_to_string(settings_file)?;

    for line in contents.lines() {
        let line = line.trim();
        let Some(rest) = line.strip_prefix("OUTPUT_PATH") else {
            continue;
        };
        let Some(value) = rest.trim_start().strip_prefix('=') else {
            continue;
        };
        let value = value.trim();

        if let Some(quote) = value.chars().next().filter(|c| *c == '\'' || *c == '"') {
            if let Some(end) = value[1..].find(quote) {
                return Ok(Some(value[1..1 + end].to_string()));
            }
        }

        // Unquoted value: take up to whitespace or comment
        let bare: String = value
            .chars()
            .take_while(|c| !c.is_whitespace() && *c != '#')
            .collect();
        if !bare.is_empty() {
            return Ok(Some(bare));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(root: &Path, name: &str, contents: &str) {
        std::fs::write(root.join(name), contents).unwrap();
    }

    #[test]
    fn default_settings_selected_when_no_override() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "settings.py", "OUTPUT_PATH = 'output'\n");

        let site = Site::resolve(dir.path(), None).unwrap();
        assert_eq!(site.settings_file, dir.path().join("settings.py"));
        assert_eq!(site.output_dir, dir.path().join("output"));
    }

    #[test]
    fn local_settings_takes_precedence_over_default() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "settings.py", "OUTPUT_PATH = 'output'\n");
        write(dir.path(), "local_settings.py", "OUTPUT_PATH = 'dist'\n");

        let site = Site::resolve(dir.path(), None).unwrap();
        assert_eq!(site.settings_file, dir.path().join("local_settings.py"));
        assert_eq!(site.output_dir, dir.path().join("dist"));
    }

    #[test]
    fn explicit_override_beats_local_settings() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "local_settings.py", "OUTPUT_PATH = 'dist'\n");
        write(dir.path(), "publish.py", "OUTPUT_PATH = 'public'\n");

        let site = Site::resolve(dir.path(), Some("publish.py")).unwrap();
        assert_eq!(site.settings_file, dir.path().join("publish.py"));
        assert_eq!(site.output_dir, dir.path().join("public"));
    }

    #[test]
    fn missing_override_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "settings.py", "");

        let err = Site::resolve(dir.path(), Some("nope.py")).unwrap_err();
        assert!(matches!(err, Error::SettingsNotFound(_)));
    }

    #[test]
    fn no_settings_at_all_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = Site::resolve(dir.path(), None).unwrap_err();
        assert!(matches!(err, Error::SettingsNotFound(_)));
    }

    #[test]
    fn output_path_defaults_when_key_absent() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "settings.py", "SITENAME = 'My Site'\n");

        let site = Site::resolve(dir.path(), None).unwrap();
        assert_eq!(site.output_dir, dir.path().join("output"));
    }

    #[test]
    fn output_path_parses_double_quotes_and_comments() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "settings.py",
            "AUTHOR = 'Someone'\nOUTPUT_PATH = \"www\"  # rendered site\n",
        );

        let site = Site::resolve(dir.path(), None).unwrap();
        assert_eq!(site.output_dir, dir.path().join("www"));
    }

    #[test]
    fn preview_prefers_preview_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "settings.py", "OUTPUT_PATH = 'output'\n");
        write(dir.path(), "preview_settings.py", "OUTPUT_PATH = 'preview'\n");

        let site = Site::resolve(dir.path(), None).unwrap();
        let preview = site.for_preview().unwrap();
        assert_eq!(
            preview.settings_file,
            dir.path().join("preview_settings.py")
        );
        assert_eq!(preview.output_dir, dir.path().join("preview"));
    }

    #[test]
    fn preview_falls_back_to_effective_settings() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "settings.py", "OUTPUT_PATH = 'output'\n");

        let site = Site::resolve(dir.path(), None).unwrap();
        let preview = site.for_preview().unwrap();
        assert_eq!(preview.settings_file, site.settings_file);
    }
}

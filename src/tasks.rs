//! The build pipeline tasks.
//!
//! Each task is a short linear sequence of sub-steps over external
//! collaborators (generator process, filesystem, git). Tasks share no
//! in-process state; composition happens only by one task calling another
//! (publish and preview both start with a build).

use chrono::Local;
use serde::Serialize;

use crate::config::Site;
use crate::git;
use crate::log_status;
use crate::runner::CommandRunner;
use crate::{Error, Result};

/// Timestamp format used in publication commit messages.
pub const COMMIT_TIMESTAMP_FORMAT: &str = "%d %b %Y %H:%M:%S";

#[derive(Debug, Serialize)]
pub struct BuildOutput {
    pub settings_file: String,
    pub output_dir: String,
}

/// Generate the site into the output directory.
///
/// Invokes the generator with the effective settings file, the content
/// source directory, and the output directory. Generator output is
/// inherited so the operator sees it directly.
pub fn build(site: &Site, runner: &dyn CommandRunner) -> Result<BuildOutput> {
    log_status!(
        "build",
        "Generating site from {}",
        site.settings_file.display()
    );

    let settings = site.settings_file.to_string_lossy();
    let content = site.content_dir.to_string_lossy();
    let output = site.output_dir.to_string_lossy();

    let code = runner.run_interactive(
        &site.root,
        &site.generator,
        &["-s", &settings, "-o", &output, &content],
    )?;
    if code != 0 {
        return Err(Error::Generator(format!(
            "{} exited with status {}",
            site.generator, code
        )));
    }

    Ok(BuildOutput {
        settings_file: settings.into_owned(),
        output_dir: output.into_owned(),
    })
}

#[derive(Debug, Serialize)]
pub struct CleanOutput {
    pub output_dir: String,
    pub removed: bool,
}

/// Remove the output directory.
///
/// A missing output directory is not an error; the tool reports it as
/// already clean. Other removal failures (permissions, busy mounts)
/// propagate.
pub fn clean(site: &Site) -> Result<CleanOutput> {
    let output_dir = site.output_dir.display().to_string();

    match std::fs::remove_dir_all(&site.output_dir) {
        Ok(()) => {
            log_status!("clean", "Removed {}", output_dir);
            Ok(CleanOutput {
                output_dir,
                removed: true,
            })
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log_status!("clean", "Already clean");
            Ok(CleanOutput {
                output_dir,
                removed: false,
            })
        }
        Err(e) => Err(e.into()),
    }
}

/// Serve the output directory with a development file server.
///
/// Blocks until the server process is interrupted. Returns the server's
/// exit code.
pub fn serve(site: &Site, runner: &dyn CommandRunner) -> Result<i32> {
    log_status!(
        "serve",
        "Serving {} (Ctrl-C to stop)",
        site.output_dir.display()
    );
    runner.run_interactive(&site.output_dir, "python3", &["-m", "http.server"])
}

#[derive(Debug, Serialize)]
pub struct PublishOutput {
    pub commit_message: String,
    pub remote: String,
    pub branch: String,
}

/// Build the site, then commit and push the output directory.
///
/// Strictly sequential: the build must succeed before any git sub-step
/// runs, and the first failing git sub-step aborts the rest. Side effects
/// already applied are not rolled back.
pub fn publish(site: &Site, runner: &dyn CommandRunner) -> Result<PublishOutput> {
    build(site, runner)?;

    let now = Local::now().format(COMMIT_TIMESTAMP_FORMAT);
    let commit_message = format!("Publication {}", now);

    log_status!("publish", "Committing generated site");
    git::commit_all(runner, &site.output_dir, &commit_message)?;

    log_status!("publish", "Pushing to {}/{}", site.remote, site.branch);
    git::push(runner, &site.output_dir, &site.remote, &site.branch)?;

    Ok(PublishOutput {
        commit_message,
        remote: site.remote.clone(),
        branch: site.branch.clone(),
    })
}

/// Build with the preview settings, then serve locally. Never pushes.
pub fn preview(site: &Site, runner: &dyn CommandRunner) -> Result<i32> {
    let preview_site = site.for_preview()?;
    build(&preview_site, runner)?;
    serve(&preview_site, runner)
}

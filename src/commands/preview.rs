use sitekick::runner::SystemRunner;
use sitekick::tasks;

use super::GlobalArgs;

/// Build with the preview settings, then serve locally. Interactive
/// passthrough like serve; never touches the remote.
pub fn run(global: &GlobalArgs) -> sitekick::Result<i32> {
    let site = global.resolve_site(None)?;
    tasks::preview(&site, &SystemRunner)
}

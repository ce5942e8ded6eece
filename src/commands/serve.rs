use sitekick::runner::SystemRunner;
use sitekick::tasks;

use super::GlobalArgs;

/// Interactive passthrough: blocks until the dev server is interrupted.
pub fn run(global: &GlobalArgs) -> sitekick::Result<i32> {
    let site = global.resolve_site(None)?;
    tasks::serve(&site, &SystemRunner)
}

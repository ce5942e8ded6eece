use sitekick::tasks::{self, CleanOutput};

use super::{CmdResult, GlobalArgs};

pub fn run(global: &GlobalArgs) -> CmdResult<CleanOutput> {
    let site = global.resolve_site(None)?;
    let output = tasks::clean(&site)?;
    Ok((output, 0))
}

use clap::Args;

use sitekick::runner::SystemRunner;
use sitekick::tasks::{self, BuildOutput};

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct BuildArgs {
    /// Alternate settings file (defaults to local_settings.py when present,
    /// else settings.py)
    pub settings: Option<String>,
}

pub fn run(args: BuildArgs, global: &GlobalArgs) -> CmdResult<BuildOutput> {
    let site = global.resolve_site(args.settings.as_deref())?;
    let output = tasks::build(&site, &SystemRunner)?;
    Ok((output, 0))
}

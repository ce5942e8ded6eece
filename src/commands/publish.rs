use clap::Args;

use sitekick::config::{DEFAULT_BRANCH, DEFAULT_REMOTE};
use sitekick::runner::SystemRunner;
use sitekick::tasks::{self, PublishOutput};

use super::{CmdResult, GlobalArgs};

#[derive(Args)]
pub struct PublishArgs {
    /// Git remote the generated site is pushed to
    #[arg(long, default_value = DEFAULT_REMOTE)]
    pub remote: String,

    /// Branch the generated site is pushed to
    #[arg(long, default_value = DEFAULT_BRANCH)]
    pub branch: String,
}

pub fn run(args: PublishArgs, global: &GlobalArgs) -> CmdResult<PublishOutput> {
    let mut site = global.resolve_site(None)?;
    site.remote = args.remote;
    site.branch = args.branch;

    let output = tasks::publish(&site, &SystemRunner)?;
    Ok((output, 0))
}

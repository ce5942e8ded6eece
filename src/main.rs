use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;

mod commands;
mod output;

use commands::{build, clean, preview, publish, serve, CmdResult, GlobalArgs};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "sitekick")]
#[command(version = VERSION)]
#[command(about = "CLI for static-site build, preview, and publish automation")]
struct Cli {
    /// Site root directory (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    site_root: Option<PathBuf>,

    /// Generator binary to invoke instead of pelican
    #[arg(long, global = true, value_name = "BIN")]
    generator: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the site into the output directory
    Build(build::BuildArgs),
    /// Delete the output directory (tolerates it being absent)
    Clean,
    /// Serve the output directory with a blocking development server
    Serve,
    /// Build, then commit and push the generated site
    Publish(publish::PublishArgs),
    /// Build with preview settings and serve locally
    Preview,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let site_root = cli
        .site_root
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));
    let global = GlobalArgs {
        site_root,
        generator: cli.generator,
    };

    let exit_code = match cli.command {
        Commands::Build(args) => respond(build::run(args, &global)),
        Commands::Clean => respond(clean::run(&global)),
        Commands::Serve => passthrough(serve::run(&global)),
        Commands::Publish(args) => respond(publish::run(args, &global)),
        Commands::Preview => passthrough(preview::run(&global)),
    };

    ExitCode::from(exit_code_to_u8(exit_code))
}

/// Print the JSON envelope for a non-interactive task and map to an exit
/// code.
fn respond<T: Serialize>(result: CmdResult<T>) -> i32 {
    match result {
        Ok((data, exit_code)) => {
            output::print_success(data);
            exit_code
        }
        Err(err) => {
            output::print_error(&err);
            output::exit_code_for_error(&err)
        }
    }
}

/// Interactive tasks inherit their process output; only failures to start
/// are reported here.
fn passthrough(result: sitekick::Result<i32>) -> i32 {
    match result {
        Ok(exit_code) => exit_code,
        Err(err) => {
            eprintln!("{}", err);
            output::exit_code_for_error(&err)
        }
    }
}

fn exit_code_to_u8(code: i32) -> u8 {
    if (0..=255).contains(&code) {
        code as u8
    } else {
        1
    }
}

//! avatar-clippy CLI
//!
//! Usage:
//!   avatar-clippy scene.json                   # Check and print diagnostics
//!   avatar-clippy scene.json --json            # JSON report
//!   avatar-clippy scene.json --fail-on-issues  # Exit 1 when anything is reported

use std::path::PathBuf;
use std::process::ExitCode;
use clap::Parser;
use env_logger::Env;
use log::{error, info};

use avatar_clippy::core::{load_scene, Checker};
use avatar_clippy::types::Report;
use avatar_clippy::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "avatar-clippy",
    version = VERSION,
    about = "Lint a configured avatar for common setup mistakes",
    long_about = "avatar-clippy checks the avatar in an exported scene snapshot.\n\n\
                  It inspects eye-look rotations, playable layers and their state\n\
                  machines, animation clips and scene materials, and prints one\n\
                  line per problem found:\n\n  \
                  A0009: The state \"Idle\" in layer Base of the FX controller has no transitions."
)]
struct Args {
    /// Scene snapshot (JSON) to check
    scene: PathBuf,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Log traversal details
    #[arg(short, long)]
    verbose: bool,

    /// Exit with status 1 when any diagnostic is reported
    #[arg(long)]
    fail_on_issues: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    if args.no_color {
        colored::control::set_override(false);
    }

    info!("avatar-clippy v{}", VERSION);

    let scene = match load_scene(&args.scene) {
        Ok(scene) => scene,
        Err(e) => {
            error!("{}", e);
            eprintln!("error[{}]: {}", e.error_code(), e);
            return ExitCode::from(2);
        }
    };

    let mut checker = Checker::new();
    let report = Report::new(checker.check(&scene));

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                return ExitCode::from(2);
            }
        }
    } else if args.no_color {
        println!("{}", report.to_parseable_string());
    } else {
        println!("{}", report.to_terminal_string());
    }

    if args.fail_on_issues && !report.is_clean() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

//! Batch entry point: migrate every file in the target list
//!
//! Always exits 0; per-file problems are logged and counted in the summary.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use provmig_core::{log_debug, log_error, log_info};
use provmig_core::{resolve_target_list, BatchMigrator, ConsoleLogger, SharedLogger};

#[derive(Parser, Debug)]
#[command(name = "update-all-providers")]
#[command(about = "Nest every provider config under `default` across the configured target files")]
#[command(version)]
struct Cli {
    /// Target list file (YAML). Defaults to .config/provmig/targets.yaml, then the user config, then the built-in list
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory the target list is resolved against
    #[arg(long, value_name = "DIR", default_value = ".")]
    root: PathBuf,

    /// Print the run report as JSON
    #[arg(long)]
    json: bool,

    /// Print debug messages
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let logger: SharedLogger = Arc::new(ConsoleLogger::new().verbose(cli.verbose));

    let resolved = match resolve_target_list(cli.config.as_deref(), &cli.root) {
        Ok(resolved) => resolved,
        Err(err) => {
            log_error!(logger, "Failed to load target list: {}", err);
            return;
        }
    };
    log_debug!(logger, "Using {} ({} target(s))", resolved.source, resolved.targets.len());

    let report = BatchMigrator::from_resolved(resolved, Arc::clone(&logger)).run();

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(err) => log_error!(logger, "Failed to serialize report: {}", err),
        }
    } else {
        log_info!(logger, "Done: {}", report.summary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["update-all-providers"]).unwrap();
        assert!(cli.config.is_none());
        assert_eq!(cli.root, PathBuf::from("."));
        assert!(!cli.json);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "update-all-providers",
            "--config",
            "targets.yaml",
            "--root",
            "packages/bridge",
            "--json",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("targets.yaml")));
        assert_eq!(cli.root, PathBuf::from("packages/bridge"));
        assert!(cli.json);
        assert!(cli.verbose);
    }
}

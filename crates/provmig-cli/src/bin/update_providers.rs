//! Single-file entry point: migrate one file in place
//!
//! Exits 1 on a usage error or when the file cannot be read or written.

use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use provmig_core::{log_error, log_info};
use provmig_core::{migrate_file, ConsoleLogger, Logger};

#[derive(Parser, Debug)]
#[command(name = "update-providers")]
#[command(about = "Nest the provider configs of one file under `default`")]
#[command(version)]
struct Cli {
    /// File to rewrite in place
    file_path: PathBuf,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => err.exit(),
        Err(_) => {
            eprintln!("Usage: update-providers <file_path>");
            process::exit(1);
        }
    };

    let logger = ConsoleLogger::new();
    match migrate_file(&cli.file_path, &logger) {
        Ok(_) => log_info!(logger, "Successfully updated {}", cli.file_path.display()),
        Err(err) => {
            log_error!(logger, "Error processing {}: {}", cli.file_path.display(), err);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_positional() {
        let cli = Cli::try_parse_from(["update-providers", "src/index.ts"]).unwrap();
        assert_eq!(cli.file_path, PathBuf::from("src/index.ts"));
    }

    #[test]
    fn test_wrong_argument_count() {
        let missing = Cli::try_parse_from(["update-providers"]).unwrap_err();
        assert_eq!(missing.kind(), ErrorKind::MissingRequiredArgument);

        assert!(Cli::try_parse_from(["update-providers", "a.ts", "b.ts"]).is_err());
    }
}

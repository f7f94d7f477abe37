//! spec-improver - A tool to improve component specifications

use clap::Parser;
use colored::*;
use tracing_subscriber::EnvFilter;

use spec_improver::cli::{run_command, Cli};
use spec_improver::Error;

/// Filter directive: `--verbose` wins over RUST_LOG, which wins over `warn`
fn log_directive(verbose: bool, rust_log: Option<String>) -> String {
    if verbose {
        return "debug".to_string();
    }
    rust_log
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| "warn".to_string())
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays parseable
    let directive = log_directive(cli.verbose, std::env::var(EnvFilter::DEFAULT_ENV).ok());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run_command(cli.command) {
        eprintln!("{} {}", "error:".red().bold(), err);

        let code = err.downcast_ref::<Error>().map(Error::exit_code).unwrap_or(1);
        std::process::exit(code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_overrides_rust_log() {
        assert_eq!(log_directive(true, Some("error".to_string())), "debug");
        assert_eq!(log_directive(true, None), "debug");
    }

    #[test]
    fn test_rust_log_then_default() {
        assert_eq!(log_directive(false, Some("spec_improver=info".to_string())), "spec_improver=info");
        assert_eq!(log_directive(false, Some("  ".to_string())), "warn");
        assert_eq!(log_directive(false, None), "warn");
    }
}

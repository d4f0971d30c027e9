use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use walkdir::WalkDir;

use tagcheck_core::{CheckConfig, Report, DEFAULT_CONFIG_FILE};
use tagcheck_engine::FieldAuditor;
use tagcheck_go::GoParser;

mod output;

use output::TabSink;

/// tagcheck - struct tag consistency checker for Go sources
#[derive(Parser)]
#[command(name = "tagcheck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Go source files or directories to check
    paths: Vec<PathBuf>,

    /// Check for anagrams (commonly misspellings)
    #[arg(long)]
    anagram: bool,

    /// Match field names to tag names un-camelcased. Ex: WalterWhite -> walter_white
    #[arg(long, alias = "un_camel_case")]
    un_camel_case: bool,

    /// Ensure all tags on a field match the first one
    #[arg(long, alias = "all_tags_match")]
    all_tags_match: bool,

    /// Report if levenshtein distance > n (reserved, not applied yet)
    #[arg(long, value_name = "N")]
    levenshtein: Option<u32>,

    /// Path to config file (default: tagcheck.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Layer command-line switches over the file configuration
    fn apply(&self, config: CheckConfig) -> CheckConfig {
        let config = config
            .with_anagrams(config.detect_anagrams || self.anagram)
            .with_normalize(config.normalize_before_compare || self.un_camel_case)
            .with_all_tags_match(config.all_tags_match || self.all_tags_match);

        match self.levenshtein {
            Some(threshold) => config.with_levenshtein(threshold),
            None => config,
        }
    }

    /// Whether any behavior option was passed, whatever its value
    fn any_option_given(&self) -> bool {
        self.anagram || self.un_camel_case || self.all_tags_match || self.levenshtein.is_some()
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Load config if specified
    let config = if let Some(config_path) = &cli.config {
        CheckConfig::from_file(config_path)?
    } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
        CheckConfig::from_file(Path::new(DEFAULT_CONFIG_FILE))?
    } else {
        if cli.verbose {
            eprintln!("{}", "No config file found, using defaults".yellow());
        }
        CheckConfig::default()
    };
    let config = cli.apply(config);

    if cli.paths.is_empty() || !(cli.any_option_given() || config.any_mode_enabled()) {
        print_usage()?;
        std::process::exit(1);
    }

    if cli.verbose {
        eprintln!("{}", "Using config:".cyan());
        eprint!("{}", config.to_toml()?);
    }

    check_command(&config, &cli.paths, cli.verbose)
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn print_usage() -> Result<()> {
    println!("tagcheck usage:");
    println!("tagcheck [-flags] source.go");
    println!();
    Cli::command().print_help()?;
    Ok(())
}

/// Check command - audit every tagged struct field in the given sources
fn check_command(config: &CheckConfig, paths: &[PathBuf], verbose: bool) -> Result<()> {
    if config.levenshtein_threshold > 0 {
        tracing::warn!(
            threshold = config.levenshtein_threshold,
            "levenshtein threshold is accepted but not applied"
        );
    }

    let sources = collect_sources(paths)?;
    let parser = GoParser::new();
    let auditor = FieldAuditor::new(config);

    let mut sink = TabSink::new(std::io::stdout().lock());
    let mut report = Report::new();

    for path in &sources {
        if verbose {
            eprintln!("  {} {}...", "Checking".cyan(), path.display());
        }

        let parsed = match parser.parse_file(path) {
            Ok(parsed) => parsed,
            Err(e) => {
                // findings so far are still reported before bailing out
                sink.flush().context("failed to write diagnostics")?;
                eprintln!("{} {}", "error:".red().bold(), e);
                std::process::exit(1);
            }
        };
        report.record_file();

        for field in parsed.field_declarations() {
            report.record_field();
            for diagnostic in auditor.audit(&field) {
                report.add_diagnostic(&diagnostic);
                sink.push(&diagnostic);
            }
        }
    }

    sink.flush().context("failed to write diagnostics")?;

    if verbose {
        print_report_summary(&report);
    }

    Ok(())
}

/// Expand directories into their `.go` files, keeping the given order
fn collect_sources(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut sources = Vec::new();

    for path in paths {
        if !path.is_dir() {
            sources.push(path.clone());
            continue;
        }

        for entry in WalkDir::new(path).sort_by_file_name() {
            let entry = entry.with_context(|| format!("failed to walk {}", path.display()))?;
            let is_go = entry.path().extension().is_some_and(|ext| ext == "go");
            if entry.file_type().is_file() && is_go {
                sources.push(entry.into_path());
            }
        }
    }

    tracing::debug!(count = sources.len(), "collected source files");
    Ok(sources)
}

/// Print run summary to stderr
fn print_report_summary(report: &Report) {
    let summary = &report.summary;

    eprintln!();
    eprintln!("{}", "Summary:".bold());
    eprintln!("  Files checked:  {}", summary.files_checked);
    eprintln!("  Fields checked: {}", summary.fields_checked);
    eprintln!("  Mismatches:     {}", summary.mismatches);
    eprintln!("  Anagrams:       {}", summary.anagrams);
    eprintln!("  Tag mismatches: {}", summary.unexpected_names);

    if report.has_findings() {
        eprintln!("{}", format!("{} findings", summary.total).yellow().bold());
    } else {
        eprintln!("{}", "✓ No issues found!".green().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn underscore_aliases() {
        let cli = Cli::try_parse_from(["tagcheck", "--un_camel_case", "--all_tags_match", "a.go"]).unwrap();
        assert!(cli.un_camel_case);
        assert!(cli.all_tags_match);
        assert_eq!(cli.paths, vec![PathBuf::from("a.go")]);
    }

    #[test]
    fn flags_layer_over_file_config() {
        let cli = Cli::try_parse_from(["tagcheck", "--anagram", "--levenshtein", "3", "a.go"]).unwrap();
        let file = CheckConfig::default().with_normalize(true).with_levenshtein(1);

        assert_eq!(
            cli.apply(file),
            CheckConfig::default()
                .with_normalize(true)
                .with_anagrams(true)
                .with_levenshtein(3)
        );
    }

    #[test]
    fn file_threshold_kept_without_flag() {
        let cli = Cli::try_parse_from(["tagcheck", "a.go"]).unwrap();
        let file = CheckConfig::default().with_levenshtein(2);
        assert_eq!(cli.apply(file).levenshtein_threshold, 2);
    }

    #[test]
    fn explicit_zero_counts_as_an_option() {
        let cli = Cli::try_parse_from(["tagcheck", "--levenshtein", "0", "a.go"]).unwrap();
        assert!(cli.any_option_given());
        assert!(!cli.apply(CheckConfig::default()).any_mode_enabled());

        let cli = Cli::try_parse_from(["tagcheck", "a.go"]).unwrap();
        assert!(!cli.any_option_given());
    }

    #[test]
    fn directories_expand_sorted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("b.go"), "package p\n").unwrap();
        std::fs::write(dir.path().join("a.go"), "package p\n").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "").unwrap();
        std::fs::write(dir.path().join("sub/c.go"), "package p\n").unwrap();

        let explicit = PathBuf::from("explicit.go");
        let sources = collect_sources(&[explicit.clone(), dir.path().to_path_buf()]).unwrap();

        assert_eq!(
            sources,
            vec![
                explicit,
                dir.path().join("a.go"),
                dir.path().join("b.go"),
                dir.path().join("sub/c.go"),
            ]
        );
    }
}

//! Main binary for the eslint-bridge CLI

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use eslint_bridge::{BridgeConfig, CommandOutput, Eslint, LintResult, Linter, ProcessRunner};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    let dir_arg = Arg::new("dir")
        .help("Directory to lint")
        .required(true)
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf));

    Command::new("eslint-bridge")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Run ESLint and normalize its output into a lint report")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (-v info, -vv debug)")
                .action(ArgAction::Count)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a TOML config file")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .global(true),
        )
        .subcommand(
            Command::new("verify")
                .about("Check that npm and ESLint are installed")
                .arg(dir_arg.clone()),
        )
        .subcommand(
            Command::new("lint")
                .about("Lint a directory and print the normalized result")
                .arg(dir_arg.clone())
                .arg(
                    Arg::new("ext")
                        .long("ext")
                        .help("Comma-separated file extensions to lint")
                        .value_name("EXTENSIONS")
                        .value_delimiter(','),
                )
                .arg(
                    Arg::new("args")
                        .long("args")
                        .help("Extra arguments passed to every ESLint invocation")
                        .value_name("ARGS")
                        .allow_hyphen_values(true),
                )
                .arg(
                    Arg::new("fix")
                        .long("fix")
                        .help("Let ESLint fix problems automatically")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("raw")
                        .long("raw")
                        .help("Print the merged ESLint output instead of the parsed result")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse a saved ESLint JSON report")
                .arg(dir_arg)
                .arg(
                    Arg::new("file")
                        .help("ESLint JSON output file")
                        .required(true)
                        .value_name("FILE")
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("status")
                        .long("status")
                        .help("Exit status of the ESLint run that produced the report")
                        .value_name("N")
                        .default_value("0")
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(i32)),
                ),
        )
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_dir(matches: &ArgMatches) -> anyhow::Result<PathBuf> {
    let dir = matches
        .get_one::<PathBuf>("dir")
        .context("missing directory argument")?;
    // ESLint reports absolute paths, so the prefix must be absolute too
    dir.canonicalize()
        .with_context(|| format!("cannot access directory {}", dir.display()))
}

fn print_result(result: &LintResult) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    if !result.is_success {
        std::process::exit(1);
    }
    Ok(())
}

fn run_lint(
    eslint: &Eslint,
    config: &BridgeConfig,
    matches: &ArgMatches,
    dir: &Path,
) -> anyhow::Result<()> {
    let extensions: Vec<String> = match matches.get_many::<String>("ext") {
        Some(values) => values.cloned().collect(),
        None => config.eslint.extensions.clone(),
    };
    let args = matches
        .get_one::<String>("args")
        .cloned()
        .unwrap_or_else(|| config.eslint.args.clone());
    let fix = matches.get_flag("fix") || config.eslint.fix;

    eslint.verify_setup(dir)?;
    let output = eslint.lint(dir, &extensions, &args, fix)?;

    if matches.get_flag("raw") {
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let result = eslint.parse_output(dir, &output)?;
    print_result(&result)
}

fn run_parse(eslint: &Eslint, matches: &ArgMatches, dir: &Path) -> anyhow::Result<()> {
    let file = matches
        .get_one::<PathBuf>("file")
        .context("missing report file argument")?;
    let status = matches.get_one::<i32>("status").copied().unwrap_or(0);
    let stdout = fs::read_to_string(file)
        .with_context(|| format!("cannot read report {}", file.display()))?;

    let result = eslint.parse_output(dir, &CommandOutput::new(status, stdout, None))?;
    print_result(&result)
}

fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();
    init_tracing(matches.get_count("verbose"));

    let config = BridgeConfig::load(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
    let eslint = Eslint::from_config(&config.eslint, ProcessRunner::new());

    match matches.subcommand() {
        Some(("verify", sub_matches)) => {
            let dir = resolve_dir(sub_matches)?;
            eslint.verify_setup(&dir)?;
        }
        Some(("lint", sub_matches)) => {
            let dir = resolve_dir(sub_matches)?;
            run_lint(&eslint, &config, sub_matches, &dir)?;
        }
        Some(("parse", sub_matches)) => {
            let dir = resolve_dir(sub_matches)?;
            run_parse(&eslint, sub_matches, &dir)?;
        }
        _ => {
            eprintln!("No command specified");
            std::process::exit(1);
        }
    }

    Ok(())
}

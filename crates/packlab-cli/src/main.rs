use std::io::Read;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use packlab_core::{sample_pack, ValidationReport};
use packlab_eval::score_pack;
use packlab_parse::{
    fix_pack_text, pack_json_schema, parse_pack_text, parse_pack_value, read_source, PackSource,
    ParseError,
};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

#[derive(Parser, Debug)]
#[command(name = "packlab", version, about = "Learning pack validation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a pack from a file, stdin, or URL.
    Validate(ValidateArgs),
    /// Auto-fix a pack draft and print the repaired JSON.
    Fix(FixArgs),
    /// Validate a pack and print its quality report as JSON.
    Score(InputArgs),
    /// Print the JSON Schema for the pack format.
    Schema,
    /// Print the built-in sample pack.
    Sample,
}

#[derive(Args, Debug)]
struct ValidateArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Run the auto-fixer before validating.
    #[arg(long, default_value_t = false)]
    fix: bool,
    /// Also print the quality report on success.
    #[arg(long, default_value_t = false)]
    quality: bool,
}

#[derive(Args, Debug)]
struct FixArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Write the repaired JSON to a file instead of stdout.
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Path to a pack JSON file, or '-' for stdin.
    #[arg(value_name = "INPUT", conflicts_with = "url")]
    input: Option<PathBuf>,
    /// Fetch the pack JSON from a URL instead.
    #[arg(long, value_name = "URL")]
    url: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(err) = run().await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Validate(args) => run_validate(args).await,
        Command::Fix(args) => run_fix(args).await,
        Command::Score(args) => run_score(args).await,
        Command::Schema => {
            println!("{}", serde_json::to_string_pretty(&pack_json_schema())?);
            Ok(())
        }
        Command::Sample => {
            println!("{}", serde_json::to_string_pretty(&sample_pack())?);
            Ok(())
        }
    }
}

async fn run_validate(args: ValidateArgs) -> Result<(), CliError> {
    let text = read_input(&args.input).await?;

    let outcome = if args.fix {
        fix_pack_text(&text).and_then(|draft| parse_pack_value(&draft))
    } else {
        parse_pack_text(&text)
    };

    let pack = match outcome {
        Ok(pack) => pack,
        Err(ParseError::Schema(report)) => {
            eprintln!("pack validation failed");
            print_report(&report);
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    println!("pack '{}' is valid: {} item(s)", pack.title, pack.items.len());
    if args.quality {
        let quality = score_pack(&pack);
        println!("{}", serde_json::to_string_pretty(&quality)?);
    }
    Ok(())
}

async fn run_fix(args: FixArgs) -> Result<(), CliError> {
    let text = read_input(&args.input).await?;
    let draft = fix_pack_text(&text)?;
    let rendered = serde_json::to_string_pretty(&draft)?;

    match args.out {
        Some(path) => {
            std::fs::write(&path, rendered)?;
            tracing::info!(path = %path.display(), "wrote repaired pack");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

async fn run_score(args: InputArgs) -> Result<(), CliError> {
    let text = read_input(&args).await?;

    let pack = match parse_pack_text(&text) {
        Ok(pack) => pack,
        Err(ParseError::Schema(report)) => {
            eprintln!("pack validation failed");
            print_report(&report);
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    println!("{}", serde_json::to_string_pretty(&score_pack(&pack))?);
    Ok(())
}

async fn read_input(args: &InputArgs) -> Result<String, CliError> {
    if let Some(url) = &args.url {
        return Ok(read_source(&PackSource::Url(url.clone())).await?);
    }

    match &args.input {
        Some(path) if path.as_os_str() == "-" => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        Some(path) => Ok(read_source(&PackSource::File(path.clone())).await?),
        None => Err(CliError::InvalidArgs(
            "provide an input path, '-' for stdin, or --url".to_string(),
        )),
    }
}

fn print_report(report: &ValidationReport) {
    for issue in &report.errors {
        eprintln!("error {} {}: {}", issue.code, issue.path, issue.message);
        if let Some(hint) = &issue.hint {
            eprintln!("  hint: {hint}");
        }
    }
    for issue in &report.warnings {
        eprintln!("warning {} {}: {}", issue.code, issue.path, issue.message);
        if let Some(hint) = &issue.hint {
            eprintln!("  hint: {hint}");
        }
    }
}

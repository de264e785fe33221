use anyhow::Context;
use clap::Parser;
use reverse_array::config::cases::load_test_cases;
use reverse_array::config::toml_config::TomlConfig;
use reverse_array::core::judge::{evaluate, render_report};
use reverse_array::utils::logger;
use reverse_array::utils::validation::{validate_path, validate_required_field, Validate};

#[derive(Parser)]
#[command(name = "reverse-judge")]
#[command(about = "Grade the reverser against a JSON test-case file")]
struct Args {
    /// Path to the test-case file ({"cases": [{"input", "output"}]})
    #[arg(long)]
    cases: Option<String>,

    /// Path to a TOML configuration file ([judge] cases = ...)
    #[arg(short, long)]
    config: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn load_cases(args: &Args) -> anyhow::Result<Vec<reverse_array::TestCase>> {
    let file = match &args.config {
        Some(path) => TomlConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path))?,
        None => TomlConfig::default(),
    };
    file.validate().context("Invalid configuration file")?;

    let cases_path = args.cases.clone().or_else(|| file.cases().map(str::to_string));
    let cases_path = validate_required_field("cases", &cases_path)?;
    validate_path("cases", cases_path)?;

    tracing::info!("Loading test cases from: {}", cases_path);
    load_test_cases(cases_path)
        .with_context(|| format!("Failed to load test cases from '{}'", cases_path))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    let cases = match load_cases(&args) {
        Ok(cases) => cases,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            std::process::exit(2);
        }
    };

    let report = evaluate(&cases);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_report(&report));
    }

    if !report.all_passed {
        std::process::exit(1);
    }

    Ok(())
}

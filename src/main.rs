use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tenancy_pack::config::AppConfig;
use tenancy_pack::error::AppError;
use tenancy_pack::gateway::{HttpPackGateway, PackGateway};
use tenancy_pack::telemetry;
use tenancy_pack::wizard::review;
use tenancy_pack::wizard::steps::DocumentKind;
use tenancy_pack::wizard::Submission;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "tenancy-pack",
    about = "Validate a tenancy pack submission and request the generated document pack",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run every step's validation and completeness checks over a submission
    Validate(SubmissionArgs),
    /// Send a complete submission to the generation service and save the pack
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct SubmissionArgs {
    /// Path to a submission JSON file (the wizard's aggregated payload)
    #[arg(long)]
    submission: PathBuf,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Path to a submission JSON file (the wizard's aggregated payload)
    #[arg(long)]
    submission: PathBuf,
    /// Directory the downloaded archive is written into
    #[arg(long, default_value = ".")]
    output: PathBuf,
    /// Override the configured generation endpoint
    #[arg(long)]
    endpoint: Option<String>,
    /// Confirm agreement to the terms and conditions
    #[arg(long)]
    agree_terms: bool,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match cli.command {
        Command::Validate(args) => run_validate(&args.submission),
        Command::Generate(args) => run_generate(args, &config),
    }
}

fn load_submission(path: &Path) -> Result<Submission, AppError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn run_validate(path: &Path) -> Result<(), AppError> {
    let submission = load_submission(path)?;

    let mut failures = submission.property.validate();
    failures.merge(submission.landlord.validate());
    failures.merge(submission.tenants.validate());
    failures.merge(submission.rental_terms.validate());

    println!("Submission: {}", path.display());
    if failures.is_empty() {
        println!("Field validation: ok");
    } else {
        println!("Field validation: {} problem(s)", failures.len());
        for (field, reason) in failures.iter() {
            println!("  {field}: {}", reason.label());
        }
    }

    println!(
        "Documents: {} of {} satisfied",
        submission.documents.satisfied_count(),
        DocumentKind::ordered().len()
    );
    for row in review::compliance_checklist(&submission) {
        println!("  [{}] {}", row.status.label(), row.item);
    }

    let ready = review::all_requirements_met(&submission);
    println!(
        "Ready to generate: {}",
        if ready && failures.is_empty() { "yes" } else { "no" }
    );
    Ok(())
}

fn run_generate(args: GenerateArgs, config: &AppConfig) -> Result<(), AppError> {
    let submission = load_submission(&args.submission)?;

    if !args.agree_terms {
        eprintln!("refusing to generate: pass --agree-terms to accept the terms and conditions");
        std::process::exit(2);
    }

    if !review::all_requirements_met(&submission) {
        eprintln!("submission is incomplete; outstanding items:");
        for kind in review::outstanding_documents(&submission) {
            eprintln!("  {}", kind.label());
        }
        std::process::exit(2);
    }

    let endpoint = args
        .endpoint
        .unwrap_or_else(|| config.gateway.endpoint.clone());
    let gateway = HttpPackGateway::new(endpoint)?;

    info!(endpoint = gateway.endpoint(), "requesting tenancy pack");
    let pack = gateway.generate(&submission)?;

    let destination = args.output.join(&pack.file_name);
    fs::write(&destination, &pack.bytes)?;
    println!("Saved {} ({} bytes)", destination.display(), pack.bytes.len());
    Ok(())
}

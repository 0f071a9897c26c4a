use std::io::Read;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use interview_coach::analysis;
use interview_coach::config::AppConfig;
use interview_coach::error::AppError;
use interview_coach::question_bank;
use interview_coach::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "interview-coach",
    about = "Score a behavioral interview answer and get interviewer-style feedback",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze an answer supplied as an argument, from a file, or on stdin
    Analyze(AnalyzeArgs),
    /// Print the built-in behavioral question bank
    Questions {
        /// Emit the bank as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// The answer text; omit to read from --file or stdin
    answer: Option<String>,
    /// Read the answer from a plain-text file
    #[arg(long, conflicts_with = "answer")]
    file: Option<PathBuf>,
    /// The question the answer responds to, enables relevance checking
    #[arg(long)]
    question: Option<String>,
    /// Emit the full result as JSON instead of the feedback narrative
    #[arg(long)]
    json: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let config = AppConfig::load();
    telemetry::init(&config.telemetry)?;
    info!(environment = %config.environment, "interview coach starting");

    let cli = Cli::parse();
    match cli.command {
        Command::Analyze(args) => run_analyze(args),
        Command::Questions { json } => run_questions(json),
    }
}

fn run_analyze(args: AnalyzeArgs) -> Result<(), AppError> {
    let answer = read_answer(&args)?;
    info!(answer_len = answer.len(), "analyzing answer");

    let result = analysis::analyze(answer.trim(), args.question.as_deref());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!(
            "clarity {}  confidence {}  structure {}  total {}",
            result.clarity, result.confidence, result.structure, result.total_score
        );
        if let Some(reason) = &result.rejection_reason {
            println!("rejected: {reason}");
        }
        println!();
        println!("{}", result.feedback);
    }

    Ok(())
}

fn read_answer(args: &AnalyzeArgs) -> Result<String, AppError> {
    if let Some(answer) = &args.answer {
        return Ok(answer.clone());
    }
    if let Some(path) = &args.file {
        return Ok(std::fs::read_to_string(path)?);
    }
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn run_questions(json: bool) -> Result<(), AppError> {
    let bank = question_bank::standard();
    if json {
        println!("{}", serde_json::to_string_pretty(bank)?);
    } else {
        for (index, question) in bank.iter().enumerate() {
            println!("{}. {}", index + 1, question.prompt);
            println!("   focus: {}", question.focus.join(", "));
        }
    }
    Ok(())
}

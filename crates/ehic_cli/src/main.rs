use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ehic_core::{
    decide, evaluate_cases, load_corpus_or_fallback, EvalCase, Responder, MATCH_THRESHOLD,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "ehic-faq")]
#[command(about = "ΕΚΑΑ FAQ matching CLI")]
struct Cli {
    /// Path to the FAQ corpus JSON file.
    #[arg(long, global = true, default_value = "data/faq_data.json")]
    corpus: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Answer a single question against the corpus.
    Ask {
        #[arg(long)]
        question: String,
        #[arg(long, default_value_t = MATCH_THRESHOLD)]
        threshold: f32,
    },
    /// Run expectation cases against the corpus.
    Eval {
        #[arg(long)]
        cases: PathBuf,
        #[arg(long, default_value_t = MATCH_THRESHOLD)]
        threshold: f32,
        #[arg(long, default_value_t = 1.0)]
        min_pass_rate: f32,
    },
}

fn read_eval_cases(path: &Path) -> Result<Vec<EvalCase>> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let cases: Vec<EvalCase> = serde_json::from_reader(file).context("parse eval cases json")?;
    Ok(cases)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let entries = load_corpus_or_fallback(&cli.corpus);

    match &cli.command {
        Commands::Ask {
            question,
            threshold,
        } => {
            let result = decide(question, &entries, *threshold);
            println!(
                "decision={:?} score={:.4} matched={}",
                result.decision,
                result.score,
                result.question.as_deref().unwrap_or("null")
            );

            let responder = Responder::with_threshold(entries, *threshold);
            println!("answer={}", responder.answer(question));
        }
        Commands::Eval {
            cases,
            threshold,
            min_pass_rate,
        } => {
            let run_id = format!("eval-{}", chrono::Utc::now().timestamp_millis());
            let cases = read_eval_cases(cases)?;
            let summary = evaluate_cases(&entries, &cases, *threshold);
            let meets = summary.pass_rate >= *min_pass_rate;

            println!(
                "run_id={} total={} passed={} failed={} pass_rate={:.4} required={:.4} meets_threshold={}",
                run_id,
                summary.total,
                summary.passed,
                summary.failed,
                summary.pass_rate,
                min_pass_rate,
                meets
            );

            for o in &summary.outcomes {
                println!(
                    "case={} passed={} decision={:?} matched={} score={:.4} latency={:.1}ms",
                    o.case_id,
                    o.passed,
                    o.actual_decision,
                    o.actual_question.as_deref().unwrap_or("null"),
                    o.score,
                    o.latency_ms
                );
            }

            if !meets {
                anyhow::bail!(
                    "pass rate {:.4} below required {:.4}",
                    summary.pass_rate,
                    min_pass_rate
                );
            }
        }
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Json, Router};
use clap::Parser;
use ehic_core::{load_corpus_or_fallback, Responder, MATCH_THRESHOLD};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;
use tracing_subscriber::EnvFilter;

const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Shown when the form arrives without a question.
const EMPTY_QUESTION_MESSAGE: &str = "Παρακαλώ εισάγετε μια ερώτηση.";

#[derive(Debug, Parser)]
#[command(name = "ehic-web")]
#[command(about = "ΕΚΑΑ FAQ chatbot web service")]
struct Cli {
    /// Path to the FAQ corpus JSON file.
    #[arg(long, default_value = "data/faq_data.json")]
    corpus: PathBuf,

    /// Address to listen on.
    #[arg(long, default_value = "0.0.0.0:5000")]
    listen: SocketAddr,

    #[arg(long, default_value_t = MATCH_THRESHOLD)]
    threshold: f32,
}

struct AppState {
    responder: Responder,
}

#[derive(Debug, Deserialize)]
struct AskForm {
    #[serde(default)]
    question: String,
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(INDEX_HTML))
}

fn ask_reply(responder: &Responder, question: &str) -> (StatusCode, Value) {
    if question.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            json!({ "status": "error", "message": EMPTY_QUESTION_MESSAGE }),
        );
    }

    (
        StatusCode::OK,
        json!({ "status": "success", "answer": responder.answer(question) }),
    )
}

async fn ask(State(state): State<Arc<AppState>>, form: Option<Form<AskForm>>) -> impl IntoResponse {
    let question = form.map(|Form(f)| f.question).unwrap_or_default();
    let (status, body) = ask_reply(&state.responder, &question);
    (status, Json(body))
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let entries = load_corpus_or_fallback(&cli.corpus);
    let state = Arc::new(AppState {
        responder: Responder::with_threshold(entries, cli.threshold),
    });

    let app = Router::new()
        .route("/", get(index))
        .route("/ask", post(ask))
        .fallback(not_found)
        .with_state(state);

    info!("Starting ΕΚΑΑ FAQ service on {}", cli.listen);
    axum::Server::bind(&cli.listen)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ehic_core::{FaqEntry, NO_MATCH_MESSAGE};

    fn responder() -> Responder {
        Responder::new(vec![FaqEntry {
            question: "Τι είναι η ΕΚΑΑ;".into(),
            answer: "A1".into(),
        }])
    }

    #[test]
    fn empty_question_is_rejected() {
        let (status, body) = ask_reply(&responder(), "");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], EMPTY_QUESTION_MESSAGE);
    }

    #[test]
    fn matched_question_returns_success_envelope() {
        let (status, body) = ask_reply(&responder(), "Τι είναι η ΕΚΑΑ;");
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(body["answer"], "A1");
    }

    #[test]
    fn unmatched_question_returns_the_no_match_message() {
        let (status, body) = ask_reply(&responder(), "xyzw");
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["answer"], NO_MATCH_MESSAGE);
    }
}

//! Lexical FAQ matching engine for the ΕΚΑΑ (European Health Insurance
//! Card) chatbot: text normalization, similarity scoring with keyword
//! boosting, corpus loading with a built-in fallback, and answer
//! resolution with fixed fallback messages.

pub mod corpus;
pub mod error;
pub mod eval;
pub mod matching;
pub mod model;
pub mod normalize;
pub mod respond;

pub use corpus::{
    fallback_corpus, load_corpus, load_corpus_or_fallback, FaqFile, FALLBACK_ANSWER,
    FALLBACK_QUESTION,
};
pub use error::{FaqError, Result};
pub use eval::{evaluate_cases, CaseExpectation, EvalCase, EvalOutcome, EvalSummary};
pub use matching::{best_match, decide, similarity_ratio, KEYWORD_BOOST, MATCH_THRESHOLD};
pub use model::{Decision, FaqEntry, MatchOutcome};
pub use normalize::normalize;
pub use respond::{Responder, NO_MATCH_MESSAGE, PROCESSING_ERROR_MESSAGE};

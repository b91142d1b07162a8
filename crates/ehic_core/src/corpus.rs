use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;
use crate::model::FaqEntry;

/// On-disk corpus shape: `{"faqs": [{"question": ..., "answer": ...}]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqFile {
    #[serde(default)]
    pub faqs: Vec<FaqEntry>,
}

/// The single entry served when the corpus file cannot be loaded.
pub const FALLBACK_QUESTION: &str = "Τι είναι η ΕΚΑΑ;";
pub const FALLBACK_ANSWER: &str = "H Ευρωπαϊκή Κάρτα Ασφάλισης Ασθένειας (ΕΚΑΑ) είναι μια δωρεάν κάρτα που σας προσφέρει πρόσβαση σε ιατρικά αναγκαίες, κρατικές περιθάλψεις κατά την προσωρινή διαμονή σας σε οποιαδήποτε από τις 27 χώρες της ΕΕ, την Ισλανδία, το Λιχτενστάιν, τη Νορβηγία, την Ελβετία και το Ηνωμένο Βασίλειο, με τους ίδιους όρους και το ίδιο κόστος (σε ορισμένες χώρες, δωρεάν) με τους ασφαλισμένους των εν λόγω χωρών.";

pub fn load_corpus(path: &Path) -> Result<Vec<FaqEntry>> {
    let file = File::open(path)?;
    let parsed: FaqFile = serde_json::from_reader(BufReader::new(file))?;
    Ok(parsed.faqs)
}

pub fn fallback_corpus() -> Vec<FaqEntry> {
    vec![FaqEntry {
        question: FALLBACK_QUESTION.to_string(),
        answer: FALLBACK_ANSWER.to_string(),
    }]
}

/// Load the corpus, substituting the built-in fallback on any failure.
/// Startup never aborts on a bad corpus file.
pub fn load_corpus_or_fallback(path: &Path) -> Vec<FaqEntry> {
    match load_corpus(path) {
        Ok(faqs) => {
            info!(count = faqs.len(), path = %path.display(), "loaded FAQ corpus");
            faqs
        }
        Err(err) => {
            warn!(error = %err, path = %path.display(), "corpus load failed, using built-in fallback");
            fallback_corpus()
        }
    }
}

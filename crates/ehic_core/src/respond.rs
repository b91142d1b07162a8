use tracing::{debug, error};

use crate::error::Result;
use crate::matching::{decide, MATCH_THRESHOLD};
use crate::model::{Decision, FaqEntry};

/// Shown when no corpus entry clears the threshold.
pub const NO_MATCH_MESSAGE: &str = "Συγγνώμη, δεν μπορώ να βρω μια απάντηση στην ερώτησή σας. Παρακαλώ δοκιμάστε να διατυπώσετε την ερώτησή σας διαφορετικά ή ρωτήστε κάτι άλλο σχετικά με την ΕΚΑΑ (Ευρωπαϊκή Κάρτα Ασφάλισης Ασθένειας).";

/// Shown when answering fails for any internal reason.
pub const PROCESSING_ERROR_MESSAGE: &str = "Παρουσιάστηκε σφάλμα κατά την επεξεργασία της ερώτησής σας. Παρακαλώ δοκιμάστε ξανά.";

/// Answers questions against an immutable corpus snapshot.
pub struct Responder {
    corpus: Vec<FaqEntry>,
    threshold: f32,
}

impl Responder {
    pub fn new(corpus: Vec<FaqEntry>) -> Self {
        Self::with_threshold(corpus, MATCH_THRESHOLD)
    }

    pub fn with_threshold(corpus: Vec<FaqEntry>, threshold: f32) -> Self {
        Self { corpus, threshold }
    }

    pub fn corpus(&self) -> &[FaqEntry] {
        &self.corpus
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Resolve a question to an answer string. Never fails: any internal
    /// error collapses to the fixed processing-error message here, so
    /// callers always get a displayable string.
    pub fn answer(&self, question: &str) -> String {
        match self.try_answer(question) {
            Ok(text) => text,
            Err(err) => {
                error!(error = %err, "question processing failed");
                PROCESSING_ERROR_MESSAGE.to_string()
            }
        }
    }

    fn try_answer(&self, question: &str) -> Result<String> {
        debug!(question, "processing question");

        let outcome = decide(question, &self.corpus, self.threshold);
        match outcome.decision {
            Decision::Hit => Ok(outcome.answer.unwrap_or_default()),
            Decision::Miss => Ok(NO_MATCH_MESSAGE.to_string()),
        }
    }
}

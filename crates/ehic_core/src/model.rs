use serde::{Deserialize, Serialize};

/// A single question/answer pair from the FAQ corpus.
///
/// Missing fields deserialize to empty strings so a malformed entry can
/// never abort a corpus load or a scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaqEntry {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Hit,
    Miss,
}

/// Result of matching one query against the corpus. On a Miss the
/// nearest entry's question is still reported, with `answer` left empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub score: f32,
    pub decision: Decision,
}

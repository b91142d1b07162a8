use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::matching::decide;
use crate::model::{Decision, FaqEntry};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalCase {
    pub case_id: String,
    pub question: String,
    pub expected_decision: Decision,
    /// When set, the match must land on the entry with this question.
    #[serde(default)]
    pub expected_question: Option<String>,
    #[serde(default)]
    pub min_score: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalOutcome {
    pub case_id: String,
    pub passed: bool,
    pub actual_decision: Decision,
    pub actual_question: Option<String>,
    pub actual_answer: Option<String>,
    pub score: f32,
    pub latency_ms: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub pass_rate: f32,
    pub outcomes: Vec<EvalOutcome>,
}

pub struct CaseExpectation;

impl CaseExpectation {
    pub fn matches(
        expected_decision: Decision,
        expected_question: Option<&str>,
        min_score: Option<f32>,
        actual_decision: Decision,
        actual_question: Option<&str>,
        score: f32,
    ) -> bool {
        if expected_decision != actual_decision {
            return false;
        }

        if let Some(expected) = expected_question {
            if actual_question != Some(expected) {
                return false;
            }
        }

        if let Some(min) = min_score {
            if score < min {
                return false;
            }
        }

        true
    }
}

pub fn evaluate_cases(entries: &[FaqEntry], cases: &[EvalCase], threshold: f32) -> EvalSummary {
    let mut outcomes = Vec::with_capacity(cases.len());

    for case in cases {
        let start = Instant::now();
        let result = decide(&case.question, entries, threshold);
        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

        let passed = CaseExpectation::matches(
            case.expected_decision,
            case.expected_question.as_deref(),
            case.min_score,
            result.decision,
            result.question.as_deref(),
            result.score,
        );

        outcomes.push(EvalOutcome {
            case_id: case.case_id.clone(),
            passed,
            actual_decision: result.decision,
            actual_question: result.question,
            actual_answer: result.answer,
            score: result.score,
            latency_ms,
        });
    }

    let total = outcomes.len();
    let passed = outcomes.iter().filter(|o| o.passed).count();
    let failed = total.saturating_sub(passed);
    let pass_rate = if total == 0 {
        0.0
    } else {
        passed as f32 / total as f32
    };

    EvalSummary {
        total,
        passed,
        failed,
        pass_rate,
        outcomes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::MATCH_THRESHOLD;

    fn corpus() -> Vec<FaqEntry> {
        vec![
            FaqEntry {
                question: "Τι είναι η ΕΚΑΑ;".into(),
                answer: "A1".into(),
            },
            FaqEntry {
                question: "Πόσο κοστίζει η κάρτα;".into(),
                answer: "A2".into(),
            },
        ]
    }

    #[test]
    fn hit_and_miss_expectations_score_correctly() {
        let cases = vec![
            EvalCase {
                case_id: "hit".into(),
                question: "Τι είναι η ΕΚΑΑ;".into(),
                expected_decision: Decision::Hit,
                expected_question: Some("Τι είναι η ΕΚΑΑ;".into()),
                min_score: Some(1.0),
            },
            EvalCase {
                case_id: "miss".into(),
                question: "zzzz".into(),
                expected_decision: Decision::Miss,
                expected_question: None,
                min_score: None,
            },
        ];

        let summary = evaluate_cases(&corpus(), &cases, MATCH_THRESHOLD);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failed, 0);
        assert!((summary.pass_rate - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn wrong_expected_entry_fails_the_case() {
        let cases = vec![EvalCase {
            case_id: "wrong".into(),
            question: "Τι είναι η ΕΚΑΑ;".into(),
            expected_decision: Decision::Hit,
            expected_question: Some("Πόσο κοστίζει η κάρτα;".into()),
            min_score: None,
        }];

        let summary = evaluate_cases(&corpus(), &cases, MATCH_THRESHOLD);
        assert_eq!(summary.passed, 0);
        assert_eq!(summary.failed, 1);
    }

    #[test]
    fn empty_case_list_yields_zero_pass_rate() {
        let summary = evaluate_cases(&corpus(), &[], MATCH_THRESHOLD);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.pass_rate, 0.0);
    }
}

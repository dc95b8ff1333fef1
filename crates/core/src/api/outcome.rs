use std::collections::BTreeMap;

use serde::Deserialize;

use crate::shared::constants::GENERIC_ERROR;

/// Parsed response from the service. The wire format is owned by the remote
/// side; these are the two shapes it is known to produce.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ApiOutcome {
    Verdict(Verdict),
    Failure(ApiFailure),
}

/// Successful classification: the winning class plus the full
/// label -> percentage breakdown and the model/mode the server used.
#[derive(Debug, Clone, Deserialize)]
pub struct Verdict {
    pub class: String,
    pub probs: BTreeMap<String, f64>,
    pub mode: String,
    pub model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiFailure {
    pub error: String,
}

impl ApiOutcome {
    /// Parse a response body. A body matching neither known shape becomes
    /// the generic failure rather than propagating a decode error.
    pub fn parse(body: &[u8]) -> Self {
        match serde_json::from_slice(body) {
            Ok(outcome) => outcome,
            Err(e) => {
                log::warn!("unrecognized response shape: {e}");
                ApiOutcome::generic_failure()
            }
        }
    }

    pub fn generic_failure() -> Self {
        ApiOutcome::Failure(ApiFailure {
            error: GENERIC_ERROR.to_string(),
        })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ApiOutcome::Failure(_))
    }
}

impl Verdict {
    /// Percentage reported for the winning class, if the server listed it.
    pub fn confidence(&self) -> Option<f64> {
        self.probs.get(&self.class).copied()
    }

    /// One-line summary, e.g. `Real Detected - 98.50%`.
    pub fn headline(&self) -> String {
        match self.confidence() {
            Some(pct) => format!("{} Detected - {}", self.class, format_percent(pct)),
            None => format!("{} Detected", self.class),
        }
    }

    /// `(label, "98.50%")` pairs for every class, in label order.
    pub fn breakdown(&self) -> Vec<(String, String)> {
        self.probs
            .iter()
            .map(|(label, pct)| (label.clone(), format_percent(*pct)))
            .collect()
    }
}

/// Two-decimal percentage, matching the service dashboard's formatting.
pub fn format_percent(pct: f64) -> String {
    format!("{pct:.2}%")
}

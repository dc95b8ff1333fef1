use serde::{Deserialize, Serialize};

/// Which model the service should run. Sent verbatim as the `model`
/// query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelVariant {
    ConvNext,
    Transformer,
}

impl ModelVariant {
    pub const ALL: &[ModelVariant] = &[ModelVariant::ConvNext, ModelVariant::Transformer];

    pub fn as_str(self) -> &'static str {
        match self {
            ModelVariant::ConvNext => "convnext",
            ModelVariant::Transformer => "transformer",
        }
    }
}

impl Default for ModelVariant {
    fn default() -> Self {
        ModelVariant::Transformer
    }
}

impl std::fmt::Display for ModelVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModelVariant::ConvNext => write!(f, "ConvNext"),
            ModelVariant::Transformer => write!(f, "Transformer"),
        }
    }
}

/// Per-request options. `binary` toggles the service between a plain
/// real/spoof verdict and its more detailed multi-class output.
///
/// Serializes directly into the query string:
/// `?model=transformer&binary=false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CheckOptions {
    pub model: ModelVariant,
    pub binary: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_service_defaults() {
        let options = CheckOptions::default();
        assert_eq!(options.model, ModelVariant::Transformer);
        assert!(!options.binary);
    }

    #[test]
    fn test_model_serializes_lowercase() {
        let json = serde_json::to_string(&ModelVariant::ConvNext).unwrap();
        assert_eq!(json, "\"convnext\"");
        assert_eq!(ModelVariant::ConvNext.as_str(), "convnext");
    }

    #[test]
    fn test_options_query_encoding() {
        let options = CheckOptions {
            model: ModelVariant::ConvNext,
            binary: true,
        };
        let query = serde_json::to_value(&options).unwrap();
        assert_eq!(query["model"], "convnext");
        assert_eq!(query["binary"], true);
    }
}

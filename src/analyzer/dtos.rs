use serde::{Deserialize, Serialize};

use crate::keywords::TermWeight;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
}

/// One ranked keyword on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordWeight {
    pub word: String,
    pub weight: f64,
}

/// Response body for an analysis request. `error` present means the pipeline
/// stopped early and `words` is empty; a successful analysis may still carry
/// zero words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub words: Vec<WordWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalyzeResponse {
    pub fn success(ranking: Vec<TermWeight>) -> Self {
        Self {
            words: ranking
                .into_iter()
                .map(|tw| WordWeight {
                    word: tw.term,
                    weight: tw.weight,
                })
                .collect(),
            error: None,
        }
    }

    pub fn failure(message: &str) -> Self {
        Self {
            words: Vec::new(),
            error: Some(message.to_string()),
        }
    }
}

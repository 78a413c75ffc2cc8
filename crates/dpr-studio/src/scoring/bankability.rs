use serde::{Deserialize, Serialize};

/// A case-insensitive keyword and the weight it adds when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordIndicator {
    pub label: String,
    pub pattern: String,
    pub weight: f64,
}

impl KeywordIndicator {
    pub fn new(label: impl Into<String>, pattern: impl Into<String>, weight: f64) -> Self {
        Self {
            label: label.into(),
            pattern: pattern.into(),
            weight,
        }
    }
}

/// Weights behind the bankability proxy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankabilityRubric {
    pub base: f64,
    pub indicators: Vec<KeywordIndicator>,
    /// Characters of narrative worth one full point of length bonus.
    pub length_divisor: f64,
    pub length_bonus_cap: f64,
    /// Ceiling below 1.0; the proxy never claims certainty.
    pub ceiling: f64,
}

impl Default for BankabilityRubric {
    fn default() -> Self {
        Self::standard()
    }
}

impl BankabilityRubric {
    pub fn standard() -> Self {
        Self {
            base: 0.42,
            indicators: vec![
                KeywordIndicator::new("financing", "loan", 0.12),
                KeywordIndicator::new("government support", "scheme", 0.12),
                KeywordIndicator::new("international trade", "export", 0.12),
                KeywordIndicator::new("sustainability", "energy", 0.12),
            ],
            length_divisor: 500.0,
            length_bonus_cap: 0.18,
            ceiling: 0.95,
        }
    }

    pub fn assess(&self, text: &str) -> BankabilityAssessment {
        let normalized = text.to_lowercase();
        let matched: Vec<&KeywordIndicator> = self
            .indicators
            .iter()
            .filter(|indicator| normalized.contains(&indicator.pattern.to_lowercase()))
            .collect();

        let indicator_weight: f64 = matched.iter().map(|indicator| indicator.weight).sum();
        let length = text.chars().count() as f64;
        let length_bonus = (length / self.length_divisor).min(self.length_bonus_cap);
        let score = (self.base + indicator_weight + length_bonus).min(self.ceiling);

        BankabilityAssessment {
            score,
            matched_indicators: matched
                .into_iter()
                .map(|indicator| indicator.label.clone())
                .collect(),
            length_bonus,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BankabilityAssessment {
    pub score: f64,
    pub matched_indicators: Vec<String>,
    pub length_bonus: f64,
}

impl BankabilityAssessment {
    /// Whole percent, as shown to the entrepreneur.
    pub fn percent(&self) -> u8 {
        (self.score * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

/// Bankability proxy in `[0, 0.95]` under the standard rubric.
pub fn bankability_score(text: &str) -> f64 {
    BankabilityRubric::standard().assess(text).score
}

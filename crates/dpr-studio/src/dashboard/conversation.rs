use crate::datasets::{FreeTextInput, Language};
use crate::scoring::{BankabilityAssessment, BankabilityRubric};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

const ENGLISH_ACKNOWLEDGEMENT: &str =
    "Your insights are being structured into the DPR with matched schemes and bankability nudges.";
const VERNACULAR_ACKNOWLEDGEMENT: &str = "మీ వివరాలను DPR నిర్మాణానికి చేర్చాను. మీకు అనుకూలమైన పథకాలు మరియు బ్యాంకబిలిటీ పొరపాటు సూచనలు క్రింద ఉన్నాయి.";
const GREETING: &str = "నమస్తే! మీ వ్యాపార లక్ష్యం మరియు ప్రస్తుతం ఉన్న సవాళ్లను వివరించండి. I'm tuned to translate everything into a bank-ready DPR structure.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    Entrepreneur,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationMessage {
    pub speaker: Speaker,
    pub text: String,
    pub language: Language,
    pub locale: &'static str,
    pub timestamp: DateTime<Utc>,
}

impl ConversationMessage {
    fn new(speaker: Speaker, text: String, language: Language, timestamp: DateTime<Utc>) -> Self {
        Self {
            speaker,
            text,
            language,
            locale: language.locale(),
            timestamp,
        }
    }
}

/// The entrepreneur's message, the assistant's reply and the score behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationExchange {
    pub entrepreneur: ConversationMessage,
    pub assistant: ConversationMessage,
    pub assessment: BankabilityAssessment,
}

impl ConversationExchange {
    pub fn messages(&self) -> [&ConversationMessage; 2] {
        [&self.entrepreneur, &self.assistant]
    }
}

/// Turns one free-text narrative into a scored conversational exchange.
#[derive(Debug, Clone, Default)]
pub struct ConversationTurn {
    rubric: BankabilityRubric,
}

impl ConversationTurn {
    pub fn new(rubric: BankabilityRubric) -> Self {
        Self { rubric }
    }

    /// Opening assistant message shown before the first turn.
    pub fn greeting(at: DateTime<Utc>) -> ConversationMessage {
        ConversationMessage::new(Speaker::Assistant, GREETING.to_string(), Language::Vernacular, at)
    }

    /// `None` when the input is blank after trimming.
    pub fn respond(&self, input: &FreeTextInput, at: DateTime<Utc>) -> Option<ConversationExchange> {
        let text = input.text.trim();
        if text.is_empty() {
            return None;
        }

        let assessment = self.rubric.assess(text);
        debug!(
            language = input.language.locale(),
            chars = text.chars().count(),
            score = assessment.score,
            "scored conversation turn"
        );

        Some(ConversationExchange {
            entrepreneur: ConversationMessage::new(
                Speaker::Entrepreneur,
                text.to_string(),
                input.language,
                at,
            ),
            assistant: ConversationMessage::new(
                Speaker::Assistant,
                reply(input.language, &assessment),
                input.language,
                at,
            ),
            assessment,
        })
    }
}

fn reply(language: Language, assessment: &BankabilityAssessment) -> String {
    let acknowledgement = match language {
        Language::English => ENGLISH_ACKNOWLEDGEMENT,
        Language::Vernacular => VERNACULAR_ACKNOWLEDGEMENT,
    };

    format!(
        "{acknowledgement}\n- Bankability score (beta): {}%\n- Next action: Attach cash-flow evidence and geo-tagged assets.\n- Recommended advisor review within 48 hours.",
        assessment.percent()
    )
}

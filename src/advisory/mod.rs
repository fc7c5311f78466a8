//! WiseBot advisory chat. Sits outside the financial model: it only ever sees a
//! totals snapshot and never touches the ledger.

pub mod prompt;
pub mod session;

pub use prompt::TotalsSnapshot;
pub use session::{AdvisorySession, AdvisoryTask};

pub const FALLBACK_REPLY: &str =
    "Oops! I'm having a little trouble connecting. Please try again in a moment. 🛠️";

pub const NOT_CONFIGURED_REPLY: &str =
    "Please add your advisory API key first (set `advisory.api_key` in config.json or SPENDWISE_ADVISORY_API_KEY).";

/// Canned prompts offered as one-tap suggestions.
pub const SUGGESTED_PROMPTS: &[&str] = &[
    "What is the 50/30/20 rule?",
    "How can I save more money each month?",
    "How is my spending looking so far?",
    "How do I start an emergency fund?",
];

pub fn welcome_message() -> &'static str {
    "Hi! I'm WiseBot, your personal financial coach! 🤖 Ask me about the 50/30/20 rule, or how you can save more money."
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplySource {
    Generated,
    Fallback,
    NotConfigured,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisoryReply {
    pub text: String,
    pub source: ReplySource,
}

impl AdvisoryReply {
    pub fn fallback() -> Self {
        Self {
            text: FALLBACK_REPLY.to_string(),
            source: ReplySource::Fallback,
        }
    }

    pub fn not_configured() -> Self {
        Self {
            text: NOT_CONFIGURED_REPLY.to_string(),
            source: ReplySource::NotConfigured,
        }
    }
}

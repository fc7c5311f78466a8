//! Chat-completion wire types and the system instruction seeded with totals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::services::Totals;
use crate::currency::CurrencyFormat;
use crate::errors::AdvisoryError;

/// Totals captured when an advisory request is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TotalsSnapshot {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
    pub captured_at: DateTime<Utc>,
}

impl From<&Totals> for TotalsSnapshot {
    fn from(totals: &Totals) -> Self {
        Self {
            income: totals.income,
            expenses: totals.expenses,
            balance: totals.balance,
            captured_at: Utc::now(),
        }
    }
}

pub fn system_prompt(snapshot: &TotalsSnapshot, format: &CurrencyFormat) -> String {
    format!(
        "You are WiseBot, a friendly and helpful financial assistant for students and teenagers. \
Give simple, clear, and actionable financial advice. \
Keep your answers concise (2-3 sentences max) and easy to understand. Use emojis where appropriate.\n\
The user is tracking their money with an app called SpendWise.\n\
Based on the user's transactions:\n\
- Total Income: {}\n\
- Total Expenses: {}\n\
- Current Balance: {}\n\
Use this data if the user asks about their spending, but don't state it unless asked.",
        format.format_amount(snapshot.income),
        format.format_amount(snapshot.expenses),
        format.format_amount(snapshot.balance),
    )
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".into(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>, temperature: f32, system: String, user: &str) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            temperature,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

impl ChatResponse {
    pub fn parse(body: &str) -> Result<Self, AdvisoryError> {
        serde_json::from_str(body).map_err(|err| AdvisoryError::MalformedResponse(err.to_string()))
    }

    /// Content of the first choice; blank replies count as empty.
    pub fn into_reply(self) -> Result<String, AdvisoryError> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(AdvisoryError::EmptyReply)
    }
}

use thiserror::Error;

/// Rejected command input. The display text is the user-facing message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Please enter a description.")]
    EmptyDescription,
    #[error("Please enter a valid amount (got `{0}`).")]
    InvalidAmount(String),
    #[error("Amount must be greater than zero.")]
    NonPositiveAmount,
    #[error("Please choose income or expense.")]
    MissingKind,
    #[error("Unknown transaction type `{0}`; expected income or expense.")]
    UnknownKind(String),
    #[error("Amount is too large to add to your totals.")]
    AmountTooLarge,
    #[error("Please choose a category.")]
    MissingCategory,
    #[error("Please enter a valid budget amount (got `{0}`).")]
    InvalidBudgetAmount(String),
    #[error("Budget amount cannot be negative.")]
    NegativeBudget,
}

/// Failures of the advisory chat exchange. Always recovered into a canned reply.
#[derive(Debug, Error)]
pub enum AdvisoryError {
    #[error("advisory API key is not configured")]
    MissingApiKey,
    #[error("invalid advisory endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("advisory transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("advisory endpoint returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed advisory response: {0}")]
    MalformedResponse(String),
    #[error("advisory response contained no reply")]
    EmptyReply,
    #[error("advisory request was cancelled")]
    Cancelled,
    #[error("advisory task failed: {0}")]
    TaskFailed(String),
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Corrupt value under key {key}: {source}")]
    Corrupt {
        key: String,
        source: serde_json::Error,
    },

    #[error("Listing {0} not found")]
    ListingNotFound(String),

    #[error("Offer {0} not found")]
    OfferNotFound(String),

    #[error("Conversation {0} not found")]
    ConversationNotFound(String),

    #[error("Offer {0} is not pending")]
    OfferNotPending(String),

    #[error("An accommodation offer has already been accepted")]
    OfferAlreadyAccepted,

    #[error("Application for property {0} has already been submitted")]
    AlreadySubmitted(String),

    #[error("Step {0:?} is incomplete")]
    IncompleteStep(crate::models::applicationmodel::FormStep),

    #[error("Cannot jump forward past the current step")]
    ForwardJump,
}

impl AppError {
    pub fn corrupt(key: &str, source: serde_json::Error) -> Self {
        AppError::Corrupt {
            key: key.to_string(),
            source,
        }
    }
}

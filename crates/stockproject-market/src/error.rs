use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarketError {
    #[error("upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected upstream payload: {message}")]
    Payload { message: String },

    #[error("no data for code {code}")]
    UnknownCode { code: String },
}

impl MarketError {
    pub fn payload(message: impl Into<String>) -> Self {
        Self::Payload {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MarketError>;

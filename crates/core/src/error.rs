use crate::speech::SpeechError;

#[derive(Debug, thiserror::Error)]
pub enum KalpError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("unknown topic: {0}")]
    UnknownTopic(String),
    #[error("speech engine error: {0}")]
    Speech(#[from] SpeechError),
}

pub type KalpResult<T> = std::result::Result<T, KalpError>;

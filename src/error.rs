use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Invalid payment data: {0}")]
    InvalidPaymentData(String),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Session store error: {0}")]
    StoreError(String),
}

pub type Result<T> = std::result::Result<T, PaymentError>;

use crate::domain::request::PaymentRequest;
use crate::error::Result;
use std::io::Read;

/// Reads a payment request from a JSON source.
///
/// The JSON shape is the camelCase object the membership and event forms
/// produce; unknown keys are ignored and missing keys stay `None`.
pub struct RequestReader<R: Read> {
    source: R,
}

impl<R: Read> RequestReader<R> {
    /// Creates a new `RequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn read(self) -> Result<PaymentRequest> {
        Ok(serde_json::from_reader(self.source)?)
    }
}

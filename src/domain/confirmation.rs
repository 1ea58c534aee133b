use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use url::form_urlencoded;

const BASE36: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Locally generated acknowledgment tag shown after a successful return
/// redirect: `CONF-<YYYYMMDD>-<8-char token>`.
///
/// Distinct from the gateway's own transaction id; the gateway never sees it.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ConfirmationRef(String);

impl ConfirmationRef {
    pub fn generate() -> Self {
        let date = Utc::now().format("%Y%m%d");
        let mut rng = rand::thread_rng();
        let token: String = (0..8)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();
        Self(format!("CONF-{date}-{token}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfirmationRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of a gateway return redirect, derived from its query string.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ConfirmationResult {
    pub success: bool,
    pub transaction_id: Option<String>,
    pub confirmation_ref: Option<ConfirmationRef>,
    pub message: String,
}

impl ConfirmationResult {
    /// Parses the `status` and `transaction_id` query parameters the gateway
    /// appends to the return URL.
    ///
    /// `success` and `completed` both count as success and earn a fresh
    /// confirmation reference; any other status (or none) is a failure. No
    /// retry is attempted either way.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let params: HashMap<String, String> = form_urlencoded::parse(query.as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        let status = params.get("status").map(String::as_str);
        let transaction_id = params.get("transaction_id").cloned();

        if matches!(status, Some("success") | Some("completed")) {
            Self {
                success: true,
                transaction_id,
                confirmation_ref: Some(ConfirmationRef::generate()),
                message: "Payment successful! Your membership has been activated.".to_string(),
            }
        } else {
            Self {
                success: false,
                transaction_id,
                confirmation_ref: None,
                message: "Payment failed. Please contact support.".to_string(),
            }
        }
    }
}

/// Checks a raw gateway notification payload: `transaction_id`, `status` and
/// `amount` must all be present, and the status must be terminal-successful.
///
/// Authoritative verification belongs to the notify-URL backend; this is the
/// client-side precondition check only.
pub fn verify_gateway_response(response: &HashMap<String, String>) -> bool {
    let required = ["transaction_id", "status", "amount"];
    if required
        .iter()
        .any(|field| response.get(*field).is_none_or(|value| value.is_empty()))
    {
        return false;
    }

    matches!(
        response.get("status").map(String::as_str),
        Some("success") | Some("completed")
    )
}

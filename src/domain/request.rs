use chrono::Utc;
use rand::Rng;
use regex::Regex;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fmt;
use std::sync::LazyLock;

/// Basic `local@domain.tld` shape; intentionally loose beyond that.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email pattern"));

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PaymentKind {
    Membership,
    Event,
}

impl PaymentKind {
    /// Short tag used inside order identifiers.
    pub fn tag(&self) -> &'static str {
        match self {
            PaymentKind::Membership => "MEM",
            PaymentKind::Event => "EVT",
        }
    }
}

impl fmt::Display for PaymentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentKind::Membership => write!(f, "membership"),
            PaymentKind::Event => write!(f, "event"),
        }
    }
}

/// Locally generated order identifier: `DSC-<TAG>-<timestamp>-<random>`.
///
/// Fresh per submission attempt and never persisted. Collisions are tolerated;
/// the gateway's own transaction id is the authoritative correlation key.
#[derive(Debug, PartialEq, Clone)]
pub struct OrderId(String);

impl OrderId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A caller-supplied payment request.
///
/// Every field is optional at the type level; validity is re-derived on each
/// submission attempt via [`PaymentRequest::validate`], never cached. Field
/// names follow the camelCase JSON the membership forms produce.
#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentRequest {
    pub email: Option<String>,
    pub amount: Option<Decimal>,
    #[serde(rename = "type")]
    pub kind: Option<PaymentKind>,
    pub full_name: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub membership_type: Option<String>,
    pub student_id: Option<String>,
    pub event: Option<String>,
}

/// Treats empty strings as absent, matching the forms' falsy checks.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl PaymentRequest {
    /// Checks the request is fit for submission.
    ///
    /// Required fields (`email`, `amount`, `type`) are checked for presence
    /// first, then the email shape, then that the amount is strictly
    /// positive. Returns `false` on the first failing check and never
    /// mutates the request.
    pub fn validate(&self) -> bool {
        let Some(email) = present(&self.email) else {
            return false;
        };
        let (Some(amount), Some(_kind)) = (self.amount, self.kind) else {
            return false;
        };

        if !EMAIL_RE.is_match(email) {
            return false;
        }

        amount > Decimal::ZERO
    }

    /// Customer display name: `fullName` falling back to `name`.
    pub fn customer_name(&self) -> Option<&str> {
        present(&self.full_name).or_else(|| present(&self.name))
    }

    pub fn phone(&self) -> Option<&str> {
        present(&self.phone)
    }

    pub fn membership_type(&self) -> Option<&str> {
        present(&self.membership_type)
    }

    pub fn student_id(&self) -> Option<&str> {
        present(&self.student_id)
    }

    pub fn event(&self) -> Option<&str> {
        present(&self.event)
    }

    /// Derives a fresh order identifier for this submission attempt.
    ///
    /// Pure function of the wall clock, a random integer in `[0, 10000)` and
    /// the payment kind. Requests without a kind are treated as event
    /// payments, mirroring the `MEM`-or-else-`EVT` tagging of the site.
    pub fn order_id(&self) -> OrderId {
        let timestamp = Utc::now().timestamp_millis();
        let random = rand::thread_rng().gen_range(0..10_000);
        let tag = self.kind.map_or("EVT", |kind| kind.tag());
        OrderId(format!("DSC-{tag}-{timestamp}-{random}"))
    }
}

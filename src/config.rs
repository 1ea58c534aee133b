use serde::Deserialize;

/// Merchant-side gateway configuration.
///
/// Passed explicitly into [`PaymentGateway`](crate::application::gateway::PaymentGateway)
/// at construction time so tests can substitute a stub endpoint without
/// touching global state.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Checkout endpoint receiving the full-page form POST.
    pub gateway_url: String,
    pub merchant_id: String,
    pub currency: String,
    /// Where the gateway redirects the browser after a completed attempt.
    pub return_url: String,
    /// Where the user lands when they abandon the payment.
    pub cancel_url: String,
    /// Server-to-server notification endpoint, opaque to this crate.
    pub notify_url: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            gateway_url: "https://payment-gateway.example.com/checkout".to_string(),
            merchant_id: "NIBM_DSC_MERCHANT_ID".to_string(),
            currency: "LKR".to_string(),
            return_url: "https://dsc.example.org/payment-confirmation.html".to_string(),
            cancel_url: "https://dsc.example.org/join.html".to_string(),
            notify_url: "https://your-backend.example.com/payment-notify".to_string(),
        }
    }
}

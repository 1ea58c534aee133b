use crate::config::GatewayConfig;
use crate::domain::request::PaymentRequest;
use url::form_urlencoded;

/// A gateway checkout submission: a POST endpoint plus its ordered fields.
///
/// Constructed immediately before submission, submitted once through a
/// [`Navigator`](crate::domain::ports::Navigator) and then discarded; it is
/// never read back.
#[derive(Debug, PartialEq, Clone)]
pub struct GatewayForm {
    pub endpoint: String,
    pub fields: Vec<(String, String)>,
}

impl GatewayForm {
    /// Serializes a validated request into the gateway's field set.
    ///
    /// Field order is fixed: merchant configuration first, then
    /// request-derived fields, then the optional order and reference fields.
    /// Optional fields whose source value is absent are omitted entirely,
    /// never attached with an empty value.
    pub fn build(config: &GatewayConfig, request: &PaymentRequest) -> Self {
        let mut form = Self {
            endpoint: config.gateway_url.clone(),
            fields: Vec::new(),
        };

        form.push("merchant_id", &config.merchant_id);
        form.push("currency", &config.currency);
        form.push("return_url", &config.return_url);
        form.push("cancel_url", &config.cancel_url);
        form.push("notify_url", &config.notify_url);

        if let Some(email) = request.email.as_deref() {
            form.push("customer_email", email);
        }
        if let Some(name) = request.customer_name() {
            form.push("customer_name", name);
        }
        if let Some(phone) = request.phone() {
            form.push("customer_phone", phone);
        }
        if let Some(amount) = request.amount {
            form.push("amount", &amount.to_string());
        }
        if let Some(kind) = request.kind {
            form.push("payment_type", &kind.to_string());
        }

        if let Some(membership_type) = request.membership_type() {
            form.push("order_description", &format!("{membership_type} Membership - DSC"));
            form.push("order_id", request.order_id().as_str());
        }

        if let Some(student_id) = request.student_id() {
            form.push("student_id", student_id);
        }
        if let Some(event) = request.event() {
            form.push("event_id", event);
        }

        form
    }

    fn push(&mut self, name: &str, value: &str) {
        self.fields.push((name.to_string(), value.to_string()));
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    /// Encodes the fields as an `application/x-www-form-urlencoded` body.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.fields {
            serializer.append_pair(name, value);
        }
        serializer.finish()
    }
}

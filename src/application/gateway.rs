use crate::config::GatewayConfig;
use crate::domain::confirmation::ConfirmationResult;
use crate::domain::form::GatewayForm;
use crate::domain::ports::{NavigatorBox, NotifierBox, SessionStoreBox, Severity};
use crate::domain::request::{PaymentKind, PaymentRequest};
use crate::error::{PaymentError, Result};
use std::time::Duration;

/// Session key under which a successful confirmation is carried across the
/// redirect boundary.
pub const CONFIRMATION_KEY: &str = "paymentConfirmation";

const NOTIFY_DURATION: Duration = Duration::from_secs(5);
const INIT_FAILED_MESSAGE: &str = "Payment initialization failed. Please try again.";
const CANCELLED_MESSAGE: &str = "Payment cancelled. Please try again.";

/// The main entry point for payment hand-off.
///
/// `PaymentGateway` validates payment requests, serializes them into checkout
/// forms and hands them to the navigation capability. It owns its
/// configuration and collaborators explicitly; no global state is involved,
/// and no state is kept between calls.
pub struct PaymentGateway {
    config: GatewayConfig,
    navigator: NavigatorBox,
    notifier: NotifierBox,
    session: SessionStoreBox,
}

impl PaymentGateway {
    /// Creates a new `PaymentGateway` instance.
    ///
    /// # Arguments
    ///
    /// * `config` - Merchant and endpoint configuration.
    /// * `navigator` - Full-page navigation capability.
    /// * `notifier` - Transient user notification capability.
    /// * `session` - Key-value store surviving the redirect.
    pub fn new(
        config: GatewayConfig,
        navigator: NavigatorBox,
        notifier: NotifierBox,
        session: SessionStoreBox,
    ) -> Self {
        Self {
            config,
            navigator,
            notifier,
            session,
        }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Validates the request and submits it to the checkout endpoint.
    ///
    /// Validation always completes before any field is constructed, and
    /// construction before submission; either every field is attached and the
    /// form is submitted, or nothing is. On invalid data the user is
    /// notified, the error is logged, and control returns to the caller
    /// without navigating away.
    pub async fn initiate_payment(&self, request: &PaymentRequest) -> Result<()> {
        if !request.validate() {
            let err = PaymentError::InvalidPaymentData(
                "missing or malformed email, amount or payment type".to_string(),
            );
            tracing::error!(error = %err, "payment initiation rejected");
            self.notifier
                .notify(INIT_FAILED_MESSAGE, Severity::Error, Some(NOTIFY_DURATION))
                .await;
            return Err(err);
        }

        let form = GatewayForm::build(&self.config, request);
        self.navigator.submit_form(form).await
    }

    /// Submits a membership payment.
    pub async fn process_membership_payment(&self, request: &PaymentRequest) -> Result<()> {
        self.initiate_payment(request).await
    }

    /// Submits an event registration payment; the kind is forced to `event`.
    pub async fn process_event_payment(&self, request: &PaymentRequest) -> Result<()> {
        let mut request = request.clone();
        request.kind = Some(PaymentKind::Event);
        self.initiate_payment(&request).await
    }

    /// Handles the gateway's return redirect.
    ///
    /// Parses the query string into a [`ConfirmationResult`]; a successful
    /// result is stored under [`CONFIRMATION_KEY`] for the confirmation page,
    /// and the outcome is surfaced through the notifier either way.
    pub async fn process_confirmation(&self, query: &str) -> Result<ConfirmationResult> {
        let confirmation = ConfirmationResult::from_query(query);

        if confirmation.success {
            self.session
                .put(CONFIRMATION_KEY, serde_json::to_string(&confirmation)?)
                .await?;
            self.notifier
                .notify(&confirmation.message, Severity::Success, Some(NOTIFY_DURATION))
                .await;
        } else {
            tracing::warn!(
                transaction_id = confirmation.transaction_id.as_deref().unwrap_or(""),
                "payment not confirmed"
            );
            self.notifier
                .notify(&confirmation.message, Severity::Error, Some(NOTIFY_DURATION))
                .await;
        }

        Ok(confirmation)
    }

    /// Abandons the flow: warns the user and navigates back to the join page.
    pub async fn cancel_payment(&self) -> Result<()> {
        self.notifier
            .notify(CANCELLED_MESSAGE, Severity::Warning, None)
            .await;
        self.navigator.goto(&self.config.cancel_url).await
    }
}

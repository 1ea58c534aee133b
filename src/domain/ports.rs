use crate::domain::form::GatewayForm;
use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Severity tag for user-facing notifications.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// Full-page navigation capability.
///
/// Submitting a form is a navigation, not an awaited network call: the
/// current page is expected to unload and there is no response to read back.
#[async_trait]
pub trait Navigator: Send + Sync {
    /// Performs the full-page POST of a checkout form.
    async fn submit_form(&self, form: GatewayForm) -> Result<()>;
    /// Navigates to a plain URL.
    async fn goto(&self, url: &str) -> Result<()>;
}

/// Transient user notification capability ("show a message").
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, message: &str, severity: Severity, duration: Option<Duration>);
}

/// Key-value session store carrying data across the redirect boundary.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn put(&self, key: &str, value: String) -> Result<()>;
    async fn get(&self, key: &str) -> Result<Option<String>>;
}

pub type NavigatorBox = Box<dyn Navigator>;
pub type NotifierBox = Box<dyn Notifier>;
pub type SessionStoreBox = Box<dyn SessionStore>;

use crate::domain::form::GatewayForm;
use crate::domain::ports::{Navigator, Notifier, Severity};
use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// The CLI's stand-in for a browser navigation: prints the POST target and
/// the form-encoded body to stdout, then "leaves the page" by returning.
#[derive(Default, Clone)]
pub struct ConsoleNavigator;

impl ConsoleNavigator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Navigator for ConsoleNavigator {
    async fn submit_form(&self, form: GatewayForm) -> Result<()> {
        println!("POST {}", form.endpoint);
        println!("{}", form.encode());
        Ok(())
    }

    async fn goto(&self, url: &str) -> Result<()> {
        println!("GOTO {url}");
        Ok(())
    }
}

/// Maps notification severities onto tracing levels.
#[derive(Default, Clone)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for TracingNotifier {
    async fn notify(&self, message: &str, severity: Severity, _duration: Option<Duration>) {
        match severity {
            Severity::Info | Severity::Success => tracing::info!("{message}"),
            Severity::Warning => tracing::warn!("{message}"),
            Severity::Error => tracing::error!("{message}"),
        }
    }
}

use crate::domain::form::GatewayForm;
use crate::domain::ports::{Navigator, Notifier, SessionStore, Severity};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// A thread-safe in-memory session store.
///
/// Uses `Arc<RwLock<HashMap<String, String>>>` to allow shared concurrent
/// access. Stands in for the browser's session storage when running outside
/// a page context, and doubles as the test store.
#[derive(Default, Clone)]
pub struct InMemorySessionStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemorySessionStore {
    /// Creates a new, empty in-memory session store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn put(&self, key: &str, value: String) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }
}

/// A navigator that records submissions instead of leaving the page.
///
/// The submitted forms and visited URLs can be read back, which makes the
/// otherwise-terminal navigation side effect assertable.
#[derive(Default, Clone)]
pub struct RecordingNavigator {
    submitted: Arc<RwLock<Vec<GatewayForm>>>,
    visited: Arc<RwLock<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn submitted(&self) -> Vec<GatewayForm> {
        self.submitted.read().await.clone()
    }

    pub async fn visited(&self) -> Vec<String> {
        self.visited.read().await.clone()
    }
}

#[async_trait]
impl Navigator for RecordingNavigator {
    async fn submit_form(&self, form: GatewayForm) -> Result<()> {
        let mut submitted = self.submitted.write().await;
        submitted.push(form);
        Ok(())
    }

    async fn goto(&self, url: &str) -> Result<()> {
        let mut visited = self.visited.write().await;
        visited.push(url.to_string());
        Ok(())
    }
}

/// A single recorded notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub duration: Option<Duration>,
}

/// A notifier that records every message it is asked to show.
#[derive(Default, Clone)]
pub struct RecordingNotifier {
    notifications: Arc<RwLock<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn notifications(&self) -> Vec<Notification> {
        self.notifications.read().await.clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, message: &str, severity: Severity, duration: Option<Duration>) {
        let mut notifications = self.notifications.write().await;
        notifications.push(Notification {
            message: message.to_string(),
            severity,
            duration,
        });
    }
}

//! Service context - dependency container for services
//!
//! Holds the repository ports and the flagging policy needed by services.
//! Everything behind the ports is swappable, which is how the unit tests
//! run against in-memory implementations.

use std::sync::Arc;

use flag_common::FlaggingConfig;
use flag_core::traits::{CommentRepository, EscalationNotifier, FraudRecordStore};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    comment_repo: Arc<dyn CommentRepository>,
    fraud_store: Arc<dyn FraudRecordStore>,
    notifier: Arc<dyn EscalationNotifier>,
    flagging: FlaggingConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        fraud_store: Arc<dyn FraudRecordStore>,
        notifier: Arc<dyn EscalationNotifier>,
        flagging: FlaggingConfig,
    ) -> Self {
        Self {
            comment_repo,
            fraud_store,
            notifier,
            flagging,
        }
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the fraud record store
    pub fn fraud_store(&self) -> &dyn FraudRecordStore {
        self.fraud_store.as_ref()
    }

    /// Get the escalation notifier
    pub fn notifier(&self) -> &dyn EscalationNotifier {
        self.notifier.as_ref()
    }

    /// Get the flagging policy
    pub fn flagging(&self) -> &FlaggingConfig {
        &self.flagging
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("comment_repo", &"dyn CommentRepository")
            .field("fraud_store", &"dyn FraudRecordStore")
            .field("notifier", &"dyn EscalationNotifier")
            .field("flagging", &self.flagging)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    comment_repo: Option<Arc<dyn CommentRepository>>,
    fraud_store: Option<Arc<dyn FraudRecordStore>>,
    notifier: Option<Arc<dyn EscalationNotifier>>,
    flagging: FlaggingConfig,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            comment_repo: None,
            fraud_store: None,
            notifier: None,
            flagging: FlaggingConfig::default(),
        }
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn fraud_store(mut self, store: Arc<dyn FraudRecordStore>) -> Self {
        self.fraud_store = Some(store);
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn EscalationNotifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn flagging(mut self, flagging: FlaggingConfig) -> Self {
        self.flagging = flagging;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if a required dependency is missing
    /// or the flagging policy is invalid.
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        self.flagging
            .validate()
            .map_err(|e| super::error::ServiceError::validation(e.to_string()))?;

        Ok(ServiceContext::new(
            self.comment_repo.ok_or_else(|| {
                super::error::ServiceError::validation("comment_repo is required")
            })?,
            self.fraud_store
                .ok_or_else(|| super::error::ServiceError::validation("fraud_store is required"))?,
            self.notifier
                .ok_or_else(|| super::error::ServiceError::validation("notifier is required"))?,
            self.flagging,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! In-memory port implementations for unit tests

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use flag_core::entities::{Comment, ModerationState};
use flag_core::error::DomainError;
use flag_core::events::CommentEscalatedEvent;
use flag_core::traits::{CommentRepository, EscalationNotifier, FraudRecordStore, RepoResult};
use flag_core::value_objects::{CommentId, FingerprintHash, FlagHistory};

#[derive(Default)]
pub struct InMemoryCommentRepository {
    comments: Mutex<BTreeMap<i64, Comment>>,
}

impl InMemoryCommentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, id: i64) {
        self.insert_comment(Comment {
            id: CommentId::new(id),
            report_count: 0,
            state: ModerationState::Visible,
            moderated: false,
            created_at: Utc::now(),
        });
    }

    pub fn insert_comment(&self, comment: Comment) {
        self.comments
            .lock()
            .unwrap()
            .insert(comment.id.into_inner(), comment);
    }

    pub fn get(&self, id: i64) -> Option<Comment> {
        self.comments.lock().unwrap().get(&id).cloned()
    }

    fn with_comment<T>(
        &self,
        id: CommentId,
        f: impl FnOnce(&mut Comment) -> T,
    ) -> RepoResult<T> {
        let mut comments = self.comments.lock().unwrap();
        comments
            .get_mut(&id.into_inner())
            .map(f)
            .ok_or(DomainError::CommentNotFound(id))
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn exists(&self, id: CommentId) -> RepoResult<bool> {
        Ok(self
            .comments
            .lock()
            .unwrap()
            .contains_key(&id.into_inner()))
    }

    async fn report_count(&self, id: CommentId) -> RepoResult<i64> {
        self.with_comment(id, |c| c.report_count)
    }

    async fn increment_report_count(&self, id: CommentId) -> RepoResult<i64> {
        self.with_comment(id, |c| {
            c.report_count += 1;
            c.report_count
        })
    }

    async fn moderation_state(&self, id: CommentId) -> RepoResult<ModerationState> {
        self.with_comment(id, |c| c.state)
    }

    async fn begin_moderation(&self, id: CommentId) -> RepoResult<bool> {
        self.with_comment(id, |c| {
            if c.state == ModerationState::Visible {
                c.state = ModerationState::UnderModeration;
                true
            } else {
                false
            }
        })
    }

    async fn is_moderated(&self, id: CommentId) -> RepoResult<bool> {
        self.with_comment(id, |c| c.moderated)
    }

    async fn set_moderated(&self, id: CommentId, moderated: bool) -> RepoResult<()> {
        self.with_comment(id, |c| c.moderated = moderated)
    }

    async fn reset_report_count(&self, id: CommentId) -> RepoResult<()> {
        self.with_comment(id, |c| c.report_count = 0)
    }
}

#[derive(Default)]
pub struct InMemoryFraudStore {
    records: Mutex<BTreeMap<String, FlagHistory>>,
    fail_reads: std::sync::atomic::AtomicBool,
    fail_writes: std::sync::atomic::AtomicBool,
}

impl InMemoryFraudStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn record_for(&self, fingerprint: &FingerprintHash) -> Option<FlagHistory> {
        self.records
            .lock()
            .unwrap()
            .get(fingerprint.as_str())
            .cloned()
    }
}

#[async_trait]
impl FraudRecordStore for InMemoryFraudStore {
    async fn get(&self, fingerprint: &FingerprintHash) -> RepoResult<Option<FlagHistory>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(DomainError::CacheError("read failed".into()));
        }
        Ok(self
            .records
            .lock()
            .unwrap()
            .get(fingerprint.as_str())
            .cloned())
    }

    async fn put(
        &self,
        fingerprint: &FingerprintHash,
        history: &FlagHistory,
        _ttl: Duration,
    ) -> RepoResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DomainError::CacheError("write failed".into()));
        }
        self.records
            .lock()
            .unwrap()
            .insert(fingerprint.as_str().to_string(), history.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    notifications: AtomicUsize,
    events: Mutex<Vec<CommentEscalatedEvent>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.notifications.load(Ordering::SeqCst)
    }

    pub fn events(&self) -> Vec<CommentEscalatedEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl EscalationNotifier for RecordingNotifier {
    async fn notify(&self, event: &CommentEscalatedEvent) -> RepoResult<()> {
        self.notifications.fetch_add(1, Ordering::SeqCst);
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}

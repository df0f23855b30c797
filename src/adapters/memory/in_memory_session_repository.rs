//! In-Memory Wizard Session Repository
//!
//! Keeps every session in a map guarded by a `tokio::sync::RwLock`.
//! Nothing survives a restart. Sessions idle for longer than the configured
//! timeout are treated as gone and are evicted when a new session is created.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, Timestamp};
use crate::domain::wizard::{EventOutcome, WizardSession};
use crate::ports::{SessionMutation, WizardSessionRepository};

/// In-memory storage for wizard sessions, bounded by `max_sessions`.
#[derive(Debug, Clone)]
pub struct InMemoryWizardSessionRepository {
    sessions: Arc<RwLock<HashMap<SessionId, WizardSession>>>,
    max_sessions: usize,
    idle_timeout: Option<chrono::Duration>,
}

impl InMemoryWizardSessionRepository {
    /// Create a new repository holding at most `max_sessions` sessions.
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            max_sessions,
            idle_timeout: None,
        }
    }

    /// Expire sessions whose last accepted event is older than `idle_timeout`.
    pub fn with_idle_timeout(mut self, idle_timeout: Duration) -> Self {
        self.idle_timeout = chrono::Duration::from_std(idle_timeout).ok();
        self
    }

    fn is_expired(&self, session: &WizardSession, now: &Timestamp) -> bool {
        self.idle_timeout
            .is_some_and(|ttl| now.duration_since(session.updated_at()) > ttl)
    }
}

impl Default for InMemoryWizardSessionRepository {
    fn default() -> Self {
        Self::new(10_000)
    }
}

fn not_found(id: &SessionId) -> DomainError {
    DomainError::new(ErrorCode::SessionNotFound, "Wizard session not found")
        .with_detail("session_id", id.to_string())
}

#[async_trait]
impl WizardSessionRepository for InMemoryWizardSessionRepository {
    async fn create(&self, session: &WizardSession) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().await;

        let now = Timestamp::now();
        let before = sessions.len();
        sessions.retain(|_, stored| !self.is_expired(stored, &now));
        if sessions.len() < before {
            debug!(evicted = before - sessions.len(), "idle wizard sessions evicted");
        }

        if sessions.len() >= self.max_sessions {
            return Err(DomainError::new(
                ErrorCode::CapacityExceeded,
                format!("Session limit of {} reached", self.max_sessions),
            ));
        }
        sessions.insert(*session.id(), session.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<WizardSession>, DomainError> {
        let now = Timestamp::now();
        Ok(self
            .sessions
            .read()
            .await
            .get(id)
            .filter(|stored| !self.is_expired(stored, &now))
            .cloned())
    }

    async fn modify(
        &self,
        id: &SessionId,
        mutation: SessionMutation,
    ) -> Result<(EventOutcome, WizardSession), DomainError> {
        let mut sessions = self.sessions.write().await;
        let now = Timestamp::now();
        match sessions.get_mut(id) {
            Some(stored) if !self.is_expired(stored, &now) => {
                let outcome = mutation(stored);
                Ok((outcome, stored.clone()))
            }
            _ => Err(not_found(id)),
        }
    }

    async fn delete(&self, id: &SessionId) -> Result<(), DomainError> {
        let now = Timestamp::now();
        self.sessions
            .write()
            .await
            .remove(id)
            .filter(|stored| !self.is_expired(stored, &now))
            .map(|_| ())
            .ok_or_else(|| not_found(id))
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let now = Timestamp::now();
        Ok(self
            .sessions
            .read()
            .await
            .values()
            .filter(|stored| !self.is_expired(stored, &now))
            .count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{ProductType, ReferenceTables, Segmentation};
    use crate::domain::wizard::WizardEvent;

    fn select(product_type: ProductType) -> SessionMutation {
        Box::new(move |session: &mut WizardSession| {
            session.apply(
                &WizardEvent::SelectProductType { product_type },
                ReferenceTables::standard(),
            )
        })
    }

    #[tokio::test]
    async fn create_then_find_returns_session() {
        let repo = InMemoryWizardSessionRepository::default();
        let session = WizardSession::new(SessionId::new());

        repo.create(&session).await.unwrap();

        let found = repo.find_by_id(session.id()).await.unwrap();
        assert_eq!(found, Some(session));
    }

    #[tokio::test]
    async fn find_unknown_returns_none() {
        let repo = InMemoryWizardSessionRepository::default();
        assert!(repo.find_by_id(&SessionId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn modify_changes_only_the_target_session() {
        let repo = InMemoryWizardSessionRepository::default();
        let first = WizardSession::new(SessionId::new());
        let second = WizardSession::new(SessionId::new());
        repo.create(&first).await.unwrap();
        repo.create(&second).await.unwrap();

        let (outcome, returned) = repo
            .modify(first.id(), select(ProductType::Electronics))
            .await
            .unwrap();

        assert!(outcome.is_applied());
        assert_eq!(returned.state().product_type(), Some(ProductType::Electronics));
        let stored_first = repo.find_by_id(first.id()).await.unwrap().unwrap();
        let stored_second = repo.find_by_id(second.id()).await.unwrap().unwrap();
        assert_eq!(stored_first, returned);
        assert_eq!(stored_second.state().product_type(), None);
    }

    #[tokio::test]
    async fn modify_unknown_session_fails() {
        let repo = InMemoryWizardSessionRepository::default();
        let err = repo
            .modify(&SessionId::new(), select(ProductType::Fmcg))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionNotFound);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_modifications_are_all_kept() {
        let repo = Arc::new(InMemoryWizardSessionRepository::default());
        let session = WizardSession::new(SessionId::new());
        let id = *session.id();
        repo.create(&session).await.unwrap();

        let tasks: Vec<_> = Segmentation::all()
            .iter()
            .map(|segment| {
                let repo = repo.clone();
                let segment = *segment;
                tokio::spawn(async move {
                    repo.modify(
                        &id,
                        Box::new(move |session: &mut WizardSession| {
                            session.apply(
                                &WizardEvent::AddSegment { segment },
                                ReferenceTables::standard(),
                            )
                        }),
                    )
                    .await
                })
            })
            .collect();
        for task in tasks {
            assert!(task.await.unwrap().unwrap().0.is_applied());
        }

        let stored = repo.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(stored.state().segmentation().len(), Segmentation::all().len());
    }

    #[tokio::test]
    async fn delete_removes_session() {
        let repo = InMemoryWizardSessionRepository::default();
        let session = WizardSession::new(SessionId::new());
        repo.create(&session).await.unwrap();

        repo.delete(session.id()).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 0);
        assert_eq!(
            repo.delete(session.id()).await.unwrap_err().code,
            ErrorCode::SessionNotFound
        );
    }

    #[tokio::test]
    async fn create_refuses_beyond_capacity() {
        let repo = InMemoryWizardSessionRepository::new(1);
        repo.create(&WizardSession::new(SessionId::new())).await.unwrap();

        let err = repo
            .create(&WizardSession::new(SessionId::new()))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::CapacityExceeded);
    }

    #[tokio::test]
    async fn idle_session_frees_its_slot() {
        let repo = InMemoryWizardSessionRepository::new(1)
            .with_idle_timeout(Duration::from_millis(50));
        let stale = WizardSession::new(SessionId::new());
        repo.create(&stale).await.unwrap();

        tokio::time::sleep(Duration::from_millis(120)).await;

        assert!(repo.find_by_id(stale.id()).await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 0);
        let fresh = WizardSession::new(SessionId::new());
        repo.create(&fresh).await.unwrap();
        assert_eq!(repo.find_by_id(fresh.id()).await.unwrap(), Some(fresh));
    }

    #[tokio::test]
    async fn idle_session_cannot_be_modified() {
        let repo = InMemoryWizardSessionRepository::default()
            .with_idle_timeout(Duration::from_millis(50));
        let session = WizardSession::new(SessionId::new());
        repo.create(&session).await.unwrap();

        tokio::time::sleep(Duration::from_millis(120)).await;

        let err = repo
            .modify(session.id(), select(ProductType::Luxury))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionNotFound);
    }

    #[tokio::test]
    async fn sessions_without_timeout_never_expire() {
        let repo = InMemoryWizardSessionRepository::new(1);
        let session = WizardSession::new(SessionId::new());
        repo.create(&session).await.unwrap();

        tokio::time::sleep(Duration::from_millis(20)).await;

        assert!(repo.find_by_id(session.id()).await.unwrap().is_some());
    }
}

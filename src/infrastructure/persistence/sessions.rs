use crate::domain::entities::Session;
use crate::domain::errors::DomainResult;
use crate::domain::ports::session_repository::SessionRepository;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Sessions keyed by token. Lost on restart.
#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<String, Session>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn create_session(&self, session: &Session) -> DomainResult<()> {
        self.sessions
            .write()
            .await
            .insert(session.token.clone(), session.clone());
        Ok(())
    }

    async fn get_session_by_token(&self, token: &str) -> DomainResult<Option<Session>> {
        Ok(self.sessions.read().await.get(token).cloned())
    }

    async fn delete_session(&self, token: &str) -> DomainResult<()> {
        self.sessions.write().await.remove(token);
        Ok(())
    }

    async fn cleanup_expired_sessions(&self) -> DomainResult<u64> {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired());
        Ok((before - sessions.len()) as u64)
    }
}

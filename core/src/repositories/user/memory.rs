//! In-memory implementation of UserRepository

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::{User, UserId};
use crate::errors::{messages, DomainError};

use super::trait_::UserRepository;

#[derive(Default)]
struct Tables {
    users: HashMap<UserId, User>,
    by_phone: HashMap<String, UserId>,
    last_id: UserId,
}

/// User store backed by process memory
///
/// Cloning shares the underlying tables.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.tables.read().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn is_phone_number_unique(&self, phone_number: &str) -> Result<bool, DomainError> {
        let tables = self.tables.read().await;
        Ok(!tables.by_phone.contains_key(phone_number))
    }

    async fn register(&self, user: User) -> Result<User, DomainError> {
        let mut tables = self.tables.write().await;

        // Checked under the write lock so concurrent registrations cannot both win.
        if tables.by_phone.contains_key(&user.phone_number) {
            return Err(DomainError::invalid_input(
                "memory::register",
                "phone_number",
                messages::PHONE_NUMBER_NOT_UNIQUE,
            ));
        }

        tables.last_id += 1;
        let user = user.with_id(tables.last_id);
        tables.by_phone.insert(user.phone_number.clone(), user.id);
        tables.users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn get_user_by_phone_number(&self, phone_number: &str) -> Result<User, DomainError> {
        let tables = self.tables.read().await;
        tables
            .by_phone
            .get(phone_number)
            .and_then(|id| tables.users.get(id))
            .cloned()
            .ok_or_else(|| DomainError::not_found("memory::get_user_by_phone_number"))
    }

    async fn get_user_by_id(&self, id: UserId) -> Result<User, DomainError> {
        let tables = self.tables.read().await;
        tables
            .users
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("memory::get_user_by_id"))
    }
}

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{UserError, UserResult};
use crate::models::{NewUser, UpdateUser, User};

/// Storage for user records. Every method maps to a single statement.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a record and return it with its assigned id.
    /// Fails with [`UserError::DuplicateEmail`] if the email is taken.
    async fn create(&self, input: NewUser) -> UserResult<User>;

    async fn find_by_id(&self, id: i32) -> UserResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// Replace name and email. Returns the number of rows touched.
    async fn update(&self, id: i32, input: &UpdateUser) -> UserResult<u64>;

    /// Returns the number of rows removed.
    async fn delete(&self, id: i32) -> UserResult<u64>;
}

#[derive(Debug, Default)]
struct Store {
    last_id: i32,
    users: BTreeMap<i32, User>,
}

/// In-memory implementation for tests and local runs
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn email_taken(store: &Store, email: &str, except: Option<i32>) -> bool {
    store
        .users
        .values()
        .any(|u| u.email == email && Some(u.id) != except)
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, input: NewUser) -> UserResult<User> {
        let mut store = self.store.write().await;

        if email_taken(&store, &input.email, None) {
            return Err(UserError::DuplicateEmail(input.email));
        }

        store.last_id += 1;
        let user = User {
            id: store.last_id,
            name: input.name,
            email: input.email,
            password_hash: input.password_hash,
            role: input.role,
        };
        store.users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn find_by_id(&self, id: i32) -> UserResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store.users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let store = self.store.read().await;
        Ok(store.users.values().find(|u| u.email == email).cloned())
    }

    async fn update(&self, id: i32, input: &UpdateUser) -> UserResult<u64> {
        let mut store = self.store.write().await;

        if !store.users.contains_key(&id) {
            return Ok(0);
        }
        if email_taken(&store, &input.email, Some(id)) {
            return Err(UserError::DuplicateEmail(input.email.clone()));
        }

        if let Some(user) = store.users.get_mut(&id) {
            user.name = input.name.clone();
            user.email = input.email.clone();
        }

        Ok(1)
    }

    async fn delete(&self, id: i32) -> UserResult<u64> {
        let mut store = self.store.write().await;
        Ok(store.users.remove(&id).map_or(0, |_| 1))
    }
}

use super::model::{Session, SignupOutcome, SignupRequest, UserRecord};
use super::validator::validate_email;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::Utc;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

const SUCCESS_LOCATION: &str = "success.html";
const SALT_LEN: usize = 16;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("user store unavailable: {0}")]
    Unavailable(String),
}

/// Persistent user store keyed by unique username and email.
pub trait UserStore {
    fn exists(
        &self,
        username: &str,
        email: &str,
    ) -> impl std::future::Future<Output = Result<bool, StoreError>>;

    fn insert(
        &self,
        fullname: &str,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> impl std::future::Future<Output = Result<UserRecord, StoreError>>;
}

/// HashMap-backed store for deployments without a database.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<u64, UserRecord>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn find_by_username(&self, username: &str) -> Option<UserRecord> {
        self.users
            .read()
            .await
            .values()
            .find(|user| user.username == username)
            .cloned()
    }
}

impl UserStore for InMemoryUserStore {
    async fn exists(&self, username: &str, email: &str) -> Result<bool, StoreError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .any(|user| user.username == username || user.email == email))
    }

    async fn insert(
        &self,
        fullname: &str,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<UserRecord, StoreError> {
        let mut users = self.users.write().await;
        let id = users.keys().max().copied().unwrap_or(0) + 1;
        let record = UserRecord {
            id,
            fullname: fullname.to_string(),
            username: username.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
        };

        users.insert(id, record.clone());

        Ok(record)
    }
}

/// The server half of the signup flow: mirrored minimal validation,
/// existence check, hashing, insertion, session creation.
pub struct SignupService<S: UserStore> {
    store: S,
}

impl<S: UserStore> SignupService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    #[tracing::instrument(skip(self, request), fields(username = %request.username))]
    pub async fn sign_up(&self, request: &SignupRequest) -> SignupOutcome {
        let fullname = request.fullname.trim();
        let username = request.username.trim();
        let email = request.email.trim();

        let mut errors = Vec::new();

        if fullname.is_empty() {
            errors.push("Full name is required".to_string());
        }
        if username.is_empty() {
            errors.push("Username is required".to_string());
        }
        if email.is_empty() || !validate_email(email).is_valid() {
            errors.push("Valid email is required".to_string());
        }
        if request.password.chars().count() < 6 {
            errors.push("Password must be at least 6 characters".to_string());
        }

        if errors.is_empty() {
            match self.register(fullname, username, email, &request.password).await {
                Ok(outcome) => return outcome,
                Err(e) => {
                    warn!("Registration failed: {e}");
                    errors.push(format!("Registration failed: {e}"));
                }
            }
        }

        SignupOutcome::Errors(errors)
    }

    async fn register(
        &self,
        fullname: &str,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<SignupOutcome, StoreError> {
        if self.store.exists(username, email).await? {
            return Ok(SignupOutcome::Errors(vec![
                "Username or email already exists".to_string(),
            ]));
        }

        let password_hash = hash_password(password);
        let user = self
            .store
            .insert(fullname, username, email, &password_hash)
            .await?;

        info!("Registered user {}", user.id);

        let session = Session {
            id: Uuid::new_v4().to_string(),
            user_id: user.id,
            username: user.username,
            fullname: user.fullname,
            email: user.email,
            created_at: Utc::now(),
        };

        Ok(SignupOutcome::Redirect {
            location: SUCCESS_LOCATION.to_string(),
            session,
        })
    }
}

/// Salted SHA-256, stored as `salt$digest` with both halves base64.
pub fn hash_password(password: &str) -> String {
    let salt: [u8; SALT_LEN] = rand::random();

    format!(
        "{}${}",
        STANDARD.encode(salt),
        STANDARD.encode(digest(&salt, password))
    )
}

pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt, expected)) = stored.split_once('$') else {
        return false;
    };
    let Ok(salt) = STANDARD.decode(salt) else {
        return false;
    };

    STANDARD.encode(digest(&salt, password)) == expected
}

fn digest(salt: &[u8], password: &str) -> Vec<u8> {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize().to_vec()
}

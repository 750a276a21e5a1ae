use std::sync::{Arc, Mutex};

use chrono::{Local, NaiveDate};
use sha2::{Digest, Sha256};
use tracing::{info, warn};

use super::domain::{AccountId, ProfileUpdate, StoredAccount, UserProfile};
use super::store::{AccountStore, StoreError};

/// Signup, login, and profile editing over an [`AccountStore`].
pub struct AccountService<S> {
    store: Arc<S>,
    mutation: Mutex<()>,
}

impl<S> AccountService<S>
where
    S: AccountStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            mutation: Mutex::new(()),
        }
    }

    /// Register a new member, returning the profile that becomes the session context.
    pub fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserProfile, AccountError> {
        self.signup_on(name, email, password, Local::now().date_naive())
    }

    pub(crate) fn signup_on(
        &self,
        name: &str,
        email: &str,
        password: &str,
        joined: NaiveDate,
    ) -> Result<UserProfile, AccountError> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() {
            return Err(AccountError::Invalid("name is required".to_string()));
        }
        if !email.contains('@') {
            return Err(AccountError::Invalid("email address is malformed".to_string()));
        }
        if password.is_empty() {
            return Err(AccountError::Invalid("password is required".to_string()));
        }

        let _guard = self.lock()?;
        let mut accounts = self.store.load()?;
        if accounts
            .iter()
            .any(|account| account.profile.email.eq_ignore_ascii_case(email))
        {
            return Err(AccountError::EmailTaken);
        }

        let id = AccountId(format!("user-{:06}", accounts.len() + 1));
        let profile = UserProfile::new_member(id, name, email, joined);
        accounts.push(StoredAccount {
            password_digest: password_digest(&profile.id, password),
            profile: profile.clone(),
        });
        self.store.save(&accounts)?;

        info!(account = %profile.id, "member registered");
        Ok(profile)
    }

    pub fn login(&self, email: &str, password: &str) -> Result<UserProfile, AccountError> {
        let email = email.trim();
        let accounts = self.store.load()?;

        let account = accounts.into_iter().find(|account| {
            account.profile.email.eq_ignore_ascii_case(email)
                && account.password_digest == password_digest(&account.profile.id, password)
        });

        match account {
            Some(account) => {
                info!(account = %account.profile.id, "member signed in");
                Ok(account.profile)
            }
            None => {
                warn!("rejected sign-in attempt");
                Err(AccountError::InvalidCredentials)
            }
        }
    }

    pub fn profile(&self, id: &AccountId) -> Result<UserProfile, AccountError> {
        self.store
            .load()?
            .into_iter()
            .find(|account| &account.profile.id == id)
            .map(|account| account.profile)
            .ok_or(AccountError::NotFound)
    }

    pub fn update_profile(
        &self,
        id: &AccountId,
        update: ProfileUpdate,
    ) -> Result<UserProfile, AccountError> {
        if update.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err(AccountError::Invalid("name cannot be blank".to_string()));
        }

        let _guard = self.lock()?;
        let mut accounts = self.store.load()?;
        let account = accounts
            .iter_mut()
            .find(|account| &account.profile.id == id)
            .ok_or(AccountError::NotFound)?;

        update.apply_to(&mut account.profile);
        let profile = account.profile.clone();
        self.store.save(&accounts)?;

        info!(account = %profile.id, "profile updated");
        Ok(profile)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, ()>, AccountError> {
        self.mutation
            .lock()
            .map_err(|_| StoreError::Unavailable("account mutation lock poisoned".to_string()).into())
    }
}

fn password_digest(id: &AccountId, password: &str) -> String {
    let digest = Sha256::new()
        .chain_update(id.0.as_bytes())
        .chain_update(b":")
        .chain_update(password.as_bytes())
        .finalize();
    format!("{digest:x}")
}

/// Error raised by the account service.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("invalid account data: {0}")]
    Invalid(String),
    #[error("email already registered")]
    EmailTaken,
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("account not found")]
    NotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
}

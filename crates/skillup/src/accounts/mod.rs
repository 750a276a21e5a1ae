//! Local member accounts and the profile editor.
//!
//! Accounts live in a single JSON blob; this is a prototype store, not a
//! credential protocol. Callers receive a [`UserProfile`] on login and pass it
//! explicitly to whatever needs session data.

pub mod domain;
pub mod router;
pub mod service;
pub mod store;

pub use domain::{AccountId, Credentials, ProfileUpdate, SignupRequest, StoredAccount, UserProfile};
pub use router::account_router;
pub use service::{AccountError, AccountService};
pub use store::{AccountStore, JsonFileStore, StoreError};

//! Discovery engine behind the SkillUp job and course screens.
//!
//! The core is [`discovery`]: a pure filter/rank pipeline over [`listings`].
//! Accounts, roadmap progress, and insights supply the surrounding product
//! features; configuration, telemetry, and errors follow the service stack.

pub mod accounts;
pub mod config;
pub mod dashboard;
pub mod discovery;
pub mod error;
pub mod insights;
pub mod listings;
pub mod roadmap;
pub mod telemetry;

#[cfg(test)]
mod test_support;

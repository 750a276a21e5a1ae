use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for registered members.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub String);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Public member profile; this is the session context handed to screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: AccountId,
    pub name: String,
    pub email: String,
    pub role: String,
    pub bio: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub completed_courses: u32,
    #[serde(default)]
    pub years_experience: u32,
    pub member_since: NaiveDate,
}

impl UserProfile {
    pub const DEFAULT_ROLE: &'static str = "Novo Membro";
    pub const DEFAULT_BIO: &'static str = "Bem-vindo ao SkillUp AI!";

    pub(crate) fn new_member(id: AccountId, name: &str, email: &str, joined: NaiveDate) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role: Self::DEFAULT_ROLE.to_string(),
            bio: Self::DEFAULT_BIO.to_string(),
            skills: Vec::new(),
            completed_courses: 0,
            years_experience: 0,
            member_since: joined,
        }
    }
}

/// Persisted account entry. Only a salted digest of the password is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredAccount {
    pub profile: UserProfile,
    pub password_digest: String,
}

/// Partial profile edit submitted from the profile screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub role: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
    pub completed_courses: Option<u32>,
    pub years_experience: Option<u32>,
}

impl ProfileUpdate {
    pub(crate) fn apply_to(self, profile: &mut UserProfile) {
        if let Some(name) = self.name {
            profile.name = name;
        }
        if let Some(role) = self.role {
            profile.role = role;
        }
        if let Some(bio) = self.bio {
            profile.bio = bio;
        }
        if let Some(skills) = self.skills {
            let mut deduped: Vec<String> = Vec::with_capacity(skills.len());
            for skill in skills {
                let skill = skill.trim();
                if !skill.is_empty() && !deduped.iter().any(|existing| existing == skill) {
                    deduped.push(skill.to_string());
                }
            }
            profile.skills = deduped;
        }
        if let Some(count) = self.completed_courses {
            profile.completed_courses = count;
        }
        if let Some(years) = self.years_experience {
            profile.years_experience = years;
        }
    }
}

/// Credentials posted by the login and signup screens.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

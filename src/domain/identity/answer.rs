//! Identity answers and lookup keys.

use std::fmt;

use crate::domain::foundation::Timestamp;

/// How a detected name is looked up in the user directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityKey {
    Email(String),
    FullName(String),
}

impl IdentityKey {
    /// Names containing `@` are treated as email addresses.
    pub fn from_detected_name(name: &str) -> Self {
        let name = name.trim();
        if name.contains('@') {
            IdentityKey::Email(name.to_string())
        } else {
            IdentityKey::FullName(name.to_string())
        }
    }
}

/// Answer to "who is visible / who am I".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonAnswer {
    /// A detected person whose user record agrees on the name.
    Confirmed { seen: String, full_name: String },
    /// A detected person without a matching record.
    Sighted { seen: String },
    /// Nobody detected, but the session identifies the caller.
    FromSession { full_name: String },
    NobodyVisible,
}

impl fmt::Display for PersonAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersonAnswer::Confirmed { seen, full_name } => write!(
                f,
                "I see {} in the camera. Your full name in my records is {}.",
                seen, full_name
            ),
            PersonAnswer::Sighted { seen } => write!(f, "I see {} in the camera.", seen),
            PersonAnswer::FromSession { full_name } => {
                write!(f, "According to my database, you are {}.", full_name)
            }
            PersonAnswer::NobodyVisible => {
                write!(f, "I'm sorry, I don't see anyone in the camera right now.")
            }
        }
    }
}

/// Answer to "tell me more about them".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowupAnswer {
    Details {
        created_at: Option<Timestamp>,
        email: Option<String>,
    },
    NoMoreInformation,
}

impl fmt::Display for FollowupAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FollowupAnswer::Details { created_at, email } => {
                let joined = created_at.map(|t| t.to_string()).unwrap_or_default();
                write!(
                    f,
                    "They joined on {} and use email {}.",
                    joined,
                    email.as_deref().unwrap_or_default()
                )
            }
            FollowupAnswer::NoMoreInformation => {
                write!(f, "Sorry, I don't have more information about them.")
            }
        }
    }
}

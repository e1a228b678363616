//! Core data types for the user system

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A registered user, as stored in the registry blob.
///
/// `id` and `email` are fixed at registration and only readable afterwards.
/// Fields the registry does not know about are kept in `profile` and written
/// back unchanged, so records produced by other clients round-trip intact.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    id: String,

    email: String,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Registration time
    pub created_at: DateTime<Utc>,

    /// Most recent successful authentication; equal to `created_at` until then
    pub last_login: DateTime<Utc>,

    /// Arbitrary extra profile fields
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl UserRecord {
    pub(crate) fn new(
        id: String,
        candidate: NewUser,
        email: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            name: candidate.name,
            created_at: now,
            last_login: now,
            profile: candidate.profile,
        }
    }

    /// The user's stable identifier
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The email the user registered with
    pub fn email(&self) -> &str {
        &self.email
    }

    pub(crate) fn touch_login(&mut self, now: DateTime<Utc>) {
        self.last_login = now;
    }
}

/// A registration candidate.
///
/// ```
/// use journalkeep::NewUser;
///
/// let candidate = NewUser::new("ada@example.com", "Ada")
///     .with_profile_field("timezone", "Europe/London");
/// assert_eq!(candidate.profile["timezone"], "Europe/London");
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct NewUser {
    pub email: String,

    #[serde(default)]
    pub name: String,

    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl NewUser {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            profile: Map::new(),
        }
    }

    /// Attach an extra profile field to the candidate.
    pub fn with_profile_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.profile.insert(key.into(), value.into());
        self
    }
}

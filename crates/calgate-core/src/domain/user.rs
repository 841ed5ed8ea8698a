//! User entity - accounts referenced by every owned resource

use serde::{Deserialize, Serialize};

use crate::error::{require_field, CalendarResult};
use crate::repository::Resource;

/// A registered user. The password is compared verbatim during login;
/// this is plain field matching, not an authentication subsystem, and
/// no token or session ever derives from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier, assigned by the repository
    #[serde(default)]
    pub id: String,

    /// Login email, unique across registered users
    pub email: String,

    /// Display name
    pub name: String,

    /// Plaintext password (field matching only)
    pub password: String,
}

impl User {
    /// Create an unregistered user (no id yet)
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            email: email.into(),
            name: name.into(),
            password: password.into(),
        }
    }
}

/// Login request body: the two fields matched against stored users.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Resource for User {
    const KIND: &'static str = "user";
    const COLLECTION: &'static str = "users";
    const OWNED: bool = false;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn owner_id(&self) -> Option<&str> {
        None
    }

    fn validate(&self) -> CalendarResult<()> {
        require_field("email", &self.email)?;
        require_field("name", &self.name)?;
        require_field("password", &self.password)?;
        Ok(())
    }
}

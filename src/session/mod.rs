//! Explicit session state for the logged-in user.
//!
//! The app shell resolves a login against
//! [`Dataset::find_client_by_identity`](crate::Dataset::find_client_by_identity)
//! or its advisor counterpart and builds a [`SessionUser`] from the
//! match. The value is then passed to whichever call needs the current
//! user id; there is no process-wide login state in this crate.

use serde::{Deserialize, Serialize};

use crate::dataset::{Advisor, Client};

/// Which directory table the logged-in user came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Client,
    Advisor,
}

/// Identity of the logged-in user for the duration of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    user_id: String,
    display_name: String,
    email: String,
    role: UserRole,
}

impl SessionUser {
    pub fn from_client(client: &Client) -> Self {
        Self {
            user_id: client.id.clone(),
            display_name: client.full_name(),
            email: client.email.clone(),
            role: UserRole::Client,
        }
    }

    pub fn from_advisor(advisor: &Advisor) -> Self {
        Self {
            user_id: advisor.id.clone(),
            display_name: advisor.full_name(),
            email: advisor.email.clone(),
            role: UserRole::Advisor,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> UserRole {
        self.role
    }
}

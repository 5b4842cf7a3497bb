//! Role lookup entity.

use crate::config::AUTHORIZED_ROLE_TITLE;

/// Read-only role row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: i32,
    pub title: String,
}

impl Role {
    /// Only managers pass the JWT gate.
    pub fn is_authorized(&self) -> bool {
        self.title == AUTHORIZED_ROLE_TITLE
    }
}

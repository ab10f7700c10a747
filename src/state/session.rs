//! Users created during this page session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by the sign-up page and handed read-only to `UserList`. Lives in
//! memory only; a reload starts empty.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::UserRecord;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionUsers {
    users: Vec<UserRecord>,
}

impl SessionUsers {
    /// Append a newly created user; insertion order is display order.
    pub fn push(&mut self, record: UserRecord) {
        self.users.push(record);
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn as_slice(&self) -> &[UserRecord] {
        &self.users
    }
}

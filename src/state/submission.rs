//! Sign-up submission flow.
//!
//! ARCHITECTURE
//! ============
//! Split into a synchronous start (`FormState::begin_submit`), the network
//! call, and a synchronous `finish_submission`. The form component runs the
//! halves around `spawn_local` so no signal is borrowed across an await;
//! `submit_sign_up` runs the whole flow on plain state.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use crate::net::api::{SignUpEndpoint, SubmitError};
use crate::net::types::UserRecord;
use crate::state::form::FormState;
use crate::state::session::SessionUsers;

/// Result of one submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Invalid values or a request already pending; nothing was sent.
    Rejected,
    Created(UserRecord),
    Failed(SubmitError),
}

/// Apply the endpoint's answer to form and session state.
///
/// Success appends the record and resets the form. Failure logs, keeps the
/// values, and sets a visible message.
pub fn finish_submission(
    form: &mut FormState,
    users: &mut SessionUsers,
    result: Result<UserRecord, SubmitError>,
) -> SubmitOutcome {
    match result {
        Ok(record) => {
            log::info!("sign up created user {:?} ({})", record.id, record.username);
            users.push(record.clone());
            form.submit_succeeded();
            SubmitOutcome::Created(record)
        }
        Err(e) => {
            log::error!("sign up failed: {e}");
            form.submit_failed(e.user_message());
            SubmitOutcome::Failed(e)
        }
    }
}

/// Validate, send, and apply the result.
pub async fn submit_sign_up<E: SignUpEndpoint>(
    endpoint: &E,
    form: &mut FormState,
    users: &mut SessionUsers,
) -> SubmitOutcome {
    let Some(values) = form.begin_submit() else {
        return SubmitOutcome::Rejected;
    };
    log::debug!("submitting sign up for {}", values.username);
    let result = endpoint.submit(&values.to_request()).await;
    finish_submission(form, users, result)
}

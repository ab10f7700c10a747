//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write state passed in as signals by the owning page;
//! they hold no state beyond local view concerns such as the current page.

pub mod sign_up_form;
pub mod user_list;

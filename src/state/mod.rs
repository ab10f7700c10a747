//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Each module is a plain struct with reducer methods, so the logic is
//! testable without a browser; components wrap them in `RwSignal`s.

pub mod form;
pub mod pagination;
pub mod session;
pub mod submission;

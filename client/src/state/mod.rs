//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern so pages depend on small focused models:
//! `session` binds the portal session to browser storage, `form` tracks the
//! inline alert and busy flag every form page shows.

pub mod form;
pub mod session;

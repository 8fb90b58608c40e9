//! Helpers shared by page modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` runs the route guard and the fetch-on-mount sequence for protected
//! pages. `redirect` ties delayed navigation to the page's mount lifetime.

pub mod auth;
pub mod redirect;

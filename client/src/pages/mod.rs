//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guarding, validation, the one
//! API call it makes) and delegates shared rendering to `components`.

pub mod admin;
pub mod check_quotes;
pub mod create_quote;
pub mod login;
pub mod password_reset;
pub mod register;
pub mod settings;
pub mod user;

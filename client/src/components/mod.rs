//! Reusable UI components shared across pages.

pub mod alert;
pub mod app_layout;
pub mod menu_bar;

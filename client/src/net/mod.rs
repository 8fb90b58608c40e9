//! Networking for the browser build.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` adapts `gloo-net` to the portal's `Transport` seam. The wire shapes
//! and error mapping live in `portal::api`.

pub mod api;

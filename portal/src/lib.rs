//! Session, claims, and route-guard core for the quote portal.
//!
//! This crate owns everything the browser client and the CLI agree on: how a
//! bearer token is stored and read back, which roles it carries, which routes
//! those roles may open, and how backend responses map onto user-visible
//! failures. It performs no I/O of its own; storage and HTTP are injected
//! through the [`session::SessionStore`] and [`api::Transport`] traits.
//!
//! Client-side role checks here are a rendering convenience. The backend
//! remains the enforcement point for every protected resource.

pub mod api;
pub mod claims;
pub mod forms;
pub mod guard;
pub mod page;
pub mod role;
pub mod route;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

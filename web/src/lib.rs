//! Web front-end over the remote todo API.
//!
//! # Overview
//! A single page at `/` driven by query parameters (`action`, `id`,
//! `title`). Each request performs one `TodoService` call through
//! `controller::handle` and renders the list, redirects back to it, or
//! redirects to the generic `/error` page.

pub mod config;
pub mod controller;
pub mod logging;
pub mod server;
pub mod view;

pub use config::AppConfig;
pub use controller::{handle, Action, ActionQuery, ListView, Outcome};
pub use server::{router, serve};

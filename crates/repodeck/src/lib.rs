//! Repodeck - repo-insights card UI.
//!
//! A single-page Dioxus web application: the user submits a GitHub URL or a
//! free-text search, the backend answers with repository metadata, a README
//! snippet, and AI-generated insights, and three independent renderers show
//! the result - a metadata panel, a README panel, and a circular carousel of
//! insight cards.
//!
//! # Architecture
//!
//! - **Client**: one `POST /api/insights` request per submission ([`client`])
//! - **Components**: query card, status line, result panels, carousel
//!   ([`components`])
//! - **Domain logic**: card construction and the carousel state machine live
//!   in `repodeck-core`, keeping this crate to DOM glue and presentation

// Enforce memory safety: forbid all unsafe code
#![forbid(unsafe_code)]

pub mod client;
pub mod components;
pub mod error;
pub mod utils;

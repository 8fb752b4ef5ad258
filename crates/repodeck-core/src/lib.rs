//! Repodeck core - domain logic for the repo-insights UI.
//!
//! Everything here is platform-agnostic: no DOM, no Dioxus, no async. The UI
//! crate measures the browser and paints pixels; this crate decides what the
//! measurements mean.
//!
//! # Architecture
//!
//! - **API types**: the `POST /api/insights` wire contract ([`api`])
//! - **Cards**: splitting AI insights text into heading-delimited cards ([`cards`])
//! - **Markdown**: markdown-to-HTML rendering with raw HTML escaped ([`markdown`])
//! - **Carousel**: the circular navigation state machine and all scroll
//!   geometry math ([`carousel`])

// Enforce memory safety: forbid all unsafe code
#![forbid(unsafe_code)]

pub mod api;
pub mod cards;
pub mod carousel;
pub mod markdown;

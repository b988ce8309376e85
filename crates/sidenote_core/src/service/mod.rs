//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store mutations and persistence side effects into
//!   UI-facing APIs.
//! - Keep presentation layers decoupled from storage details.

pub mod workspace;

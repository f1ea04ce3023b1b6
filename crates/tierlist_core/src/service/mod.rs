//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate catalog, placement model, and snapshot store into the
//!   drag-gesture entry point the UI layer calls.
//! - Keep UI layers decoupled from storage details.

pub mod tierlist_service;

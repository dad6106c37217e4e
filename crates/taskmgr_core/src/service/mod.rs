//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate each user operation as one load → operate → save cycle.
//! - Keep CLI and export layers decoupled from storage details.

pub mod task_service;

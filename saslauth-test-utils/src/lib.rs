//! Test utilities shared across the saslauth workspace
//!
//! This crate provides common testing infrastructure including:
//! - In-memory environment variables ([`MapEnv`])
//! - Scoped process environment changes ([`EnvVarGuard`])
//! - A scripted, recording prompter ([`ScriptedPrompter`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod env;
pub mod prompter;

// Re-export commonly used items
pub use env::{EnvVarGuard, MapEnv};
pub use prompter::{PromptKind, PromptRecord, ScriptedPrompter};

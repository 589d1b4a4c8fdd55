//! # saslauth CLI Library
//!
//! Command definitions and handlers for the saslauth command-line tool.

pub mod cli;

//! Core utilities shared by all Envlens crates.
//!
//! This crate carries no domain logic. It provides:
//! - the plugin system used to assemble the HTTP application
//!   ([`plugin::PluginManager`])
//! - RFC 7807 problem-details responses ([`problemdetails::Problem`])
//! - the [`error_builder`] helpers for constructing those responses

pub mod error_builder;
pub mod plugin;
pub mod problemdetails;

//! Extrack - flag pull requests that touch externally cited code
//!
//! Extrack keeps a registry of repository files that are referenced by external
//! sources such as blog posts or tutorials. When a pull request changes one of
//! those files, it maintains a single status comment on the pull request listing
//! the affected files and where they are cited.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Registry parsing, change matching, comment rendering and decisions
//! - `platform`: Hosting-platform collaborator (GitHub REST API)
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod platform;
pub mod utils;

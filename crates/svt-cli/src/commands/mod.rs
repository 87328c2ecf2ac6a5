//! Subcommand implementations.

pub mod canonicalize;
pub mod inspect;
pub mod issue;
pub mod verify;

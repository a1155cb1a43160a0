//! Action Center CLI
//!
//! Library half of the `action-center` binary: subcommand bodies and the
//! replay-script format.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod commands;
pub mod replay;

pub use replay::{replay, Edit, EditOutcome, EditResult, ReplayReport, ReplayScript, ScriptError};

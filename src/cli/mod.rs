//! Command-line interface module.

mod args;
pub mod build;
pub mod new;
pub mod preview;
pub mod publish;
pub mod serve;

pub use args::{BuildArgs, Cli, Commands, NewArgs};

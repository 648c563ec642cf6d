//! Domain logic for driving the Resource Hacker command-line tool.
//!
//! Everything with real behavior lives here: resource-mask normalization,
//! resource-script (`.rc`) parsing, argument-vector construction for each
//! supported operation, bounded subprocess execution, and the operation
//! handlers that tie those together. The MCP transport in `reshack-server`
//! is a thin dispatch layer over this crate.

pub mod command;
pub mod error;
pub mod mask;
pub mod ops;
pub mod paths;
pub mod rcscript;
pub mod request;
pub mod runner;

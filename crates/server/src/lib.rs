//! MCP stdio server for Resource Hacker operations.
//!
//! Exposes the building blocks (wire protocol types, tool catalog, dispatch,
//! stdio serve loop) so integration tests and the binary entrypoint can both
//! access them. All domain logic lives in `reshack-core`; this crate only
//! speaks the Model Context Protocol over stdin/stdout and routes tool calls.

pub mod dispatch;
pub mod protocol;
pub mod stdio;
pub mod tools;

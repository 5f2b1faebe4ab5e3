//! Test modules for the Kapili MCP Server.
//!
//! Cross-cutting tests that do not belong to a single module: configuration
//! loading from files and the environment, and the error reporting framework.
//! Dispatcher tests live next to the dispatcher in `protocol::jsonrpc::tests`.

pub mod test_utils;

pub use test_utils::{create_test_dir, TestFixture};

// Copyright (c) 2025 Kapili MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Cross-module tests for the dispatcher.

use serde_json::{json, Value};

use crate::config::server::HandleFormat;
use crate::config::KapiliConfig;
use crate::protocol::jsonrpc::{create_dispatcher, Dispatcher};

mod unit_tests;

/// Dispatcher with the standard tools and deterministic handles.
fn sequential_dispatcher() -> Dispatcher {
    let mut config = KapiliConfig::default();
    config.server.handle_format = HandleFormat::Sequential;
    create_dispatcher(&config).expect("standard tools register")
}

/// Sends one line and decodes the response.
fn send(dispatcher: &mut Dispatcher, line: &str) -> Value {
    let encoded = dispatcher.handle_line(line.as_bytes());
    assert!(!encoded.contains('\n'), "response must be a single line");
    serde_json::from_str(&encoded).expect("response is JSON")
}

/// Builds a `tools/call` request line.
fn call_line(id: u64, name: &str, arguments: Value) -> String {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "tools/call",
        "params": { "name": name, "arguments": arguments }
    })
    .to_string()
}

/// Decodes the value a successful `tools/call` produced.
fn tool_value(response: &Value) -> Value {
    assert_eq!(response["result"]["isError"], Value::Null, "unexpected failure: {response}");
    let text = response["result"]["content"][0]["text"]
        .as_str()
        .expect("text content");
    serde_json::from_str(text).expect("text is JSON")
}

/// Calls a tool that returns a handle and yields the handle string.
fn call_for_handle(dispatcher: &mut Dispatcher, name: &str, arguments: Value) -> String {
    let response = send(dispatcher, &call_line(0, name, arguments));
    match tool_value(&response) {
        Value::String(handle) => handle,
        other => panic!("{name} returned {other} instead of a handle"),
    }
}

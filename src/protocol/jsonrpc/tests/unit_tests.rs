// Copyright (c) 2025 Kapili MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Unit tests for request routing.

use serde_json::{json, Value};
use test_case::test_case;

use super::{call_line, send, sequential_dispatcher};
use crate::config::KapiliConfig;
use crate::error::tool::ToolError;
use crate::pool::HandlePool;
use crate::protocol::jsonrpc::{Dispatcher, ErrorCode};
use crate::tools::{InputSchema, ParamType, ToolArguments, ToolDescriptor, ToolRegistry, ToolResult};

fn fails(_pool: &mut HandlePool, _args: &ToolArguments) -> ToolResult {
    Err(ToolError::Operation("boom".to_string()))
}

fn stores(pool: &mut HandlePool, _args: &ToolArguments) -> ToolResult {
    Ok(pool.insert(())?.into())
}

fn custom_dispatcher() -> Dispatcher {
    let mut registry = ToolRegistry::new();
    registry
        .register(
            ToolDescriptor::new("fails", InputSchema::object(), fails)
                .with_description("Always fails"),
        )
        .unwrap();
    registry
        .register(ToolDescriptor::new(
            "stores",
            json!({ "type": "object", "properties": {}, "x-extra": [1, 2] }),
            stores,
        ))
        .unwrap();
    let config = KapiliConfig::default();
    Dispatcher::new(registry, HandlePool::from_config(&config), config)
}

#[test]
fn test_tools_list_reports_registered_schemas() {
    let mut dispatcher = custom_dispatcher();
    let response = send(&mut dispatcher, r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#);

    assert_eq!(
        response["result"],
        json!({
            "tools": [
                {
                    "name": "fails",
                    "description": "Always fails",
                    "inputSchema": { "type": "object", "properties": {}, "required": [] }
                },
                {
                    "name": "stores",
                    "inputSchema": { "type": "object", "properties": {}, "x-extra": [1, 2] }
                }
            ]
        })
    );
}

#[test]
fn test_tools_list_matches_registry() {
    let mut dispatcher = sequential_dispatcher();
    let response = send(&mut dispatcher, r#"{"id":"l","method":"tools/list"}"#);

    let listed = response["result"]["tools"].as_array().unwrap();
    let registered: Vec<_> = dispatcher.registry().descriptors().collect();
    assert_eq!(listed.len(), registered.len());
    for (entry, descriptor) in listed.iter().zip(registered) {
        assert_eq!(entry["name"], json!(descriptor.name()));
        assert_eq!(&entry["inputSchema"], descriptor.input_schema());
    }
}

#[test]
fn test_unknown_method_quotes_request() {
    let mut dispatcher = custom_dispatcher();
    let line = r#"{"id":9,"method":"resources/list"}"#;
    let response = send(&mut dispatcher, line);

    assert_eq!(response["id"], json!(9));
    assert_eq!(response["error"]["code"], json!(ErrorCode::MethodNotFound.code()));
    let message = response["error"]["message"].as_str().unwrap();
    assert!(message.starts_with("METHOD_NOT_FOUND: "));
    assert!(message.contains("resources/list"));
}

#[test_case("ping" ; "ping")]
#[test_case("notifications/initialized" ; "initialized notification")]
#[test_case("notifications/cancelled" ; "other notification")]
#[test_case("resources/list" ; "resources")]
#[test_case("Initialize" ; "method names are case sensitive")]
#[test_case("tools/call/" ; "trailing slash")]
fn test_only_three_methods_are_served(method: &str) {
    let mut dispatcher = sequential_dispatcher();

    let with_id = send(&mut dispatcher, &json!({ "jsonrpc": "2.0", "id": 4, "method": method }).to_string());
    assert_eq!(with_id["id"], json!(4));
    assert_eq!(with_id["error"]["code"], json!(-32601));
    assert!(with_id.get("result").is_none());

    let without_id = send(&mut dispatcher, &json!({ "jsonrpc": "2.0", "method": method }).to_string());
    assert_eq!(without_id["id"], json!(""));
    assert_eq!(without_id["error"]["code"], json!(-32601));
}

#[test]
fn test_tool_failure_is_isolated() {
    let mut dispatcher = custom_dispatcher();

    let failed = send(&mut dispatcher, &call_line(1, "fails", json!({})));
    assert_eq!(
        failed["result"],
        json!({ "content": [{ "type": "text", "message": "boom" }], "isError": true })
    );
    assert!(failed.get("error").is_none());
    assert!(dispatcher.pool().is_empty());

    let stored = send(&mut dispatcher, &call_line(2, "stores", json!({})));
    assert_eq!(stored["id"], json!(2));
    assert!(stored["result"].get("isError").is_none());
    assert_eq!(dispatcher.pool().len(), 1);
}

#[test]
fn test_unknown_handle_is_reported_in_band() {
    let mut dispatcher = sequential_dispatcher();
    let response = send(
        &mut dispatcher,
        &call_line(3, "range_get_value", json!({ "rangeId": "never-issued" })),
    );

    assert_eq!(response["result"]["isError"], json!(true));
    assert_eq!(
        response["result"]["content"][0]["message"],
        json!("Unknown handle: never-issued")
    );
}

#[test]
fn test_call_without_params_is_invalid_params() {
    let mut dispatcher = custom_dispatcher();
    for line in [
        r#"{"id":1,"method":"tools/call"}"#,
        r#"{"id":1,"method":"tools/call","params":{"arguments":{}}}"#,
        r#"{"id":1,"method":"tools/call","params":{"name":"stores","arguments":7}}"#,
    ] {
        let response = send(&mut dispatcher, line);
        assert_eq!(response["error"]["code"], json!(-32602), "{line}");
        assert_eq!(response["id"], json!(1));
    }
    assert!(dispatcher.pool().is_empty());
}

#[test]
fn test_response_has_result_xor_error() {
    let mut dispatcher = custom_dispatcher();
    for line in [
        r#"{"id":1,"method":"tools/list"}"#,
        r#"{"id":1,"method":"ping"}"#,
        r#"{"id":1,"method":"nope"}"#,
        "[]",
        "garbage",
    ] {
        let response = send(&mut dispatcher, line);
        assert_eq!(response["jsonrpc"], json!("2.0"));
        let has_result = response.get("result").is_some();
        let has_error = response.get("error").is_some();
        assert!(has_result != has_error, "{line} -> {response}");
    }
}

#[test]
fn test_invalid_request_variants() {
    let mut dispatcher = custom_dispatcher();
    let cases: [(&str, Value); 3] = [
        (r#"{"id":"a"}"#, json!("a")),
        (r#"{"id":2,"method":["x"]}"#, json!(2)),
        ("42", json!("")),
    ];
    for (line, id) in cases {
        let response = send(&mut dispatcher, line);
        assert_eq!(response["error"]["code"], json!(-32600), "{line}");
        assert_eq!(response["id"], id);
    }
}

#[test]
fn test_strict_arguments_flag() {
    let mut config = KapiliConfig::default();
    config.limits.strict_arguments = true;
    let mut registry = ToolRegistry::new();
    registry
        .register(ToolDescriptor::new(
            "needs_flag",
            InputSchema::object().required("flag", ParamType::Boolean),
            |pool: &mut HandlePool, args: &ToolArguments| Ok(pool.insert(args.bool("flag")?)?.into()),
        ))
        .unwrap();
    let mut dispatcher = Dispatcher::new(registry, HandlePool::from_config(&config), config);

    let response = send(&mut dispatcher, &call_line(1, "needs_flag", json!({ "flag": "yes" })));
    assert_eq!(response["result"]["isError"], json!(true));
    assert_eq!(
        response["result"]["content"][0]["message"],
        json!("Invalid argument `flag`: expected boolean")
    );
    assert!(dispatcher.pool().is_empty());
}

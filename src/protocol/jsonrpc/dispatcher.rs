// Copyright (c) 2025 Kapili MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! JSON-RPC 2.0 dispatcher.
//!
//! The dispatcher is responsible for:
//! - decoding one request line leniently into a JSON value
//! - validating the envelope and recovering the id
//! - routing the method to its handler
//! - producing exactly one encoded response per line
//!
//! It owns the handle pool and the frozen tool registry; nothing else in the
//! process mutates them.

use serde_json::Value;
use tracing::{debug, trace};

use super::error::JsonRpcError;
use super::methods::{handle_initialize, handle_tools_call, handle_tools_list, MethodResult};
use super::types::{Id, Response};
use super::validation::validate_envelope;
use crate::config::KapiliConfig;
use crate::pool::HandlePool;
use crate::tools::ToolRegistry;

/// Routes decoded requests to their handlers.
#[derive(Debug)]
pub struct Dispatcher {
    registry: ToolRegistry,
    pool: HandlePool,
    config: KapiliConfig,
}

impl Dispatcher {
    /// Creates a dispatcher over a filled registry and an empty pool.
    pub fn new(registry: ToolRegistry, pool: HandlePool, config: KapiliConfig) -> Self {
        Self {
            registry,
            pool,
            config,
        }
    }

    /// The registered tools.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// The handle pool.
    pub fn pool(&self) -> &HandlePool {
        &self.pool
    }

    /// The configuration the dispatcher was built with.
    pub fn config(&self) -> &KapiliConfig {
        &self.config
    }

    /// Handles one raw request line and returns the encoded response.
    ///
    /// The line must not contain the trailing newline. The transport cuts
    /// oversized lines at `max_line_bytes + 1`, which is still rejected here.
    pub fn handle_line(&mut self, line: &[u8]) -> String {
        let limit = self.config.limits.max_line_bytes;
        let response = if line.len() > limit {
            debug!(len = line.len(), limit, "Rejecting oversized request");
            Response::error(
                Id::placeholder(),
                JsonRpcError::oversized_request(limit),
            )
        } else {
            self.dispatch(serde_json::from_slice(line))
        };
        response.encode()
    }

    /// Produces the response for one decode outcome.
    pub fn dispatch(&mut self, decoded: Result<Value, serde_json::Error>) -> Response {
        let request = match decoded {
            Ok(request) => request,
            Err(e) => {
                debug!(error = %e, "Request is not valid JSON");
                return Response::error(Id::placeholder(), JsonRpcError::parse_error(&e));
            }
        };

        let envelope = match validate_envelope(&request) {
            Ok(envelope) => envelope,
            Err(error) => return Response::error(Id::recover(&request), error),
        };

        trace!(id = %envelope.id, method = envelope.method, "Dispatching request");
        let result = self.route(&request, envelope.method, envelope.params);

        match result {
            Ok(result) => Response::success(envelope.id, result),
            Err(error) => Response::error(envelope.id, error),
        }
    }

    fn route(&mut self, request: &Value, method: &str, params: Option<&Value>) -> MethodResult {
        match method {
            "initialize" => handle_initialize(params, &self.config.server),
            "tools/list" => handle_tools_list(&self.registry),
            "tools/call" => handle_tools_call(
                request,
                params,
                &self.registry,
                &mut self.pool,
                self.config.limits.strict_arguments,
            ),
            _ => Err(JsonRpcError::method_not_found(request)),
        }
    }
}

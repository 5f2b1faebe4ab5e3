// Copyright (c) 2025 Kapili MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Server loop over the line transport.
//!
//! Reads request lines one at a time, dispatches each and writes its response
//! before reading the next, so responses leave in input order. Only EOF or an
//! I/O failure ends the loop.

use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{debug, info};

use super::stdio::StdioTransport;
use crate::error::transport::TransportError;
use crate::protocol::jsonrpc::Dispatcher;

/// Server that reads from a transport and dispatches to a [`Dispatcher`].
pub struct Server<R, W> {
    transport: StdioTransport<R, W>,
    dispatcher: Dispatcher,
}

impl<R, W> Server<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Creates a new server with the given transport and dispatcher.
    ///
    /// The transport's line limit is set from the dispatcher's configuration.
    pub fn new(mut transport: StdioTransport<R, W>, dispatcher: Dispatcher) -> Self {
        transport.set_max_line_bytes(dispatcher.config().limits.max_line_bytes);
        Self {
            transport,
            dispatcher,
        }
    }

    /// The dispatcher serving requests.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Runs the server loop until the input is closed.
    pub async fn run(&mut self) -> Result<(), TransportError> {
        info!("Server listening on stdio");

        let mut served: u64 = 0;
        while let Some(line) = self.transport.read_line().await? {
            let response = self.dispatcher.handle_line(&line);
            debug!("{}", response);
            self.transport.write_line(&response).await?;
            served += 1;
        }

        info!(served, "Input closed, shutting down");
        Ok(())
    }

    /// Stops serving and returns the transport and dispatcher.
    pub fn into_parts(self) -> (StdioTransport<R, W>, Dispatcher) {
        (self.transport, self.dispatcher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KapiliConfig;
    use crate::protocol::jsonrpc::create_dispatcher;
    use serde_json::{json, Value};
    use std::io::Cursor;

    async fn serve(input: &str) -> Vec<Value> {
        let dispatcher = create_dispatcher(&KapiliConfig::default()).unwrap();
        let transport = StdioTransport::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let mut server = Server::new(transport, dispatcher);
        server.run().await.expect("run");

        let (transport, _) = server.into_parts();
        let output = String::from_utf8(transport.into_writer()).unwrap();
        output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_answers_every_line_in_order() {
        let responses = serve(concat!(
            "{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"initialize\"}\n",
            "not json\n",
            "\n",
            "{\"jsonrpc\":\"2.0\",\"id\":\"two\",\"method\":\"nope\"}\r\n",
            "{\"jsonrpc\":\"2.0\",\"id\":3,\"method\":\"tools/list\"}",
        ))
        .await;

        assert_eq!(responses.len(), 5);
        assert_eq!(responses[0]["id"], json!(1));
        assert!(responses[0]["result"]["capabilities"].is_object());
        assert_eq!(responses[1]["error"]["code"], json!(-32700));
        assert_eq!(responses[2]["error"]["code"], json!(-32700));
        assert_eq!(responses[3]["id"], json!("two"));
        assert_eq!(responses[3]["error"]["code"], json!(-32601));
        assert_eq!(responses[4]["id"], json!(3));
        assert!(responses[4]["result"]["tools"].is_array());
    }

    #[tokio::test]
    async fn test_oversized_line_is_answered_and_serving_continues() {
        let mut config = KapiliConfig::default();
        config.limits.max_line_bytes = 64;
        let dispatcher = create_dispatcher(&config).unwrap();

        let mut input = format!("{{\"id\":1,\"method\":\"tools/list\",\"pad\":\"{}\"}}\n", "x".repeat(4096));
        input.push_str("{\"id\":2,\"method\":\"tools/list\"}\n");
        let transport = StdioTransport::new(Cursor::new(input.into_bytes()), Vec::new());
        let mut server = Server::new(transport, dispatcher);
        server.run().await.unwrap();

        let (transport, _) = server.into_parts();
        assert_eq!(transport.max_line_bytes(), 64);
        let output = String::from_utf8(transport.into_writer()).unwrap();
        let responses: Vec<Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0]["id"], json!(""));
        assert_eq!(
            responses[0]["error"]["message"],
            json!("INVALID_REQUEST: request exceeds the 64 byte limit")
        );
        assert_eq!(responses[1]["id"], json!(2));
        assert!(responses[1]["result"]["tools"].is_array());
    }

    #[tokio::test]
    async fn test_empty_input_ends_cleanly() {
        assert!(serve("").await.is_empty());
    }
}

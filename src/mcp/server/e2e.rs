// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-BlobGuard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of BlobGuard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::*;

use rmcp::service::RunningService;
use rmcp::RoleClient;
use serde_json::{json, Value};
use tokio::task::JoinHandle;

/// A server and an rmcp client talking JSON-RPC over an in-memory pipe.
struct McpHarness {
    client: RunningService<RoleClient, ()>,
    server: JoinHandle<()>,
}

impl McpHarness {
    async fn start(mcp: BlobGuardMcp) -> Self {
        let (server_io, client_io) = tokio::io::duplex(64 * 1024);
        let server = tokio::spawn(async move {
            let running = mcp.serve(server_io).await.expect("serve over duplex");
            let _ = running.waiting().await;
        });
        let client = ().serve(client_io).await.expect("client handshake");
        Self { client, server }
    }

    async fn call(&self, tool: &str, arguments: Value) -> CallToolResult {
        let request = serde_json::from_value(json!({ "name": tool, "arguments": arguments }))
            .expect("tools/call request");
        self.client.call_tool(request).await.expect("tools/call")
    }

    async fn call_structured(&self, tool: &str, arguments: Value) -> Value {
        let result = self.call(tool, arguments).await;
        assert_ne!(result.is_error, Some(true), "{tool} must answer in-band");
        result.structured_content.expect("structured content")
    }

    async fn tool_names(&self) -> Vec<String> {
        let tools = self.client.list_all_tools().await.expect("tools/list");
        tools.into_iter().map(|tool| tool.name.to_string()).collect()
    }

    async fn shutdown(self) {
        let _ = self.client.cancel().await;
        let _ = self.server.await;
    }
}

fn text_contents(result: &CallToolResult) -> Vec<String> {
    let content = serde_json::to_value(&result.content).expect("serialize content");
    content
        .as_array()
        .expect("content array")
        .iter()
        .filter_map(|item| item["text"].as_str().map(str::to_owned))
        .collect()
}

#[tokio::test]
async fn e2e_save_conflict_force_and_get_over_client() {
    let harness = McpHarness::start(BlobGuardMcp::new()).await;

    let saved = harness
        .call_structured(
            "save_blob",
            json!({ "name": "foo", "content": "hello world", "metadata": { "type": "text" } }),
        )
        .await;
    assert_eq!(saved, json!({ "success": true }));

    let conflict =
        harness.call_structured("save_blob", json!({ "name": "foo", "content": "new text" })).await;
    assert_eq!(
        conflict,
        json!({ "error": "Blob 'foo' already exists. Use force=True to overwrite." })
    );

    let fetched = harness.call_structured("get_blob", json!({ "name": "foo" })).await;
    assert_eq!(fetched, json!({ "content": "hello world", "metadata": { "type": "text" } }));

    let forced = harness
        .call_structured("save_blob", json!({ "name": "foo", "content": "new text", "force": true }))
        .await;
    assert_eq!(forced, json!({ "success": true }));
    let fetched = harness.call_structured("get_blob", json!({ "name": "foo" })).await;
    assert_eq!(fetched, json!({ "content": "new text", "metadata": null }));

    let missing = harness.call_structured("get_blob", json!({ "name": "missing" })).await;
    assert_eq!(missing, json!({ "error": "Blob 'missing' not found." }));

    harness.shutdown().await;
}

#[tokio::test]
async fn e2e_explicit_null_metadata_and_text_mirror_structured_content() {
    let harness = McpHarness::start(BlobGuardMcp::new()).await;

    let result = harness
        .call("save_blob", json!({ "name": "bar", "content": "bar text", "metadata": null }))
        .await;
    assert_eq!(result.structured_content, Some(json!({ "success": true })));
    let texts = text_contents(&result);
    assert_eq!(texts.len(), 1);
    let mirrored: Value = serde_json::from_str(&texts[0]).expect("text content is JSON");
    assert_eq!(mirrored, json!({ "success": true }));

    let fetched = harness.call_structured("get_blob", json!({ "name": "bar" })).await;
    assert_eq!(fetched, json!({ "content": "bar text", "metadata": null }));

    harness.shutdown().await;
}

#[tokio::test]
async fn e2e_diff_over_client() {
    let harness = McpHarness::start(BlobGuardMcp::new()).await;
    harness.call("save_blob", json!({ "name": "a", "content": "line1\nline2\nline3\n" })).await;
    harness.call("save_blob", json!({ "name": "b", "content": "line1\nlineX\nline3\n" })).await;

    let diff = harness.call_structured("diff", json!({ "name1": "a", "name2": "b" })).await;
    assert_eq!(
        diff,
        json!({ "diff": "--- a\n+++ b\n@@ -1,3 +1,3 @@\n line1\n-line2\n+lineX\n line3\n" })
    );

    for (name1, name2) in [("a", "missing"), ("missing", "a")] {
        let reply =
            harness.call_structured("diff", json!({ "name1": name1, "name2": name2 })).await;
        assert_eq!(reply, json!({ "error": "Blob 'missing' not found." }));
    }

    harness.call("save_blob", json!({ "name": "c", "content": "same\ntext\n" })).await;
    harness.call("save_blob", json!({ "name": "d", "content": "same\ntext\n" })).await;
    let identical = harness.call_structured("diff", json!({ "name1": "c", "name2": "d" })).await;
    assert_eq!(identical, json!({ "diff": "" }));

    harness.shutdown().await;
}

#[tokio::test]
async fn e2e_reset_tool_is_hidden_by_default() {
    let harness = McpHarness::start(BlobGuardMcp::new()).await;

    let mut names = harness.tool_names().await;
    names.sort();
    assert_eq!(names, vec!["diff", "get_blob", "save_blob"]);

    harness.shutdown().await;
}

#[tokio::test]
async fn e2e_reset_tool_clears_session_and_replies_with_text() {
    let harness = McpHarness::start(BlobGuardMcp::new().with_reset_tool()).await;
    assert!(harness.tool_names().await.iter().any(|name| name == RESET_TOOL_NAME));

    harness.call("save_blob", json!({ "name": "foo", "content": "x" })).await;
    let reset = harness.call(RESET_TOOL_NAME, json!({})).await;
    assert_eq!(text_contents(&reset), vec![RESET_CONFIRMATION.to_owned()]);

    let after = harness.call_structured("get_blob", json!({ "name": "foo" })).await;
    assert_eq!(after, json!({ "error": "Blob 'foo' not found." }));

    harness.shutdown().await;
}

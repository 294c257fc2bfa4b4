// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-BlobGuard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of BlobGuard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::Arc;

use axum::http::request::Parts;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Extensions, ServerCapabilities, ServerInfo};
use rmcp::service::RequestContext;
use rmcp::{tool, tool_handler, tool_router, ErrorData, RoleServer, ServerHandler, ServiceExt};
use serde::Serialize;

use crate::model::SessionKey;
use crate::store::{SessionRegistry, SharedStore};

use super::types::*;

/// HTTP header carrying the streamable-HTTP session id (matched case-insensitively).
pub const SESSION_ID_HEADER: &str = "mcp-session-id";

pub const RESET_TOOL_NAME: &str = "_reset_state";
pub const RESET_CONFIRMATION: &str = "State has been reset.";

#[derive(Clone)]
pub struct BlobGuardMcp {
    registry: Arc<SessionRegistry>,
    tool_router: ToolRouter<Self>,
}

impl Default for BlobGuardMcp {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl BlobGuardMcp {
    pub fn new() -> Self {
        Self::with_registry(Arc::new(SessionRegistry::new()))
    }

    /// Builds a server over an existing registry. Clones share the registry, so every
    /// HTTP session served from one instance lands in the same key space.
    pub fn with_registry(registry: Arc<SessionRegistry>) -> Self {
        let mut tool_router = Self::tool_router();
        tool_router.remove_route(RESET_TOOL_NAME);
        Self { registry, tool_router }
    }

    /// Routes the `_reset_state` tool, which wipes the caller's session store.
    pub fn with_reset_tool(mut self) -> Self {
        self.tool_router = Self::tool_router();
        self
    }

    pub fn registry(&self) -> &Arc<SessionRegistry> {
        &self.registry
    }

    pub fn has_tool(&self, name: &str) -> bool {
        self.tool_router.has_route(name)
    }

    pub async fn serve_stdio(self) -> Result<(), rmcp::RmcpError> {
        let service = self.serve((tokio::io::stdin(), tokio::io::stdout())).await?;
        service.waiting().await?;
        Ok(())
    }

    async fn store(&self, session_id: Option<&str>) -> (SessionKey, SharedStore) {
        let key = SessionKey::resolve(session_id);
        let store = self.registry.resolve_key(key.clone()).await;
        (key, store)
    }

    pub async fn save_blob_for(
        &self,
        session_id: Option<&str>,
        params: SaveBlobParams,
    ) -> ToolReply<SaveBlobResponse> {
        let SaveBlobParams { name, content, metadata, force } = params;
        let (session, store) = self.store(session_id).await;
        let result = store.lock().await.save(&name, content, metadata, force.unwrap_or(false));
        tracing::debug!(%session, blob = %name, ok = result.is_ok(), "save_blob");
        result.map(|()| SaveBlobResponse { success: true }).into()
    }

    pub async fn get_blob_for(
        &self,
        session_id: Option<&str>,
        params: GetBlobParams,
    ) -> ToolReply<GetBlobResponse> {
        let (session, store) = self.store(session_id).await;
        let result = store.lock().await.get(&params.name).map(|blob| GetBlobResponse {
            content: blob.content().to_owned(),
            metadata: blob.metadata().cloned(),
        });
        tracing::debug!(%session, blob = %params.name, ok = result.is_ok(), "get_blob");
        result.into()
    }

    pub async fn diff_for(
        &self,
        session_id: Option<&str>,
        params: DiffParams,
    ) -> ToolReply<DiffResponse> {
        let (session, store) = self.store(session_id).await;
        let result = store.lock().await.diff(&params.name1, &params.name2);
        tracing::debug!(
            %session,
            name1 = %params.name1,
            name2 = %params.name2,
            ok = result.is_ok(),
            "diff"
        );
        result.map(|diff| DiffResponse { diff }).into()
    }

    pub async fn reset_for(&self, session_id: Option<&str>) -> &'static str {
        let (session, store) = self.store(session_id).await;
        let removed = store.lock().await.reset();
        tracing::info!(%session, removed, "session store reset");
        RESET_CONFIRMATION
    }

    /// Save a blob under a unique name with optional metadata; fails with an `error` if
    /// the name is taken unless `force` is true.
    #[tool(name = "save_blob")]
    async fn save_blob(
        &self,
        params: Parameters<SaveBlobParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let session_id = session_id_from_extensions(&context.extensions).map(str::to_owned);
        structured_result(&self.save_blob_for(session_id.as_deref(), params.0).await)
    }

    /// Retrieve a blob's content and metadata (`null` if none) by name.
    #[tool(name = "get_blob")]
    async fn get_blob(
        &self,
        params: Parameters<GetBlobParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let session_id = session_id_from_extensions(&context.extensions).map(str::to_owned);
        structured_result(&self.get_blob_for(session_id.as_deref(), params.0).await)
    }

    /// Return a unified diff from blob `name1` to blob `name2`, like the output of
    /// `diff -u`; empty when the contents are identical.
    #[tool(name = "diff")]
    async fn diff(
        &self,
        params: Parameters<DiffParams>,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let session_id = session_id_from_extensions(&context.extensions).map(str::to_owned);
        structured_result(&self.diff_for(session_id.as_deref(), params.0).await)
    }

    /// Reset the in-memory storage of the current session. For testing purposes only.
    #[tool(name = "_reset_state")]
    async fn reset_state(
        &self,
        context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let session_id = session_id_from_extensions(&context.extensions).map(str::to_owned);
        let message = self.reset_for(session_id.as_deref()).await;
        Ok(CallToolResult::success(vec![Content::text(message)]))
    }
}

#[tool_handler]
impl ServerHandler for BlobGuardMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "BlobGuard session-scoped text blob store (tools: save_blob, get_blob, diff). Blobs are isolated per MCP session and live in memory only."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Session id supplied by the transport, if any.
///
/// Only streamable HTTP carries one (the `Mcp-Session-Id` request header); stdio and
/// in-process transports yield `None`.
pub(crate) fn session_id_from_extensions(extensions: &Extensions) -> Option<&str> {
    extensions.get::<Parts>()?.headers.get(SESSION_ID_HEADER)?.to_str().ok()
}

fn structured_result<T: Serialize>(reply: &ToolReply<T>) -> Result<CallToolResult, ErrorData> {
    let value = serde_json::to_value(reply).map_err(|err| {
        ErrorData::internal_error(format!("failed to serialize tool result: {err}"), None)
    })?;
    Ok(CallToolResult::structured(value))
}

#[cfg(test)]
mod e2e;

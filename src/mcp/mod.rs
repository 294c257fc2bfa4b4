// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-BlobGuard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of BlobGuard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Model Context Protocol (MCP) server surface.
//!
//! Each tool call resolves the caller's session store through the shared registry and
//! answers with a plain JSON mapping; domain failures come back as `{"error": ...}`.

mod server;
mod types;

pub use server::{BlobGuardMcp, RESET_CONFIRMATION, RESET_TOOL_NAME, SESSION_ID_HEADER};
pub use types::{
    DiffParams, DiffResponse, ErrorResponse, GetBlobParams, GetBlobResponse, SaveBlobParams,
    SaveBlobResponse, ToolReply,
};

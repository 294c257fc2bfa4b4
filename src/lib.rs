// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-BlobGuard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of BlobGuard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! BlobGuard: session-isolated, in-memory text blobs with unified diffs, served over MCP.

pub mod logging;
pub mod mcp;
pub mod model;
pub mod store;

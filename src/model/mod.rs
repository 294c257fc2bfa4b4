// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-BlobGuard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of BlobGuard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Value types shared by the store and the MCP surface.

pub mod blob;
pub mod ids;

pub use blob::{Blob, Metadata};
pub use ids::{BlobName, Id, IdError, SessionKey, DEFAULT_SESSION_KEY};

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-BlobGuard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of BlobGuard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Process-lifetime, per-session blob storage.
//!
//! [`SessionRegistry`] hands out one [`BlobStore`] per session key; each store holds the
//! session's named blobs and renders unified diffs between them. Nothing here touches
//! disk.

pub mod blob_store;
pub mod diff;
pub mod registry;

pub use blob_store::{BlobStore, StoreError};
pub use diff::{unified_diff, CONTEXT_LINES};
pub use registry::{SessionRegistry, SharedStore};

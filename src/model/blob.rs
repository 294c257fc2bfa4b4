// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-BlobGuard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of BlobGuard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Loosely-typed, caller-owned metadata attached to a blob. Stored verbatim.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// A named text value held by a store. Blobs are replaced wholesale, never patched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    content: String,
    metadata: Option<Metadata>,
}

impl Blob {
    pub fn new(content: impl Into<String>, metadata: Option<Metadata>) -> Self {
        Self {
            content: content.into(),
            metadata,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }
}

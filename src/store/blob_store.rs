// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-BlobGuard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of BlobGuard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;

use crate::model::{Blob, BlobName, Metadata};

use super::diff::unified_diff;

/// Caller-facing failures of blob operations.
///
/// The `Display` output is the exact message returned to MCP clients.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Blob '{name}' already exists. Use force=True to overwrite.")]
    AlreadyExists { name: String },
    #[error("Blob '{name}' not found.")]
    NotFound { name: String },
    #[error("Blob name must not be empty.")]
    InvalidName,
}

impl StoreError {
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::AlreadyExists { name } | Self::NotFound { name } => Some(name),
            Self::InvalidName => None,
        }
    }
}

/// Named text blobs owned by exactly one session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BlobStore {
    blobs: HashMap<BlobName, Blob>,
}

impl BlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }

    /// Stored names in ascending order.
    pub fn names(&self) -> Vec<&str> {
        let mut names = self.blobs.keys().map(BlobName::as_str).collect::<Vec<_>>();
        names.sort_unstable();
        names
    }

    /// Stores `content` under `name`.
    ///
    /// An existing entry is only replaced when `force` is set; otherwise the call fails
    /// with [`StoreError::AlreadyExists`] and the stored blob stays as it was.
    pub fn save(
        &mut self,
        name: &str,
        content: impl Into<String>,
        metadata: Option<Metadata>,
        force: bool,
    ) -> Result<(), StoreError> {
        let name = parse_name(name)?;
        if !force && self.blobs.contains_key(&name) {
            tracing::debug!(blob = %name, "save rejected: blob already exists");
            return Err(StoreError::AlreadyExists { name: name.into_string() });
        }

        let content = content.into();
        let bytes = content.len();
        let replaced = self.blobs.insert(name.clone(), Blob::new(content, metadata)).is_some();
        tracing::debug!(blob = %name, bytes, replaced, "blob saved");
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&Blob, StoreError> {
        let name = parse_name(name)?;
        self.blobs.get(name.as_str()).ok_or_else(|| {
            tracing::debug!(blob = %name, "blob not found");
            StoreError::NotFound { name: name.into_string() }
        })
    }

    /// Renders a unified diff from `name1` to `name2`.
    ///
    /// `name1` is looked up first, so when both are missing the error names `name1`.
    pub fn diff(&self, name1: &str, name2: &str) -> Result<String, StoreError> {
        let from = self.get(name1)?;
        let to = self.get(name2)?;
        Ok(unified_diff(name1, name2, from.content(), to.content()))
    }

    /// Drops every blob. Returns how many were removed.
    pub fn reset(&mut self) -> usize {
        let removed = self.blobs.len();
        self.blobs.clear();
        removed
    }
}

fn parse_name(name: &str) -> Result<BlobName, StoreError> {
    BlobName::new(name).map_err(|_| StoreError::InvalidName)
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-BlobGuard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of BlobGuard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::Metadata;
use crate::store::StoreError;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SaveBlobParams {
    /// The unique name for the blob.
    pub name: String,
    /// The text content to store.
    pub content: String,
    /// Optional metadata object stored alongside the content.
    #[serde(default)]
    pub metadata: Option<Metadata>,
    /// When true, overwrite an existing blob with the same name (default false).
    #[serde(default)]
    pub force: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetBlobParams {
    /// The name of the blob to retrieve.
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DiffParams {
    /// The blob used as the `---` side of the diff.
    pub name1: String,
    /// The blob used as the `+++` side of the diff.
    pub name2: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SaveBlobResponse {
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GetBlobResponse {
    pub content: String,
    /// `null` when the blob was saved without metadata.
    pub metadata: Option<Metadata>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DiffResponse {
    /// Unified diff text; empty when both blobs hold identical content.
    pub diff: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Tool outcome as seen by clients: either the success payload or `{"error": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToolReply<T> {
    Ok(T),
    Err(ErrorResponse),
}

impl<T> From<Result<T, StoreError>> for ToolReply<T> {
    fn from(result: Result<T, StoreError>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(err) => Self::Err(ErrorResponse { error: err.to_string() }),
        }
    }
}

impl<T> ToolReply<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Ok(_) => None,
            Self::Err(response) => Some(&response.error),
        }
    }
}

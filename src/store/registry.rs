// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-BlobGuard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of BlobGuard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::model::SessionKey;

use super::BlobStore;

/// A store handle shared between the registry and in-flight tool calls.
pub type SharedStore = Arc<Mutex<BlobStore>>;

/// Maps session keys onto their stores.
///
/// Stores are created on first reference and live as long as the registry; there is no
/// eviction.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<SessionKey, SharedStore>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the store for `session_id`, creating an empty one if this is the first
    /// reference. Missing or empty identifiers share the fallback session.
    pub async fn resolve(&self, session_id: Option<&str>) -> SharedStore {
        self.resolve_key(SessionKey::resolve(session_id)).await
    }

    pub async fn resolve_key(&self, key: SessionKey) -> SharedStore {
        let mut sessions = self.sessions.lock().await;
        if let Some(store) = sessions.get(&key) {
            return Arc::clone(store);
        }

        tracing::info!(session = %key, fallback = key.is_fallback(), "session store created");
        let store = SharedStore::default();
        sessions.insert(key, Arc::clone(&store));
        store
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.lock().await.len()
    }
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-BlobGuard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of BlobGuard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;

use smol_str::SmolStr;

/// Session key used when the transport cannot tell sessions apart (stdio, tests, or
/// clients that never send a session header).
pub const DEFAULT_SESSION_KEY: &str = "default_session";

/// A validated, non-empty name.
///
/// Unlike session keys, names carry no further restrictions: slashes, whitespace and
/// unicode are all accepted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
        let value = value.into();
        if value.is_empty() {
            return Err(IdError::Empty);
        }
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl<T> Borrow<str> for Id<T> {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    #[error("name must not be empty")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlobNameTag {}
pub type BlobName = Id<BlobNameTag>;

/// Opaque key identifying one client session.
///
/// The core never inspects it; it only compares keys for equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionKey(SmolStr);

impl SessionKey {
    /// Maps a transport-supplied identifier onto a key, substituting
    /// [`DEFAULT_SESSION_KEY`] when the identifier is missing or empty.
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw {
            Some(raw) if !raw.is_empty() => Self(SmolStr::new(raw)),
            _ => Self::fallback(),
        }
    }

    pub fn fallback() -> Self {
        Self(SmolStr::new_static(DEFAULT_SESSION_KEY))
    }

    pub fn is_fallback(&self) -> bool {
        self.0 == DEFAULT_SESSION_KEY
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for SessionKey {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-BlobGuard-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of BlobGuard and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Line-oriented unified diff rendering.
//!
//! Output follows GNU `diff -u` text: `--- <from>` / `+++ <to>` file labels, `@@` hunk
//! headers, three lines of context, and a `\ No newline at end of file` marker after a
//! final line that lacks its terminator. Identical inputs render as the empty string
//! (no headers).

use similar::{Algorithm, TextDiff};

/// Unchanged lines kept on each side of a change.
pub const CONTEXT_LINES: usize = 3;

pub fn unified_diff(from_label: &str, to_label: &str, old: &str, new: &str) -> String {
    if old == new {
        return String::new();
    }

    TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_lines(old, new)
        .unified_diff()
        .context_radius(CONTEXT_LINES)
        .missing_newline_hint(true)
        .header(from_label, to_label)
        .to_string()
}

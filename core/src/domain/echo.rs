// Copyright (c) 2026 Parley Contributors
// SPDX-License-Identifier: AGPL-3.0
//! Echo transform used by the introvert's `GET /api/message`.

/// Uppercase `text` and repeat it `repeat` times, space separated.
///
/// A `repeat` of zero is treated as one so the echo is never blank.
pub fn shout(text: &str, repeat: usize) -> String {
    let loud = text.to_uppercase();
    vec![loud; repeat.max(1)].join(" ")
}

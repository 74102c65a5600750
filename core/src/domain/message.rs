// Copyright (c) 2026 Parley Contributors
// SPDX-License-Identifier: AGPL-3.0
//! Message value object
//!
//! A [`Message`] is the only thing the relay carries. It is validated once at
//! the HTTP boundary and is never empty afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Reasons a submitted message is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MessageError {
    #[error("message field is missing")]
    Missing,

    #[error("message field is empty")]
    Empty,
}

/// A non-empty text message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Message(String);

impl Message {
    /// Validate a raw form field.
    pub fn parse(raw: Option<&str>) -> Result<Self, MessageError> {
        match raw {
            None => Err(MessageError::Missing),
            Some("") => Err(MessageError::Empty),
            Some(text) => Ok(Self(text.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Message {
    type Error = MessageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(MessageError::Empty);
        }
        Ok(Self(value))
    }
}

impl From<Message> for String {
    fn from(message: Message) -> Self {
        message.0
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

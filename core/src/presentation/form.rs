// Copyright (c) 2026 Parley Contributors
// SPDX-License-Identifier: AGPL-3.0
//! Message submission extractor
//!
//! Both services accept `POST /api/message` with a form-encoded `message`
//! field. A body that is not a form at all is treated the same as a form
//! without the field: the client gets the 400 page, not a 415.

use axum::extract::{Form, FromRequest, Request};
use serde::Deserialize;
use tracing::debug;

use super::error::ApiError;
use crate::domain::Message;

#[derive(Debug, Default, Deserialize)]
pub struct MessageForm {
    pub message: Option<String>,
}

/// A validated message taken from the request form.
#[derive(Debug)]
pub struct SubmittedMessage(pub Message);

impl<S> FromRequest<S> for SubmittedMessage
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let form = match Form::<MessageForm>::from_request(req, state).await {
            Ok(Form(form)) => form,
            Err(rejection) => {
                debug!(%rejection, "Unreadable message form");
                MessageForm::default()
            }
        };

        let message = Message::parse(form.message.as_deref())?;
        Ok(Self(message))
    }
}

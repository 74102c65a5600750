// Copyright (c) 2026 Parley Contributors
// SPDX-License-Identifier: AGPL-3.0
//! Index page rendering
//!
//! The page is a Handlebars template compiled into the binary. The message is
//! HTML-escaped by Handlebars, so whatever a client posts is shown as text.

use anyhow::{Context, Result};
use handlebars::Handlebars;
use serde::Serialize;

use parley_core::presentation::ApiError;

const INDEX_TEMPLATE: &str = include_str!("../templates/index.html.hbs");
const INDEX: &str = "index";

#[derive(Serialize)]
struct IndexContext<'a> {
    message: &'a str,
}

pub struct PageRenderer {
    handlebars: Handlebars<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars
            .register_template_string(INDEX, INDEX_TEMPLATE)
            .context("Invalid index page template")?;

        Ok(Self { handlebars })
    }

    pub fn index(&self, message: &str) -> Result<String, ApiError> {
        Ok(self.handlebars.render(INDEX, &IndexContext { message })?)
    }
}

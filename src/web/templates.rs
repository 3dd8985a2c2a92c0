//! Handlebars templates for the HTML catalog pages.
//!
//! Templates are compiled into the binary. Every page template extends the
//! `base` partial by defining an inline `content` partial.

use handlebars::{Handlebars, TemplateError};
use serde::Serialize;

use crate::error::AppResult;

const PARTIALS: &[(&str, &str)] = &[
    ("base", include_str!("../../templates/base.hbs")),
    ("pagination", include_str!("../../templates/pagination.hbs")),
];

const PAGES: &[(&str, &str)] = &[
    ("index", include_str!("../../templates/index.hbs")),
    ("book_list", include_str!("../../templates/book_list.hbs")),
    ("book_detail", include_str!("../../templates/book_detail.hbs")),
    ("author_list", include_str!("../../templates/author_list.hbs")),
    ("author_detail", include_str!("../../templates/author_detail.hbs")),
];

/// Registry of compiled page templates
pub struct Templates {
    registry: Handlebars<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();

        for (name, source) in PARTIALS {
            registry.register_partial(name, *source)?;
        }
        for (name, source) in PAGES {
            registry.register_template_string(name, *source)?;
        }

        Ok(Self { registry })
    }

    /// Render a page template with the given context
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> AppResult<String> {
        Ok(self.registry.render(name, data)?)
    }
}

//! Feedback text templates
//!
//! Templates like "%BGood%A%n%s" are tokenized once when the config is
//! loaded and rendered per judged cut without rescanning the source.

pub mod parser;
pub mod renderer;
mod token;


pub use parser::*;
pub use renderer::*;
pub use token::*;

use serde::{Deserialize, Serialize};

/// A pre-parsed feedback template
///
/// Serializes as its source text so configs round-trip unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Template {
    source: String,
    tokens: Tokens,
}

impl Template {
    pub fn parse(source: impl Into<String>) -> Self {
        let source = source.into();
        let tokens = tokenize(&source);
        Self { source, tokens }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Whether any token needs a cut score to render
    pub fn has_directives(&self) -> bool {
        self.tokens
            .iter()
            .any(|token| matches!(token, Token::Directive(_)))
    }

    pub fn render(&self, ctx: &RenderContext<'_>) -> String {
        render(&self.tokens, ctx)
    }

    pub fn render_static(&self) -> String {
        render_static(&self.tokens)
    }
}

impl PartialEq for Template {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl From<String> for Template {
    fn from(source: String) -> Self {
        Template::parse(source)
    }
}

impl From<&str> for Template {
    fn from(source: &str) -> Self {
        Template::parse(source)
    }
}

impl From<Template> for String {
    fn from(template: Template) -> Self {
        template.source
    }
}

/// Parse and render a template in one call
pub fn expand(template: &str, ctx: &RenderContext<'_>) -> String {
    Template::parse(template).render(ctx)
}

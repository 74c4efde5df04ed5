//! Template engine construction and rendering

use serde::Serialize;

use crate::error::{Result, TemplatingError};
use crate::partials::{PartialLoader, PartialLoaderAdapter};
use crate::template::Template;

/// Template engine with Liquid configuration
pub struct TemplateEngine {
    parser: liquid::Parser,
}

impl TemplateEngine {
    /// Create an engine with the standard library and no partials.
    pub fn new() -> Self {
        // Stdlib-only parser construction cannot fail.
        let parser = liquid::ParserBuilder::with_stdlib()
            .build()
            .expect("stdlib liquid parser");
        Self { parser }
    }

    /// Create an engine whose `{% include %}` tags resolve through the
    /// given loader.
    ///
    /// Partials are compiled eagerly; a malformed partial surfaces here
    /// rather than at render time.
    pub fn with_partials<T: PartialLoader + 'static>(loader: T) -> Result<Self> {
        let adapter = PartialLoaderAdapter::new(loader);
        let compiler = liquid::partials::EagerCompiler::new(adapter);
        let parser = liquid::ParserBuilder::with_stdlib()
            .partials(compiler)
            .build()
            .map_err(|e| TemplatingError::Parse(e.to_string()))?;
        Ok(Self { parser })
    }

    /// Parse a template string.
    pub fn parse(&self, template_str: &str) -> Result<Template> {
        let inner = self
            .parser
            .parse(template_str)
            .map_err(|e| TemplatingError::Parse(e.to_string()))?;
        Ok(Template::new(inner))
    }

    /// Parse and render in one step with serializable context data.
    pub fn render_data<T: Serialize>(&self, template_str: &str, data: &T) -> Result<String> {
        self.parse(template_str)?.render_data(data)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

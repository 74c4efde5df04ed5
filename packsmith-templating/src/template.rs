//! Parsed template wrapper

use serde::Serialize;

use crate::error::{Result, TemplatingError};

/// A parsed template ready to render.
///
/// Created through [`TemplateEngine::parse`](crate::TemplateEngine::parse)
/// so partial resolution follows the engine's configuration.
pub struct Template {
    inner: liquid::Template,
}

impl Template {
    pub(crate) fn new(inner: liquid::Template) -> Self {
        Self { inner }
    }

    /// Render with an explicit Liquid object.
    pub fn render(&self, globals: &liquid::Object) -> Result<String> {
        self.inner
            .render(globals)
            .map_err(|e| TemplatingError::Render(e.to_string()))
    }

    /// Render with any serializable value as the template context.
    ///
    /// The value must serialize to a map; each top-level key becomes a
    /// template variable.
    pub fn render_data<T: Serialize>(&self, data: &T) -> Result<String> {
        self.render(&to_liquid_object(data)?)
    }
}

/// Convert a serializable value into a Liquid object, one template
/// variable per top-level key.
pub(crate) fn to_liquid_object<T: Serialize>(data: &T) -> Result<liquid::Object> {
    let value =
        serde_json::to_value(data).map_err(|e| TemplatingError::Data(e.to_string()))?;
    let serde_json::Value::Object(map) = value else {
        return Err(TemplatingError::Data(
            "render data must serialize to a map".to_string(),
        ));
    };

    let mut globals = liquid::Object::new();
    for (key, value) in map {
        let value = liquid::model::to_value(&value)
            .map_err(|e| TemplatingError::Data(e.to_string()))?;
        globals.insert(key.into(), value);
    }
    Ok(globals)
}

#[cfg(test)]
mod tests {
    use crate::engine::TemplateEngine;
    use serde::Serialize;

    #[test]
    fn render_with_object() {
        let engine = TemplateEngine::new();
        let template = engine.parse("Hello {{ name }}!").unwrap();

        let globals = liquid::object!({ "name": "World" });
        assert_eq!(template.render(&globals).unwrap(), "Hello World!");
    }

    #[test]
    fn render_with_serializable_data() {
        #[derive(Serialize)]
        struct Ctx {
            package_name: String,
            count: usize,
        }

        let engine = TemplateEngine::new();
        let template = engine
            .parse("{{ package_name }} has {{ count }} streams")
            .unwrap();

        let ctx = Ctx {
            package_name: "mypkg".into(),
            count: 2,
        };
        assert_eq!(
            template.render_data(&ctx).unwrap(),
            "mypkg has 2 streams"
        );
    }

    #[test]
    fn render_loops_over_sequences() {
        #[derive(Serialize)]
        struct Ctx {
            items: Vec<String>,
        }

        let engine = TemplateEngine::new();
        let template = engine
            .parse("{% for item in items %}[{{ item }}]{% endfor %}")
            .unwrap();

        let ctx = Ctx {
            items: vec!["a".into(), "b".into()],
        };
        assert_eq!(template.render_data(&ctx).unwrap(), "[a][b]");
    }

    #[test]
    fn render_missing_variable_is_an_error() {
        let engine = TemplateEngine::new();
        let template = engine.parse("Hello {{ nobody }}!").unwrap();
        let globals = liquid::object!({});
        assert!(template.render(&globals).is_err());
    }
}

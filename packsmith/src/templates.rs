//! Builtin template set with on-disk overrides
//!
//! The templates shipped with Packsmith are embedded in the binary. A
//! caller may point at an override directory whose templates shadow the
//! builtin ones; resolution order is disk first, builtin last. Template
//! names are paths relative to the template root with the `.liquid`
//! suffix stripped, and templates can also be addressed by bare file name
//! regardless of which scoped subdirectory they live in.

use std::borrow::Cow;
use std::path::Path;

use include_dir::{include_dir, Dir};
use packsmith_templating::{
    partials::resolve_name, DirLoader, PartialLoader, Result, TemplateEngine,
};
use tracing::debug;

static BUILTIN_TEMPLATES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// The resolved template sources for one build.
#[derive(Debug, Clone, Default)]
pub struct TemplateSet {
    overrides: Option<DirLoader>,
}

impl TemplateSet {
    /// Builtin templates only.
    pub fn builtin() -> Self {
        Self { overrides: None }
    }

    /// Builtin templates shadowed by an override directory.
    pub fn with_override_dir(dir: &Path) -> Result<Self> {
        let overrides = DirLoader::new(&[dir])?;
        debug!(
            dir = %dir.display(),
            count = overrides.len(),
            "loaded template overrides"
        );
        Ok(Self {
            overrides: Some(overrides),
        })
    }

    /// Build a template engine whose `{% include %}` tags resolve through
    /// this set.
    pub fn engine(&self) -> Result<TemplateEngine> {
        TemplateEngine::with_partials(self.clone())
    }

    fn builtin_names() -> Vec<String> {
        let mut names = Vec::new();
        collect_names(&BUILTIN_TEMPLATES, &mut names);
        names
    }

    fn builtin_get(name: &str) -> Option<&'static str> {
        BUILTIN_TEMPLATES.get_file(name)?.contents_utf8()
    }
}

fn collect_names(dir: &Dir<'static>, out: &mut Vec<String>) {
    for file in dir.files() {
        if let Some(path) = file.path().to_str() {
            if let Some(name) = path.strip_suffix(".liquid") {
                out.push(name.to_string());
            }
        }
    }
    for sub in dir.dirs() {
        collect_names(sub, out);
    }
}

impl PartialLoader for TemplateSet {
    fn names(&self) -> Vec<String> {
        let mut names = Self::builtin_names();
        if let Some(overrides) = &self.overrides {
            for name in overrides.names() {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names.sort();
        names
    }

    fn try_get(&self, name: &str) -> Option<Cow<'_, str>> {
        if let Some(overrides) = &self.overrides {
            if let Some(content) = overrides.try_get(name) {
                return Some(content);
            }
        }
        let builtin = Self::builtin_names();
        let resolved = resolve_name(name, builtin.iter())?;
        Self::builtin_get(&format!("{resolved}.liquid")).map(Cow::Borrowed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn builtin_templates_are_embedded() {
        let set = TemplateSet::builtin();
        let names = set.names();
        assert!(names.contains(&"fields/base_fields.yml".to_string()));
        assert!(names.contains(&"docs/package_readme.md".to_string()));
        assert!(names.contains(&"docs/fields_table.md".to_string()));
    }

    #[test]
    fn resolves_by_bare_file_name() {
        let set = TemplateSet::builtin();
        let content = set.get("base_fields.yml").unwrap();
        assert!(content.contains("{{ module }}"));
        assert!(content.contains("{{ dataset }}"));
    }

    #[test]
    fn resolves_by_scoped_name() {
        let set = TemplateSet::builtin();
        let content = set.get("docs/package_readme.md").unwrap();
        assert!(content.contains("{{ package_name }}"));
    }

    #[test]
    fn unknown_template_is_an_error() {
        let set = TemplateSet::builtin();
        assert!(set.get("no_such_template.md").is_err());
    }

    #[test]
    fn override_directory_shadows_builtin() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("base_fields.yml.liquid"),
            "- name: only\n  type: keyword\n",
        )
        .unwrap();

        let set = TemplateSet::with_override_dir(temp.path()).unwrap();
        let content = set.get("base_fields.yml").unwrap();
        assert!(content.contains("only"));

        // Templates without overrides still come from the builtins
        assert!(set.get("package_readme.md").is_ok());
    }

    #[test]
    fn engine_builds_with_builtin_partials() {
        let set = TemplateSet::builtin();
        assert!(set.engine().is_ok());
    }
}

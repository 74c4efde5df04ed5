//! Partial template loading
//!
//! Templates reference partials by name; where that content comes from is
//! behind the [`PartialLoader`] trait. [`DirLoader`] scans an ordered list
//! of scoped directories for `*.liquid` files, [`MapLoader`] serves from
//! memory, and [`PartialLoaderAdapter`] bridges any loader into Liquid's
//! own `PartialSource` so `{% include %}` resolves through it.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::{Result, TemplatingError};

/// File extension for template files
pub const TEMPLATE_EXTENSION: &str = ".liquid";

/// Trait for loading partial templates from various sources
pub trait PartialLoader: Send + Sync + std::fmt::Debug {
    /// Check if a template with the given name exists
    fn contains(&self, name: &str) -> bool {
        self.try_get(name).is_some()
    }

    /// Get the names of all available templates
    fn names(&self) -> Vec<String>;

    /// Try to load a template by name
    fn try_get(&self, name: &str) -> Option<Cow<'_, str>>;

    /// Load a template by name, returning an error if not found
    fn get(&self, name: &str) -> Result<String> {
        self.try_get(name)
            .map(|s| s.into_owned())
            .ok_or_else(|| TemplatingError::TemplateNotFound {
                name: name.to_string(),
            })
    }
}

/// Candidate names to try when resolving a requested template name.
///
/// The `.liquid` suffix is optional on both sides: stored names have it
/// stripped, and Liquid's include machinery may append it back.
pub fn normalize_template_name(requested: &str) -> Vec<String> {
    let mut candidates = vec![requested.to_string()];
    if let Some(stripped) = requested.strip_suffix(TEMPLATE_EXTENSION) {
        candidates.push(stripped.to_string());
    } else {
        candidates.push(format!("{requested}{TEMPLATE_EXTENSION}"));
    }
    candidates
}

/// Resolve a requested name against a set of stored names.
///
/// Tries exact (normalized) matches first, then falls back to matching the
/// final path segment so templates can be addressed by bare file name
/// regardless of which scoped directory they live in. The fallback scans
/// names in sorted order, so a basename shared by several templates
/// resolves deterministically.
pub fn resolve_name<'a, I>(requested: &str, stored: I) -> Option<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut names: Vec<&String> = stored.into_iter().collect();
    names.sort();

    let candidates = normalize_template_name(requested);
    for candidate in &candidates {
        if names.iter().any(|name| *name == candidate) {
            return Some(candidate.clone());
        }
    }
    for candidate in &candidates {
        if let Some(name) = names
            .iter()
            .find(|name| name.rsplit('/').next() == Some(candidate.as_str()))
        {
            return Some((*name).clone());
        }
    }
    None
}

/// Loader that scans an ordered list of template directories.
///
/// Each directory is walked recursively for `*.liquid` files. Names are
/// the path relative to the scanned directory with the `.liquid` suffix
/// stripped (`docs/package_readme.md.liquid` → `docs/package_readme.md`).
/// Earlier directories win on name collisions.
#[derive(Debug, Clone, Default)]
pub struct DirLoader {
    templates: HashMap<String, String>,
}

impl DirLoader {
    /// Scan the given directories, earliest first.
    pub fn new<P: AsRef<Path>>(dirs: &[P]) -> Result<Self> {
        let mut templates = HashMap::new();
        for dir in dirs {
            load_dir(dir.as_ref(), &mut templates)?;
        }
        Ok(Self { templates })
    }

    /// Number of loaded templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether no templates were found.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn load_dir(dir: &Path, templates: &mut HashMap<String, String>) -> Result<()> {
    if !dir.is_dir() {
        tracing::debug!(dir = %dir.display(), "template directory missing, skipping");
        return Ok(());
    }
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| TemplatingError::Io(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let Some(relative) = path.strip_prefix(dir).ok().and_then(|p| p.to_str()) else {
            continue;
        };
        let Some(name) = relative.strip_suffix(TEMPLATE_EXTENSION) else {
            continue;
        };
        let name = name.replace('\\', "/");
        if templates.contains_key(&name) {
            continue;
        }
        let content = std::fs::read_to_string(path)?;
        templates.insert(name, content);
    }
    Ok(())
}

impl PartialLoader for DirLoader {
    fn names(&self) -> Vec<String> {
        self.templates.keys().cloned().collect()
    }

    fn try_get(&self, name: &str) -> Option<Cow<'_, str>> {
        let resolved = resolve_name(name, self.templates.keys())?;
        self.templates
            .get(&resolved)
            .map(|s| Cow::Borrowed(s.as_str()))
    }
}

/// Loader backed by an in-memory map, mainly for tests.
#[derive(Debug, Clone, Default)]
pub struct MapLoader {
    templates: HashMap<String, String>,
}

impl MapLoader {
    pub fn new(templates: HashMap<String, String>) -> Self {
        Self { templates }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a template under the given name.
    pub fn add(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.templates.insert(name.into(), content.into());
    }
}

impl PartialLoader for MapLoader {
    fn names(&self) -> Vec<String> {
        self.templates.keys().cloned().collect()
    }

    fn try_get(&self, name: &str) -> Option<Cow<'_, str>> {
        let resolved = resolve_name(name, self.templates.keys())?;
        self.templates
            .get(&resolved)
            .map(|s| Cow::Borrowed(s.as_str()))
    }
}

/// Adapter making any [`PartialLoader`] usable as Liquid's `PartialSource`
#[derive(Debug)]
pub struct PartialLoaderAdapter<T: PartialLoader> {
    loader: T,
    names_cache: Vec<String>,
}

impl<T: PartialLoader> PartialLoaderAdapter<T> {
    pub fn new(loader: T) -> Self {
        // Liquid's partial store is keyed by the exact names listed here,
        // so scoped templates are also listed under their bare file name
        // to keep `{% include 'name' %}` working across scopes.
        let mut names_cache = loader.names();
        names_cache.sort();
        let mut aliases = Vec::new();
        for name in &names_cache {
            if let Some((_, base)) = name.rsplit_once('/') {
                let taken = names_cache.iter().any(|n| n == base)
                    || aliases.iter().any(|a| a == base);
                if !taken {
                    aliases.push(base.to_string());
                }
            }
        }
        names_cache.extend(aliases);
        Self {
            loader,
            names_cache,
        }
    }
}

impl<T: PartialLoader> liquid::partials::PartialSource for PartialLoaderAdapter<T> {
    fn contains(&self, name: &str) -> bool {
        self.loader.contains(name)
    }

    fn names(&self) -> Vec<&str> {
        self.names_cache.iter().map(|s| s.as_str()).collect()
    }

    fn try_get(&self, name: &str) -> Option<Cow<'_, str>> {
        let content = self.loader.try_get(name);
        if content.is_none() {
            tracing::warn!(name, "no matching partial template");
        }
        content
    }
}

//! Template catalog: named categories of dork templates.
//!
//! # Responsibility
//! - Hold the ordered category → templates mapping used by expansion.
//! - Provide no-op-safe runtime mutation and optional JSON persistence.
//!
//! # Invariants
//! - Category names are unique; insertion order is preserved.
//! - Template order inside a category is preserved.
//! - Lookups never fail; unknown categories behave as empty.

mod defaults;

pub use defaults::default_catalog;

use log::info;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog file load/save errors.
#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "catalog file I/O failed: {err}"),
            Self::Json(err) => write!(f, "catalog file is not valid JSON: {err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// One named group of templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub templates: Vec<String>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            templates: Vec::new(),
        }
    }
}

/// Ordered mapping from category name to templates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateCatalog {
    categories: Vec<Category>,
}

impl TemplateCatalog {
    /// Creates an empty catalog. Use [`default_catalog`] for the built-ins.
    pub fn new() -> Self {
        Self::default()
    }

    /// Category names in insertion order.
    pub fn list_categories(&self) -> Vec<String> {
        self.categories
            .iter()
            .map(|category| category.name.clone())
            .collect()
    }

    /// Templates for `category`, empty when the category is unknown.
    pub fn get_templates(&self, category: &str) -> &[String] {
        self.find(category)
            .map(|category| category.templates.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, category: &str) -> bool {
        self.find(category).is_some()
    }

    pub fn template_count(&self, category: &str) -> usize {
        self.get_templates(category).len()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Appends an empty category. Returns `false` if it already exists.
    pub fn add_category(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.categories.push(Category::new(name));
        true
    }

    /// Removes a category with all its templates. Returns `false` if absent.
    pub fn remove_category(&mut self, name: &str) -> bool {
        let before = self.categories.len();
        self.categories.retain(|category| category.name != name);
        self.categories.len() != before
    }

    /// Appends a template to an existing category.
    ///
    /// Returns `false` when the category does not exist.
    pub fn add_template(&mut self, category: &str, template: impl Into<String>) -> bool {
        match self.find_mut(category) {
            Some(category) => {
                category.templates.push(template.into());
                true
            }
            None => false,
        }
    }

    /// Removes the template at `index`.
    ///
    /// Returns `false` for an unknown category or an out-of-range index.
    pub fn remove_template(&mut self, category: &str, index: usize) -> bool {
        match self.find_mut(category) {
            Some(category) if index < category.templates.len() => {
                category.templates.remove(index);
                true
            }
            _ => false,
        }
    }

    /// Loads a catalog from a JSON array of `{name, templates}` objects.
    ///
    /// Entries are merged through [`Self::add_category`] and
    /// [`Self::add_template`], so a repeated name extends the first one.
    pub fn from_json_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let categories: Vec<Category> = serde_json::from_str(&raw)?;

        let mut catalog = Self::new();
        for category in categories {
            catalog.add_category(category.name.clone());
            for template in category.templates {
                catalog.add_template(&category.name, template);
            }
        }

        info!(
            "event=catalog_load module=catalog status=ok categories={} path={}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Writes the catalog as pretty-printed JSON, overwriting `path`.
    pub fn save_json_file(&self, path: impl AsRef<Path>) -> CatalogResult<()> {
        let json = serde_json::to_string_pretty(&self.categories)?;
        std::fs::write(path.as_ref(), json)?;
        info!(
            "event=catalog_save module=catalog status=ok categories={}",
            self.len()
        );
        Ok(())
    }

    fn find(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.name == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Category> {
        self.categories
            .iter_mut()
            .find(|category| category.name == name)
    }
}

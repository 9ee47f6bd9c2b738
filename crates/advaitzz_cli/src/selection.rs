//! Category selection from command-line selectors.

use advaitzz_core::TemplateCatalog;
use anyhow::{bail, Result};

/// Resolves selectors to canonical category names.
///
/// A selector is a category name (case-insensitive), a 1-based index, or a
/// comma-separated list of either. No selectors, or `all`, selects every
/// category. Duplicates keep their first position.
pub fn select_categories(
    catalog: &TemplateCatalog,
    selectors: &[String],
    all: bool,
) -> Result<Vec<String>> {
    let names = catalog.list_categories();
    if all || selectors.is_empty() {
        return Ok(names);
    }

    let mut selected: Vec<String> = Vec::new();
    for selector in selectors {
        let parts: Vec<&str> = match find_by_name(&names, selector.trim()) {
            Some(_) => vec![selector.trim()],
            None => selector.split(',').map(str::trim).collect(),
        };

        for part in parts.into_iter().filter(|part| !part.is_empty()) {
            let name = resolve_one(&names, part)?;
            if !selected.contains(&name) {
                selected.push(name);
            }
        }
    }

    if selected.is_empty() {
        bail!("no categories selected");
    }
    Ok(selected)
}

fn resolve_one(names: &[String], selector: &str) -> Result<String> {
    if let Ok(index) = selector.parse::<usize>() {
        return match index.checked_sub(1).and_then(|i| names.get(i)) {
            Some(name) => Ok(name.clone()),
            None => bail!(
                "category index {index} is out of range; expected 1..={}",
                names.len()
            ),
        };
    }

    match find_by_name(names, selector) {
        Some(name) => Ok(name.clone()),
        None => bail!("unknown category `{selector}`; run `advaitzz categories` to list them"),
    }
}

fn find_by_name<'a>(names: &'a [String], selector: &str) -> Option<&'a String> {
    names
        .iter()
        .find(|name| name.as_str() == selector)
        .or_else(|| names.iter().find(|name| name.eq_ignore_ascii_case(selector)))
}

//! Dork expansion.
//!
//! # Invariants
//! - Output order is selection order, then stored template order.
//! - Output length equals the sum of template counts of the selection.
//! - No I/O; identical inputs give identical output.

use crate::catalog::TemplateCatalog;
use crate::model::dork::DorkRecord;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ExpandResult<T> = Result<T, ExpandError>;

/// Expansion input errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpandError {
    /// The domain is empty or only whitespace.
    InvalidInput { domain: String },
}

impl Display for ExpandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { domain } => {
                write!(f, "invalid domain {domain:?}: a non-blank domain is required")
            }
        }
    }
}

impl Error for ExpandError {}

/// Expands `categories` of `catalog` against `domain`.
///
/// The domain is trimmed before substitution. Unknown category names
/// contribute no records.
///
/// # Errors
/// Returns [`ExpandError::InvalidInput`] when `domain` is blank.
pub fn expand<S: AsRef<str>>(
    catalog: &TemplateCatalog,
    domain: &str,
    categories: &[S],
) -> ExpandResult<Vec<DorkRecord>> {
    let trimmed = domain.trim();
    if trimmed.is_empty() {
        return Err(ExpandError::InvalidInput {
            domain: domain.to_string(),
        });
    }

    let records = categories
        .iter()
        .flat_map(|category| {
            let category = category.as_ref();
            catalog
                .get_templates(category)
                .iter()
                .map(move |template| DorkRecord::from_template(trimmed, category, template))
        })
        .collect();

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::{expand, ExpandError};
    use crate::catalog::default_catalog;

    #[test]
    fn trims_domain_before_substitution() {
        let catalog = default_catalog();
        let records = expand(&catalog, "  example.org \n", &["Index Of"]).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].domain, "example.org");
        assert_eq!(records[0].dork, "site:example.org intitle:\"index of\"");
    }

    #[test]
    fn blank_domain_error_carries_original_value() {
        let catalog = default_catalog();
        let err = expand(&catalog, "\t", &["Documents"]).unwrap_err();
        assert_eq!(
            err,
            ExpandError::InvalidInput {
                domain: "\t".to_string()
            }
        );
    }
}

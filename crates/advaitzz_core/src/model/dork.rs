//! Dork record model.

use serde::{Deserialize, Serialize};

/// Token replaced with the target domain inside every template.
pub const DOMAIN_PLACEHOLDER: &str = "{d}";

/// Column names in serialization order.
pub(crate) const DORK_FIELDS: [&str; 3] = ["domain", "category", "dork"];

/// One expanded query for one domain and one template.
///
/// Field order is significant: JSON, CSV and spreadsheet exports emit
/// `domain, category, dork` in this order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DorkRecord {
    pub domain: String,
    pub category: String,
    pub dork: String,
}

impl DorkRecord {
    /// Substitutes `domain` into `template` and tags the result with `category`.
    ///
    /// Only the `{d}` token is replaced; any other brace sequence is kept
    /// verbatim.
    pub fn from_template(domain: &str, category: &str, template: &str) -> Self {
        Self {
            domain: domain.to_string(),
            category: category.to_string(),
            dork: template.replace(DOMAIN_PLACEHOLDER, domain),
        }
    }

    pub(crate) fn fields(&self) -> [&str; 3] {
        [&self.domain, &self.category, &self.dork]
    }
}

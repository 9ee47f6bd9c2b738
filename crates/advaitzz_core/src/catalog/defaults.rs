use super::TemplateCatalog;

const LOGIN_PAGES: &[&str] = &[
    "site:{d} inurl:login",
    "site:{d} intitle:login",
    "site:{d} inurl:signin",
];

const DOCUMENTS: &[&str] = &["site:{d} ext:pdf", "site:{d} ext:docx", "site:{d} ext:xlsx"];

const INDEX_OF: &[&str] = &["site:{d} intitle:\"index of\""];

const BUILTIN: &[(&str, &[&str])] = &[
    ("Login Pages", LOGIN_PAGES),
    ("Documents", DOCUMENTS),
    ("Index Of", INDEX_OF),
];

/// Builds a fresh catalog holding the built-in categories.
pub fn default_catalog() -> TemplateCatalog {
    let mut catalog = TemplateCatalog::new();
    for (name, templates) in BUILTIN {
        catalog.add_category(*name);
        for template in templates.iter() {
            catalog.add_template(name, *template);
        }
    }
    catalog
}

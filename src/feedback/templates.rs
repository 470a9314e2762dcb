//! Immutable template tables keyed by skill term.

use crate::core::vocabulary::is_skill;

/// Canonical bullet sentences used for bullet examples
pub const BULLET_TEMPLATES: &[(&str, &str)] = &[
    ("react", "Built reusable React components and integrated REST APIs for dynamic data loading."),
    ("node", "Built Node.js backend services and implemented API endpoints with validation and error handling."),
    ("mongodb", "Designed MongoDB collections and indexes to support fast queries and scalable storage."),
    ("rest", "Built RESTful APIs with consistent routes, status codes, and predictable response shapes."),
    ("authentication", "Implemented authentication and protected routes using token-based auth."),
    ("deploy", "Deployed applications using environment-based configuration and reliable build steps."),
    ("apis", "Designed and consumed APIs with consistent request/response formats and documentation."),
];

/// Resume lines used for the rewrite section
pub const REWRITE_TEMPLATES: &[(&str, &str)] = &[
    ("react", "Built reusable React components and optimized UI performance for scalable web applications."),
    ("node", "Developed Node.js backend services with structured REST APIs, validation, and error handling."),
    ("mongodb", "Designed MongoDB schemas and indexes to support efficient queries and scalable storage."),
    ("authentication", "Implemented authentication and protected routes using token-based authorization."),
    ("apis", "Designed and consumed APIs with consistent request/response contracts and documentation."),
    ("deploy", "Deployed applications using environment-based configuration and reliable build/deployment steps."),
    ("rest", "Built RESTful services with consistent routes, status codes, and predictable response shapes."),
    ("express", "Built Express.js middleware and routes for maintainable backend architecture."),
    ("git", "Used Git for version control with clean commits and collaborative workflows."),
];

#[inline]
fn lookup(table: &'static [(&'static str, &'static str)], term: &str) -> Option<&'static str> {
    table.iter().find(|(key, _)| *key == term).map(|(_, text)| *text)
}

pub fn bullet_template(term: &str) -> Option<&'static str> {
    lookup(BULLET_TEMPLATES, term)
}

pub fn rewrite_template(term: &str) -> Option<&'static str> {
    lookup(REWRITE_TEMPLATES, term)
}

/// Template keys that are not allowlisted skills
///
/// Checked once at startup; a non-empty result means a table was edited
/// without updating the allowlist.
pub fn unknown_template_terms() -> Vec<&'static str> {
    BULLET_TEMPLATES
        .iter()
        .chain(REWRITE_TEMPLATES)
        .map(|(term, _)| *term)
        .filter(|term| !is_skill(term))
        .collect()
}

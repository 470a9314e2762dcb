// Rule engines turning scores and keyword sets into feedback
pub mod actions;
pub mod bullets;
pub mod rewrite;
pub mod suggestions;
pub mod templates;

pub use actions::generate_action_items;
pub use bullets::build_bullet_examples;
pub use rewrite::rewrite_resume;
pub use suggestions::build_suggestions;
pub use templates::unknown_template_terms;

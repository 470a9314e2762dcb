use crate::feedback::templates::bullet_template;
use crate::models::BulletExample;

pub const MAX_MATCHED_BULLETS: usize = 6;
pub const MAX_BULLETS: usize = 10;

/// Build example bullets for matched skills, then conditional ones for
/// missing skills
///
/// Skills without a template are skipped.
pub fn build_bullet_examples(matched: &[String], missing: &[String]) -> Vec<BulletExample> {
    let mut examples = Vec::with_capacity(MAX_BULLETS);

    for keyword in matched {
        if examples.len() >= MAX_MATCHED_BULLETS {
            break;
        }
        if let Some(template) = bullet_template(keyword) {
            examples.push(BulletExample {
                keyword: keyword.clone(),
                bullet: template.to_string(),
            });
        }
    }

    for keyword in missing {
        if examples.len() >= MAX_BULLETS {
            break;
        }
        if let Some(template) = bullet_template(keyword) {
            examples.push(BulletExample {
                keyword: keyword.clone(),
                bullet: format!("If you have experience with {}: {}", keyword, template),
            });
        }
    }

    examples
}

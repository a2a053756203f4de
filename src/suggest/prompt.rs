use crate::model::{Category, Status};
use serde_json::{Value, json};

/// Number of ideas requested per submission.
pub const SUGGESTION_COUNT: usize = 3;

/// Render the instruction sent to the provider for one submission.
pub fn build_prompt(context: &str) -> String {
    let categories = Category::ALL
        .iter()
        .map(|c| format!("'{}'", c))
        .collect::<Vec<_>>()
        .join(", ");
    let statuses = [Status::Planned, Status::Backlog]
        .iter()
        .map(|s| format!("'{}'", s))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"Based on the following product description, generate {count} roadmap feature ideas.
The product is: "{context}".

Return a list of items. Each item should include:
- title
- short description (max 2 sentences)
- suggested category (must be one of: {categories})
- suggested status (must be one of: {statuses})
- suggested progress (integer 0-100, usually 0 for planned/backlog items)
"#,
        count = SUGGESTION_COUNT,
        context = context.trim(),
    )
}

/// Output schema declared alongside the prompt.
pub fn response_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "title": { "type": "STRING" },
                "description": { "type": "STRING" },
                "category": { "type": "STRING" },
                "status": { "type": "STRING" },
                "progress": { "type": "INTEGER" }
            },
            "required": ["title", "description", "category", "status", "progress"]
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_context_and_count() {
        let prompt = build_prompt("  A marketplace for handmade crafts ");
        assert!(prompt.contains("generate 3 roadmap feature ideas"));
        assert!(prompt.contains("\"A marketplace for handmade crafts\""));
        assert!(prompt.contains("'Core Platform', 'Integrations', 'UI/UX', 'Security', 'Analytics'"));
        assert!(prompt.contains("'PLANNED', 'BACKLOG'"));
    }

    #[test]
    fn test_schema_requires_all_fields() {
        let schema = response_schema();
        let required = schema["items"]["required"].as_array().unwrap();
        assert_eq!(required.len(), 5);
        assert_eq!(schema["items"]["properties"]["progress"]["type"], "INTEGER");
    }
}

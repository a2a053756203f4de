use crate::{
    error::{NexusError, Result},
    model::{Category, RoadmapItem, Status},
};
use std::path::Path;

use super::Roadmap;

/// The items every session starts with.
pub fn default_items() -> Vec<RoadmapItem> {
    vec![
        RoadmapItem::new(
            "1",
            "Advanced Analytics Dashboard",
            "Real-time insights into user behavior and system performance metrics.",
        )
        .with_status(Status::Released)
        .with_category(Category::Analytics)
        .with_date("2023-10-15")
        .with_tags(["Data", "Charts"])
        .with_progress(100),
        RoadmapItem::new(
            "2",
            "Mobile App Beta",
            "First public beta release for iOS and Android devices.",
        )
        .with_status(Status::InProgress)
        .with_category(Category::CorePlatform)
        .with_date("Q4 2023")
        .with_tags(["Mobile", "Beta"])
        .with_progress(75),
        RoadmapItem::new(
            "3",
            "Dark Mode Support",
            "System-wide dark mode preference detection and toggle.",
        )
        .with_status(Status::InProgress)
        .with_category(Category::UiUx)
        .with_date("Q4 2023")
        .with_tags(["Accessibility", "Theme"])
        .with_progress(40),
        RoadmapItem::new(
            "4",
            "Slack Integration",
            "Get notified about updates directly in your team Slack channel.",
        )
        .with_status(Status::Planned)
        .with_category(Category::Integrations)
        .with_date("Q1 2024")
        .with_tags(["Productivity"]),
        RoadmapItem::new(
            "5",
            "Two-Factor Authentication",
            "Enhanced security with SMS and Authenticator app support.",
        )
        .with_status(Status::Backlog)
        .with_category(Category::Security)
        .with_tags(["Auth"]),
        RoadmapItem::new(
            "6",
            "Custom API Webhooks",
            "Allow users to subscribe to data events via webhooks.",
        )
        .with_status(Status::Planned)
        .with_category(Category::CorePlatform)
        .with_date("Q1 2024")
        .with_tags(["API", "DevTools"])
        .with_progress(15),
    ]
}

impl Roadmap {
    /// A collection holding the built-in seed items.
    pub fn seeded(id_length: usize) -> Result<Self> {
        Self::from_items(default_items(), id_length)
    }

    /// Load the seed set from a JSON or YAML array of items.
    ///
    /// The file is only read; nothing is written back.
    pub fn from_seed_file(path: &Path, id_length: usize) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let items: Vec<RoadmapItem> = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            Some("yml") | Some("yaml") => serde_yaml::from_str(&content)?,
            other => {
                return Err(NexusError::Parse(format!(
                    "Unsupported seed file extension: {}",
                    other.unwrap_or("<none>")
                )));
            }
        };
        Self::from_items(items, id_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_seeded_has_six_unique_items() {
        let roadmap = Roadmap::seeded(9).unwrap();
        assert_eq!(roadmap.len(), 6);
        assert_eq!(roadmap.items()[0].title, "Advanced Analytics Dashboard");
        assert_eq!(roadmap.get("5").and_then(|i| i.date.clone()), None);
    }

    #[test]
    fn test_from_yaml_seed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("seed.yml");
        std::fs::write(
            &path,
            "- id: a\n  title: Search\n  description: Full text search\n  status: IN_PROGRESS\n  category: Analytics\n  date: Q2 2025\n  tags: [Search]\n  progress: 30\n",
        )
        .unwrap();

        let roadmap = Roadmap::from_seed_file(&path, 9).unwrap();
        let item = roadmap.get("a").unwrap();
        assert_eq!(item.status, Status::InProgress);
        assert_eq!(item.category, Category::Analytics);
        assert_eq!(item.progress, 30);
    }

    #[test]
    fn test_from_json_seed_file_rejects_duplicates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("seed.json");
        std::fs::write(
            &path,
            r#"[{"id":"a","title":"A","description":"a"},{"id":"a","title":"B","description":"b"}]"#,
        )
        .unwrap();

        assert!(matches!(
            Roadmap::from_seed_file(&path, 9),
            Err(NexusError::DuplicateId(_))
        ));
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("seed.txt");
        std::fs::write(&path, "[]").unwrap();
        assert!(matches!(
            Roadmap::from_seed_file(&path, 9),
            Err(NexusError::Parse(_))
        ));
    }
}

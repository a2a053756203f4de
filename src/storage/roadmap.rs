use crate::{
    error::{NexusError, Result},
    model::RoadmapItem,
    validation,
};
use std::collections::HashSet;
use tracing::debug;

const ID_ALPHABET: [char; 36] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Random draws tried before giving up on a free id.
const MAX_ID_ATTEMPTS: usize = 1000;

/// The master collection of roadmap items for one session.
///
/// Append-only: items keep their insertion order and ids stay unique for the
/// lifetime of the collection. Readers borrow it immutably; the suggestion
/// flow is the only writer and takes `&mut Roadmap`.
#[derive(Debug, Clone)]
pub struct Roadmap {
    items: Vec<RoadmapItem>,
    ids: HashSet<String>,
    id_length: usize,
}

impl Roadmap {
    pub fn new(id_length: usize) -> Self {
        Self {
            items: Vec::new(),
            ids: HashSet::new(),
            id_length: id_length.max(1),
        }
    }

    /// Build a collection from a list of items, rejecting duplicate or invalid entries.
    pub fn from_items(items: Vec<RoadmapItem>, id_length: usize) -> Result<Self> {
        let mut roadmap = Self::new(id_length);
        for item in items {
            roadmap.push(item)?;
        }
        Ok(roadmap)
    }

    pub fn items(&self) -> &[RoadmapItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&RoadmapItem> {
        if !self.ids.contains(id) {
            return None;
        }
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Validate and append an item, returning a reference to the stored copy.
    pub fn push(&mut self, item: RoadmapItem) -> Result<&RoadmapItem> {
        validation::validate_item(&item)?;
        self.append(item)
    }

    /// Append an item without the field checks of [`push`](Self::push).
    ///
    /// Accepted suggestions go through here: whatever the provider returned is
    /// kept as is. Only id uniqueness is enforced.
    pub fn append(&mut self, item: RoadmapItem) -> Result<&RoadmapItem> {
        if self.ids.contains(&item.id) {
            return Err(NexusError::DuplicateId(item.id));
        }
        debug!(id = %item.id, title = %item.title, "Appending roadmap item");
        self.ids.insert(item.id.clone());
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Generate an id that does not collide with any item in the collection.
    ///
    /// Fails with [`NexusError::IdsExhausted`] when no free id turns up within
    /// a bounded number of draws.
    pub fn generate_id(&self) -> Result<String> {
        (0..MAX_ID_ATTEMPTS)
            .map(|_| nanoid::format(nanoid::rngs::default, &ID_ALPHABET, self.id_length))
            .find(|id| !self.ids.contains(id))
            .ok_or(NexusError::IdsExhausted(self.id_length))
    }
}

impl Default for Roadmap {
    fn default() -> Self {
        Self::new(crate::config::RoadmapSettings::default().id_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> RoadmapItem {
        RoadmapItem::new(id, format!("Title {}", id), "Description")
    }

    #[test]
    fn test_push_preserves_order() {
        let mut roadmap = Roadmap::new(5);
        roadmap.push(item("b")).unwrap();
        roadmap.push(item("a")).unwrap();
        let ids: Vec<_> = roadmap.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_push_rejects_duplicate_id() {
        let mut roadmap = Roadmap::new(5);
        roadmap.push(item("a")).unwrap();
        assert!(matches!(
            roadmap.push(item("a")),
            Err(NexusError::DuplicateId(id)) if id == "a"
        ));
        assert_eq!(roadmap.len(), 1);
    }

    #[test]
    fn test_push_rejects_empty_title() {
        let mut roadmap = Roadmap::new(5);
        assert!(roadmap.push(RoadmapItem::new("a", "", "desc")).is_err());
        assert!(roadmap.is_empty());
    }

    #[test]
    fn test_generate_id_uses_configured_length() {
        let roadmap = Roadmap::new(7);
        let id = roadmap.generate_id().unwrap();
        assert_eq!(id.len(), 7);
        assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_generate_id_never_collides() {
        // Single-character ids exhaust quickly, so collisions would surface here.
        let mut roadmap = Roadmap::new(1);
        for _ in 0..30 {
            let id = roadmap.generate_id().unwrap();
            roadmap.push(item(&id)).unwrap();
        }
        assert_eq!(roadmap.len(), 30);
    }

    #[test]
    fn test_generate_id_fails_once_id_space_is_full() {
        let mut roadmap = Roadmap::new(1);
        for c in ID_ALPHABET {
            roadmap.push(item(&c.to_string())).unwrap();
        }
        assert!(matches!(
            roadmap.generate_id(),
            Err(NexusError::IdsExhausted(1))
        ));
    }

    #[test]
    fn test_append_skips_field_checks_but_not_uniqueness() {
        let mut roadmap = Roadmap::new(5);
        let long = RoadmapItem::new("a", "T".repeat(250), "D".repeat(6000));
        assert!(roadmap.push(long.clone()).is_err());

        assert_eq!(roadmap.append(long.clone()).unwrap().title.len(), 250);
        assert!(matches!(
            roadmap.append(long),
            Err(NexusError::DuplicateId(_))
        ));
        assert_eq!(roadmap.len(), 1);
    }

    #[test]
    fn test_get_by_id() {
        let roadmap = Roadmap::from_items(vec![item("a"), item("b")], 5).unwrap();
        assert_eq!(roadmap.get("b").map(|i| i.title.as_str()), Some("Title b"));
        assert!(roadmap.get("zzz").is_none());
        assert!(roadmap.contains_id("a"));
    }
}

//! Topic catalog lookup.
//!
//! The catalog is a closed, ordered set of [`TopicRecord`]s. Lookups never fail: an absent or
//! unknown identifier resolves to the default topic. Sibling navigation follows the authoring
//! order, not any computed order.

use crate::topic::TopicRecord;
use crate::topics::TOPICS;

static CATALOG: Catalog = Catalog {
    topics: &TOPICS,
    default_index: 0,
};

/// Returns the process-wide catalog.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// Ordered, read-only set of topics.
#[derive(Debug)]
pub struct Catalog {
    topics: &'static [TopicRecord],
    default_index: usize,
}

/// Neighbours of a topic in authoring order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Siblings {
    pub previous: Option<&'static TopicRecord>,
    pub next: Option<&'static TopicRecord>,
}

impl Catalog {
    /// All topics in authoring order.
    pub fn topics(&self) -> &'static [TopicRecord] {
        self.topics
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Identifiers in authoring order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> {
        self.topics.iter().map(|t| t.id)
    }

    /// The topic used when a requested identifier cannot be resolved.
    pub fn default_topic(&self) -> &'static TopicRecord {
        &self.topics[self.default_index]
    }

    /// Exact lookup by identifier.
    pub fn get(&self, id: &str) -> Option<&'static TopicRecord> {
        self.topics.iter().find(|t| t.id == id)
    }

    /// Zero-based position of `id` in authoring order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.topics.iter().position(|t| t.id == id)
    }

    /// Resolves a route-supplied identifier.
    ///
    /// Returns the default topic when `id` is `None` or not in the catalog.
    pub fn resolve(&self, id: Option<&str>) -> &'static TopicRecord {
        id.and_then(|id| self.get(id))
            .unwrap_or_else(|| self.default_topic())
    }

    /// Previous and next topics around `id`.
    ///
    /// An unknown `id` is resolved first, so it gets the siblings of the default topic.
    pub fn siblings(&self, id: &str) -> Siblings {
        let index = self
            .position(id)
            .unwrap_or(self.default_index);

        Siblings {
            previous: index.checked_sub(1).and_then(|i| self.topics.get(i)),
            next: self.topics.get(index + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_authoring_order() {
        let ids: Vec<_> = catalog().ids().collect();
        assert_eq!(ids, ["genel", "oncesi", "ameliyat", "videolar", "ayarlar"]);
        assert_eq!(catalog().len(), 5);
        assert!(!catalog().is_empty());
    }

    #[test]
    fn identifiers_are_unique() {
        let mut ids: Vec<_> = catalog().ids().collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog().len());
    }

    #[test]
    fn resolves_every_known_identifier_to_itself() {
        for id in catalog().ids() {
            assert_eq!(catalog().resolve(Some(id)).id, id);
            assert_eq!(catalog().get(id).map(|t| t.id), Some(id));
        }
    }

    #[test]
    fn unknown_and_absent_identifiers_fall_back_to_default() {
        assert_eq!(catalog().resolve(Some("xyz")).id, "genel");
        assert_eq!(catalog().resolve(Some("")).id, "genel");
        assert_eq!(catalog().resolve(Some("GENEL")).id, "genel");
        assert_eq!(catalog().resolve(None).id, "genel");
        assert!(catalog().get("xyz").is_none());
    }

    #[test]
    fn middle_topic_has_adjacent_siblings() {
        let siblings = catalog().siblings("ameliyat");
        assert_eq!(siblings.previous.map(|t| t.id), Some("oncesi"));
        assert_eq!(siblings.next.map(|t| t.id), Some("videolar"));
    }

    #[test]
    fn boundaries_have_no_outer_sibling() {
        let first = catalog().siblings("genel");
        assert!(first.previous.is_none());
        assert_eq!(first.next.map(|t| t.id), Some("oncesi"));

        let last = catalog().siblings("ayarlar");
        assert_eq!(last.previous.map(|t| t.id), Some("videolar"));
        assert!(last.next.is_none());
    }

    #[test]
    fn every_inner_topic_links_to_its_neighbours() {
        let ids: Vec<_> = catalog().ids().collect();
        for window in ids.windows(3) {
            let siblings = catalog().siblings(window[1]);
            assert_eq!(siblings.previous.map(|t| t.id), Some(window[0]));
            assert_eq!(siblings.next.map(|t| t.id), Some(window[2]));
        }
    }

    #[test]
    fn unknown_identifier_uses_default_siblings() {
        assert_eq!(catalog().siblings("xyz"), catalog().siblings("genel"));
    }

    #[test]
    fn every_topic_has_content_and_script() {
        for topic in catalog().topics() {
            assert!(!topic.content.is_empty(), "{} has no content", topic.id);
            assert!(
                !topic.narration_script.trim().is_empty(),
                "{} has no narration script",
                topic.id
            );
            assert_eq!(topic.route(), format!("/topic/{}", topic.id));
        }
    }
}

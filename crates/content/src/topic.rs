//! Topic records.

use crate::section::ContentSection;
use serde::Serialize;

/// Icon shown next to a topic. Presentation only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Heart,
    ClipboardList,
    Stethoscope,
    Video,
    Settings,
}

impl Icon {
    pub fn as_str(self) -> &'static str {
        match self {
            Icon::Heart => "heart",
            Icon::ClipboardList => "clipboard-list",
            Icon::Stethoscope => "stethoscope",
            Icon::Video => "video",
            Icon::Settings => "settings",
        }
    }
}

/// One educational topic.
///
/// Records are defined at build time and never change. `id` is the routing key and the
/// narration key. `narration_script` is authored independently of `content`.
#[derive(Debug, Serialize)]
pub struct TopicRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub card_title: &'static str,
    pub card_subtitle: &'static str,
    pub narration_script: &'static str,
    pub content: &'static [ContentSection],
    pub accent_color: &'static str,
    pub icon: Icon,
    pub tag: Option<&'static str>,
    pub read_time: &'static str,
}

impl TopicRecord {
    /// Route of this topic's detail page.
    pub fn route(&self) -> String {
        format!("/topic/{}", self.id)
    }
}

impl PartialEq for TopicRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TopicRecord {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn icon_names_match_serialised_form() {
        for icon in [
            Icon::Heart,
            Icon::ClipboardList,
            Icon::Stethoscope,
            Icon::Video,
            Icon::Settings,
        ] {
            let json = serde_json::to_value(icon).unwrap();
            assert_eq!(json, icon.as_str());
        }
    }

    #[test]
    fn route_uses_identifier() {
        assert_eq!(catalog().default_topic().route(), "/topic/genel");
    }
}

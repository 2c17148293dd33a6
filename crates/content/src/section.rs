//! Structured content sections.
//!
//! A topic page body is an ordered list of [`ContentSection`] values. The order is the rendering
//! order and is never changed at runtime.

use serde::Serialize;

/// One block of a topic page.
///
/// `Tip`, `Warning` and `Keypoint` share the same shape and only differ in how they are presented.
/// Their label is optional; the renderer supplies a default when it is absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentSection {
    Heading {
        text: &'static str,
    },
    Body {
        text: &'static str,
    },
    Tip {
        label: Option<&'static str>,
        text: &'static str,
    },
    Warning {
        label: Option<&'static str>,
        text: &'static str,
    },
    Steps {
        steps: &'static [&'static str],
    },
    Keypoint {
        label: Option<&'static str>,
        text: &'static str,
    },
}

/// Variant tag of a [`ContentSection`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Heading,
    Body,
    Tip,
    Warning,
    Steps,
    Keypoint,
}

impl SectionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Heading => "heading",
            SectionKind::Body => "body",
            SectionKind::Tip => "tip",
            SectionKind::Warning => "warning",
            SectionKind::Steps => "steps",
            SectionKind::Keypoint => "keypoint",
        }
    }
}

impl ContentSection {
    /// Returns the variant tag of this section.
    pub fn kind(&self) -> SectionKind {
        match self {
            ContentSection::Heading { .. } => SectionKind::Heading,
            ContentSection::Body { .. } => SectionKind::Body,
            ContentSection::Tip { .. } => SectionKind::Tip,
            ContentSection::Warning { .. } => SectionKind::Warning,
            ContentSection::Steps { .. } => SectionKind::Steps,
            ContentSection::Keypoint { .. } => SectionKind::Keypoint,
        }
    }

    /// Returns the free text of the section, if the variant carries one.
    pub fn text(&self) -> Option<&'static str> {
        match self {
            ContentSection::Heading { text }
            | ContentSection::Body { text }
            | ContentSection::Tip { text, .. }
            | ContentSection::Warning { text, .. }
            | ContentSection::Keypoint { text, .. } => Some(text),
            ContentSection::Steps { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialises_with_type_tag() {
        let section = ContentSection::Warning {
            label: Some("Dikkat"),
            text: "Aspirin almayın",
        };
        let json = serde_json::to_value(section).expect("serialise section");
        assert_eq!(json["type"], "warning");
        assert_eq!(json["label"], "Dikkat");
        assert_eq!(json["text"], "Aspirin almayın");
    }

    #[test]
    fn steps_have_no_free_text() {
        let section = ContentSection::Steps {
            steps: &["bir", "iki"],
        };
        assert_eq!(section.kind(), SectionKind::Steps);
        assert_eq!(section.text(), None);
    }

    #[test]
    fn kind_names_match_wire_tags() {
        let section = ContentSection::Keypoint {
            label: None,
            text: "x",
        };
        let json = serde_json::to_value(section).expect("serialise section");
        assert_eq!(json["type"], section.kind().as_str());
    }
}

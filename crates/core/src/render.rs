//! Content renderer.
//!
//! Maps [`ContentSection`]s to presentation-neutral [`RenderBlock`]s, and whole topics to plain
//! text for terminals. Rendering is pure: the same section always yields the same block.

use kalp_content::{ContentSection, TopicRecord};
use serde::Serialize;

/// Presentation of a callout section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CalloutTone {
    Tip,
    Warning,
    KeyPoint,
}

impl CalloutTone {
    pub fn as_str(self) -> &'static str {
        match self {
            CalloutTone::Tip => "tip",
            CalloutTone::Warning => "warning",
            CalloutTone::KeyPoint => "key_point",
        }
    }

    /// Label used when the section does not carry one.
    pub fn default_label(self) -> &'static str {
        match self {
            CalloutTone::Tip => "İpucu",
            CalloutTone::Warning => "Uyarı",
            CalloutTone::KeyPoint => "Anahtar Nokta",
        }
    }

    fn marker(self) -> &'static str {
        match self {
            CalloutTone::Tip => "*",
            CalloutTone::Warning => "!",
            CalloutTone::KeyPoint => ">",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NumberedStep {
    /// 1-based.
    pub number: usize,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderBlock {
    Heading {
        text: String,
    },
    Paragraph {
        text: String,
    },
    Steps {
        items: Vec<NumberedStep>,
    },
    Callout {
        tone: CalloutTone,
        label: String,
        text: String,
    },
}

/// Renders one section. Returns `None` for blank sections.
pub fn render_section(section: &ContentSection) -> Option<RenderBlock> {
    let block = match *section {
        ContentSection::Heading { text } => RenderBlock::Heading {
            text: non_blank(text)?,
        },
        ContentSection::Body { text } => RenderBlock::Paragraph {
            text: non_blank(text)?,
        },
        ContentSection::Steps { steps } => {
            let items: Vec<NumberedStep> = steps
                .iter()
                .filter_map(|step| non_blank(step))
                .enumerate()
                .map(|(i, text)| NumberedStep { number: i + 1, text })
                .collect();
            if items.is_empty() {
                return None;
            }
            RenderBlock::Steps { items }
        }
        ContentSection::Tip { label, text } => callout(CalloutTone::Tip, label, text)?,
        ContentSection::Warning { label, text } => callout(CalloutTone::Warning, label, text)?,
        ContentSection::Keypoint { label, text } => callout(CalloutTone::KeyPoint, label, text)?,
    };
    Some(block)
}

/// Renders a topic body in declaration order.
pub fn render_topic(topic: &TopicRecord) -> Vec<RenderBlock> {
    topic.content.iter().filter_map(render_section).collect()
}

/// Plain-text rendering of a whole topic, header included.
pub fn topic_to_text(topic: &TopicRecord) -> String {
    let mut out = String::new();
    out.push_str(topic.title);
    out.push('\n');
    out.push_str(&"=".repeat(topic.title.chars().count()));
    out.push('\n');
    out.push_str(topic.subtitle);
    out.push_str(&format!("\nOkuma süresi: {}\n", topic.read_time));

    for block in render_topic(topic) {
        out.push('\n');
        match block {
            RenderBlock::Heading { text } => {
                out.push_str(&text);
                out.push('\n');
                out.push_str(&"-".repeat(text.chars().count()));
                out.push('\n');
            }
            RenderBlock::Paragraph { text } => {
                out.push_str(&text);
                out.push('\n');
            }
            RenderBlock::Steps { items } => {
                for step in items {
                    out.push_str(&format!("{:>2}. {}\n", step.number, step.text));
                }
            }
            RenderBlock::Callout { tone, label, text } => {
                out.push_str(&format!("[{}] {label}: {text}\n", tone.marker()));
            }
        }
    }
    out
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn callout(tone: CalloutTone, label: Option<&str>, text: &str) -> Option<RenderBlock> {
    let label = label
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or(tone.default_label());
    Some(RenderBlock::Callout {
        tone,
        label: label.to_string(),
        text: non_blank(text)?,
    })
}

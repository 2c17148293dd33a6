//! Wire types for the KalpSağlık APIs.
//!
//! Owned, schema-annotated mirrors of the `kalp-core` views. Conversions go one way: core views
//! into wire types.

use kalp_core::content::Notice;
use kalp_core::{HomeView, NarrationState, NavLink, RenderBlock, TopicCard, TopicView};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TopicCardRes {
    pub id: String,
    pub position: usize,
    /// Two-digit position label, e.g. `01`.
    pub index_label: String,
    pub title: String,
    pub subtitle: String,
    pub tag: Option<String>,
    pub accent_color: String,
    pub icon: String,
    pub read_time: String,
    pub route: String,
    pub playing: bool,
}

impl From<TopicCard> for TopicCardRes {
    fn from(card: TopicCard) -> Self {
        Self {
            id: card.id.into(),
            position: card.position,
            index_label: card.index_label,
            title: card.title.into(),
            subtitle: card.subtitle.into(),
            tag: card.tag.map(Into::into),
            accent_color: card.accent_color.into(),
            icon: card.icon.as_str().into(),
            read_time: card.read_time.into(),
            route: card.route,
            playing: card.playing,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HomeRes {
    pub app_name: String,
    pub tagline: String,
    pub greeting: String,
    pub intro: String,
    pub topic_count: usize,
    pub pending_reminders: usize,
    pub cards: Vec<TopicCardRes>,
}

impl From<HomeView> for HomeRes {
    fn from(view: HomeView) -> Self {
        Self {
            app_name: view.app_name.into(),
            tagline: view.tagline.into(),
            greeting: view.greeting.into(),
            intro: view.intro.into(),
            topic_count: view.topic_count,
            pending_reminders: view.pending_reminders,
            cards: view.cards.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StepRes {
    pub number: usize,
    pub text: String,
}

/// One rendered content block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockRes {
    Heading { text: String },
    Paragraph { text: String },
    Steps { items: Vec<StepRes> },
    /// `tone` is one of `tip`, `warning`, `key_point`.
    Callout { tone: String, label: String, text: String },
}

impl From<RenderBlock> for BlockRes {
    fn from(block: RenderBlock) -> Self {
        match block {
            RenderBlock::Heading { text } => BlockRes::Heading { text },
            RenderBlock::Paragraph { text } => BlockRes::Paragraph { text },
            RenderBlock::Steps { items } => BlockRes::Steps {
                items: items
                    .into_iter()
                    .map(|step| StepRes {
                        number: step.number,
                        text: step.text,
                    })
                    .collect(),
            },
            RenderBlock::Callout { tone, label, text } => BlockRes::Callout {
                tone: tone.as_str().into(),
                label,
                text,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NavLinkRes {
    pub label: String,
    pub title: String,
    pub route: String,
}

impl From<NavLink> for NavLinkRes {
    fn from(link: NavLink) -> Self {
        Self {
            label: link.label.into(),
            title: link.title.into(),
            route: link.route,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TopicRes {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub accent_color: String,
    pub icon: String,
    pub tag: Option<String>,
    pub read_time: String,
    pub blocks: Vec<BlockRes>,
    pub previous: Option<NavLinkRes>,
    pub next: Option<NavLinkRes>,
    /// Link home, present only on the last topic.
    pub finish: Option<NavLinkRes>,
    pub playing: bool,
}

impl From<TopicView> for TopicRes {
    fn from(view: TopicView) -> Self {
        Self {
            id: view.id.into(),
            title: view.title.into(),
            subtitle: view.subtitle.into(),
            accent_color: view.accent_color.into(),
            icon: view.icon.as_str().into(),
            tag: view.tag.map(Into::into),
            read_time: view.read_time.into(),
            blocks: view.blocks.into_iter().map(Into::into).collect(),
            previous: view.previous.map(Into::into),
            next: view.next.map(Into::into),
            finish: view.finish.map(Into::into),
            playing: view.playing,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NoticeRes {
    /// One of `profile`, `reminders`, `narration_failure`.
    pub kind: String,
    pub title: String,
    pub message: String,
    pub dismiss_label: String,
}

impl From<Notice> for NoticeRes {
    fn from(notice: Notice) -> Self {
        Self {
            kind: notice.kind.as_str().into(),
            title: notice.title,
            message: notice.message,
            dismiss_label: notice.dismiss_label.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NarrationRes {
    /// `idle` or `playing`.
    pub status: String,
    /// Topic being narrated, when playing.
    pub id: Option<String>,
}

impl From<NarrationState> for NarrationRes {
    fn from(state: NarrationState) -> Self {
        match state {
            NarrationState::Idle => Self {
                status: "idle".into(),
                id: None,
            },
            NarrationState::Playing(id) => Self {
                status: "playing".into(),
                id: Some(id),
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScreenKindRes {
    Home,
    Topic,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MountHomeRes {
    pub screen_id: String,
    pub view: HomeRes,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MountTopicRes {
    pub screen_id: String,
    pub view: TopicRes,
}

/// Narration status of a mounted screen plus notices raised since the last poll.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ScreenStatusRes {
    pub screen_id: String,
    pub kind: ScreenKindRes,
    pub narration: NarrationRes,
    pub notices: Vec<NoticeRes>,
}

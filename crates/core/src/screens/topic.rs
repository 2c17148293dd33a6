use crate::narration::NarrationController;
use crate::render::{render_topic, RenderBlock};
use kalp_content::{Catalog, Icon, TopicRecord, FINISH_LABEL};
use serde::Serialize;

const PREVIOUS_LABEL: &str = "Önceki";
const NEXT_LABEL: &str = "Sonraki";
const HOME_ROUTE: &str = "/";

/// Navigation link at the foot of a topic page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub title: &'static str,
    pub route: String,
}

impl NavLink {
    fn previous(topic: &TopicRecord) -> Self {
        Self {
            label: PREVIOUS_LABEL,
            title: topic.title,
            route: topic.route(),
        }
    }

    fn next(topic: &TopicRecord) -> Self {
        Self {
            label: NEXT_LABEL,
            title: topic.title,
            route: topic.route(),
        }
    }

    fn finish() -> Self {
        Self {
            label: FINISH_LABEL,
            title: FINISH_LABEL,
            route: HOME_ROUTE.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TopicView {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub accent_color: &'static str,
    pub icon: Icon,
    pub tag: Option<&'static str>,
    pub read_time: &'static str,
    pub blocks: Vec<RenderBlock>,
    pub previous: Option<NavLink>,
    pub next: Option<NavLink>,
    /// Home link offered on the last topic instead of `next`.
    pub finish: Option<NavLink>,
    pub playing: bool,
}

/// A topic detail page with page-level narration.
#[derive(Debug)]
pub struct TopicScreen {
    catalog: &'static Catalog,
    topic: &'static TopicRecord,
    narration: NarrationController,
}

impl TopicScreen {
    /// Opens the page for `id`, falling back to the default topic when it is absent or unknown.
    pub fn open(
        catalog: &'static Catalog,
        id: Option<&str>,
        narration: NarrationController,
    ) -> Self {
        let topic = catalog.resolve(id);
        if let Some(requested) = id.filter(|requested| *requested != topic.id) {
            tracing::debug!("unknown topic `{requested}`, showing `{}`", topic.id);
        }
        Self {
            catalog,
            topic,
            narration,
        }
    }

    pub fn topic(&self) -> &'static TopicRecord {
        self.topic
    }

    pub fn view(&self) -> TopicView {
        let siblings = self.catalog.siblings(self.topic.id);
        let next = siblings.next.map(NavLink::next);
        let finish = next.is_none().then(NavLink::finish);

        TopicView {
            id: self.topic.id,
            title: self.topic.title,
            subtitle: self.topic.subtitle,
            accent_color: self.topic.accent_color,
            icon: self.topic.icon,
            tag: self.topic.tag,
            read_time: self.topic.read_time,
            blocks: render_topic(self.topic),
            previous: siblings.previous.map(NavLink::previous),
            next,
            finish,
            playing: self.is_playing(),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.narration.is_playing(self.topic.id)
    }

    /// Plays or pauses narration of this page.
    pub async fn toggle_narration(&self) {
        self.narration
            .toggle(self.topic.id, self.topic.narration_script)
            .await;
    }

    pub fn narration(&self) -> &NarrationController {
        &self.narration
    }

    pub async fn teardown(&self) {
        self.narration.teardown().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narration::test_support::*;
    use crate::speech::UtteranceOutcome;
    use kalp_content::{catalog, scripts, NoticeKind};
    use std::sync::Arc;

    fn open(engine: &Arc<ScriptedEngine>, id: Option<&str>) -> TopicScreen {
        TopicScreen::open(
            catalog(),
            id,
            NarrationController::new(engine.clone(), RecordingNotifier::new()),
        )
    }

    #[tokio::test]
    async fn middle_topic_links_both_ways() {
        let view = open(&ScriptedEngine::new(), Some("ameliyat")).view();

        assert_eq!(view.id, "ameliyat");
        let previous = view.previous.expect("has previous");
        assert_eq!(previous.route, "/topic/oncesi");
        assert_eq!(previous.label, "Önceki");
        let next = view.next.expect("has next");
        assert_eq!(next.route, "/topic/videolar");
        assert_eq!(next.label, "Sonraki");
        assert!(view.finish.is_none());
    }

    #[tokio::test]
    async fn first_topic_has_no_previous() {
        let view = open(&ScriptedEngine::new(), Some("genel")).view();
        assert!(view.previous.is_none());
        assert_eq!(view.next.map(|l| l.route), Some("/topic/oncesi".into()));
    }

    #[tokio::test]
    async fn last_topic_offers_the_way_home() {
        let view = open(&ScriptedEngine::new(), Some("ayarlar")).view();
        assert!(view.next.is_none());
        let finish = view.finish.expect("finish link");
        assert_eq!(finish.route, "/");
        assert_eq!(finish.label, "Ana Sayfa");
    }

    #[tokio::test]
    async fn unknown_or_missing_id_falls_back_to_default() {
        let engine = ScriptedEngine::new();
        assert_eq!(open(&engine, Some("xyz")).topic().id, "genel");
        assert_eq!(open(&engine, Some("")).topic().id, "genel");
        assert_eq!(open(&engine, None).topic().id, "genel");
    }

    #[tokio::test]
    async fn view_renders_the_topic_body() {
        let screen = open(&ScriptedEngine::new(), Some("oncesi"));
        let view = screen.view();
        assert_eq!(view.blocks, render_topic(screen.topic()));
        assert!(!view.blocks.is_empty());
    }

    #[tokio::test]
    async fn narration_uses_the_topic_script() {
        let engine = ScriptedEngine::new();
        let screen = open(&engine, Some("videolar"));

        screen.toggle_narration().await;
        assert!(screen.view().playing);
        assert_eq!(
            engine.calls(),
            [
                EngineCall::Stop,
                EngineCall::Speak(scripts::VIDEOLAR.to_string())
            ]
        );

        screen.toggle_narration().await;
        assert!(!screen.is_playing());
    }

    #[tokio::test]
    async fn engine_failure_clears_playing_and_notifies() {
        let engine = ScriptedEngine::new();
        let notifier = RecordingNotifier::new();
        let screen = TopicScreen::open(
            catalog(),
            Some("genel"),
            NarrationController::new(engine.clone(), notifier.clone()),
        );
        let mut rx = screen.narration().subscribe();

        screen.toggle_narration().await;
        engine.finish(UtteranceOutcome::Error("no audio".into()));
        settle(&mut rx, |state| state.is_idle()).await;

        assert!(!screen.is_playing());
        let kinds: Vec<_> = notifier.notices().into_iter().map(|n| n.kind).collect();
        assert_eq!(kinds, [NoticeKind::NarrationFailure]);
    }
}

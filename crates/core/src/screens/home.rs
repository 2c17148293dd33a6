use crate::narration::NarrationController;
use crate::{KalpError, KalpResult};
use kalp_content::{
    Catalog, Icon, Notice, Reminder, TopicRecord, APP_NAME, APP_TAGLINE, HOME_GREETING, HOME_INTRO,
};
use serde::Serialize;

/// One entry of the home topic list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TopicCard {
    pub id: &'static str,
    /// 1-based position in the catalog.
    pub position: usize,
    /// Two-digit position label, `01`..`05`.
    pub index_label: String,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub tag: Option<&'static str>,
    pub accent_color: &'static str,
    pub icon: Icon,
    pub read_time: &'static str,
    pub route: String,
    pub playing: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HomeView {
    pub app_name: &'static str,
    pub tagline: &'static str,
    pub greeting: &'static str,
    pub intro: &'static str,
    pub topic_count: usize,
    pub pending_reminders: usize,
    pub cards: Vec<TopicCard>,
}

/// The topic list with per-card narration.
#[derive(Debug)]
pub struct HomeScreen {
    catalog: &'static Catalog,
    narration: NarrationController,
}

impl HomeScreen {
    pub fn new(catalog: &'static Catalog, narration: NarrationController) -> Self {
        Self { catalog, narration }
    }

    pub fn view(&self) -> HomeView {
        HomeView {
            app_name: APP_NAME,
            tagline: APP_TAGLINE,
            greeting: HOME_GREETING,
            intro: HOME_INTRO,
            topic_count: self.catalog.len(),
            pending_reminders: Reminder::pending().len(),
            cards: self.cards(),
        }
    }

    pub fn cards(&self) -> Vec<TopicCard> {
        self.catalog
            .topics()
            .iter()
            .enumerate()
            .map(|(i, topic)| self.card(i + 1, topic))
            .collect()
    }

    fn card(&self, position: usize, topic: &'static TopicRecord) -> TopicCard {
        TopicCard {
            id: topic.id,
            position,
            index_label: format!("{position:02}"),
            title: topic.card_title,
            subtitle: topic.card_subtitle,
            tag: topic.tag,
            accent_color: topic.accent_color,
            icon: topic.icon,
            read_time: topic.read_time,
            route: topic.route(),
            playing: self.narration.is_playing(topic.id),
        }
    }

    /// Plays or pauses the narration of one card.
    pub async fn toggle_card(&self, id: &str) -> KalpResult<()> {
        let topic = self
            .catalog
            .get(id)
            .ok_or_else(|| KalpError::UnknownTopic(id.to_string()))?;
        self.narration.toggle(topic.id, topic.narration_script).await;
        Ok(())
    }

    pub fn narration(&self) -> &NarrationController {
        &self.narration
    }

    pub fn profile_notice(&self) -> Notice {
        Notice::profile()
    }

    pub fn reminders_notice(&self) -> Notice {
        Notice::reminders()
    }

    pub async fn teardown(&self) {
        self.narration.teardown().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narration::test_support::*;
    use crate::NarrationState;
    use kalp_content::{catalog, scripts, NoticeKind};

    fn home(engine: &std::sync::Arc<ScriptedEngine>) -> HomeScreen {
        let notifier = RecordingNotifier::new();
        HomeScreen::new(
            catalog(),
            NarrationController::new(engine.clone(), notifier),
        )
    }

    #[tokio::test]
    async fn lists_one_card_per_topic_in_order() {
        let screen = home(&ScriptedEngine::new());
        let cards = screen.cards();

        let labels: Vec<_> = cards.iter().map(|c| c.index_label.as_str()).collect();
        assert_eq!(labels, ["01", "02", "03", "04", "05"]);
        assert_eq!(cards[2].id, "ameliyat");
        assert_eq!(cards[2].route, "/topic/ameliyat");
        assert!(cards.iter().all(|c| !c.playing));
    }

    #[tokio::test]
    async fn view_carries_header_and_counts() {
        let view = home(&ScriptedEngine::new()).view();
        assert_eq!(view.app_name, "KalpSağlık");
        assert_eq!(view.topic_count, 5);
        assert_eq!(view.pending_reminders, 3);
        assert_eq!(view.cards.len(), 5);
    }

    #[tokio::test]
    async fn toggling_a_card_marks_only_that_card_playing() {
        let engine = ScriptedEngine::new();
        let screen = home(&engine);

        screen.toggle_card("oncesi").await.expect("known card");
        let playing: Vec<_> = screen
            .cards()
            .into_iter()
            .filter(|c| c.playing)
            .map(|c| c.id)
            .collect();
        assert_eq!(playing, ["oncesi"]);
        assert_eq!(
            engine.calls().last(),
            Some(&EngineCall::Speak(scripts::ONCESI.to_string()))
        );

        screen.toggle_card("oncesi").await.expect("known card");
        assert!(screen.cards().iter().all(|c| !c.playing));
    }

    #[tokio::test]
    async fn unknown_card_is_rejected_without_touching_the_engine() {
        let engine = ScriptedEngine::new();
        let screen = home(&engine);

        let err = screen.toggle_card("xyz").await.expect_err("no such card");
        assert!(matches!(err, KalpError::UnknownTopic(ref id) if id == "xyz"));
        assert!(engine.calls().is_empty());
        assert_eq!(screen.narration().state(), NarrationState::Idle);
    }

    #[tokio::test]
    async fn exposes_fixed_notices() {
        let screen = home(&ScriptedEngine::new());
        assert_eq!(screen.profile_notice().kind, NoticeKind::Profile);
        assert_eq!(screen.reminders_notice().kind, NoticeKind::Reminders);
    }

    #[tokio::test]
    async fn teardown_stops_card_narration() {
        let engine = ScriptedEngine::new();
        let screen = home(&engine);

        screen.toggle_card("genel").await.unwrap();
        screen.teardown().await;

        assert_eq!(engine.calls().last(), Some(&EngineCall::Stop));
        assert!(screen.cards().iter().all(|c| !c.playing));
    }
}

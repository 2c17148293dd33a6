//! Mounted screen instances.
//!
//! Every mounted screen owns its narration controller and a notice queue that the client drains
//! by polling. Instances live until they are deleted or go unpolled for longer than the
//! configured time-to-live.

use kalp_core::{HomeScreen, NarrationController, NarrationState, NoticeQueue, TopicScreen};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use std::time::Duration;
use tokio::time::Instant;
use uuid::Uuid;

#[derive(Debug)]
pub enum Screen {
    Home(HomeScreen),
    Topic(TopicScreen),
}

impl Screen {
    pub fn narration(&self) -> &NarrationController {
        match self {
            Screen::Home(home) => home.narration(),
            Screen::Topic(topic) => topic.narration(),
        }
    }

    pub async fn teardown(&self) {
        match self {
            Screen::Home(home) => home.teardown().await,
            Screen::Topic(topic) => topic.teardown().await,
        }
    }
}

#[derive(Debug)]
pub struct MountedScreen {
    pub id: Uuid,
    pub screen: Screen,
    pub notices: NoticeQueue,
    last_seen: Mutex<Instant>,
}

impl MountedScreen {
    pub fn narration_state(&self) -> NarrationState {
        self.screen.narration().state()
    }

    /// Records that a client just used this screen.
    pub fn touch(&self) {
        *self.last_seen.lock().unwrap_or_else(PoisonError::into_inner) = Instant::now();
    }

    pub fn idle_for(&self, now: Instant) -> Duration {
        let last_seen = *self.last_seen.lock().unwrap_or_else(PoisonError::into_inner);
        now.saturating_duration_since(last_seen)
    }
}

#[derive(Debug, Default)]
pub struct ScreenRegistry {
    screens: RwLock<HashMap<Uuid, Arc<MountedScreen>>>,
}

impl ScreenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a screen under a fresh identifier.
    pub fn mount(&self, screen: Screen, notices: NoticeQueue) -> Arc<MountedScreen> {
        let mounted = Arc::new(MountedScreen {
            id: Uuid::new_v4(),
            screen,
            notices,
            last_seen: Mutex::new(Instant::now()),
        });
        self.screens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(mounted.id, Arc::clone(&mounted));
        tracing::debug!("mounted screen {}", mounted.id);
        mounted
    }

    pub fn get(&self, id: &Uuid) -> Option<Arc<MountedScreen>> {
        self.screens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    /// Removes a screen and tears it down. Returns `false` if no such screen is mounted.
    pub async fn unmount(&self, id: &Uuid) -> bool {
        let removed = self
            .screens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id);

        match removed {
            Some(mounted) => {
                mounted.screen.teardown().await;
                tracing::debug!("unmounted screen {id}");
                true
            }
            None => false,
        }
    }

    /// Tears down and removes every screen that has gone unused for at least `ttl`.
    ///
    /// Returns how many screens were evicted.
    pub async fn unmount_idle(&self, ttl: Duration) -> usize {
        let now = Instant::now();
        let expired: Vec<_> = {
            let mut screens = self.screens.write().unwrap_or_else(PoisonError::into_inner);
            let ids: Vec<Uuid> = screens
                .values()
                .filter(|mounted| mounted.idle_for(now) >= ttl)
                .map(|mounted| mounted.id)
                .collect();
            ids.iter().filter_map(|id| screens.remove(id)).collect()
        };

        for mounted in &expired {
            mounted.screen.teardown().await;
            tracing::info!(
                "evicted screen {} after {:?} without a request",
                mounted.id,
                mounted.idle_for(now)
            );
        }
        expired.len()
    }

    /// Tears down and removes every mounted screen.
    pub async fn unmount_all(&self) {
        let drained: Vec<_> = self
            .screens
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .drain()
            .map(|(_, mounted)| mounted)
            .collect();

        for mounted in drained {
            mounted.screen.teardown().await;
        }
    }

    pub fn len(&self) -> usize {
        self.screens
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

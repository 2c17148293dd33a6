//! Screen view models.
//!
//! Each mounted screen owns its own [`NarrationController`](crate::NarrationController); nothing
//! about narration is shared between screens. Views are plain serialisable snapshots.

mod home;
mod topic;

pub use home::{HomeScreen, HomeView, TopicCard};
pub use topic::{NavLink, TopicScreen, TopicView};

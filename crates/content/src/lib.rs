//! # KalpSağlık content
//!
//! Static, read-only content for the patient-education service.
//!
//! This crate holds:
//! - the topic catalog (five topics in a fixed authoring order)
//! - structured content sections for each topic page
//! - narration scripts, authored separately from the page content
//! - fixed notices (patient profile, pending reminders, narration failure)
//!
//! Nothing here is mutated at runtime. Screens, narration and transport concerns live in
//! `kalp-core`, `api-rest` and `kalp-cli`.

pub mod catalog;
pub mod notices;
pub mod scripts;
pub mod section;
pub mod topic;
mod topics;

pub use catalog::{catalog, Catalog, Siblings};
pub use notices::{Notice, NoticeKind, PatientProfile, Reminder, ReminderKind};
pub use section::{ContentSection, SectionKind};
pub use topic::{Icon, TopicRecord};

/// Application name shown in the home header.
pub const APP_NAME: &str = "KalpSağlık";

/// Tagline shown under the application name.
pub const APP_TAGLINE: &str = "Hasta Eğitim Platformu";

/// Greeting shown on the home hero banner.
pub const HOME_GREETING: &str = "Hoş Geldiniz";

/// Introductory paragraph shown on the home hero banner.
pub const HOME_INTRO: &str = "Bu uygulama ameliyat süreciniz boyunca size rehberlik etmek için \
tasarlanmıştır. Aşağıdaki konuları inceleyiniz.";

/// Label used by topic pages for the link back to the home route once the last topic is reached.
pub const FINISH_LABEL: &str = "Ana Sayfa";

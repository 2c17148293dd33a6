//! Fixed notices.
//!
//! Three notices exist: the patient profile summary, the list of pending reminders, and the
//! narration failure message. All are presentation only and are dismissed with a single
//! acknowledgment.

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::Serialize;

const MONTHS_TR: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];

/// Which notice a [`Notice`] carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Profile,
    Reminders,
    NarrationFailure,
}

impl NoticeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NoticeKind::Profile => "profile",
            NoticeKind::Reminders => "reminders",
            NoticeKind::NarrationFailure => "narration_failure",
        }
    }
}

/// A modal message with one dismiss action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
    pub dismiss_label: &'static str,
}

impl Notice {
    /// Profile summary notice.
    pub fn profile() -> Self {
        let profile = PatientProfile::current();
        Notice {
            kind: NoticeKind::Profile,
            title: "Profil".into(),
            message: profile.summary(),
            dismiss_label: "Kapat",
        }
    }

    /// Pending reminders notice.
    pub fn reminders() -> Self {
        let message = Reminder::pending()
            .iter()
            .map(Reminder::line)
            .collect::<Vec<_>>()
            .join("\n\n");

        Notice {
            kind: NoticeKind::Reminders,
            title: "Bildirimler".into(),
            message,
            dismiss_label: "Tamam",
        }
    }

    /// Shown when the speech engine reports an error.
    pub fn narration_failure() -> Self {
        Notice {
            kind: NoticeKind::NarrationFailure,
            title: "Sesli Okuma Hatası".into(),
            message: "Sesli okuma başlatılamadı. Lütfen cihaz ses ayarlarınızı kontrol ediniz."
                .into(),
            dismiss_label: "Tamam",
        }
    }
}

/// Static patient profile shown from the home header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PatientProfile {
    pub full_name: &'static str,
    pub doctor: &'static str,
    pub surgery_date: NaiveDate,
    pub hospital: &'static str,
}

impl PatientProfile {
    pub fn current() -> Self {
        PatientProfile {
            full_name: "Ahmet Yılmaz",
            doctor: "Prof. Dr. Mehmet Demir",
            surgery_date: NaiveDate::from_ymd_opt(2026, 2, 25).unwrap_or_default(),
            hospital: "Ankara Kalp Merkezi",
        }
    }

    /// Multi-line summary used as the profile notice body.
    pub fn summary(&self) -> String {
        format!(
            "Hasta Profili\n\nAd Soyad: {}\nDoktor: {}\nAmeliyat Tarihi: {}\nHastane: {}",
            self.full_name,
            self.doctor,
            format_date_tr(self.surgery_date),
            self.hospital
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderKind {
    Medication,
    Appointment,
    Discharge,
}

impl ReminderKind {
    fn marker(self) -> &'static str {
        match self {
            ReminderKind::Medication => "🔔",
            ReminderKind::Appointment => "📅",
            ReminderKind::Discharge => "💊",
        }
    }
}

/// One pending reminder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Reminder {
    pub kind: ReminderKind,
    pub title: &'static str,
    pub detail: &'static str,
    /// Time appended to the line, for reminders whose detail does not already name it.
    pub at: Option<NaiveTime>,
}

impl Reminder {
    /// Reminders shown in the notification notice, in display order.
    pub fn pending() -> Vec<Reminder> {
        vec![
            Reminder {
                kind: ReminderKind::Medication,
                title: "İlaç Hatırlatıcısı",
                detail: "Kan sulandırıcıyı almayı unutmayın",
                at: NaiveTime::from_hms_opt(8, 0, 0),
            },
            Reminder {
                kind: ReminderKind::Appointment,
                title: "Randevu",
                detail: "Yarın saat 10:30'da kontrol randevunuz var.",
                at: None,
            },
            Reminder {
                kind: ReminderKind::Discharge,
                title: "Taburculuk Bilgisi",
                detail: "Yara bakım rehberini okuyunuz.",
                at: None,
            },
        ]
    }

    /// Single display line: marker, title, detail and the optional `(HH:MM)` suffix.
    pub fn line(&self) -> String {
        let mut line = format!("{} {} — {}", self.kind.marker(), self.title, self.detail);
        if let Some(at) = self.at {
            line.push_str(&format!(" ({})", at.format("%H:%M")));
        }
        line
    }
}

/// Formats a date the Turkish way, e.g. `25 Şubat 2026`.
pub fn format_date_tr(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTHS_TR[date.month0() as usize],
        date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_turkish_dates() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 25).unwrap();
        assert_eq!(format_date_tr(date), "25 Şubat 2026");

        let date = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        assert_eq!(format_date_tr(date), "1 Aralık 2025");
    }

    #[test]
    fn profile_notice_lists_patient_details() {
        let notice = Notice::profile();
        assert_eq!(notice.kind, NoticeKind::Profile);
        assert_eq!(notice.dismiss_label, "Kapat");
        assert!(notice.message.starts_with("Hasta Profili"));
        assert!(notice.message.contains("Ad Soyad: Ahmet Yılmaz"));
        assert!(notice.message.contains("Ameliyat Tarihi: 25 Şubat 2026"));
    }

    #[test]
    fn reminders_notice_has_one_paragraph_per_reminder() {
        let notice = Notice::reminders();
        assert_eq!(notice.kind, NoticeKind::Reminders);
        let paragraphs: Vec<_> = notice.message.split("\n\n").collect();
        assert_eq!(paragraphs.len(), Reminder::pending().len());
    }

    #[test]
    fn reminders_notice_keeps_the_fixed_wording() {
        assert_eq!(
            Notice::reminders().message,
            "🔔 İlaç Hatırlatıcısı — Kan sulandırıcıyı almayı unutmayın (08:00)\n\n\
             📅 Randevu — Yarın saat 10:30'da kontrol randevunuz var.\n\n\
             💊 Taburculuk Bilgisi — Yara bakım rehberini okuyunuz."
        );
    }

    #[test]
    fn narration_failure_points_to_audio_settings() {
        let notice = Notice::narration_failure();
        assert_eq!(notice.kind, NoticeKind::NarrationFailure);
        assert!(notice.message.contains("ses ayarlarınızı"));
        assert_eq!(notice.dismiss_label, "Tamam");
    }

    #[test]
    fn kind_names_match_serialised_form() {
        for kind in [
            NoticeKind::Profile,
            NoticeKind::Reminders,
            NoticeKind::NarrationFailure,
        ] {
            assert_eq!(serde_json::to_value(kind).unwrap(), kind.as_str());
        }
    }
}

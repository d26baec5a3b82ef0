use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// When a reminder fires relative to the due instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationTiming {
    #[default]
    OneHourBefore,
    /// Day before, 08:00
    DayBeforeMorning,
    /// Day before, 20:00
    DayBeforeNight,
}

impl NotificationTiming {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationTiming::OneHourBefore => "1 Hour Before",
            NotificationTiming::DayBeforeMorning => "1 Day Before - Morning",
            NotificationTiming::DayBeforeNight => "1 Day Before - Night",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationPrefs {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_true")]
    pub class_work: bool,
    #[serde(default = "default_true")]
    pub homework: bool,
    #[serde(default = "default_true")]
    pub assessments: bool,
    #[serde(default)]
    pub timing: NotificationTiming,
}

fn default_true() -> bool {
    true
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            enabled: true,
            class_work: true,
            homework: true,
            assessments: true,
            timing: NotificationTiming::default(),
        }
    }
}

/// How completed assignments are rendered in list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompletedStyle {
    #[serde(default)]
    pub show_as_green: bool,
    #[serde(default)]
    pub show_as_strikethrough: bool,
}

/// `on` / `off` switch used by the settings command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

impl From<Switch> for bool {
    fn from(s: Switch) -> bool {
        matches!(s, Switch::On)
    }
}

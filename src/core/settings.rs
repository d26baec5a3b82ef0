use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::preferences::{NotificationTiming, Switch, Theme};
use crate::ui::messages::{success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

/// Changes requested by the `settings` command. `None` leaves a field untouched.
#[derive(Debug, Default, Clone)]
pub struct SettingsUpdate {
    pub theme: Option<Theme>,
    pub notifications: Option<Switch>,
    pub timing: Option<NotificationTiming>,
    pub notify_class_work: Option<Switch>,
    pub notify_homework: Option<Switch>,
    pub notify_assessments: Option<Switch>,
    pub completed_green: Option<Switch>,
    pub completed_strike: Option<Switch>,
    pub month_preview: Option<usize>,
    pub default_due_time: Option<String>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.theme.is_none()
            && self.notifications.is_none()
            && self.timing.is_none()
            && self.notify_class_work.is_none()
            && self.notify_homework.is_none()
            && self.notify_assessments.is_none()
            && self.completed_green.is_none()
            && self.completed_strike.is_none()
            && self.month_preview.is_none()
            && self.default_due_time.is_none()
    }

    /// Apply onto `cfg`. Returns the names of the changed keys.
    pub fn apply(&self, cfg: &mut Config) -> AppResult<Vec<&'static str>> {
        let mut changed = Vec::new();

        if let Some(t) = &self.default_due_time {
            crate::utils::time::parse_time(t).ok_or_else(|| AppError::InvalidTime(t.clone()))?;
            cfg.default_due_time = t.clone();
            changed.push("default_due_time");
        }
        if let Some(t) = self.theme {
            cfg.theme = t;
            changed.push("theme");
        }
        if let Some(s) = self.notifications {
            cfg.notifications.enabled = s.into();
            changed.push("notifications.enabled");
        }
        if let Some(t) = self.timing {
            cfg.notifications.timing = t;
            changed.push("notifications.timing");
        }
        if let Some(s) = self.notify_class_work {
            cfg.notifications.class_work = s.into();
            changed.push("notifications.class_work");
        }
        if let Some(s) = self.notify_homework {
            cfg.notifications.homework = s.into();
            changed.push("notifications.homework");
        }
        if let Some(s) = self.notify_assessments {
            cfg.notifications.assessments = s.into();
            changed.push("notifications.assessments");
        }
        if let Some(s) = self.completed_green {
            cfg.completed_style.show_as_green = s.into();
            changed.push("completed_style.show_as_green");
        }
        if let Some(s) = self.completed_strike {
            cfg.completed_style.show_as_strikethrough = s.into();
            changed.push("completed_style.show_as_strikethrough");
        }
        if let Some(n) = self.month_preview {
            cfg.month_preview = n;
            changed.push("month_preview");
        }

        Ok(changed)
    }
}

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(path: &Path, cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration ({}):\n", path.display());
        if path.exists() {
            println!("{}", fs::read_to_string(path)?);
        } else {
            warning("Configuration file not found, showing defaults.");
            println!("{}", serde_yaml::to_string(cfg)?);
        }
        Ok(())
    }

    /// Open the file in `editor`, falling back to $EDITOR / $VISUAL / nano (notepad on Windows).
    pub fn edit(path: &Path, editor: Option<&str>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.map(str::to_string).unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using '{}'",
                    editor_to_use
                ));
                return Ok(());
            }
            _ => warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            )),
        }

        match Command::new(&default_editor).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using fallback '{}'",
                    default_editor
                ));
                Ok(())
            }
            _ => Err(AppError::Config(format!(
                "failed to edit configuration file using '{}'",
                default_editor
            ))),
        }
    }
}

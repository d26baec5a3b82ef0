use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::settings::SettingsUpdate;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

fn on_off(b: bool) -> &'static str {
    if b { "on" } else { "off" }
}

fn print_settings(cfg: &Config) {
    let n = &cfg.notifications;
    println!("⚙️  Settings\n");
    println!("  theme                 : {:?}", cfg.theme);
    println!("  notifications         : {}", on_off(n.enabled));
    println!("  timing                : {}", n.timing.label());
    println!("  notify class work     : {}", on_off(n.class_work));
    println!("  notify homework       : {}", on_off(n.homework));
    println!("  notify quizzes/tests  : {}", on_off(n.assessments));
    println!("  completed in green    : {}", on_off(cfg.completed_style.show_as_green));
    println!("  completed struck out  : {}", on_off(cfg.completed_style.show_as_strikethrough));
    println!("  month preview         : {}", cfg.month_preview);
    println!("  default due time      : {}", cfg.default_due_time);
}

pub fn handle(cmd: &Commands, cfg: &Config, config_path: &Path) -> AppResult<()> {
    if let Commands::Settings {
        theme,
        notifications,
        timing,
        notify_class_work,
        notify_homework,
        notify_assessments,
        completed_green,
        completed_strike,
        month_preview,
        default_due_time,
    } = cmd
    {
        let update = SettingsUpdate {
            theme: *theme,
            notifications: *notifications,
            timing: *timing,
            notify_class_work: *notify_class_work,
            notify_homework: *notify_homework,
            notify_assessments: *notify_assessments,
            completed_green: *completed_green,
            completed_strike: *completed_strike,
            month_preview: *month_preview,
            default_due_time: default_due_time.clone(),
        };

        if update.is_empty() {
            print_settings(cfg);
            return Ok(());
        }

        // Reload from disk so a `--db` override is not persisted
        let mut new_cfg = Config::load(config_path)?;
        let changed = update.apply(&mut new_cfg)?;
        new_cfg.save(config_path)?;

        for key in changed {
            info(format!("updated {key}"));
        }
        success(format!("Settings saved to {}", config_path.display()));
        print_settings(&new_cfg);
    }
    Ok(())
}

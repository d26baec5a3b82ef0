use crate::core::dashboard::Dashboard;
use crate::core::reminders::Reminder;
use crate::models::SubjectPalette;
use crate::models::preferences::NotificationTiming;
use crate::utils::colors::{GREY, RESET, colorize_optional};
use crate::utils::formatting::{bold, pad_right};
use chrono::TimeZone;

pub fn render_dashboard<Tz: TimeZone>(d: &Dashboard<'_>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();

    out.push_str(&bold(&format!(
        "Upcoming Assignments (Due Today, {})",
        d.today.format("%Y-%m-%d")
    )));
    out.push('\n');

    if d.due_today.is_empty() {
        out.push_str(&format!("  {GREY}No Assignments Due Today{RESET}\n"));
    } else {
        for a in &d.due_today {
            out.push_str(&format!(
                "  #{} {} [{}] {}\n",
                a.id,
                a.name,
                a.subject,
                a.due_local(tz).format("%H:%M")
            ));
            out.push_str(&format!("     {}\n", colorize_optional(a.notes.trim())));
        }
    }

    out.push('\n');
    out.push_str(&bold("Quick Stats"));
    out.push('\n');
    out.push_str(&format!("  Assignments Due : {}\n", d.due_today.len()));
    out.push_str(&format!("  Courses         : {}\n", d.courses));
    out.push_str(&format!("  Pending         : {}\n", d.pending));
    out.push_str(&format!("  Completed       : {}\n", d.completed));

    out
}

pub fn render_reminders<Tz: TimeZone>(
    reminders: &[Reminder<'_>],
    timing: NotificationTiming,
    tz: &Tz,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();

    out.push_str(&bold(&format!("Reminders ({})", timing.label())));
    out.push('\n');

    if reminders.is_empty() {
        out.push_str(&format!("  {GREY}No upcoming reminders{RESET}\n"));
        return out;
    }

    for r in reminders {
        let a = r.assignment;
        out.push_str(&format!(
            "  {} → #{} {} ({} {}, due {})\n",
            r.fire_at.with_timezone(tz).format("%Y-%m-%d %H:%M"),
            a.id,
            a.name,
            a.subject,
            a.sub_type.label(),
            a.due_str(tz),
        ));
    }

    out
}

pub fn render_subjects(palette: &SubjectPalette) -> String {
    let mut out = String::new();

    if palette.is_empty() {
        out.push_str("No subjects configured.\n");
        return out;
    }

    for (name, color) in palette.iter() {
        out.push_str(&format!(
            "  {}●{RESET} {}{}\n",
            color.ansi(),
            pad_right(name, 20),
            color.to_db_str()
        ));
    }

    out
}

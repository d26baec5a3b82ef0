use crate::core::grouping::SubjectGroup;
use crate::models::Assignment;
use crate::models::preferences::CompletedStyle;
use crate::utils::colors::{GREEN, GREY, RESET, STRIKE, paint};
use crate::utils::formatting::{bold, pad_left};
use chrono::TimeZone;

fn completed_name(a: &Assignment, style: &CompletedStyle) -> String {
    if !a.completed {
        return a.name.clone();
    }

    let mut prefix = String::new();
    if style.show_as_green {
        prefix.push_str(GREEN);
    }
    if style.show_as_strikethrough {
        prefix.push_str(STRIKE);
    }

    if prefix.is_empty() {
        format!("{} ✓ Finished", a.name)
    } else {
        format!("{prefix}{}{RESET}", a.name)
    }
}

/// "Assignments by Subject" listing.
pub fn render_subject_groups<Tz: TimeZone>(
    groups: &[SubjectGroup<'_>],
    style: &CompletedStyle,
    tz: &Tz,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::new();

    if groups.is_empty() {
        out.push_str("No subjects configured.\n");
        return out;
    }

    for g in groups {
        let color = g.color.ansi();
        out.push_str(&paint(&bold(&format!("{}:", g.subject)), color));
        out.push('\n');

        if g.sections.is_empty() {
            out.push_str(&format!("  {GREY}(no assignments){RESET}\n\n"));
            continue;
        }

        for s in &g.sections {
            out.push_str(&format!("  {}\n", paint(s.sub_type.label(), color)));
            for a in &s.records {
                out.push_str(&format!(
                    "    {} {}  {GREY}{}{RESET}\n",
                    pad_left(&format!("#{}", a.id), 5),
                    completed_name(a, style),
                    a.due_str(tz),
                ));
                if !a.notes.trim().is_empty() {
                    out.push_str(&format!("          {GREY}{}{RESET}\n", a.notes.trim()));
                }
            }
        }
        out.push('\n');
    }

    out
}

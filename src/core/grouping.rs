use crate::models::{Assignment, SubType, SubjectColor, SubjectPalette};

#[derive(Debug, Clone, PartialEq)]
pub struct SubTypeSection<'a> {
    pub sub_type: SubType,
    pub records: Vec<&'a Assignment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubjectGroup<'a> {
    pub subject: String,
    pub color: SubjectColor,
    pub sections: Vec<SubTypeSection<'a>>,
}

impl SubjectGroup<'_> {
    pub fn total(&self) -> usize {
        self.sections.iter().map(|s| s.records.len()).sum()
    }
}

/// "Assignments by subject" view.
///
/// One group per palette subject (alphabetical, kept even when empty),
/// one section per non-empty sub-type in canonical order.
/// Assignments whose subject is not in the palette are not listed.
pub fn group_by_subject<'a>(
    records: &'a [Assignment],
    palette: &SubjectPalette,
) -> Vec<SubjectGroup<'a>> {
    palette
        .iter()
        .map(|(subject, color)| {
            let sections = SubType::ALL
                .iter()
                .filter_map(|st| {
                    let matching: Vec<&Assignment> = records
                        .iter()
                        .filter(|a| a.subject == subject && a.sub_type == *st)
                        .collect();

                    if matching.is_empty() {
                        None
                    } else {
                        Some(SubTypeSection {
                            sub_type: *st,
                            records: matching,
                        })
                    }
                })
                .collect();

            SubjectGroup {
                subject: subject.to_string(),
                color,
                sections,
            }
        })
        .collect()
}

/// Drop completed assignments from every section, then drop emptied sections.
pub fn filter_pending(groups: Vec<SubjectGroup<'_>>) -> Vec<SubjectGroup<'_>> {
    groups
        .into_iter()
        .map(|mut g| {
            for s in &mut g.sections {
                s.records.retain(|a| !a.completed);
            }
            g.sections.retain(|s| !s.records.is_empty());
            g
        })
        .collect()
}

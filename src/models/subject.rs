use crate::utils::colors;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named colors a subject can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SubjectColor {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Grey,
}

impl SubjectColor {
    pub fn ansi(&self) -> &'static str {
        match self {
            SubjectColor::Red => colors::RED,
            SubjectColor::Green => colors::GREEN,
            SubjectColor::Yellow => colors::YELLOW,
            SubjectColor::Blue => colors::BLUE,
            SubjectColor::Magenta => colors::MAGENTA,
            SubjectColor::Cyan => colors::CYAN,
            SubjectColor::White => colors::WHITE,
            SubjectColor::Grey => colors::GREY,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            SubjectColor::Red => "red",
            SubjectColor::Green => "green",
            SubjectColor::Yellow => "yellow",
            SubjectColor::Blue => "blue",
            SubjectColor::Magenta => "magenta",
            SubjectColor::Cyan => "cyan",
            SubjectColor::White => "white",
            SubjectColor::Grey => "grey",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(SubjectColor::Red),
            "green" => Some(SubjectColor::Green),
            "yellow" => Some(SubjectColor::Yellow),
            "blue" => Some(SubjectColor::Blue),
            "magenta" => Some(SubjectColor::Magenta),
            "cyan" => Some(SubjectColor::Cyan),
            "white" => Some(SubjectColor::White),
            "grey" | "gray" => Some(SubjectColor::Grey),
            _ => None,
        }
    }
}

/// Subject name → display color. Keys are unique and iterate alphabetically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubjectPalette {
    entries: BTreeMap<String, SubjectColor>,
}

impl SubjectPalette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Palette seeded on a fresh database.
    pub fn with_defaults() -> Self {
        let mut p = Self::new();
        p.insert("Math", SubjectColor::Blue);
        p.insert("Science", SubjectColor::Green);
        p.insert("History", SubjectColor::Red);
        p
    }

    /// Insert or recolor a subject. Returns the previous color, if any.
    pub fn insert(&mut self, name: &str, color: SubjectColor) -> Option<SubjectColor> {
        self.entries.insert(name.to_string(), color)
    }

    pub fn remove(&mut self, name: &str) -> Option<SubjectColor> {
        self.entries.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn color_of(&self, name: &str) -> Option<SubjectColor> {
        self.entries.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, SubjectColor)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

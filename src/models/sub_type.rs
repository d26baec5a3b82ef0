use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Kind of assignment inside a subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SubType {
    ClassWork,
    Homework,
    Quiz,
    Test,
}

impl SubType {
    /// Canonical display order of the subject view.
    pub const ALL: [SubType; 4] = [
        SubType::ClassWork,
        SubType::Homework,
        SubType::Quiz,
        SubType::Test,
    ];

    /// Section label used by the subject view.
    pub fn label(&self) -> &'static str {
        match self {
            SubType::ClassWork => "Class Work",
            SubType::Homework => "Homework",
            SubType::Quiz => "Quizzes",
            SubType::Test => "Tests",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            SubType::ClassWork => "class_work",
            SubType::Homework => "homework",
            SubType::Quiz => "quiz",
            SubType::Test => "test",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "class_work" => Some(SubType::ClassWork),
            "homework" => Some(SubType::Homework),
            "quiz" => Some(SubType::Quiz),
            "test" => Some(SubType::Test),
            _ => None,
        }
    }

    /// Quizzes and tests share one notification toggle.
    pub fn is_assessment(&self) -> bool {
        matches!(self, SubType::Quiz | SubType::Test)
    }
}

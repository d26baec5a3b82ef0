pub mod assignment;
pub mod preferences;
pub mod sub_type;
pub mod subject;

pub use assignment::{Assignment, AssignmentDraft, AssignmentPatch};
pub use sub_type::SubType;
pub use subject::{SubjectColor, SubjectPalette};

//! TeacherType - Role of a teacher within a course instance

use serde::{Deserialize, Serialize};

/// Teacher role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TeacherType {
    MainTeacher,
    AssistantTeacher,
}

impl TeacherType {
    /// Integer tag used in storage
    pub fn tag(self) -> i16 {
        match self {
            TeacherType::MainTeacher => 1,
            TeacherType::AssistantTeacher => 2,
        }
    }
}

impl TryFrom<i16> for TeacherType {
    type Error = String;

    fn try_from(tag: i16) -> Result<Self, Self::Error> {
        match tag {
            1 => Ok(TeacherType::MainTeacher),
            2 => Ok(TeacherType::AssistantTeacher),
            _ => Err(format!("Unknown teacher type tag: {}", tag)),
        }
    }
}

impl std::fmt::Display for TeacherType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeacherType::MainTeacher => write!(f, "main_teacher"),
            TeacherType::AssistantTeacher => write!(f, "assistant_teacher"),
        }
    }
}

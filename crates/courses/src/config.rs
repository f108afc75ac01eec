//! Report configuration

/// Semester reported when the caller does not name one
pub const DEFAULT_SEMESTER: &str = "20153";

/// Configuration for [`SemesterReportService`](crate::application::SemesterReportService)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub default_semester: String,
}

impl ReportConfig {
    pub fn new(default_semester: impl Into<String>) -> Self {
        Self {
            default_semester: default_semester.into(),
        }
    }

    /// Requested semester, or the default when absent or empty
    pub fn resolve_semester<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        match requested {
            Some(semester) if !semester.is_empty() => semester,
            _ => &self.default_semester,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SEMESTER)
    }
}

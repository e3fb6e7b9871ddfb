use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Success   => write!(f, "success"),
            Severity::Error     => write!(f, "error"),
        }
    }
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    severity    : Severity,
    summary     : String,
    detail      : Option<String>,
}

impl Notification {
    pub fn success(summary: &str) -> Self {
        Self {
            severity: Severity::Success,
            summary : summary.to_string(),
            detail  : None,
        }
    }

    pub fn error(summary: &str, detail: &str) -> Self {
        Self {
            severity: Severity::Error,
            summary : summary.to_string(),
            detail  : Some(detail.to_string()),
        }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.detail.as_ref() {
            Some(detail) => write!(f, "[{}] {}: {}", self.severity, self.summary, detail),
            None => write!(f, "[{}] {}", self.severity, self.summary),
        }
    }
}

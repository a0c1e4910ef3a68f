use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

/// How a notice is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Blocking dialog
    Alert,
    /// Transient notification
    Toast,
}

/// A message shown to the user after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn alert(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Alert,
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn toast(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Toast,
            severity,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::toast(Severity::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::toast(Severity::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::toast(Severity::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::toast(Severity::Error, message)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match (self.kind, self.severity) {
            (NoticeKind::Alert, _) => "‼️",
            (_, Severity::Success) => "✅",
            (_, Severity::Info) => "ℹ️",
            (_, Severity::Warning) => "⚠️",
            (_, Severity::Error) => "❌",
        };
        write!(f, "{} {}", marker, self.message)
    }
}

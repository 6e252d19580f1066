use serde::Serialize;
use slugeq_domain::element::TypeHandle;
use std::fmt;

/// Which precedence tier settled the override question, and how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "camelCase")]
pub enum Decision {
    /// An explicit per-element record.
    Element { enabled: bool },
    /// The content-type default from the administrator settings.
    ContentType { handle: TypeHandle, enabled: bool },
    /// No descriptor applies to the element.
    Unsupported,
}

impl Decision {
    /// Collapses the decision to the public boolean.
    #[must_use]
    pub const fn is_overridden(&self) -> bool {
        match self {
            Self::Element { enabled } | Self::ContentType { enabled, .. } => *enabled,
            Self::Unsupported => false,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element { enabled } => write!(f, "{enabled} (element override)"),
            Self::ContentType { handle, enabled } => {
                write!(f, "{enabled} (content type `{handle}`)")
            },
            Self::Unsupported => f.write_str("false (unsupported element)"),
        }
    }
}

/// Kind of the incoming host request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    ControlPanel,
    Site,
    Console,
}

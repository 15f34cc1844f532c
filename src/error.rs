/// Layout configuration error.
#[derive(Debug)]
pub enum LayoutError {
    /// A config field holds a value layout cannot honor.
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },
    /// Host-supplied config could not be decoded.
    Config(serde_json::Error),
}

impl core::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid layout config: {} {}", field, reason)
            }
            Self::Config(err) => write!(f, "layout config decode failed: {}", err),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::InvalidConfig { .. } => None,
        }
    }
}

impl From<serde_json::Error> for LayoutError {
    fn from(value: serde_json::Error) -> Self {
        Self::Config(value)
    }
}

use std::error::Error;
use std::fmt;

/// A form control reported a value outside its closed option set.
///
/// Only the dashboard's own `<select>`/radio controls produce these strings,
/// so this signals a markup/enum mismatch rather than bad user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOption {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownOption {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

impl fmt::Display for UnknownOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} option `{}`", self.kind, self.value)
    }
}

impl Error for UnknownOption {}

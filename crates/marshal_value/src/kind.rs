use core::fmt;

/// The discriminant of a [`Value`](crate::Value), used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    Text,
    List,
    Map,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.pad("null"),
            Self::Bool => f.pad("boolean"),
            Self::Number => f.pad("number"),
            Self::Text => f.pad("text"),
            Self::List => f.pad("list"),
            Self::Map => f.pad("map"),
        }
    }
}

use std::fmt::Display;

/// Text to be sent. A list is sent as one line per element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Text(String),
    Lines(Vec<String>),
}

impl Content {
    /// Content from anything with a chat text form, e.g. a user renders as
    /// its mention
    pub fn display(value: &impl Display) -> Content {
        Content::Text(value.to_string())
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Content {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Content {
        Content::Text(text)
    }
}

impl<T: Display> From<&[T]> for Content {
    fn from(lines: &[T]) -> Content {
        Content::Lines(lines.iter().map(ToString::to_string).collect())
    }
}

impl<T: Display> From<Vec<T>> for Content {
    fn from(lines: Vec<T>) -> Content {
        Content::from(lines.as_slice())
    }
}

impl<T: Display, const N: usize> From<[T; N]> for Content {
    fn from(lines: [T; N]) -> Content {
        Content::from(lines.as_slice())
    }
}

use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invite {
    /// The invite code, the last path segment of an invite url
    pub id: String,
}

impl Invite {
    pub fn new(id: impl Into<String>) -> Invite {
        Invite { id: id.into() }
    }
}

impl Display for Invite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

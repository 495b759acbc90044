use std::fmt::{self, Display};

#[derive(Debug, Clone)]
pub struct Role {
    pub id: String,
    pub name: String,
    // roles only exist inside a server, never shared across them
    pub server: String,
}

impl Role {
    pub fn new(id: impl Into<String>, name: impl Into<String>, server: impl Into<String>) -> Role {
        Role {
            id: id.into(),
            name: name.into(),
            server: server.into(),
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<@&{}>", self.id)
    }
}

impl PartialEq for Role {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Role {}

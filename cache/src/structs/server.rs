use crate::structs::{Channel, Role, User};

use std::fmt::{self, Display};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Server {
    pub id: String,
    pub name: String,
    pub owner: Arc<User>,
    pub channels: Vec<Arc<Channel>>,
    pub roles: Vec<Arc<Role>>,
}

impl Server {
    pub fn new(id: impl Into<String>, name: impl Into<String>, owner: Arc<User>) -> Server {
        Server {
            id: id.into(),
            name: name.into(),
            owner,
            channels: Vec::new(),
            roles: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_channel(mut self, channel: Channel) -> Server {
        self.channels.push(Arc::new(channel));
        self
    }

    #[must_use]
    pub fn with_role(mut self, role: Role) -> Server {
        self.roles.push(Arc::new(role));
        self
    }

    #[inline]
    pub fn channel(&self, id: &str) -> Option<Arc<Channel>> {
        self.channels.iter().find(|c| c.id == id).cloned()
    }

    #[inline]
    pub fn role(&self, id: &str) -> Option<Arc<Role>> {
        self.roles.iter().find(|r| r.id == id).cloned()
    }
}

impl Display for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl PartialEq for Server {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Server {}

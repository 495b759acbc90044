use cache::structs::{Channel, Invite, Message, Role, Server, User};

use std::fmt::{self, Display};
use std::sync::Arc;

/// Anything an api method accepts in place of a specific entity. Which
/// variants make sense depends on what is being resolved, see the
/// `resolve_*` methods on [`crate::Resolver`].
#[derive(Debug, Clone, PartialEq)]
pub enum Resource {
    Server(Arc<Server>),
    Channel(Arc<Channel>),
    User(Arc<User>),
    Role(Arc<Role>),
    Message(Arc<Message>),
    Invite(Arc<Invite>),
    /// A raw id, or for invites a code or invite url
    Id(String),
}

impl Resource {
    pub const fn kind(&self) -> &'static str {
        match self {
            Resource::Server(_) => "server",
            Resource::Channel(_) => "channel",
            Resource::User(_) => "user",
            Resource::Role(_) => "role",
            Resource::Message(_) => "message",
            Resource::Invite(_) => "invite",
            Resource::Id(_) => "id",
        }
    }
}

impl Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = match self {
            Resource::Server(inner) => &inner.id,
            Resource::Channel(inner) => &inner.id,
            Resource::User(inner) => &inner.id,
            Resource::Role(inner) => &inner.id,
            Resource::Message(inner) => &inner.id,
            Resource::Invite(inner) => &inner.id,
            Resource::Id(inner) => inner,
        };
        write!(f, "{} {id}", self.kind())
    }
}

macro_rules! resource_from {
    ($($variant:ident: $entity:ty,)*) => {
        $(
            impl From<Arc<$entity>> for Resource {
                fn from(inner: Arc<$entity>) -> Resource {
                    Resource::$variant(inner)
                }
            }

            impl From<&Arc<$entity>> for Resource {
                fn from(inner: &Arc<$entity>) -> Resource {
                    Resource::$variant(inner.clone())
                }
            }

            impl From<$entity> for Resource {
                fn from(inner: $entity) -> Resource {
                    Resource::$variant(Arc::new(inner))
                }
            }
        )*
    }
}

resource_from! {
    Server: Server,
    Channel: Channel,
    User: User,
    Role: Role,
    Message: Message,
    Invite: Invite,
}

impl From<String> for Resource {
    fn from(id: String) -> Resource {
        Resource::Id(id)
    }
}

impl From<&str> for Resource {
    fn from(id: &str) -> Resource {
        Resource::Id(id.to_string())
    }
}

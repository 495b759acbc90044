use crate::structs::{Message, User};

use bitflags::bitflags;
use std::fmt::{self, Display};
use std::sync::Arc;

bitflags! {
    /// What a channel is able to do. A channel in a server carries `SERVER`
    /// alongside either `TEXT` or `VOICE`. A direct message is tagged only
    /// `PRIVATE` even though it also holds a last message.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ChannelKind: u8 {
        const SERVER = 1;
        const TEXT = 1 << 1;
        const VOICE = 1 << 2;
        const PRIVATE = 1 << 3;
    }
}

#[derive(Debug, Clone)]
pub struct Channel {
    pub id: String,
    pub name: String,
    pub kind: ChannelKind,

    // set for server channels only
    pub server: Option<String>,
    // set for private channels only
    pub recipient: Option<Arc<User>>,
    pub last_message: Option<Arc<Message>>,
}

impl Channel {
    pub fn text(id: impl Into<String>, name: impl Into<String>, server: impl Into<String>) -> Channel {
        Channel {
            id: id.into(),
            name: name.into(),
            kind: ChannelKind::SERVER | ChannelKind::TEXT,
            server: Some(server.into()),
            recipient: None,
            last_message: None,
        }
    }

    pub fn voice(id: impl Into<String>, name: impl Into<String>, server: impl Into<String>) -> Channel {
        Channel {
            id: id.into(),
            name: name.into(),
            kind: ChannelKind::SERVER | ChannelKind::VOICE,
            server: Some(server.into()),
            recipient: None,
            last_message: None,
        }
    }

    pub fn private(id: impl Into<String>, recipient: Arc<User>) -> Channel {
        Channel {
            id: id.into(),
            name: recipient.username.clone(),
            kind: ChannelKind::PRIVATE,
            server: None,
            recipient: Some(recipient),
            last_message: None,
        }
    }

    #[must_use]
    pub fn with_last_message(mut self, message: Arc<Message>) -> Channel {
        self.last_message = Some(message);
        self
    }

    #[inline]
    pub const fn is_server_channel(&self) -> bool {
        self.kind.contains(ChannelKind::SERVER)
    }

    #[inline]
    pub const fn is_text(&self) -> bool {
        self.kind.contains(ChannelKind::TEXT)
    }

    #[inline]
    pub const fn is_voice(&self) -> bool {
        self.kind.contains(ChannelKind::VOICE)
    }

    #[inline]
    pub const fn is_private(&self) -> bool {
        self.kind.contains(ChannelKind::PRIVATE)
    }
}

impl Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<#{}>", self.id)
    }
}

impl PartialEq for Channel {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Channel {}

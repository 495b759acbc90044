use crate::structs::{Channel, Server, User};
use crate::ReadOnlyCache;

use std::sync::Arc;

/// Mutations of the object graph. Only the event processing side of a client
/// should hold one of these, the resolver never writes.
pub trait WriteableCache: ReadOnlyCache {
    /// Inserts or replaces a server, indexing its channels and owner
    fn insert_server(&self, server: Server) -> Arc<Server>;

    /// Inserts or replaces a channel. A server channel is also replaced in its
    /// server's channel list, a private channel is kept with the private channels.
    fn insert_channel(&self, channel: Channel) -> Arc<Channel>;

    fn insert_user(&self, user: User) -> Arc<User>;

    fn remove_server(&self, server_id: &str) -> bool;

    fn remove_channel(&self, channel_id: &str) -> bool;

    fn remove_user(&self, user_id: &str) -> bool;
}

use crate::errors::Result;

use async_trait::async_trait;
use cache::structs::{Channel, User};
use cache::ReadOnlyCache;
use std::sync::Arc;

/// The client side of the object graph the resolver reads from.
///
/// The graph is mutated by whatever processes gateway events while the
/// resolver reads it, without any snapshotting. An entity resolved by id may
/// already be stale once an asynchronous resolution completes.
#[async_trait]
pub trait ClientState: ReadOnlyCache + Send + Sync {
    /// Opens a private channel with `user`. Implementations make the network
    /// request and insert the new channel into their private channels before
    /// returning it.
    async fn start_pm(&self, user: &Arc<User>) -> Result<Arc<Channel>>;
}

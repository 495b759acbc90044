use crate::errors::{Error, Result};
use crate::http::{HttpBody, HttpGet};
use crate::{ClientState, Resolver};

use async_trait::async_trait;
use cache::structs::{Channel, Message, Role, Server, User};
use cache::{MemoryCache, ReadOnlyCache, WriteableCache};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

pub(crate) fn init_logging() {
    // every test calls this, only the first one gets to set the logger
    let _ = SimpleLogger::new().with_level(LevelFilter::Debug).init();
}

/// A client backed by a `MemoryCache` whose private channel creation is
/// counted, optionally slowed down and optionally failing
#[derive(Debug, Default)]
pub(crate) struct TestClient {
    pub cache: MemoryCache,
    pub pm_requests: AtomicUsize,
    pub pm_delay: Option<Duration>,
    pub fail_pm: bool,
}

impl ReadOnlyCache for TestClient {
    fn servers(&self) -> Vec<Arc<Server>> {
        self.cache.servers()
    }

    fn channel(&self, channel_id: &str) -> Option<Arc<Channel>> {
        self.cache.channel(channel_id)
    }

    fn user(&self, user_id: &str) -> Option<Arc<User>> {
        self.cache.user(user_id)
    }

    fn private_channels(&self) -> Vec<Arc<Channel>> {
        self.cache.private_channels()
    }
}

#[async_trait]
impl ClientState for TestClient {
    async fn start_pm(&self, user: &Arc<User>) -> Result<Arc<Channel>> {
        let request = self.pm_requests.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.pm_delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_pm {
            return Err(Error::ConstStr("Cannot send messages to this user"));
        }
        Ok(self
            .cache
            .insert_channel(Channel::private(format!("pm-{}-{request}", user.id), user.clone())))
    }
}

/// Serves canned bodies by url, anything else fails like a 404
#[derive(Debug, Default)]
pub(crate) struct TestHttp {
    pub bodies: HashMap<String, HttpBody>,
}

#[async_trait]
impl HttpGet for TestHttp {
    async fn get(&self, url: &Url) -> Result<HttpBody> {
        self.bodies
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| Error::Internal(format!("404 Not Found for {url}")))
    }
}

/// Two servers sharing a role id, a text channel with a last message, a voice
/// channel and one existing private channel.
///
/// - server "1" owned by user "100", default channel "1", text "10", voice "11", roles "7" and "8"
/// - server "2" owned by user "200", text "20", role "8"
/// - users "100", "200", "300"; private channel "50" with user "300"
pub(crate) fn populated_client() -> TestClient {
    init_logging();
    let client = TestClient::default();
    let owner = client.cache.insert_user(User::new("100", "owner"));
    let other_owner = client.cache.insert_user(User::new("200", "other owner"));
    let friend = client.cache.insert_user(User::new("300", "friend"));

    let last = Arc::new(Message::new("1000", other_owner.clone(), "10", "hello <@300>"));
    client.cache.insert_server(
        Server::new("1", "first", owner)
            .with_channel(Channel::text("1", "general", "1"))
            .with_channel(Channel::text("10", "memes", "1").with_last_message(last))
            .with_channel(Channel::voice("11", "lounge", "1"))
            .with_role(Role::new("7", "mods", "1"))
            .with_role(Role::new("8", "everyone", "1")),
    );
    client.cache.insert_server(
        Server::new("2", "second", other_owner)
            .with_channel(Channel::text("20", "general", "2"))
            .with_role(Role::new("8", "everyone", "2")),
    );
    client.cache.insert_channel(Channel::private("50", friend));
    client
}

pub(crate) fn resolver(client: TestClient) -> Resolver<TestClient, TestHttp> {
    Resolver::new(Arc::new(client), TestHttp::default())
}

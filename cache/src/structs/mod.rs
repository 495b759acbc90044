mod channel;
mod invite;
mod message;
mod role;
mod server;
mod user;

pub use channel::{Channel, ChannelKind};
pub use invite::Invite;
pub use message::Message;
pub use role::Role;
pub use server::Server;
pub use user::User;

#![warn(
    clippy::cognitive_complexity,
    clippy::missing_const_for_fn,
    clippy::option_if_let_else
)]

mod client;
mod errors;
mod http;
mod resolve;
pub mod structs;

#[cfg(test)]
mod test_utils;

pub use cache;
pub use client::ClientState;
pub use errors::{Error, Result};
pub use http::{HttpBody, HttpClient, HttpGet};
pub use resolve::Resolver;
pub use structs::{Content, FileSource, Resource};

use crate::structs::Resource;

use cache::structs::User;
use std::{
    error::Error as StdError,
    fmt::{self, Display},
    result,
    sync::Arc,
};

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Reqwest(reqwest::Error),
    Url(url::ParseError),
    /// The resource has no channel it can be resolved to
    Unresolvable(Resource),
    /// Opening a private channel with the user failed
    PrivateChannel(Arc<User>, Box<Error>),
    /// Downloading the url failed
    Fetch(String, Box<Error>),
    Internal(String),
    ConstStr(&'static str),
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Reqwest(inner) => fmt::Display::fmt(&inner, f),
            Error::Url(inner) => fmt::Display::fmt(&inner, f),
            Error::Unresolvable(resource) => write!(f, "Could not resolve channel from {resource}"),
            Error::PrivateChannel(user, inner) => {
                write!(f, "Failed to open private channel with user {}: {inner}", user.id)
            }
            Error::Fetch(url, inner) => write!(f, "Failed to fetch {url}: {inner}"),
            Error::Internal(inner) => f.write_str(inner),
            Error::ConstStr(inner) => f.write_str(inner),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Reqwest(inner) => Some(inner),
            Error::Url(inner) => Some(inner),
            Error::PrivateChannel(_, inner) | Error::Fetch(_, inner) => Some(inner.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Reqwest(e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Error {
        Error::Url(e)
    }
}

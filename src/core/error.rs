use std::fmt;
use std::result;

#[derive(Debug)]
pub enum Error {
    Argument(String),
    Io(String),
    Network(String),
    Protocol(String),
    Http {
        status  : u16,
        message : Option<String>,
    },
}

impl Error {
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Argument(msg)    => write!(f, "{}", msg),
            Error::Io(msg)          => write!(f, "{}", msg),
            Error::Network(msg)     => write!(f, "{}", msg),
            Error::Protocol(msg)    => write!(f, "{}", msg),
            Error::Http { status, message } => match message {
                Some(msg) => write!(f, "Http failure response: {} {}", status, msg),
                None => write!(f, "Http failure response: {}", status),
            },
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = result::Result<T, Error>;

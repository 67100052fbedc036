use crate::state::{Event, Message};
use std::fmt::Debug;
use std::sync::Arc;
use std::sync::mpsc::{SendError, Sender};

#[derive(Debug)]
pub enum Error {
    Parse(serde_json::Error),
    Internal(SendError<Message>),
    Any(String),
    InvalidInput(String),
}

impl AsRef<Error> for Error {
    fn as_ref(&self) -> &Error {
        self
    }
}

impl From<Box<Error>> for Error {
    fn from(value: Box<Error>) -> Self {
        *value
    }
}

impl From<&str> for Error {
    fn from(e: &str) -> Self {
        Error::Any(e.to_owned())
    }
}

impl From<String> for Error {
    fn from(e: String) -> Self {
        Error::Any(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Parse(e)
    }
}

impl From<SendError<Message>> for Error {
    fn from(value: SendError<Message>) -> Self {
        Error::Internal(value)
    }
}

impl Error {
    pub fn error_type(&self) -> String {
        match self {
            Error::Parse(_) => "Parse error".into(),
            Error::Any(_) => "Error".into(),
            Error::Internal(_) => "Internal Error".into(),
            Error::InvalidInput(_) => "Invalid input".into(),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Parse(e) => write!(f, "{e}"),
            Error::Internal(e) => {
                write!(f, "{e}")
            }
            Error::Any(e) => write!(f, "{e}"),
            Error::InvalidInput(e) => {
                write!(f, "{e}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(e) => Some(e),
            Error::Internal(e) => Some(e),
            Error::Any(_) => None,
            Error::InvalidInput(_) => None,
        }
    }
}

impl Error {
    pub fn show_error_dialog(self, sender: Arc<Sender<Message>>) {
        sender
            .send(Message::Event(Arc::from(Event::ShowError(Error::from(
                self.to_string(),
            )))))
            .unwrap_or_else(|e| {
                Error::from(e).log_error();
            });
    }
    pub fn log_error(self) {
        eprintln!("{}: {}", self.error_type(), self);
    }
}

use std::io::{self, Read};
use std::path::PathBuf;

use derive_more::Display;

const STDIN_MARKER: &str = "-";

/// Where the structure text comes from.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputSource {
    #[display("<stdin>")]
    Stdin,
    #[display("{}", _0.display())]
    File(PathBuf),
}

impl InputSource {
    pub fn read_to_string(&self) -> io::Result<String> {
        match self {
            InputSource::Stdin => {
                let mut text = String::new();
                io::stdin().read_to_string(&mut text)?;
                Ok(text)
            }
            InputSource::File(path) => std::fs::read_to_string(path),
        }
    }
}

impl From<Option<PathBuf>> for InputSource {
    fn from(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) if path.as_os_str() != STDIN_MARKER => InputSource::File(path),
            _ => InputSource::Stdin,
        }
    }
}

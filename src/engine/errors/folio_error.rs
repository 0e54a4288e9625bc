use std::{fmt::Display, io::Error as IOError};

use serde_json::Error as JsonError;

pub type FolioResult<T=()> = Result<T, FolioError>;

#[derive(Debug)]
pub enum FolioError {
    IO(IOError),
    Serde(JsonError),

    /// the surrounding document did not supply this attachment point
    MissingContainer(String),

    String(String),
}
impl FolioError {
    pub fn from_err(e: impl std::error::Error) -> Self {
        Self::String(format!("{e}"))
    }
}


impl Display for FolioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::IO(e) => write!(f, "{}", e),
            Self::Serde(e) => write!(f, "{:?}", e),
            Self::MissingContainer(name) => write!(f, "no container named '{name}'"),
            Self::String(e) => write!(f, "{:?}", e),
        }
    }
}


impl From<JsonError> for FolioError {
    fn from(e: JsonError) -> Self {Self::Serde(e)}
}
impl From<IOError> for FolioError {
    fn from(e: IOError) -> Self {Self::IO(e)}
}
impl From<String> for FolioError {
    fn from(e: String) -> Self {Self::String(e)}
}

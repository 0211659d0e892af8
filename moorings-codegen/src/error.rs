//! Error types for codegen

use std::fmt;

#[derive(Debug)]
pub enum CodegenError {
    Io(std::io::Error),
    Parse(String),
    Validation(String),
}

impl fmt::Display for CodegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodegenError::Io(err) => write!(f, "io error: {err}"),
            CodegenError::Parse(msg) => write!(f, "parse error: {msg}"),
            CodegenError::Validation(msg) => write!(f, "invalid catalog: {msg}"),
        }
    }
}

impl std::error::Error for CodegenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CodegenError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CodegenError {
    fn from(err: std::io::Error) -> Self {
        CodegenError::Io(err)
    }
}

pub type Result<T> = std::result::Result<T, CodegenError>;

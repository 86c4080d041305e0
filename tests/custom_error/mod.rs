use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
pub struct CustomError;

impl fmt::Display for CustomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Custom error occurred")
    }
}

impl Error for CustomError {}

#[derive(Debug, PartialEq)]
pub struct BrokenStream(pub String);

impl fmt::Display for BrokenStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stream broke: {}", self.0)
    }
}

impl Error for BrokenStream {}

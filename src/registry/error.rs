use std::error::Error;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug)]
pub struct DuplicateFlagError(pub String);

impl Display for DuplicateFlagError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "flag '{}' is already defined", self.0)
    }
}

impl Error for DuplicateFlagError {}

#[derive(Debug)]
pub struct UnknownFlagError(pub String);

impl Display for UnknownFlagError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "unrecognized flag '{}'", self.0)
    }
}

impl Error for UnknownFlagError {}

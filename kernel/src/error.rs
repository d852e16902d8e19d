use std::fmt::Display;

use error_stack::Context;

#[derive(Debug)]
pub enum KernelError {
    Configuration,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Configuration => write!(f, "Invalid or missing configuration"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}

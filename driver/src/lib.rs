use error_stack::ResultExt;
use kernel::KernelError;

use crate::error::ConvertError;

pub mod database;
pub mod error;

pub(crate) fn env(key: &str) -> error_stack::Result<String, KernelError> {
    dotenvy::var(key)
        .convert_error()
        .attach_printable_lazy(|| format!("Failed to read environment variable `{key}`"))
}

pub(crate) fn env_opt(key: &str) -> error_stack::Result<Option<String>, KernelError> {
    match dotenvy::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(std::env::VarError::NotPresent)) => Ok(None),
        Err(error) => Err(error).convert_error(),
    }
}

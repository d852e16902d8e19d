use std::error::Error;
use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use error_stack::Report;
use kernel::KernelError;

pub(crate) trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}

impl<T> ConvertError for Result<T, dotenvy::Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| Report::new(error).change_context(KernelError::Configuration))
    }
}

impl<T, E, R> ConvertError for Result<T, SdkError<E, R>>
where
    E: Error + Send + Sync + 'static,
    R: Debug + Send + Sync + 'static,
{
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| match error {
            SdkError::TimeoutError(_) => Report::new(error).change_context(KernelError::Timeout),
            _ => Report::new(error).change_context(KernelError::Internal),
        })
    }
}

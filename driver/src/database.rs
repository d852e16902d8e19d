mod dynamodb;
mod echo;

pub use self::{dynamodb::*, echo::*};

pub use crate::error::*;

mod entity;
mod error;
mod port;

#[cfg(feature = "prelude")]
pub mod prelude {
    pub mod entity {
        pub use crate::entity::*;
    }
}

#[cfg(feature = "interface")]
pub mod interface {
    pub mod port {
        pub use crate::port::*;
    }
}

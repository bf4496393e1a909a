mod clock;
mod codec;
mod drift;
mod error;
mod id;
#[cfg(feature = "serde")]
mod serde;

pub use crate::clock::*;
pub use crate::error::*;
pub use crate::id::*;

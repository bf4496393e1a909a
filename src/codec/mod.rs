#[cfg(feature = "base62")]
mod base62;
mod bytes;
mod cells;
mod lex64;

pub(crate) use cells::*;

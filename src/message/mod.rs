//! IRC message parsing: wire line to borrowed record to typed message.

mod borrowed;
mod nom_parser;

pub use self::borrowed::MessageRef;

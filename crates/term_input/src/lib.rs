mod keys;
mod raw_mode;
mod reader;

pub use keys::{Key, KeyDecoder};
pub use raw_mode::RawMode;
pub use reader::{ReadOutcome, TtyReader};

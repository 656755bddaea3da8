//! Terminal presentation: the display session and its plumbing.

pub mod countdown;
pub mod error;
pub mod events;
pub mod playback;
pub mod presenter;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod viewport;

pub use error::SessionError;
pub use runtime::run;

//! Playback feature module.
//!
//! Decides, for every keystroke or timer tick, what happens to the word
//! cursor, the rate and the pause flag.
//!
//! # Architecture
//!
//! State, intent and a pure reducer returning the effect to perform:
//! - `state.rs` - Cursor, rate and pause flag
//! - `intent.rs` - Decoded keys, timer expiry, input closed
//! - `reducer.rs` - Dispatch table (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::PlaybackIntent;
pub use reducer::{PlaybackEffect, PlaybackReducer, StopReason};
pub use state::PlaybackState;

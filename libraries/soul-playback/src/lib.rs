//! Soul Player - Playback Order
//!
//! Platform-agnostic playback ordering for the Soul Player web client.
//!
//! This crate provides:
//! - Uniform Fisher-Yates shuffle over a copy of the caller's tracks
//! - Play order with shuffle/unshuffle and repeat modes (Off, All, One)
//!
//! Randomness is always injectable: every shuffling operation has a `_with`
//! form taking any [`rand::Rng`], and a convenience form using the
//! thread-local generator.
//!
//! # Example: Shuffle
//!
//! ```rust
//! use soul_playback::shuffled;
//!
//! let tracks = vec![1, 2, 3, 4, 5];
//! let order = shuffled(&tracks);
//!
//! assert_eq!(tracks, vec![1, 2, 3, 4, 5]);
//! assert_eq!(order.len(), 5);
//! ```
//!
//! # Example: Play Order
//!
//! ```rust
//! use soul_playback::{PlayOrder, RepeatMode};
//!
//! let mut order = PlayOrder::new(vec!["intro", "verse", "outro"]);
//! order.set_repeat(RepeatMode::All);
//!
//! assert_eq!(order.advance(), Some(&"intro"));
//!
//! // The playing track stays current and moves to the front
//! order.shuffle();
//! assert_eq!(order.current(), Some(&"intro"));
//! ```

mod order;
mod shuffle;
pub mod types;

// Public exports
pub use order::PlayOrder;
pub use shuffle::{shuffle_in_place, shuffled, shuffled_with};
pub use types::RepeatMode;

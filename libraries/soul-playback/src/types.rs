//! Core types for playback ordering

use serde::{Deserialize, Serialize};

/// Repeat mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepeatMode {
    /// Stop when the order ends
    #[default]
    Off,

    /// Loop the whole order
    All,

    /// Loop current track only
    One,
}

//! Playback order
//!
//! Keeps tracks in the order they were given and a separate index permutation
//! for the order they play in. Shuffling only rewrites the permutation, so the
//! original order can always be restored.

use crate::shuffle::shuffled_with;
use crate::types::RepeatMode;
use rand::{thread_rng, Rng};
use tracing::debug;

/// Where playback currently is within the order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor {
    /// Nothing played yet
    BeforeStart,
    /// Playing the track at this position of `order`
    At(usize),
    /// Ran off the end with repeat off
    AfterEnd,
}

/// Ordered list of tracks with shuffle and repeat support
///
/// ```text
/// tracks: [A, B, C, D]      (as given, never reordered)
/// order:  [2, 0, 3, 1]      (plays C, A, D, B)
/// cursor: At(1)             (currently A)
/// ```
#[derive(Debug, Clone)]
pub struct PlayOrder<T> {
    tracks: Vec<T>,
    order: Vec<usize>,
    cursor: Cursor,
    shuffled: bool,
    repeat: RepeatMode,
}

impl<T> PlayOrder<T> {
    /// Create an unshuffled order over `tracks` with nothing playing
    pub fn new(tracks: Vec<T>) -> Self {
        let order = (0..tracks.len()).collect();
        Self {
            tracks,
            order,
            cursor: Cursor::BeforeStart,
            shuffled: false,
            repeat: RepeatMode::Off,
        }
    }

    /// Replace all tracks
    ///
    /// Resets to original order with nothing playing. Repeat mode is kept.
    pub fn set_tracks(&mut self, tracks: Vec<T>) {
        self.order = (0..tracks.len()).collect();
        self.tracks = tracks;
        self.cursor = Cursor::BeforeStart;
        self.shuffled = false;
    }

    /// Tracks in their original order
    pub fn tracks(&self) -> &[T] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn is_shuffled(&self) -> bool {
        self.shuffled
    }

    pub fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    pub fn set_repeat(&mut self, mode: RepeatMode) {
        self.repeat = mode;
    }

    /// Currently playing track
    pub fn current(&self) -> Option<&T> {
        match self.cursor {
            Cursor::At(position) => self.tracks.get(self.order[position]),
            Cursor::BeforeStart | Cursor::AfterEnd => None,
        }
    }

    /// Tracks that will play after the current one, in playback order
    ///
    /// Does not account for repeat wrapping.
    pub fn upcoming(&self) -> impl Iterator<Item = &T> + '_ {
        let start = match self.cursor {
            Cursor::BeforeStart => 0,
            Cursor::At(position) => position + 1,
            Cursor::AfterEnd => self.order.len(),
        };
        self.order[start..].iter().map(|&index| &self.tracks[index])
    }

    /// Move to the next track and return it
    ///
    /// - `RepeatMode::One` keeps returning the current track.
    /// - `RepeatMode::All` wraps to the first track of the same order.
    /// - `RepeatMode::Off` returns `None` once the end is passed.
    ///
    /// After running off the end, switching to `All` or `One` restarts at
    /// the first track.
    pub fn advance(&mut self) -> Option<&T> {
        if self.tracks.is_empty() {
            return None;
        }

        let last = self.order.len() - 1;
        self.cursor = match (self.cursor, self.repeat) {
            (Cursor::At(position), RepeatMode::One) => Cursor::At(position),
            (Cursor::BeforeStart, _) => Cursor::At(0),
            (Cursor::At(position), _) if position < last => Cursor::At(position + 1),
            (Cursor::At(_), RepeatMode::All)
            | (Cursor::AfterEnd, RepeatMode::All | RepeatMode::One) => Cursor::At(0),
            (Cursor::At(_) | Cursor::AfterEnd, _) => Cursor::AfterEnd,
        };

        self.current()
    }

    /// Move to the previous track and return it
    ///
    /// Stays on the first track unless repeat-all is on, in which case it
    /// wraps to the last. Before anything has played there is no previous.
    pub fn previous(&mut self) -> Option<&T> {
        if self.tracks.is_empty() {
            return None;
        }

        let last = self.order.len() - 1;
        self.cursor = match self.cursor {
            Cursor::BeforeStart => Cursor::BeforeStart,
            Cursor::AfterEnd => Cursor::At(last),
            Cursor::At(0) if self.repeat == RepeatMode::All => Cursor::At(last),
            Cursor::At(position) => Cursor::At(position.saturating_sub(1)),
        };

        self.current()
    }

    /// Shuffle the playback order using the thread-local RNG
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut thread_rng());
    }

    /// Shuffle the playback order drawing from `rng`
    ///
    /// A playing track moves to the front and keeps playing; everything else
    /// is shuffled behind it.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let all: Vec<usize> = (0..self.tracks.len()).collect();

        match self.cursor {
            Cursor::At(position) => {
                let playing = self.order[position];
                let rest: Vec<usize> = all.into_iter().filter(|&i| i != playing).collect();

                self.order = Vec::with_capacity(self.tracks.len());
                self.order.push(playing);
                self.order.extend(shuffled_with(&rest, rng));
                self.cursor = Cursor::At(0);
            }
            Cursor::BeforeStart | Cursor::AfterEnd => {
                self.order = shuffled_with(&all, rng);
                self.cursor = Cursor::BeforeStart;
            }
        }

        self.shuffled = true;
        debug!(tracks = self.tracks.len(), "Shuffled play order");
    }

    /// Restore the original order, keeping the current track playing
    pub fn unshuffle(&mut self) {
        if let Cursor::At(position) = self.cursor {
            self.cursor = Cursor::At(self.order[position]);
        }
        self.order = (0..self.tracks.len()).collect();
        self.shuffled = false;
        debug!(tracks = self.tracks.len(), "Restored original play order");
    }
}

impl<T> Default for PlayOrder<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

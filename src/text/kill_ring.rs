//! Emacs-style kill ring.
//!
//! A bounded history of killed (cut) text. [`KillRing::kill`] appends and
//! points the rotation index at the newest entry; [`KillRing::yank_pop`]
//! walks the index backwards, wrapping from the oldest entry to the newest.

/// Capacity used when a ring is created with a non-positive size.
pub const DEFAULT_KILL_RING_SIZE: usize = 10;

/// Bounded circular history of killed text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KillRing {
    entries: Vec<String>,
    index: usize,
    max_size: usize,
}

impl Default for KillRing {
    fn default() -> Self {
        Self::new(0)
    }
}

impl KillRing {
    /// Create an empty ring holding at most `max_size` entries.
    ///
    /// A `max_size` of zero or less uses [`DEFAULT_KILL_RING_SIZE`].
    #[must_use]
    pub fn new(max_size: isize) -> Self {
        let max_size = usize::try_from(max_size)
            .ok()
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_KILL_RING_SIZE);
        Self {
            entries: Vec::with_capacity(max_size),
            index: 0,
            max_size,
        }
    }

    /// Record `text`, evicting the oldest entry when full.
    ///
    /// Empty text is ignored.
    #[must_use]
    pub fn kill(&self, text: &str) -> Self {
        if text.is_empty() {
            return self.clone();
        }
        let mut entries = self.entries.clone();
        entries.push(text.to_string());
        if entries.len() > self.max_size {
            let excess = entries.len() - self.max_size;
            entries.drain(..excess);
        }
        Self {
            index: entries.len() - 1,
            entries,
            max_size: self.max_size,
        }
    }

    /// The entry at the rotation index, or `""` if there is none.
    #[must_use]
    pub fn yank(&self) -> &str {
        self.entries.get(self.index).map_or("", String::as_str)
    }

    /// Rotate to the next-older entry, wrapping to the newest.
    #[must_use]
    pub fn yank_pop(&self) -> Self {
        if self.entries.is_empty() {
            return self.clone();
        }
        let index = if self.index == 0 {
            self.entries.len() - 1
        } else {
            self.index - 1
        };
        Self {
            index,
            ..self.clone()
        }
    }

    /// Number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries retained.
    #[must_use]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Current rotation index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Stored entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

//! Per-slot presence of the values in a decoded column.

/// Tracks which slots of a sequence hold a value.
///
/// This enum provides three different storage methods:
/// - `Trivial`: All slots are present
/// - `Nulls`: All slots are absent
/// - `Bytes`: Mixed presence using a byte per slot (1=present, 0=absent)
#[derive(Debug, Clone)]
pub enum Presence {
    /// All values are present.
    Trivial(usize),

    /// All values are absent.
    Nulls(usize),

    /// Presence encoded as byte array, where a byte at position `i` indicates whether
    /// the value at position `i` is present (`1`) or absent (`0`).
    Bytes(Vec<u8>),
}

impl Presence {
    /// Expands a page bitmap into a presence of `len` slots.
    ///
    /// Bit `i` of the bitmap lives in byte `i / 8`, most significant bit first;
    /// a set bit marks a present slot.
    ///
    /// # Panics
    ///
    /// Panics if the bitmap is shorter than `len.div_ceil(8)` bytes.
    pub fn from_bitmap(bitmap: &[u8], len: usize) -> Presence {
        assert!(bitmap.len() >= len.div_ceil(8));
        let mut builder = PresenceBuilder::new();
        for i in 0..len {
            if bitmap[i / 8] & (0x80 >> (i % 8)) != 0 {
                builder.add_non_null();
            } else {
                builder.add_null();
            }
        }
        builder.build()
    }

    /// Returns the number of slots tracked, present or not.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::Trivial(len) => *len,
            Self::Nulls(len) => *len,
            Self::Bytes(presence) => presence.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of absent slots.
    pub fn count_nulls(&self) -> usize {
        match self {
            Self::Trivial(_) => 0,
            Self::Nulls(len) => *len,
            Self::Bytes(presence) => presence.iter().filter(|&&b| b == 0).count(),
        }
    }

    /// Returns the number of present slots.
    pub fn count_non_nulls(&self) -> usize {
        match self {
            Self::Trivial(len) => *len,
            Self::Nulls(_) => 0,
            Self::Bytes(presence) => presence.iter().filter(|&&b| b != 0).count(),
        }
    }

    /// Returns `true` if the slot at `index` is absent.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds for a `Bytes` presence.
    #[inline]
    pub fn is_null(&self, index: usize) -> bool {
        !self.is_valid(index)
    }

    /// Returns `true` if the slot at `index` holds a value.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds for a `Bytes` presence.
    #[inline]
    pub fn is_valid(&self, index: usize) -> bool {
        match self {
            Self::Trivial(_) => true,
            Self::Nulls(_) => false,
            Self::Bytes(presence) => presence[index] != 0,
        }
    }

    /// Pushes an absent slot.
    pub fn push_null(&mut self) {
        match self {
            Presence::Trivial(len) => {
                if *len > 0 {
                    let mut presence = Vec::with_capacity(*len + 1);
                    presence.resize(*len, 1u8);
                    presence.push(0);
                    *self = Presence::Bytes(presence);
                } else {
                    *self = Presence::Nulls(1);
                }
            }
            Presence::Nulls(len) => *len += 1,
            Presence::Bytes(presence) => presence.push(0),
        }
    }

    /// Pushes a present slot.
    pub fn push_non_null(&mut self) {
        match self {
            Presence::Trivial(len) => *len += 1,
            Presence::Nulls(len) => {
                let mut presence = Vec::with_capacity(*len + 1);
                presence.resize(*len, 0u8);
                presence.push(1);
                *self = Presence::Bytes(presence);
            }
            Presence::Bytes(presence) => presence.push(1),
        }
    }
}

impl PartialEq for Presence {
    /// Two presences are equal when they mark the same slots, regardless of
    /// their representation.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Trivial(left), Self::Trivial(right)) => left == right,
            (Self::Nulls(left), Self::Nulls(right)) => left == right,
            (Self::Bytes(left), Self::Bytes(right)) => {
                left.len() == right.len()
                    && left.iter().zip(right).all(|(&l, &r)| (l != 0) == (r != 0))
            }
            _ => {
                self.len() == other.len()
                    && (0..self.len()).all(|i| self.is_valid(i) == other.is_valid(i))
            }
        }
    }
}

impl Default for Presence {
    fn default() -> Self {
        Presence::Trivial(0)
    }
}

/// A builder for the [`Presence`] container.
pub struct PresenceBuilder {
    presence: Presence,
}

impl PresenceBuilder {
    pub fn new() -> Self {
        Self {
            presence: Presence::Trivial(0),
        }
    }

    pub fn add_null(&mut self) {
        self.presence.push_null();
    }

    pub fn add_non_null(&mut self) {
        self.presence.push_non_null();
    }

    /// Consumes this builder and returns the presence.
    pub fn build(self) -> Presence {
        self.presence
    }
}

impl Default for PresenceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! Types that give context to the byte-order codec.

use std::convert::TryFrom;

/// The endianness, or byte order, of fixed-width integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endian {
    /// Big-endian (most-significant-byte first).
    Big,
    /// Little-endian (least-significant-byte first).
    Little,
}

impl Endian {
    /// The byte order of the executing host, detected at runtime.
    ///
    /// Writes `0x1` into a two-byte integer and looks at its first byte in memory: a one there
    /// means the least-significant byte is stored first.
    pub fn native() -> Self {
        let probe: u16 = 0x1;
        if probe.to_ne_bytes()[0] == 1 {
            Self::Little
        } else {
            Self::Big
        }
    }

    /// "Network-endian", an alias for big-endian, the default endianness.
    pub const fn network() -> Self {
        Self::Big
    }

    /// The other byte order.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Big => Self::Little,
            Self::Little => Self::Big,
        }
    }

    /// Returns `true` for [`Endian::Little`].
    pub const fn is_little(self) -> bool {
        matches!(self, Self::Little)
    }
}

impl Default for Endian {
    /// (Network- / Big-endian) The default endianness used by the generic codec entry points.
    fn default() -> Self {
        Self::network()
    }
}

/// The width of a fixed-width integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Width {
    /// 8 bits, one byte.
    W8,
    /// 16 bits, two bytes.
    W16,
    /// 32 bits, four bytes.
    W32,
    /// 64 bits, eight bytes.
    W64,
}

impl Width {
    /// Number of bytes an integer of this width occupies.
    pub const fn bytes(self) -> usize {
        match self {
            Self::W8 => 1,
            Self::W16 => 2,
            Self::W32 => 4,
            Self::W64 => 8,
        }
    }

    /// Number of bits an integer of this width occupies.
    pub const fn bits(self) -> u32 {
        self.bytes() as u32 * 8
    }

    /// Looks up the width whose byte length is `len`.
    pub const fn from_len(len: usize) -> Option<Self> {
        match len {
            1 => Some(Self::W8),
            2 => Some(Self::W16),
            4 => Some(Self::W32),
            8 => Some(Self::W64),
            _ => None,
        }
    }
}

impl From<Width> for usize {
    fn from(width: Width) -> Self {
        width.bytes()
    }
}

impl TryFrom<usize> for Width {
    type Error = usize;

    fn try_from(len: usize) -> Result<Self, Self::Error> {
        Self::from_len(len).ok_or(len)
    }
}

//! Fixed-width integer byte-order codec.
//!
//! [`EndianCodec`] turns 8/16/32/64-bit integers into big- or little-endian byte sequences and
//! back. Byte order is fixed by the caller; no width or type tag is written alongside the bytes.

use crate::ctx::{Endian, Width};
use crate::error::{Error, Result};
use tracing::debug;

/// Identity; a single byte has no order to reverse.
pub const fn byte_swap8(num: u8) -> u8 {
    num
}

/// Reverses the byte order of a 16-bit integer.
pub const fn byte_swap16(num: u16) -> u16 {
    ((num & 0x00ff) << 8) | ((num & 0xff00) >> 8)
}

/// Reverses the byte order of a 32-bit integer.
pub const fn byte_swap32(num: u32) -> u32 {
    ((num & 0x0000_00ff) << 24)
        | ((num & 0x0000_ff00) << 8)
        | ((num & 0x00ff_0000) >> 8)
        | ((num & 0xff00_0000) >> 24)
}

/// Reverses the byte order of a 64-bit integer.
pub const fn byte_swap64(num: u64) -> u64 {
    ((num & 0x0000_0000_0000_00ff) << 56)
        | ((num & 0x0000_0000_0000_ff00) << 40)
        | ((num & 0x0000_0000_00ff_0000) << 24)
        | ((num & 0x0000_0000_ff00_0000) << 8)
        | ((num & 0x0000_00ff_0000_0000) >> 8)
        | ((num & 0x0000_ff00_0000_0000) >> 24)
        | ((num & 0x00ff_0000_0000_0000) >> 40)
        | ((num & 0xff00_0000_0000_0000) >> 56)
}

mod sealed {
    pub trait Sealed {}
}

/// An integer type the codec can transcode.
///
/// Implemented for the eight fixed-width integers. Signed values travel as their two's
/// complement bit pattern.
pub trait EndianInt: Copy + sealed::Sealed {
    /// Width of the integer.
    const WIDTH: Width;

    /// Reverses the byte order of `self`.
    fn byte_swap(self) -> Self;

    /// The bit pattern of `self`, zero-extended to 64 bits.
    fn to_bits(self) -> u64;

    /// Rebuilds the integer from the low `WIDTH` bits of `bits`.
    fn from_bits(bits: u64) -> Self;
}

macro_rules! impl_endian_int {
    ($($t:ty as $u:ty: $width:expr, $swap:ident;)*) => {$(
        impl sealed::Sealed for $t {}

        impl EndianInt for $t {
            const WIDTH: Width = $width;

            fn byte_swap(self) -> Self {
                $swap(self as $u) as $t
            }

            fn to_bits(self) -> u64 {
                u64::from(self as $u)
            }

            fn from_bits(bits: u64) -> Self {
                bits as $u as $t
            }
        }
    )*}
}

impl_endian_int! {
    u8 as u8: Width::W8, byte_swap8;
    u16 as u16: Width::W16, byte_swap16;
    u32 as u32: Width::W32, byte_swap32;
    u64 as u64: Width::W64, byte_swap64;
    i8 as u8: Width::W8, byte_swap8;
    i16 as u16: Width::W16, byte_swap16;
    i32 as u32: Width::W32, byte_swap32;
    i64 as u64: Width::W64, byte_swap64;
}

fn byte_at(bits: u64, index: usize) -> u8 {
    ((bits >> (8 * index)) & 0xff) as u8
}

/// Converts fixed-width integers to and from byte sequences of a chosen byte order.
///
/// The host byte order is detected once, when the codec is built, and every operation consults
/// that cached answer. [`EndianCodec::with_host`] pins the host order instead, which lets the
/// behavior of either kind of machine be exercised anywhere.
///
/// # Example
///
/// ```
/// use dynvar::EndianCodec;
///
/// let codec = EndianCodec::new();
/// let bytes = codec.to_big_endian_bytes(0x0102_0304u32);
/// assert_eq!(bytes.len(), 4);
/// assert_eq!(codec.from_big_endian_bytes::<u32>(&bytes).unwrap(), 0x0102_0304);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndianCodec {
    little_endian: bool,
}

impl EndianCodec {
    /// Creates a codec for the executing host.
    pub fn new() -> Self {
        Self::with_host(Endian::native())
    }

    /// Creates a codec that behaves as if it ran on a host with the given byte order.
    pub fn with_host(host: Endian) -> Self {
        debug!(?host, "endian codec ready");
        Self {
            little_endian: host.is_little(),
        }
    }

    /// The host byte order this codec works against.
    pub fn host(&self) -> Endian {
        if self.little_endian {
            Endian::Little
        } else {
            Endian::Big
        }
    }

    /// Detects, on every call, whether the executing host is little-endian.
    pub fn is_little_endian(&self) -> bool {
        Endian::native().is_little()
    }

    /// Detects, on every call, whether the executing host is big-endian.
    pub fn is_big_endian(&self) -> bool {
        !self.is_little_endian()
    }

    /// Whether the host order cached at construction is little-endian.
    pub fn is_little_endian_from_flag(&self) -> bool {
        self.little_endian
    }

    /// Whether the host order cached at construction is big-endian.
    pub fn is_big_endian_from_flag(&self) -> bool {
        !self.little_endian
    }

    /// Encodes `value` in the given byte order.
    ///
    /// On a little-endian host the value is byte-swapped first. Big-endian output then emits
    /// bytes in ascending shift order (`value & 0xff`, `(value >> 8) & 0xff`, ...), little-endian
    /// output in descending shift order. The result always holds exactly `T::WIDTH` bytes.
    pub fn encode<T: EndianInt>(&self, value: T, order: Endian) -> Vec<u8> {
        let value = if self.little_endian {
            value.byte_swap()
        } else {
            value
        };
        let bits = value.to_bits();
        let len = T::WIDTH.bytes();
        match order {
            Endian::Big => (0..len).map(|index| byte_at(bits, index)).collect(),
            Endian::Little => (0..len).rev().map(|index| byte_at(bits, index)).collect(),
        }
    }

    /// Decodes a byte sequence produced by [`EndianCodec::encode`] with the same order.
    ///
    /// `bytes` must be exactly `T::WIDTH` bytes long.
    pub fn decode<T: EndianInt>(&self, bytes: &[u8], order: Endian) -> Result<T> {
        let expected = T::WIDTH.bytes();
        if bytes.len() != expected {
            debug!(expected, actual = bytes.len(), "rejecting integer of wrong length");
            return Err(Error::LengthMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        let raw = T::from_bits(self.reinterpret(bytes));
        Ok(if self.swaps_on_decode(order) {
            raw.byte_swap()
        } else {
            raw
        })
    }

    /// Decodes an integer from the front of `bytes` and returns it with the unread remainder.
    pub fn read<'a, T: EndianInt>(&self, bytes: &'a [u8], order: Endian) -> Result<(T, &'a [u8])> {
        let expected = T::WIDTH.bytes();
        if bytes.len() < expected {
            debug!(expected, actual = bytes.len(), "integer prefix truncated");
            return Err(Error::Truncated {
                expected,
                actual: bytes.len(),
            });
        }
        let (head, rest) = bytes.split_at(expected);
        Ok((self.decode(head, order)?, rest))
    }

    /// Encodes `value` as big-endian bytes.
    pub fn to_big_endian_bytes<T: EndianInt>(&self, value: T) -> Vec<u8> {
        self.encode(value, Endian::Big)
    }

    /// Encodes `value` as little-endian bytes.
    pub fn to_little_endian_bytes<T: EndianInt>(&self, value: T) -> Vec<u8> {
        self.encode(value, Endian::Little)
    }

    /// Decodes big-endian bytes; `bytes` must hold exactly `T::WIDTH` bytes.
    pub fn from_big_endian_bytes<T: EndianInt>(&self, bytes: &[u8]) -> Result<T> {
        self.decode(bytes, Endian::Big)
    }

    /// Decodes little-endian bytes; `bytes` must hold exactly `T::WIDTH` bytes.
    pub fn from_little_endian_bytes<T: EndianInt>(&self, bytes: &[u8]) -> Result<T> {
        self.decode(bytes, Endian::Little)
    }

    /// Reads a big-endian integer from the front of a longer buffer.
    pub fn read_big_endian<'a, T: EndianInt>(&self, bytes: &'a [u8]) -> Result<(T, &'a [u8])> {
        self.read(bytes, Endian::Big)
    }

    /// Reads a little-endian integer from the front of a longer buffer.
    pub fn read_little_endian<'a, T: EndianInt>(&self, bytes: &'a [u8]) -> Result<(T, &'a [u8])> {
        self.read(bytes, Endian::Little)
    }

    // What copying `bytes` into an integer's memory yields on the host.
    fn reinterpret(&self, bytes: &[u8]) -> u64 {
        let last = bytes.len() - 1;
        bytes.iter().enumerate().fold(0, |acc, (index, &byte)| {
            let position = if self.little_endian {
                index
            } else {
                last - index
            };
            acc | (u64::from(byte) << (8 * position))
        })
    }

    fn swaps_on_decode(&self, order: Endian) -> bool {
        // Big-endian output is the reverse of the host's memory order on either host: swapped
        // then emitted low byte first on little-endian, emitted low byte first unswapped on
        // big-endian.
        order == Endian::Big
    }
}

impl Default for EndianCodec {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn little() -> EndianCodec {
        EndianCodec::with_host(Endian::Little)
    }

    fn big() -> EndianCodec {
        EndianCodec::with_host(Endian::Big)
    }

    #[test]
    fn swap_primitives() {
        assert_eq!(byte_swap8(0xab), 0xab);
        assert_eq!(byte_swap16(0x0102), 0x0201);
        assert_eq!(byte_swap32(0x0102_0304), 0x0403_0201);
        assert_eq!(byte_swap64(0x0102_0304_0506_0708), 0x0807_0605_0403_0201);
        assert_eq!(byte_swap32(byte_swap32(0xdead_beef)), 0xdead_beef);
    }

    #[test]
    fn swap_matches_std() {
        assert_eq!(byte_swap16(0xbeef), 0xbeefu16.swap_bytes());
        assert_eq!(byte_swap64(0x1122_3344_5566_7788), 0x1122_3344_5566_7788u64.swap_bytes());
        assert_eq!((-2i16).byte_swap(), (-2i16).swap_bytes());
        assert_eq!((-2i64).byte_swap(), (-2i64).swap_bytes());
    }

    #[test]
    fn flag_and_live_detection_agree() {
        let codec = EndianCodec::new();
        assert_eq!(codec.is_little_endian(), codec.is_little_endian_from_flag());
        assert_eq!(codec.is_big_endian(), codec.is_big_endian_from_flag());
        assert_ne!(codec.is_little_endian(), codec.is_big_endian());
    }

    #[test]
    fn simulated_host_overrides_flag() {
        assert!(little().is_little_endian_from_flag());
        assert!(big().is_big_endian_from_flag());
        assert_eq!(big().host(), Endian::Big);
    }

    #[test]
    fn big_endian_bytes_on_little_host() {
        let codec = little();
        let bytes = codec.to_big_endian_bytes(0x0102_0304u32);
        assert_eq!(bytes, [0x01, 0x02, 0x03, 0x04]);
        assert_eq!(codec.from_big_endian_bytes::<u32>(&bytes), Ok(0x0102_0304));
    }

    #[test]
    fn big_endian_bytes_on_big_host() {
        let codec = big();
        let bytes = codec.to_big_endian_bytes(0x0102_0304u32);
        assert_eq!(bytes, [0x04, 0x03, 0x02, 0x01]);
        assert_eq!(codec.from_big_endian_bytes::<u32>(&bytes), Ok(0x0102_0304));
    }

    #[test]
    fn little_endian_bytes() {
        assert_eq!(little().to_little_endian_bytes(0xdead_beefu32), [0xef, 0xbe, 0xad, 0xde]);
        assert_eq!(big().to_little_endian_bytes(0xdead_beefu32), [0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn eight_bit_is_identity() {
        for codec in [little(), big()] {
            assert_eq!(codec.to_big_endian_bytes(0x7fu8), [0x7f]);
            assert_eq!(codec.to_little_endian_bytes(0x7fu8), [0x7f]);
            assert_eq!(codec.from_big_endian_bytes::<u8>(&[0x80]), Ok(0x80));
            assert_eq!(codec.from_little_endian_bytes::<i8>(&[0xff]), Ok(-1));
        }
    }

    #[test]
    fn signed_values() {
        for codec in [little(), big()] {
            let bytes = codec.to_big_endian_bytes(-2i16);
            assert_eq!(codec.from_big_endian_bytes::<i16>(&bytes), Ok(-2));
            let bytes = codec.to_little_endian_bytes(i64::MIN);
            assert_eq!(codec.from_little_endian_bytes::<i64>(&bytes), Ok(i64::MIN));
        }
        assert_eq!(little().to_big_endian_bytes(-1i32), [0xff; 4]);
    }

    #[test]
    fn wrong_length_is_rejected() {
        let codec = EndianCodec::new();
        assert_eq!(
            codec.from_big_endian_bytes::<u32>(&[1, 2, 3]),
            Err(Error::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            codec.from_little_endian_bytes::<u16>(&[1, 2, 3]),
            Err(Error::LengthMismatch {
                expected: 2,
                actual: 3
            })
        );
        assert!(codec.from_big_endian_bytes::<u8>(&[]).is_err());
    }

    #[test]
    fn prefix_reads() {
        let codec = little();
        let buffer = [0x00, 0x2a, 0xff, 0x01, 0x02];
        let (value, rest) = codec.read_big_endian::<u16>(&buffer).unwrap();
        assert_eq!(value, 42);
        assert_eq!(rest, &[0xff, 0x01, 0x02]);
        let (value, rest) = codec.read_little_endian::<i8>(rest).unwrap();
        assert_eq!(value, -1);
        assert_eq!(
            codec.read_big_endian::<u32>(rest),
            Err(Error::Truncated {
                expected: 4,
                actual: 2
            })
        );
    }
}

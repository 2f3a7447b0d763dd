//! Coercion of box name values into raw bytes.

use std::borrow::Cow;

/// Values that can be used as a box name.
///
/// Byte inputs pass through unchanged, text is taken as its UTF-8 encoding
/// and integers become their 8-byte big-endian form, which is how apps
/// usually key boxes by number.
pub trait ToBytes {
    /// Returns the raw bytes of this value.
    fn to_bytes(&self) -> Vec<u8>;
}

impl ToBytes for [u8] {
    fn to_bytes(&self) -> Vec<u8> {
        self.to_vec()
    }
}

impl<const N: usize> ToBytes for [u8; N] {
    fn to_bytes(&self) -> Vec<u8> {
        self.to_vec()
    }
}

impl ToBytes for Vec<u8> {
    fn to_bytes(&self) -> Vec<u8> {
        self.clone()
    }
}

impl ToBytes for Cow<'_, [u8]> {
    fn to_bytes(&self) -> Vec<u8> {
        self.to_vec()
    }
}

impl ToBytes for str {
    fn to_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl ToBytes for String {
    fn to_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl ToBytes for u64 {
    fn to_bytes(&self) -> Vec<u8> {
        self.to_be_bytes().to_vec()
    }
}

impl<T: ToBytes + ?Sized> ToBytes for &T {
    fn to_bytes(&self) -> Vec<u8> {
        (**self).to_bytes()
    }
}

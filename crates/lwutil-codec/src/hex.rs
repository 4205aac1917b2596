//! Fixed-width lowercase hexadecimal formatting.
//!
//! Output is zero-padded and most significant nibble first, so `0x156u16`
//! formats as `b"0156"`.

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

#[inline]
const fn nibble_to_ascii(nibble: u32) -> u8 {
    HEX_DIGITS[(nibble & 0x0F) as usize]
}

const fn to_hex<const N: usize>(value: u32) -> [u8; N] {
    let mut out = [0u8; N];
    let mut idx = 0;
    while idx < N {
        let shift = 4 * (N - 1 - idx) as u32;
        out[idx] = nibble_to_ascii(value >> shift);
        idx += 1;
    }
    out
}

/// Format a byte as 2 hex digits.
pub const fn u8_to_hex(value: u8) -> [u8; 2] {
    to_hex::<2>(value as u32)
}

/// Format a `u16` as 4 hex digits.
pub const fn u16_to_hex(value: u16) -> [u8; 4] {
    to_hex::<4>(value as u32)
}

/// Format a `u32` as 8 hex digits.
pub const fn u32_to_hex(value: u32) -> [u8; 8] {
    to_hex::<8>(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u32_digits() {
        assert_eq!(&u32_to_hex(0x1234_5678), b"12345678");
        assert_eq!(&u32_to_hex(0x5678), b"00005678");
        assert_eq!(&u32_to_hex(0xDEAD_BEEF), b"deadbeef");
    }

    #[test]
    fn u16_digits() {
        assert_eq!(&u16_to_hex(0x1256), b"1256");
        assert_eq!(&u16_to_hex(0x156), b"0156");
    }

    #[test]
    fn u8_digits() {
        assert_eq!(&u8_to_hex(0x16), b"16");
        assert_eq!(&u8_to_hex(0x6), b"06");
        assert_eq!(&u8_to_hex(0xFF), b"ff");
    }

    #[test]
    fn matches_std_formatting() {
        for value in [0u32, 1, 0xA, 0xFFFF_FFFF, 0x0BAD_F00D] {
            let formatted = format!("{value:08x}");
            assert_eq!(&u32_to_hex(value), formatted.as_bytes());
        }
    }
}

//! Utility functions and constants for the RESP wire format.

use bytes::BufMut;
use bytes::BytesMut;

/// CRLF line ending
pub const CRLF: &[u8] = b"\r\n";

/// Type markers for RESP2 replies
pub const STATUS: u8 = b'+';
pub const ERROR: u8 = b'-';
pub const INTEGER: u8 = b':';
pub const BULK: u8 = b'$';
pub const MULTI_BULK: u8 = b'*';

/// Nil bulk string, both as a full frame and as the length field after `$`.
pub const NIL_BULK: &[u8] = b"$-1\r\n";
pub const NIL_LENGTH: &[u8] = b"-1\r\n";

/// Smallest possible bulk element, `$-1\r\n`.
pub const MIN_BULK_LEN: usize = NIL_BULK.len();

/// Find the offset of the first CR that is immediately followed by LF.
///
/// A bare CR does not end the line.
#[inline]
pub fn find_crlf(buf: &[u8]) -> Option<usize> {
	memchr::memmem::find(buf, CRLF)
}

/// Read an unsigned decimal field terminated by CRLF.
///
/// Returns the value and the number of bytes consumed including the
/// terminator. An empty field, a non-digit byte, a value that does not fit in
/// `usize`, or a missing terminator all yield `None`.
pub fn parse_length(buf: &[u8]) -> Option<(usize, usize)> {
	let cr = memchr::memchr(b'\r', buf)?;
	if cr == 0 || buf.get(cr + 1) != Some(&b'\n') {
		return None;
	}

	let mut value: usize = 0;
	for &b in &buf[..cr] {
		if !b.is_ascii_digit() {
			return None;
		}
		value = value.checked_mul(10)?.checked_add(usize::from(b - b'0'))?;
	}

	Some((value, cr + CRLF.len()))
}

/// Number of decimal digits in `n`, without formatting it.
#[inline]
pub const fn digit_count(mut n: u64) -> usize {
	let mut count = 1;
	while n >= 10 {
		n /= 10;
		count += 1;
	}
	count
}

/// Append `n` in decimal.
#[inline]
pub fn put_decimal(buf: &mut BytesMut, n: u64) {
	buf.put_slice(itoa::Buffer::new().format(n).as_bytes());
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[test]
	fn test_find_crlf() {
		assert_eq!(find_crlf(b"hello\r\n"), Some(5));
		assert_eq!(find_crlf(b"hello"), None);
		assert_eq!(find_crlf(b"\r\n"), Some(0));
		assert_eq!(find_crlf(b"a\rb\r\n"), Some(3));
		assert_eq!(find_crlf(b"a\r\r\n"), Some(2));
		assert_eq!(find_crlf(b"abc\r"), None);
	}

	#[rstest]
	#[case(b"0\r\n", Some((0, 3)))]
	#[case(b"6\r\nfoobar\r\n", Some((6, 3)))]
	#[case(b"1024\r\n", Some((1024, 6)))]
	#[case(b"\r\n", None)]
	#[case(b"12", None)]
	#[case(b"12\r", None)]
	#[case(b"12\rx", None)]
	#[case(b"1a\r\n", None)]
	#[case(b"-1\r\n", None)]
	#[case(b"+1\r\n", None)]
	#[case(b" 1\r\n", None)]
	#[case(b"99999999999999999999999\r\n", None)]
	fn test_parse_length(#[case] input: &[u8], #[case] expected: Option<(usize, usize)>) {
		assert_eq!(parse_length(input), expected);
	}

	#[rstest]
	#[case(0, 1)]
	#[case(9, 1)]
	#[case(10, 2)]
	#[case(99, 2)]
	#[case(100, 3)]
	#[case(1_000_000, 7)]
	#[case(u64::MAX, 20)]
	fn test_digit_count(#[case] n: u64, #[case] expected: usize) {
		assert_eq!(digit_count(n), expected);
	}

	#[test]
	fn test_put_decimal_matches_digit_count() {
		for n in [0u64, 1, 7, 10, 42, 999, 1000, 65_535, u32::MAX as u64, u64::MAX] {
			let mut buf = BytesMut::new();
			put_decimal(&mut buf, n);
			assert_eq!(&buf[..], n.to_string().as_bytes());
			assert_eq!(buf.len(), digit_count(n));
		}
	}
}

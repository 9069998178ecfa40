//! Command encoder: a list of arguments as a RESP array of bulk strings.
//!
//! Encoding runs in two passes over the arguments. The first computes the
//! exact frame size from digit counts alone, the second writes into a buffer
//! reserved for exactly that size.

use bytes::BufMut;
use bytes::Bytes;
use bytes::BytesMut;
use log::trace;

use crate::argument::Argument;
use crate::error::EncodeError;
use crate::utils::*;

/// Trait for encoding a command.
pub trait CommandEncoder {
	/// Append the encoded command to `buf`.
	fn encode_to(&self, buf: &mut BytesMut) -> Result<(), EncodeError>;

	/// Encode the command into a freshly allocated buffer.
	fn encode(&self) -> Result<Bytes, EncodeError> {
		let mut buf = BytesMut::new();
		self.encode_to(&mut buf)?;
		Ok(buf.freeze())
	}
}

impl CommandEncoder for [Argument] {
	fn encode_to(&self, buf: &mut BytesMut) -> Result<(), EncodeError> {
		encode_command_to(self, buf)
	}
}

/// Encode `args` as a command, e.g. `*1\r\n$4\r\nPING\r\n`.
pub fn encode_command(args: &[Argument]) -> Result<Bytes, EncodeError> {
	args.encode()
}

/// Exact number of bytes `args` encode to.
pub fn encoded_len(args: &[Argument]) -> Result<usize, EncodeError> {
	if args.is_empty() {
		return Err(EncodeError::EmptyCommand);
	}

	let mut total = 1 + digit_count(args.len() as u64) + CRLF.len();
	for (i, arg) in args.iter().enumerate() {
		total += with_payload(arg, i, |payload| match payload {
			Some(bytes) => {
				let len = bytes.len();
				1 + digit_count(len as u64) + CRLF.len() + len + CRLF.len()
			}
			None => NIL_BULK.len(),
		})?;
	}

	Ok(total)
}

/// Append the encoding of `args` to `buf`, reserving exactly the space it
/// needs up front.
pub fn encode_command_to(args: &[Argument], buf: &mut BytesMut) -> Result<(), EncodeError> {
	let total = encoded_len(args)?;
	buf.reserve(total);
	let start = buf.len();

	buf.put_u8(MULTI_BULK);
	put_decimal(buf, args.len() as u64);
	buf.put_slice(CRLF);

	for (i, arg) in args.iter().enumerate() {
		with_payload(arg, i, |payload| match payload {
			Some(bytes) => {
				buf.put_u8(BULK);
				put_decimal(buf, bytes.len() as u64);
				buf.put_slice(CRLF);
				buf.put_slice(bytes);
				buf.put_slice(CRLF);
			}
			None => buf.put_slice(NIL_BULK),
		})?;
	}

	let written = buf.len() - start;
	assert_eq!(
		written, total,
		"encoded command length does not match its precomputed size"
	);
	trace!("Encoded {} argument command into {} bytes", args.len(), total);
	Ok(())
}

/// Call `f` with the bulk payload of one argument, or `None` for nil.
///
/// `index` is 0-based; errors report it 1-based.
fn with_payload<R>(
	arg: &Argument,
	index: usize,
	f: impl FnOnce(Option<&[u8]>) -> R,
) -> Result<R, EncodeError> {
	let mut integer = itoa::Buffer::new();
	let mut float = ryu::Buffer::new();

	let payload = match arg {
		Argument::Text(b) => Some(&b[..]),
		Argument::Boolean(true) => Some(b"1".as_slice()),
		Argument::Boolean(false) => Some(b"0".as_slice()),
		Argument::Integer(i) => Some(integer.format(*i).as_bytes()),
		Argument::Number(d) if !d.is_finite() => {
			return Err(EncodeError::UnsupportedArgument { index: index + 1 });
		}
		Argument::Number(d) => Some(match as_integer(*d) {
			Some(i) => integer.format(i).as_bytes(),
			None => float.format_finite(*d).as_bytes(),
		}),
		Argument::Nil => None,
	};

	Ok(f(payload))
}

/// The `i64` a finite number equals, if it is integral and in range.
///
/// `i64::MIN as f64` is exact; `i64::MAX as f64` rounds up to 2^63 and is
/// out of range.
fn as_integer(d: f64) -> Option<i64> {
	if d.fract() == 0.0 && d >= i64::MIN as f64 && d < i64::MAX as f64 {
		Some(d as i64)
	} else {
		None
	}
}

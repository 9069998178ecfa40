//! Decoded reply values and their kind codes.

use std::fmt;

use bytes::Bytes;

/// A reply decoded from a Redis-compatible server.
///
/// Payloads are `Bytes` views into the buffer that was decoded, so no reply
/// data is copied. A `None` bulk payload is the nil sentinel (`$-1\r\n`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Reply {
	/// Status: `+OK\r\n`
	Status(Bytes),

	/// Error: `-ERR message\r\n`
	Error(Bytes),

	/// Integer: `:1000\r\n`
	///
	/// `text` is the line as sent; `value` is its decimal interpretation and
	/// is `None` when the text is not a valid `i64`.
	Integer { text: Bytes, value: Option<i64> },

	/// Bulk: `$6\r\nfoobar\r\n`, or nil as `$-1\r\n`
	Bulk(Option<Bytes>),

	/// Multi bulk: `*2\r\n$3\r\nfoo\r\n$-1\r\n`
	MultiBulk(Vec<Option<Bytes>>),
}

impl Reply {
	pub fn kind(&self) -> ReplyKind {
		match self {
			Reply::Status(_) => ReplyKind::Status,
			Reply::Error(_) => ReplyKind::Error,
			Reply::Integer { .. } => ReplyKind::Integer,
			Reply::Bulk(_) => ReplyKind::Bulk,
			Reply::MultiBulk(_) => ReplyKind::MultiBulk,
		}
	}

	/// Check if the reply is an error reply
	pub fn is_error(&self) -> bool {
		matches!(self, Reply::Error(_))
	}

	/// Check if the reply is the nil bulk sentinel
	pub fn is_nil(&self) -> bool {
		matches!(self, Reply::Bulk(None))
	}

	/// Try to convert a status, error or non-nil bulk payload to a string slice
	pub fn as_str(&self) -> Option<&str> {
		self.as_bytes().and_then(|b| std::str::from_utf8(b).ok())
	}

	/// Raw payload of a status, error, integer or non-nil bulk reply
	pub fn as_bytes(&self) -> Option<&Bytes> {
		match self {
			Reply::Status(b) | Reply::Error(b) | Reply::Bulk(Some(b)) => Some(b),
			Reply::Integer { text, .. } => Some(text),
			_ => None,
		}
	}

	/// Numeric value of an integer reply
	pub fn as_integer(&self) -> Option<i64> {
		match self {
			Reply::Integer { value, .. } => *value,
			_ => None,
		}
	}

	pub fn as_multi_bulk(&self) -> Option<&[Option<Bytes>]> {
		match self {
			Reply::MultiBulk(elements) => Some(elements),
			_ => None,
		}
	}

	pub fn into_multi_bulk(self) -> Option<Vec<Option<Bytes>>> {
		match self {
			Reply::MultiBulk(elements) => Some(elements),
			_ => None,
		}
	}

	/// Convert to String with lossy UTF-8 conversion
	pub fn to_string_lossy(&self) -> Option<String> {
		self.as_bytes().map(|b| String::from_utf8_lossy(b).into_owned())
	}
}

/// Numeric reply kind codes handed to callers alongside a decode result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ReplyKind {
	BadReply = 0,
	Status = 1,
	Error = 2,
	Integer = 3,
	Bulk = 4,
	MultiBulk = 5,
}

impl ReplyKind {
	pub const ALL: [ReplyKind; 6] = [
		ReplyKind::BadReply,
		ReplyKind::Status,
		ReplyKind::Error,
		ReplyKind::Integer,
		ReplyKind::Bulk,
		ReplyKind::MultiBulk,
	];

	#[inline]
	pub const fn code(self) -> u8 {
		self as u8
	}

	pub const fn from_code(code: u8) -> Option<Self> {
		match code {
			0 => Some(ReplyKind::BadReply),
			1 => Some(ReplyKind::Status),
			2 => Some(ReplyKind::Error),
			3 => Some(ReplyKind::Integer),
			4 => Some(ReplyKind::Bulk),
			5 => Some(ReplyKind::MultiBulk),
			_ => None,
		}
	}

	pub const fn name(self) -> &'static str {
		match self {
			ReplyKind::BadReply => "BAD_REPLY",
			ReplyKind::Status => "STATUS_REPLY",
			ReplyKind::Error => "ERROR_REPLY",
			ReplyKind::Integer => "INTEGER_REPLY",
			ReplyKind::Bulk => "BULK_REPLY",
			ReplyKind::MultiBulk => "MULTI_BULK_REPLY",
		}
	}
}

impl fmt::Display for ReplyKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl From<ReplyKind> for u8 {
	fn from(kind: ReplyKind) -> Self {
		kind.code()
	}
}

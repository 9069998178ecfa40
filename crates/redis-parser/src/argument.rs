//! Command arguments accepted by the encoder.

use bytes::Bytes;

/// One argument of a command.
///
/// Every variant is sent as a bulk string: text as-is, numbers in decimal,
/// booleans as `1`/`0`, and `Nil` as the nil bulk `$-1\r\n`.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
	Text(Bytes),
	Integer(i64),
	/// Must be finite. Integral values are sent without a fraction.
	Number(f64),
	Boolean(bool),
	Nil,
}

/// The nil sentinel argument.
pub const NIL: Argument = Argument::Nil;

impl Argument {
	pub fn is_nil(&self) -> bool {
		matches!(self, Argument::Nil)
	}

	/// Create a text argument
	pub fn text(s: impl Into<Bytes>) -> Self {
		Argument::Text(s.into())
	}
}

impl From<&str> for Argument {
	fn from(s: &str) -> Self {
		Argument::Text(Bytes::copy_from_slice(s.as_bytes()))
	}
}

impl From<String> for Argument {
	fn from(s: String) -> Self {
		Argument::Text(Bytes::from(s))
	}
}

impl From<&[u8]> for Argument {
	fn from(b: &[u8]) -> Self {
		Argument::Text(Bytes::copy_from_slice(b))
	}
}

impl From<Vec<u8>> for Argument {
	fn from(v: Vec<u8>) -> Self {
		Argument::Text(Bytes::from(v))
	}
}

impl From<Bytes> for Argument {
	fn from(b: Bytes) -> Self {
		Argument::Text(b)
	}
}

impl From<i64> for Argument {
	fn from(i: i64) -> Self {
		Argument::Integer(i)
	}
}

impl From<i32> for Argument {
	fn from(i: i32) -> Self {
		Argument::Integer(i64::from(i))
	}
}

impl From<u32> for Argument {
	fn from(i: u32) -> Self {
		Argument::Integer(i64::from(i))
	}
}

impl From<f64> for Argument {
	fn from(d: f64) -> Self {
		Argument::Number(d)
	}
}

impl From<bool> for Argument {
	fn from(b: bool) -> Self {
		Argument::Boolean(b)
	}
}

impl<T: Into<Argument>> From<Option<T>> for Argument {
	fn from(o: Option<T>) -> Self {
		match o {
			Some(v) => v.into(),
			None => Argument::Nil,
		}
	}
}

//! Error types for reply decoding and command encoding.

use thiserror::Error;

use crate::reply::ReplyKind;

/// A reply that could not be decoded.
///
/// Every decode failure collapses into this type. The variant only records
/// which reply kind was being decoded; its message is the whole diagnostic.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadReply {
	/// Empty buffer or unknown leading byte
	#[error("empty reply")]
	Empty,

	#[error("bad status reply")]
	Status,

	#[error("bad error reply")]
	Error,

	#[error("bad integer reply")]
	Integer,

	#[error("bad bulk reply")]
	Bulk,

	#[error("bad multi bulk reply")]
	MultiBulk,
}

impl BadReply {
	/// The human-readable diagnostic.
	pub fn message(&self) -> &'static str {
		match self {
			BadReply::Empty => "empty reply",
			BadReply::Status => "bad status reply",
			BadReply::Error => "bad error reply",
			BadReply::Integer => "bad integer reply",
			BadReply::Bulk => "bad bulk reply",
			BadReply::MultiBulk => "bad multi bulk reply",
		}
	}

	/// Always [`ReplyKind::BadReply`].
	pub fn kind(&self) -> ReplyKind {
		ReplyKind::BadReply
	}
}

/// Errors that can occur while encoding a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
	/// A command needs at least one argument
	#[error("empty command: at least one argument is required")]
	EmptyCommand,

	/// The argument at `index` (1-based) cannot be rendered as a bulk string
	#[error("unsupported argument at position {index}")]
	UnsupportedArgument { index: usize },
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case(BadReply::Empty)]
	#[case(BadReply::Status)]
	#[case(BadReply::Error)]
	#[case(BadReply::Integer)]
	#[case(BadReply::Bulk)]
	#[case(BadReply::MultiBulk)]
	fn test_message_matches_display(#[case] err: BadReply) {
		assert_eq!(err.to_string(), err.message());
		assert_eq!(err.kind(), ReplyKind::BadReply);
	}

	#[test]
	fn test_encode_error_display() {
		assert_eq!(
			EncodeError::UnsupportedArgument { index: 3 }.to_string(),
			"unsupported argument at position 3"
		);
		assert!(EncodeError::EmptyCommand.to_string().starts_with("empty command"));
	}
}

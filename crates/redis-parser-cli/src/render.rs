//! Human-readable rendering of replies and encoded commands.

use std::io;
use std::io::Write;

use redis_parser::Reply;
use redis_parser::ReplyKind;

use crate::config::OutputFormat;

/// Write `bytes` in the chosen format, without a trailing newline.
pub fn write_bytes(out: &mut impl Write, bytes: &[u8], format: OutputFormat) -> io::Result<()> {
	match format {
		OutputFormat::Escaped => write!(out, "\"{}\"", bytes.escape_ascii()),
		OutputFormat::Hex => {
			for (i, b) in bytes.iter().enumerate() {
				if i > 0 {
					out.write_all(b" ")?;
				}
				write!(out, "{:02x}", b)?;
			}
			Ok(())
		}
		OutputFormat::Raw => out.write_all(bytes),
	}
}

/// Header line naming the reply kind and its numeric code.
pub fn write_kind(out: &mut impl Write, kind: ReplyKind) -> io::Result<()> {
	writeln!(out, "kind: {} {}", kind.code(), kind)
}

/// Write a decoded reply, one line per value, in the style of redis-cli.
pub fn write_reply(out: &mut impl Write, reply: &Reply, format: OutputFormat) -> io::Result<()> {
	match reply {
		Reply::Status(text) => {
			write_bytes(out, text, format)?;
		}
		Reply::Error(text) => {
			out.write_all(b"(error) ")?;
			write_bytes(out, text, format)?;
		}
		Reply::Integer { text, value } => {
			out.write_all(b"(integer) ")?;
			match value {
				Some(n) => write!(out, "{}", n)?,
				None => write_bytes(out, text, format)?,
			}
		}
		Reply::Bulk(payload) => write_element(out, payload.as_deref(), format)?,
		Reply::MultiBulk(elements) if elements.is_empty() => {
			out.write_all(b"(empty array)")?;
		}
		Reply::MultiBulk(elements) => {
			let width = elements.len().to_string().len();
			for (i, element) in elements.iter().enumerate() {
				if i > 0 {
					out.write_all(b"\n")?;
				}
				write!(out, "{:>width$}) ", i + 1, width = width)?;
				write_element(out, element.as_deref(), format)?;
			}
		}
	}
	out.write_all(b"\n")
}

fn write_element(out: &mut impl Write, payload: Option<&[u8]>, format: OutputFormat) -> io::Result<()> {
	match payload {
		Some(bytes) => write_bytes(out, bytes, format),
		None => out.write_all(b"(nil)"),
	}
}

//! Decoder for a single RESP2 reply.
//!
//! The buffer is classified by its first byte and handed to one of three
//! sub-parsers: single line (status, error and integer), bulk, and multi
//! bulk. Sub-parsers work on offsets into the caller's buffer, check every
//! declared length against what is left before slicing, and return `None`
//! on malformed input. The dispatcher turns `None` into the [`BadReply`]
//! matching the reply kind.

use std::ops::Range;

use bytes::Bytes;
use log::debug;

use crate::error::BadReply;
use crate::reply::Reply;
use crate::reply::ReplyKind;
use crate::utils::*;

/// Decode one reply from the start of `buf`.
///
/// Bytes after the first complete reply are ignored. Payloads in the result
/// share memory with `buf`.
pub fn decode(buf: &Bytes) -> Result<Reply, BadReply> {
	let result = decode_reply(buf);
	if let Err(e) = &result {
		debug!("Failed to decode {} byte reply: {}", buf.len(), e);
	}
	result
}

/// Decode from a borrowed slice. The slice is copied once so the reply can
/// own its payloads.
pub fn decode_slice(buf: &[u8]) -> Result<Reply, BadReply> {
	decode(&Bytes::copy_from_slice(buf))
}

/// Decode and also return the numeric kind of the outcome.
///
/// Failures report [`ReplyKind::BadReply`].
pub fn decode_with_kind(buf: &Bytes) -> (Result<Reply, BadReply>, ReplyKind) {
	let result = decode(buf);
	let kind = match &result {
		Ok(reply) => reply.kind(),
		Err(e) => e.kind(),
	};
	(result, kind)
}

fn decode_reply(buf: &Bytes) -> Result<Reply, BadReply> {
	let Some(&marker) = buf.first() else {
		return Err(BadReply::Empty);
	};

	match marker {
		STATUS => single_line(buf, 1)
			.map(|line| Reply::Status(buf.slice(line)))
			.ok_or(BadReply::Status),
		ERROR => single_line(buf, 1)
			.map(|line| Reply::Error(buf.slice(line)))
			.ok_or(BadReply::Error),
		INTEGER => {
			let line = single_line(buf, 1).ok_or(BadReply::Integer)?;
			let text = buf.slice(line);
			let value = parse_integer(&text);
			Ok(Reply::Integer { text, value })
		}
		BULK => bulk(buf, 1)
			.map(|(payload, _)| Reply::Bulk(payload))
			.ok_or(BadReply::Bulk),
		MULTI_BULK => multi_bulk(buf, 1)
			.map(Reply::MultiBulk)
			.ok_or(BadReply::MultiBulk),
		_ => Err(BadReply::Empty),
	}
}

/// Range of the line starting at `pos`, without its CRLF.
fn single_line(buf: &[u8], pos: usize) -> Option<Range<usize>> {
	let len = find_crlf(buf.get(pos..)?)?;
	Some(pos..pos + len)
}

/// Parse a bulk string whose length field starts at `pos` (just past `$`).
///
/// Returns the payload (`None` for nil) and the offset after the frame.
fn bulk(buf: &Bytes, pos: usize) -> Option<(Option<Bytes>, usize)> {
	let rest = buf.get(pos..)?;

	// Only `-1` marks nil; the nil frame ends with the length field.
	if rest.first() == Some(&b'-') {
		return rest
			.starts_with(NIL_LENGTH)
			.then_some((None, pos + NIL_LENGTH.len()));
	}

	let (len, used) = parse_length(rest)?;
	let start = pos + used;
	let end = start.checked_add(len)?;
	if buf.get(end..end.checked_add(CRLF.len())?)? != CRLF {
		return None;
	}

	Some((Some(buf.slice(start..end)), end + CRLF.len()))
}

/// Parse a multi bulk whose count field starts at `pos` (just past `*`).
///
/// Every element must itself be a bulk string. Any bad element discards the
/// whole reply.
fn multi_bulk(buf: &Bytes, pos: usize) -> Option<Vec<Option<Bytes>>> {
	let (count, used) = parse_length(buf.get(pos..)?)?;
	let mut pos = pos + used;

	// A declared count can't be trusted for the allocation size.
	let mut elements = Vec::with_capacity(count.min((buf.len() - pos) / MIN_BULK_LEN));
	for _ in 0..count {
		if *buf.get(pos)? != BULK {
			return None;
		}
		let (element, next) = bulk(buf, pos + 1)?;
		elements.push(element);
		pos = next;
	}

	Some(elements)
}

#[inline]
fn parse_integer(text: &[u8]) -> Option<i64> {
	std::str::from_utf8(text).ok()?.parse().ok()
}

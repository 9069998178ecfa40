//! Integration tests for the reply decoder

use bytes::Bytes;
use redis_parser::BadReply;
use redis_parser::Reply;
use redis_parser::ReplyKind;
use rstest::rstest;

fn bulk_frame(payload: &[u8]) -> Vec<u8> {
	let mut frame = format!("${}\r\n", payload.len()).into_bytes();
	frame.extend_from_slice(payload);
	frame.extend_from_slice(b"\r\n");
	frame
}

#[rstest]
#[case("OK")]
#[case("PONG")]
#[case("")]
#[case("with spaces and: punctuation")]
fn test_status_and_error_lines(#[case] text: &str) {
	let status = redis_parser::decode_slice(format!("+{text}\r\n").as_bytes()).unwrap();
	assert_eq!(status, Reply::Status(Bytes::copy_from_slice(text.as_bytes())));

	let error = redis_parser::decode_slice(format!("-{text}\r\n").as_bytes()).unwrap();
	assert_eq!(error, Reply::Error(Bytes::copy_from_slice(text.as_bytes())));
	assert_eq!(error.kind(), ReplyKind::Error);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(-1)]
#[case(1000)]
#[case(i64::MAX)]
#[case(i64::MIN)]
fn test_integer_value(#[case] n: i64) {
	let reply = redis_parser::decode_slice(format!(":{n}\r\n").as_bytes()).unwrap();
	assert_eq!(reply.as_integer(), Some(n));
	assert_eq!(reply.as_str(), Some(n.to_string().as_str()));
}

#[test]
fn test_integer_out_of_range_keeps_text() {
	let reply = redis_parser::decode_slice(b":99999999999999999999\r\n").unwrap();
	assert_eq!(reply.kind(), ReplyKind::Integer);
	assert_eq!(reply.as_integer(), None);
	assert_eq!(reply.as_str(), Some("99999999999999999999"));
}

#[rstest]
#[case(b"".as_slice())]
#[case(b"hello".as_slice())]
#[case(b"\r\n".as_slice())]
#[case(b"a\rb\nc\r\nd".as_slice())]
#[case(b"\x00\x00\x00".as_slice())]
#[case(b"$3\r\nfoo\r\n".as_slice())]
fn test_bulk_is_binary_safe(#[case] payload: &[u8]) {
	let reply = redis_parser::decode_slice(&bulk_frame(payload)).unwrap();
	assert_eq!(reply, Reply::Bulk(Some(Bytes::copy_from_slice(payload))));
}

#[test]
fn test_bulk_all_byte_values() {
	let payload: Vec<u8> = (0..=255).collect();
	let reply = redis_parser::decode_slice(&bulk_frame(&payload)).unwrap();
	assert_eq!(reply.as_bytes().map(|b| &b[..]), Some(&payload[..]));
}

#[test]
fn test_nil_bulk() {
	let (result, kind) = redis_parser::decode_with_kind(&Bytes::from_static(b"$-1\r\n"));
	let reply = result.unwrap();
	assert!(reply.is_nil());
	assert_eq!(kind, ReplyKind::Bulk);
	assert_eq!(kind.code(), 4);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(3)]
#[case(64)]
fn test_multi_bulk_preserves_order(#[case] k: usize) {
	let payloads: Vec<Vec<u8>> = (0..k).map(|i| format!("item-{i}").into_bytes()).collect();
	let mut frame = format!("*{k}\r\n").into_bytes();
	for p in &payloads {
		frame.extend_from_slice(&bulk_frame(p));
	}

	let elements = redis_parser::decode_slice(&frame)
		.unwrap()
		.into_multi_bulk()
		.unwrap();
	assert_eq!(elements.len(), k);
	for (element, payload) in elements.iter().zip(&payloads) {
		assert_eq!(element.as_deref(), Some(&payload[..]));
	}
}

#[test]
fn test_multi_bulk_with_nil_members() {
	let reply =
		redis_parser::decode_slice(b"*4\r\n$-1\r\n$1\r\na\r\n$-1\r\n$2\r\n\r\n\r\n").unwrap();
	assert_eq!(
		reply,
		Reply::MultiBulk(vec![
			None,
			Some(Bytes::from_static(b"a")),
			None,
			Some(Bytes::from_static(b"\r\n")),
		])
	);
}

#[test]
fn test_trailing_bytes_are_ignored() {
	let reply = redis_parser::decode_slice(b"+OK\r\n+NEXT\r\n").unwrap();
	assert_eq!(reply.as_str(), Some("OK"));

	let reply = redis_parser::decode_slice(b"$1\r\na\r\n:1\r\n").unwrap();
	assert_eq!(reply.as_str(), Some("a"));
}

#[rstest]
#[case::empty_buffer(b"".as_slice(), "empty reply")]
#[case::unknown_marker(b"!3\r\nERR\r\n".as_slice(), "empty reply")]
#[case::inline_text(b"PING\r\n".as_slice(), "empty reply")]
#[case::unterminated_status(b"+OK".as_slice(), "bad status reply")]
#[case::lf_only_status(b"+OK\n".as_slice(), "bad status reply")]
#[case::unterminated_error(b"-ERR".as_slice(), "bad error reply")]
#[case::unterminated_integer(b":10".as_slice(), "bad integer reply")]
#[case::truncated_length(b"$1".as_slice(), "bad bulk reply")]
#[case::length_without_lf(b"$1\r".as_slice(), "bad bulk reply")]
#[case::empty_length(b"$\r\n\r\n".as_slice(), "bad bulk reply")]
#[case::non_digit_length(b"$1x\r\nab\r\n".as_slice(), "bad bulk reply")]
#[case::length_past_end(b"$10\r\nshort\r\n".as_slice(), "bad bulk reply")]
#[case::missing_terminator(b"$3\r\nfoo".as_slice(), "bad bulk reply")]
#[case::short_terminator(b"$3\r\nfoo\r".as_slice(), "bad bulk reply")]
#[case::wrong_terminator(b"$3\r\nfooXY".as_slice(), "bad bulk reply")]
#[case::overflowing_length(b"$184467440737095516160\r\nx\r\n".as_slice(), "bad bulk reply")]
#[case::negative_length(b"$-5\r\n".as_slice(), "bad bulk reply")]
#[case::padded_nil(b"$-01\r\n".as_slice(), "bad bulk reply")]
#[case::negative_count(b"*-1\r\n".as_slice(), "bad multi bulk reply")]
#[case::truncated_count(b"*2".as_slice(), "bad multi bulk reply")]
#[case::missing_element(b"*2\r\n$1\r\na\r\n".as_slice(), "bad multi bulk reply")]
#[case::bad_element(b"*2\r\n$1\r\na\r\n$5\r\nab\r\n".as_slice(), "bad multi bulk reply")]
#[case::nested_array(b"*1\r\n*1\r\n$1\r\na\r\n".as_slice(), "bad multi bulk reply")]
#[case::status_element(b"*1\r\n+OK\r\n".as_slice(), "bad multi bulk reply")]
fn test_malformed_replies(#[case] input: &[u8], #[case] message: &str) {
	let (result, kind) = redis_parser::decode_with_kind(&Bytes::copy_from_slice(input));
	let err = result.unwrap_err();
	assert_eq!(err.to_string(), message);
	assert_eq!(err.message(), message);
	assert_eq!(kind, ReplyKind::BadReply);
	assert_eq!(kind.code(), 0);
}

#[test]
fn test_failed_multi_bulk_returns_nothing() {
	let result = redis_parser::decode_slice(b"*3\r\n$1\r\na\r\n$1\r\nb\r\n$1\r\n");
	assert_eq!(result, Err(BadReply::MultiBulk));
}

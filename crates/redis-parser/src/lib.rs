//! # redis-parser - RESP reply decoder and command encoder
//!
//! A small, allocation-conscious codec for the Redis Serialization Protocol
//! (RESP2) as seen from a client:
//!
//! - [`decode`] turns one raw reply from a Redis-compatible server into a
//!   [`Reply`] (status, error, integer, bulk or multi bulk), or a
//!   [`BadReply`] naming the reply kind that was malformed.
//! - [`encode_command`] turns an ordered list of [`Argument`]s into the
//!   `*<argc>\r\n$<len>\r\n<arg>\r\n...` frame a server expects, sizing the
//!   output exactly once.
//!
//! Both are pure functions: no I/O, no shared state, safe to call from any
//! thread.
//!
//! ## Example
//!
//! ```rust
//! use bytes::Bytes;
//! use redis_parser::Argument;
//! use redis_parser::Reply;
//! use redis_parser::ReplyKind;
//!
//! let cmd = redis_parser::encode_command(&["SET".into(), "key".into(), 42i64.into()]).unwrap();
//! assert_eq!(&cmd[..], b"*3\r\n$3\r\nSET\r\n$3\r\nkey\r\n$2\r\n42\r\n");
//!
//! let reply = redis_parser::decode(&Bytes::from_static(b"$-1\r\n")).unwrap();
//! assert!(reply.is_nil());
//! assert_eq!(reply.kind(), ReplyKind::Bulk);
//!
//! let nil = redis_parser::encode_command(&["GET".into(), Argument::Nil]).unwrap();
//! assert_eq!(&nil[..], b"*2\r\n$3\r\nGET\r\n$-1\r\n");
//!
//! let reply = redis_parser::decode_slice(b"*2\r\n$3\r\nfoo\r\n$-1\r\n").unwrap();
//! assert_eq!(reply, Reply::MultiBulk(vec![Some(Bytes::from("foo")), None]));
//! ```

mod argument;
mod decoder;
mod encoder;
mod error;
mod reply;
mod utils;

pub use argument::Argument;
pub use argument::NIL;
pub use decoder::decode;
pub use decoder::decode_slice;
pub use decoder::decode_with_kind;
pub use encoder::CommandEncoder;
pub use encoder::encode_command;
pub use encoder::encode_command_to;
pub use encoder::encoded_len;
pub use error::BadReply;
pub use error::EncodeError;
pub use reply::Reply;
pub use reply::ReplyKind;

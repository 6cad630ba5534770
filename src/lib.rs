//! Decoder for octet-counted syslog streams, as sent by Heroku's logplex drains
//! ([RFC 6587](https://tools.ietf.org/html/rfc6587#section-3.4.1) framing).
//!
//! Each frame is a decimal length, a space, then exactly that many bytes holding a
//! `<PRI>` priority, five space-terminated fields (timestamp, host, app, procid, msgid) and a
//! free-form body. Fields are kept as raw bytes; nothing is validated during decoding.
//!
//! # Example
//!
//! ```
//! use logplex_syslog::Decoder;
//!
//! let body = &b"67 <190>2016-02-21T01:19:11+00:00 host app web.1 - State changed to up"[..];
//!
//! for msg in Decoder::new(body) {
//!     let msg = msg.unwrap();
//!     assert_eq!(msg.appname, b"app");
//!     assert_eq!(msg.unix_timestamp().unwrap(), 1456017551);
//! }
//! ```
//!
//! Loops driving `Decoder::decode` directly should stop on `DecodeErr::EndOfStream`, which
//! marks a clean end of input rather than a bad message.

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

mod cursor;
mod decoder;
mod error;
pub mod facility;
mod frame;
pub mod message;
pub mod severity;

pub use cursor::FieldCursor;
pub use decoder::{parse_frame, Decoder};
pub use error::{DecodeErr, ParseErr, TimestampErr};
pub use frame::{DecoderConfig, FrameReader};
pub use message::SyslogMessage;

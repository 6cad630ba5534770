use std::io;

use thiserror::Error;

/// Malformed input within one frame: a bad or oversized length prefix, or content that does
/// not split into a priority and five fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErr {
    #[error("invalid length prefix")]
    InvalidLength,
    #[error("frame length {len} exceeds maximum of {max}")]
    FrameTooLarge { len: usize, max: usize },
    #[error("expected token {0:?}")]
    ExpectedTokenErr(char),
    #[error("unterminated priority")]
    UnterminatedPriority,
    #[error("invalid priority")]
    InvalidPriority,
    #[error("unterminated field: {0}")]
    UnterminatedField(&'static str),
}

/// Errors produced by a single decode call against a stream.
#[derive(Debug, Error)]
pub enum DecodeErr {
    /// The source ended cleanly between frames. This is the normal way a stream finishes.
    #[error("end of stream")]
    EndOfStream,
    #[error("malformed frame: {0}")]
    Format(#[from] ParseErr),
    /// The source ended inside a frame. The stream position is undefined afterwards.
    #[error("truncated frame: expected {expected} bytes, got {actual}")]
    TruncatedFrame { expected: usize, actual: usize },
    /// The source ended partway through a length prefix.
    #[error("truncated length prefix after {read} bytes")]
    TruncatedLength { read: usize },
    #[error("I/O error reading frame: {0}")]
    Io(#[from] io::Error),
}

impl DecodeErr {
    /// Whether the stream may still be read after this error.
    ///
    /// Content errors are detected only after the whole frame has been consumed, so the next
    /// frame starts where this one ended. A bad or oversized length prefix leaves the source
    /// somewhere inside the frame.
    pub fn is_recoverable(&self) -> bool {
        match self {
            DecodeErr::Format(ParseErr::InvalidLength)
            | DecodeErr::Format(ParseErr::FrameTooLarge { .. }) => false,
            DecodeErr::Format(_) => true,
            _ => false,
        }
    }
}

/// Errors from interpreting a message's timestamp field.
#[derive(Debug, Error)]
pub enum TimestampErr {
    #[error("timestamp is not valid UTF-8: {0}")]
    NotUtf8(#[from] std::str::Utf8Error),
    #[error("timestamp is not RFC 3339: {0}")]
    Invalid(#[from] time::error::Parse),
    /// Parsed, but used a lowercase or space date/time separator or a lowercase `z` offset.
    #[error("timestamp must use an uppercase 'T' separator and 'Z' offset")]
    Delimiter,
}

//! Reading octet-counted frames (RFC 6587 section 3.4.1) from a byte stream.

use std::io::{BufRead, Read};

use tracing::trace;

use crate::error::{DecodeErr, ParseErr};

const LENGTH_DELIMITER: u8 = b' ';
// digits in u64::MAX
const MAX_LENGTH_DIGITS: usize = 20;
const INITIAL_FRAME_CAPACITY: usize = 8 * 1024;

/// Limits applied while reading frames.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Largest declared frame length accepted. `None` accepts any length that fits in `usize`.
    pub max_frame_len: Option<usize>,
}

impl DecoderConfig {
    pub fn with_max_frame_len(max_frame_len: usize) -> Self {
        DecoderConfig {
            max_frame_len: Some(max_frame_len),
        }
    }
}

/// Reads one length-prefixed frame at a time from any `BufRead`.
///
/// The reader keeps no state between frames beyond the position of the underlying source.
#[derive(Debug)]
pub struct FrameReader<R> {
    inner: R,
    config: DecoderConfig,
}

impl<R: BufRead> FrameReader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_config(inner, DecoderConfig::default())
    }

    pub fn with_config(inner: R, config: DecoderConfig) -> Self {
        FrameReader { inner, config }
    }

    /// Read the next frame's content.
    ///
    /// Returns `DecodeErr::EndOfStream` only when the source is exhausted before any byte of a
    /// new frame. Running out of data inside the length prefix is `DecodeErr::TruncatedLength`,
    /// and inside the content `DecodeErr::TruncatedFrame`.
    pub fn read_frame(&mut self) -> Result<Vec<u8>, DecodeErr> {
        let len = self.read_length()?;
        if let Some(max) = self.config.max_frame_len {
            if len > max {
                return Err(ParseErr::FrameTooLarge { len, max }.into());
            }
        }

        // the prefix is untrusted, so don't reserve all of it up front
        let mut frame = Vec::with_capacity(len.min(INITIAL_FRAME_CAPACITY));
        let actual = (&mut self.inner).take(len as u64).read_to_end(&mut frame)?;
        if actual < len {
            return Err(DecodeErr::TruncatedFrame {
                expected: len,
                actual,
            });
        }
        trace!(len, "read frame");
        Ok(frame)
    }

    fn read_length(&mut self) -> Result<usize, DecodeErr> {
        let mut prefix = Vec::with_capacity(MAX_LENGTH_DIGITS + 1);
        let n = (&mut self.inner)
            .take(MAX_LENGTH_DIGITS as u64 + 1)
            .read_until(LENGTH_DELIMITER, &mut prefix)?;
        if n == 0 {
            trace!("end of stream");
            return Err(DecodeErr::EndOfStream);
        }
        match prefix.pop() {
            Some(LENGTH_DELIMITER) => parse_length(&prefix),
            // ran out of digits budget without seeing the delimiter
            Some(_) if n > MAX_LENGTH_DIGITS => Err(ParseErr::InvalidLength.into()),
            _ => Err(DecodeErr::TruncatedLength { read: n }),
        }
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }
}

fn parse_length(digits: &[u8]) -> Result<usize, DecodeErr> {
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return Err(ParseErr::InvalidLength.into());
    }
    std::str::from_utf8(digits)
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| ParseErr::InvalidLength.into())
}

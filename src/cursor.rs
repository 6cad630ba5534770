//! Left-to-right field extraction over the content of one frame.

use crate::error::ParseErr;

const FIELD_DELIMITER: u8 = b' ';

/// A consuming view over one frame's bytes.
///
/// Every read advances `pos` past what it returned; nothing is ever re-read.
#[derive(Debug)]
pub struct FieldCursor {
    buf: Vec<u8>,
    pos: usize,
}

impl FieldCursor {
    pub fn new(buf: Vec<u8>) -> Self {
        FieldCursor { buf, pos: 0 }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> &[u8] {
        &self.buf[self.pos..]
    }

    fn advance(&mut self, n: usize) {
        debug_assert!(self.pos + n <= self.buf.len(), "cursor advanced past frame end");
        self.pos += n;
    }

    /// Read a leading `<digits>` priority and advance past the closing `>`.
    pub fn read_priority(&mut self) -> Result<i32, ParseErr> {
        let rest = self.remaining();
        if rest.first() != Some(&b'<') {
            return Err(ParseErr::ExpectedTokenErr('<'));
        }
        let close = rest
            .iter()
            .position(|&b| b == b'>')
            .ok_or(ParseErr::UnterminatedPriority)?;
        let pri = parse_decimal(&rest[1..close]).ok_or(ParseErr::InvalidPriority)?;
        self.advance(close + 1);
        Ok(pri)
    }

    /// Read bytes up to the next space, advancing past the space.
    ///
    /// `name` is only used to label the error when no space remains.
    pub fn read_field(&mut self, name: &'static str) -> Result<&[u8], ParseErr> {
        let start = self.pos;
        let len = self.buf[start..]
            .iter()
            .position(|&b| b == FIELD_DELIMITER)
            .ok_or(ParseErr::UnterminatedField(name))?;
        self.advance(len + 1);
        Ok(&self.buf[start..start + len])
    }

    /// Consume the cursor, returning everything not yet read.
    pub fn into_rest(mut self) -> Vec<u8> {
        self.buf.split_off(self.pos)
    }
}

fn parse_decimal(digits: &[u8]) -> Option<i32> {
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    // all-ASCII was checked above
    std::str::from_utf8(digits).ok()?.parse().ok()
}

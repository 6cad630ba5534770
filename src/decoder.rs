use std::io::BufRead;

use tracing::debug;

use crate::cursor::FieldCursor;
use crate::error::{DecodeErr, ParseErr};
use crate::frame::{DecoderConfig, FrameReader};
use crate::message::SyslogMessage;

/// Parse the content of one frame (everything after the length prefix) into a `SyslogMessage`
///
/// # Example
///
/// ```
/// use logplex_syslog::parse_frame;
///
/// let msg = parse_frame(b"<190>2016-02-21T01:19:11+00:00 host app web.1 - hello".to_vec()).unwrap();
///
/// assert_eq!(msg.priority, 190);
/// assert_eq!(msg.procid, b"web.1");
/// assert_eq!(msg.msg, b"hello");
/// ```
pub fn parse_frame(frame: Vec<u8>) -> Result<SyslogMessage, ParseErr> {
    let mut cur = FieldCursor::new(frame);
    let priority = cur.read_priority()?;
    let timestamp = cur.read_field("timestamp")?.to_vec();
    let hostname = cur.read_field("hostname")?.to_vec();
    let appname = cur.read_field("appname")?.to_vec();
    let procid = cur.read_field("procid")?.to_vec();
    let msgid = cur.read_field("msgid")?.to_vec();
    Ok(SyslogMessage {
        priority,
        timestamp,
        hostname,
        appname,
        procid,
        msgid,
        msg: cur.into_rest(),
    })
}

/// Decodes `SyslogMessage`s from a logplex stream.
///
/// # Example
///
/// ```
/// use logplex_syslog::{DecodeErr, Decoder};
///
/// let input = &b"55 <34>2023-01-01T00:00:00Z host app 123 msgid hello world"[..];
/// let mut decoder = Decoder::new(input);
///
/// let msg = decoder.decode().unwrap();
/// assert_eq!(msg.hostname, b"host");
/// assert!(matches!(decoder.decode(), Err(DecodeErr::EndOfStream)));
/// ```
#[derive(Debug)]
pub struct Decoder<R> {
    frames: FrameReader<R>,
    done: bool,
}

impl<R: BufRead> Decoder<R> {
    pub fn new(inner: R) -> Self {
        Self::with_config(inner, DecoderConfig::default())
    }

    pub fn with_config(inner: R, config: DecoderConfig) -> Self {
        Decoder {
            frames: FrameReader::with_config(inner, config),
            done: false,
        }
    }

    /// Read and parse the next message.
    ///
    /// `DecodeErr::EndOfStream` means the stream finished cleanly. After an error for which
    /// `DecodeErr::is_recoverable` holds, the next call starts at the following frame; after any
    /// other error the stream is unusable.
    pub fn decode(&mut self) -> Result<SyslogMessage, DecodeErr> {
        let frame = self.frames.read_frame()?;
        parse_frame(frame).map_err(|e| {
            debug!(error = %e, "malformed frame");
            DecodeErr::from(e)
        })
    }

    pub fn get_ref(&self) -> &R {
        self.frames.get_ref()
    }

    pub fn get_mut(&mut self) -> &mut R {
        self.frames.get_mut()
    }

    pub fn into_inner(self) -> R {
        self.frames.into_inner()
    }
}

/// Yields messages until the stream ends, stopping early at the first error that leaves the
/// stream position undefined. Recoverable errors are yielded and iteration continues.
impl<R: BufRead> Iterator for Decoder<R> {
    type Item = Result<SyslogMessage, DecodeErr>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.decode() {
            Err(DecodeErr::EndOfStream) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = !e.is_recoverable();
                Some(Err(e))
            }
            ok => Some(ok),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::{parse_frame, Decoder};
    use crate::error::{DecodeErr, ParseErr};
    use crate::message::SyslogMessage;

    fn frame(content: &[u8]) -> Vec<u8> {
        let mut out = format!("{} ", content.len()).into_bytes();
        out.extend_from_slice(content);
        out
    }

    fn encode(msg: &SyslogMessage) -> Vec<u8> {
        let mut content = format!("<{}>", msg.priority).into_bytes();
        for field in &[
            &msg.timestamp,
            &msg.hostname,
            &msg.appname,
            &msg.procid,
            &msg.msgid,
        ] {
            content.extend_from_slice(field);
            content.push(b' ');
        }
        content.extend_from_slice(&msg.msg);
        frame(&content)
    }

    fn decoder(input: Vec<u8>) -> Decoder<Cursor<Vec<u8>>> {
        Decoder::new(Cursor::new(input))
    }

    #[test]
    fn test_simple() {
        let input = frame(b"<34>2023-01-01T00:00:00Z host app 123 msgid hello world");
        assert_eq!(&input[..3], b"55 ");
        let msg = decoder(input).decode().expect("Should decode message");
        assert_eq!(msg.priority, 34);
        assert_eq!(msg.timestamp, b"2023-01-01T00:00:00Z");
        assert_eq!(msg.hostname, b"host");
        assert_eq!(msg.appname, b"app");
        assert_eq!(msg.procid, b"123");
        assert_eq!(msg.msgid, b"msgid");
        assert_eq!(msg.msg, b"hello world");
        assert_eq!(msg.unix_timestamp().unwrap(), 1672531200);
    }

    #[test]
    fn test_heroku_router() {
        let content: &[u8] = br#"<158>2012-12-10T22:05:02.081427+00:00 d.7bd2c5e3-e5ab-4a55-a8b5-6d1d3a1bb2f4 heroku router - at=info method=GET path="/" host=example.herokuapp.com fwd="10.0.0.1" status=200 bytes=1024"#;
        let msg = decoder(frame(content)).decode().expect("Should decode router line");
        assert_eq!(msg.hostname, b"d.7bd2c5e3-e5ab-4a55-a8b5-6d1d3a1bb2f4");
        assert_eq!(msg.appname, b"heroku");
        assert_eq!(msg.procid, b"router");
        assert_eq!(msg.msgid, b"-");
        assert!(msg.msg.starts_with(b"at=info "));
        assert!(msg.msg.ends_with(b"bytes=1024"));
    }

    #[test]
    fn test_empty_stream() {
        assert_matches!(decoder(Vec::new()).decode(), Err(DecodeErr::EndOfStream));
    }

    #[test]
    fn test_zero_length_frame() {
        assert_matches!(
            decoder(b"0 ".to_vec()).decode(),
            Err(DecodeErr::Format(ParseErr::ExpectedTokenErr('<')))
        );
    }

    #[test]
    fn test_truncated() {
        let mut input = frame(b"<34>2023-01-01T00:00:00Z host app 123 msgid hello world");
        input.truncate(input.len() - 5);
        assert_matches!(
            decoder(input).decode(),
            Err(DecodeErr::TruncatedFrame {
                expected: 55,
                actual: 50
            })
        );
    }

    #[test]
    fn test_missing_priority_close() {
        assert_matches!(
            decoder(frame(b"<34 2023-01-01T00:00:00Z host app 123 msgid hi")).decode(),
            Err(DecodeErr::Format(ParseErr::UnterminatedPriority))
        );
    }

    #[test]
    fn test_too_few_fields() {
        assert_matches!(
            decoder(frame(b"<34>2023-01-01T00:00:00Z host app 123")).decode(),
            Err(DecodeErr::Format(ParseErr::UnterminatedField("procid")))
        );
        assert_matches!(
            parse_frame(b"<34>".to_vec()),
            Err(ParseErr::UnterminatedField("timestamp"))
        );
    }

    #[test]
    fn test_empty_body() {
        let msg = parse_frame(b"<1>- - - - - ".to_vec()).expect("Should parse empty body");
        assert_eq!(msg.msgid, b"-");
        assert!(msg.msg.is_empty());
    }

    #[test]
    fn test_body_kept_verbatim() {
        let msg = parse_frame(b"<1>t h a p i  padded body \n".to_vec()).unwrap();
        assert_eq!(msg.msg, b" padded body \n");
    }

    #[test]
    fn test_embedded_space_shifts_fields() {
        // there is no quoting; a space always ends a field
        let msg = parse_frame(b"<1>t h a p my id body".to_vec()).unwrap();
        assert_eq!(msg.msgid, b"my");
        assert_eq!(msg.msg, b"id body");
    }

    #[test]
    fn test_bad_timestamp_still_decodes() {
        let msg = parse_frame(b"<13>yesterday host app 1 - body".to_vec())
            .expect("Decode should not look at the timestamp");
        assert!(msg.time().is_err());
    }

    #[test]
    fn test_round_trip() {
        let messages = vec![
            SyslogMessage {
                priority: 190,
                timestamp: b"2016-02-21T01:19:11+00:00".to_vec(),
                hostname: b"batch6sj".to_vec(),
                appname: b"app".to_vec(),
                procid: b"web.2".to_vec(),
                msgid: b"-".to_vec(),
                msg: b"multiple words and trailing space ".to_vec(),
            },
            SyslogMessage {
                priority: 0,
                timestamp: b"not-a-time".to_vec(),
                hostname: Vec::new(),
                appname: b"\xff\xfe".to_vec(),
                procid: b"0".to_vec(),
                msgid: b"id".to_vec(),
                msg: b"\x00binary\x00".to_vec(),
            },
            SyslogMessage::default(),
        ];
        let mut input = Vec::new();
        for msg in &messages {
            input.extend(encode(msg));
        }
        let decoded = decoder(input)
            .collect::<Result<Vec<_>, _>>()
            .expect("Should decode all messages");
        assert_eq!(decoded, messages);
    }

    #[test]
    fn test_consecutive_messages_independent() {
        let mut input = frame(b"<1>t h a p i first");
        input.extend(frame(b"<2>t h a p i second"));
        let mut d = decoder(input);
        let mut first = d.decode().unwrap();
        let second = d.decode().unwrap();
        first.msg.clear();
        first.msg.extend_from_slice(b"changed");
        assert_eq!(second.msg, b"second");
        assert_eq!(second.priority, 2);
        assert_matches!(d.decode(), Err(DecodeErr::EndOfStream));
    }

    #[test]
    fn test_recovers_after_format_error() {
        let mut input = frame(b"garbage");
        input.extend(frame(b"<5>t h a p i ok"));
        let results: Vec<_> = decoder(input).collect();
        assert_eq!(results.len(), 2);
        assert_matches!(
            results[0],
            Err(DecodeErr::Format(ParseErr::ExpectedTokenErr('<')))
        );
        assert_eq!(results[1].as_ref().unwrap().msg, b"ok");
    }

    #[test]
    fn test_source_access() {
        let mut input = frame(b"<5>t h a p i one");
        input.extend(frame(b"<5>t h a p i two"));
        let mut d = decoder(input);
        assert_eq!(d.decode().unwrap().msg, b"one");
        assert_eq!(d.get_ref().position(), 19);
        d.get_mut().set_position(0);
        assert_eq!(d.decode().unwrap().msg, b"one");
        assert_eq!(d.into_inner().position(), 19);
    }

    #[test]
    fn test_iteration_stops_after_bad_length() {
        let mut input = b"x5 <5>t h a p i ok".to_vec();
        input.extend(frame(b"<5>t h a p i ok"));
        let mut d = decoder(input);
        assert_matches!(
            d.next(),
            Some(Err(DecodeErr::Format(ParseErr::InvalidLength)))
        );
        assert!(d.next().is_none());
    }

    #[test]
    fn test_iteration_stops_after_truncation() {
        let mut input = frame(b"<5>t h a p i ok");
        input.extend_from_slice(b"100 <5>t h");
        let mut d = decoder(input);
        assert!(d.next().unwrap().is_ok());
        assert_matches!(d.next(), Some(Err(DecodeErr::TruncatedFrame { .. })));
        assert!(d.next().is_none());
    }
}

//! In-memory representation of a single decoded syslog message.

use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

#[cfg(feature = "serde-serialize")]
use serde::Serializer;
#[cfg(feature = "serde-serialize")]
use serde_derive::Serialize;

use crate::error::TimestampErr;
use crate::facility::SyslogFacility;
use crate::severity::SyslogSeverity;

/// One message from a logplex stream.
///
/// Every field except the priority holds the raw bytes from the frame; nothing is validated or
/// decoded. Use `time()` to interpret the timestamp.
#[cfg_attr(feature = "serde-serialize", derive(Serialize))]
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct SyslogMessage {
    pub priority: i32,
    #[cfg_attr(feature = "serde-serialize", serde(serialize_with = "lossy_str"))]
    pub timestamp: Vec<u8>,
    #[cfg_attr(feature = "serde-serialize", serde(serialize_with = "lossy_str"))]
    pub hostname: Vec<u8>,
    #[cfg_attr(feature = "serde-serialize", serde(serialize_with = "lossy_str"))]
    pub appname: Vec<u8>,
    #[cfg_attr(feature = "serde-serialize", serde(serialize_with = "lossy_str"))]
    pub procid: Vec<u8>,
    #[cfg_attr(feature = "serde-serialize", serde(serialize_with = "lossy_str"))]
    pub msgid: Vec<u8>,
    #[cfg_attr(feature = "serde-serialize", serde(serialize_with = "lossy_str"))]
    pub msg: Vec<u8>,
}

#[cfg(feature = "serde-serialize")]
fn lossy_str<S: Serializer>(bytes: &[u8], s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&String::from_utf8_lossy(bytes))
}

impl SyslogMessage {
    /// Parse the timestamp field as an RFC 3339 date-time.
    pub fn time(&self) -> Result<OffsetDateTime, TimestampErr> {
        let s = std::str::from_utf8(&self.timestamp)?;
        let t = OffsetDateTime::parse(s, &Rfc3339)?;
        // Rfc3339 parsing also accepts ' ' or 't' as the separator and 'z' as the offset
        if self.timestamp.get(10) != Some(&b'T') || self.timestamp.last() == Some(&b'z') {
            return Err(TimestampErr::Delimiter);
        }
        Ok(t)
    }

    /// Seconds since the Unix epoch of the timestamp field.
    pub fn unix_timestamp(&self) -> Result<i64, TimestampErr> {
        self.time().map(|t| t.unix_timestamp())
    }

    /// The facility encoded in the priority, if it is a known one.
    pub fn facility(&self) -> Option<SyslogFacility> {
        if self.priority < 0 {
            return None;
        }
        SyslogFacility::from_int(self.priority >> 3)
    }

    /// The severity encoded in the priority.
    pub fn severity(&self) -> Option<SyslogSeverity> {
        if self.priority < 0 {
            return None;
        }
        SyslogSeverity::from_int(self.priority & 0x7)
    }
}

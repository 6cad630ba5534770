use std::convert::TryFrom;
use std::fmt;

/// Syslog facilities, the upper bits of a message priority.
///
/// Taken from RFC 5424; names are from Linux.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum SyslogFacility {
    LOG_KERN = 0,
    LOG_USER = 1,
    LOG_MAIL = 2,
    LOG_DAEMON = 3,
    LOG_AUTH = 4,
    LOG_SYSLOG = 5,
    LOG_LPR = 6,
    LOG_NEWS = 7,
    LOG_UUCP = 8,
    LOG_CRON = 9,
    LOG_AUTHPRIV = 10,
    LOG_FTP = 11,
    LOG_NTP = 12,
    LOG_AUDIT = 13,
    LOG_ALERT = 14,
    LOG_CLOCKD = 15,
    LOG_LOCAL0 = 16,
    LOG_LOCAL1 = 17,
    LOG_LOCAL2 = 18,
    LOG_LOCAL3 = 19,
    LOG_LOCAL4 = 20,
    LOG_LOCAL5 = 21,
    LOG_LOCAL6 = 22,
    LOG_LOCAL7 = 23,
}

const ALL: [SyslogFacility; 24] = [
    SyslogFacility::LOG_KERN,
    SyslogFacility::LOG_USER,
    SyslogFacility::LOG_MAIL,
    SyslogFacility::LOG_DAEMON,
    SyslogFacility::LOG_AUTH,
    SyslogFacility::LOG_SYSLOG,
    SyslogFacility::LOG_LPR,
    SyslogFacility::LOG_NEWS,
    SyslogFacility::LOG_UUCP,
    SyslogFacility::LOG_CRON,
    SyslogFacility::LOG_AUTHPRIV,
    SyslogFacility::LOG_FTP,
    SyslogFacility::LOG_NTP,
    SyslogFacility::LOG_AUDIT,
    SyslogFacility::LOG_ALERT,
    SyslogFacility::LOG_CLOCKD,
    SyslogFacility::LOG_LOCAL0,
    SyslogFacility::LOG_LOCAL1,
    SyslogFacility::LOG_LOCAL2,
    SyslogFacility::LOG_LOCAL3,
    SyslogFacility::LOG_LOCAL4,
    SyslogFacility::LOG_LOCAL5,
    SyslogFacility::LOG_LOCAL6,
    SyslogFacility::LOG_LOCAL7,
];

impl SyslogFacility {
    /// Convert the facility part of a priority (`pri >> 3`) into a `SyslogFacility`.
    pub fn from_int(i: i32) -> Option<SyslogFacility> {
        usize::try_from(i).ok().and_then(|i| ALL.get(i)).copied()
    }

    /// Lowercase name as used by syslog.conf.
    pub fn as_str(self) -> &'static str {
        match self {
            SyslogFacility::LOG_KERN => "kern",
            SyslogFacility::LOG_USER => "user",
            SyslogFacility::LOG_MAIL => "mail",
            SyslogFacility::LOG_DAEMON => "daemon",
            SyslogFacility::LOG_AUTH => "auth",
            SyslogFacility::LOG_SYSLOG => "syslog",
            SyslogFacility::LOG_LPR => "lpr",
            SyslogFacility::LOG_NEWS => "news",
            SyslogFacility::LOG_UUCP => "uucp",
            SyslogFacility::LOG_CRON => "cron",
            SyslogFacility::LOG_AUTHPRIV => "authpriv",
            SyslogFacility::LOG_FTP => "ftp",
            SyslogFacility::LOG_NTP => "ntp",
            SyslogFacility::LOG_AUDIT => "audit",
            SyslogFacility::LOG_ALERT => "alert",
            SyslogFacility::LOG_CLOCKD => "clockd",
            SyslogFacility::LOG_LOCAL0 => "local0",
            SyslogFacility::LOG_LOCAL1 => "local1",
            SyslogFacility::LOG_LOCAL2 => "local2",
            SyslogFacility::LOG_LOCAL3 => "local3",
            SyslogFacility::LOG_LOCAL4 => "local4",
            SyslogFacility::LOG_LOCAL5 => "local5",
            SyslogFacility::LOG_LOCAL6 => "local6",
            SyslogFacility::LOG_LOCAL7 => "local7",
        }
    }
}

impl fmt::Display for SyslogFacility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

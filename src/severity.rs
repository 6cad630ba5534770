use std::fmt;

/// Syslog severities, the low three bits of a message priority.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(non_camel_case_types)]
pub enum SyslogSeverity {
    SEV_EMERG = 0,
    SEV_ALERT = 1,
    SEV_CRIT = 2,
    SEV_ERR = 3,
    SEV_WARNING = 4,
    SEV_NOTICE = 5,
    SEV_INFO = 6,
    SEV_DEBUG = 7,
}

impl SyslogSeverity {
    /// Convert the severity part of a priority (`pri & 7`) into a `SyslogSeverity`.
    pub fn from_int(i: i32) -> Option<SyslogSeverity> {
        let sev = match i {
            0 => SyslogSeverity::SEV_EMERG,
            1 => SyslogSeverity::SEV_ALERT,
            2 => SyslogSeverity::SEV_CRIT,
            3 => SyslogSeverity::SEV_ERR,
            4 => SyslogSeverity::SEV_WARNING,
            5 => SyslogSeverity::SEV_NOTICE,
            6 => SyslogSeverity::SEV_INFO,
            7 => SyslogSeverity::SEV_DEBUG,
            _ => return None,
        };
        Some(sev)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SyslogSeverity::SEV_EMERG => "emerg",
            SyslogSeverity::SEV_ALERT => "alert",
            SyslogSeverity::SEV_CRIT => "crit",
            SyslogSeverity::SEV_ERR => "err",
            SyslogSeverity::SEV_WARNING => "warning",
            SyslogSeverity::SEV_NOTICE => "notice",
            SyslogSeverity::SEV_INFO => "info",
            SyslogSeverity::SEV_DEBUG => "debug",
        }
    }
}

impl fmt::Display for SyslogSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

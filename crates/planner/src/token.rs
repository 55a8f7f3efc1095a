use crate::error::{PlanError, Result};
use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;

/// Opaque pagination cursor: the time of the last record served and the
/// owner it was served to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageToken {
    pub time: DateTime<Utc>,
    pub uid: String,
}

impl PageToken {
    pub fn new(time: DateTime<Utc>, uid: impl Into<String>) -> Self {
        PageToken {
            time,
            uid: uid.into(),
        }
    }

    pub fn encode(&self) -> String {
        let raw = format!(
            "{},{}",
            self.time.to_rfc3339_opts(SecondsFormat::Nanos, true),
            self.uid
        );
        STANDARD.encode(raw)
    }

    pub fn decode(token: &str) -> Result<Self> {
        let bytes = STANDARD
            .decode(token)
            .map_err(|e| PlanError::InvalidPageToken(e.to_string()))?;
        let raw = String::from_utf8(bytes).map_err(|e| PlanError::InvalidPageToken(e.to_string()))?;

        let (time, uid) = raw
            .split_once(',')
            .ok_or_else(|| PlanError::InvalidPageToken("missing separator".to_string()))?;
        let time = DateTime::parse_from_rfc3339(time)
            .map_err(|e| PlanError::InvalidPageToken(e.to_string()))?
            .with_timezone(&Utc);

        Ok(PageToken::new(time, uid))
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

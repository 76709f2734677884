// Watermark filter accepted by the list endpoint.
//
// An absent or empty `date` lists everything. Anything else must parse as a timestamp.

use crate::shared::core::primitives::{Timestamp, TimestampParseError, parse_timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdatedAfter(pub Option<Timestamp>);

impl UpdatedAfter {
    pub fn from_query(date: Option<&str>) -> Result<Self, TimestampParseError> {
        match date.map(str::trim) {
            None | Some("") => Ok(Self(None)),
            Some(raw) => parse_timestamp(raw).map(|value| Self(Some(value))),
        }
    }
}

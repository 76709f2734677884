// Outcome of the pure auction deciders and the rules they share.

use crate::modules::auctions::core::auction::Auction;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("{0} must not be blank")]
    Blank(&'static str),

    #[error("{0} must not be negative")]
    Negative(&'static str),

    #[error("year must be positive")]
    InvalidYear,

    #[error("auction end must be in the future")]
    AuctionEndInPast,
}

#[derive(Debug)]
pub enum Decision {
    Accepted { auction: Auction },
    Rejected { reason: DecideError },
}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), DecideError> {
    if value.trim().is_empty() {
        return Err(DecideError::Blank(field));
    }
    Ok(())
}

pub(crate) fn require_non_negative(field: &'static str, value: i32) -> Result<(), DecideError> {
    if value < 0 {
        return Err(DecideError::Negative(field));
    }
    Ok(())
}

pub(crate) fn require_year(year: i32) -> Result<(), DecideError> {
    if year <= 0 {
        return Err(DecideError::InvalidYear);
    }
    Ok(())
}

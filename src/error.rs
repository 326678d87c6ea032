use crate::block::BlockId;
use crate::date_range::DateRange;
use crate::reservation::ReservationId;
use crate::room::RoomId;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Invalid date range: {start} is after {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Invalid date '{0}', expected DD-MM-YYYY")]
    InvalidDate(String),

    #[error("A stay must cover at least one night, got {range}")]
    EmptyStay { range: DateRange },

    #[error("Room {room} is already reserved for {range}")]
    RoomUnavailable { room: RoomId, range: DateRange },

    #[error("No room available for {range}")]
    NoAvailableRoom { range: DateRange },

    #[error("Nightly rate must be positive")]
    InvalidRate,

    #[error("A block holds between 1 and {max} rooms, {requested} requested")]
    InvalidBlockSize { requested: usize, max: usize },

    #[error("Unknown block {0}")]
    UnknownBlock(BlockId),

    #[error("Unknown reservation {0}")]
    UnknownReservation(ReservationId),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for BookingError {
    fn from(e: std::io::Error) -> Self {
        BookingError::Config(e.to_string())
    }
}

impl From<serde_json::Error> for BookingError {
    fn from(e: serde_json::Error) -> Self {
        BookingError::Config(e.to_string())
    }
}

use thiserror::Error;

use crate::domain::date_range::DateRange;
use crate::domain::utils::id::{ReservationId, RoomNumber};

#[derive(Debug, Error)]
pub enum Error {
    #[error("File not found or could not be read: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse room configuration JSON: {0}")]
    DeserializationError(#[from] serde_json::Error),

    #[error("Failed to write report: {0}")]
    ReportError(#[from] csv::Error),

    #[error("Failed to build reservation registry: {0}")]
    ModelConstructionError(String),

    #[error("Invalid date: {0}")]
    InvalidDateError(String),

    #[error("Invalid number of guests: {0}")]
    InvalidGuestCountError(String),

    #[error("Invalid guest name: {0}")]
    InvalidGuestNameError(String),

    #[error("Invalid room number: {0}")]
    InvalidRoomNumberError(String),

    #[error("Room {0} was not found")]
    RoomNotFound(RoomNumber),

    #[error("Room {room} is not available for {range}")]
    RoomUnavailable { room: RoomNumber, range: DateRange },

    #[error("Reservation {0} was not found")]
    ReservationNotFound(ReservationId),
}

pub type Result<T> = std::result::Result<T, Error>;

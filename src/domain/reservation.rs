use chrono::{DateTime, Local};

use crate::domain::date_range::DateRange;
use crate::domain::utils::id::{ReservationId, RoomNumber};
use crate::error::{Error, Result};

/// A confirmed booking of one room for one guest.
///
/// Reservations are only created by [`Room::try_reserve`](crate::domain::room::Room::try_reserve),
/// which holds the room's lock while checking availability and inserting the
/// record. They are never modified afterwards; a cancellation removes them.
///
/// The room is referenced by its number only. The owning [`Room`](crate::domain::room::Room)
/// keeps the reservation in its own collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    id: ReservationId,
    room_number: RoomNumber,
    guest_name: String,
    range: DateRange,
    booked_at: DateTime<Local>,
}

impl Reservation {
    pub(crate) fn new(room_number: RoomNumber, guest_name: &str, range: DateRange) -> Result<Self> {
        let guest_name = validate_guest_name(guest_name)?;

        Ok(Reservation { id: ReservationId::generate(), room_number, guest_name, range, booked_at: Local::now() })
    }

    pub fn id(&self) -> &ReservationId {
        &self.id
    }

    pub fn room_number(&self) -> RoomNumber {
        self.room_number
    }

    pub fn guest_name(&self) -> &str {
        &self.guest_name
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn booked_at(&self) -> DateTime<Local> {
        self.booked_at
    }

    pub fn nights(&self) -> i64 {
        self.range.nights()
    }
}

/// Returns the trimmed guest name, or an error if nothing is left.
pub fn validate_guest_name(guest_name: &str) -> Result<String> {
    let trimmed = guest_name.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidGuestNameError("guest name must not be empty".to_string()));
    }
    Ok(trimmed.to_string())
}

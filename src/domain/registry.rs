use std::collections::HashMap;
use std::sync::Arc;

use crate::api::room_dto::RoomsDto;
use crate::domain::date_range::DateRange;
use crate::domain::reservation::Reservation;
use crate::domain::room::Room;
use crate::domain::utils::id::{ReservationId, RoomNumber};
use crate::error::{Error, Result};

/// Rooms the hotel starts with when no configuration file is given.
pub const DEFAULT_ROOMS: [(u32, u32); 3] = [(101, 2), (102, 4), (103, 6)];

/// Entry point for availability queries and reservation requests.
///
/// The registry owns every room of the hotel, in the order they were added.
/// Rooms are shared as `Arc<Room>`, and each room serializes its own bookings,
/// so a `&ReservationRegistry` can be used from several threads at once.
#[derive(Debug, Default)]
pub struct ReservationRegistry {
    rooms: Vec<Arc<Room>>,

    /// Position of each room in `rooms`.
    index: HashMap<RoomNumber, usize>,
}

impl ReservationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_rooms() -> Result<Self> {
        let mut registry = Self::new();
        for (number, capacity) in DEFAULT_ROOMS {
            registry.add_room(RoomNumber(number), capacity)?;
        }
        Ok(registry)
    }

    /// Builds a registry from a parsed configuration file.
    ///
    /// Seed reservations are booked through [`Self::make_reservation`], so a
    /// configuration with colliding bookings is rejected.
    pub fn from_dto(dto: RoomsDto) -> Result<Self> {
        let mut registry = Self::new();

        for room_dto in &dto.rooms {
            registry.add_room(RoomNumber(room_dto.number), room_dto.capacity)?;
        }

        for room_dto in dto.rooms {
            for reservation_dto in room_dto.reservations {
                let range = DateRange::parse(&reservation_dto.from_date, &reservation_dto.to_date)?;
                registry.make_reservation(RoomNumber(room_dto.number), &reservation_dto.guest_name, range)?;
            }
        }

        log::info!("Reservation registry constructed with {} rooms.", registry.rooms.len());
        Ok(registry)
    }

    pub fn add_room(&mut self, number: RoomNumber, capacity: u32) -> Result<Arc<Room>> {
        if self.index.contains_key(&number) {
            return Err(Error::ModelConstructionError(format!("room {} is defined more than once", number)));
        }

        let room = Arc::new(Room::new(number, capacity)?);
        self.index.insert(number, self.rooms.len());
        self.rooms.push(room.clone());

        log::debug!("Added room {} with capacity {}.", number, capacity);
        Ok(room)
    }

    pub fn room(&self, number: RoomNumber) -> Result<Arc<Room>> {
        self.index.get(&number).map(|&position| self.rooms[position].clone()).ok_or(Error::RoomNotFound(number))
    }

    pub fn rooms(&self) -> &[Arc<Room>] {
        &self.rooms
    }

    /// Returns every room, in stored order, that fits `num_of_guests` and is
    /// free for the whole `range`. An empty result is not an error.
    pub fn check_availability(&self, range: &DateRange, num_of_guests: i64) -> Result<Vec<Arc<Room>>> {
        if num_of_guests <= 0 {
            return Err(Error::InvalidGuestCountError(format!("expected a positive number of guests, got {}", num_of_guests)));
        }

        let available: Vec<Arc<Room>> =
            self.rooms.iter().filter(|room| room.can_host(num_of_guests) && room.is_available(range)).cloned().collect();

        log::debug!("{} of {} rooms available for {} guests, {}.", available.len(), self.rooms.len(), num_of_guests, range);
        Ok(available)
    }

    /// Books `room_number` for `guest_name` if it is still free.
    ///
    /// Availability is checked again under the room's lock, so a result from an
    /// earlier [`Self::check_availability`] call may be stale without harm.
    pub fn make_reservation(&self, room_number: RoomNumber, guest_name: &str, range: DateRange) -> Result<Reservation> {
        let room = self.room(room_number)?;

        room.try_reserve(guest_name, range).inspect_err(|e| {
            log::warn!("Reservation for room {} failed: {}", room_number, e);
        })
    }

    pub fn cancel_reservation(&self, reservation_id: &ReservationId) -> Result<Reservation> {
        for room in &self.rooms {
            match room.cancel(reservation_id) {
                Ok(reservation) => return Ok(reservation),
                Err(Error::ReservationNotFound(_)) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(Error::ReservationNotFound(reservation_id.clone()))
    }

    pub fn find_reservation(&self, reservation_id: &ReservationId) -> Option<Reservation> {
        self.rooms.iter().find_map(|room| room.find_reservation(reservation_id))
    }

    /// All reservations, grouped by room in stored order.
    pub fn reservations(&self) -> Vec<Reservation> {
        self.rooms.iter().flat_map(|room| room.reservations()).collect()
    }

    pub fn log_summary(&self) {
        log::info!("--- Reservation Registry Summary ({} rooms) ---", self.rooms.len());
        for room in &self.rooms {
            let reservations = room.reservations();
            log::info!("Room {} (capacity {}): {} reservation(s)", room.number(), room.capacity(), reservations.len());
            for reservation in reservations {
                log::info!("  {} | {} | {}", reservation.id(), reservation.guest_name(), reservation.range());
            }
        }
    }
}

/// Parses a guest count typed by a user.
pub fn parse_guest_count(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    let count = trimmed.parse::<i64>().map_err(|_| Error::InvalidGuestCountError(format!("'{}' is not a number", trimmed)))?;

    if count <= 0 {
        return Err(Error::InvalidGuestCountError(format!("expected a positive number of guests, got {}", count)));
    }
    Ok(count)
}

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::date_range::DateRange;
use crate::domain::reservation::Reservation;
use crate::domain::utils::id::{ReservationId, RoomNumber};
use crate::error::{Error, Result};

/// A bookable hotel room.
///
/// Each room guards its own reservations with a lock. Checking availability and
/// inserting a new reservation happen under the same write guard, so two
/// callers racing for overlapping dates can never both succeed. No other lock
/// is taken while the guard is held.
#[derive(Debug)]
pub struct Room {
    number: RoomNumber,
    capacity: u32,

    /// Insertion order, not sorted by date.
    reservations: RwLock<Vec<Reservation>>,
}

impl Room {
    pub fn new(number: RoomNumber, capacity: u32) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ModelConstructionError(format!("room {} must have a capacity of at least one guest", number)));
        }
        Ok(Room { number, capacity, reservations: RwLock::new(Vec::new()) })
    }

    pub fn number(&self) -> RoomNumber {
        self.number
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn can_host(&self, num_of_guests: i64) -> bool {
        i64::from(self.capacity) >= num_of_guests
    }

    /// Returns true if no reservation of this room collides with `range`.
    pub fn is_available(&self, range: &DateRange) -> bool {
        Self::is_free(&self.read(), range)
    }

    /// Books the room if `range` is still free.
    ///
    /// On failure the reservation collection is left untouched.
    pub fn try_reserve(&self, guest_name: &str, range: DateRange) -> Result<Reservation> {
        let mut reservations = self.write();

        if !Self::is_free(&reservations, &range) {
            log::debug!("Room {} rejected booking for {}: dates collide with an existing reservation.", self.number, range);
            return Err(Error::RoomUnavailable { room: self.number, range });
        }

        let reservation = Reservation::new(self.number, guest_name, range)?;
        reservations.push(reservation.clone());

        log::info!("Room {} booked for '{}' ({}), reservation {}.", self.number, reservation.guest_name(), range, reservation.id());
        Ok(reservation)
    }

    /// Removes a reservation from this room and returns it.
    pub fn cancel(&self, reservation_id: &ReservationId) -> Result<Reservation> {
        let mut reservations = self.write();

        let position = reservations
            .iter()
            .position(|reservation| reservation.id() == reservation_id)
            .ok_or_else(|| Error::ReservationNotFound(reservation_id.clone()))?;

        let removed = reservations.remove(position);
        log::info!("Reservation {} for room {} was cancelled.", removed.id(), self.number);
        Ok(removed)
    }

    pub fn find_reservation(&self, reservation_id: &ReservationId) -> Option<Reservation> {
        self.read().iter().find(|reservation| reservation.id() == reservation_id).cloned()
    }

    /// Snapshot of the current reservations in insertion order.
    pub fn reservations(&self) -> Vec<Reservation> {
        self.read().clone()
    }

    pub fn reservation_count(&self) -> usize {
        self.read().len()
    }

    /// Sum of booked nights over all reservations.
    pub fn occupied_nights(&self) -> i64 {
        self.read().iter().map(Reservation::nights).sum()
    }

    fn is_free(reservations: &[Reservation], range: &DateRange) -> bool {
        !reservations.iter().any(|reservation| reservation.range().overlaps(range))
    }

    // Every critical section leaves the Vec consistent, so a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Reservation>> {
        self.reservations.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Reservation>> {
        self.reservations.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(from: &str, to: &str) -> DateRange {
        DateRange::parse(from, to).unwrap()
    }

    #[test]
    fn empty_room_is_available() {
        let room = Room::new(RoomNumber(101), 2).unwrap();
        assert!(room.is_available(&range("2024-06-01", "2024-06-05")));
        assert_eq!(room.reservation_count(), 0);
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert!(matches!(Room::new(RoomNumber(101), 0), Err(Error::ModelConstructionError(_))));
    }

    #[test]
    fn can_host_compares_against_capacity() {
        let room = Room::new(RoomNumber(101), 2).unwrap();
        assert!(room.can_host(1));
        assert!(room.can_host(2));
        assert!(!room.can_host(3));
    }

    #[test]
    fn reservation_is_stored_with_room_back_reference() {
        let room = Room::new(RoomNumber(101), 2).unwrap();
        let reservation = room.try_reserve("Alice", range("2024-06-01", "2024-06-05")).unwrap();

        assert_eq!(reservation.room_number(), room.number());
        assert_eq!(room.reservations(), vec![reservation]);
        assert!(!room.is_available(&range("2024-06-02", "2024-06-04")));
    }

    #[test]
    fn rejected_booking_leaves_room_untouched() {
        let room = Room::new(RoomNumber(101), 2).unwrap();
        room.try_reserve("Alice", range("2024-06-01", "2024-06-05")).unwrap();
        let before = room.reservations();

        let result = room.try_reserve("Bob", range("2024-06-03", "2024-06-04"));

        assert!(matches!(result, Err(Error::RoomUnavailable { room: RoomNumber(101), .. })));
        assert_eq!(room.reservations(), before);
    }

    #[test]
    fn blank_guest_name_does_not_insert() {
        let room = Room::new(RoomNumber(101), 2).unwrap();
        assert!(matches!(room.try_reserve(" ", range("2024-06-01", "2024-06-05")), Err(Error::InvalidGuestNameError(_))));
        assert_eq!(room.reservation_count(), 0);
    }

    #[test]
    fn cancel_frees_the_dates() {
        let room = Room::new(RoomNumber(101), 2).unwrap();
        let reservation = room.try_reserve("Alice", range("2024-06-01", "2024-06-05")).unwrap();

        let cancelled = room.cancel(reservation.id()).unwrap();

        assert_eq!(cancelled, reservation);
        assert_eq!(room.reservation_count(), 0);
        assert!(room.is_available(&range("2024-06-01", "2024-06-05")));
        assert!(matches!(room.cancel(reservation.id()), Err(Error::ReservationNotFound(_))));
    }

    #[test]
    fn poisoned_lock_keeps_room_usable() {
        let room = Room::new(RoomNumber(101), 2).unwrap();
        room.try_reserve("Alice", range("2024-06-01", "2024-06-05")).unwrap();

        let outcome: std::thread::Result<()> = std::thread::scope(|scope| {
            scope
                .spawn(|| {
                    let _guard = room.reservations.write().unwrap();
                    panic!("writer died while holding the reservations lock");
                })
                .join()
        });
        assert!(outcome.is_err());
        assert!(room.reservations.is_poisoned());

        assert!(!room.is_available(&range("2024-06-02", "2024-06-03")));
        assert!(room.is_available(&range("2024-06-05", "2024-06-07")));
        assert!(matches!(room.try_reserve("Bob", range("2024-06-03", "2024-06-04")), Err(Error::RoomUnavailable { .. })));

        let bob = room.try_reserve("Bob", range("2024-06-05", "2024-06-07")).unwrap();
        assert_eq!(room.reservation_count(), 2);
        room.cancel(bob.id()).unwrap();
        assert_eq!(room.reservation_count(), 1);
    }

    #[test]
    fn occupied_nights_sums_all_stays() {
        let room = Room::new(RoomNumber(101), 2).unwrap();
        room.try_reserve("Alice", range("2024-06-01", "2024-06-05")).unwrap();
        room.try_reserve("Bob", range("2024-06-05", "2024-06-07")).unwrap();
        assert_eq!(room.occupied_nights(), 6);
    }
}

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::error::Error;

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Hash)]
pub struct Id<T> {
    pub id: String,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    pub fn new(id: impl Into<String>) -> Self {
        Id { id: id.into(), _marker: PhantomData }
    }

    /// Creates a fresh random id (UUID v4).
    pub fn generate() -> Self {
        Id::new(uuid::Uuid::new_v4().to_string())
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl<T> From<Id<T>> for String {
    fn from(id_wrapper: Id<T>) -> Self {
        id_wrapper.id
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let full_name = std::any::type_name::<T>();
        let clean_name = full_name.split("::").last().unwrap_or(full_name);
        let display_name = clean_name.replace("Tag", "Id");

        write!(f, "{}: {:?}", display_name, self.id)
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub struct ReservationTag;

pub type ReservationId = Id<ReservationTag>;

/// Number of a hotel room, e.g. `101`. Unique within a registry.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct RoomNumber(pub u32);

impl RoomNumber {
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for RoomNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RoomNumber {
    fn from(number: u32) -> Self {
        RoomNumber(number)
    }
}

impl FromStr for RoomNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(RoomNumber).map_err(|_| Error::InvalidRoomNumberError(format!("'{}' is not a room number", s.trim())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_reservation_ids_are_unique() {
        let a = ReservationId::generate();
        let b = ReservationId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn debug_uses_id_suffix_instead_of_tag() {
        let id = ReservationId::new("abc");
        assert_eq!(format!("{:?}", id), "ReservationId: \"abc\"");
    }

    #[test]
    fn room_number_parsing() {
        assert_eq!(" 101 ".parse::<RoomNumber>().unwrap(), RoomNumber(101));
        assert!(matches!("abc".parse::<RoomNumber>(), Err(Error::InvalidRoomNumberError(_))));
        assert!(matches!("-3".parse::<RoomNumber>(), Err(Error::InvalidRoomNumberError(_))));
    }
}

use serde::Deserialize;

/// Root of the room configuration file (see `data/rooms.json`).
#[derive(Debug, Deserialize)]
pub struct RoomsDto {
    pub rooms: Vec<RoomDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub number: u32,
    pub capacity: u32,

    /// Bookings that already exist when the registry starts.
    #[serde(default)]
    pub reservations: Vec<ReservationDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDto {
    pub guest_name: String,
    /// `YYYY-MM-DD`
    pub from_date: String,
    /// `YYYY-MM-DD`
    pub to_date: String,
}

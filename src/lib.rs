use std::path::Path;

use crate::api::room_dto::RoomsDto;
use crate::domain::registry::ReservationRegistry;
use crate::error::Result;
use crate::loader::parser::parse_json_file;

pub mod api;
pub mod console;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;

/// Loads the room configuration at `file_path` and builds a registry from it.
pub fn generate_registry(file_path: impl AsRef<Path>) -> Result<ReservationRegistry> {
    let rooms_dto: RoomsDto = parse_json_file(file_path.as_ref())?;
    log::info!("Room configuration '{}' parsed successfully.", file_path.as_ref().display());

    ReservationRegistry::from_dto(rooms_dto)
}

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::date_range::DateRange;
use crate::domain::registry::ReservationRegistry;
use crate::error::Result;

const REPORT_DELIMITER: u8 = b';';

pub const RESERVATION_HEADERS: [&str; 8] = ["Room", "Capacity", "ReservationId", "Guest", "From", "To", "Nights", "BookedAt"];

/// Format of the booking timestamp column.
pub const BOOKED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const OCCUPANCY_HEADERS: [&str; 5] = ["Room", "Capacity", "Reservations", "OccupiedNights", "AvailableInRange"];

fn csv_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new().delimiter(REPORT_DELIMITER).terminator(csv::Terminator::Any(b'\n')).from_writer(writer)
}

/// Writes one row per reservation, grouped by room in registry order.
pub fn write_reservation_report<W: Write>(registry: &ReservationRegistry, writer: W) -> Result<()> {
    let mut csv_wtr = csv_writer(writer);
    csv_wtr.write_record(RESERVATION_HEADERS)?;

    for room in registry.rooms() {
        for reservation in room.reservations() {
            let range = reservation.range();
            csv_wtr.write_record([
                room.number().to_string(),
                room.capacity().to_string(),
                reservation.id().to_string(),
                reservation.guest_name().to_string(),
                range.from_date().to_string(),
                range.to_date().to_string(),
                reservation.nights().to_string(),
                reservation.booked_at().format(BOOKED_AT_FORMAT).to_string(),
            ])?;
        }
    }

    csv_wtr.flush()?;
    Ok(())
}

/// Writes one row per room with its load and whether `range` is still free.
pub fn write_occupancy_report<W: Write>(registry: &ReservationRegistry, range: &DateRange, writer: W) -> Result<()> {
    let mut csv_wtr = csv_writer(writer);
    csv_wtr.write_record(OCCUPANCY_HEADERS)?;

    for room in registry.rooms() {
        csv_wtr.write_record([
            room.number().to_string(),
            room.capacity().to_string(),
            room.reservation_count().to_string(),
            room.occupied_nights().to_string(),
            room.is_available(range).to_string(),
        ])?;
    }

    csv_wtr.flush()?;
    Ok(())
}

pub fn write_reservation_report_to_file(registry: &ReservationRegistry, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_reservation_report(registry, file)?;
    log::info!("Reservation report written to '{}'.", path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::utils::id::RoomNumber;

    fn registry_with_booking() -> ReservationRegistry {
        let registry = ReservationRegistry::with_default_rooms().unwrap();
        registry.make_reservation(RoomNumber(102), "Alice", DateRange::parse("2024-06-01", "2024-06-05").unwrap()).unwrap();
        registry
    }

    #[test]
    fn reservation_report_lists_bookings() {
        let registry = registry_with_booking();
        let mut buffer = Vec::new();

        write_reservation_report(&registry, &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Room;Capacity;ReservationId;Guest;From;To;Nights;BookedAt");

        let booking = &registry.reservations()[0];
        let fields: Vec<&str> = lines[1].split(';').collect();
        assert_eq!(fields.len(), 8);
        assert_eq!(fields[..2], ["102", "4"]);
        assert_eq!(fields[2], booking.id().to_string());
        assert_eq!(fields[3..7], ["Alice", "2024-06-01", "2024-06-05", "4"]);
        assert_eq!(fields[7], booking.booked_at().format(BOOKED_AT_FORMAT).to_string());
    }

    #[test]
    fn occupancy_report_has_one_row_per_room() {
        let registry = registry_with_booking();
        let query = DateRange::parse("2024-06-02", "2024-06-03").unwrap();
        let mut buffer = Vec::new();

        write_occupancy_report(&registry, &query, &mut buffer).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(
            output.lines().collect::<Vec<_>>(),
            vec![
                "Room;Capacity;Reservations;OccupiedNights;AvailableInRange",
                "101;2;0;0;true",
                "102;4;1;4;false",
                "103;6;0;0;true",
            ]
        );
    }
}

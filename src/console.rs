use std::io::{BufRead, Write};

use crate::domain::date_range::DateRange;
use crate::domain::registry::{ReservationRegistry, parse_guest_count};
use crate::domain::report::{BOOKED_AT_FORMAT, write_occupancy_report};
use crate::domain::utils::id::{ReservationId, RoomNumber};
use crate::error::{Error, Result};

const MENU: &str = "Menu Options:
1. Check Room Availability
2. Make a Reservation
3. Cancel a Reservation
4. List Reservations
5. Occupancy Report
6. Quit";

/// Interactive front end of the registry.
///
/// Reads answers line by line from `input` and writes prompts and results to
/// `output`. Domain errors are printed and the session continues; only I/O
/// errors on the streams end it.
pub struct Console<'a, R, W> {
    registry: &'a ReservationRegistry,
    input: R,
    output: W,
}

enum Choice {
    CheckAvailability,
    MakeReservation,
    CancelReservation,
    ListReservations,
    OccupancyReport,
    Quit,
    Unknown(String),
}

impl Choice {
    fn parse(input: &str) -> Choice {
        match input.trim() {
            "1" => Choice::CheckAvailability,
            "2" => Choice::MakeReservation,
            "3" => Choice::CancelReservation,
            "4" => Choice::ListReservations,
            "5" => Choice::OccupancyReport,
            "6" | "q" | "quit" => Choice::Quit,
            other => Choice::Unknown(other.to_string()),
        }
    }
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(registry: &'a ReservationRegistry, input: R, output: W) -> Self {
        Console { registry, input, output }
    }

    /// Runs the menu loop until the user quits or the input ends.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to the Hotel Reservation System!\n")?;

        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(answer) = self.prompt("\nEnter your choice: ")? else {
                break;
            };

            let outcome = match Choice::parse(&answer) {
                Choice::CheckAvailability => self.check_availability(),
                Choice::MakeReservation => self.make_reservation(),
                Choice::CancelReservation => self.cancel_reservation(),
                Choice::ListReservations => self.list_reservations(),
                Choice::OccupancyReport => self.occupancy_report(),
                Choice::Quit => break,
                Choice::Unknown(choice) => {
                    writeln!(self.output, "Unknown choice '{}'.", choice)?;
                    Ok(Step::Continue)
                }
            };

            match outcome {
                Ok(Step::Continue) => {}
                Ok(Step::EndOfInput) => break,
                // I/O errors on our own streams cannot be reported to the user.
                Err(Error::IoError(e)) => return Err(Error::IoError(e)),
                Err(e) => writeln!(self.output, "Error: {}", e)?,
            }
            writeln!(self.output)?;
        }

        writeln!(self.output, "Thank you for using the Hotel Reservation System.")?;
        Ok(())
    }

    fn check_availability(&mut self) -> Result<Step> {
        let Some(range) = self.read_range()? else {
            return Ok(Step::EndOfInput);
        };
        let Some(guests) = self.prompt("Enter number of guests: ")? else {
            return Ok(Step::EndOfInput);
        };
        let guests = parse_guest_count(&guests)?;

        let available = self.registry.check_availability(&range, guests)?;

        writeln!(self.output, "\nAvailable Rooms:")?;
        if available.is_empty() {
            writeln!(self.output, "No rooms available.")?;
        }
        for room in available {
            writeln!(self.output, "Room Number: {}", room.number())?;
            writeln!(self.output, "Capacity: {}", room.capacity())?;
            writeln!(self.output, "====================")?;
        }
        Ok(Step::Continue)
    }

    fn make_reservation(&mut self) -> Result<Step> {
        let Some(room_number) = self.prompt("Enter room number: ")? else {
            return Ok(Step::EndOfInput);
        };
        let room_number: RoomNumber = room_number.parse()?;

        let Some(guest_name) = self.prompt("Enter guest name: ")? else {
            return Ok(Step::EndOfInput);
        };
        let Some(range) = self.read_range()? else {
            return Ok(Step::EndOfInput);
        };

        let reservation = self.registry.make_reservation(room_number, &guest_name, range)?;
        writeln!(self.output, "Reservation successful! Reservation id: {}", reservation.id())?;
        Ok(Step::Continue)
    }

    fn cancel_reservation(&mut self) -> Result<Step> {
        let Some(reservation_id) = self.prompt("Enter reservation id: ")? else {
            return Ok(Step::EndOfInput);
        };

        let cancelled = self.registry.cancel_reservation(&ReservationId::new(reservation_id.trim()))?;
        writeln!(self.output, "Reservation for {} in room {} ({}) cancelled.", cancelled.guest_name(), cancelled.room_number(), cancelled.range())?;
        Ok(Step::Continue)
    }

    fn list_reservations(&mut self) -> Result<Step> {
        let reservations = self.registry.reservations();

        writeln!(self.output, "\nReservations:")?;
        if reservations.is_empty() {
            writeln!(self.output, "No reservations.")?;
        }
        for reservation in reservations {
            writeln!(
                self.output,
                "Room {} | {} | {} | {} | booked {}",
                reservation.room_number(),
                reservation.guest_name(),
                reservation.range(),
                reservation.id(),
                reservation.booked_at().format(BOOKED_AT_FORMAT)
            )?;
        }
        Ok(Step::Continue)
    }

    fn occupancy_report(&mut self) -> Result<Step> {
        let Some(range) = self.read_range()? else {
            return Ok(Step::EndOfInput);
        };

        writeln!(self.output)?;
        write_occupancy_report(self.registry, &range, &mut self.output)?;
        Ok(Step::Continue)
    }

    fn read_range(&mut self) -> Result<Option<DateRange>> {
        let Some(from) = self.prompt("Enter check-in date (YYYY-MM-DD): ")? else {
            return Ok(None);
        };
        let Some(to) = self.prompt("Enter check-out date (YYYY-MM-DD): ")? else {
            return Ok(None);
        };
        DateRange::parse(&from, &to).map(Some)
    }

    /// Prints `question` and reads one line. `None` once the input is exhausted.
    ///
    /// Bytes that are not UTF-8 become U+FFFD, so the answer fails validation
    /// like any other bad input instead of ending the session.
    fn prompt(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim_end_matches(['\r', '\n']).to_string()))
    }
}

enum Step {
    Continue,
    EndOfInput,
}

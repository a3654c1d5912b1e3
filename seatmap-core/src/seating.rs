use serde::Serialize;
use std::fmt;
use std::num::IntErrorKind;
use crate::aircraft::{AircraftProvider, SeatingPlan};
use crate::{FlightNumberFault, SeatFault, SeatingError, SeatingResult};

/// A validated seat position such as `12A`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SeatDesignator {
    pub row: u32,
    pub letter: char,
}

impl fmt::Display for SeatDesignator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.letter)
    }
}

/// Seat occupancy for a single flight.
///
/// The grid is allocated up front from the aircraft's seating plan and is never resized.
/// Cells are stored row-major with an explicit row-1 offset; `None` marks a free seat.
#[derive(Debug, Clone)]
pub struct SeatAllocator<A> {
    flight_number: String,
    aircraft: A,
    plan: SeatingPlan,
    seating: Vec<Option<String>>,
}

impl<A: AircraftProvider> SeatAllocator<A> {
    pub fn new(flight_number: impl Into<String>, aircraft: A) -> SeatingResult<Self> {
        let flight_number = flight_number.into();

        if let Err(reason) = validate_flight_number(&flight_number) {
            tracing::warn!("Rejected flight number {}: {}", flight_number, reason);
            return Err(SeatingError::InvalidFlightNumber {
                number: flight_number,
                reason,
            });
        }

        let plan = aircraft.seating_plan();
        let seating = vec![None; plan.capacity()];

        tracing::info!(
            "Opened seating for flight {} on {} ({}), {} seats",
            flight_number,
            aircraft.model(),
            aircraft.registration(),
            plan.capacity()
        );

        Ok(Self {
            flight_number,
            aircraft,
            plan,
            seating,
        })
    }

    pub fn flight_number(&self) -> &str {
        &self.flight_number
    }

    pub fn airline_code(&self) -> &str {
        split_airline_code(&self.flight_number).0
    }

    pub fn aircraft_model(&self) -> &str {
        self.aircraft.model()
    }

    pub fn aircraft(&self) -> &A {
        &self.aircraft
    }

    pub fn seating_plan(&self) -> &SeatingPlan {
        &self.plan
    }

    pub fn capacity(&self) -> usize {
        self.seating.len()
    }

    /// Parse a seat designator such as `12F` into a row and letter.
    ///
    /// The letter is the last character and everything before it must be the row
    /// number, written as an integer literal (see `normalize_row`). Checks run letter
    /// first, then row syntax, then row range.
    pub fn parse_seat(&self, designator: &str) -> SeatingResult<SeatDesignator> {
        let invalid = |reason: SeatFault| SeatingError::InvalidSeat {
            designator: designator.to_string(),
            reason,
        };

        let mut chars = designator.chars();
        let letter = chars
            .next_back()
            .filter(|letter| self.plan.contains_letter(*letter))
            .ok_or_else(|| invalid(SeatFault::UnknownLetter))?;

        let row_text = normalize_row(chars.as_str()).ok_or_else(|| invalid(SeatFault::NonNumericRow))?;
        let row = match row_text.parse::<i64>() {
            Ok(row) => row,
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                return Err(invalid(SeatFault::RowOutOfRange));
            }
            Err(_) => return Err(invalid(SeatFault::NonNumericRow)),
        };

        let row = u32::try_from(row)
            .ok()
            .filter(|row| self.plan.contains_row(*row))
            .ok_or_else(|| invalid(SeatFault::RowOutOfRange))?;

        Ok(SeatDesignator { row, letter })
    }

    /// Current occupant of a seat, if any
    pub fn occupant(&self, designator: &str) -> SeatingResult<Option<&str>> {
        let seat = self.parse_seat(designator)?;
        Ok(self.seating[self.cell(seat)].as_deref())
    }

    pub fn is_available(&self, designator: &str) -> SeatingResult<bool> {
        Ok(self.occupant(designator)?.is_none())
    }

    /// Allocate a seat to a passenger
    pub fn allocate_seat(&mut self, designator: &str, passenger: impl Into<String>) -> SeatingResult<()> {
        let passenger = passenger.into();
        let seat = self.parse_seat(designator)?;

        let cell = self.cell(seat);
        if self.seating[cell].is_some() {
            tracing::warn!("Flight {}: seat {} already occupied", self.flight_number, seat);
            return Err(SeatingError::SeatOccupied(designator.to_string()));
        }

        tracing::debug!("Flight {}: allocated {} to {}", self.flight_number, seat, passenger);
        self.seating[cell] = Some(passenger);

        Ok(())
    }

    /// Move a passenger to a different seat. Both seats are checked before either changes.
    pub fn relocate_passenger(&mut self, from_seat: &str, to_seat: &str) -> SeatingResult<()> {
        let from = self.parse_seat(from_seat)?;
        let to = self.parse_seat(to_seat)?;
        let (from_cell, to_cell) = (self.cell(from), self.cell(to));

        if self.seating[from_cell].is_none() {
            tracing::warn!("Flight {}: no passenger in seat {}", self.flight_number, from);
            return Err(SeatingError::SeatEmpty(from_seat.to_string()));
        }

        if self.seating[to_cell].is_some() {
            tracing::warn!("Flight {}: seat {} already occupied", self.flight_number, to);
            return Err(SeatingError::SeatOccupied(to_seat.to_string()));
        }

        let passenger = self.seating[from_cell].take();
        tracing::debug!(
            "Flight {}: relocated {} from {} to {}",
            self.flight_number,
            passenger.as_deref().unwrap_or_default(),
            from,
            to
        );
        self.seating[to_cell] = passenger;

        Ok(())
    }

    pub fn available_seat_count(&self) -> usize {
        self.seating.iter().filter(|occupant| occupant.is_none()).count()
    }

    /// Occupied seats as `(passenger, seat)`, in row then letter order
    pub fn assignments(&self) -> impl Iterator<Item = (&str, SeatDesignator)> + '_ {
        self.seat_positions()
            .zip(self.seating.iter())
            .filter_map(|(seat, occupant)| occupant.as_deref().map(|passenger| (passenger, seat)))
    }

    fn seat_positions(&self) -> impl Iterator<Item = SeatDesignator> + '_ {
        let letters = self.plan.letters();
        self.plan
            .rows()
            .flat_map(move |row| letters.clone().map(move |letter| SeatDesignator { row, letter }))
    }

    fn cell(&self, seat: SeatDesignator) -> usize {
        // SEAT_ALPHABET is contiguous from 'A'
        let column = seat.letter as usize - 'A' as usize;
        (seat.row as usize - 1) * self.plan.seats_per_row() + column
    }
}

/// Row text follows integer literal rules: surrounding whitespace, an optional sign,
/// and single underscores between digits are allowed
fn normalize_row(text: &str) -> Option<String> {
    let text = text.trim();
    let unsigned = text
        .strip_prefix('+')
        .or_else(|| text.strip_prefix('-'))
        .unwrap_or(text);
    let sign = &text[..text.len() - unsigned.len()];

    let well_formed = !unsigned.is_empty()
        && unsigned.chars().all(|c| c.is_ascii_digit() || c == '_')
        && !unsigned.starts_with('_')
        && !unsigned.ends_with('_')
        && !unsigned.contains("__");

    well_formed.then(|| format!("{}{}", sign, unsigned.replace('_', "")))
}

/// Splits a flight number after its first two characters
fn split_airline_code(number: &str) -> (&str, &str) {
    let split = number
        .char_indices()
        .nth(2)
        .map_or(number.len(), |(index, _)| index);
    number.split_at(split)
}

fn validate_flight_number(number: &str) -> Result<(), FlightNumberFault> {
    let (airline, route) = split_airline_code(number);

    if airline.is_empty() || !airline.chars().all(char::is_alphabetic) {
        return Err(FlightNumberFault::MissingAirlineCode);
    }

    // Never fails once the code is alphabetic; kept as its own step
    if airline.to_uppercase().is_empty() {
        return Err(FlightNumberFault::InvalidAirlineCode);
    }

    if route.is_empty() || !route.chars().all(|c| c.is_ascii_digit()) {
        return Err(FlightNumberFault::InvalidRouteNumber);
    }

    Ok(())
}

pub mod aircraft;
pub mod seating;
pub mod boarding;

pub use aircraft::{Aircraft, AircraftProvider, SeatingPlan, MAX_ROW_COUNT, SEAT_ALPHABET};
pub use seating::{SeatAllocator, SeatDesignator};
pub use boarding::{BoardingCard, CardPrinter, ConsoleCardPrinter};

use std::fmt;

/// Why a flight number was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightNumberFault {
    MissingAirlineCode,
    InvalidAirlineCode,
    InvalidRouteNumber,
}

impl fmt::Display for FlightNumberFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightNumberFault::MissingAirlineCode => write!(f, "missing airline code"),
            FlightNumberFault::InvalidAirlineCode => write!(f, "invalid airline code"),
            FlightNumberFault::InvalidRouteNumber => write!(f, "invalid route number"),
        }
    }
}

/// Why a seat designator was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatFault {
    UnknownLetter,
    NonNumericRow,
    RowOutOfRange,
}

impl fmt::Display for SeatFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeatFault::UnknownLetter => write!(f, "unknown seat letter"),
            SeatFault::NonNumericRow => write!(f, "row is not numeric"),
            SeatFault::RowOutOfRange => write!(f, "row out of range"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeatingError {
    #[error("Invalid seating configuration: {0}")]
    ConfigurationError(String),

    #[error("Invalid flight number {number}: {reason}")]
    InvalidFlightNumber {
        number: String,
        reason: FlightNumberFault,
    },

    #[error("Invalid seat {designator}: {reason}")]
    InvalidSeat {
        designator: String,
        reason: SeatFault,
    },

    #[error("Seat {0} is already occupied")]
    SeatOccupied(String),

    #[error("No passenger to relocate in seat {0}")]
    SeatEmpty(String),
}

pub type SeatingResult<T> = Result<T, SeatingError>;

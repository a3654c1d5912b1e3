use serde::Serialize;
use std::io::{self, Write};
use crate::aircraft::AircraftProvider;
use crate::seating::SeatAllocator;

/// Everything printed on a passenger's boarding card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardingCard {
    pub passenger: String,
    pub seat: String,
    pub flight_number: String,
    pub aircraft_model: String,
}

/// Receives one call per occupied seat when boarding cards are issued
pub trait CardPrinter {
    fn print_card(
        &mut self,
        passenger: &str,
        seat: &str,
        flight_number: &str,
        aircraft_model: &str,
    ) -> io::Result<()>;
}

impl<F> CardPrinter for F
where
    F: FnMut(&str, &str, &str, &str) -> io::Result<()>,
{
    fn print_card(
        &mut self,
        passenger: &str,
        seat: &str,
        flight_number: &str,
        aircraft_model: &str,
    ) -> io::Result<()> {
        self(passenger, seat, flight_number, aircraft_model)
    }
}

impl<A: AircraftProvider> SeatAllocator<A> {
    /// Cards for every occupied seat, sorted by passenger then seat
    pub fn boarding_cards(&self) -> Vec<BoardingCard> {
        let mut seats: Vec<(&str, String)> = self
            .assignments()
            .map(|(passenger, seat)| (passenger, seat.to_string()))
            .collect();
        seats.sort();

        seats
            .into_iter()
            .map(|(passenger, seat)| BoardingCard {
                passenger: passenger.to_string(),
                seat,
                flight_number: self.flight_number().to_string(),
                aircraft_model: self.aircraft_model().to_string(),
            })
            .collect()
    }

    /// Send every boarding card to `printer`, stopping at the first failure
    pub fn make_boarding_cards<P: CardPrinter + ?Sized>(&self, printer: &mut P) -> io::Result<()> {
        let cards = self.boarding_cards();
        tracing::info!("Issuing {} boarding cards for flight {}", cards.len(), self.flight_number());

        for card in &cards {
            printer.print_card(&card.passenger, &card.seat, &card.flight_number, &card.aircraft_model)?;
        }

        Ok(())
    }
}

/// Writes boxed, human-readable cards to any writer
pub struct ConsoleCardPrinter<W> {
    out: W,
}

impl ConsoleCardPrinter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleCardPrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn render(passenger: &str, seat: &str, flight_number: &str, aircraft_model: &str) -> String {
        let output = format!(
            "| Name: {} Flight: {} Seat : {} Aircraft: {} |",
            passenger, flight_number, seat, aircraft_model
        );
        let inner = output.chars().count().saturating_sub(2);
        let banner = format!("+{}+", "-".repeat(inner));
        let border = format!("|{}|", " ".repeat(inner));

        [banner.as_str(), border.as_str(), output.as_str(), border.as_str(), banner.as_str()].join("\n")
    }
}

impl<W: Write> CardPrinter for ConsoleCardPrinter<W> {
    fn print_card(
        &mut self,
        passenger: &str,
        seat: &str,
        flight_number: &str,
        aircraft_model: &str,
    ) -> io::Result<()> {
        let card = Self::render(passenger, seat, flight_number, aircraft_model);
        writeln!(self.out, "{}\n", card)
    }
}

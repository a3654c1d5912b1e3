use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use crate::{SeatingError, SeatingResult};

/// Column letters available to any cabin, taken left to right
pub const SEAT_ALPHABET: &str = "ABCDEFGHIJK";

/// Largest cabin accepted; seat designators carry at most three row digits
pub const MAX_ROW_COUNT: u32 = 999;

/// The addressable seat space of an aircraft: rows `1..=row_count`, and the first
/// `seats_per_row` letters of [`SEAT_ALPHABET`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatingPlan {
    row_count: u32,
    seats_per_row: usize,
}

impl SeatingPlan {
    pub fn new(row_count: u32, seats_per_row: usize) -> SeatingResult<Self> {
        if row_count == 0 || row_count > MAX_ROW_COUNT {
            return Err(SeatingError::ConfigurationError(format!(
                "row count must be between 1 and {}, got {}",
                MAX_ROW_COUNT, row_count
            )));
        }

        if seats_per_row == 0 || seats_per_row > SEAT_ALPHABET.len() {
            return Err(SeatingError::ConfigurationError(format!(
                "seats per row must be between 1 and {}, got {}",
                SEAT_ALPHABET.len(),
                seats_per_row
            )));
        }

        Ok(Self { row_count, seats_per_row })
    }

    pub fn row_count(&self) -> u32 {
        self.row_count
    }

    pub fn seats_per_row(&self) -> usize {
        self.seats_per_row
    }

    /// Valid row numbers in ascending order
    pub fn rows(&self) -> RangeInclusive<u32> {
        1..=self.row_count
    }

    /// Valid seat letters in cabin order
    pub fn letters(&self) -> impl Iterator<Item = char> + Clone + 'static {
        SEAT_ALPHABET.chars().take(self.seats_per_row)
    }

    pub fn contains_row(&self, row: u32) -> bool {
        self.rows().contains(&row)
    }

    pub fn contains_letter(&self, letter: char) -> bool {
        self.letters().any(|l| l == letter)
    }

    pub fn capacity(&self) -> usize {
        self.row_count as usize * self.seats_per_row
    }
}

/// Anything that can describe the aircraft flying a flight
pub trait AircraftProvider {
    fn registration(&self) -> &str;

    fn model(&self) -> &str;

    fn seating_plan(&self) -> SeatingPlan;
}

/// A concrete airframe with a fixed cabin layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AircraftSpec", into = "AircraftSpec")]
pub struct Aircraft {
    registration: String,
    model: String,
    plan: SeatingPlan,
}

/// Raw aircraft description as found in configuration files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AircraftSpec {
    pub registration: String,
    pub model: String,
    #[serde(alias = "num_rows")]
    pub rows: u32,
    #[serde(alias = "num_seats_per_row")]
    pub seats_per_row: usize,
}

impl TryFrom<AircraftSpec> for Aircraft {
    type Error = SeatingError;

    fn try_from(spec: AircraftSpec) -> SeatingResult<Self> {
        Aircraft::new(spec.registration, spec.model, spec.rows, spec.seats_per_row)
    }
}

impl From<Aircraft> for AircraftSpec {
    fn from(aircraft: Aircraft) -> Self {
        Self {
            registration: aircraft.registration,
            model: aircraft.model,
            rows: aircraft.plan.row_count,
            seats_per_row: aircraft.plan.seats_per_row,
        }
    }
}

impl Aircraft {
    pub fn new(
        registration: impl Into<String>,
        model: impl Into<String>,
        num_rows: u32,
        num_seats_per_row: usize,
    ) -> SeatingResult<Self> {
        Ok(Self {
            registration: registration.into(),
            model: model.into(),
            plan: SeatingPlan::new(num_rows, num_seats_per_row)?,
        })
    }
}

impl AircraftProvider for Aircraft {
    fn registration(&self) -> &str {
        &self.registration
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn seating_plan(&self) -> SeatingPlan {
        self.plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_rows_and_letters() {
        let plan = SeatingPlan::new(22, 6).unwrap();

        assert_eq!(plan.rows().collect::<Vec<_>>(), (1..=22).collect::<Vec<_>>());
        assert_eq!(plan.letters().collect::<String>(), "ABCDEF");
        assert_eq!(plan.capacity(), 132);

        // Restartable
        assert_eq!(plan.letters().count(), 6);
        assert_eq!(plan.rows().count(), 22);
    }

    #[test]
    fn test_plan_bounds() {
        let plan = SeatingPlan::new(3, 4).unwrap();

        assert!(plan.contains_row(1));
        assert!(plan.contains_row(3));
        assert!(!plan.contains_row(0));
        assert!(!plan.contains_row(4));
        assert!(plan.contains_letter('D'));
        assert!(!plan.contains_letter('E'));
        assert!(!plan.contains_letter('a'));
    }

    #[test]
    fn test_full_alphabet_plan() {
        let plan = SeatingPlan::new(1, 11).unwrap();
        assert_eq!(plan.letters().collect::<String>(), SEAT_ALPHABET);
    }

    #[test]
    fn test_invalid_plans() {
        assert!(matches!(SeatingPlan::new(0, 6), Err(SeatingError::ConfigurationError(_))));
        assert!(matches!(SeatingPlan::new(10, 0), Err(SeatingError::ConfigurationError(_))));
        assert!(matches!(SeatingPlan::new(10, 12), Err(SeatingError::ConfigurationError(_))));
        assert!(matches!(
            SeatingPlan::new(MAX_ROW_COUNT + 1, 6),
            Err(SeatingError::ConfigurationError(_))
        ));
        assert!(matches!(
            Aircraft::new("N1", "Huge", u32::MAX, 11),
            Err(SeatingError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_largest_plan() {
        let plan = SeatingPlan::new(MAX_ROW_COUNT, 11).unwrap();
        assert_eq!(plan.capacity(), 999 * 11);
        assert!(plan.contains_row(999));
    }

    #[test]
    fn test_aircraft_accessors() {
        let aircraft = Aircraft::new("G-EUPT", "Airbus A319", 22, 6).unwrap();

        assert_eq!(aircraft.registration(), "G-EUPT");
        assert_eq!(aircraft.model(), "Airbus A319");
        assert_eq!(aircraft.seating_plan(), SeatingPlan::new(22, 6).unwrap());
    }

    #[test]
    fn test_aircraft_from_config_value() {
        let json = r#"{"registration":"G-EUPT","model":"Airbus A319","rows":22,"seats_per_row":6}"#;
        let aircraft: Aircraft = serde_json::from_str(json).unwrap();
        assert_eq!(aircraft.seating_plan().capacity(), 132);

        let bad = r#"{"registration":"G-EUPT","model":"Airbus A319","rows":0,"seats_per_row":6}"#;
        assert!(serde_json::from_str::<Aircraft>(bad).is_err());
    }

    #[test]
    fn test_aircraft_rejects_bad_layout() {
        let result = Aircraft::new("G-EUPT", "Airbus A319", 22, 14);
        assert!(matches!(result, Err(SeatingError::ConfigurationError(_))));
    }
}

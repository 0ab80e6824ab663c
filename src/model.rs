use serde::{Deserialize, Serialize};

/// Domain category assigned to a section by matching its title line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionKind {
    Flights,
    Hotels,
    Itinerary,
    Budget,
    Map,
    Other,
}

impl SectionKind {
    #[must_use]
    pub const fn sheet_name(self) -> Option<&'static str> {
        match self {
            Self::Flights => Some("Flights"),
            Self::Hotels => Some("Hotels"),
            Self::Itinerary => Some("Itinerary"),
            Self::Budget => Some("Budget"),
            Self::Map | Self::Other => None,
        }
    }
}

/// A titled, categorized slice of the document. The body keeps the raw
/// text after the title line, including any trailing freeform notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    pub title: String,
    pub body: String,
    pub table: Option<Table>,
}

/// Parsed pipe table: named columns plus exact-width rows. Cell values
/// stay as strings so currency formatting and placeholder text survive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The canonical tables assembled for one rendering pass. Only the first
/// successfully parsed table per category is retained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanTables {
    pub flights: Option<Table>,
    pub hotels: Option<Table>,
    pub itinerary: Option<Table>,
    pub budget: Option<Table>,
}

impl PlanTables {
    /// Named tables in fixed export order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Table)> {
        [
            ("Flights", self.flights.as_ref()),
            ("Hotels", self.hotels.as_ref()),
            ("Itinerary", self.itinerary.as_ref()),
            ("Budget", self.budget.as_ref()),
        ]
        .into_iter()
        .filter_map(|(name, table)| table.map(|table| (name, table)))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub(crate) fn slot_mut(&mut self, kind: SectionKind) -> Option<&mut Option<Table>> {
        match kind {
            SectionKind::Flights => Some(&mut self.flights),
            SectionKind::Hotels => Some(&mut self.hotels),
            SectionKind::Itinerary => Some(&mut self.itinerary),
            SectionKind::Budget => Some(&mut self.budget),
            SectionKind::Map | SectionKind::Other => None,
        }
    }
}

/// Per-day partition of the itinerary table. `rows` keeps the original
/// row order; `summary` is recovered from the trailing section text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItineraryDay {
    pub day: String,
    pub date: String,
    pub rows: Vec<Vec<String>>,
    pub summary: Option<String>,
}

/// Trip parameters that accompany a document. Used only for labels in the
/// rendering layer, never by the parsing logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripContext {
    pub currency: String,
    pub days: u32,
    pub start_date: chrono::NaiveDate,
}

/// Output of one full document pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPlan {
    pub sections: Vec<Section>,
    pub tables: PlanTables,
    pub itinerary_days: Option<Vec<ItineraryDay>>,
}

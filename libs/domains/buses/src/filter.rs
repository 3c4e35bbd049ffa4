//! Query and update builders shared by the store implementations.
//!
//! Empty strings are treated exactly like absent values: they neither
//! constrain a search nor overwrite a stored field.

use mongodb::bson::{Bson, Document, doc};
use uuid::Uuid;

use crate::models::{Bus, BusQuery, UpdateBus};

pub const FIELD_ID: &str = "_id";
pub const FIELD_PLATE: &str = "plate";
pub const FIELD_NUMBER: &str = "number";
pub const FIELD_TYPE: &str = "type";
pub const FIELD_ROUTE: &str = "route";

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Filter matching a single bus by id
pub fn id_filter(id: Uuid) -> Document {
    let mut filter = Document::new();
    filter.insert(FIELD_ID, id.to_string());
    filter
}

/// Equality filter built from the non-empty search parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusFilter {
    plate: Option<String>,
    number: Option<String>,
    bus_type: Option<String>,
}

impl BusFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plate(mut self, plate: impl Into<String>) -> Self {
        self.plate = non_empty(Some(plate.into()));
        self
    }

    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.number = non_empty(Some(number.into()));
        self
    }

    pub fn bus_type(mut self, bus_type: impl Into<String>) -> Self {
        self.bus_type = non_empty(Some(bus_type.into()));
        self
    }

    /// True when no parameter constrains the search
    pub fn is_empty(&self) -> bool {
        self.plate.is_none() && self.number.is_none() && self.bus_type.is_none()
    }

    pub fn to_document(&self) -> Document {
        let mut filter = Document::new();
        if let Some(plate) = &self.plate {
            filter.insert(FIELD_PLATE, plate.as_str());
        }
        if let Some(number) = &self.number {
            filter.insert(FIELD_NUMBER, number.as_str());
        }
        if let Some(bus_type) = &self.bus_type {
            filter.insert(FIELD_TYPE, bus_type.as_str());
        }
        filter
    }

    /// Evaluate the filter against an in-memory bus
    pub fn matches(&self, bus: &Bus) -> bool {
        self.plate.as_ref().is_none_or(|p| *p == bus.plate)
            && self.number.as_ref().is_none_or(|n| *n == bus.number)
            && self.bus_type.as_ref().is_none_or(|t| *t == bus.bus_type)
    }
}

impl From<BusQuery> for BusFilter {
    fn from(query: BusQuery) -> Self {
        Self {
            plate: non_empty(query.plate),
            number: non_empty(query.number),
            bus_type: non_empty(query.bus_type),
        }
    }
}

/// Set of field assignments for a partial update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusChanges {
    plate: Option<String>,
    number: Option<String>,
    bus_type: Option<String>,
    route: Option<Vec<i64>>,
}

impl BusChanges {
    /// True when the update would not modify any field
    pub fn is_empty(&self) -> bool {
        self.plate.is_none()
            && self.number.is_none()
            && self.bus_type.is_none()
            && self.route.is_none()
    }

    /// Field assignments only, without the `$set` wrapper
    pub fn to_set_document(&self) -> Document {
        let mut set = Document::new();
        if let Some(plate) = &self.plate {
            set.insert(FIELD_PLATE, plate.as_str());
        }
        if let Some(number) = &self.number {
            set.insert(FIELD_NUMBER, number.as_str());
        }
        if let Some(bus_type) = &self.bus_type {
            set.insert(FIELD_TYPE, bus_type.as_str());
        }
        if let Some(route) = &self.route {
            let stops: Vec<Bson> = route.iter().copied().map(Bson::Int64).collect();
            set.insert(FIELD_ROUTE, stops);
        }
        set
    }

    pub fn to_update_document(&self) -> Document {
        doc! { "$set": self.to_set_document() }
    }

    /// Apply the changes to an in-memory bus
    pub fn apply(&self, bus: &mut Bus) {
        if let Some(plate) = &self.plate {
            bus.plate.clone_from(plate);
        }
        if let Some(number) = &self.number {
            bus.number.clone_from(number);
        }
        if let Some(bus_type) = &self.bus_type {
            bus.bus_type.clone_from(bus_type);
        }
        if let Some(route) = &self.route {
            bus.route.clone_from(route);
        }
    }
}

impl From<UpdateBus> for BusChanges {
    fn from(update: UpdateBus) -> Self {
        Self {
            plate: non_empty(update.plate),
            number: non_empty(update.number),
            bus_type: non_empty(update.bus_type),
            route: update.route.filter(|r| !r.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bus() -> Bus {
        Bus {
            id: Uuid::now_v7(),
            plate: "HP01".into(),
            number: "101".into(),
            bus_type: "express".into(),
            route: vec![1, 2, 3],
        }
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let filter = BusFilter::from(BusQuery::default());
        assert!(filter.is_empty());
        assert!(filter.to_document().is_empty());
        assert!(filter.matches(&sample_bus()));
    }

    #[test]
    fn test_empty_strings_are_ignored() {
        let filter = BusFilter::from(BusQuery {
            plate: Some(String::new()),
            number: Some("101".into()),
            bus_type: Some(String::new()),
        });
        assert_eq!(filter.to_document(), doc! { "number": "101" });
    }

    #[test]
    fn test_filter_conjunction() {
        let filter = BusFilter::new().number("101").bus_type("express");
        assert_eq!(
            filter.to_document(),
            doc! { "number": "101", "type": "express" }
        );
        assert!(filter.matches(&sample_bus()));

        let other = BusFilter::new().number("101").bus_type("ordinary");
        assert!(!other.matches(&sample_bus()));
    }

    #[test]
    fn test_builder_drops_empty_values() {
        let filter = BusFilter::new().plate("");
        assert!(filter.is_empty());
    }

    #[test]
    fn test_id_filter() {
        let id = Uuid::now_v7();
        assert_eq!(id_filter(id), doc! { "_id": id.to_string() });
    }

    #[test]
    fn test_changes_only_include_non_empty_fields() {
        let changes = BusChanges::from(UpdateBus {
            plate: Some(String::new()),
            number: None,
            bus_type: Some("ordinary".into()),
            route: Some(vec![]),
        });
        assert!(!changes.is_empty());
        assert_eq!(
            changes.to_update_document(),
            doc! { "$set": { "type": "ordinary" } }
        );
    }

    #[test]
    fn test_changes_with_route() {
        let changes = BusChanges::from(UpdateBus {
            route: Some(vec![9, 8]),
            ..Default::default()
        });
        assert_eq!(changes.to_set_document(), doc! { "route": [9_i64, 8_i64] });
    }

    #[test]
    fn test_empty_changes() {
        let changes = BusChanges::from(UpdateBus {
            plate: Some(String::new()),
            ..Default::default()
        });
        assert!(changes.is_empty());
        assert!(changes.to_set_document().is_empty());
    }

    #[test]
    fn test_apply_changes() {
        let mut bus = sample_bus();
        let original = bus.clone();
        BusChanges::from(UpdateBus {
            bus_type: Some("ordinary".into()),
            ..Default::default()
        })
        .apply(&mut bus);

        assert_eq!(bus.bus_type, "ordinary");
        assert_eq!(bus.plate, original.plate);
        assert_eq!(bus.number, original.number);
        assert_eq!(bus.route, original.route);
        assert_eq!(bus.id, original.id);
    }
}

//! Structured view of reverse geocoding components
//!
//! Raw components carry free-form type tags. [`StructuralComponent`] sorts
//! them into fixed administrative slots; anything without a slot ends up in
//! `closed_way`, and a later unclassified component replaces an earlier one.

use serde::Serialize;

use crate::models::Component;

/// Address split into administrative levels
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StructuralComponent {
    /// Country
    pub country: Option<String>,
    /// Province (ostan)
    pub province: Option<String>,
    /// County (shahrestan)
    pub county: Option<String>,
    /// District (bakhsh)
    pub district: Option<String>,
    /// Rural district (dehestan)
    pub rural_district: Option<String>,
    /// City
    pub city: Option<String>,
    /// Village or town
    pub village: Option<String>,
    /// Municipal region
    pub region: Option<String>,
    /// Neighbourhood
    pub neighbourhood: Option<String>,
    /// Name of the last component with no matching slot
    pub closed_way: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Country,
    Province,
    County,
    District,
    RuralDistrict,
    City,
    Village,
    Region,
    Neighbourhood,
}

fn slot_for(component_type: &str) -> Option<Slot> {
    match component_type {
        "country" => Some(Slot::Country),
        "province" | "state" => Some(Slot::Province),
        "county" => Some(Slot::County),
        "district" => Some(Slot::District),
        "rural_district" => Some(Slot::RuralDistrict),
        "city" | "meta_city" => Some(Slot::City),
        "village" | "town" | "hamlet" => Some(Slot::Village),
        "region" | "municipality_region" => Some(Slot::Region),
        "neighbourhood" | "meta_neighbourhood" | "suburb" => Some(Slot::Neighbourhood),
        _ => None,
    }
}

impl StructuralComponent {
    /// Classify `components` into slots
    #[must_use]
    pub fn from_components(components: &[Component]) -> Self {
        let mut structural = Self::default();
        for component in components {
            let name = Some(component.name.clone());
            match slot_for(&component.component_type) {
                Some(Slot::Country) => structural.country = name,
                Some(Slot::Province) => structural.province = name,
                Some(Slot::County) => structural.county = name,
                Some(Slot::District) => structural.district = name,
                Some(Slot::RuralDistrict) => structural.rural_district = name,
                Some(Slot::City) => structural.city = name,
                Some(Slot::Village) => structural.village = name,
                Some(Slot::Region) => structural.region = name,
                Some(Slot::Neighbourhood) => structural.neighbourhood = name,
                None => structural.closed_way = name,
            }
        }
        structural
    }
}

/// Structured view of one batch item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructuralResult {
    /// Id of the originating batch item
    pub id: i64,
    /// Classified components
    pub result: StructuralComponent,
}

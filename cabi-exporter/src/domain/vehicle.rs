//! Vehicle categories and their feed-assigned identifiers.

use std::fmt;

/// The vehicle categories the exporter reports on.
///
/// GBFS identifies vehicle types with opaque, feed-specific ids. Each
/// category here is matched against the vehicle type catalog by form factor
/// and propulsion type instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleCategory {
    /// Pedal bicycle.
    Classic,
    /// Pedal-assist electric bicycle.
    EBike,
}

impl VehicleCategory {
    /// All categories, in resolution order.
    pub const ALL: [VehicleCategory; 2] = [VehicleCategory::Classic, VehicleCategory::EBike];

    /// GBFS `form_factor` this category matches.
    pub fn form_factor(self) -> &'static str {
        "bicycle"
    }

    /// GBFS `propulsion_type` this category matches.
    pub fn propulsion_type(self) -> &'static str {
        match self {
            VehicleCategory::Classic => "human",
            VehicleCategory::EBike => "electric_assist",
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleCategory::Classic => write!(f, "classic bike"),
            VehicleCategory::EBike => write!(f, "ebike"),
        }
    }
}

/// Feed-assigned vehicle type ids for every [`VehicleCategory`].
///
/// Both ids are required to construct a catalog, so holders never need to
/// handle a partially resolved one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleTypeCatalog {
    classic: String,
    ebike: String,
}

impl VehicleTypeCatalog {
    /// Create a catalog from the resolved ids.
    pub fn new(classic: impl Into<String>, ebike: impl Into<String>) -> Self {
        Self {
            classic: classic.into(),
            ebike: ebike.into(),
        }
    }

    /// The feed id for a category.
    pub fn id(&self, category: VehicleCategory) -> &str {
        match category {
            VehicleCategory::Classic => &self.classic,
            VehicleCategory::EBike => &self.ebike,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_differ_only_by_propulsion() {
        assert_eq!(
            VehicleCategory::Classic.form_factor(),
            VehicleCategory::EBike.form_factor()
        );
        assert_eq!(VehicleCategory::Classic.propulsion_type(), "human");
        assert_eq!(VehicleCategory::EBike.propulsion_type(), "electric_assist");
    }

    #[test]
    fn catalog_lookup() {
        let catalog = VehicleTypeCatalog::new("1", "2");
        assert_eq!(catalog.id(VehicleCategory::Classic), "1");
        assert_eq!(catalog.id(VehicleCategory::EBike), "2");
    }

    #[test]
    fn display() {
        assert_eq!(VehicleCategory::Classic.to_string(), "classic bike");
        assert_eq!(VehicleCategory::EBike.to_string(), "ebike");
    }
}

//! Station records.

use chrono::{DateTime, Utc};

/// Static attributes of a station, with its region name already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct StationCatalogEntry {
    pub station_id: String,
    pub name: String,
    /// Region name, or empty if the station's region is unknown.
    pub region: String,
    pub capacity: u32,
    /// `None` if the feed omitted the coordinate.
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// One station's live status, denormalized with its catalog attributes.
///
/// Stations reported by the status feed but missing from the catalog still
/// produce a record: name and region are empty, capacity is zero and the
/// coordinates are `None`. Catalog entries without coordinates also carry
/// `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct StationStatusRecord {
    pub station_id: String,
    pub name: String,
    pub region: String,
    pub capacity: u32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    pub ebikes_available: u32,
    pub classic_bikes_available: u32,
    pub docks_available: u32,
    pub bikes_disabled: u32,
    pub docks_disabled: u32,

    /// 1 if the station accepts returns, else 0.
    pub is_returning: u8,
    /// 1 if the station is renting, else 0.
    pub is_renting: u8,
}

impl StationStatusRecord {
    /// Start a record from the station's catalog entry, if it has one.
    ///
    /// Live counts start at zero.
    pub fn from_catalog(station_id: &str, entry: Option<&StationCatalogEntry>) -> Self {
        let (name, region, capacity, latitude, longitude) = match entry {
            Some(e) => (
                e.name.clone(),
                e.region.clone(),
                e.capacity,
                e.latitude,
                e.longitude,
            ),
            None => (String::new(), String::new(), 0, None, None),
        };

        Self {
            station_id: station_id.to_string(),
            name,
            region,
            capacity,
            latitude,
            longitude,
            ebikes_available: 0,
            classic_bikes_available: 0,
            docks_available: 0,
            bikes_disabled: 0,
            docks_disabled: 0,
            is_returning: 0,
            is_renting: 0,
        }
    }
}

/// A composed view of every station reported by the status feed.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Records in status feed order.
    pub stations: Vec<StationStatusRecord>,

    /// When the composition finished.
    pub composed_at: DateTime<Utc>,
}

impl Snapshot {
    /// Wrap freshly composed records, stamped with the current time.
    pub fn new(stations: Vec<StationStatusRecord>) -> Self {
        Self {
            stations,
            composed_at: Utc::now(),
        }
    }

    /// Number of stations in the snapshot.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Whether the status feed reported no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn main_st() -> StationCatalogEntry {
        StationCatalogEntry {
            station_id: "S1".to_string(),
            name: "Main St".to_string(),
            region: "Downtown".to_string(),
            capacity: 10,
            latitude: Some(1.0),
            longitude: Some(2.0),
        }
    }

    #[test]
    fn from_catalog_copies_static_fields() {
        let entry = main_st();
        let record = StationStatusRecord::from_catalog("S1", Some(&entry));

        assert_eq!(record.name, "Main St");
        assert_eq!(record.region, "Downtown");
        assert_eq!(record.capacity, 10);
        assert_eq!(record.latitude, Some(1.0));
        assert_eq!(record.longitude, Some(2.0));
        assert_eq!(record.docks_available, 0);
    }

    #[test]
    fn from_catalog_without_entry_is_blank() {
        let record = StationStatusRecord::from_catalog("S9", None);

        assert_eq!(record.station_id, "S9");
        assert_eq!(record.name, "");
        assert_eq!(record.region, "");
        assert_eq!(record.capacity, 0);
        assert_eq!(record.latitude, None);
        assert_eq!(record.longitude, None);
    }

    #[test]
    fn snapshot_len() {
        let snapshot = Snapshot::new(vec![StationStatusRecord::from_catalog("S1", None)]);
        assert_eq!(snapshot.len(), 1);
        assert!(!snapshot.is_empty());
        assert!(Snapshot::new(Vec::new()).is_empty());
    }
}

//! Station status composition.

use tracing::info;

use crate::domain::{Snapshot, StationStatusRecord, VehicleCategory, VehicleTypeCatalog};
use crate::gbfs::{GbfsClient, StationStatusDto, VehicleTypeCountDto};

use super::catalog::{StationCatalog, fetch_station_catalog};
use super::error::RefreshError;
use super::vehicle_types::fetch_vehicle_type_catalog;

/// Runs the full pipeline against a feed.
///
/// Nothing is cached at this layer; every [`compose`](Self::compose) fetches
/// all four resources again.
#[derive(Debug, Clone)]
pub struct StationComposer {
    client: GbfsClient,
}

impl StationComposer {
    pub fn new(client: GbfsClient) -> Self {
        Self { client }
    }

    /// Fetch regions, station information, vehicle types and station status,
    /// in that order, and join them into a snapshot.
    pub async fn compose(&self) -> Result<Snapshot, RefreshError> {
        let catalog = fetch_station_catalog(&self.client).await?;
        let vehicle_types = fetch_vehicle_type_catalog(&self.client).await?;

        info!("Fetching station statuses");
        let data = self.client.fetch_station_status().await?;

        let stations = compose_records(data.stations, &catalog, &vehicle_types);
        Ok(Snapshot::new(stations))
    }
}

/// Join live status with the catalog, one record per status entry.
///
/// Output order and length follow `statuses`. Stations missing from the
/// catalog still produce a record, with blank static fields.
pub fn compose_records(
    statuses: Vec<StationStatusDto>,
    catalog: &StationCatalog,
    vehicle_types: &VehicleTypeCatalog,
) -> Vec<StationStatusRecord> {
    statuses
        .into_iter()
        .map(|status| {
            let available = |category| {
                vehicles_available(
                    &status.vehicle_types_available,
                    vehicle_types.id(category),
                )
            };

            StationStatusRecord {
                ebikes_available: available(VehicleCategory::EBike),
                classic_bikes_available: available(VehicleCategory::Classic),
                docks_available: status.num_docks_available,
                bikes_disabled: status.num_bikes_disabled,
                docks_disabled: status.num_docks_disabled,
                is_returning: status.is_returning,
                is_renting: status.is_renting,
                ..StationStatusRecord::from_catalog(
                    &status.station_id,
                    catalog.get(&status.station_id),
                )
            }
        })
        .collect()
}

/// Count for the first entry with a matching vehicle type id, or zero.
fn vehicles_available(counts: &[VehicleTypeCountDto], vehicle_type_id: &str) -> u32 {
    counts
        .iter()
        .find(|c| c.vehicle_type_id == vehicle_type_id)
        .map_or(0, |c| c.count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationCatalogEntry;

    fn vehicle_types() -> VehicleTypeCatalog {
        VehicleTypeCatalog::new("classic-id", "ebike-id")
    }

    fn catalog() -> StationCatalog {
        StationCatalog::from([(
            "S1".to_string(),
            StationCatalogEntry {
                station_id: "S1".to_string(),
                name: "Main St".to_string(),
                region: "Downtown".to_string(),
                capacity: 10,
                latitude: Some(1.0),
                longitude: Some(2.0),
            },
        )])
    }

    fn count(id: &str, n: u32) -> VehicleTypeCountDto {
        VehicleTypeCountDto {
            vehicle_type_id: id.to_string(),
            count: n,
        }
    }

    fn status(id: &str, counts: Vec<VehicleTypeCountDto>) -> StationStatusDto {
        StationStatusDto {
            station_id: id.to_string(),
            is_returning: 1,
            is_renting: 1,
            num_docks_available: 3,
            num_docks_disabled: 0,
            num_bikes_disabled: 0,
            vehicle_types_available: counts,
        }
    }

    #[test]
    fn joins_catalog_and_counts() {
        let records = compose_records(
            vec![status("S1", vec![count("ebike-id", 5)])],
            &catalog(),
            &vehicle_types(),
        );

        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.name, "Main St");
        assert_eq!(r.region, "Downtown");
        assert_eq!(r.capacity, 10);
        assert_eq!(r.latitude, Some(1.0));
        assert_eq!(r.longitude, Some(2.0));
        assert_eq!(r.ebikes_available, 5);
        assert_eq!(r.classic_bikes_available, 0);
        assert_eq!(r.docks_available, 3);
        assert_eq!(r.is_returning, 1);
        assert_eq!(r.is_renting, 1);
    }

    #[test]
    fn station_missing_from_catalog_is_still_emitted() {
        let records = compose_records(
            vec![status("S2", vec![count("classic-id", 4)])],
            &catalog(),
            &vehicle_types(),
        );

        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.station_id, "S2");
        assert_eq!(r.name, "");
        assert_eq!(r.region, "");
        assert_eq!(r.capacity, 0);
        assert_eq!(r.latitude, None);
        assert_eq!(r.classic_bikes_available, 4);
        assert_eq!(r.docks_available, 3);
    }

    #[test]
    fn passes_through_disabled_counts_and_flags() {
        let mut s = status("S1", Vec::new());
        s.num_bikes_disabled = 2;
        s.num_docks_disabled = 1;
        s.is_renting = 0;

        let records = compose_records(vec![s], &catalog(), &vehicle_types());

        assert_eq!(records[0].bikes_disabled, 2);
        assert_eq!(records[0].docks_disabled, 1);
        assert_eq!(records[0].is_returning, 1);
        assert_eq!(records[0].is_renting, 0);
    }

    #[test]
    fn preserves_status_feed_order() {
        let records = compose_records(
            vec![
                status("S3", Vec::new()),
                status("S1", Vec::new()),
                status("S2", Vec::new()),
            ],
            &catalog(),
            &vehicle_types(),
        );

        let ids: Vec<&str> = records.iter().map(|r| r.station_id.as_str()).collect();
        assert_eq!(ids, ["S3", "S1", "S2"]);
    }

    #[test]
    fn first_matching_count_wins() {
        assert_eq!(
            vehicles_available(&[count("ebike-id", 5), count("ebike-id", 9)], "ebike-id"),
            5
        );
        assert_eq!(vehicles_available(&[count("other", 5)], "ebike-id"), 0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::StationCatalogEntry;
    use proptest::prelude::*;

    const CLASSIC: &str = "classic-id";
    const EBIKE: &str = "ebike-id";

    fn arb_count() -> impl Strategy<Value = VehicleTypeCountDto> {
        (prop_oneof![Just(CLASSIC), Just(EBIKE), Just("scooter-id")], 0u32..50).prop_map(
            |(id, count)| VehicleTypeCountDto {
                vehicle_type_id: id.to_string(),
                count,
            },
        )
    }

    fn arb_status() -> impl Strategy<Value = StationStatusDto> {
        (0u8..8, prop::collection::vec(arb_count(), 0..4), 0u32..30).prop_map(
            |(id, counts, docks)| StationStatusDto {
                station_id: format!("S{id}"),
                is_returning: 1,
                is_renting: 1,
                num_docks_available: docks,
                num_docks_disabled: 0,
                num_bikes_disabled: 0,
                vehicle_types_available: counts,
            },
        )
    }

    /// Catalog covering an arbitrary subset of station ids S0..S7.
    fn arb_catalog() -> impl Strategy<Value = StationCatalog> {
        prop::collection::btree_set(0u8..8, 0..8).prop_map(|ids| {
            ids.into_iter()
                .map(|id| {
                    let station_id = format!("S{id}");
                    let entry = StationCatalogEntry {
                        station_id: station_id.clone(),
                        name: format!("Station {id}"),
                        region: format!("Region {}", id % 3),
                        capacity: u32::from(id) * 2,
                        latitude: Some(f64::from(id)),
                        longitude: Some(-f64::from(id)),
                    };
                    (station_id, entry)
                })
                .collect::<StationCatalog>()
        })
    }

    fn expected_count(status: &StationStatusDto, id: &str) -> u32 {
        status
            .vehicle_types_available
            .iter()
            .find(|c| c.vehicle_type_id == id)
            .map(|c| c.count)
            .unwrap_or(0)
    }

    proptest! {
        #[test]
        fn output_matches_status_feed(
            statuses in prop::collection::vec(arb_status(), 0..20),
            catalog in arb_catalog(),
        ) {
            let vehicle_types = VehicleTypeCatalog::new(CLASSIC, EBIKE);
            let records = compose_records(statuses.clone(), &catalog, &vehicle_types);

            prop_assert_eq!(records.len(), statuses.len());

            for (record, status) in records.iter().zip(&statuses) {
                prop_assert_eq!(&record.station_id, &status.station_id);
                prop_assert_eq!(record.ebikes_available, expected_count(status, EBIKE));
                prop_assert_eq!(record.classic_bikes_available, expected_count(status, CLASSIC));
                prop_assert_eq!(record.docks_available, status.num_docks_available);

                match catalog.get(&status.station_id) {
                    Some(entry) => {
                        prop_assert_eq!(&record.region, &entry.region);
                        prop_assert_eq!(&record.name, &entry.name);
                        prop_assert_eq!(record.capacity, entry.capacity);
                    }
                    None => {
                        prop_assert_eq!(record.region.as_str(), "");
                        prop_assert_eq!(record.name.as_str(), "");
                        prop_assert_eq!(record.capacity, 0);
                    }
                }
            }
        }
    }
}

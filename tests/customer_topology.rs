mod common;

use billing_db_tools::models::Coordinate;
use billing_db_tools::services::customer_lookup::find_customer_by_username;
use billing_db_tools::services::topology::{self, TopologySummary};

#[tokio::test]
async fn test_lookup_known_username() {
    let t = common::seeded_db().await;

    let customer = find_customer_by_username(&t.db, "andi01").await.unwrap().unwrap();
    assert_eq!(customer.id, 1);
    assert_eq!(customer.name.as_deref(), Some("Andi"));
    assert_eq!(customer.latitude, Some(Coordinate(-6.2)));
    assert_eq!(customer.longitude, Some(Coordinate(106.8)));
    assert!(customer.has_coordinates());
}

#[tokio::test]
async fn test_lookup_customer_without_coordinates() {
    let t = common::seeded_db().await;

    let customer = find_customer_by_username(&t.db, "sari02").await.unwrap().unwrap();
    assert_eq!(customer.id, 2);
    assert!(!customer.has_coordinates());
}

#[tokio::test]
async fn test_lookup_unknown_username() {
    let t = common::seeded_db().await;

    let customer = find_customer_by_username(&t.db, "nobody").await.unwrap();
    assert!(customer.is_none());
}

#[tokio::test]
async fn test_lookup_fails_without_customer_table() {
    let t = common::empty_db().await;

    let err = find_customer_by_username(&t.db, "andi01").await.unwrap_err();
    assert_eq!(err.error_code(), "PERSISTENCE_ERROR");
}

#[tokio::test]
async fn test_list_devices_with_odp_links() {
    let t = common::seeded_db().await;

    let devices = topology::list_onu_devices(&t.db).await.unwrap();
    assert_eq!(devices.len(), 3);

    assert_eq!(devices[0].device.name.as_deref(), Some("ONU-1"));
    assert_eq!(
        devices[0].odp.as_ref().and_then(|o| o.name.as_deref()),
        Some("ODP-A")
    );
    assert!(!devices[0].has_dangling_odp());

    assert!(devices[1].odp.is_none());
    assert!(!devices[1].has_dangling_odp());

    assert_eq!(devices[2].device.odp_id, Some(99));
    assert!(devices[2].has_dangling_odp());
}

#[tokio::test]
async fn test_topology_summary() {
    let t = common::seeded_db().await;

    let devices = topology::list_onu_devices(&t.db).await.unwrap();
    let odps = topology::list_odps(&t.db).await.unwrap();
    let summary = TopologySummary::from_entries(&devices, &odps);

    assert_eq!(
        summary,
        TopologySummary {
            device_count: 3,
            odp_count: 2,
            devices_without_coordinates: 1,
            devices_without_odp: 1,
            devices_with_dangling_odp: 1,
            devices_without_customer: 1,
            odps_without_coordinates: 1,
        }
    );
}

#[tokio::test]
async fn test_lookup_reads_text_coordinates() {
    let t = common::loosely_typed_db().await;

    let customer = find_customer_by_username(&t.db, "andi01").await.unwrap().unwrap();
    assert_eq!(customer.name.as_deref(), Some("Andi"));
    assert_eq!(customer.latitude, Some(Coordinate(-6.2)));
    assert_eq!(customer.longitude, Some(Coordinate(106.8)));
    assert!(customer.has_coordinates());
}

#[tokio::test]
async fn test_lookup_customer_with_null_name_and_blank_coordinates() {
    let t = common::loosely_typed_db().await;

    let customer = find_customer_by_username(&t.db, "anon03").await.unwrap().unwrap();
    assert_eq!(customer.id, 2);
    assert!(customer.name.is_none());
    assert!(customer.latitude.is_none());
    assert!(!customer.has_coordinates());
}

#[tokio::test]
async fn test_list_devices_with_loosely_typed_columns() {
    let t = common::loosely_typed_db().await;

    let devices = topology::list_onu_devices(&t.db).await.unwrap();
    assert_eq!(devices.len(), 3);

    let first = &devices[0];
    assert_eq!(first.device.latitude, Some(Coordinate(-6.2)));
    let odp = first.odp.as_ref().unwrap();
    assert!(odp.name.is_none());
    assert_eq!(odp.latitude, Some(Coordinate(-6.21)));
    assert_eq!(odp.longitude, Some(Coordinate(107.0)));

    let second = &devices[1];
    assert!(second.device.name.is_none());
    let odp = second.odp.as_ref().unwrap();
    assert_eq!(odp.name.as_deref(), Some("ODP-B"));
    assert_eq!(odp.latitude, Some(Coordinate(-6.3)));
    assert!(odp.longitude.is_none());

    assert!(devices[2].device.latitude.is_none());
    assert_eq!(devices[2].device.longitude, Some(Coordinate(106.9)));

    let odps = topology::list_odps(&t.db).await.unwrap();
    let summary = TopologySummary::from_entries(&devices, &odps);
    assert_eq!(
        summary,
        TopologySummary {
            device_count: 3,
            odp_count: 2,
            devices_without_coordinates: 2,
            devices_without_odp: 1,
            devices_with_dangling_odp: 0,
            devices_without_customer: 1,
            odps_without_coordinates: 1,
        }
    );
}

//! Data model tests through the public API.

use fiware_datamodel::{
    Category, ControlledProperty, Core, DataModelError, Device, DeviceModel, Geometry, LatLng,
    Location, SupportedProtocol, NGSI_LD_PREFIX,
};
use serde_json::json;

#[test]
fn test_core_identifier_scenario() {
    let core = Core::new("test", "Test").unwrap();
    assert_eq!(core.id.as_str(), format!("{}:Test:test", NGSI_LD_PREFIX));
    assert_eq!(core.type_name, "Test");
}

#[test]
fn test_stamp_twice() {
    let mut core = Core::new("room1", "Room").unwrap();
    core.stamp();
    assert_eq!(core.date_created, core.date_modified);

    let created = core.date_created;
    std::thread::sleep(std::time::Duration::from_millis(5));
    core.stamp();
    assert_eq!(core.date_created, created);
    assert!(core.date_modified > core.date_created);
}

#[test]
fn test_device_from_upstream_json() {
    let body = json!({
        "id": "urn:ngsi-ld:Device:device-9845A",
        "type": "Device",
        "category": ["sensor"],
        "controlledProperty": ["fillingLevel", "temperature"],
        "supportedProtocol": ["lora"],
        "serialNumber": "9845A",
        "batteryLevel": 0.75,
        "rssi": -1.0,
        "dateFirstUsed": "2014-09-11T11:00:00Z",
        "deviceState": "ok",
        "refDeviceModel": "urn:ngsi-ld:DeviceModel:myDevice-wastecontainer-sensor-345",
        "location": {"type": "Point", "coordinates": [-3.164485591715449, 40.62785133667262]}
    });

    let device: Device = serde_json::from_value(body).unwrap();
    assert_eq!(device.core.type_name, Device::TYPE);
    assert_eq!(device.common.category, vec![Category::Sensor]);
    assert_eq!(
        device.common.controlled_property,
        vec![ControlledProperty::FillingLevel, ControlledProperty::Temperature]
    );
    assert_eq!(device.common.supported_protocol, vec![SupportedProtocol::Lora]);
    assert_eq!(device.serial_number.as_deref(), Some("9845A"));
    assert!(matches!(device.location, Some(Geometry::Point { .. })));
    assert_eq!(
        device.ref_device_model.as_ref().map(|id| id.as_str()),
        Some("urn:ngsi-ld:DeviceModel:myDevice-wastecontainer-sensor-345")
    );
}

#[test]
fn test_device_too_long_id() {
    let base = "x".repeat(250);
    let err = Device::new(&base, Category::Meter, ControlledProperty::Energy).unwrap_err();
    assert!(matches!(err, DataModelError::TooLongIdLength { length: 256, .. }));
}

#[test]
fn test_model_and_device_link() {
    let model = DeviceModel::new(
        "wastecontainer-sensor-345",
        Category::Sensor,
        ControlledProperty::FillingLevel,
        "Acme",
        "S4Container 345",
        "Acme Inc.",
    )
    .unwrap();
    let device = Device::new("9845A", Category::Sensor, ControlledProperty::FillingLevel)
        .unwrap()
        .with_model(&model);

    let json = serde_json::to_value(&device).unwrap();
    assert_eq!(
        json["refDeviceModel"],
        "urn:ngsi-ld:DeviceModel:wastecontainer-sensor-345"
    );
}

#[test]
fn test_location_and_lat_lng() {
    let location = Location::with_geometry("MultiPoint").unwrap();
    let json = serde_json::to_value(&location).unwrap();
    assert_eq!(json["location"]["type"], "MultiPoint");

    assert!(!LatLng::new(-100.0, 10.0).is_valid());
}

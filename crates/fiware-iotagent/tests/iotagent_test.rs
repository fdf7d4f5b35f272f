//! IoT Agent accessor tests against a mock agent
//!
//! Covers:
//! - About and log level on the provisioning API
//! - Device and service group provisioning, with tenant stamping
//! - JSON measures on the report API
//! - Remote error bodies and the 404 device case

use fiware_iotagent::{
    Device, DeviceAttribute, IotAgentAccessor, IotAgentConfig, IotAgentError, LogLevel,
    ServiceGroup, Tenant, UnitCode,
};
use fiware_testing::{init_tracing, Method, MockResponse, MockServer};
use serde_json::json;

fn accessor(server: &MockServer) -> IotAgentAccessor {
    IotAgentAccessor::new(IotAgentConfig::new(server.url(), server.url())).unwrap()
}

fn tenant() -> Tenant {
    Tenant::new("openiot", "/")
}

#[tokio::test]
async fn test_get_about() {
    init_tracing();
    let server = MockServer::start().await.unwrap();
    server.mock(
        Method::GET,
        "/iot/about",
        MockResponse::json(
            200,
            json!({"libVersion": "2.12.0", "port": "4041", "baseRoot": "/", "version": "1.14.0"}),
        ),
    );

    let about = accessor(&server).get_about().await.unwrap();
    assert_eq!(about.port, 4041);
    assert_eq!(about.lib_version, "2.12.0");
    assert_eq!(about.version, "1.14.0");

    let request = server.last_request().unwrap();
    assert_eq!(request.header("accept"), Some("application/json"));
    assert_eq!(request.header("cache-control"), Some("no-cache"));
    assert!(request.header("fiware-service").is_none());
}

#[tokio::test]
async fn test_get_about_bad_port() {
    let server = MockServer::start().await.unwrap();
    server.mock(
        Method::GET,
        "/iot/about",
        MockResponse::json(
            200,
            json!({"libVersion": "2.12.0", "port": "http", "baseRoot": "/", "version": "1.14.0"}),
        ),
    );

    let err = accessor(&server).get_about().await.unwrap_err();
    assert!(matches!(err, IotAgentError::InvalidPort(port) if port == "http"));
}

#[tokio::test]
async fn test_log_level() {
    let server = MockServer::start().await.unwrap();
    server.mock(Method::GET, "/admin/log", MockResponse::json(200, json!({"level": "DEBUG"})));
    server.mock(Method::PUT, "/admin/log", MockResponse::empty(200));

    let iota = accessor(&server);
    assert_eq!(iota.get_log_level().await.unwrap(), LogLevel::Debug);

    iota.update_log_level(LogLevel::Error).await.unwrap();
    let request = server.last_request().unwrap();
    assert_eq!(request.method, Method::PUT);
    assert_eq!(request.query_param("level").as_deref(), Some("ERROR"));
}

#[tokio::test]
async fn test_create_devices_stamps_tenant() {
    let server = MockServer::start().await.unwrap();
    server.mock(Method::POST, "/iot/devices", MockResponse::empty(201));

    let mut device = Device::new("temp001", "urn:ngsi-ld:Thermometer:001", "Thermometer");
    device.service = Some("someone-else".to_string());
    device.attributes = vec![DeviceAttribute::new("temperature", "Float")
        .with_object_id("t")
        .with_unit(UnitCode::Fahrenheit)];

    accessor(&server)
        .create_devices(&tenant(), &[device])
        .await
        .unwrap();

    let request = server.last_request().unwrap();
    assert_eq!(request.header("fiware-service"), Some("openiot"));
    assert_eq!(request.header("fiware-servicepath"), Some("/"));
    assert_eq!(request.header("content-type"), Some("application/json"));

    let body = request.json().unwrap();
    let sent = &body["devices"][0];
    assert_eq!(sent["device_id"], "temp001");
    assert_eq!(sent["service"], "openiot");
    assert_eq!(sent["service_path"], "/");
    assert_eq!(sent["attributes"][0]["object_id"], "t");
    assert_eq!(sent["attributes"][0]["metadata"]["unitCode"]["value"], "FAH");
}

#[tokio::test]
async fn test_list_devices() {
    let server = MockServer::start().await.unwrap();
    server.mock(
        Method::GET,
        "/iot/devices",
        MockResponse::json(
            200,
            json!({"count": 2, "devices": [
                {"device_id": "a", "entity_name": "A", "entity_type": "Thing"},
                {"device_id": "b", "entity_name": "B", "entity_type": "Thing"}
            ]}),
        ),
    );

    let iota = accessor(&server);
    let list = iota.list_devices(&tenant(), Some(10), Some(20)).await.unwrap();
    assert_eq!(list.count, 2);
    assert_eq!(list.devices[1].device_id, "b");

    let request = server.last_request().unwrap();
    assert_eq!(request.query_param("limit").as_deref(), Some("10"));
    assert_eq!(request.query_param("offset").as_deref(), Some("20"));

    iota.list_devices(&tenant(), None, None).await.unwrap();
    assert_eq!(server.last_request().unwrap().query, None);
}

#[tokio::test]
async fn test_get_device() {
    let server = MockServer::start().await.unwrap();
    server.mock(
        Method::GET,
        "/iot/devices/temp001",
        MockResponse::json(
            200,
            json!({"device_id": "temp001", "entity_name": "T", "entity_type": "Thermometer", "protocol": "IoTA-JSON"}),
        ),
    );

    let iota = accessor(&server);
    let device = iota.get_device(&tenant(), "temp001").await.unwrap();
    assert_eq!(device.protocol, "IoTA-JSON");

    let err = iota.get_device(&tenant(), "missing").await.unwrap_err();
    assert!(matches!(err, IotAgentError::DeviceNotFound(ref id) if id == "missing"));
    assert_eq!(err.status(), Some(reqwest::StatusCode::NOT_FOUND));
}

#[tokio::test]
async fn test_update_and_delete_device() {
    let server = MockServer::start().await.unwrap();
    server.mock(Method::PUT, "/iot/devices/temp001", MockResponse::empty(204));
    server.mock(Method::DELETE, "/iot/devices/temp001", MockResponse::empty(204));

    let iota = accessor(&server);
    iota.update_device(&tenant(), "temp001", &json!({"entity_name": "urn:ngsi-ld:T:2"}))
        .await
        .unwrap();
    let request = server.last_request().unwrap();
    assert_eq!(request.json().unwrap(), json!({"entity_name": "urn:ngsi-ld:T:2"}));

    iota.delete_device(&tenant(), "temp001").await.unwrap();
    let request = server.last_request().unwrap();
    assert_eq!(request.method, Method::DELETE);
    assert!(request.header("content-type").is_none());
}

#[tokio::test]
async fn test_remote_error() {
    let server = MockServer::start().await.unwrap();
    server.mock(
        Method::POST,
        "/iot/devices",
        MockResponse::json(
            409,
            json!({"name": "DUPLICATE_DEVICE_ID", "message": "Duplicate device id"}),
        ),
    );

    let err = accessor(&server)
        .create_devices(&tenant(), &[Device::new("a", "A", "Thing")])
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(reqwest::StatusCode::CONFLICT));
    match err {
        IotAgentError::Common(e) => {
            let remote = e.remote().unwrap();
            assert_eq!(remote.name, "DUPLICATE_DEVICE_ID");
            assert_eq!(remote.message, "Duplicate device id");
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[tokio::test]
async fn test_invalid_tenant_is_not_sent() {
    let server = MockServer::start().await.unwrap();
    let err = accessor(&server)
        .list_devices(&Tenant::new("Open-IoT", "/"), None, None)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        IotAgentError::Common(fiware_common::Error::InvalidServiceName)
    ));
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn test_service_groups() {
    let server = MockServer::start().await.unwrap();
    server.mock(Method::POST, "/iot/services", MockResponse::empty(201));
    server.mock(
        Method::GET,
        "/iot/services",
        MockResponse::json(
            200,
            json!({"count": 1, "services": [{
                "service": "openiot",
                "subservice": "/",
                "resource": "/iot/json",
                "apikey": "key",
                "entity_type": "Thing",
                "cbHost": "http://orion:1026"
            }]}),
        ),
    );
    server.mock(Method::PUT, "/iot/services", MockResponse::empty(204));
    server.mock(Method::DELETE, "/iot/services", MockResponse::empty(204));

    let iota = accessor(&server);
    iota.create_service_groups(&tenant(), &[ServiceGroup::new("/iot/json", "key", "Thing")])
        .await
        .unwrap();
    let body = server.last_request().unwrap().json().unwrap();
    assert_eq!(body["services"][0]["service"], "openiot");
    assert_eq!(body["services"][0]["subservice"], "/");
    assert_eq!(body["services"][0]["resource"], "/iot/json");
    assert!(body.get("count").is_none());

    let list = iota.list_service_groups(&tenant()).await.unwrap();
    assert_eq!(list.services.len(), 1);
    assert_eq!(list.services[0].cb_host.as_deref(), Some("http://orion:1026"));

    iota.update_service_group(&tenant(), "/iot/json", "key", &json!({"entity_type": "Other"}))
        .await
        .unwrap();
    let request = server.last_request().unwrap();
    assert_eq!(request.query_param("resource").as_deref(), Some("/iot/json"));
    assert_eq!(request.query_param("apikey").as_deref(), Some("key"));

    iota.delete_service_group(&tenant(), "/iot/json", "key")
        .await
        .unwrap();
    let request = server.last_request().unwrap();
    assert_eq!(request.method, Method::DELETE);
    assert_eq!(request.header("fiware-service"), Some("openiot"));
}

#[tokio::test]
async fn test_json_reports() {
    let server = MockServer::start().await.unwrap();
    server.mock(Method::POST, "/iot/json", MockResponse::empty(200));

    let iota = accessor(&server);
    iota.send_json_report(&tenant(), "key", "temp001", &json!({"t": 21.5}))
        .await
        .unwrap();
    let request = server.last_request().unwrap();
    assert_eq!(request.query_param("k").as_deref(), Some("key"));
    assert_eq!(request.query_param("i").as_deref(), Some("temp001"));
    assert_eq!(request.json().unwrap(), json!({"t": 21.5}));

    iota.send_json_text_report(&tenant(), "key", "temp001", r#"{"t":22}"#)
        .await
        .unwrap();
    let request = server.last_request().unwrap();
    assert_eq!(request.text(), r#"{"t":22}"#);
    assert_eq!(request.header("content-type"), Some("application/json"));
}

//! Canned response bodies.

use serde_json::{json, Value};

/// Body of `GET /v2` on a stock Orion.
pub fn entry_points_body() -> Value {
    json!({
        "entities_url": "/v2/entities",
        "types_url": "/v2/types",
        "subscriptions_url": "/v2/subscriptions",
        "registrations_url": "/v2/registrations"
    })
}

/// Body of `GET /version` on Orion 2.2.0.
pub fn orion_version_body() -> Value {
    json!({
        "orion": {
            "version": "2.2.0",
            "uptime": "0 d, 2 h, 3 m, 4 s",
            "git_hash": "5a46a70de9e0b809cce1a1b7295027eea0aa757f",
            "compile_time": "Thu Feb 21 10:28:42 UTC 2019",
            "compiled_by": "root",
            "compiled_in": "442fc4d225cc",
            "release_date": "Thu Feb 21 10:28:42 UTC 2019",
            "doc": "https://fiware-orion.rtfd.io/en/2.2.0/"
        }
    })
}

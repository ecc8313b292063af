//! Tests for endpoint wire types.

use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;

use super::{
    CreateEndpointResponse, Endpoint, EndpointData, EndpointToggleStatus, STATUS_PAUSED,
    UpsertEndpointParams,
};

mod endpoint_decoding {
    use super::*;

    #[test]
    fn decodes_full_endpoint_envelope() {
        let body = json!({
            "message": "Endpoint fetched successfully",
            "status": true,
            "data": {
                "uid": "e1",
                "name": "orders",
                "url": "https://hooks.example.com/orders",
                "description": "order events",
                "project_id": "p1",
                "owner_id": "tenant-7",
                "status": "active",
                "events": 12,
                "http_timeout": 10,
                "rate_limit": 5000,
                "rate_limit_duration": 60,
                "support_email": "ops@example.com",
                "slack_webhook_url": "https://hooks.slack.com/x",
                "created_at": "2024-03-01T10:00:00Z",
                "updated_at": "2024-03-02T11:30:00Z",
                "deleted_at": null
            }
        });

        let endpoint: Endpoint = serde_json::from_value(body).unwrap();

        assert!(endpoint.status);
        assert_eq!(endpoint.data.uid, "e1");
        assert_eq!(endpoint.data.project_id, "p1");
        assert_eq!(endpoint.data.http_timeout, 10);
        assert_eq!(endpoint.data.rate_limit_duration, 60);
        assert_eq!(
            endpoint.data.created_at,
            Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap()
        );
        assert!(!endpoint.data.is_deleted());
        assert!(!endpoint.data.is_paused());
    }

    #[test]
    fn deletion_timestamp_marks_endpoint_deleted() {
        let body = json!({
            "data": { "uid": "e1", "status": "paused", "deleted_at": "2024-04-01T00:00:00Z" }
        });

        let endpoint: Endpoint = serde_json::from_value(body).unwrap();

        assert!(endpoint.data.is_deleted());
        assert!(endpoint.data.is_paused());
        assert_eq!(endpoint.data.status, STATUS_PAUSED);
    }

    #[test]
    fn missing_and_unknown_fields_are_tolerated() {
        let body = json!({ "data": { "uid": "e1", "authentication": { "type": "api_key" } } });

        let endpoint: Endpoint = serde_json::from_value(body).unwrap();

        assert_eq!(endpoint.data.uid, "e1");
        assert_eq!(endpoint.message, "");
        assert_eq!(endpoint.data.rate_limit, 0);
    }

    #[test]
    fn null_timestamps_and_data_decode_as_defaults() {
        let endpoint: Endpoint = serde_json::from_str(
            r#"{"data":{"uid":"e1","created_at":null,"updated_at":null,"deleted_at":null}}"#,
        )
        .unwrap();
        let empty: Endpoint = serde_json::from_str(r#"{"status":false,"data":null}"#).unwrap();

        assert_eq!(endpoint.data.uid, "e1");
        assert_eq!(endpoint.data.created_at, DateTime::<Utc>::default());
        assert_eq!(endpoint.data.updated_at, DateTime::<Utc>::default());
        assert!(!endpoint.data.is_deleted());
        assert_eq!(empty.data, EndpointData::default());
    }

    #[test]
    fn negative_counters_are_accepted() {
        let endpoint: Endpoint =
            serde_json::from_str(r#"{"data":{"rate_limit":-1,"http_timeout":-5}}"#).unwrap();

        assert_eq!(endpoint.data.rate_limit, -1);
        assert_eq!(endpoint.data.http_timeout, -5);
    }

    #[test]
    fn wrong_field_type_is_rejected() {
        let result = serde_json::from_str::<Endpoint>(r#"{"data": {"rate_limit": "many"}}"#);

        assert!(result.is_err());
    }
}

mod upsert_params {
    use super::*;

    #[test]
    fn serializes_every_field_with_wire_names() {
        let params = UpsertEndpointParams {
            advanced_signatures: true,
            app_id: "app-1".to_string(),
            http_timeout: 10,
            owner_id: "tenant-7".to_string(),
            rate_limit: 100,
            rate_limit_duration: 60,
            secret: "s3cr3t".to_string(),
            ..UpsertEndpointParams::new("orders", "https://hooks.example.com/orders")
        };

        let value = serde_json::to_value(&params).unwrap();

        assert_eq!(
            value,
            json!({
                "name": "orders",
                "url": "https://hooks.example.com/orders",
                "advanced_signatures": true,
                "appID": "app-1",
                "description": "",
                "http_timeout": 10,
                "is_disabled": false,
                "owner_id": "tenant-7",
                "rate_limit": 100,
                "rate_limit_duration": 60,
                "secret": "s3cr3t",
                "slack_webhook_url": "",
                "support_email": ""
            })
        );
    }

    #[test]
    fn debug_redacts_secret() {
        let params = UpsertEndpointParams {
            secret: "s3cr3t".to_string(),
            ..UpsertEndpointParams::new("orders", "https://hooks.example.com/orders")
        };

        let debug = format!("{params:?}");

        assert!(!debug.contains("s3cr3t"));
        assert!(debug.contains("<redacted>"));
        assert!(debug.contains("orders"));
    }
}

mod responses {
    use super::*;

    #[test]
    fn create_response_exposes_uid_and_status() {
        let body = r#"{"status":true,"message":"created","data":{"uid":"e9","status":"active"}}"#;

        let response: CreateEndpointResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.data.uid, "e9");
        assert_eq!(response.data.status, "active");
    }

    #[test]
    fn toggle_status_reads_nested_status() {
        let response: EndpointToggleStatus =
            serde_json::from_str(r#"{"data":{"status":"active"}}"#).unwrap();

        assert_eq!(response.data.status, "active");
    }

    #[test]
    fn toggle_status_with_null_data_is_empty() {
        let response: EndpointToggleStatus = serde_json::from_str(r#"{"data":null}"#).unwrap();

        assert_eq!(response.data.status, "");
    }
}

#![allow(clippy::unwrap_used)]
// End-to-end tests for `TemplateService` against a mocked appliance.

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use url::Url;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ome_api::{OmeClient, TransportConfig};
use ome_core::{
    AttributeEdit, AttributeRef, CoreError, TemplateService, VlanRecord, VlanUpdate, flatten_all,
    resolve,
};

// ── Fixtures ────────────────────────────────────────────────────────

fn attribute_details() -> Value {
    json!({
        "Id": 12,
        "Name": "R740 baseline",
        "AttributeGroups": [
            {
                "GroupNameId": 1,
                "DisplayName": "BIOS",
                "SubAttributeGroups": [
                    {
                        "GroupNameId": 11,
                        "DisplayName": "Boot Settings",
                        "SubAttributeGroups": [],
                        "Attributes": [
                            { "AttributeId": 100, "DisplayName": "Boot Mode", "Value": "Uefi", "IsIgnored": false },
                            { "AttributeId": 101, "DisplayName": "Hdd Failover", "Value": "Disabled", "IsIgnored": true }
                        ]
                    },
                    {
                        "GroupNameId": 12,
                        "DisplayName": "Processor Settings",
                        "SubAttributeGroups": [{
                            "GroupNameId": 121,
                            "DisplayName": "Virtualization",
                            "SubAttributeGroups": [],
                            "Attributes": [
                                { "AttributeId": 200, "DisplayName": "Virtualization Technology", "Value": "Enabled", "IsIgnored": false }
                            ]
                        }],
                        "Attributes": []
                    }
                ],
                "Attributes": []
            },
            {
                "GroupNameId": 2,
                "DisplayName": "iDRAC",
                "SubAttributeGroups": [],
                "Attributes": [
                    { "AttributeId": 300, "DisplayName": "Time Zone", "Value": "UTC", "IsIgnored": false }
                ]
            }
        ]
    })
}

fn partition(component_id: i64, bonded: &str, tagged: &str, untagged: &str) -> Value {
    json!({
        "GroupNameId": 1,
        "DisplayName": "Partition 1",
        "SubAttributeGroups": [],
        "Attributes": [
            { "CustomId": component_id, "DisplayName": "NIC Bonding Enabled", "Value": bonded },
            { "CustomId": component_id, "DisplayName": "Vlan Tagged", "Value": tagged },
            { "CustomId": component_id, "DisplayName": "Vlan UnTagged", "Value": untagged }
        ]
    })
}

fn network_view() -> Value {
    json!({
        "Id": 12,
        "AttributeGroups": [
            {
                "GroupNameId": 1001,
                "DisplayName": "NicBondingTechnology",
                "SubAttributeGroups": [],
                "Attributes": [
                    { "CustomId": 0, "DisplayName": "Nic Bonding Technology", "Value": "NoTeaming" }
                ]
            },
            {
                "GroupNameId": 1002,
                "DisplayName": "NICModel",
                "SubAttributeGroups": [{
                    "GroupNameId": 0,
                    "DisplayName": "Integrated NIC 1",
                    "SubAttributeGroups": [
                        {
                            "GroupNameId": 1,
                            "DisplayName": "Port 1",
                            "SubAttributeGroups": [partition(1049, "false", "10133, 10594", "0")],
                            "Attributes": []
                        },
                        {
                            "GroupNameId": 2,
                            "DisplayName": "Port 2",
                            "SubAttributeGroups": [],
                            "Attributes": []
                        }
                    ],
                    "Attributes": []
                }],
                "Attributes": []
            }
        ]
    })
}

async fn setup() -> (MockServer, TemplateService) {
    let server = MockServer::start().await;
    let base = Url::parse(&server.uri()).unwrap();
    let client = OmeClient::new(base, &TransportConfig::default()).unwrap();
    (server, TemplateService::with_client(client))
}

async fn mount_details(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/TemplateService/Templates(12)/AttributeDetails"))
        .respond_with(ResponseTemplate::new(200).set_body_json(attribute_details()))
        .mount(server)
        .await;
}

async fn mount_network_view(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(
            "/api/TemplateService/Templates(12)/Views(4)/AttributeViewDetails",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(network_view()))
        .mount(server)
        .await;
}

// ── Attribute tree ──────────────────────────────────────────────────

#[tokio::test]
async fn list_attributes_flattens_the_fetched_tree() {
    let (server, service) = setup().await;
    mount_details(&server).await;

    let flat = service.list_attributes(12).await.unwrap();
    let paths: Vec<_> = flat.iter().map(|f| f.display_name.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "BIOS,Boot Settings,Boot Mode",
            "BIOS,Boot Settings,Hdd Failover",
            "BIOS,Processor Settings,Virtualization,Virtualization Technology",
            "iDRAC,Time Zone",
        ]
    );
}

#[tokio::test]
async fn flattened_paths_round_trip_through_resolve() {
    let (server, service) = setup().await;
    mount_details(&server).await;

    let tree = service.attribute_tree(12).await.unwrap();
    let flat = flatten_all(&tree);
    assert_eq!(flat.len(), 4);
    for entry in &flat {
        let attr = resolve(&entry.display_name.as_str().into(), entry.attribute_id, &tree).unwrap();
        assert_eq!(attr.value, entry.value);
        assert_eq!(attr.is_ignored, entry.is_ignored);
    }
}

#[tokio::test]
async fn get_attribute_discriminates_failures() {
    let (server, service) = setup().await;
    mount_details(&server).await;

    let found = service
        .get_attribute(12, "BIOS,Boot Settings,Boot Mode", 100)
        .await
        .unwrap();
    assert_eq!(found.value, "Uefi");

    let group = service.get_attribute(12, "RAID,Mode", 1).await.unwrap_err();
    assert!(matches!(group, CoreError::AttributeGroupNotFound { .. }), "got {group:?}");

    let sub = service
        .get_attribute(12, "BIOS,Memory Settings,Node Interleave", 1)
        .await
        .unwrap_err();
    assert!(matches!(sub, CoreError::SubAttributeGroupNotFound { .. }), "got {sub:?}");

    let attr = service
        .get_attribute(12, "BIOS,Boot Settings,Boot Mode", 999)
        .await
        .unwrap_err();
    assert!(matches!(attr, CoreError::AttributeNotFound { .. }), "got {attr:?}");
}

#[tokio::test]
async fn refresh_returns_current_values() {
    let (server, service) = setup().await;
    mount_details(&server).await;

    let refs = [AttributeRef {
        display_name: "iDRAC,Time Zone".into(),
        attribute_id: 300,
    }];
    let refreshed = service.refresh_attributes(12, &refs).await.unwrap();
    assert_eq!(refreshed.len(), 1);
    assert_eq!(refreshed[0].value, "UTC");
}

#[tokio::test]
async fn set_attributes_puts_resolved_values() {
    let (server, service) = setup().await;
    mount_details(&server).await;

    Mock::given(method("PUT"))
        .and(path("/api/TemplateService/Templates(12)"))
        .and(body_json(json!({
            "Id": 12,
            "Attributes": [{ "Id": 100, "Value": "Bios", "IsIgnored": false }]
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let edits = [AttributeEdit {
        display_name: "BIOS,Boot Settings,Boot Mode".into(),
        attribute_id: 100,
        value: "Bios".into(),
        is_ignored: false,
    }];
    service.set_attributes(12, &edits).await.unwrap();
}

#[tokio::test]
async fn missing_template_is_not_found() {
    let (server, service) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "@Message.ExtendedInfo": [{ "MessageId": "CTEM1004", "Message": "Template not found." }]
            }
        })))
        .mount(&server)
        .await;

    let err = service.list_attributes(77).await.unwrap_err();
    assert!(err.is_not_found(), "got {err:?}");
}

// ── VLAN view ───────────────────────────────────────────────────────

#[tokio::test]
async fn vlan_reads_one_port() {
    let (server, service) = setup().await;
    mount_network_view(&server).await;

    let record = service.vlan(12, "Integrated NIC 1", 1).await.unwrap();
    assert_eq!(record.component_id, 1049);
    assert_eq!(record.tagged, vec![10133, 10594]);
    assert_eq!(record.untagged, 0);
    assert!(!record.is_nic_bonded);

    let err = service.vlan(12, "NIC Invalid 1", 1).await.unwrap_err();
    assert!(matches!(err, CoreError::InvalidNetworkDetails { .. }));
}

#[tokio::test]
async fn vlan_config_keeps_ports_without_partitions() {
    let (server, service) = setup().await;
    mount_network_view(&server).await;

    let config = service.vlan_config(12).await.unwrap();
    assert_eq!(config.bonding_technology, "NoTeaming");
    assert_eq!(config.records.len(), 2);
    assert_eq!(config.records[1], VlanRecord::empty("Integrated NIC 1", 2));
}

#[tokio::test]
async fn update_vlans_reuses_current_bonding_mode() {
    let (server, service) = setup().await;
    mount_network_view(&server).await;

    Mock::given(method("POST"))
        .and(path(
            "/api/TemplateService/Actions/TemplateService.UpdateNetworkConfig",
        ))
        .and(body_json(json!({
            "TemplateId": 12,
            "IdentityPoolId": 4,
            "BondingTechnology": "NoTeaming",
            "PropagateVlan": false,
            "VlanAttributes": [
                { "ComponentId": 1049, "Untagged": 10133, "Tagged": [], "IsNicBonded": false }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(true)))
        .expect(1)
        .mount(&server)
        .await;

    let mut record = service.vlan(12, "Integrated NIC 1", 1).await.unwrap();
    record.tagged.clear();
    record.untagged = 10133;

    let update = VlanUpdate {
        identity_pool_id: 4,
        bonding_technology: None,
        propagate_vlan: false,
        records: vec![record],
    };
    let sent = service.update_vlans(12, &update).await.unwrap();
    assert_eq!(sent.bonding_technology, "NoTeaming");
}

#[tokio::test]
async fn update_vlans_rejects_empty_batch() {
    let (_server, service) = setup().await;

    let update = VlanUpdate {
        identity_pool_id: 4,
        bonding_technology: Some("LACP".into()),
        propagate_vlan: true,
        records: vec![],
    };
    let err = service.update_vlans(12, &update).await.unwrap_err();
    assert!(matches!(err, CoreError::ValidationFailed { .. }));
}

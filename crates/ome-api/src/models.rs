// Template API wire types
//
// Models for the appliance's TemplateService and SessionService JSON.
// The backend emits PascalCase keys and is inconsistent about field
// presence between the attribute-details and network-view endpoints, so
// most fields carry `#[serde(default)]`.

use serde::{Deserialize, Serialize};

// ── Attribute tree ──────────────────────────────────────────────────

/// Response body of both `Templates({id})/AttributeDetails` and
/// `Templates({id})/Views(4)/AttributeViewDetails`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateAttributeDetails {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub attribute_groups: Vec<AttributeGroup>,
}

/// One node of the attribute tree as it arrives on the wire.
///
/// Real payloads populate exactly one of `sub_attribute_groups` and
/// `attributes`; the core decides branch vs. leaf from that.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeGroup {
    #[serde(default)]
    pub group_name_id: i64,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub sub_attribute_groups: Vec<AttributeGroup>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

/// A terminal setting.
///
/// The attribute-details endpoint fills `attribute_id`; the network view
/// fills `custom_id` (the NIC partition's component id) instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Attribute {
    #[serde(default)]
    pub attribute_id: i64,
    #[serde(default)]
    pub custom_id: i64,
    #[serde(default)]
    pub display_name: String,
    /// Values are strings regardless of type; `null` shows up for unset ones.
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub is_ignored: bool,
    #[serde(default)]
    pub is_read_only: bool,
}

// ── Update bodies ───────────────────────────────────────────────────

/// Body of `POST /api/TemplateService/Actions/TemplateService.UpdateNetworkConfig`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkConfigUpdate {
    pub template_id: i64,
    pub identity_pool_id: i64,
    pub bonding_technology: String,
    pub propagate_vlan: bool,
    pub vlan_attributes: Vec<VlanAttributeUpdate>,
}

/// Per-partition VLAN settings inside [`NetworkConfigUpdate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VlanAttributeUpdate {
    pub component_id: i64,
    pub untagged: i64,
    pub tagged: Vec<i64>,
    pub is_nic_bonded: bool,
}

/// Body of `PUT /api/TemplateService/Templates({id})` when editing leaf values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplateAttributesUpdate {
    pub id: i64,
    pub attributes: Vec<AttributeValueUpdate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeValueUpdate {
    pub id: i64,
    pub value: String,
    pub is_ignored: bool,
}

// ── Session ─────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct SessionRequest<'a> {
    pub user_name: &'a str,
    pub password: &'a str,
    pub session_type: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct SessionResponse {
    #[serde(default)]
    pub id: String,
}

// ── Error envelope ──────────────────────────────────────────────────

/// Error body returned with non-2xx statuses:
/// ```json
/// { "error": { "code": "Base.1.0.GeneralError", "message": "...",
///              "@Message.ExtendedInfo": [{ "MessageId": "CGEN1004", "Message": "..." }] } }
/// ```
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "@Message.ExtendedInfo")]
    pub extended_info: Vec<ExtendedInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ExtendedInfo {
    #[serde(default)]
    pub message_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

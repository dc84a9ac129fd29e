// ── Template service facade ──
//
// One fetch, one pure tree function, optionally one write. Nothing is
// cached between calls: every method works on a tree fetched for it.

use ome_api::OmeClient;
use ome_api::models::NetworkConfigUpdate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::ServerConfig;
use crate::convert::tree_from_details;
use crate::error::CoreError;
use crate::flatten::flatten_all;
use crate::model::{
    AttributeGroup, AttributeRef, DisplayPath, FlatAttribute, VlanConfig, VlanRecord,
};
use crate::refresh::refresh_attributes;
use crate::resolve::resolve;
use crate::update::{AttributeEdit, encode_attribute_update};
use crate::vlan;

/// Parameters of a VLAN push besides the records themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VlanUpdate {
    pub identity_pool_id: i64,
    /// Bonding mode to send; `None` keeps the one currently configured.
    #[serde(default)]
    pub bonding_technology: Option<String>,
    #[serde(default)]
    pub propagate_vlan: bool,
    pub records: Vec<VlanRecord>,
}

/// Async entry point over a single appliance.
pub struct TemplateService {
    client: OmeClient,
}

impl TemplateService {
    /// Build a service around an already configured client.
    pub fn with_client(client: OmeClient) -> Self {
        Self { client }
    }

    /// Build the HTTP client from `config` and open a session.
    pub async fn connect(config: &ServerConfig) -> Result<Self, CoreError> {
        let client = OmeClient::new(config.url.clone(), &config.transport())?;
        client.login(&config.credentials).await?;
        info!(url = %config.url, "connected");
        Ok(Self { client })
    }

    /// Close the session.
    pub async fn disconnect(&self) -> Result<(), CoreError> {
        self.client.logout().await?;
        Ok(())
    }

    pub fn client(&self) -> &OmeClient {
        &self.client
    }

    // ── Attribute tree ───────────────────────────────────────────────

    /// Fetch and convert the full attribute tree.
    pub async fn attribute_tree(&self, template_id: i64) -> Result<Vec<AttributeGroup>, CoreError> {
        let details = self.client.get_attribute_details(template_id).await?;
        let tree = tree_from_details(details);
        debug!(template_id, groups = tree.len(), "attribute tree fetched");
        Ok(tree)
    }

    /// Every attribute of the template with its qualified path.
    pub async fn list_attributes(&self, template_id: i64) -> Result<Vec<FlatAttribute>, CoreError> {
        let tree = self.attribute_tree(template_id).await?;
        Ok(flatten_all(&tree))
    }

    /// A single attribute by display path and id.
    pub async fn get_attribute(
        &self,
        template_id: i64,
        path: &str,
        attribute_id: i64,
    ) -> Result<FlatAttribute, CoreError> {
        let tree = self.attribute_tree(template_id).await?;
        let attribute = resolve(&DisplayPath::parse(path), attribute_id, &tree)?;
        Ok(FlatAttribute {
            attribute_id: attribute.id,
            display_name: path.to_owned(),
            value: attribute.value.clone(),
            is_ignored: attribute.is_ignored,
        })
    }

    /// Current values for a set of previously known attributes.
    pub async fn refresh_attributes(
        &self,
        template_id: i64,
        refs: &[AttributeRef],
    ) -> Result<Vec<FlatAttribute>, CoreError> {
        let tree = self.attribute_tree(template_id).await?;
        refresh_attributes(refs, &tree)
    }

    /// Validate `edits` against the current tree, then write them.
    pub async fn set_attributes(
        &self,
        template_id: i64,
        edits: &[AttributeEdit],
    ) -> Result<(), CoreError> {
        let tree = self.attribute_tree(template_id).await?;
        let body = encode_attribute_update(template_id, edits, &tree)?;
        self.client.update_template_attributes(&body).await?;
        info!(template_id, count = edits.len(), "attributes updated");
        Ok(())
    }

    // ── VLAN view ────────────────────────────────────────────────────

    /// Fetch and convert the network view tree.
    pub async fn network_tree(&self, template_id: i64) -> Result<Vec<AttributeGroup>, CoreError> {
        let view = self.client.get_network_view(template_id).await?;
        Ok(tree_from_details(view))
    }

    /// Bonding mode and every port's VLAN record.
    pub async fn vlan_config(&self, template_id: i64) -> Result<VlanConfig, CoreError> {
        let tree = self.network_tree(template_id).await?;
        Ok(vlan::decode_config(&tree))
    }

    /// One port's VLAN record.
    pub async fn vlan(
        &self,
        template_id: i64,
        nic_identifier: &str,
        port: i64,
    ) -> Result<VlanRecord, CoreError> {
        let tree = self.network_tree(template_id).await?;
        vlan::decode_one(&tree, nic_identifier, port)
    }

    /// Push edited VLAN records. Returns the body that was sent.
    ///
    /// When no bonding mode is given the current one is read from the
    /// network view first, so the push does not silently reset it.
    pub async fn update_vlans(
        &self,
        template_id: i64,
        update: &VlanUpdate,
    ) -> Result<NetworkConfigUpdate, CoreError> {
        if update.records.is_empty() {
            return Err(CoreError::ValidationFailed {
                message: "no VLAN records to update".into(),
            });
        }

        let bonding = match &update.bonding_technology {
            Some(bonding) => bonding.clone(),
            None => {
                let tree = self.network_tree(template_id).await?;
                vlan::bonding_technology(&tree)
            }
        };

        let payload = vlan::encode(
            &update.records,
            &bonding,
            update.propagate_vlan,
            template_id,
            update.identity_pool_id,
        );
        self.client.update_network_config(&payload).await?;
        info!(
            template_id,
            partitions = payload.vlan_attributes.len(),
            "network config updated"
        );
        Ok(payload)
    }
}

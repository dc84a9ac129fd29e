// TemplateService endpoints
//
// Attribute trees (full details and the network view) plus the two
// write paths: VLAN network config and leaf attribute values.

use tracing::debug;

use crate::client::OmeClient;
use crate::error::Error;
use crate::models::{NetworkConfigUpdate, TemplateAttributeDetails, TemplateAttributesUpdate};

/// View id of the network (NIC/VLAN) projection of a template.
const NETWORK_VIEW_ID: i64 = 4;

impl OmeClient {
    /// Fetch the full attribute tree of a template.
    ///
    /// `GET /api/TemplateService/Templates({id})/AttributeDetails`
    pub async fn get_attribute_details(
        &self,
        template_id: i64,
    ) -> Result<TemplateAttributeDetails, Error> {
        let url = self.api_url(&format!(
            "TemplateService/Templates({template_id})/AttributeDetails"
        ))?;
        debug!(template_id, "fetching attribute details");
        self.get(url).await
    }

    /// Fetch the network view of a template (NIC bonding + per-port VLANs).
    ///
    /// `GET /api/TemplateService/Templates({id})/Views(4)/AttributeViewDetails`
    pub async fn get_network_view(
        &self,
        template_id: i64,
    ) -> Result<TemplateAttributeDetails, Error> {
        let url = self.api_url(&format!(
            "TemplateService/Templates({template_id})/Views({NETWORK_VIEW_ID})/AttributeViewDetails"
        ))?;
        debug!(template_id, "fetching network view");
        self.get(url).await
    }

    /// Push VLAN settings for a template.
    ///
    /// `POST /api/TemplateService/Actions/TemplateService.UpdateNetworkConfig`
    pub async fn update_network_config(&self, payload: &NetworkConfigUpdate) -> Result<(), Error> {
        let url = self.api_url("TemplateService/Actions/TemplateService.UpdateNetworkConfig")?;
        debug!(
            template_id = payload.template_id,
            partitions = payload.vlan_attributes.len(),
            "updating network config"
        );
        self.post_unit(url, payload).await
    }

    /// Overwrite leaf attribute values of a template.
    ///
    /// `PUT /api/TemplateService/Templates({id})`
    pub async fn update_template_attributes(
        &self,
        payload: &TemplateAttributesUpdate,
    ) -> Result<(), Error> {
        let url = self.api_url(&format!("TemplateService/Templates({})", payload.id))?;
        debug!(
            template_id = payload.id,
            attributes = payload.attributes.len(),
            "updating template attributes"
        );
        self.put_unit(url, payload).await
    }
}

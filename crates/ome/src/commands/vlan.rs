//! NIC VLAN command handlers.

use ome_core::vlan::join_tagged;
use ome_core::{TemplateService, VlanRecord, VlanUpdate};
use tabled::Tabled;

use crate::cli::{GlobalOpts, VlanArgs, VlanCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct VlanRow {
    #[tabled(rename = "NIC")]
    nic: String,
    #[tabled(rename = "Port")]
    port: i64,
    #[tabled(rename = "Component")]
    component: i64,
    #[tabled(rename = "Bonded")]
    bonded: String,
    #[tabled(rename = "Untagged")]
    untagged: String,
    #[tabled(rename = "Tagged")]
    tagged: String,
}

impl From<&VlanRecord> for VlanRow {
    fn from(r: &VlanRecord) -> Self {
        Self {
            nic: r.nic_identifier.clone(),
            port: r.port,
            component: r.component_id,
            bonded: if r.is_nic_bonded { "yes".into() } else { "no".into() },
            untagged: if r.untagged == 0 {
                "-".into()
            } else {
                r.untagged.to_string()
            },
            tagged: join_tagged(&r.tagged),
        }
    }
}

fn detail(r: &VlanRecord) -> String {
    output::detail_lines(&[
        ("NIC", r.nic_identifier.clone()),
        ("Port", r.port.to_string()),
        ("Component", r.component_id.to_string()),
        ("Bonded", r.is_nic_bonded.to_string()),
        ("Untagged", r.untagged.to_string()),
        ("Tagged", join_tagged(&r.tagged)),
    ])
}

fn plain(r: &VlanRecord) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        r.nic_identifier,
        r.port,
        r.untagged,
        join_tagged(&r.tagged)
    )
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    service: &TemplateService,
    args: VlanArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        VlanCommand::List { template } => {
            let config = service.vlan_config(template).await?;
            if !global.quiet && matches!(global.output, crate::cli::OutputFormat::Table) {
                let mode = if config.bonding_technology.is_empty() {
                    "(not set)"
                } else {
                    config.bonding_technology.as_str()
                };
                eprintln!("Bonding technology: {mode}");
            }
            let out = output::render_list(
                &global.output,
                &config.records,
                |r| VlanRow::from(r),
                plain,
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        VlanCommand::Get {
            template,
            nic,
            port,
        } => {
            let record = service.vlan(template, &nic, port).await?;
            let out = output::render_single(&global.output, &record, detail, plain);
            output::print_output(&out, global.quiet);
            Ok(())
        }

        VlanCommand::Set {
            template,
            from_file,
            identity_pool,
            bonding_technology,
            propagate,
        } => {
            let records: Vec<VlanRecord> = util::read_json_file(&from_file)?;
            let prompt = format!(
                "Push VLAN settings for {} partition(s) to template {template}?",
                records.len()
            );
            if !util::confirm(&prompt, global.yes)? {
                return Ok(());
            }

            let update = VlanUpdate {
                identity_pool_id: identity_pool,
                bonding_technology,
                propagate_vlan: propagate,
                records,
            };
            let sent = service.update_vlans(template, &update).await?;
            if !global.quiet {
                eprintln!(
                    "Network config updated ({} partition(s), bonding {})",
                    sent.vlan_attributes.len(),
                    sent.bonding_technology
                );
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_shows_empty_tagged_set_as_blank() {
        let row = VlanRow::from(&VlanRecord::empty("Integrated NIC 1", 2));
        assert_eq!(row.tagged, "");
        assert_eq!(row.untagged, "-");
        assert_eq!(row.bonded, "no");
    }

    #[test]
    fn plain_line_joins_tagged_ids() {
        let record = VlanRecord {
            nic_identifier: "Integrated NIC 1".into(),
            port: 1,
            component_id: 1049,
            is_nic_bonded: false,
            untagged: 0,
            tagged: vec![10133, 10594],
        };
        assert_eq!(plain(&record), "Integrated NIC 1\t1\t0\t10133,10594");
    }
}

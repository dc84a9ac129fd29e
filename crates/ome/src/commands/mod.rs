//! Command dispatch: bridges CLI args -> core service calls -> output formatting.

pub mod attributes;
pub mod config_cmd;
pub mod util;
pub mod vlan;

use ome_core::TemplateService;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch an appliance-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    service: &TemplateService,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Attributes(args) => attributes::handle(service, args, global).await,
        Command::Vlan(args) => vlan::handle(service, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => Ok(()),
    }
}

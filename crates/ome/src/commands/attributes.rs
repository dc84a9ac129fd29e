//! Attribute command handlers.

use ome_core::{AttributeEdit, AttributeRef, FlatAttribute, TemplateService};
use tabled::Tabled;

use crate::cli::{AttributesArgs, AttributesCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct AttributeRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Ignored")]
    ignored: String,
}

impl From<&FlatAttribute> for AttributeRow {
    fn from(a: &FlatAttribute) -> Self {
        Self {
            id: a.attribute_id,
            path: a.display_name.clone(),
            value: a.value.clone(),
            ignored: if a.is_ignored { "yes".into() } else { String::new() },
        }
    }
}

fn detail(a: &FlatAttribute) -> String {
    output::detail_lines(&[
        ("Path", a.display_name.clone()),
        ("ID", a.attribute_id.to_string()),
        ("Value", a.value.clone()),
        ("Ignored", a.is_ignored.to_string()),
    ])
}

fn plain(a: &FlatAttribute) -> String {
    format!("{}\t{}\t{}", a.attribute_id, a.display_name, a.value)
}

fn render(global: &GlobalOpts, attrs: &[FlatAttribute]) {
    let out = output::render_list(&global.output, attrs, |a| AttributeRow::from(a), plain);
    output::print_output(&out, global.quiet);
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    service: &TemplateService,
    args: AttributesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        AttributesCommand::List { template, filter } => {
            let mut attrs = service.list_attributes(template).await?;
            if let Some(prefix) = filter {
                attrs.retain(|a| a.display_name.starts_with(&prefix));
            }
            render(global, &attrs);
            Ok(())
        }

        AttributesCommand::Get { template, path, id } => {
            let attr = service.get_attribute(template, &path, id).await?;
            let out = output::render_single(&global.output, &attr, detail, plain);
            output::print_output(&out, global.quiet);
            Ok(())
        }

        AttributesCommand::Refresh {
            template,
            from_file,
        } => {
            let refs: Vec<AttributeRef> = util::read_json_file(&from_file)?;
            let attrs = service.refresh_attributes(template, &refs).await?;
            render(global, &attrs);
            Ok(())
        }

        AttributesCommand::Set {
            template,
            path,
            id,
            value,
            ignored,
        } => {
            let edit = AttributeEdit {
                display_name: path,
                attribute_id: id,
                value,
                is_ignored: ignored,
            };
            service.set_attributes(template, std::slice::from_ref(&edit)).await?;
            if !global.quiet {
                eprintln!("Attribute {} updated", edit.display_name);
            }
            Ok(())
        }
    }
}

//! Implementation of the `vitrine list` command.

use crate::{
    cli::{ListArgs, ListFormat, global::{GlobalArgs, OutputFormat}},
    commands::catalog_service,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ListArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let service = catalog_service()?;
    let products = service.products().map_err(CliError::Core)?;

    // `--format` wins; otherwise the global `--output-format` decides.
    let format = args.format.unwrap_or(match output.format() {
        OutputFormat::Json => ListFormat::Json,
        OutputFormat::Auto | OutputFormat::Human | OutputFormat::Plain => ListFormat::Table,
    });

    match format {
        ListFormat::Table => {
            output.header("Catalog:")?;
            for product in &products {
                output.print(&format!(
                    "  {}  {}  [{}]  {} color(s)",
                    product.id(),
                    product.title,
                    product.category.name,
                    product.colors.len()
                ))?;
            }
            output.print(&format!("{} product(s)", products.len()))?;
        }

        ListFormat::Json => {
            // Serialise as a JSON array to stdout (bypasses OutputManager
            // because JSON output must be parseable even in non-TTY pipes).
            let json = serde_json::to_string_pretty(&products).map_err(|e| {
                CliError::InvalidInput {
                    message: format!("failed to serialise catalog: {e}"),
                }
            })?;
            println!("{json}");
        }

        ListFormat::List => {
            for p in &products {
                println!("{}", p.title);
            }
        }

        ListFormat::Csv => {
            println!("id,title,price,category");
            for p in &products {
                println!(
                    "{},{},{},{}",
                    p.id(),
                    p.title,
                    p.price,
                    p.category.name
                );
            }
        }
    }

    Ok(())
}

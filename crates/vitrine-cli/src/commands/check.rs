//! Implementation of the `vitrine check` command.
//!
//! Validates a draft without touching the catalog. Mirrors what `add`
//! would accept or reject, so scripts can pre-flight input.

use tracing::instrument;

use vitrine_core::domain::{DomainError, FIELDS, validate};

use crate::{
    cli::{DraftArgs, global::GlobalArgs},
    commands::draft_from_args,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `vitrine check` command.
///
/// Exit code 0 when every field passes; otherwise the rejection flows
/// through the normal error path (exit code 2, per-field breakdown).
#[instrument(skip_all)]
pub fn execute(args: DraftArgs, _global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let draft = draft_from_args(&args);
    let report = validate(&draft);

    if report.is_clean() {
        output.success("Draft is valid")?;
        for spec in &FIELDS {
            output.print(&format!("  \u{2713} {}", spec.label))?;
        }
        return Ok(());
    }

    Err(CliError::Core(DomainError::DraftRejected(report).into()))
}

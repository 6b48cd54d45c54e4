//! The default command: merge fragments into the root rules file.

use tracing::{debug, instrument};

use srmerge_adapters::LocalFilesystem;
use srmerge_core::application::{MergeReport, RuleMerger};

use crate::{
    cli::{GlobalArgs, MergeArgs, MergeRequest, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

const UNMODIFIED_WARNING: &str =
    "Template does not end with two closing braces; it was copied without the fragments";

#[instrument(skip_all)]
pub fn execute(
    args: MergeArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let request = args.into_request()?;
    debug!(?request, parallel_reads = config.merge.parallel_reads, "Merge requested");

    let merger = RuleMerger::new(Box::new(LocalFilesystem::new()))
        .parallel_reads(config.merge.parallel_reads);

    if request.dry_run {
        return render(&merger, &request, &output);
    }

    let report = merger.merge(
        &request.workspace_path,
        &request.template_name,
        &request.output_name,
    )?;

    if output.format() == OutputFormat::Json {
        return output.json(&report);
    }
    print_report(&report, global.verbose > 0, &output)
}

/// `--dry-run`: print the merged rules to stdout and write nothing. An
/// unmodified template is reported by the core's warning on stderr.
fn render(merger: &RuleMerger, request: &MergeRequest, output: &OutputManager) -> CliResult<()> {
    let rendered = merger.render(&request.workspace_path, &request.template_name)?;
    output.raw(rendered.content())?;
    Ok(())
}

fn print_report(report: &MergeReport, list_fragments: bool, output: &OutputManager) -> CliResult<()> {
    if !report.spliced {
        output.warning(UNMODIFIED_WARNING)?;
    }

    output.success(&format!(
        "Merged {} rule file(s) into {}",
        report.fragments.len(),
        report.output_path.display()
    ))?;

    if list_fragments {
        output.header(&format!("Template: {}", report.template.display()))?;
        for fragment in &report.fragments {
            output.print(&format!("  + {}", fragment.display()))?;
        }
    }

    Ok(())
}

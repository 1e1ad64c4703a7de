use anyhow::Result;
use provision::{ExecuteOptions, SystemRunner};

use crate::Context;
use crate::cli::InstallArgs;
use crate::progress::ConsoleProgress;
use crate::runlog::RunLog;
use crate::ui;

use super::load_catalog;

pub fn run(ctx: &Context, args: &InstallArgs) -> Result<i32> {
    let catalog = load_catalog(ctx)?;
    let plan = provision::resolve(&catalog, args.target.profile())?;
    let platform = args.target.platform();

    let options = ExecuteOptions {
        dry_run: args.dry_run,
        skip_existing: args.skip_existing,
        force: args.force,
        verbose: ctx.verbose > 0,
    };

    if options.dry_run && !ctx.quiet {
        ui::info("Dry run: nothing will be installed");
    }

    let mut log = RunLog::open_default();
    if let Some(log) = log.as_mut() {
        log.run_start(plan.profile(), platform, &options);
    }

    let mut progress = ConsoleProgress::new(ctx.quiet, options.verbose, log);
    let report = provision::execute(
        &plan,
        &catalog,
        platform,
        options,
        &SystemRunner::new(),
        &mut progress,
    );
    progress.finish(&report);

    Ok(report.exit_code)
}

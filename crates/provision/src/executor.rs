//! Execution engine - turns each planned tool into exactly one outcome

use crate::catalog::{Catalog, Tool};
use crate::command::Command;
use crate::context::ProgressCallback;
use crate::planner::InstallPlan;
use crate::platform::PlatformId;
use crate::report::{RunReport, RunReporter};
use crate::runner::CommandRunner;
use crate::types::{ExecuteOptions, ExecutionOutcome};

/// Installs one tool at a time.
///
/// Holds no per-call state; the same executor is reused for every tool of a
/// run. No error escapes [`run`](Self::run): every failure becomes an
/// outcome.
pub struct ToolExecutor<'a> {
    runner: &'a dyn CommandRunner,
    options: ExecuteOptions,
}

impl<'a> ToolExecutor<'a> {
    pub fn new(runner: &'a dyn CommandRunner, options: ExecuteOptions) -> Self {
        Self { runner, options }
    }

    /// Process one tool.
    pub fn run(&self, tool: &Tool, platform: PlatformId) -> ExecutionOutcome {
        let name = tool.name();

        if self.options.skip_existing && !self.options.force && self.is_verified(tool) {
            log::debug!("{name}: already installed");
            return ExecutionOutcome::skipped(name);
        }

        let Some(install) = tool.install_command(platform) else {
            log::debug!("{name}: no install command for {platform}");
            return ExecutionOutcome::unsupported(name, platform);
        };

        if self.options.dry_run {
            log::info!("{name}: would run {install}");
            return ExecutionOutcome::dry_run(name, install);
        }

        log::info!("{name}: running {install}");
        if let Err(error) = self.launch(install) {
            log::error!("{name}: install failed: {error}");
            return ExecutionOutcome::failed(name, error);
        }

        let warnings = self.post_install(tool);
        ExecutionOutcome::installed(name, warnings)
    }

    /// Whether the tool is already present.
    ///
    /// Uses the tool's verify command when it has one, otherwise looks the
    /// tool name up on the search path. Verification output is always
    /// captured, and any failure to run it means "not installed".
    pub fn is_verified(&self, tool: &Tool) -> bool {
        match tool.verify_command() {
            Some(verify) => {
                let verified = self.runner.run_status(verify);
                log::trace!("{}: verify '{verify}' -> {verified}", tool.name());
                verified
            }
            None => self.runner.is_on_path(tool.name()),
        }
    }

    fn launch(&self, command: &Command) -> Result<(), String> {
        match self.runner.run(command, self.options.verbose) {
            Ok(output) if output.success => Ok(()),
            Ok(output) => Err(output.failure_message()),
            Err(e) => Err(format!("failed to launch '{command}': {e}")),
        }
    }

    /// Run post-install steps in order; failures become warnings.
    fn post_install(&self, tool: &Tool) -> Vec<String> {
        let mut warnings = Vec::new();
        for step in tool.post_install() {
            log::debug!("{}: post-install {step}", tool.name());
            if let Err(error) = self.launch(step) {
                let warning = format!("post-install '{step}' failed: {error}");
                log::warn!("{}: {warning}", tool.name());
                warnings.push(warning);
            }
        }
        warnings
    }
}

/// Execute a plan sequentially, in plan order.
///
/// Every tool is attempted regardless of earlier failures. The progress
/// callback sees each tool before and after it runs.
pub fn execute<P: ProgressCallback + ?Sized>(
    plan: &InstallPlan,
    catalog: &Catalog,
    platform: PlatformId,
    options: ExecuteOptions,
    runner: &dyn CommandRunner,
    progress: &mut P,
) -> RunReport {
    let executor = ToolExecutor::new(runner, options);
    let mut reporter = RunReporter::new();
    let total = plan.len();

    progress.on_run_start(plan.profile(), platform, total);

    for (index, name) in plan.iter().enumerate() {
        progress.on_tool_start(index, total, name);
        let outcome = match catalog.tool(name) {
            Some(tool) => executor.run(tool, platform),
            None => ExecutionOutcome::failed(name, "not defined in catalog"),
        };
        progress.on_tool_complete(&outcome);
        reporter.record(outcome);
    }

    reporter.summarize()
}

//! Progress reporting during a run
//!
//! Lets the library report progress without depending on a terminal.

use crate::platform::PlatformId;
use crate::types::ExecutionOutcome;

/// Progress callback for execution operations
///
/// Implement this trait to receive progress updates during execution.
pub trait ProgressCallback {
    /// Called once before the first tool
    fn on_run_start(&mut self, profile: &str, platform: PlatformId, total: usize);

    /// Called when starting a single tool (`index` is zero-based)
    fn on_tool_start(&mut self, index: usize, total: usize, tool: &str);

    /// Called when a tool reaches its outcome
    fn on_tool_complete(&mut self, outcome: &ExecutionOutcome);
}

/// No-op progress callback
pub struct NoProgress;

impl ProgressCallback for NoProgress {
    fn on_run_start(&mut self, _profile: &str, _platform: PlatformId, _total: usize) {}
    fn on_tool_start(&mut self, _index: usize, _total: usize, _tool: &str) {}
    fn on_tool_complete(&mut self, _outcome: &ExecutionOutcome) {}
}

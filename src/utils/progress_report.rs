//! Progress reporting for long-running downloads.
//!
//! Once the header of a download has been read the expected record count is
//! known, and the record validator reports progress against it. A reporter
//! can also cancel the download by returning `true`.
//!
//! # Examples
//!
//! ```
//! use dict_download::utils::progress_report::{ProgressState, ProgressReportFn};
//!
//! fn my_reporter(state: &mut ProgressState) -> bool {
//!     println!("Progress: {}/{}", state.current, state.total);
//!     false // Return true to cancel the operation
//! }
//!
//! let mut progress = ProgressState::new("download", 100, 10, Some(my_reporter));
//! for i in 0..100 {
//!     if progress.report(i) {
//!         break;
//!     }
//! }
//! ```

/// Function type for progress reporting callbacks.
///
/// The function receives a mutable reference to the progress state and
/// returns `true` to cancel the operation, or `false` to continue.
pub type ProgressReportFn = fn(&mut ProgressState) -> bool;

/// State information for progress reporting.
pub struct ProgressState {
    /// Identifier for this progress state (usually the source URL)
    pub state_id: String,
    /// Total number of items expected
    pub total: u64,
    /// Item most recently reported
    pub current: u64,
    /// Item at which progress was last reported
    pub last: u64,
    /// Number of items between reports
    pub report_interval: u64,
    /// Optional reporter function to call
    pub reporter: Option<ProgressReportFn>,
}

impl ProgressState {
    /// Creates a new progress state.
    ///
    /// # Arguments
    ///
    /// * `state_id` - Identifier for this progress state
    /// * `total` - Total number of items to process
    /// * `report_interval_percent` - Percentage of items between reports (0-100)
    /// * `reporter` - Optional reporter function
    pub fn new(state_id: &str, total: u64, report_interval_percent: u64, reporter: Option<ProgressReportFn>) -> Self {
        Self {
            state_id: state_id.to_string(),
            total,
            current: 0,
            last: 0,
            report_interval: total.saturating_mul(report_interval_percent) / 100,
            reporter,
        }
    }

    /// Reports progress for the item at `current` (zero-based).
    ///
    /// The reporter is called when more than `report_interval` items have
    /// passed since the last report, and for the final item.
    ///
    /// # Returns
    ///
    /// Returns `true` if the operation should be cancelled, `false` otherwise.
    pub fn report(&mut self, current: u64) -> bool {
        let Some(reporter) = self.reporter else {
            return false;
        };
        let is_last = self.total > 0 && current == self.total - 1;
        if current.saturating_sub(self.last) > self.report_interval || is_last {
            self.current = current;
            let cancelled = reporter(self);
            self.last = current;
            cancelled
        } else {
            false
        }
    }
}

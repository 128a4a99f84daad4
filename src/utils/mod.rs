// Utility functions and helpers
//
// This module provides source URL handling, local file access and progress
// reporting.

pub mod io_utils;
pub mod progress_report;
pub mod url_utils;

pub use io_utils::{fix_windows_path, open_file_url_as_reader};
pub use progress_report::{ProgressReportFn, ProgressState};
pub use url_utils::{display_name, get_decoded_file_name, get_decoded_path};

//! Default values used by the Config struct.

use crate::grid::DEFAULT_MAX_LINE_LENGTH;

/// Escalating move budgets tried in order when none are configured.
pub const DEFAULT_BUDGETS: [usize; 3] = [10, 100, 1000];

// Default value functions for serde
pub(crate) fn default_budgets() -> Vec<usize> {
    DEFAULT_BUDGETS.to_vec()
}
pub(crate) fn default_max_line_length() -> usize {
    DEFAULT_MAX_LINE_LENGTH
}
pub(crate) fn default_true() -> bool {
    true
}

//! The Config struct and its defaults.

use super::types::{default_budgets, default_max_line_length, default_true};
use serde::{Deserialize, Serialize};

/// Configuration for a mazewalk run.
///
/// This struct represents the contents of `mazewalk.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Move budgets, one traversal attempt per entry, in order.
    #[serde(default = "default_budgets")]
    pub budgets: Vec<usize>,

    /// Optional bound on the backtrack stack. `None` lets it grow freely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backtrack_capacity: Option<usize>,

    /// Longest accepted maze line, in characters.
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,

    /// Exit with a failure code when no attempt reaches an exit.
    #[serde(default)]
    pub fail_if_unsolved: bool,

    /// Print the grid trace after each attempt.
    #[serde(default = "default_true")]
    pub print_trace: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            budgets: default_budgets(),
            backtrack_capacity: None,
            max_line_length: default_max_line_length(),
            fail_if_unsolved: false,
            print_trace: true,
        }
    }
}

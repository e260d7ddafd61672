//! Error types with diagnostics using miette

use miette::Diagnostic;
use thiserror::Error;

use crate::types::Dip;

/// Errors raised while building custom connector metrics.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum MetricsError {
    #[error("{field} must be positive, got {value}")]
    #[diagnostic(
        code(blocknotch::metrics::non_positive),
        help("connector sizes are measured in dips and must be at least 1")
    )]
    NonPositive { field: &'static str, value: Dip },
}

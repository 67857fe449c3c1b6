use thiserror::Error;

/// Errors produced by the point-pattern engine and the build workflow.
///
/// The engine is deterministic pure computation, so there are no transient or
/// retryable failures: a configuration error means the inputs can never work,
/// and a convergence error means the packing-search window was inconsistent
/// with the true packing limit.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Invalid parameter combination, detected before any geometry is computed.
    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    /// The packing binary search exhausted its window without finding the
    /// overlap boundary. Fatal; widen the window or adjust the regression
    /// coefficients.
    #[error(
        "Packing search failed to converge for radius {radius} nm, bead diameter {bead_diameter} nm (window {lo}..={hi})"
    )]
    Convergence {
        radius: f64,
        bead_diameter: f64,
        lo: usize,
        hi: usize,
    },
}

impl EngineError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        EngineError::Configuration {
            message: message.into(),
        }
    }
}

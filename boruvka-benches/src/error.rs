//! Benchmark setup error type.

use boruvka_core::BoruvkaError;

/// Errors that may occur while preparing benchmark inputs.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Matrix validation or driver configuration failed.
    #[error("contraction setup failed: {0}")]
    Boruvka(#[from] BoruvkaError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// The parameter that was unexpectedly zero.
        context: &'static str,
    },
}

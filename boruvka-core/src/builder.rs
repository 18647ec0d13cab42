//! Builder utilities for configuring contraction runs.
//!
//! Exposes the execution strategy selection surface and the validation
//! performed before constructing [`Boruvka`] instances.

use std::num::NonZeroUsize;

use crate::{
    contraction::Boruvka,
    error::{BoruvkaError, Result},
};

/// Number of contraction rounds run when no bound is configured.
pub const DEFAULT_MAX_ROUNDS: usize = 2;

/// Indicates how each round searches for per-vertex minimum edges.
///
/// `Auto` resolves to `Parallel` when the `parallel` feature is enabled and
/// to `Sequential` otherwise, so behaviour stays stable across builds.
///
/// # Examples
/// ```
/// use boruvka_core::ExecutionStrategy;
///
/// let strategy = ExecutionStrategy::Auto;
/// assert!(matches!(strategy, ExecutionStrategy::Auto));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Allow the library to select the search backend.
    Auto,
    /// Search rows concurrently on the Rayon thread pool.
    Parallel,
    /// Search rows one after another on the calling thread.
    Sequential,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Backend {
    #[cfg(feature = "parallel")]
    Parallel,
    Sequential,
}

impl ExecutionStrategy {
    pub(crate) fn backend(self) -> Result<Backend> {
        match self {
            #[cfg(feature = "parallel")]
            Self::Auto | Self::Parallel => Ok(Backend::Parallel),
            #[cfg(not(feature = "parallel"))]
            Self::Auto => Ok(Backend::Sequential),
            #[cfg(not(feature = "parallel"))]
            Self::Parallel => Err(BoruvkaError::BackendUnavailable {
                requested: Self::Parallel,
            }),
            Self::Sequential => Ok(Backend::Sequential),
        }
    }
}

/// Configures and constructs [`Boruvka`] instances.
///
/// # Examples
/// ```
/// use boruvka_core::{BoruvkaBuilder, ExecutionStrategy};
///
/// let boruvka = BoruvkaBuilder::new()
///     .with_max_rounds(4)
///     .with_execution_strategy(ExecutionStrategy::Sequential)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(boruvka.max_rounds().get(), 4);
/// assert_eq!(boruvka.execution_strategy(), ExecutionStrategy::Sequential);
/// ```
#[derive(Debug, Clone)]
pub struct BoruvkaBuilder {
    max_rounds: usize,
    execution_strategy: ExecutionStrategy,
}

impl Default for BoruvkaBuilder {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            execution_strategy: ExecutionStrategy::Auto,
        }
    }
}

impl BoruvkaBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use boruvka_core::{BoruvkaBuilder, ExecutionStrategy};
    ///
    /// let builder = BoruvkaBuilder::new();
    /// assert_eq!(builder.max_rounds(), 2);
    /// assert_eq!(builder.execution_strategy(), ExecutionStrategy::Auto);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the upper bound on contraction rounds.
    ///
    /// A run stops earlier when the forest spans the graph or when no vertex
    /// has an edge left to propose. A bound equal to the vertex count always
    /// reaches one of those two states.
    #[must_use]
    pub fn with_max_rounds(mut self, rounds: usize) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Returns the configured round bound.
    #[must_use]
    pub fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    /// Sets the execution strategy to use for minimum-edge searches.
    #[must_use]
    pub fn with_execution_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.execution_strategy = strategy;
        self
    }

    /// Returns the currently configured execution strategy.
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Validates the configuration and constructs a [`Boruvka`] instance.
    ///
    /// # Errors
    /// Returns [`BoruvkaError::InvalidMaxRounds`] when the round bound is zero
    /// and [`BoruvkaError::BackendUnavailable`] when the strategy cannot run
    /// in this build.
    ///
    /// # Examples
    /// ```
    /// use boruvka_core::BoruvkaBuilder;
    ///
    /// let boruvka = BoruvkaBuilder::new().build().expect("configuration is valid");
    /// assert_eq!(boruvka.max_rounds().get(), 2);
    /// ```
    pub fn build(self) -> Result<Boruvka> {
        let max_rounds = NonZeroUsize::new(self.max_rounds).ok_or(
            BoruvkaError::InvalidMaxRounds {
                got: self.max_rounds,
            },
        )?;
        self.execution_strategy.backend()?;

        Ok(Boruvka::new(max_rounds, self.execution_strategy))
    }
}

//! Error types for the Borůvka core library.
//!
//! Defines the error enum exposed by the public API, its stable error codes,
//! and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::builder::ExecutionStrategy;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced while loading graphs or running contraction rounds.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum BoruvkaError {
    /// The adjacency matrix contained no rows.
    #[error("cannot contract an empty graph")]
    EmptyGraph,
    /// A matrix row did not have one column per vertex.
    #[error("row {row} has {len} columns but the matrix has {expected} rows")]
    NonSquareMatrix {
        /// Index of the offending row.
        row: usize,
        /// Number of columns found in the row.
        len: usize,
        /// Number of columns required (the row count).
        expected: usize,
    },
    /// A vertex carried a non-zero weight to itself.
    #[error("vertex {vertex} has a self-loop of weight {weight}")]
    SelfLoop {
        /// Vertex whose diagonal entry was non-zero.
        vertex: usize,
        /// The diagonal weight.
        weight: u32,
    },
    /// The weight of `row -> column` differed from `column -> row`.
    #[error("weight[{row}][{column}] = {forward} but weight[{column}][{row}] = {backward}")]
    AsymmetricWeight {
        /// Row of the first differing entry.
        row: usize,
        /// Column of the first differing entry.
        column: usize,
        /// Weight stored at `[row][column]`.
        forward: u32,
        /// Weight stored at `[column][row]`.
        backward: u32,
    },
    /// The round bound must allow at least one contraction round.
    #[error("max_rounds must be at least 1 (got {got})")]
    InvalidMaxRounds {
        /// The invalid bound supplied by the caller.
        got: usize,
    },
    /// The requested execution strategy is unavailable in the current build.
    #[error("the requested execution strategy {requested:?} is not available in this build")]
    BackendUnavailable {
        /// Strategy that could not be satisfied by the current build.
        requested: ExecutionStrategy,
    },
    /// A synchronisation primitive became poisoned after a panic.
    #[error("lock for {resource} is poisoned")]
    LockPoisoned {
        /// Name of the locked resource that was poisoned.
        resource: &'static str,
    },
}

define_error_codes! {
    /// Stable codes describing [`BoruvkaError`] variants.
    enum BoruvkaErrorCode for BoruvkaError {
        /// The adjacency matrix contained no rows.
        EmptyGraph => EmptyGraph => "BORUVKA_EMPTY_GRAPH",
        /// A matrix row did not have one column per vertex.
        NonSquareMatrix => NonSquareMatrix { .. } => "BORUVKA_NON_SQUARE_MATRIX",
        /// A vertex carried a non-zero weight to itself.
        SelfLoop => SelfLoop { .. } => "BORUVKA_SELF_LOOP",
        /// The matrix was not symmetric.
        AsymmetricWeight => AsymmetricWeight { .. } => "BORUVKA_ASYMMETRIC_WEIGHT",
        /// The round bound was zero.
        InvalidMaxRounds => InvalidMaxRounds { .. } => "BORUVKA_INVALID_MAX_ROUNDS",
        /// The requested execution strategy is unavailable in the current build.
        BackendUnavailable => BackendUnavailable { .. } => "BORUVKA_BACKEND_UNAVAILABLE",
        /// A synchronisation primitive became poisoned after a panic.
        LockPoisoned => LockPoisoned { .. } => "BORUVKA_LOCK_POISONED",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, BoruvkaError>;

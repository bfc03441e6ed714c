//! Error types for the Tansaku core library.
//!
//! Defines the error enum exposed by the public API, its stable error codes,
//! and a convenient result alias.

use std::fmt;

use thiserror::Error;

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

/// Error type produced when building or querying a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// The graph already holds as many vertices as its capacity allows.
    #[error("graph capacity of {capacity} vertices is exhausted")]
    CapacityExceeded {
        /// Vertex capacity fixed at construction.
        capacity: usize,
    },
    /// The requested capacity cannot be allocated.
    #[error("a graph of {capacity} vertices needs more memory than can be allocated")]
    CapacityTooLarge {
        /// Requested vertex capacity.
        capacity: usize,
    },
    /// A vertex was added out of order.
    #[error("vertex ids must be sequential: expected {expected}, got {got}")]
    NonSequentialVertex {
        /// The id the next vertex must carry.
        expected: usize,
        /// The id carried by the rejected vertex.
        got: usize,
    },
    /// An operation referenced a vertex that has not been added.
    #[error("vertex {id} does not exist (graph holds {vertex_count} vertices)")]
    VertexNotFound {
        /// The unknown vertex id.
        id: usize,
        /// Number of vertices added so far.
        vertex_count: usize,
    },
    /// An edge connected a vertex to itself.
    #[error("edge connects vertex {vertex} to itself")]
    SelfLoop {
        /// The vertex referenced by both endpoints.
        vertex: usize,
    },
    /// An edge carried a negative weight.
    #[error("edge ({from}, {to}) has negative weight {weight}")]
    NegativeWeight {
        /// Source endpoint of the rejected edge.
        from: usize,
        /// Destination endpoint of the rejected edge.
        to: usize,
        /// The offending weight.
        weight: f64,
    },
    /// An edge carried a NaN or infinite weight.
    #[error("edge ({from}, {to}) has non-finite weight")]
    NonFiniteWeight {
        /// Source endpoint of the rejected edge.
        from: usize,
        /// Destination endpoint of the rejected edge.
        to: usize,
    },
    /// An internal invariant was violated, indicating a logic error.
    #[error("graph invariant violated: {invariant} (vertex {vertex})")]
    InvariantViolation {
        /// Name of the violated invariant to assist debugging.
        invariant: &'static str,
        /// The vertex being processed when the violation was detected.
        vertex: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The graph already holds as many vertices as its capacity allows.
        CapacityExceeded => CapacityExceeded { .. } => "GRAPH_CAPACITY_EXCEEDED",
        /// The requested capacity cannot be allocated.
        CapacityTooLarge => CapacityTooLarge { .. } => "GRAPH_CAPACITY_TOO_LARGE",
        /// A vertex was added out of order.
        NonSequentialVertex => NonSequentialVertex { .. } => "GRAPH_NON_SEQUENTIAL_VERTEX",
        /// An operation referenced a vertex that has not been added.
        VertexNotFound => VertexNotFound { .. } => "GRAPH_VERTEX_NOT_FOUND",
        /// An edge connected a vertex to itself.
        SelfLoop => SelfLoop { .. } => "GRAPH_SELF_LOOP",
        /// An edge carried a negative weight.
        NegativeWeight => NegativeWeight { .. } => "GRAPH_NEGATIVE_WEIGHT",
        /// An edge carried a NaN or infinite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "GRAPH_NON_FINITE_WEIGHT",
        /// An internal invariant was violated.
        InvariantViolation => InvariantViolation { .. } => "GRAPH_INVARIANT_VIOLATION",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphError>;

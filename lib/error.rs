//! Error types for operator construction.

use thiserror::Error;

/// Result type for operator constructions.
pub type WeylResult<T> = Result<T, WeylError>;

/// Precondition violations detectable at the boundary of a public operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WeylError {
    /// Qudit dimension less than 2.
    #[error("qudit dimension must be at least 2, got {0}")]
    InvalidDimension(usize),

    /// Dit value outside `[0, d)`.
    #[error("dit value {value} out of range for dimension {d}")]
    InvalidDitValue { value: usize, d: usize },

    /// Basis index outside `[0, d)`.
    #[error("basis index {index} out of range for dimension {dim}")]
    InvalidIndex { index: usize, dim: usize },

    /// Pauli selector outside `0..=3`.
    #[error("Pauli index {0} out of range, must be 0 (I), 1 (X), 2 (Y), or 3 (Z)")]
    InvalidPauliIndex(usize),

    /// Operator shape incompatible with the requested operation.
    #[error("operator is {rows}×{cols}, expected {expected}×{expected}")]
    ShapeMismatch { rows: usize, cols: usize, expected: usize },

    /// Matrix power of a non-square matrix.
    #[error("matrix power requires a square matrix, got {rows}×{cols}")]
    NonSquare { rows: usize, cols: usize },

    /// Subsystem permutation is not a permutation of `1..=m`.
    #[error("{perm:?} is not a permutation of 1..={m}")]
    InvalidPermutation { perm: Vec<usize>, m: usize },

    /// Wire index outside `1..=n`.
    #[error("wire {wire} out of range for a register of {n} qubits")]
    InvalidWire { wire: usize, n: usize },

    /// Control and target wires coincide.
    #[error("control and target must be distinct wires, both are {0}")]
    IdenticalWires(usize),

    /// Channel given no Kraus operators.
    #[error("channel application requires at least one Kraus operator")]
    EmptyKrausSet,
}

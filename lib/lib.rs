//! Dense-matrix building blocks for quantum information calculations on
//! registers of qudits.
//!
//! The centerpiece is the [`weyl`] module, which implements the discrete
//! Weyl-Heisenberg operator algebra for arbitrary finite dimension *d*: the
//! cyclic shift and phase operators generalizing the Pauli *X* and *Z*
//! matrices, enumeration of the *d*²-element single-qudit operator basis and
//! its *d*<sup>2*n*</sup>-element *n*-qudit extension, quadrature operators
//! and second-moment (covariance) matrices, decomposition of arbitrary
//! operators into Weyl-basis coefficients, and the generalized qudit CNOT
//! gate.
//!
//! Everything is computed with naive dense `nalgebra` matrices over
//! [`Complex64`][num_complex::Complex64]; operator dimension grows as
//! *d*<sup>*n*</sup>, so these tools are intended for small systems only.

pub mod error;
pub mod linalg;
pub mod weyl;
pub mod pauli;
pub mod gate;
pub mod channel;

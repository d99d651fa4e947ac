//! The 2×2 Pauli matrices and tensor products of them over *n*-qubit
//! registers.
//!
//! These are the *d* = 2 specialization of the discrete Weyl operators in
//! [`crate::weyl`] (up to the phase on *Y*), kept separately since qubit
//! registers are the overwhelmingly common case.

use nalgebra as na;
use num_complex::Complex64 as C64;
use once_cell::sync::Lazy;
use crate::{
    error::{ WeylError, WeylResult },
    linalg::scalar_one,
};

/// The 2×2 identity matrix.
pub static PAULI_I: Lazy<na::DMatrix<C64>> =
    Lazy::new(|| na::DMatrix::identity(2, 2));

/// The Pauli *X* matrix.
pub static PAULI_X: Lazy<na::DMatrix<C64>> =
    Lazy::new(|| {
        let mut x = na::DMatrix::zeros(2, 2);
        x[(0, 1)] = C64::from(1.0);
        x[(1, 0)] = C64::from(1.0);
        x
    });

/// The Pauli *Y* matrix.
pub static PAULI_Y: Lazy<na::DMatrix<C64>> =
    Lazy::new(|| {
        let mut y = na::DMatrix::zeros(2, 2);
        y[(0, 1)] = -C64::i();
        y[(1, 0)] = C64::i();
        y
    });

/// The Pauli *Z* matrix.
pub static PAULI_Z: Lazy<na::DMatrix<C64>> =
    Lazy::new(|| {
        let mut z = na::DMatrix::zeros(2, 2);
        z[(0, 0)] = C64::from(1.0);
        z[(1, 1)] = C64::from(-1.0);
        z
    });

/// Construct an *n*-qubit Pauli string from per-qubit selectors.
///
/// Each element of `indices` picks the factor for one qubit: 0 for the
/// identity, 1 for *X*, 2 for *Y*, 3 for *Z*. The empty list yields the 1×1
/// identity.
pub fn nqubit_pauli(indices: &[usize]) -> WeylResult<na::DMatrix<C64>> {
    let mut acc = scalar_one();
    for &index in indices {
        let factor = match index {
            0 => Lazy::force(&PAULI_I),
            1 => Lazy::force(&PAULI_X),
            2 => Lazy::force(&PAULI_Y),
            3 => Lazy::force(&PAULI_Z),
            _ => return Err(WeylError::InvalidPauliIndex(index)),
        };
        acc = acc.kronecker(factor);
    }
    Ok(acc)
}

/// Construct a tensor product of Pauli-*X* operators, with an *X* at every
/// qubit whose bit is 1 and the identity elsewhere.
pub fn nqubit_pauli_x(bits: &[usize]) -> WeylResult<na::DMatrix<C64>> {
    pauli_string(bits, &PAULI_X)
}

/// Construct a tensor product of Pauli-*Z* operators, with a *Z* at every
/// qubit whose bit is 1 and the identity elsewhere.
pub fn nqubit_pauli_z(bits: &[usize]) -> WeylResult<na::DMatrix<C64>> {
    pauli_string(bits, &PAULI_Z)
}

fn pauli_string(bits: &[usize], op: &Lazy<na::DMatrix<C64>>)
    -> WeylResult<na::DMatrix<C64>>
{
    let mut acc = scalar_one();
    for &bit in bits {
        let factor = match bit {
            0 => Lazy::force(&PAULI_I),
            1 => Lazy::force(op),
            _ => return Err(WeylError::InvalidDitValue { value: bit, d: 2 }),
        };
        acc = acc.kronecker(factor);
    }
    Ok(acc)
}

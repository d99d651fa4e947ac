//! Discrete Weyl-Heisenberg operators for registers of *d*-dimensional
//! qudits.
//!
//! The discrete Weyl operators generalize the Pauli matrices to arbitrary
//! finite dimension *d*. The generators are the cyclic shift
//!
//! > *X* ∣*i*⟩ = ∣*i* + 1 mod *d*⟩
//!
//! and the phase operator
//!
//! > *Z* ∣*i*⟩ = ω<sup>*i*</sup> ∣*i*⟩, ω = exp(2π**i**/*d*)
//!
//! which obey the Weyl commutation relation *Z X* = ω *X Z* and reduce to
//! the Pauli *X* and *Z* at *d* = 2. Monomials *Z*<sup>*z*</sup>
//! *X*<sup>*x*</sup> with *z*, *x* ∈ [0, *d*) form a trace-orthogonal basis
//! of *d*² operators; their *n*-fold tensor products form a basis of
//! *d*<sup>2*n*</sup> operators for *n*-qudit systems, with respect to which
//! any operator can be decomposed via [`weyl_coefficients`].
//!
//! Also here: the *n*-qudit quadrature operators and second-moment
//! (covariance) matrices built from them, the modular sign-flip permutation,
//! and the generalized qudit CNOT gate of Alber et al. (J. Phys. A: Math.
//! Gen. **34**, 8821 (2001), [arXiv:quant-ph/0102035][cnot]).
//!
//! All constructions are naive dense matrices of side length
//! *d*<sup>*n*</sup>; expect them to be usable only for small *d* and *n*.
//!
//! [cnot]: https://arxiv.org/abs/quant-ph/0102035

use std::f64::consts::TAU;
use itertools::Itertools;
use nalgebra as na;
use num_complex::Complex64 as C64;
use rustc_hash::FxHashMap;
use crate::{
    error::{ WeylError, WeylResult },
    linalg::{ dag, eye, matrix_power, outer, scalar_one, trace },
};

/// Coefficients of an operator in the *n*-qudit Weyl basis, keyed by
/// (shift-index, phase-index) list pairs.
///
/// See [`weyl_coefficients`].
pub type WeylCoeffs = FxHashMap<(Vec<usize>, Vec<usize>), C64>;

/// *n*-qudit quadrature operators, keyed 1 through 2*n*.
///
/// See [`quadratures`].
pub type Quadratures = FxHashMap<usize, na::DMatrix<C64>>;

fn check_dim(d: usize) -> WeylResult<()> {
    if d < 2 { Err(WeylError::InvalidDimension(d)) } else { Ok(()) }
}

fn check_dits(d: usize, indices: &[usize]) -> WeylResult<()> {
    for &value in indices {
        if value >= d {
            return Err(WeylError::InvalidDitValue { value, d });
        }
    }
    Ok(())
}

fn check_op(op: &na::DMatrix<C64>, expected: usize) -> WeylResult<()> {
    if op.nrows() != expected || op.ncols() != expected {
        return Err(WeylError::ShapeMismatch {
            rows: op.nrows(), cols: op.ncols(), expected });
    }
    Ok(())
}

// all of [0, d)^n in itertools product order (rightmost dit fastest)
fn dit_grid(d: usize, n: usize) -> Vec<Vec<usize>> {
    if n == 0 { return vec![Vec::new()]; }
    (0..n).map(|_| 0..d).multi_cartesian_product().collect()
}

/// Construct the cyclic shift operator *X*(*d*), with
/// *X* ∣*i*⟩ = ∣*i* + 1 mod *d*⟩.
pub fn shift(d: usize) -> WeylResult<na::DMatrix<C64>> {
    check_dim(d)?;
    let mut x: na::DMatrix<C64> = na::DMatrix::zeros(d, d);
    for i in 0..d { x[((i + 1) % d, i)] = C64::from(1.0); }
    Ok(x)
}

/// Construct the phase operator *Z*(*d*), with
/// *Z* ∣*i*⟩ = ω<sup>*i*</sup> ∣*i*⟩ for ω = exp(2π**i**/*d*).
pub fn phase(d: usize) -> WeylResult<na::DMatrix<C64>> {
    check_dim(d)?;
    let mut z: na::DMatrix<C64> = na::DMatrix::zeros(d, d);
    for i in 0..d { z[(i, i)] = C64::cis(TAU * i as f64 / d as f64); }
    Ok(z)
}

/// Construct the discrete Weyl operator
/// *Z*<sup>`z`</sup> *X*<sup>`x`</sup>.
///
/// Both exponents must lie in `[0, d)`. At *d* = 2, `weyl(2, 1, 0)` is the
/// Pauli *Z* and `weyl(2, 0, 1)` is the Pauli *X*.
pub fn weyl(d: usize, z: usize, x: usize) -> WeylResult<na::DMatrix<C64>> {
    check_dim(d)?;
    check_dits(d, &[z, x])?;
    let zp = matrix_power(&phase(d)?, z)?;
    let xp = matrix_power(&shift(d)?, x)?;
    Ok(zp * xp)
}

/// Enumerate all *d*² single-qudit Weyl operators.
///
/// Operators are ordered with the *Z* exponent as the outer loop and the *X*
/// exponent as the inner loop.
pub fn weyl_basis(d: usize) -> WeylResult<Vec<na::DMatrix<C64>>> {
    check_dim(d)?;
    (0..d).cartesian_product(0..d)
        .map(|(z, x)| weyl(d, z, x))
        .collect()
}

/// Construct the tensor product ⊗<sub>*k*</sub>
/// *X*(*d*)<sup>`indices[k]`</sup>.
///
/// Every dit must lie in `[0, d)`. The empty index list yields the 1×1
/// identity, the unit of the Kronecker-product fold.
pub fn nqudit_shift(d: usize, indices: &[usize])
    -> WeylResult<na::DMatrix<C64>>
{
    check_dits(d, indices)?;
    let x = shift(d)?;
    let mut acc = scalar_one();
    for &index in indices {
        acc = acc.kronecker(&matrix_power(&x, index)?);
    }
    Ok(acc)
}

/// Construct the tensor product ⊗<sub>*k*</sub>
/// *Z*(*d*)<sup>`indices[k]`</sup>.
///
/// Every dit must lie in `[0, d)`. The empty index list yields the 1×1
/// identity.
pub fn nqudit_phase(d: usize, indices: &[usize])
    -> WeylResult<na::DMatrix<C64>>
{
    check_dits(d, indices)?;
    let z = phase(d)?;
    let mut acc = scalar_one();
    for &index in indices {
        acc = acc.kronecker(&matrix_power(&z, index)?);
    }
    Ok(acc)
}

/// Enumerate all *d*<sup>2*n*</sup> *n*-qudit Weyl operators.
///
/// Entries run over all pairs (*s*₁, *s*₂) of index lists in [0, *d*)ⁿ with
/// the rightmost dit varying fastest and *s*₂ as the inner loop; each entry
/// is the product of the *Z*-type tensor for *s*₁ (left factor) with the
/// *X*-type tensor for *s*₂ (right factor). Note the factor order is
/// opposite to the per-site convention of [`weyl`].
pub fn nqudit_weyl_basis(d: usize, n: usize)
    -> WeylResult<Vec<na::DMatrix<C64>>>
{
    check_dim(d)?;
    let grid = dit_grid(d, n);
    let mut basis = Vec::with_capacity(grid.len() * grid.len());
    for s1 in grid.iter() {
        let zt = nqudit_phase(d, s1)?;
        for s2 in grid.iter() {
            basis.push(&zt * nqudit_shift(d, s2)?);
        }
    }
    Ok(basis)
}

/// Construct the 2*n* quadrature operators of an *n*-qudit system.
///
/// Keys run 1 through 2*n*: key 2*k* + 1 holds the *X*-type operator acting
/// at slot *k* (identity elsewhere) and key 2*k* + 2 holds the *Z*-type
/// operator at the same slot. For two qudits this is
///
/// > S\[1\] = *X* ⊗ 1, S\[2\] = *Z* ⊗ 1, S\[3\] = 1 ⊗ *X*,
/// > S\[4\] = 1 ⊗ *Z*
pub fn quadratures(d: usize, n: usize) -> WeylResult<Quadratures> {
    check_dim(d)?;
    let mut quads = Quadratures::default();
    for k in 0..n {
        let mut v = vec![0; n];
        v[k] = 1;
        quads.insert(2 * k + 1, nqudit_shift(d, &v)?);
        quads.insert(2 * k + 2, nqudit_phase(d, &v)?);
    }
    Ok(quads)
}

/// Compute the second-moment (covariance) matrix of an operator with
/// respect to the *n*-qudit quadratures.
///
/// The result is the 2*n* × 2*n* matrix with entries
/// *V*<sub>*ij*</sub> = Tr(`op` S<sub>*i*+1</sub> S<sub>*j*+1</sub>†) over
/// the quadrature operators of [`quadratures`]. `op` must be
/// *d*ⁿ × *d*ⁿ.
pub fn cov_matrix(op: &na::DMatrix<C64>, d: usize, n: usize)
    -> WeylResult<na::DMatrix<C64>>
{
    check_dim(d)?;
    check_op(op, d.pow(n as u32))?;
    let quads = quadratures(d, n)?;
    let mut v: na::DMatrix<C64> = na::DMatrix::zeros(2 * n, 2 * n);
    for i in 0..2 * n {
        let si = &quads[&(i + 1)];
        for j in 0..2 * n {
            let sj = &quads[&(j + 1)];
            v[(i, j)] = trace(&(op * si * dag(sj)));
        }
    }
    Ok(v)
}

// round to 10 decimal places to suppress floating noise in traces
fn round10(z: C64) -> C64 {
    const SCALE: f64 = 1e10;
    C64::new((z.re * SCALE).round() / SCALE, (z.im * SCALE).round() / SCALE)
}

/// Decompose an *n*-qudit operator into its Weyl-basis coefficients.
///
/// For every pair (*s*, *t*) of index lists in [0, *d*)ⁿ × [0, *d*)ⁿ the
/// returned map holds
///
/// > *c*(*s*, *t*) = (1/*d*ⁿ) Tr\[(*X̃*(*s*) *Z̃*(*t*))† `op`\]
///
/// where *X̃* and *Z̃* are the tensors of [`nqudit_shift`] and
/// [`nqudit_phase`], with the trace rounded to 10 decimal places.
/// Reconstructing Σ *c*(*s*, *t*) *X̃*(*s*) *Z̃*(*t*) recovers `op` up to
/// rounding error.
///
/// Cost is *d*<sup>2*n*</sup> dense products of *d*ⁿ × *d*ⁿ matrices; this
/// is deliberately unoptimized.
pub fn weyl_coefficients(op: &na::DMatrix<C64>, d: usize, n: usize)
    -> WeylResult<WeylCoeffs>
{
    check_dim(d)?;
    let dn = d.pow(n as u32);
    check_op(op, dn)?;
    let grid = dit_grid(d, n);
    let shifts: Vec<na::DMatrix<C64>> =
        grid.iter()
        .map(|s| nqudit_shift(d, s))
        .collect::<WeylResult<_>>()?;
    let phases: Vec<na::DMatrix<C64>> =
        grid.iter()
        .map(|t| nqudit_phase(d, t))
        .collect::<WeylResult<_>>()?;
    let norm = 1.0 / dn as f64;
    let mut coeffs = WeylCoeffs::default();
    for (s, xs) in grid.iter().zip(&shifts) {
        for (t, zt) in grid.iter().zip(&phases) {
            let g = xs * zt;
            let tr = round10(trace(&(dag(&g) * op)));
            coeffs.insert((s.clone(), t.clone()), tr * norm);
        }
    }
    Ok(coeffs)
}

/// Construct the modular sign-flip permutation operator, with
/// *P* ∣*i*⟩ = ∣(−*i*) mod *d*⟩.
pub fn flip_sign(d: usize) -> WeylResult<na::DMatrix<C64>> {
    check_dim(d)?;
    let mut p: na::DMatrix<C64> = na::DMatrix::zeros(d, d);
    p[(0, 0)] = C64::from(1.0);
    for i in 1..d { p[(d - i, i)] = C64::from(1.0); }
    Ok(p)
}

/// Arithmetic performed on the target dit by [`cnot_qudit`].
///
/// Both conventions come from Alber et al., J. Phys. A: Math. Gen. **34**,
/// 8821 (2001), and both reduce to the standard CNOT at *d* = 2.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CnotConvention {
    /// ∣*i*⟩∣*j*⟩ → ∣*i*⟩∣(*i* − *j*) mod *d*⟩
    Difference,
    /// ∣*i*⟩∣*j*⟩ → ∣*i*⟩∣(*i* + *j*) mod *d*⟩
    Sum,
}

/// Construct the generalized two-qudit CNOT gate
/// Σ<sub>*i*</sub> ∣*i*⟩⟨*i*∣ ⊗ *W*<sub>*i*</sub>.
///
/// Under [`CnotConvention::Difference`], *W*<sub>*i*</sub> =
/// *X*<sup>*i*</sup> *P* with *P* the [`flip_sign`] operator; under
/// [`CnotConvention::Sum`], *W*<sub>*i*</sub> = *X*<sup>*i*</sup>. In both
/// cases *W*₀ is the identity.
pub fn cnot_qudit(d: usize, convention: CnotConvention)
    -> WeylResult<na::DMatrix<C64>>
{
    check_dim(d)?;
    let p = flip_sign(d)?;
    let x = shift(d)?;
    let mut c = outer(d, 0, 0)?.kronecker(&eye(d));
    for i in 1..d {
        let xi = matrix_power(&x, i)?;
        let wi = match convention {
            CnotConvention::Difference => xi * &p,
            CnotConvention::Sum => xi,
        };
        c += outer(d, i, i)?.kronecker(&wi);
    }
    Ok(c)
}

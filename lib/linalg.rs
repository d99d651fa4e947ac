//! Thin dense complex-matrix layer underlying all operator constructions.
//!
//! Everything here is a small wrapper over [`na::DMatrix<C64>`]: standard
//! basis kets and rank-one outer products, conjugate transposes, traces,
//! integer matrix powers, Kronecker-product folds, and tensor-factor
//! permutation. The core algebra in [`crate::weyl`] is written entirely in
//! terms of these primitives, so a different dense backend would only need to
//! replace this module.

use nalgebra as na;
use num_complex::Complex64 as C64;
use crate::error::{ WeylError, WeylResult };

/// Return the `d × 1` standard basis column vector ∣`i`⟩.
pub fn ket(d: usize, i: usize) -> WeylResult<na::DMatrix<C64>> {
    if i >= d { return Err(WeylError::InvalidIndex { index: i, dim: d }); }
    let mut k: na::DMatrix<C64> = na::DMatrix::zeros(d, 1);
    k[(i, 0)] = C64::from(1.0);
    Ok(k)
}

/// Return the `1 × d` standard basis row vector ⟨`i`∣.
pub fn bra(d: usize, i: usize) -> WeylResult<na::DMatrix<C64>> {
    ket(d, i).map(|k| k.adjoint())
}

/// Return the `d × d` rank-one operator ∣`i`⟩⟨`j`∣.
pub fn outer(d: usize, i: usize, j: usize) -> WeylResult<na::DMatrix<C64>> {
    if i >= d { return Err(WeylError::InvalidIndex { index: i, dim: d }); }
    if j >= d { return Err(WeylError::InvalidIndex { index: j, dim: d }); }
    let mut m: na::DMatrix<C64> = na::DMatrix::zeros(d, d);
    m[(i, j)] = C64::from(1.0);
    Ok(m)
}

/// Return the `d × d` identity matrix.
pub fn eye(d: usize) -> na::DMatrix<C64> {
    na::DMatrix::identity(d, d)
}

/// Return the `1 × 1` identity, the seed for all Kronecker-product folds.
pub fn scalar_one() -> na::DMatrix<C64> {
    na::DMatrix::from_diagonal_element(1, 1, C64::from(1.0))
}

/// Return the conjugate transpose of `m`.
pub fn dag(m: &na::DMatrix<C64>) -> na::DMatrix<C64> {
    m.adjoint()
}

/// Return the trace of a square matrix.
pub fn trace(m: &na::DMatrix<C64>) -> C64 {
    m.trace()
}

/// Return `m` raised to the `k`-th power; `k = 0` gives the identity.
pub fn matrix_power(m: &na::DMatrix<C64>, k: usize)
    -> WeylResult<na::DMatrix<C64>>
{
    if !m.is_square() {
        return Err(
            WeylError::NonSquare { rows: m.nrows(), cols: m.ncols() });
    }
    let acc = (0..k).fold(eye(m.nrows()), |acc, _| acc * m);
    Ok(acc)
}

/// Return the Kronecker product of all matrices in `ops`, left to right.
///
/// The empty slice yields the 1×1 identity.
pub fn tensor(ops: &[na::DMatrix<C64>]) -> na::DMatrix<C64> {
    ops.iter().fold(scalar_one(), |acc, m| acc.kronecker(m))
}

/// Return the `k`-fold Kronecker product of `m` with itself.
///
/// `k = 0` yields the 1×1 identity.
pub fn tensor_pow(m: &na::DMatrix<C64>, k: usize) -> na::DMatrix<C64> {
    (0..k).fold(scalar_one(), |acc, _| acc.kronecker(m))
}

/// Permute the tensor factors of an operator.
///
/// `dims` gives the per-subsystem dimensions of `m` (which must be square
/// with side length equal to their product) and `perm` is a permutation of
/// the 1-based subsystem labels `1..=dims.len()`: factor `k` of the output is
/// factor `perm[k]` of the input. In particular, for `m = A ⊗ B` the
/// permutation `[2, 1]` yields `B ⊗ A`.
pub fn syspermute(
    m: &na::DMatrix<C64>,
    perm: &[usize],
    dims: &[usize],
) -> WeylResult<na::DMatrix<C64>>
{
    let nsub = dims.len();
    let mut sorted: Vec<usize> = perm.to_vec();
    sorted.sort_unstable();
    if perm.len() != nsub
        || sorted.iter().enumerate().any(|(k, p)| *p != k + 1)
    {
        return Err(
            WeylError::InvalidPermutation { perm: perm.to_vec(), m: nsub });
    }
    let total: usize = dims.iter().product();
    if m.nrows() != total || m.ncols() != total {
        return Err(WeylError::ShapeMismatch {
            rows: m.nrows(), cols: m.ncols(), expected: total });
    }
    let dims_out: Vec<usize> = perm.iter().map(|p| dims[p - 1]).collect();
    // index map: output (row or column) index -> input index
    let lut: Vec<usize> =
        (0..total)
        .map(|idx| {
            let multi = split_index(idx, &dims_out);
            let mut multi_in = vec![0; nsub];
            perm.iter().zip(&multi)
                .for_each(|(p, i)| { multi_in[p - 1] = *i; });
            join_index(&multi_in, dims)
        })
        .collect();
    let out = na::DMatrix::from_fn(
        total, total, |r, c| m[(lut[r], lut[c])]);
    Ok(out)
}

// decompose a flat index into per-subsystem indices, leftmost factor most
// significant (matching the Kronecker-product convention)
fn split_index(mut idx: usize, dims: &[usize]) -> Vec<usize> {
    let mut multi = vec![0; dims.len()];
    for (k, d) in dims.iter().enumerate().rev() {
        multi[k] = idx % d;
        idx /= d;
    }
    multi
}

fn join_index(multi: &[usize], dims: &[usize]) -> usize {
    multi.iter().zip(dims).fold(0, |acc, (i, d)| acc * d + i)
}

/// Maximum absolute elementwise difference between two same-shaped matrices.
pub fn max_abs_diff(a: &na::DMatrix<C64>, b: &na::DMatrix<C64>) -> f64 {
    a.iter().zip(b.iter())
        .map(|(x, y)| (x - y).norm())
        .fold(0.0, f64::max)
}

/// Build a matrix from an explicit row-major list of entries.
///
/// Convenience for tests and small fixed operators.
pub fn from_rows(n: usize, entries: &[C64]) -> na::DMatrix<C64> {
    na::DMatrix::from_row_iterator(
        n, entries.len() / n, entries.iter().copied())
}

#[cfg(test)]
mod test {
    use super::*;

    fn approx_eq(a: &na::DMatrix<C64>, b: &na::DMatrix<C64>) -> bool {
        a.shape() == b.shape() && max_abs_diff(a, b) < 1e-12
    }

    #[test]
    fn ket_bra_outer() {
        let k = ket(3, 1).unwrap();
        assert_eq!(k.shape(), (3, 1));
        assert_eq!(k[(1, 0)], C64::from(1.0));
        let b = bra(3, 2).unwrap();
        assert_eq!(b.shape(), (1, 3));
        assert_eq!(b[(0, 2)], C64::from(1.0));
        let o = outer(3, 1, 2).unwrap();
        assert!(approx_eq(&o, &(k * b)));
        assert!(ket(3, 3).is_err());
        assert!(outer(2, 0, 5).is_err());
    }

    #[test]
    fn power() {
        let x = from_rows(2, &[
            C64::from(0.0), C64::from(1.0),
            C64::from(1.0), C64::from(0.0),
        ]);
        assert!(approx_eq(&matrix_power(&x, 0).unwrap(), &eye(2)));
        assert!(approx_eq(&matrix_power(&x, 1).unwrap(), &x));
        assert!(approx_eq(&matrix_power(&x, 2).unwrap(), &eye(2)));
        let rect: na::DMatrix<C64> = na::DMatrix::zeros(2, 3);
        assert!(matrix_power(&rect, 2).is_err());
    }

    #[test]
    fn tensor_fold() {
        assert!(approx_eq(&tensor(&[]), &scalar_one()));
        let a = eye(2);
        let b = from_rows(2, &[
            C64::from(1.0), C64::from(0.0),
            C64::from(0.0), C64::from(-1.0),
        ]);
        let ab = tensor(&[a.clone(), b.clone()]);
        assert_eq!(ab.shape(), (4, 4));
        assert!(approx_eq(&ab, &a.kronecker(&b)));
        assert!(approx_eq(&tensor_pow(&a, 3), &eye(8)));
        assert!(approx_eq(&tensor_pow(&a, 0), &scalar_one()));
    }

    #[test]
    fn syspermute_swap() {
        let a = from_rows(2, &[
            C64::from(1.0), C64::from(2.0),
            C64::from(3.0), C64::from(4.0),
        ]);
        let b = from_rows(3, &[
            C64::from(0.0), C64::from(1.0), C64::from(0.0),
            C64::from(1.0), C64::from(0.0), C64::from(0.0),
            C64::from(0.0), C64::from(0.0), C64::from(1.0),
        ]);
        let ab = a.kronecker(&b);
        let ba = b.kronecker(&a);
        let ident = syspermute(&ab, &[1, 2], &[2, 3]).unwrap();
        assert!(approx_eq(&ident, &ab));
        let swapped = syspermute(&ab, &[2, 1], &[2, 3]).unwrap();
        assert!(approx_eq(&swapped, &ba));
    }

    #[test]
    fn syspermute_three_factors() {
        let a = eye(2) * C64::from(2.0);
        let b = from_rows(2, &[
            C64::from(0.0), C64::from(1.0),
            C64::from(1.0), C64::from(0.0),
        ]);
        let c = from_rows(2, &[
            C64::from(1.0), C64::from(0.0),
            C64::from(0.0), C64::from(-1.0),
        ]);
        let abc = tensor(&[a.clone(), b.clone(), c.clone()]);
        let cab = tensor(&[c.clone(), a.clone(), b.clone()]);
        let got = syspermute(&abc, &[3, 1, 2], &[2, 2, 2]).unwrap();
        assert!(approx_eq(&got, &cab));
    }

    #[test]
    fn syspermute_validation() {
        let m = eye(4);
        assert!(syspermute(&m, &[1, 1], &[2, 2]).is_err());
        assert!(syspermute(&m, &[1, 2, 3], &[2, 2]).is_err());
        assert!(syspermute(&m, &[1, 2], &[2, 3]).is_err());
    }

    #[test]
    fn dag_trace() {
        let m = from_rows(2, &[
            C64::new(1.0, 1.0), C64::new(0.0, 2.0),
            C64::new(3.0, 0.0), C64::new(4.0, -1.0),
        ]);
        let md = dag(&m);
        assert_eq!(md[(0, 1)], C64::new(3.0, 0.0));
        assert_eq!(md[(1, 0)], C64::new(0.0, -2.0));
        assert_eq!(trace(&m), C64::new(5.0, 0.0));
    }
}

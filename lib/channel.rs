//! Application of quantum channels given by Kraus operators.

use nalgebra as na;
use num_complex::Complex64 as C64;
use crate::{
    error::{ WeylError, WeylResult },
    linalg::{ dag, eye, scalar_one },
};

/// Whether to apply a channel or its adjoint.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChannelSide {
    /// ρ → Σ<sub>*i*</sub> K<sub>*i*</sub> ρ K<sub>*i*</sub>†
    Forward,
    /// ρ → Σ<sub>*i*</sub> K<sub>*i*</sub>† ρ K<sub>*i*</sub>
    Adjoint,
}

/// Apply the channel with Kraus operators `kraus` to the state `rho`.
///
/// All Kraus operators must be square with the same dimensions as `rho`.
pub fn apply_channel(
    kraus: &[na::DMatrix<C64>],
    rho: &na::DMatrix<C64>,
    side: ChannelSide,
) -> WeylResult<na::DMatrix<C64>>
{
    if kraus.is_empty() { return Err(WeylError::EmptyKrausSet); }
    let dim = rho.nrows();
    if rho.ncols() != dim {
        return Err(WeylError::ShapeMismatch {
            rows: rho.nrows(), cols: rho.ncols(), expected: dim });
    }
    for k in kraus {
        if k.nrows() != dim || k.ncols() != dim {
            return Err(WeylError::ShapeMismatch {
                rows: k.nrows(), cols: k.ncols(), expected: dim });
        }
    }
    let mut acc: na::DMatrix<C64> = na::DMatrix::zeros(dim, dim);
    for k in kraus {
        let k_eff = match side {
            ChannelSide::Forward => k.clone(),
            ChannelSide::Adjoint => dag(k),
        };
        acc += &k_eff * rho * k_eff.adjoint();
    }
    Ok(acc)
}

/// Apply a channel to subsystem `sys` of a multipartite state.
///
/// `dims` gives the per-subsystem dimensions of `rho` and `sys` is the
/// 1-based index of the subsystem the channel acts on; each Kraus operator
/// is embedded by tensoring with identities on every other subsystem.
pub fn apply_channel_on(
    kraus: &[na::DMatrix<C64>],
    rho: &na::DMatrix<C64>,
    sys: usize,
    dims: &[usize],
    side: ChannelSide,
) -> WeylResult<na::DMatrix<C64>>
{
    if kraus.is_empty() { return Err(WeylError::EmptyKrausSet); }
    if sys == 0 || sys > dims.len() {
        return Err(WeylError::InvalidWire { wire: sys, n: dims.len() });
    }
    let total: usize = dims.iter().product();
    if rho.nrows() != total || rho.ncols() != total {
        return Err(WeylError::ShapeMismatch {
            rows: rho.nrows(), cols: rho.ncols(), expected: total });
    }
    let dsys = dims[sys - 1];
    for k in kraus {
        if k.nrows() != dsys || k.ncols() != dsys {
            return Err(WeylError::ShapeMismatch {
                rows: k.nrows(), cols: k.ncols(), expected: dsys });
        }
    }
    let mut acc: na::DMatrix<C64> = na::DMatrix::zeros(total, total);
    for k in kraus {
        let k_eff = match side {
            ChannelSide::Forward => k.clone(),
            ChannelSide::Adjoint => dag(k),
        };
        let mut a = scalar_one();
        for (j, dj) in dims.iter().enumerate() {
            a = if j + 1 == sys {
                a.kronecker(&k_eff)
            } else {
                a.kronecker(&eye(*dj))
            };
        }
        acc += &a * rho * a.adjoint();
    }
    Ok(acc)
}

//! Multi-qubit gates assembled by tensor products and subsystem
//! permutation.

use nalgebra as na;
use num_complex::Complex64 as C64;
use crate::{
    error::{ WeylError, WeylResult },
    linalg::{ eye, outer, syspermute, tensor_pow },
    pauli::PAULI_X,
};

/// Construct the CNOT gate on wires `control` and `target` of an `n`-qubit
/// register.
///
/// Wires are 1-based. The gate is assembled as CX ⊗ 1<sup>⊗(*n*−2)</sup>
/// acting on the control and target wires first, then permuted back to the
/// natural wire order with [`syspermute`].
pub fn cnot(control: usize, target: usize, n: usize)
    -> WeylResult<na::DMatrix<C64>>
{
    for wire in [control, target] {
        if wire == 0 || wire > n {
            return Err(WeylError::InvalidWire { wire, n });
        }
    }
    if control == target {
        return Err(WeylError::IdenticalWires(control));
    }
    let dims = vec![2; n];
    // slot 1 = control, slot 2 = target, remaining wires ascending
    let mut arrange: Vec<usize> = vec![control, target];
    arrange.extend((1..=n).filter(|w| *w != control && *w != target));
    // inverse permutation: wire w sits at slot perm[w - 1]
    let mut perm = vec![0; n];
    for (slot, w) in arrange.iter().enumerate() { perm[w - 1] = slot + 1; }
    let cx =
        outer(2, 0, 0)?.kronecker(&eye(2))
        + outer(2, 1, 1)?.kronecker(&*PAULI_X);
    let embedded = cx.kronecker(&tensor_pow(&eye(2), n - 2));
    syspermute(&embedded, &perm, &dims)
}

#[cfg(test)]
mod test {
    use crate::linalg::{ from_rows, max_abs_diff };
    use super::*;

    fn approx_eq(a: &na::DMatrix<C64>, b: &na::DMatrix<C64>) -> bool {
        a.shape() == b.shape() && max_abs_diff(a, b) < 1e-12
    }

    #[test]
    fn two_qubit_cnot() {
        let expected = from_rows(4, &[
            C64::from(1.0), C64::from(0.0), C64::from(0.0), C64::from(0.0),
            C64::from(0.0), C64::from(1.0), C64::from(0.0), C64::from(0.0),
            C64::from(0.0), C64::from(0.0), C64::from(0.0), C64::from(1.0),
            C64::from(0.0), C64::from(0.0), C64::from(1.0), C64::from(0.0),
        ]);
        assert!(approx_eq(&cnot(1, 2, 2).unwrap(), &expected));
        let reversed = from_rows(4, &[
            C64::from(1.0), C64::from(0.0), C64::from(0.0), C64::from(0.0),
            C64::from(0.0), C64::from(0.0), C64::from(0.0), C64::from(1.0),
            C64::from(0.0), C64::from(0.0), C64::from(1.0), C64::from(0.0),
            C64::from(0.0), C64::from(1.0), C64::from(0.0), C64::from(0.0),
        ]);
        assert!(approx_eq(&cnot(2, 1, 2).unwrap(), &reversed));
    }

    #[test]
    fn three_qubit_cnot_action() {
        // control wire 1, target wire 3: ∣a b c⟩ → ∣a b (c ⊕ a)⟩
        let c13 = cnot(1, 3, 3).unwrap();
        for a in 0..2 {
            for b in 0..2 {
                for c in 0..2 {
                    let col = (a * 2 + b) * 2 + c;
                    let row = (a * 2 + b) * 2 + (c ^ a);
                    assert_eq!(c13[(row, col)], C64::from(1.0));
                }
            }
        }
        assert_eq!(c13.iter().map(|z| z.norm()).sum::<f64>(), 8.0);
    }

    #[test]
    fn wire_validation() {
        assert!(cnot(0, 2, 2).is_err());
        assert!(cnot(1, 3, 2).is_err());
        assert!(cnot(1, 1, 2).is_err());
    }
}

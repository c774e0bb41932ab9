//! Reduced ate pairing over BN254 and target-group exponentiation.
//!
//! `pairing` is exactly bilinear: `e(aP, bQ) == e(P, Q)^(ab)` under the
//! equality of `Gt`. Every downstream setup-verification check rests on
//! that identity holding exactly.

use ark_bn254::Bn254;
use ark_ec::pairing::{Pairing, PairingOutput};
use ark_ec::CurveGroup;
use ark_ff::Zero;

use crate::fr::Fr;
use crate::group::{G1, G2};

/// Element of the pairing target group (a subgroup of Fq12).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct Gt(pub(crate) PairingOutput<Bn254>);

impl Gt {
    /// Multiplicative identity of the target group.
    pub fn identity() -> Self {
        Gt(PairingOutput::zero())
    }

    pub fn is_identity(&self) -> bool {
        self.0.is_zero()
    }

    /// Exponentiation by a scalar.
    pub fn exp(&self, scalar: &Fr) -> Self {
        Gt(self.0 * scalar.0)
    }
}

/// Reduced (final-exponentiated) ate pairing.
pub fn pairing(p: &G1, q: &G2) -> Gt {
    Gt(Bn254::pairing(p.0.into_affine(), q.0.into_affine()))
}

/// Target-group exponentiation, the multiplicative counterpart of scalar
/// multiplication.
pub fn gt_exp(element: &Gt, scalar: &Fr) -> Gt {
    element.exp(scalar)
}

//! Power-of-two evaluation domain over the BN254 scalar field.
//!
//! A `Radix2Domain` of size `d` is the set of powers of a primitive d-th
//! root of unity. It exists to evaluate Lagrange basis polynomials at an
//! arbitrary point, which is how a trusted-setup contribution commits to a
//! secret evaluation point.

use ark_bn254::Fr as ArkFr;
use ark_ff::FftField;
use std::fmt;

use crate::fr::Fr;

/// Errors constructing an evaluation domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DomainError {
    /// Requested size is zero or not a power of two.
    NotPowerOfTwo(usize),
    /// Requested size exceeds the two-adicity of the scalar field, so no
    /// root of unity of that order exists.
    NoRootOfUnity(usize),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotPowerOfTwo(size) => {
                write!(f, "domain size {size} is not a power of two")
            }
            DomainError::NoRootOfUnity(size) => {
                write!(f, "no root of unity of order {size} in the scalar field")
            }
        }
    }
}

impl std::error::Error for DomainError {}

/// Multiplicative subgroup of order `size` (a power of two), generated by
/// `omega`. Index `i` of every per-point result corresponds to the domain
/// point `omega^i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Radix2Domain {
    size: usize,
    omega: Fr,
}

impl Radix2Domain {
    pub fn new(size: usize) -> Result<Self, DomainError> {
        if size == 0 || !size.is_power_of_two() {
            return Err(DomainError::NotPowerOfTwo(size));
        }
        let omega = ArkFr::get_root_of_unity(size as u64)
            .map(Fr)
            .ok_or(DomainError::NoRootOfUnity(size))?;
        Ok(Radix2Domain { size, omega })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Primitive root of unity of order `size()`. Exposed so callers can
    /// reconstruct the same domain independently.
    pub fn omega(&self) -> Fr {
        self.omega
    }

    /// Domain point `omega^i`.
    pub fn element(&self, i: usize) -> Fr {
        debug_assert!(i < self.size);
        self.omega.exp(i as u32)
    }

    /// Vanishing polynomial `Z(tau) = tau^size - 1`; zero exactly on the
    /// domain points.
    pub fn evaluate_vanishing(&self, tau: &Fr) -> Fr {
        tau.exp(self.size as u32) - Fr::one()
    }

    /// Evaluate all `size` Lagrange basis polynomials at `tau`.
    ///
    /// Uses the barycentric form `L_i(tau) = Z(tau) * omega^i / (size *
    /// (tau - omega^i))`. When `tau` lies on the domain the formula is
    /// singular, so that case is detected up front through the vanishing
    /// polynomial and yields the exact unit vector instead.
    pub fn lagrange_coeffs(&self, tau: &Fr) -> Vec<Fr> {
        let vanishing = self.evaluate_vanishing(tau);
        if vanishing.is_zero() {
            return self.lagrange_coeffs_on_domain(tau);
        }

        // size != 0 in the field: size is a power of two below 2^adicity,
        // and the field has odd characteristic.
        let size_inv = inverse_checked(Fr::from_u64(self.size as u64));

        let mut coeffs = Vec::with_capacity(self.size);
        let mut numerator = vanishing * size_inv;
        let mut point = Fr::one();
        for _ in 0..self.size {
            // tau is off the domain, so tau - omega^i is nonzero.
            coeffs.push(numerator * inverse_checked(*tau - point));
            numerator = numerator * self.omega;
            point = point * self.omega;
        }
        coeffs
    }

    // tau^size == 1, so tau is one of the domain points; the basis
    // polynomial at that point evaluates to 1 and all others to 0.
    fn lagrange_coeffs_on_domain(&self, tau: &Fr) -> Vec<Fr> {
        let mut coeffs = vec![Fr::zero(); self.size];
        let mut point = Fr::one();
        let mut hit = false;
        for coeff in coeffs.iter_mut() {
            if point == *tau {
                *coeff = Fr::one();
                hit = true;
                break;
            }
            point = point * self.omega;
        }
        debug_assert!(hit, "vanishing root not generated by omega");
        coeffs
    }
}

fn inverse_checked(x: Fr) -> Fr {
    x.inverse().unwrap_or_else(|_| {
        debug_assert!(false, "inverse of zero in barycentric evaluation");
        Fr::zero()
    })
}

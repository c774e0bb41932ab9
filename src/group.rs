//! BN254 curve groups (G1, G2) for ceremony arithmetic.
//!
//! Both groups share one contract, expressed as the `Group` trait: identity,
//! canonical generator, secure-random sampling and scalar multiplication by
//! `Fr`. Values are projective internally; equality normalizes the
//! representation, so two encodings of the same point compare equal.
//!
//! This layer trusts its inputs: every `G1`/`G2` it receives must have been
//! produced by these constructors (or copied verbatim from another instance
//! of this layer), so the group law has no failure paths.

use ark_bn254::{G1Projective, G2Projective};
use ark_ec::Group as ArkGroup;
use ark_ff::Zero;
use ark_std::UniformRand;
use rand::{CryptoRng, RngCore};
use std::ops::{Add, Mul, Neg, Sub};

use crate::fr::Fr;

/// Common contract of the two pairing source groups.
pub trait Group:
    Copy
    + Clone
    + PartialEq
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + Mul<Fr, Output = Self>
    + 'static
{
    /// Additive identity (the point at infinity).
    fn zero() -> Self;

    /// Canonical generator.
    fn one() -> Self;

    /// Uniform group element from a caller-supplied secure source.
    fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self;

    /// Resample until the element is not the identity.
    fn random_nonzero<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        loop {
            let p = Self::random(rng);
            if !p.is_zero() {
                return p;
            }
        }
    }

    fn is_zero(&self) -> bool;

    /// Normalized comparison of (possibly distinct) projective encodings.
    fn is_equal(&self, other: &Self) -> bool {
        self == other
    }

    /// Scalar multiplication. Scalar zero or the identity point both map to
    /// the identity.
    fn scalar_mul(&self, scalar: &Fr) -> Self {
        *self * *scalar
    }
}

/// Point on the BN254 base curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct G1(pub(crate) G1Projective);

/// Point on the BN254 twist over the quadratic extension field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct G2(pub(crate) G2Projective);

impl Group for G1 {
    fn zero() -> Self {
        G1(G1Projective::zero())
    }

    fn one() -> Self {
        G1(G1Projective::generator())
    }

    fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        G1(G1Projective::rand(rng))
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Group for G2 {
    fn zero() -> Self {
        G2(G2Projective::zero())
    }

    fn one() -> Self {
        G2(G2Projective::generator())
    }

    fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        G2(G2Projective::rand(rng))
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Add for G1 {
    type Output = G1;

    fn add(self, rhs: G1) -> G1 {
        G1(self.0 + rhs.0)
    }
}

impl Sub for G1 {
    type Output = G1;

    fn sub(self, rhs: G1) -> G1 {
        G1(self.0 - rhs.0)
    }
}

impl Neg for G1 {
    type Output = G1;

    fn neg(self) -> G1 {
        G1(-self.0)
    }
}

impl Mul<Fr> for G1 {
    type Output = G1;

    fn mul(self, scalar: Fr) -> G1 {
        G1(self.0 * scalar.0)
    }
}

impl Add for G2 {
    type Output = G2;

    fn add(self, rhs: G2) -> G2 {
        G2(self.0 + rhs.0)
    }
}

impl Sub for G2 {
    type Output = G2;

    fn sub(self, rhs: G2) -> G2 {
        G2(self.0 - rhs.0)
    }
}

impl Neg for G2 {
    type Output = G2;

    fn neg(self) -> G2 {
        G2(-self.0)
    }
}

impl Mul<Fr> for G2 {
    type Output = G2;

    fn mul(self, scalar: Fr) -> G2 {
        G2(self.0 * scalar.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0xce11a)
    }

    fn check_identities<G: Group>(rng: &mut StdRng) {
        assert!(G::zero().is_zero());
        assert!(!G::one().is_zero());

        let p = G::random(rng);
        assert!(p.is_equal(&(p + G::zero())));
        assert!((p + (-p)).is_zero());
        assert!((p - p).is_zero());
    }

    fn check_commutative_associative<G: Group>(rng: &mut StdRng) {
        for _ in 0..20 {
            let a = G::random(rng);
            let b = G::random(rng);
            let c = G::random(rng);

            assert!((a + b).is_equal(&(b + a)));
            assert!(((a + b) + c).is_equal(&(a + (b + c))));
        }
    }

    fn check_scalar_mul<G: Group>(rng: &mut StdRng) {
        let p = G::random(rng);

        assert!(p.scalar_mul(&Fr::zero()).is_zero());
        assert!(p.scalar_mul(&Fr::one()).is_equal(&p));
        assert!(G::zero().scalar_mul(&Fr::random(rng)).is_zero());

        let mut acc = G::zero();
        for _ in 0..16 {
            acc = acc + p;
        }
        assert!(acc.is_equal(&(p * Fr::from_u64(16))));

        // -(kP) == (-k)P
        let k = Fr::random(rng);
        assert!((-(p * k)).is_equal(&(p * (-k))));
    }

    fn check_generator_multiples<G: Group>() {
        let sum = (0..100u64)
            .map(|i| G::one() * Fr::from_u64(i))
            .fold(G::zero(), |acc, p| acc + p);

        assert!(sum.is_equal(&(G::one() * Fr::from_u64(4950))));
    }

    fn check_random_nonzero<G: Group>(rng: &mut StdRng) {
        for _ in 0..10 {
            assert!(!G::random_nonzero(rng).is_zero());
        }
    }

    #[test]
    fn test_g1_group_laws() {
        let mut rng = rng();
        check_identities::<G1>(&mut rng);
        check_commutative_associative::<G1>(&mut rng);
        check_scalar_mul::<G1>(&mut rng);
        check_generator_multiples::<G1>();
        check_random_nonzero::<G1>(&mut rng);
    }

    #[test]
    fn test_g2_group_laws() {
        let mut rng = rng();
        check_identities::<G2>(&mut rng);
        check_commutative_associative::<G2>(&mut rng);
        check_scalar_mul::<G2>(&mut rng);
        check_generator_multiples::<G2>();
        check_random_nonzero::<G2>(&mut rng);
    }

    #[test]
    fn test_projective_equality_normalizes() {
        let mut rng = rng();
        let p = G1::random(&mut rng);

        // (P + P) - P and P reach the same point through different
        // projective encodings.
        let q = (p + p) - p;
        assert!(p.is_equal(&q));
        assert_eq!(p, q);
    }
}

//! BN254 scalar field element (Fr) for ceremony arithmetic.
//!
//! Wraps the arkworks backend in a fixed-layout value type. Every operation
//! returns a new value; a valid `Fr` always holds a residue in `[0, r)`.

use ark_bn254::Fr as ArkFr;
use ark_ff::{Field, One, PrimeField, Zero};
use ark_std::UniformRand;
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Recoverable scalar-field errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// Decimal input contained a non-digit character or was empty.
    Parse,
    /// Multiplicative inverse requested for the zero element.
    DivisionByZero,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Parse => write!(f, "malformed decimal field element"),
            FieldError::DivisionByZero => write!(f, "inverse of the zero field element"),
        }
    }
}

impl std::error::Error for FieldError {}

/// Element of the BN254 scalar field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct Fr(pub(crate) ArkFr);

impl Fr {
    pub fn zero() -> Self {
        Fr(ArkFr::zero())
    }

    pub fn one() -> Self {
        Fr(ArkFr::one())
    }

    pub fn from_u64(value: u64) -> Self {
        Fr(ArkFr::from(value))
    }

    /// Uniform field element from a caller-supplied secure source.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Fr(ArkFr::rand(rng))
    }

    /// Parse a base-10 integer into its field residue.
    ///
    /// Values at or above the field order reduce modulo `r`. Any non-digit
    /// byte (including sign characters) fails with `FieldError::Parse`.
    pub fn from_decimal_str(s: &str) -> Result<Self, FieldError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FieldError::Parse);
        }
        let value = BigUint::parse_bytes(s.as_bytes(), 10).ok_or(FieldError::Parse)?;
        Ok(Fr(ArkFr::from_le_bytes_mod_order(&value.to_bytes_le())))
    }

    /// Repeated multiplication; exponent 0 yields `one()`.
    pub fn exp(&self, exponent: u32) -> Self {
        Fr(self.0.pow([u64::from(exponent)]))
    }

    pub fn inverse(&self) -> Result<Self, FieldError> {
        self.0.inverse().map(Fr).ok_or(FieldError::DivisionByZero)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Add for Fr {
    type Output = Fr;

    fn add(self, rhs: Fr) -> Fr {
        Fr(self.0 + rhs.0)
    }
}

impl Sub for Fr {
    type Output = Fr;

    fn sub(self, rhs: Fr) -> Fr {
        Fr(self.0 - rhs.0)
    }
}

impl Mul for Fr {
    type Output = Fr;

    fn mul(self, rhs: Fr) -> Fr {
        Fr(self.0 * rhs.0)
    }
}

impl Neg for Fr {
    type Output = Fr;

    fn neg(self) -> Fr {
        Fr(-self.0)
    }
}

//! Canonical big-endian encoding for ceremony values.
//!
//! Contributions cross process and machine boundaries, so every encoded
//! value is validated strictly on the way in: field residues must be
//! canonical (below the modulus), points must lie on the curve and in the
//! prime-order subgroup, and the point at infinity is not encodable.
//!
//! G2 coordinates use the `x_im || x_re || y_im || y_re` layout, each
//! component 32 bytes big-endian.

use ark_bn254::{Fq, Fq2, Fr as ArkFr, G1Affine, G2Affine};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{BigInt, BigInteger, PrimeField};
use num_bigint::BigUint;

use crate::fr::Fr;
use crate::group::{Group, G1, G2};

fn be_bytes(repr: BigInt<4>) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&repr.to_bytes_be());
    out
}

fn fq_from_be_bytes_strict(bytes: &[u8; 32]) -> Option<Fq> {
    let value = BigUint::from_bytes_be(bytes);
    if value >= BigUint::from(Fq::MODULUS) {
        return None;
    }
    Fq::from_bigint(BigInt::try_from(value).ok()?)
}

pub fn fr_to_be_bytes(x: &Fr) -> [u8; 32] {
    be_bytes(x.0.into_bigint())
}

/// Canonical scalar parse; rejects residues at or above the field order.
pub fn fr_from_be_bytes_strict(bytes: &[u8; 32]) -> Option<Fr> {
    let value = BigUint::from_bytes_be(bytes);
    if value >= BigUint::from(ArkFr::MODULUS) {
        return None;
    }
    ArkFr::from_bigint(BigInt::try_from(value).ok()?).map(Fr)
}

pub fn g1_to_be_bytes(p: &G1) -> Result<([u8; 32], [u8; 32]), String> {
    if p.is_zero() {
        return Err("g1 point at infinity has no affine encoding".to_string());
    }
    let affine = p.0.into_affine();
    Ok((be_bytes(affine.x.into_bigint()), be_bytes(affine.y.into_bigint())))
}

pub fn g1_from_be_bytes_strict(x_bytes: [u8; 32], y_bytes: [u8; 32]) -> Result<G1, String> {
    let x = fq_from_be_bytes_strict(&x_bytes).ok_or_else(|| "g1 x not canonical".to_string())?;
    let y = fq_from_be_bytes_strict(&y_bytes).ok_or_else(|| "g1 y not canonical".to_string())?;
    let p = G1Affine::new_unchecked(x, y);
    if !p.is_on_curve() {
        return Err("g1 point not on curve".to_string());
    }
    if !p.is_in_correct_subgroup_assuming_on_curve() {
        return Err("g1 point not in subgroup".to_string());
    }
    Ok(G1(p.into_group()))
}

pub fn g2_to_be_bytes(p: &G2) -> Result<([u8; 32], [u8; 32], [u8; 32], [u8; 32]), String> {
    if p.is_zero() {
        return Err("g2 point at infinity has no affine encoding".to_string());
    }
    let affine = p.0.into_affine();
    Ok((
        be_bytes(affine.x.c1.into_bigint()),
        be_bytes(affine.x.c0.into_bigint()),
        be_bytes(affine.y.c1.into_bigint()),
        be_bytes(affine.y.c0.into_bigint()),
    ))
}

pub fn g2_from_be_bytes_strict(
    x_im: [u8; 32],
    x_re: [u8; 32],
    y_im: [u8; 32],
    y_re: [u8; 32],
) -> Result<G2, String> {
    let x_c0 = fq_from_be_bytes_strict(&x_re).ok_or_else(|| "g2 x_re not canonical".to_string())?;
    let x_c1 = fq_from_be_bytes_strict(&x_im).ok_or_else(|| "g2 x_im not canonical".to_string())?;
    let y_c0 = fq_from_be_bytes_strict(&y_re).ok_or_else(|| "g2 y_re not canonical".to_string())?;
    let y_c1 = fq_from_be_bytes_strict(&y_im).ok_or_else(|| "g2 y_im not canonical".to_string())?;
    let p = G2Affine::new_unchecked(Fq2::new(x_c0, x_c1), Fq2::new(y_c0, y_c1));
    if !p.is_on_curve() {
        return Err("g2 point not on curve".to_string());
    }
    if !p.is_in_correct_subgroup_assuming_on_curve() {
        return Err("g2 point not in subgroup".to_string());
    }
    Ok(G2(p.into_group()))
}

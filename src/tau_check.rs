//! Tau-comparison check for trusted-setup contributions.
//!
//! A contributor who claims to have evaluated the Lagrange basis at a
//! secret `tau` publishes the points `L_i(tau) * G`. Given the same `tau`,
//! this module recomputes the coefficients over the fixture QAP's domain
//! and compares point by point. It is a construction-consistency self-test:
//! verifying a contribution without knowing `tau` needs pairing-based
//! checks that live elsewhere.

use rayon::prelude::*;

use crate::fr::Fr;
use crate::group::{Group, G1};
use crate::qap::QapInstance;

/// Check that `claimed_points[i] == L_i(tau) * G1::one()` for every index.
///
/// Returns `false` on any mismatch; that is the normal "contribution does
/// not match" outcome, not an error.
///
/// # Panics
///
/// Panics when `claimed_points.len()` differs from the fixture QAP degree.
/// A wrong-length claim is a caller contract violation, never a soundness
/// verdict.
pub fn verify_tau(claimed_points: &[G1], tau: &Fr) -> bool {
    let qap = QapInstance::example();
    let coeffs = qap.domain().lagrange_coeffs(tau);
    assert_eq!(
        claimed_points.len(),
        coeffs.len(),
        "claimed {} points for a QAP of degree {}",
        claimed_points.len(),
        qap.degree()
    );

    let generator = G1::one();
    claimed_points
        .par_iter()
        .zip(coeffs.par_iter())
        .all(|(point, coeff)| point.is_equal(&(generator * *coeff)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qap::qap_degree_and_omega;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x7a0)
    }

    fn commit_to(tau: &Fr) -> Vec<G1> {
        let qap = QapInstance::example();
        qap.domain()
            .lagrange_coeffs(tau)
            .into_iter()
            .map(|coeff| G1::one() * coeff)
            .collect()
    }

    #[test]
    fn test_round_trip() {
        let mut rng = rng();
        let tau = Fr::random(&mut rng);
        let points = commit_to(&tau);

        assert!(verify_tau(&points, &tau));
    }

    #[test]
    fn test_detects_single_corrupted_point() {
        let mut rng = rng();
        let tau = Fr::random(&mut rng);
        let mut points = commit_to(&tau);

        points[17] = G1::random(&mut rng);
        assert!(!verify_tau(&points, &tau));
    }

    #[test]
    fn test_rejects_wrong_tau() {
        let mut rng = rng();
        let tau = Fr::random(&mut rng);
        let other = Fr::random(&mut rng);
        assert_ne!(tau, other);

        let points = commit_to(&tau);
        assert!(!verify_tau(&points, &other));
    }

    #[test]
    fn test_tau_on_domain_point() {
        // tau == omega^1 exercises the removable-singularity path of the
        // coefficient evaluator end to end.
        let (_, omega) = qap_degree_and_omega();
        let points = commit_to(&omega);

        assert!(verify_tau(&points, &omega));
    }

    #[test]
    #[should_panic(expected = "claimed 255 points")]
    fn test_length_mismatch_is_fatal() {
        let mut rng = rng();
        let tau = Fr::random(&mut rng);
        let mut points = commit_to(&tau);
        points.pop();

        verify_tau(&points, &tau);
    }
}

//! Deterministic example-circuit QAP fixture.
//!
//! The ceremony self-tests run against a fixed synthetic rank-1 constraint
//! system rather than a caller-supplied circuit. Only the shape of the
//! reduced quadratic arithmetic program matters here: its degree and the
//! radix-2 evaluation domain that degree implies. The reduction itself is
//! an external collaborator; this module reproduces its degree arithmetic
//! for the fixed example sizes and nothing else.
//!
//! The fixture constants are deliberately confined to this module; the
//! domain API stays generic over any power-of-two size.

use crate::domain::Radix2Domain;
use crate::fr::Fr;

/// Constraint count of the synthetic example circuit.
pub const EXAMPLE_CONSTRAINTS: usize = 250;
/// Public-input count of the synthetic example circuit.
pub const EXAMPLE_PUBLIC_INPUTS: usize = 4;
/// Expected QAP degree for the example circuit.
pub const EXAMPLE_DEGREE: usize = 256;

/// Reduced QAP of the example circuit, exposing only its degree and
/// evaluation domain.
#[derive(Clone, Copy, Debug)]
pub struct QapInstance {
    degree: usize,
    num_inputs: usize,
    domain: Radix2Domain,
}

impl QapInstance {
    /// Build the fixture QAP. Reconstructs the instance freshly on every
    /// call; callers needing it repeatedly should keep the result.
    ///
    /// # Panics
    ///
    /// Panics if the degree implied by the example sizes is not the
    /// expected power of two. That is an internal consistency violation
    /// (the fixture constants and the reduction disagree), not a
    /// recoverable condition.
    pub fn example() -> Self {
        // The reduction interpolates one polynomial constraint per R1CS
        // constraint plus one per public input plus one, then rounds the
        // domain up to the next power of two.
        let degree = (EXAMPLE_CONSTRAINTS + EXAMPLE_PUBLIC_INPUTS + 1).next_power_of_two();
        assert_eq!(
            degree, EXAMPLE_DEGREE,
            "example QAP degree {degree} does not match the expected {EXAMPLE_DEGREE}"
        );

        let domain = match Radix2Domain::new(degree) {
            Ok(domain) => domain,
            Err(e) => panic!("example QAP domain of size {degree}: {e}"),
        };

        QapInstance {
            degree,
            num_inputs: EXAMPLE_PUBLIC_INPUTS,
            domain,
        }
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    pub fn domain(&self) -> &Radix2Domain {
        &self.domain
    }
}

/// Degree and domain generator of the fixture QAP, for callers that
/// rebuild the evaluation domain on their side.
pub fn qap_degree_and_omega() -> (usize, Fr) {
    let qap = QapInstance::example();
    (qap.degree(), qap.domain().omega())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_degree() {
        let qap = QapInstance::example();
        assert_eq!(qap.degree(), 256);
        assert_eq!(qap.num_inputs(), 4);
        assert_eq!(qap.domain().size(), 256);
    }

    #[test]
    fn test_degree_and_omega_surface() {
        let (degree, omega) = qap_degree_and_omega();
        assert_eq!(degree, 256);
        assert_eq!(omega.exp(256), Fr::one());
        assert_ne!(omega.exp(128), Fr::one());
    }

    #[test]
    fn test_matches_standalone_domain() {
        let qap = QapInstance::example();
        let domain = Radix2Domain::new(256).unwrap();
        assert_eq!(qap.domain().omega(), domain.omega());
    }

    #[test]
    fn test_rebuilt_instances_agree() {
        let a = QapInstance::example();
        let b = QapInstance::example();
        assert_eq!(a.degree(), b.degree());
        assert_eq!(a.domain().omega(), b.domain().omega());
    }
}

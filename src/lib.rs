//! Algebraic substrate for a BN254 trusted-setup ceremony.
//!
//! Scalar-field, curve-group and pairing arithmetic (backed by arkworks),
//! a radix-2 evaluation domain with barycentric Lagrange coefficients, and
//! the tau-comparison check a multi-party setup uses to validate its own
//! contributions.
//!
//! Values are fixed-layout `Copy` types with no shared mutable state, so
//! after `initialize()` every operation is reentrant and thread-safe.

pub mod domain;
pub mod encoding;
pub mod fr;
pub mod group;
pub mod pairing;
pub mod qap;
pub mod tau_check;

pub use domain::{DomainError, Radix2Domain};
pub use fr::{FieldError, Fr};
pub use group::{Group, G1, G2};
pub use pairing::{gt_exp, pairing, Gt};
pub use qap::{qap_degree_and_omega, QapInstance};
pub use tau_check::verify_tau;

use std::sync::OnceLock;

/// Fixed word counts of the layout contract. Callers on the far side of a
/// process boundary overlay buffers of exactly these sizes.
pub const FR_WORDS: usize = 4;
pub const G1_WORDS: usize = 12;
pub const G2_WORDS: usize = 24;
pub const GT_WORDS: usize = 48;

static LAYOUT_CHECK: OnceLock<()> = OnceLock::new();

/// One-time process-wide initialization.
///
/// Idempotent; concurrent first calls are serialized internally. Asserts
/// the fixed-size layout contract of every algebraic type and panics on a
/// mismatch, since that indicates a build or platform bug no runtime
/// handling can repair. The curve parameters themselves are compile-time
/// constants, so there is no further setup to run.
pub fn initialize() {
    LAYOUT_CHECK.get_or_init(|| {
        use std::mem::{align_of, size_of};

        assert_eq!(size_of::<Fr>(), 8 * FR_WORDS);
        assert_eq!(size_of::<G1>(), 8 * G1_WORDS);
        assert_eq!(size_of::<G2>(), 8 * G2_WORDS);
        assert_eq!(size_of::<Gt>(), 8 * GT_WORDS);

        assert_eq!(align_of::<Fr>(), align_of::<u64>());
        assert_eq!(align_of::<G1>(), align_of::<u64>());
        assert_eq!(align_of::<G2>(), align_of::<u64>());
        assert_eq!(align_of::<Gt>(), align_of::<u64>());
    });
}

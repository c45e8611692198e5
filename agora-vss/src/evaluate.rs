//! Evaluation of the secret polynomial and of its public commitment at
//! participant indices.
//!
//! Both evaluators run the same recurrence: the running power `x^i` is a
//! field element that is multiplied by `x` after each term, and the terms
//! `c_i * x^i` are summed either in the scalar field or in G2. Since lifting
//! with the G2 generator is a homomorphism, `lift(P(x)) == Q(x)` holds for
//! every index, which is what share verification relies on.
use crate::codec::{export_scalar, FR_BYTES};
use crate::share::{PrivateShare, PublicKeyShare};
use crate::vector::{CoefficientVector, VerificationVector};
use crate::{ParticipantIndex, VssError};

use bls::{G2Affine, G2Projective, Scalar};
use zeroize::Zeroize;

/// Computes `P(x) = a_0 + a_1 x + ... + a_t x^t (mod r)`.
pub fn scalar_image(coeffs: &CoefficientVector, x: ParticipantIndex) -> Scalar {
    coeffs.polynomial().evaluate(x.as_scalar())
}

/// Computes `P(x)` together with its lift `P(x) * G2`.
pub fn scalar_image_lifted(coeffs: &CoefficientVector, x: ParticipantIndex) -> (Scalar, G2Affine) {
    let image = scalar_image(coeffs, x);
    let lifted = G2Affine::from(G2Affine::generator() * image);
    (image, lifted)
}

/// Computes `P(x)` and returns its big-endian encoding.
pub fn scalar_image_export(coeffs: &CoefficientVector, x: ParticipantIndex) -> [u8; FR_BYTES] {
    let mut image = scalar_image(coeffs, x);
    let out = export_scalar(&image);
    image.zeroize();
    out
}

/// Computes `Q(x) = A_0 + A_1 x + ... + A_t x^t` in G2.
pub fn g2_image(vector: &VerificationVector, x: ParticipantIndex) -> G2Affine {
    vector.polynomial().evaluate(x.as_scalar()).into()
}

/// Computes the public key share `Q(i + 1)` of every participant `i < participants`.
pub fn g2_images(
    vector: &VerificationVector,
    participants: usize,
) -> Result<Vec<PublicKeyShare>, VssError> {
    let indices = ParticipantIndex::all(participants)?.collect::<Vec<ParticipantIndex>>();
    let images = indices
        .iter()
        .map(|x| vector.polynomial().evaluate(x.as_scalar()))
        .collect::<Vec<G2Projective>>();
    let mut normalized = vec![G2Affine::identity(); images.len()];
    G2Projective::batch_normalize(&images, &mut normalized);

    tracing::debug!(
        participants,
        threshold = vector.threshold(),
        "computed public key shares"
    );
    Ok(indices
        .into_iter()
        .zip(normalized)
        .map(|(index, value)| PublicKeyShare::new(index, value))
        .collect())
}

/// Computes the private share `P(i + 1)` of every participant `i < participants`.
pub fn private_shares(
    coeffs: &CoefficientVector,
    participants: usize,
) -> Result<Vec<PrivateShare>, VssError> {
    let shares = ParticipantIndex::all(participants)?
        .map(|x| PrivateShare::new(x, scalar_image(coeffs, x)))
        .collect::<Vec<PrivateShare>>();
    tracing::debug!(
        participants,
        threshold = coeffs.threshold(),
        "computed private shares"
    );
    Ok(shares)
}

use crate::codec::{decode_g2_vector, encode_g2_vector, Compression};
use crate::evaluate::g2_image;
use crate::share::{verify_share, PrivateShare};
use crate::{VssError, MAX_COEFFICIENTS};

use agora_polynomial::Polynomial;
use bls::{G2Affine, G2Projective, Scalar};
use zeroize::Zeroize;

use std::fmt;

pub(crate) fn check_len(len: usize) -> Result<(), VssError> {
    if len == 0 {
        Err(VssError::EmptyPolynomial)
    } else if len > MAX_COEFFICIENTS {
        Err(VssError::DegreeTooLarge(len))
    } else {
        Ok(())
    }
}

/// The dealer's secret polynomial `a_0 + a_1 x + ... + a_t x^t`.
///
/// Holds between 1 and `MAX_COEFFICIENTS` coefficients and is wiped from
/// memory when dropped.
pub struct CoefficientVector(Polynomial<Scalar>);

impl CoefficientVector {
    pub fn new(coeffs: Vec<Scalar>) -> Result<Self, VssError> {
        check_len(coeffs.len())?;
        Ok(Self(Polynomial::new(coeffs)))
    }

    pub fn polynomial(&self) -> &Polynomial<Scalar> {
        &self.0
    }

    pub fn coeffs(&self) -> &[Scalar] {
        self.0.coeffs()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Degree of the polynomial.
    pub fn threshold(&self) -> usize {
        self.len() - 1
    }

    pub fn secret(&self) -> &Scalar {
        &self.coeffs()[0]
    }
}

impl Drop for CoefficientVector {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl fmt::Debug for CoefficientVector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CoefficientVector")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

/// Public commitment `A_i = a_i * G2` to a [`CoefficientVector`].
#[derive(Clone, Debug, PartialEq)]
pub struct VerificationVector(Polynomial<G2Affine>);

impl VerificationVector {
    pub fn new(points: Vec<G2Affine>) -> Result<Self, VssError> {
        check_len(points.len())?;
        Ok(Self(Polynomial::new(points)))
    }

    /// Lifts every coefficient with the G2 generator.
    pub fn lift(coeffs: &CoefficientVector) -> Self {
        let lifted = coeffs
            .coeffs()
            .iter()
            .map(|a| G2Affine::generator() * a)
            .collect::<Vec<G2Projective>>();
        let mut points = vec![G2Affine::identity(); lifted.len()];
        G2Projective::batch_normalize(&lifted, &mut points);
        Self(Polynomial::new(points))
    }

    pub fn from_bytes(
        bytes: &[u8],
        len: usize,
        compression: Compression,
    ) -> Result<Self, VssError> {
        check_len(len)?;
        Self::new(decode_g2_vector(bytes, len, compression)?)
    }

    pub fn to_bytes(&self, compression: Compression) -> Vec<u8> {
        encode_g2_vector(self.points(), compression)
    }

    pub fn polynomial(&self) -> &Polynomial<G2Affine> {
        &self.0
    }

    pub fn points(&self) -> &[G2Affine] {
        self.0.coeffs()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn threshold(&self) -> usize {
        self.len() - 1
    }

    /// Commitment to the shared secret, `A_0`.
    pub fn public_key(&self) -> G2Affine {
        self.points()[0]
    }

    /// Checks a received share against `Q(index)`.
    pub fn verify_share(&self, share: &PrivateShare) -> bool {
        verify_share(share.value(), &g2_image(self, share.index()))
    }
}

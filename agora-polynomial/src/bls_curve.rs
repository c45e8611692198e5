use crate::{Coefficient, EvaluationPoint};
use bls::{G2Affine, G2Projective, Scalar};

impl EvaluationPoint for Scalar {
    fn one() -> Self {
        Self::one()
    }

    fn from_u64(num: u64) -> Self {
        Self::from(num)
    }
}

impl Coefficient<Scalar> for Scalar {
    type Image = Scalar;

    fn zero_image() -> Self::Image {
        Scalar::zero()
    }

    fn scale(&self, by: &Scalar) -> Self::Image {
        self * by
    }
}

impl Coefficient<Scalar> for G2Affine {
    type Image = G2Projective;

    fn zero_image() -> Self::Image {
        G2Projective::identity()
    }

    fn scale(&self, by: &Scalar) -> Self::Image {
        self * by
    }
}

impl Coefficient<Scalar> for G2Projective {
    type Image = G2Projective;

    fn zero_image() -> Self::Image {
        G2Projective::identity()
    }

    fn scale(&self, by: &Scalar) -> Self::Image {
        self * by
    }
}

#[cfg(test)]
crate::macros::test_evaluate!(scalar_coeffs, bls::Scalar, |s: bls::Scalar| s);
#[cfg(test)]
crate::macros::test_evaluate!(g2_affine_coeffs, bls::G2Affine, |s: bls::Scalar| {
    bls::G2Affine::from(bls::G2Affine::generator() * s)
});
#[cfg(test)]
crate::macros::test_evaluate!(g2_projective_coeffs, bls::G2Projective, |s: bls::Scalar| {
    bls::G2Projective::generator() * s
});

use crate::{Coefficient, EvaluationPoint};

#[cfg(feature = "zeroize-poly")]
use zeroize::Zeroize;

#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial<T> {
    coeffs: Vec<T>,
}

impl<T> Polynomial<T> {
    pub fn new(coeffs: Vec<T>) -> Self {
        Self { coeffs }
    }

    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    pub fn into_coeffs(self) -> Vec<T> {
        self.coeffs
    }

    /// Number of coefficients, i.e. `degree + 1` for a non-empty polynomial.
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns `None` for the empty polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Computes `c_0 + c_1 * x + ... + c_d * x^d`.
    ///
    /// Instead of Horner's rule the powers of `at` are kept in a running
    /// accumulator, so the same recurrence (and the same sequence of powers)
    /// is used no matter whether the coefficients are field elements or group
    /// elements. An empty polynomial evaluates to the zero image.
    pub fn evaluate<S>(&self, at: S) -> T::Image
    where
        S: EvaluationPoint,
        T: Coefficient<S>,
    {
        let mut power = S::one();
        let mut image = T::zero_image();
        for coeff in &self.coeffs {
            image += coeff.scale(&power);
            power *= at;
        }
        image
    }

    /// Evaluates the polynomial at a small integer.
    pub fn evaluate_at_u64<S>(&self, at: u64) -> T::Image
    where
        S: EvaluationPoint,
        T: Coefficient<S>,
    {
        self.evaluate(S::from_u64(at))
    }
}

#[cfg(feature = "zeroize-poly")]
impl<T: Zeroize> Zeroize for Polynomial<T> {
    fn zeroize(&mut self) {
        self.coeffs.zeroize();
    }
}

impl<T> From<Vec<T>> for Polynomial<T> {
    fn from(coeffs: Vec<T>) -> Self {
        Self::new(coeffs)
    }
}

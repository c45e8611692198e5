macro_rules! test_evaluate {
    ($name: ident, $t: ty, $lift: expr) => {
        #[cfg(test)]
        mod $name {
            use crate::{Coefficient, EvaluationPoint, Polynomial};
            use bls::Scalar;

            type TestCoeff = $t;
            type TestImage = <TestCoeff as Coefficient<Scalar>>::Image;

            fn coeff(num: u64) -> TestCoeff {
                ($lift)(<Scalar as EvaluationPoint>::from_u64(num))
            }

            fn image(num: u64) -> TestImage {
                From::from(coeff(num))
            }

            #[test]
            fn evaluate_polynomial() {
                // empty polynomial
                let poly = Polynomial::<TestCoeff>::new(Vec::new());
                assert_eq!(poly.degree(), None);
                assert_eq!(
                    poly.evaluate(Scalar::from(7_u64)),
                    <TestCoeff as Coefficient<Scalar>>::zero_image()
                );

                // constant polynomial (y = 53)
                let poly = Polynomial::new(vec![coeff(53)]);
                assert_eq!(poly.degree(), Some(0));
                for x in [1_u64, 2, 3, 250] {
                    assert_eq!(poly.evaluate(Scalar::from(x)), image(53));
                }

                // y = 7 * x^2 + 5 * x + 3
                let poly = Polynomial::new(vec![coeff(3), coeff(5), coeff(7)]);
                assert_eq!(poly.degree(), Some(2));
                assert_eq!(poly.evaluate(Scalar::from(1_u64)), image(15));
                assert_eq!(poly.evaluate(Scalar::from(2_u64)), image(41));
                assert_eq!(poly.evaluate_at_u64::<Scalar>(3), image(81));
                // 3 + 5 * 250 + 7 * 62500
                assert_eq!(poly.evaluate_at_u64::<Scalar>(250), image(438_753));

                // fourth order polynomial
                // y = x^4 + 0 * x^3 + 3 * x^2 + 2 * x + 14
                let poly = Polynomial::new(vec![coeff(14), coeff(2), coeff(3), coeff(0), coeff(1)]);
                let expected = [20_u64, 46, 128, 326, 724, 1430];
                for (x, y) in (1_u64..).zip(expected) {
                    assert_eq!(poly.evaluate(Scalar::from(x)), image(y));
                }
            }

            #[test]
            fn evaluate_at_zero_returns_constant_term() {
                let poly = Polynomial::new(vec![coeff(11), coeff(13), coeff(17)]);
                assert_eq!(poly.evaluate(Scalar::zero()), image(11));
            }
        }
    };
}

pub(crate) use test_evaluate;

#![cfg(feature = "bigint")]

#[cfg(test)]
mod test_bigint_coefficients {

    use num_bigint::BigInt;
    use polynomials::Polynomial;

    type PR = Polynomial<BigInt>;

    fn p(c: &[i64]) -> PR {
        PR::new(c.iter().map(|k| BigInt::from(*k)).collect()).unwrap()
    }

    #[test]
    fn test_binomial_coefficients() {
        // The middle coefficient of (1 + x)^100 is C(100, 50), far beyond u64.
        let f = p(&[1, 1]).pow(100);
        assert_eq!(f.degree(), 100);
        assert_eq!(
            f[50],
            "100891344545564193334812497256".parse::<BigInt>().unwrap()
        );
        assert_eq!(f.evaluate(&BigInt::from(1)), BigInt::from(2).pow(100));
    }

    #[test]
    fn test_mixed_operators() {
        let f = p(&[1, 2, 3]);
        assert_eq!(BigInt::from(10) - &f, p(&[9, -2, -3]));
        assert_eq!(&f * BigInt::from(2), p(&[2, 4, 6]));
        assert_eq!(f.to_string(), "3x^2 + 2x + 1");
    }
}

#[cfg(test)]
mod test_term {

    use intpoly::{EvaluationError, Term};

    #[test]
    fn test_multiply() {
        let a = Term::new(3, 2);
        let b = Term::new(-4, -5);
        assert_eq!(a.multiply(&b), Term::new(-12, -3));
        assert_eq!(a * b, b * a);
        assert_eq!(&a * &Term::new(1, 0), a);
    }

    #[test]
    fn test_negate() {
        let a = Term::new(3, -2);
        assert_eq!(a.negate(), Term::new(-3, -2));
        assert_eq!(-(-a), a);
        assert_eq!(-&a, a.negate());
    }

    #[test]
    fn test_equals() {
        assert!(Term::new(2, 3).equals(&Term::new(2, 3)));
        assert!(!Term::new(2, 3).equals(&Term::new(3, 2)));
        assert!(!Term::new(2, 3).equals(&Term::new(2, 4)));
    }

    #[test]
    fn test_evaluate() {
        assert_eq!(Term::new(3, 2).evaluate(2.0), Ok(12.0));
        assert_eq!(Term::new(-2, -1).evaluate(4.0), Ok(-0.5));
        assert_eq!(Term::new(5, 0).evaluate(-123.0), Ok(5.0));
        assert_eq!(Term::new(5, 3).evaluate(0.0), Ok(0.0));
    }

    #[test]
    fn test_evaluate_zero_to_non_positive_power() {
        for e in [0, -1, -7] {
            let err = Term::new(2, e).evaluate(0.0).unwrap_err();
            assert_eq!(err, EvaluationError::ZeroToNonPositivePower { exponent: e });
        }
        // Negative zero is zero.
        assert!(Term::new(1, 0).evaluate(-0.0).is_err());
        assert!(Term::new(1, -2).evaluate(-0.0).is_err());
        assert_eq!(Term::new(1, 2).evaluate(-0.0), Ok(0.0));

        assert_eq!(
            EvaluationError::ZeroToNonPositivePower { exponent: -3 }.to_string(),
            "Cannot raise zero to exponent -3"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Term::new(3, 2).to_string(), "+3x^2");
        assert_eq!(Term::new(-3, -2).to_string(), "-3x^-2");
        assert_eq!(Term::new(1, 0).to_string(), "+1x^0");
    }
}

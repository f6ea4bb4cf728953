//! Property-based tests for the root finders.

use proptest::prelude::*;
use ytmkit_math::prelude::*;

proptest! {
    #[test]
    fn newton_finds_square_roots(c in 0.01f64..1e4) {
        let f = |x: f64| x * x - c;
        let df = |x: f64| 2.0 * x;
        let x0 = c.max(1.0);

        let result = newton_raphson(f, df, x0, &SolverConfig::default()).unwrap();

        prop_assert!((result.root - c.sqrt()).abs() < 1e-9 * c.sqrt().max(1.0));
        prop_assert!(result.residual.abs() < SolverConfig::default().tolerance);
    }

    #[test]
    fn secant_matches_newton(c in 0.01f64..1e4) {
        let f = |x: f64| x * x - c;
        let x0 = c.max(1.0);
        let config = SolverConfig::default();

        let sec = secant(f, x0, x0 + 1.0, &config).unwrap();
        let num = newton_raphson_numerical(f, x0, &config).unwrap();

        prop_assert!((sec.root - num.root).abs() < 1e-9 * c.sqrt().max(1.0));
    }

    #[test]
    fn exhausted_budget_is_an_error(c in 2.0f64..1e4) {
        // One Newton step from far away cannot meet a 1e-10 residual
        let f = |x: f64| x * x - c;
        let df = |x: f64| 2.0 * x;
        let config = SolverConfig::new(1e-10, 1);

        let result = newton_raphson(f, df, 10.0 * c, &config);

        prop_assert!(
            matches!(result, Err(MathError::ConvergenceFailed { iterations: 1, .. })),
            "unexpected outcome: {:?}",
            result
        );
    }
}

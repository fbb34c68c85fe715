//! Library-level behavior of the five operations: algebraic properties,
//! the documented scenarios, the diagnostic log, and concurrent callers.

use arith::test_support::capture_logs;
use arith::{
    ArithError, Calculator, ErrorKind, Number, PowerCheck, add, divide, multiply, power, subtract,
};

fn samples() -> Vec<Number> {
    vec![
        Number::Int(0),
        Number::Int(1),
        Number::Int(-7),
        Number::Int(42),
        Number::Int(i64::MAX),
        Number::Float(0.5),
        Number::Float(-3.25),
        Number::Float(1e-9),
        Number::Float(6.02e23),
    ]
}

#[test]
fn documented_scenarios() {
    assert_eq!(add(2, 3), Number::Int(5));
    assert_eq!(subtract(5.5, 2), Number::Float(3.5));
    assert_eq!(multiply(2.5, 4), Number::Float(10.0));
    let err = divide(5, 0).expect_err("divide by zero");
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.to_string(), "Cannot divide by zero!");
    assert_eq!(power(9, 0.5), Ok(3.0));
    assert_eq!(power(2, 3), Ok(8.0));
}

#[test]
fn add_and_multiply_commute() {
    for a in samples() {
        for b in samples() {
            assert_eq!(add(a, b), add(b, a), "add({a}, {b})");
            assert_eq!(multiply(a, b), multiply(b, a), "multiply({a}, {b})");
        }
    }
}

#[test]
fn divide_matches_float_division_for_nonzero_divisors() {
    for a in samples() {
        for b in samples().into_iter().filter(|b| !b.is_zero()) {
            assert_eq!(divide(a, b), Ok(a.as_f64() / b.as_f64()), "divide({a}, {b})");
        }
    }
}

#[test]
fn divide_by_zero_fails_for_every_dividend() {
    for a in samples() {
        for zero in [Number::Int(0), Number::Float(0.0), Number::Float(-0.0)] {
            assert_eq!(divide(a, zero), Err(ArithError::DivisionByZero), "divide({a}, {zero})");
        }
    }
}

#[test]
fn power_of_negative_base_with_fractional_exponent_is_invalid_argument() {
    for check in [PowerCheck::Strict, PowerCheck::NanOnly] {
        let err = Calculator::new(check)
            .power(-8, 0.5)
            .expect_err("non-real result");
        assert_eq!(err.kind(), ErrorKind::InvalidArgument, "{check:?}");
    }
}

#[test]
fn power_failure_is_logged_at_error_level() {
    let (result, logs) = capture_logs(|| power(-8, 0.5));
    assert_eq!(result, Err(ArithError::InvalidPower));
    assert!(logs.contains("power called a=-8 b=0.5"), "{logs}");
    assert!(logs.contains("ERROR"), "{logs}");
    assert!(!logs.contains("power result"), "{logs}");
}

#[test]
fn successful_divide_logs_result_at_info_level() {
    let (result, logs) = capture_logs(|| divide(5, 2));
    assert_eq!(result, Ok(2.5));
    assert!(logs.contains("INFO"), "{logs}");
    assert!(logs.contains("divide result a=5 b=2 result=2.5"), "{logs}");
    assert!(!logs.contains("ERROR"), "{logs}");
}

#[test]
fn concurrent_callers_need_no_coordination() {
    let calc = Calculator::default();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (1..=8i64)
            .map(|n| {
                scope.spawn(move || {
                    (
                        calc.add(n, n),
                        calc.divide(n, 2),
                        calc.power(n, 2),
                        calc.divide(n, 0),
                    )
                })
            })
            .collect();
        for (n, handle) in (1..=8i64).zip(handles) {
            let (sum, quotient, square, rejected) = handle.join().expect("thread");
            assert_eq!(sum, Number::Int(2 * n));
            assert_eq!(quotient, Ok(n as f64 / 2.0));
            assert_eq!(square, Ok((n * n) as f64));
            assert_eq!(rejected, Err(ArithError::DivisionByZero));
        }
    });
}

#![allow(dead_code)]

use rpn::{ArithmeticError, OperatorRegistry};

/// Declare an evaluation test.
///
/// ```ignore
/// test_case!(
///     addition,
///     input: "3 4 +",
///     value: dec!(7),
/// );
///
/// test_case!(
///     dangling_operator,
///     input: "+",
///     error: StackUnderflow,
/// );
/// ```
///
/// Both forms accept a leading `registry: <expr>`; the standard table is
/// used otherwise.
#[macro_export]
macro_rules! test_case {
    ($name:ident, input: $input:expr, value: $value:expr $(,)?) => {
        $crate::test_case!(
            $name,
            registry: rpn::OperatorRegistry::standard(),
            input: $input,
            value: $value,
        );
    };
    ($name:ident, input: $input:expr, error: $kind:ident $(,)?) => {
        $crate::test_case!(
            $name,
            registry: rpn::OperatorRegistry::standard(),
            input: $input,
            error: $kind,
        );
    };
    ($name:ident, registry: $registry:expr, input: $input:expr, value: $value:expr $(,)?) => {
        #[test]
        fn $name() {
            let evaluator = rpn::Evaluator::new($registry);
            pretty_assertions::assert_eq!(evaluator.evaluate($input), Ok($value));
        }
    };
    ($name:ident, registry: $registry:expr, input: $input:expr, error: $kind:ident $(,)?) => {
        #[test]
        fn $name() {
            let evaluator = rpn::Evaluator::new($registry);
            pretty_assertions::assert_eq!(
                evaluator.evaluate($input).map_err(|e| e.kind()),
                Err(rpn::ErrorKind::$kind)
            );
        }
    };
}

/// Only addition and subtraction, for tests about unregistered symbols.
pub fn additive() -> OperatorRegistry {
    OperatorRegistry::builder()
        .binary('+', |a, b| Ok(a + b))
        .binary('-', |a, b| Ok(a - b))
        .build()
}

/// A registry whose `/` reports division by zero but is otherwise unchecked.
pub fn plain_division() -> OperatorRegistry {
    OperatorRegistry::builder()
        .binary('/', |a, b| {
            if b.is_zero() {
                Err(ArithmeticError::DivisionByZero)
            } else {
                Ok(a / b)
            }
        })
        .build()
}

use pretty_assertions::assert_eq;
use rpn::{
    Arity, Decimal, Evaluator, EvaluatorOptions, Operator, OperatorRegistry, SymbolMatching,
};
use rust_decimal_macros::dec;

mod cases;

fn overloaded_minus() -> OperatorRegistry {
    OperatorRegistry::builder()
        .unary('-', |x| Ok(-x))
        .binary('-', |a, b| Ok(a - b))
        .binary('+', |a, b| Ok(a + b))
        .build()
}

test_case!(
    shadowed_binary_operator,
    registry: OperatorRegistry::builder()
        .binary('+', |a, b| Ok(a + b))
        .binary('+', |_, _| Ok(Decimal::ZERO))
        .build(),
    input: "2 2 +",
    value: dec!(4),
);

test_case!(
    overloaded_symbol_dispatches_as_unary,
    registry: overloaded_minus(),
    input: "3 - 4 +",
    value: dec!(1),
);

test_case!(
    custom_symbol,
    registry: OperatorRegistry::builder()
        .binary('m', |a, b| Ok(a.max(b)))
        .build(),
    input: "3 9 m 4 m",
    value: dec!(9),
);

test_case!(
    custom_symbol_with_suffix,
    registry: OperatorRegistry::builder()
        .binary('m', |a, b| Ok(a.max(b)))
        .build(),
    input: "3 9 max",
    value: dec!(9),
);

test_case!(
    empty_registry_accepts_single_literal,
    registry: OperatorRegistry::default(),
    input: "12.5",
    value: dec!(12.5),
);

test_case!(
    empty_registry_rejects_symbols,
    registry: OperatorRegistry::default(),
    input: "1 2 +",
    error: UnknownSymbol,
);

#[test]
fn registry_order_is_preserved() {
    let registry: OperatorRegistry = [
        Operator::binary('*', |a, b| Ok(a * b)),
        Operator::unary('~', |x| Ok(-x)),
        Operator::binary('*', |a, b| Ok(a + b)),
    ]
    .into_iter()
    .collect();

    let described: Vec<(char, Arity)> = registry
        .iter()
        .map(|op| (op.symbol(), op.arity()))
        .collect();
    assert_eq!(
        described,
        vec![('*', Arity::Binary), ('~', Arity::Unary), ('*', Arity::Binary)]
    );
    assert_eq!(Evaluator::new(registry).evaluate("2 5 *"), Ok(dec!(10)));
}

#[test]
fn standard_registry_contents() {
    let registry = OperatorRegistry::standard();
    assert_eq!(registry.symbols(), vec!['+', '-', '*', '/', '%', '^', '~', '|']);
    for symbol in ['+', '-', '*', '/', '%', '^'] {
        assert!(registry.has(symbol, Arity::Binary), "{symbol}");
    }
    assert!(registry.has('~', Arity::Unary));
    assert!(registry.has('|', Arity::Unary));
}

#[test]
fn exact_matching_allows_signed_literals() {
    let options = EvaluatorOptions {
        symbol_matching: SymbolMatching::Exact,
        ..EvaluatorOptions::default()
    };
    let evaluator = Evaluator::with_options(OperatorRegistry::standard(), options);
    assert_eq!(evaluator.evaluate("-5 3 +"), Ok(dec!(-2)));
    assert_eq!(evaluator.evaluate("+3 -4 *"), Ok(dec!(-12)));
    assert_eq!(
        evaluator.evaluate("2 -").map_err(|e| e.kind()),
        Err(rpn::ErrorKind::StackUnderflow)
    );
    assert_eq!(
        evaluator.evaluate("3 9 max").map_err(|e| e.kind()),
        Err(rpn::ErrorKind::UnknownSymbol)
    );
}

#[test]
fn evaluator_exposes_its_configuration() {
    let evaluator = Evaluator::standard();
    assert_eq!(evaluator.registry().len(), OperatorRegistry::standard().len());
    assert_eq!(evaluator.options().symbol_matching, SymbolMatching::FirstChar);
    assert_eq!(evaluator.options().max_stack_depth, 1024);
}

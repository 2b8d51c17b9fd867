//! Property-based tests for the reduction engine.
//!
//! These use proptest to generate random programs and verify:
//! 1. Arithmetic laws: commutativity, identity, and the guarantee that
//!    overflow is reported instead of wrapping.
//! 2. Quote/unquote laws: `eval` undoes `list`, `join` undoes
//!    `head`/`tail`.
//! 3. Currying: feeding arguments one at a time agrees with a single
//!    full application.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::uninlined_format_args,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use nara_eval::{evaluate, global_environment, EvalErrorKind, EvalResult, Value};
use proptest::prelude::*;

fn run(source: &str) -> EvalResult {
    let form = nara_parse::parse(source).expect("generated source must parse");
    evaluate(form, &mut global_environment())
}

fn run_program(source: &str) -> EvalResult {
    let forms = nara_parse::parse_forms(source).expect("generated source must parse");
    let mut env = global_environment();
    let mut result = Ok(Value::Unit);
    for form in forms {
        result = evaluate(form, &mut env);
        if result.is_err() {
            break;
        }
    }
    result
}

fn number_list(xs: &[i64]) -> String {
    xs.iter()
        .map(|x| x.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

proptest! {
    #[test]
    fn addition_commutes(a: i64, b: i64) {
        prop_assert_eq!(run(&format!("+ {a} {b}")), run(&format!("+ {b} {a}")));
    }

    #[test]
    fn zero_is_the_additive_identity(a: i64) {
        prop_assert_eq!(run(&format!("+ {a} 0")), Ok(Value::number(a)));
    }

    #[test]
    fn addition_never_wraps(a: i64, b: i64) {
        let result = run(&format!("+ {a} {b}"));
        match a.checked_add(b) {
            Some(sum) => prop_assert_eq!(result, Ok(Value::number(sum))),
            None => {
                prop_assert!(
                    matches!(&result, Err(err) if matches!(err.kind, EvalErrorKind::ArithmeticOverflow { .. })),
                    "overflow produced {:?} instead of an error",
                    result
                );
            }
        }
    }

    #[test]
    fn multiplication_never_wraps(a: i64, b: i64) {
        let result = run(&format!("* {a} {b}"));
        match a.checked_mul(b) {
            Some(product) => prop_assert_eq!(result, Ok(Value::number(product))),
            None => prop_assert!(result.is_err()),
        }
    }

    #[test]
    fn list_then_eval_reapplies_the_head(a in -1000i64..1000, b in -1000i64..1000) {
        prop_assert_eq!(
            run(&format!("eval (cons + (list {a} {b}))")),
            Ok(Value::number(a + b))
        );
    }

    #[test]
    fn list_holds_its_evaluated_elements(xs in prop::collection::vec(any::<i64>(), 0..8)) {
        let expected = Value::Qexpr(xs.iter().copied().map(Value::number).collect());
        prop_assert_eq!(run(&format!("list {}", number_list(&xs))), Ok(expected));
    }

    #[test]
    fn join_reassembles_head_and_tail(xs in prop::collection::vec(any::<i64>(), 1..8)) {
        let quoted = format!("{{{}}}", number_list(&xs));
        let expected = Value::Qexpr(xs.iter().copied().map(Value::number).collect());
        prop_assert_eq!(
            run(&format!("join (head {quoted}) (tail {quoted})")),
            Ok(expected)
        );
    }

    #[test]
    fn len_matches_the_element_count(xs in prop::collection::vec(any::<i64>(), 0..8)) {
        let count = i64::try_from(xs.len()).unwrap();
        prop_assert_eq!(
            run(&format!("len {{{}}}", number_list(&xs))),
            Ok(Value::number(count))
        );
    }

    #[test]
    fn currying_agrees_with_direct_application(
        a in -1000i64..1000,
        b in -1000i64..1000,
        c in -1000i64..1000,
    ) {
        let header = "(defun {f x y z} {+ x (* y z)})";
        let curried = run_program(&format!("{header} (((f {a}) {b}) {c})"));
        let direct = run_program(&format!("{header} (f {a} {b} {c})"));
        prop_assert_eq!(&curried, &direct);
        prop_assert_eq!(curried, Ok(Value::number(a + b * c)));
    }

    #[test]
    fn ordering_chains_match_the_native_comparison(a: i64, b: i64, c: i64) {
        let expected = Value::number(i64::from(a < b && b < c));
        prop_assert_eq!(run(&format!("< {a} {b} {c}")), Ok(expected));
    }

    #[test]
    fn comparison_totality(a: i64, b: i64) {
        // Exactly one of <, ==, > holds for any pair.
        let lt = run(&format!("< {a} {b}"));
        let eq = run(&format!("== {a} {b}"));
        let gt = run(&format!("> {a} {b}"));
        let truths = [lt, eq, gt]
            .into_iter()
            .filter(|r| matches!(r, Ok(v) if *v == Value::number(1)))
            .count();
        prop_assert_eq!(truths, 1);
    }
}

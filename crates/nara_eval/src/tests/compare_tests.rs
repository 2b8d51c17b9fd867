use nara_ir::errors::{arity_mismatch, type_mismatch};
use nara_ir::Value;
use pretty_assertions::assert_eq;

use super::run;

#[test]
fn equality_is_structural() {
    assert_eq!(run("== 1 1"), Ok(Value::number(1)));
    assert_eq!(run("== 1 2"), Ok(Value::number(0)));
    assert_eq!(run("== {1 2} {1 2}"), Ok(Value::number(1)));
    assert_eq!(run(r#"== "abc" "abc""#), Ok(Value::number(1)));
    assert_eq!(run(r#"== "abc" {a b c}"#), Ok(Value::number(0)));
    assert_eq!(run("== unit unit"), Ok(Value::number(1)));
}

#[test]
fn inequality_mirrors_equality() {
    assert_eq!(run("!= 1 2"), Ok(Value::number(1)));
    assert_eq!(run("!= {1} {1}"), Ok(Value::number(0)));
}

#[test]
fn equality_takes_exactly_two() {
    assert_eq!(run("== 1 1 1"), Err(arity_mismatch("==", "two arguments", 3)));
}

#[test]
fn orderings_chain_pairwise() {
    assert_eq!(run("> 3 2 1"), Ok(Value::number(1)));
    assert_eq!(run("> 3 3 1"), Ok(Value::number(0)));
    assert_eq!(run(">= 3 3 1"), Ok(Value::number(1)));
    assert_eq!(run("< 1 2 3"), Ok(Value::number(1)));
    assert_eq!(run("< 1 2 2"), Ok(Value::number(0)));
}

#[test]
fn leq_accepts_equal_neighbours() {
    assert_eq!(run("<= 1 2 2 3"), Ok(Value::number(1)));
    assert_eq!(run("<= 1 1"), Ok(Value::number(1)));
    assert_eq!(run("<= 2 1"), Ok(Value::number(0)));
}

#[test]
fn orderings_reject_non_numbers() {
    assert_eq!(
        run(r#"> "b" "a""#),
        Err(type_mismatch(">", "numbers", "string"))
    );
}

#[test]
fn boolean_conjunction_and_disjunction() {
    assert_eq!(run("&& 1 1 1"), Ok(Value::number(1)));
    assert_eq!(run("&& 1 0 1"), Ok(Value::number(0)));
    assert_eq!(run("|| 0 0 0"), Ok(Value::number(0)));
    assert_eq!(run("|| 0 0 5"), Ok(Value::number(1)));
}

#[test]
fn any_nonzero_number_is_truthy() {
    assert_eq!(run("&& -3 7"), Ok(Value::number(1)));
    assert_eq!(run("! -3"), Ok(Value::number(0)));
}

#[test]
fn negation_is_unary() {
    assert_eq!(run("! 0"), Ok(Value::number(1)));
    assert_eq!(run("! 1"), Ok(Value::number(0)));
    assert_eq!(run("! 1 0"), Err(arity_mismatch("!", "one argument", 2)));
}

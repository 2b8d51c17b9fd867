use nara_ir::errors::{invalid_argument, reserved_symbol, type_mismatch, unbound_symbol};
use nara_ir::Value;
use pretty_assertions::assert_eq;

use super::{run_in, run_program};
use crate::global_environment;

#[test]
fn def_binds_globally() {
    assert_eq!(
        run_program("(def {x} 10) (+ x 1)"),
        Ok(Value::number(11))
    );
}

#[test]
fn def_binds_many_at_once() {
    assert_eq!(
        run_program("(def {a b c} 1 2 3) (+ a b c)"),
        Ok(Value::number(6))
    );
}

#[test]
fn def_values_are_evaluated_first() {
    assert_eq!(
        run_program("(def {x} (+ 2 3)) x"),
        Ok(Value::number(5))
    );
}

#[test]
fn def_counts_must_line_up() {
    assert_eq!(
        run_program("(def {a b} 1)"),
        Err(invalid_argument("def", "2 symbol(s) but 1 value(s)"))
    );
    assert_eq!(
        run_program("(def {a} 1 2)"),
        Err(invalid_argument("def", "1 symbol(s) but 2 value(s)"))
    );
}

#[test]
fn def_targets_must_be_symbols() {
    assert_eq!(
        run_program("(def {1} 10)"),
        Err(type_mismatch("def", "a symbol", "number"))
    );
    assert_eq!(
        run_program("(def 5 10)"),
        Err(type_mismatch("def", "a q-expression of symbols", "number"))
    );
}

#[test]
fn reserved_names_cannot_be_redefined() {
    assert_eq!(run_program("(def {true} 5)"), Err(reserved_symbol("true")));
    assert_eq!(run_program("(def {+} 5)"), Err(reserved_symbol("+")));
    assert_eq!(
        run_program("(def {otherwise} 5)"),
        Err(reserved_symbol("otherwise"))
    );
}

#[test]
fn def_with_a_reserved_target_binds_nothing() {
    let mut env = global_environment();
    assert_eq!(
        run_in("def {x +} 1 2", &mut env),
        Err(reserved_symbol("+"))
    );
    // The name ahead of the reserved one must not survive the failed call.
    assert_eq!(run_in("x", &mut env), Err(unbound_symbol("x")));
}

#[test]
fn failed_redefinition_leaves_the_binding_intact() {
    let mut env = global_environment();
    assert_eq!(
        run_in("def {true} 5", &mut env),
        Err(reserved_symbol("true"))
    );
    assert_eq!(run_in("true", &mut env), Ok(Value::number(1)));
}

#[test]
fn redefinition_of_user_names_is_allowed() {
    assert_eq!(
        run_program("(def {x} 1) (def {x} 2) x"),
        Ok(Value::number(2))
    );
}

#[test]
fn del_unbinds() {
    assert_eq!(
        run_program("(def {x} 1) (del {x}) x"),
        Err(unbound_symbol("x"))
    );
}

#[test]
fn del_of_absent_or_reserved_names_fails() {
    assert_eq!(run_program("(del {ghost})"), Err(unbound_symbol("ghost")));
    assert_eq!(run_program("(del {true})"), Err(reserved_symbol("true")));
}

#[test]
fn def_from_inside_a_call_still_writes_the_root() {
    let source = "
        (defun {remember x} {def {seen} x})
        (remember 42)
        seen
    ";
    assert_eq!(run_program(source), Ok(Value::number(42)));
}

#[test]
fn defun_defines_a_callable() {
    assert_eq!(
        run_program("(defun {add1 x} {+ x 1}) (add1 4)"),
        Ok(Value::number(5))
    );
}

#[test]
fn defun_header_needs_a_name() {
    assert_eq!(
        run_program("(defun {} {1})"),
        Err(invalid_argument("defun", "the header needs a function name"))
    );
}

#[test]
fn defun_rejects_reserved_names() {
    assert_eq!(
        run_program("(defun {head x} {x})"),
        Err(reserved_symbol("head"))
    );
    assert_eq!(
        run_program("(defun {f true} {1})"),
        Err(reserved_symbol("true"))
    );
}

#[test]
fn lambda_params_cannot_shadow_reserved_names() {
    assert_eq!(
        run_program("(lambda {nil} {1})"),
        Err(reserved_symbol("nil"))
    );
}

#[test]
fn def_result_is_unit() {
    let mut env = global_environment();
    assert_eq!(run_in("def {x} 1", &mut env), Ok(Value::Unit));
    assert_eq!(run_in("del {x}", &mut env), Ok(Value::Unit));
}

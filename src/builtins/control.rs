//! Conditional evaluation: if
//!
//! `(if c {t} {f})` runs the first branch when c is non-zero and the second
//! otherwise. The condition must be a Number and both branches must be
//! Q-expressions, whether chosen or not.

use crate::builtins::{arity_error, type_error};
use crate::env::Environment;
use crate::eval;
use crate::value::Value;
use std::rc::Rc;

pub fn builtin_if(env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    if args.len() != 3 {
        return arity_error("if", args.len(), 3);
    }

    let condition = match &args[0] {
        Value::Number(n) => *n,
        other => return type_error("if", 0, other, "Number"),
    };

    let (first, second) = (args.remove(1), args.remove(1));
    let first = match first {
        Value::QExpr(cells) => cells,
        other => return type_error("if", 1, &other, "Q-Expression"),
    };
    let second = match second {
        Value::QExpr(cells) => cells,
        other => return type_error("if", 2, &other, "Q-Expression"),
    };

    // The chosen branch becomes an S-expression; the other is dropped.
    let branch = if condition != 0 { first } else { second };
    eval::eval(env, Value::SExpr(branch))
}

/// Register the conditional built-in in the environment.
pub fn register(env: &Rc<Environment>) {
    env.define("if".to_string(), Value::Builtin(builtin_if));
}

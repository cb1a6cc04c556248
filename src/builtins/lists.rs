//! List operations: list, head, tail, len, eval, join
//!
//! Q-expression construction and surgery.
//!
//! - `list`: collect the arguments into a Q-expression
//! - `head`: the first element, kept in a one-element Q-expression
//! - `tail`: everything but the first element
//! - `len`: the element count
//! - `eval`: run a Q-expression as code
//! - `join`: concatenate Q-expressions

use crate::builtins::{arity_error, empty_error, type_error};
use crate::env::Environment;
use crate::eval;
use crate::value::Value;
use std::rc::Rc;

pub fn builtin_list(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    Value::QExpr(args)
}

pub fn builtin_head(_env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return arity_error("head", args.len(), 1);
    }
    match args.remove(0) {
        Value::QExpr(mut cells) => {
            if cells.is_empty() {
                return empty_error("head", 0);
            }
            cells.truncate(1);
            Value::QExpr(cells)
        }
        other => type_error("head", 0, &other, "Q-Expression"),
    }
}

pub fn builtin_tail(_env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return arity_error("tail", args.len(), 1);
    }
    match args.remove(0) {
        Value::QExpr(mut cells) => {
            if cells.is_empty() {
                return empty_error("tail", 0);
            }
            cells.remove(0);
            Value::QExpr(cells)
        }
        other => type_error("tail", 0, &other, "Q-Expression"),
    }
}

pub fn builtin_len(_env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return arity_error("len", args.len(), 1);
    }
    match args.remove(0) {
        Value::QExpr(cells) => Value::Number(cells.len() as i64),
        other => type_error("len", 0, &other, "Q-Expression"),
    }
}

pub fn builtin_eval(env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return arity_error("eval", args.len(), 1);
    }
    match args.remove(0) {
        Value::QExpr(cells) => eval::eval(env, Value::SExpr(cells)),
        other => type_error("eval", 0, &other, "Q-Expression"),
    }
}

pub fn builtin_join(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    for (i, arg) in args.iter().enumerate() {
        if !matches!(arg, Value::QExpr(_)) {
            return type_error("join", i, arg, "Q-Expression");
        }
    }

    let mut joined = Vec::new();
    for arg in args {
        if let Value::QExpr(cells) = arg {
            joined.extend(cells);
        }
    }
    Value::QExpr(joined)
}

/// Register the list built-ins in the environment.
pub fn register(env: &Rc<Environment>) {
    env.define("list".to_string(), Value::Builtin(builtin_list));
    env.define("head".to_string(), Value::Builtin(builtin_head));
    env.define("tail".to_string(), Value::Builtin(builtin_tail));
    env.define("len".to_string(), Value::Builtin(builtin_len));
    env.define("eval".to_string(), Value::Builtin(builtin_eval));
    env.define("join".to_string(), Value::Builtin(builtin_join));
}

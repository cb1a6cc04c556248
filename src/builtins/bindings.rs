//! Definitions and closure construction: def, =, \
//!
//! - `def`: bind symbols in the root environment
//! - `=`: bind symbols in the current frame
//! - `\`: build a closure from a formals list and a body
//!
//! `def` and `=` take a Q-expression of symbols followed by exactly one
//! value per symbol, and return ().

use crate::builtins::{arity_error, type_error};
use crate::env::Environment;
use crate::value::{Lambda, Value};
use std::rc::Rc;

pub fn builtin_def(env: &Rc<Environment>, args: Vec<Value>) -> Value {
    builtin_var(env, args, "def")
}

pub fn builtin_put(env: &Rc<Environment>, args: Vec<Value>) -> Value {
    builtin_var(env, args, "=")
}

fn builtin_var(env: &Rc<Environment>, args: Vec<Value>, func: &str) -> Value {
    let mut args = args.into_iter();
    let Some(first) = args.next() else {
        return arity_error(func, 0, 1);
    };
    let syms = match first {
        Value::QExpr(cells) => cells,
        other => return type_error(func, 0, &other, "Q-Expression"),
    };

    let mut names = Vec::with_capacity(syms.len());
    for sym in syms {
        match sym {
            Value::Symbol(name) => names.push(name),
            other => {
                return Value::error(format!(
                    "function '{}' cannot define non-symbol (got '{}', expected: 'Symbol')",
                    func,
                    other.type_name()
                ));
            }
        }
    }

    let values: Vec<Value> = args.collect();
    if names.len() != values.len() {
        return Value::error(format!(
            "function '{}' cannot define incorrect number of values to symbols (got {}, expected: {})",
            func,
            values.len(),
            names.len()
        ));
    }

    for (name, value) in names.into_iter().zip(values) {
        if func == "def" {
            env.define_global(name, value);
        } else {
            env.define(name, value);
        }
    }

    Value::empty_sexpr()
}

pub fn builtin_lambda(_env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    if args.len() != 2 {
        return arity_error("\\", args.len(), 2);
    }

    let formals = match args.remove(0) {
        Value::QExpr(cells) => cells,
        other => return type_error("\\", 0, &other, "Q-Expression"),
    };
    let body = match args.remove(0) {
        Value::QExpr(cells) => cells,
        other => return type_error("\\", 1, &other, "Q-Expression"),
    };

    for formal in &formals {
        if !matches!(formal, Value::Symbol(_)) {
            return Value::error(format!(
                "function '\\' cannot define non-symbol (got '{}', expected: 'Symbol')",
                formal.type_name()
            ));
        }
    }

    Value::Lambda(Lambda::new(formals, body))
}

/// Register the binding built-ins in the environment.
pub fn register(env: &Rc<Environment>) {
    env.define("def".to_string(), Value::Builtin(builtin_def));
    env.define("=".to_string(), Value::Builtin(builtin_put));
    env.define("\\".to_string(), Value::Builtin(builtin_lambda));
}

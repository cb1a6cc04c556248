//! Arithmetic operations: +, -, *, /
//!
//! Left folds over integer operands with wrapping 64-bit semantics.
//!
//! - `+`: sum
//! - `-`: subtract subsequent operands from the first; negate a single one
//! - `*`: product
//! - `/`: integer division; dividing by zero is an error

use crate::env::Environment;
use crate::value::Value;
use std::rc::Rc;

pub fn builtin_add(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    builtin_op(args, "+")
}

pub fn builtin_sub(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    builtin_op(args, "-")
}

pub fn builtin_mul(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    builtin_op(args, "*")
}

pub fn builtin_div(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    builtin_op(args, "/")
}

fn builtin_op(args: Vec<Value>, op: &str) -> Value {
    let mut numbers = Vec::with_capacity(args.len());
    for arg in &args {
        match arg {
            Value::Number(n) => numbers.push(*n),
            _ => return Value::error("cannot operate on non-number"),
        }
    }

    let Some((&first, rest)) = numbers.split_first() else {
        return Value::error("cannot operate on non-number");
    };

    if op == "-" && rest.is_empty() {
        return Value::Number(first.wrapping_neg());
    }

    let mut acc = first;
    for &n in rest {
        match op {
            "+" => acc = acc.wrapping_add(n),
            "-" => acc = acc.wrapping_sub(n),
            "*" => acc = acc.wrapping_mul(n),
            "/" => {
                if n == 0 {
                    return Value::error("division by zero");
                }
                acc = acc.wrapping_div(n);
            }
            _ => unreachable!("unknown arithmetic operator"),
        }
    }

    Value::Number(acc)
}

/// Register the arithmetic built-ins in the environment.
pub fn register(env: &Rc<Environment>) {
    env.define("+".to_string(), Value::Builtin(builtin_add));
    env.define("-".to_string(), Value::Builtin(builtin_sub));
    env.define("*".to_string(), Value::Builtin(builtin_mul));
    env.define("/".to_string(), Value::Builtin(builtin_div));
}

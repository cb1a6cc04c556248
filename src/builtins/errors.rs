//! User-raised errors: error
//!
//! Errors are first-class values; `error` builds one from a message string
//! and it propagates like any other evaluation error.

use crate::builtins::{arity_error, type_error};
use crate::env::Environment;
use crate::value::Value;
use std::rc::Rc;

pub fn builtin_error(_env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return arity_error("error", args.len(), 1);
    }
    match args.remove(0) {
        Value::Str(msg) => Value::Error(msg),
        other => type_error("error", 0, &other, "String"),
    }
}

/// Register the error built-in in the environment.
pub fn register(env: &Rc<Environment>) {
    env.define("error".to_string(), Value::Builtin(builtin_error));
}

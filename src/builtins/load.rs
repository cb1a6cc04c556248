//! Source file evaluation: load
//!
//! Reads a file, parses it, and evaluates every top-level expression in
//! order against the root environment. Error results are printed as they
//! occur; the result is always ().

use crate::builtins::{arity_error, type_error};
use crate::env::Environment;
use crate::eval;
use crate::parser;
use crate::reader;
use crate::value::Value;
use std::rc::Rc;
use tracing::debug;

pub fn builtin_load(env: &Rc<Environment>, mut args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return arity_error("load", args.len(), 1);
    }
    let path = match args.remove(0) {
        Value::Str(path) => path,
        other => return type_error("load", 0, &other, "String"),
    };

    debug!(path = %path, "loading source file");
    let source = match std::fs::read_to_string(&path) {
        Ok(source) => source,
        Err(e) => return Value::error(format!("Could not load library {}", e)),
    };

    let tree = match parser::parse(&source) {
        Ok(tree) => tree,
        Err(e) => return Value::error(format!("Could not load library {}", e)),
    };

    let global = env.global();
    if let Value::SExpr(cells) = reader::read(&tree) {
        for cell in cells {
            let result = eval::eval(&global, cell);
            if let Value::Error(_) = result {
                println!("{}", result);
            }
        }
    }

    Value::empty_sexpr()
}

/// Register the load built-in in the environment.
pub fn register(env: &Rc<Environment>) {
    env.define("load".to_string(), Value::Builtin(builtin_load));
}

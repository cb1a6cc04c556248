//! Console output: print
//!
//! `print` writes each argument through the printer, space separated, with a
//! trailing newline, and returns ().

use crate::env::Environment;
use crate::value::Value;
use std::rc::Rc;

pub fn builtin_print(_env: &Rc<Environment>, args: Vec<Value>) -> Value {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            print!(" ");
        }
        print!("{}", arg);
    }
    println!();
    Value::empty_sexpr()
}

/// Register the console built-in in the environment.
pub fn register(env: &Rc<Environment>) {
    env.define("print".to_string(), Value::Builtin(builtin_print));
}

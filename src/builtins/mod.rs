//! # Built-in operations
//!
//! The fixed library registered in the root environment, organised by
//! category:
//!
//! - **[arithmetic]** (4): +, -, *, / - integer arithmetic
//! - **[comparison]** (6): >, <, >=, <=, ==, != - ordering and equality
//! - **[lists]** (6): list, head, tail, len, eval, join - Q-expression surgery
//! - **[bindings]** (3): def, =, \ - definitions and closure construction
//! - **[control]** (1): if - conditional evaluation
//! - **[console]** (1): print - output
//! - **[errors]** (1): error - user-raised error values
//! - **[load]** (1): load - source file evaluation
//!
//! Every built-in shares the `BuiltinFn` signature and reports precondition
//! failures through the assertion helpers below.

use crate::env::Environment;
use crate::value::Value;
use std::rc::Rc;

pub mod arithmetic;
pub mod bindings;
pub mod comparison;
pub mod console;
pub mod control;
pub mod errors;
pub mod lists;
pub mod load;

/// Register every built-in operation in the environment.
pub fn register_builtins(env: &Rc<Environment>) {
    arithmetic::register(env);
    comparison::register(env);
    lists::register(env);
    bindings::register(env);
    control::register(env);
    console::register(env);
    errors::register(env);
    load::register(env);
}

// ============================================================================
// Assertion helpers
// ============================================================================

/// Error value for an argument of the wrong type. Indices are zero-based.
pub(crate) fn type_error(func: &str, index: usize, got: &Value, expected: &str) -> Value {
    Value::error(format!(
        "function '{}' passed incorrect type for argument {} (got '{}', expected: '{}')",
        func,
        index,
        got.type_name(),
        expected
    ))
}

/// Error value for a call with the wrong number of arguments.
pub(crate) fn arity_error(func: &str, got: usize, expected: usize) -> Value {
    Value::error(format!(
        "function '{}' was passed incorrect number of arguments (got {}, expected: {})",
        func, got, expected
    ))
}

/// Error value for an empty Q-expression where a non-empty one is required.
pub(crate) fn empty_error(func: &str, index: usize) -> Value {
    Value::error(format!(
        "function '{}' was passed {{}} for argument {}",
        func, index
    ))
}

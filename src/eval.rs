// ABOUTME: Evaluator: expression dispatch, S-expression application, closure calls

use crate::env::Environment;
use crate::value::{Lambda, Value};
use std::rc::Rc;
use tracing::{debug, trace};

const AMP_FORMAT_ERROR: &str = "function format invalid, symbol '&' not followed by single symbol";

/// Evaluates a value in the given environment. Symbols resolve to their
/// binding, S-expressions apply, everything else already is a value.
pub fn eval(env: &Rc<Environment>, value: Value) -> Value {
    match value {
        Value::Symbol(name) => match env.get(&name) {
            Some(bound) => bound,
            None => {
                debug!(symbol = %name, "unbound symbol");
                Value::error(format!("unbound symbol '{}'", name))
            }
        },
        Value::SExpr(cells) => eval_sexpr(env, cells),
        other => other,
    }
}

fn eval_sexpr(env: &Rc<Environment>, cells: Vec<Value>) -> Value {
    // Children evaluate strictly left to right; the first error wins and the
    // children after it are never evaluated.
    let mut evaluated = Vec::with_capacity(cells.len());
    for cell in cells {
        let result = eval(env, cell);
        if let Value::Error(_) = result {
            return result;
        }
        evaluated.push(result);
    }

    if evaluated.is_empty() {
        return Value::SExpr(evaluated);
    }

    if evaluated.len() == 1 {
        // A lone closure is invoked with no arguments; any other lone value,
        // built-ins included, stands for itself.
        let single = evaluated.remove(0);
        return match single {
            Value::Lambda(_) => call(env, single, Vec::new()),
            other => other,
        };
    }

    let f = evaluated.remove(0);
    match f {
        Value::Builtin(_) | Value::Lambda(_) => call(env, f, evaluated),
        other => Value::error(format!(
            "S-Expression starts with incorrect type (got '{}', expected: 'Function')",
            other.type_name()
        )),
    }
}

/// Applies a function value to a list of already-evaluated arguments.
pub fn call(env: &Rc<Environment>, f: Value, args: Vec<Value>) -> Value {
    match f {
        Value::Builtin(func) => func(env, args),
        Value::Lambda(lambda) => call_lambda(env, lambda, args),
        other => Value::error(format!(
            "S-Expression starts with incorrect type (got '{}', expected: 'Function')",
            other.type_name()
        )),
    }
}

fn call_lambda(env: &Rc<Environment>, mut lambda: Lambda, mut args: Vec<Value>) -> Value {
    let given = args.len();
    let total = lambda.formals.len();
    trace!(given, total, "applying closure");

    while !args.is_empty() {
        if lambda.formals.is_empty() {
            return Value::error(format!(
                "function passed too many arguments (got {}, expected: {})",
                given, total
            ));
        }

        let name = match lambda.formals.remove(0) {
            Value::Symbol(name) => name,
            _ => unreachable!("formals hold only symbols"),
        };

        if name == "&" {
            // The formal after '&' collects every remaining actual.
            if lambda.formals.len() != 1 {
                return Value::error(AMP_FORMAT_ERROR);
            }
            let rest = match lambda.formals.remove(0) {
                Value::Symbol(rest) => rest,
                _ => unreachable!("formals hold only symbols"),
            };
            lambda
                .env
                .define(rest, Value::QExpr(std::mem::take(&mut args)));
            break;
        }

        lambda.env.define(name, args.remove(0));
    }

    // Actuals exhausted with '&' leading the leftover formals: the variadic
    // bucket binds to the empty list.
    if matches!(lambda.formals.first(), Some(Value::Symbol(s)) if s == "&") {
        if lambda.formals.len() != 2 {
            return Value::error(AMP_FORMAT_ERROR);
        }
        lambda.formals.remove(0);
        let rest = match lambda.formals.remove(0) {
            Value::Symbol(rest) => rest,
            _ => unreachable!("formals hold only symbols"),
        };
        lambda.env.define(rest, Value::QExpr(Vec::new()));
    }

    if lambda.formals.is_empty() {
        // Fully applied: the body runs in the local frame, which now sees
        // the call site's environment through its parent link.
        lambda.env.set_parent(Rc::clone(env));
        eval(&lambda.env, Value::SExpr(lambda.body))
    } else {
        // Partial application: the closure keeps its bound frame and the
        // formals still waiting.
        Value::Lambda(lambda)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::register_builtins;
    use crate::logging::init_test_logging;
    use crate::{parser, reader};

    fn setup() -> Rc<Environment> {
        init_test_logging();
        let env = Environment::new();
        register_builtins(&env);
        env
    }

    /// Parse, read and evaluate a source line the way the REPL does.
    fn run(env: &Rc<Environment>, source: &str) -> Value {
        let tree = parser::parse(source).expect("source should parse");
        eval(env, reader::read(&tree))
    }

    #[test]
    fn numbers_evaluate_to_themselves() {
        let env = setup();
        assert_eq!(eval(&env, Value::Number(42)), Value::Number(42));
    }

    #[test]
    fn qexprs_are_inert() {
        let env = setup();
        assert_eq!(
            run(&env, "{+ 1 2}"),
            Value::QExpr(vec![
                Value::Symbol("+".to_string()),
                Value::Number(1),
                Value::Number(2),
            ])
        );
    }

    #[test]
    fn symbols_resolve_through_the_environment() {
        let env = setup();
        env.define("x".to_string(), Value::Number(100));
        assert_eq!(run(&env, "x"), Value::Number(100));
    }

    #[test]
    fn unbound_symbol_is_an_error() {
        let env = setup();
        assert_eq!(
            run(&env, "my-var"),
            Value::error("unbound symbol 'my-var'")
        );
    }

    #[test]
    fn empty_sexpr_evaluates_to_itself() {
        let env = setup();
        assert_eq!(run(&env, "()"), Value::empty_sexpr());
    }

    #[test]
    fn lone_value_promotes_out() {
        let env = setup();
        assert_eq!(run(&env, "(5)"), Value::Number(5));
        // A lone built-in stands for itself
        assert_eq!(run(&env, "+").type_name(), "Function");
        assert_eq!(run(&env, "(+)").type_name(), "Function");
    }

    #[test]
    fn lone_zero_formal_closure_is_invoked() {
        let env = setup();
        assert_eq!(run(&env, "((\\ {} {+ 1 2}))"), Value::Number(3));
    }

    #[test]
    fn head_must_start_with_a_function() {
        let env = setup();
        assert_eq!(
            run(&env, "(1 2 3)"),
            Value::error(
                "S-Expression starts with incorrect type (got 'Number', expected: 'Function')"
            )
        );
    }

    #[test]
    fn builtin_application() {
        let env = setup();
        assert_eq!(run(&env, "+ 1 2 3"), Value::Number(6));
        assert_eq!(run(&env, "(* (+ 1 2) 3)"), Value::Number(9));
    }

    #[test]
    fn first_error_aborts_the_expression() {
        let env = setup();
        assert_eq!(
            run(&env, "+ 1 (/ 2 0) 3"),
            Value::error("division by zero")
        );
    }

    #[test]
    fn later_children_are_not_evaluated_after_an_error() {
        let env = setup();
        let result = run(&env, "no-such (def {marker} 1)");
        assert_eq!(result, Value::error("unbound symbol 'no-such'"));
        // The def never ran
        assert!(env.get("marker").is_none());
    }

    #[test]
    fn closure_application_binds_formals() {
        let env = setup();
        assert_eq!(run(&env, "((\\ {x y} {+ x y}) 10 20)"), Value::Number(30));
    }

    #[test]
    fn closures_see_the_call_site_through_the_parent_link() {
        let env = setup();
        run(&env, "def {f} (\\ {a} {+ a y})");
        run(&env, "def {y} 10");
        assert_eq!(run(&env, "(f 5)"), Value::Number(15));
    }

    #[test]
    fn partial_application_returns_a_closure() {
        let env = setup();
        run(&env, "def {add-mul} (\\ {x y} {+ x (* x y)})");

        let partial = run(&env, "(add-mul 10)");
        assert!(matches!(partial, Value::Lambda(_)));

        assert_eq!(run(&env, "((add-mul 10) 20)"), Value::Number(210));
        // The original closure is untouched by the partial application
        assert_eq!(run(&env, "(add-mul 2 3)"), Value::Number(8));
    }

    #[test]
    fn too_many_arguments_is_an_error() {
        let env = setup();
        assert_eq!(
            run(&env, "((\\ {x} {x}) 1 2)"),
            Value::error("function passed too many arguments (got 2, expected: 1)")
        );
    }

    #[test]
    fn variadic_bucket_collects_the_rest() {
        let env = setup();
        run(&env, "def {pack} (\\ {& xs} {xs})");
        assert_eq!(
            run(&env, "(pack 1 2 3)"),
            Value::QExpr(vec![Value::Number(1), Value::Number(2), Value::Number(3)])
        );
        assert_eq!(run(&env, "(pack)"), Value::QExpr(Vec::new()));
    }

    #[test]
    fn variadic_after_positional_formals() {
        let env = setup();
        run(&env, "def {f} (\\ {x & xs} {join {only} xs})");
        assert_eq!(
            run(&env, "(f 1)"),
            Value::QExpr(vec![Value::Symbol("only".to_string())])
        );
        assert_eq!(
            run(&env, "(f 1 2 3)"),
            Value::QExpr(vec![
                Value::Symbol("only".to_string()),
                Value::Number(2),
                Value::Number(3),
            ])
        );
    }

    #[test]
    fn misplaced_amp_is_an_error() {
        let env = setup();
        assert_eq!(
            run(&env, "((\\ {& x y} {x}) 1 2)"),
            Value::error(AMP_FORMAT_ERROR)
        );
        assert_eq!(
            run(&env, "((\\ {x &} {x}) 1 2)"),
            Value::error(AMP_FORMAT_ERROR)
        );
        // Detected after binding when no actuals remain for the bucket
        assert_eq!(run(&env, "((\\ {x &} {x}) 1)"), Value::error(AMP_FORMAT_ERROR));
    }
}

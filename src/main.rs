mod builtins;
mod config;
mod env;
mod error;
mod eval;
mod logging;
mod parser;
mod reader;
mod value;

use builtins::register_builtins;
use clap::Parser;
use config::{HISTORY_FILE, PROMPT, WELCOME_FOOTER, WELCOME_MESSAGE};
use env::Environment;
use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};
use std::path::PathBuf;
use std::rc::Rc;
use tracing::debug;
use value::Value;

/// Interpreter for the Lispy expression language
#[derive(Parser, Debug)]
#[command(name = "lispy")]
#[command(version = config::VERSION)]
#[command(about = "An interpreter for the Lispy expression language")]
struct CliArgs {
    /// Source files to run in order (starts a REPL when omitted)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let args = CliArgs::parse();

    let env = Environment::new();
    register_builtins(&env);

    if !args.files.is_empty() {
        run_files(&env, &args.files);
        return Ok(());
    }

    repl(&env)
}

/// Run each file through the `load` built-in, printing any error results.
fn run_files(env: &Rc<Environment>, files: &[PathBuf]) {
    for file in files {
        debug!(file = %file.display(), "running file");
        let filename = Value::Str(file.display().to_string());
        let result = builtins::load::builtin_load(env, vec![filename]);
        if let Value::Error(_) = result {
            println!("{}", result);
        }
    }
}

fn repl(env: &Rc<Environment>) -> Result<(), Box<dyn std::error::Error>> {
    let rl_config = Config::builder().auto_add_history(true).build();
    let mut rl = DefaultEditor::with_config(rl_config)?;
    let _ = rl.load_history(HISTORY_FILE);

    println!("{}", WELCOME_MESSAGE);
    println!("{}", WELCOME_FOOTER);

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }

                match parser::parse(&line) {
                    Ok(tree) => {
                        let expr = reader::read(&tree);
                        let result = eval::eval(env, expr);
                        println!("{}", result);
                    }
                    Err(e) => {
                        eprintln!("Parse error: {}", e);
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C clears the line and keeps the session alive
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                break;
            }
        }
    }

    let _ = rl.save_history(HISTORY_FILE);
    Ok(())
}

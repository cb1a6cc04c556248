// ABOUTME: Version and REPL presentation constants

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const WELCOME_MESSAGE: &str = concat!("Welcome to Lispy version ", env!("CARGO_PKG_VERSION"));
pub const WELCOME_FOOTER: &str = "Press Ctrl-D to exit";

pub const PROMPT: &str = "lispy> ";
pub const HISTORY_FILE: &str = ".lispy_history";

// ABOUTME: Version and REPL banner constants

pub const VERSION: &str = "1.0.0";
pub const WELCOME_MESSAGE: &str = "minilisp v1.0";
pub const WELCOME_SUBTITLE: &str = "A minimal mark-and-sweep Lisp interpreter";

pub const HELP_TEXT: &str = r#"
Type any expression to evaluate it. Use Ctrl-D to exit.
Special forms: define set! quote if begin lambda
Built-ins:     #t #f + - * < > gc
"#;

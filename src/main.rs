mod builtins;
mod config;
mod env;
mod error;
mod eval;
mod interpreter;
mod memory;
mod printer;
mod reader;
mod value;

use clap::Parser;
use config::{HELP_TEXT, WELCOME_MESSAGE, WELCOME_SUBTITLE};
use interpreter::Interpreter;
use rustyline::error::ReadlineError;
use rustyline::{Config, DefaultEditor};

/// A minimal mark-and-sweep Lisp interpreter, interactive only
#[derive(Parser, Debug)]
#[command(name = "minilisp")]
#[command(version = config::VERSION)]
#[command(about = "A minimal mark-and-sweep Lisp interpreter")]
struct CliArgs {
    /// Print every evaluated expression in verbose internal form to stderr
    #[arg(long = "trace")]
    trace: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    let mut interp = Interpreter::new();
    interp.trace = args.trace;

    let config = Config::builder().auto_add_history(true).build();
    let mut rl =
        DefaultEditor::with_config(config).map_err(|e| format!("Failed to initialize REPL: {}", e))?;

    let history_file = ".minilisp_history";
    let _ = rl.load_history(history_file);

    println!("{}", WELCOME_MESSAGE);
    println!("{}", WELCOME_SUBTITLE);

    loop {
        let readline = rl.readline("lisp> ");

        match readline {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }

                if line.trim() == "(help)" {
                    println!("{}", HELP_TEXT);
                    continue;
                }

                match interp.read_eval(&line) {
                    Ok(result) => {
                        if let Some(rendered) = printer::render_surface(&interp, result) {
                            println!("{}", rendered);
                        }
                    }
                    Err(e) => {
                        eprintln!("Error: {}", e);
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                break;
            }
        }
    }

    let _ = rl.save_history(history_file);

    Ok(())
}

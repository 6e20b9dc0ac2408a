use std::{fs, process};

use clap::Parser;
use deskcalc::{
    interpreter::{
        evaluator::Context,
        render::{indented::render_indented, tree::render_ascii_tree},
    },
    run_line,
};
use rustyline::{DefaultEditor, error::ReadlineError};

/// deskcalc is an interactive calculator for a small arithmetic language
/// with variables, assignment and implicit multiplication.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells deskcalc to look at a file instead of inline source text.
    #[arg(short, long)]
    file: bool,

    /// Source text to evaluate non-interactively; starts a REPL when
    /// omitted.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();
    let mut context = Context::new();

    let Some(contents) = args.contents else {
        repl(&mut context);
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            process::exit(1);
        })
    } else {
        contents
    };

    for line in script.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match run_line(line, &mut context) {
            Ok(result) => println!("{}", result.value),
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            },
        }
    }
}

/// Reads and evaluates lines until an empty line, `exit`, Ctrl-C or
/// Ctrl-D. Each successful line prints the decorated tree, the result and
/// the ASCII tree; lines containing `=` also print the variable table.
fn repl(context: &mut Context) {
    println!("deskcalc {}. Type expressions or assignments; an empty line or 'exit' quits.",
             env!("CARGO_PKG_VERSION"));

    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Failed to start the line editor: {e}");
            return;
        },
    };

    loop {
        match editor.readline(">>> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() || line.eq_ignore_ascii_case("exit") {
                    break;
                }
                let _ = editor.add_history_entry(line);

                match run_line(line, context) {
                    Ok(result) => {
                        print!("Decorated tree:\n{}", render_indented(&result.ast));
                        println!("Result: {}", result.value);
                        println!("{}", render_ascii_tree(&result.ast));
                        if line.contains('=') {
                            println!("Variables: {}", context.snapshot());
                        }
                    },
                    Err(e) => println!("{e}"),
                }
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{e}");
                break;
            },
        }
    }
}

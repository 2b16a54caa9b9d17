use clap::{Arg, ArgAction, Command};
use loxexpr::runner::{self, Emit, RunOptions};
use std::fs;
use std::path::Path;
use std::process;

fn cli() -> Command {
    Command::new("loxexpr")
        .about("Evaluates Lox expressions with source-level diagnostics")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("file")
                .help("File containing the expression to evaluate")
                .value_name("FILE")
                .index(1)
                .conflicts_with("eval"),
        )
        .arg(
            Arg::new("eval")
                .short('e')
                .long("eval")
                .value_name("SOURCE")
                .help("Evaluate SOURCE instead of reading a file"),
        )
        .arg(
            Arg::new("interactive")
                .short('i')
                .long("interactive")
                .help("Start in interactive REPL mode")
                .action(ArgAction::SetTrue)
                .conflicts_with_all(["file", "eval"]),
        )
        .arg(
            Arg::new("emit")
                .long("emit")
                .value_name("WHAT")
                .value_parser(["value", "tokens", "ast", "rpn"])
                .default_value("value")
                .help("Print the value, the token stream, the AST, or its RPN form"),
        )
}

fn main() {
    let matches = cli().get_matches();

    let emit = matches
        .get_one::<String>("emit")
        .and_then(|name| Emit::from_name(name))
        .unwrap_or_default();

    if let Some(source) = matches.get_one::<String>("eval") {
        let options = RunOptions {
            filename: Some("<eval>".to_string()),
            emit,
        };
        process::exit(runner::run(source, &options));
    }

    match matches.get_one::<String>("file") {
        Some(file_path) => run_file(file_path, emit),
        None => loxexpr::start_repl(emit),
    }
}

fn run_file(path: &str, emit: Emit) {
    let path = Path::new(path);

    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", path.display(), e);
            process::exit(1);
        }
    };

    let options = RunOptions {
        filename: Some(path.display().to_string()),
        emit,
    };
    process::exit(runner::run(&source, &options));
}

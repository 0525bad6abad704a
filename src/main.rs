use std::{fs, process::ExitCode};

use clap::{Parser, ValueEnum};
use tally::{
    ast::Expr,
    interpreter::{
        evaluator::evaluate,
        lexer::tokenize,
        parser::core::{DEFAULT_MAX_DEPTH, ParserConfig},
    },
    parse_source_with,
    util::diagnostic::{render, render_at},
};

/// What to print after a successful parse.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Emit {
    /// The tree as a parenthesized s-expression.
    Sexpr,
    /// The tree in Rust debug form, including positions.
    Ast,
    /// The token sequence produced by the lexer.
    Tokens,
    /// The evaluated value.
    Value,
}

/// tally parses integer arithmetic expressions into syntax trees.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells tally to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    /// Selects the output.
    #[arg(short, long, value_enum, default_value_t = Emit::Sexpr)]
    emit: Emit,

    /// Maximum nesting depth of parentheses and unary minus.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Removes the nesting limit.
    #[arg(long, conflicts_with = "max_depth")]
    unbounded: bool,

    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = if args.unbounded {
        ParserConfig::unbounded()
    } else {
        ParserConfig { max_depth: args.max_depth }
    };

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(source) => source,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    match run(&source, args.emit, &config) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        },
        Err(report) => {
            eprint!("{report}");
            ExitCode::FAILURE
        },
    }
}

/// Produces the requested output, or a rendered diagnostic on failure.
fn run(source: &str, emit: Emit, config: &ParserConfig) -> Result<String, String> {
    match emit {
        Emit::Tokens => {
            let tokens = tokenize(source).map_err(|e| render(source, &e))?;
            let lines: Vec<String> = tokens.iter()
                                           .map(|t| format!("{:>4}  {}", t.position, t.kind))
                                           .collect();
            Ok(lines.join("\n"))
        },
        Emit::Sexpr => parse(source, config).map(|expr| expr.to_string()),
        Emit::Ast => parse(source, config).map(|expr| format!("{expr:#?}")),
        Emit::Value => {
            let expr = parse(source, config)?;
            evaluate(&expr).map(|v| v.to_string())
                           .map_err(|e| render_at(source, e.position(), &e))
        },
    }
}

fn parse(source: &str, config: &ParserConfig) -> Result<Expr, String> {
    parse_source_with(source, config).map_err(|e| render(source, &e))
}

use std::io;

use clap::{Parser, ValueEnum};
use reckon::{Options, evaluate_with, util::format::Normalization};
use tracing_subscriber::EnvFilter;

/// Expressions evaluated when no input is supplied.
const DEMO_EXPRESSIONS: &[&str] = &["2+2", "2*(4-5)", "4^7-12^3", "3^4+6*((9+12/6)*(24/2^3-1))"];

/// reckon evaluates integer arithmetic expressions with `+ - * / % ^`,
/// unary minus and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print every intermediate state of the reduction before the result.
    #[arg(short, long)]
    verbose: bool,

    /// How the expression is echoed back.
    #[arg(short, long, value_enum, default_value_t = Style::Spacing)]
    normalize: Style,

    /// The expression to evaluate. When omitted, one line is read from
    /// standard input; an empty expression runs the built-in demo set.
    expression: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Style {
    /// Keep the expression as typed.
    Preserve,
    /// Remove all whitespace.
    Compact,
    /// One space around every binary operator.
    Spacing,
}

impl From<Style> for Normalization {
    fn from(style: Style) -> Self {
        match style {
            Style::Preserve => Self::Preserve,
            Style::Compact => Self::Compact,
            Style::Spacing => Self::Spacing,
        }
    }
}

fn main() {
    tracing_subscriber::fmt().with_writer(io::stderr)
                             .with_env_filter(EnvFilter::from_default_env())
                             .init();

    let args = Args::parse();

    let expression = match args.expression {
        Some(expression) => expression,
        None => {
            let mut line = String::new();
            io::stdin().read_line(&mut line).unwrap_or_else(|e| {
                                                eprintln!("Failed to read an expression from standard input: {e}");
                                                std::process::exit(1);
                                            });
            line
        },
    };

    let options = Options { verbose:       args.verbose,
                            normalization: args.normalize.into(), };

    if expression.trim().is_empty() {
        println!("Printing test expressions:");
        let demo = Options { verbose: false,
                             ..options };
        for source in DEMO_EXPRESSIONS {
            run(source, &demo);
        }
    } else if !run(expression.trim(), &options) {
        std::process::exit(1);
    }
}

/// Evaluates one expression and prints its trace and result.
///
/// Returns `false` if evaluation failed; the error has been printed.
fn run(source: &str, options: &Options) -> bool {
    match evaluate_with(source, options) {
        Ok(evaluation) => {
            for state in &evaluation.trace {
                println!("{state}");
            }
            println!("{evaluation}");
            true
        },
        Err(e) => {
            eprintln!("{e}");
            false
        },
    }
}

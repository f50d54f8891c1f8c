use std::{fs, process::ExitCode};

use clap::Parser;
use reckon::{
    analyze,
    config::{AnalyzerConfig, DEFAULT_CEILING, DEFAULT_MAX_NESTING, parse_ceiling},
};

/// reckon analyzes and evaluates arithmetic expressions over non-negative
/// integers with `+`, `-`, `*`, `/` and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells reckon to read the expression from a file instead of the command
    /// line.
    #[arg(short, long)]
    file: bool,

    /// Prints the token sequence before the result.
    #[arg(short, long)]
    tokens: bool,

    /// Reports every stage that passed on stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Skips the parenthesis and literal zero divisor check before parsing.
    #[arg(long)]
    no_structural_check: bool,

    /// Keeps the structural check but lets literal zero divisors through to
    /// evaluation.
    #[arg(long)]
    no_zero_literal_check: bool,

    /// Skips the magnitude check on the result.
    #[arg(long)]
    no_bound_check: bool,

    /// Largest accepted magnitude of the result, inclusive. Must be finite and
    /// not negative.
    #[arg(long, default_value_t = DEFAULT_CEILING, value_parser = parse_ceiling)]
    ceiling: f64,

    /// How deeply parentheses may nest.
    #[arg(long, default_value_t = DEFAULT_MAX_NESTING)]
    max_nesting: usize,

    contents: String,
}

impl Args {
    fn config(&self) -> AnalyzerConfig {
        AnalyzerConfig { structural_check:      !self.no_structural_check,
                         zero_divisor_literals: !self.no_zero_literal_check,
                         bound_check:           !self.no_bound_check,
                         ceiling:               self.ceiling,
                         max_nesting:           self.max_nesting, }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = args.config();

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(text) => strip_line_terminator(text),
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    match analyze(&source, &config) {
        Ok(analysis) => {
            if args.tokens {
                for token in analysis.tokens.iter() {
                    println!("{:<7} {:<6} @{}", token.kind, token.lexeme, token.offset);
                }
            }
            if args.verbose {
                for stage in &analysis.stages {
                    eprintln!("{stage}");
                }
            }
            println!("{}", analysis.value);
            ExitCode::SUCCESS
        },
        Err(diagnostic) => {
            eprintln!("{diagnostic}");
            ExitCode::FAILURE
        },
    }
}

/// Drops one trailing `\n` or `\r\n`, which editors add to files but the
/// lexer does not accept.
fn strip_line_terminator(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

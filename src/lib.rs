//! # reckon
//!
//! reckon is an arithmetic expression analyzer written in Rust.
//! It turns a plain-text expression over non-negative integers, `+ - * /` and
//! parentheses into a number, in four stages: lexical analysis, syntactic
//! parsing, semantic validation and evaluation.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    analysis::{Analysis, Stage},
    config::AnalyzerConfig,
    error::{ArithmeticError, Diagnostic, SemanticError},
    interpreter::{
        evaluator::core::evaluate,
        lexer::tokenize,
        parser::core::parse_tokens,
        semantic::{bound::check_bound, structure::check_structure},
    },
};

/// Describes the outcome of a successful analysis.
///
/// This module declares the [`Analysis`] record handed to the presentation
/// layer (tokens, expression tree, value) and the [`Stage`] markers that
/// report which checks ran and passed.
pub mod analysis;
/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the binary operators. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines literal and operator chain nodes.
/// - Attaches source offsets to nodes for error reporting.
pub mod ast;
/// Holds the knobs of the pipeline.
///
/// Which optional checks run, the magnitude ceiling and the nesting limit,
/// with their defaults as named constants.
pub mod config;
/// Provides unified error types for every stage.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// evaluation or semantic validation, and the [`Diagnostic`] they all turn
/// into at the pipeline boundary.
///
/// # Responsibilities
/// - Defines one error enum per stage.
/// - Attaches source offsets and readable messages.
/// - Tags each failure with one of four mutually exclusive kinds.
pub mod error;
/// Orchestrates the stages of analysis.
///
/// This module ties together lexing, parsing, evaluation, semantic checks and
/// value representation. Each stage is usable on its own; [`analyze`] runs
/// them in order.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, checks.
/// - Provides entry points for each stage.
pub mod interpreter;
/// General utilities for numeric conversion.
///
/// This module provides the helpers shared across stages: reading digit
/// lexemes as numbers and promoting integers to floating point.
pub mod util;

/// Runs the full pipeline on one source text.
///
/// Stages run in order: lexing, the structural check (if enabled), parsing,
/// evaluation and the bound check (if enabled). The first failing stage
/// stops the analysis and its error becomes the returned [`Diagnostic`];
/// nothing computed before the failure is returned with it.
///
/// A value too large to be represented at all is beyond any ceiling. With the
/// bound check on, an overflow while evaluating is therefore reported as the
/// semantic magnitude error the bound check would have raised.
///
/// Each call builds its tokens and tree from scratch and keeps no state
/// between calls, so the same input always gives the same outcome and calls
/// may run concurrently.
///
/// # Errors
/// A [`Diagnostic`] of kind `Lexical`, `Syntax`, `Arithmetic` or `Semantic`,
/// from whichever stage failed first.
///
/// # Examples
/// ```
/// use reckon::{analyze, config::AnalyzerConfig, error::ErrorKind, interpreter::value::Number};
///
/// let config = AnalyzerConfig::default();
///
/// // Precedence and left-associativity.
/// let analysis = analyze("2+3*4", &config).unwrap();
/// assert_eq!(analysis.value, Number::Integer(14));
/// assert_eq!(analyze("6-3-2", &config).unwrap().value, Number::Integer(1));
///
/// // Division by a literal zero is caught before parsing.
/// let error = analyze("5/0", &config).unwrap_err();
/// assert_eq!(error.kind, ErrorKind::Semantic);
///
/// // Division by a computed zero is caught during evaluation.
/// let error = analyze("5/(2-2)", &config).unwrap_err();
/// assert_eq!(error.kind, ErrorKind::Arithmetic);
///
/// // Values past the `f64` range exceed the ceiling.
/// let error = analyze(&"9".repeat(400), &config).unwrap_err();
/// assert_eq!(error.kind, ErrorKind::Semantic);
/// ```
pub fn analyze(source: &str, config: &AnalyzerConfig) -> Result<Analysis, Diagnostic> {
    let mut stages = Vec::new();

    let tokens = tokenize(source)?;
    stages.push(Stage::Lexical);

    if config.structural_check {
        check_structure(&tokens, config.zero_divisor_literals)?;
        stages.push(Stage::Structural);
    }

    let expr = parse_tokens(&tokens, config.max_nesting)?;
    stages.push(Stage::Syntax);

    let value = evaluate(&expr).map_err(|error| match error {
                                   ArithmeticError::Overflow { offset } if config.bound_check => {
                                       Diagnostic::from(SemanticError::MagnitudeOutOfRange { offset,
                                                                                             ceiling: config.ceiling, })
                                   },
                                   error => Diagnostic::from(error),
                               })?;
    stages.push(Stage::Evaluation);

    if config.bound_check {
        check_bound(value, config.ceiling)?;
        stages.push(Stage::Bound);
    }

    Ok(Analysis { tokens,
                  expr,
                  value,
                  stages })
}

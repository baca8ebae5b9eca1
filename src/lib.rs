//! # currenscript
//!
//! currenscript is a small, statically typed scripting language with
//! first-class currency amounts. Programs declare functions, compute with
//! integers, floats, strings, booleans and decimal money values, and convert
//! between currencies using an exchange-rate table read from a configuration
//! file.
//!
//! The pipeline has three stages: the lexer turns characters into tokens, the
//! parser builds a [`Program`] by recursive descent and the tree-walking
//! interpreter runs its `main` function.

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

use std::{fs, io::Write, path::Path};

use crate::{
    ast::Program,
    config::Config,
    error::Error,
    interpreter::{
        evaluator::core::{ENTRY_FUNCTION, Interpreter},
        lexer::Lexer,
        parser::core::Parser,
        source::{FileSource, Source, StringSource},
        value::core::Value,
    },
};

/// Defines the structure of parsed programs.
///
/// This module declares the functions, statements, expressions and types
/// that represent a program as a tree. The AST is built by the parser and
/// walked by the evaluator.
///
/// # Responsibilities
/// - Defines one closed enum per node category.
/// - Describes declared variable and return types, including currency types.
pub mod ast;
/// Reads the currency configuration.
///
/// The configuration declares the currency ids a program may use and the
/// exchange rates between them.
pub mod config;
/// Provides unified error types for every stage of a run.
///
/// This module defines all errors that can be raised while reading the
/// configuration, lexing, parsing or evaluating a program, and the crate-level
/// [`Error`](error::Error) that wraps them.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Attaches source positions and rule names for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the execution of programs.
///
/// This module ties together sources, lexing, parsing, evaluation and value
/// representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Convert between `i64`, `f64` and decimal amounts without silent data
///   loss.
pub mod util;

/// Parses the currency configuration text.
///
/// # Errors
/// Returns `Error::Config` if the text is malformed.
pub fn parse_config(text: &str) -> Result<Config, Error> {
    Ok(config::parse_config(text)?)
}

/// Lexes and parses a program read from `source`.
///
/// `currency_ids` are the identifiers the lexer classifies as currency
/// types.
///
/// # Errors
/// Returns `Error::Lex` or `Error::Parse` if the program is malformed.
pub fn parse_program<S, I>(source: S, currency_ids: I) -> Result<Program, Error>
    where S: Source,
          I: IntoIterator,
          I::Item: Into<String>
{
    let lexer = Lexer::new(source, currency_ids)?;
    Ok(Parser::new(lexer)?.parse_program()?)
}

/// Parses a program held in memory.
///
/// # Errors
/// Returns `Error::Lex` or `Error::Parse` if the program is malformed.
///
/// # Example
/// ```
/// use currenscript::parse_program_str;
///
/// let program = parse_program_str("PLN main() { return 1.0 as PLN; }", ["PLN"]).unwrap();
/// assert!(program.functions.contains_key("main"));
///
/// assert!(parse_program_str("int main() { return 1 }", ["PLN"]).is_err());
/// ```
pub fn parse_program_str<I>(text: &str, currency_ids: I) -> Result<Program, Error>
    where I: IntoIterator,
          I::Item: Into<String>
{
    parse_program(StringSource::new(text), currency_ids)
}

/// Runs a program against a configuration, printing to standard output.
///
/// # Returns
/// The value returned by `main`, or `None` if `main` is `void`.
///
/// # Errors
/// Returns an error if the configuration or program is malformed, or if
/// evaluation fails.
///
/// # Examples
/// ```
/// use currenscript::{interpreter::value::core::Value, run};
///
/// let result = run("PLN EUR; PLN 1.0 0.23 EUR 4.64 1.0", "int main() { return 3 + 5; }");
/// assert_eq!(result.unwrap(), Some(Value::Integer(8)));
///
/// // `x` is never initialized.
/// let result = run(";", "int main() { return x; }");
/// assert!(result.is_err());
/// ```
pub fn run(config_text: &str, program_text: &str) -> Result<Option<Value>, Error> {
    let config = parse_config(config_text)?;
    let program = parse_program_str(program_text, &config.currency_ids)?;
    Ok(Interpreter::new(&program, &config.exchange_rates).execute_program(ENTRY_FUNCTION)?)
}

/// Runs a program against a configuration, printing to `output`.
///
/// # Errors
/// Same as [`run`].
///
/// # Example
/// ```
/// use currenscript::run_with_output;
///
/// let mut out = Vec::new();
/// let result = run_with_output(";", "void main() { print(\"hi\"); }", &mut out).unwrap();
///
/// assert_eq!(result, None);
/// assert_eq!(String::from_utf8(out).unwrap(), "hi\n");
/// ```
pub fn run_with_output<W: Write>(config_text: &str,
                                 program_text: &str,
                                 output: W)
                                 -> Result<Option<Value>, Error> {
    let config = parse_config(config_text)?;
    let program = parse_program_str(program_text, &config.currency_ids)?;
    let mut interpreter = Interpreter::with_output(&program, &config.exchange_rates, output);
    Ok(interpreter.execute_program(ENTRY_FUNCTION)?)
}

/// Runs the program file at `program_path` with the configuration file at
/// `config_path`, printing to standard output.
///
/// The program is read through a [`FileSource`], which releases the file
/// before lexing starts.
///
/// # Errors
/// Returns `Error::Io` if either file cannot be read or is not valid UTF-8,
/// and otherwise the same errors as [`run`].
pub fn run_files(config_path: impl AsRef<Path>,
                 program_path: impl AsRef<Path>)
                 -> Result<Option<Value>, Error> {
    let config_path = config_path.as_ref();
    let program_path = program_path.as_ref();

    let config_text = fs::read_to_string(config_path).map_err(|source| Error::Io { path: config_path.to_path_buf(),
                                                                                    source })?;
    let config = parse_config(&config_text)?;

    let source = FileSource::open(program_path).map_err(|source| Error::Io { path: program_path.to_path_buf(),
                                                                             source })?;
    let program = parse_program(source, &config.currency_ids)?;

    Ok(Interpreter::new(&program, &config.exchange_rates).execute_program(ENTRY_FUNCTION)?)
}

/// The source module provides character streams for the lexer.
///
/// Defines the `Source` trait together with an in-memory string source and a
/// streaming file source.
pub mod source;
/// The token module defines lexical units.
///
/// Declares token kinds, source positions and the literal payloads attached
/// to tokens.
pub mod token;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads characters from a `Source` and produces a
/// stream of tokens, each corresponding to meaningful language elements such
/// as numbers, identifiers, currency ids, operators, delimiters, and keywords.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind and source
///   position.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer one at a time and constructs the
/// function definitions of a program by recursive descent.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (functions, statements,
///   expressions).
/// - Validates correct grammar and syntax, reporting errors with the rule
///   name, the accepted tokens and the position of the offending token.
/// - Rejects duplicate function and parameter names.
pub mod parser;
/// The evaluator module executes a parsed program.
///
/// The evaluator walks the AST starting from the entry function, manages the
/// call stack and scopes, performs arithmetic, comparisons and casts, and
/// produces the program result.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, function calls, and control flow.
/// - Reports runtime errors such as division by zero or invalid casts.
pub mod evaluator;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all value types used during execution: integers,
/// floating-point numbers, strings, booleans and currency amounts.
pub mod value;

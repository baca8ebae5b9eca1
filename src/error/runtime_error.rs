#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// Values are rendered into the variant fields as text so that the error
/// stays independent of the runtime value representation.
pub enum RuntimeError {
    /// The entry function is not declared.
    MissingMainFunction {
        /// The name of the entry function.
        name: String,
    },
    /// A called function is neither user-defined nor built in.
    MissingFunction {
        /// The name of the function.
        name: String,
    },
    /// A variable was read or assigned without being initialized.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// A variable was initialized twice in the same scope.
    VariableAlreadyExists {
        /// The name of the variable.
        name: String,
    },
    /// A function was called with the wrong number of arguments.
    ArgumentCountMismatch {
        /// The name of the function.
        function: String,
        /// The number of declared parameters.
        expected: usize,
        /// The number of supplied arguments.
        found:    usize,
    },
    /// A value did not have the type its context requires.
    TypeMismatch {
        /// The required type.
        expected: String,
        /// The offending value.
        found:    String,
    },
    /// A non-`void` function finished without returning a value.
    NoValueReturned {
        /// The name of the function.
        function: String,
        /// The declared return type.
        expected: String,
    },
    /// A call that produces no value was used where a value is needed.
    MissingValue {
        /// The name of the function.
        function: String,
    },
    /// An operation does not support the operand's type.
    UnsupportedValueType {
        /// The type name of the operand.
        type_name: String,
        /// The operation that was attempted.
        operation: &'static str,
    },
    /// A binary operation does not support this pair of operand types.
    UnsupportedCombination {
        /// The left operand's type name.
        left:      String,
        /// The right operand's type name.
        right:     String,
        /// The operation that was attempted.
        operation: &'static str,
    },
    /// Operands of different types (or currencies) were combined or compared.
    DifferentTypes {
        /// The left operand.
        left:  String,
        /// The right operand.
        right: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// The cast table has no entry for this pair of types.
    UnsupportedCast {
        /// The source type name.
        from: String,
        /// The target type name.
        to:   String,
    },
    /// No exchange rate is configured for this currency pair.
    MissingExchangeRate {
        /// The source currency id.
        from: String,
        /// The target currency id.
        to:   String,
    },
    /// A value could not be converted into the requested number.
    InvalidNumber {
        /// The text of the offending value.
        text:   String,
        /// The requested target type.
        target: &'static str,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// The operation that overflowed.
        operation: &'static str,
    },
    /// Calls nested deeper than the interpreter allows.
    CallDepthExceeded {
        /// The function whose call exceeded the limit.
        function: String,
        /// The maximum number of nested calls.
        limit:    usize,
    },
    /// A variable was touched while no function call was active.
    NoActiveCall,
    /// A built-in could not write to the program output.
    OutputFailed {
        /// The underlying I/O error message.
        reason: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingMainFunction { name } => {
                write!(f, "Missing declaration of main function identified by: {name}.")
            },
            Self::MissingFunction { name } => {
                write!(f, "Missing declaration of function identified by: {name}.")
            },
            Self::UnknownVariable { name } => {
                write!(f, "Variable with identifier: {name} is not defined.")
            },
            Self::VariableAlreadyExists { name } => write!(f,
                                                           "Variable with identifier {name} has already been initiated."),
            Self::ArgumentCountMismatch { function,
                                          expected,
                                          found, } => write!(f,
                                                             "Number of expected arguments for function {function}: {expected}; number of passed arguments: {found}."),
            Self::TypeMismatch { expected, found } => {
                write!(f, "Expected value of type {expected} but received {found}.")
            },
            Self::NoValueReturned { function, expected } => write!(f,
                                                                   "Function {function} should return type {expected} but no value was returned."),
            Self::MissingValue { function } => {
                write!(f, "Function {function} does not produce a value.")
            },
            Self::UnsupportedValueType { type_name, operation } => write!(f,
                                                                          "Unsupported value type: {type_name} handled in operation {operation}."),
            Self::UnsupportedCombination { left,
                                           right,
                                           operation, } => write!(f,
                                                                  "Unsupported combination of value types: {left}, {right} passed to operation {operation}."),
            Self::DifferentTypes { left, right } => {
                write!(f, "Values of different types cannot be combined: {left} and {right}.")
            },
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::UnsupportedCast { from, to } => write!(f, "Cannot cast from {from} to {to}."),
            Self::MissingExchangeRate { from, to } => {
                write!(f, "Cannot cast from {from} to {to}. Missing currency exchange rate.")
            },
            Self::InvalidNumber { text, target } => {
                write!(f, "Value '{text}' cannot be converted to {target}.")
            },
            Self::Overflow { operation } => {
                write!(f, "Integer overflow while trying to compute {operation}.")
            },
            Self::CallDepthExceeded { function, limit } => write!(f,
                                                                  "Call of function {function} exceeds the maximum call depth of {limit}."),
            Self::NoActiveCall => write!(f, "No function call is active."),
            Self::OutputFailed { reason } => write!(f, "Failed to write program output: {reason}."),
        }
    }
}

impl std::error::Error for RuntimeError {}

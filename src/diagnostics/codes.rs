// src/diagnostics/codes.rs

/// Represents a specific error code with its associated information.
/// This struct serves as the single source of truth for all compiler diagnostics.
#[derive(Debug, Clone)]
pub struct ErrorCode {
    pub code: &'static str,
    pub message: &'static str,
    pub explanation: &'static str,
}

/*
E00xx: 词法分析 (Lexical Analysis) 错误。

E01xx: 语法分析 (Parsing / Syntax) 错误。

E02xx: 语义分析 (Scope / Name Resolution) 错误。
*/

/// `--explain` 用的全部错误码。
pub const ALL: &[&ErrorCode] = &[
    &E0001_INVALID_SYMBOL,
    &E0002_INVALID_CHAR_CONSTANT,
    &E0003_UNTERMINATED_COMMENT,
    &E0004_NUMBER_TOO_LARGE,
    &E0100_MISSING_TOKEN,
    &E0101_INVALID_CONSTANT,
    &E0102_INVALID_TYPE,
    &E0103_INVALID_BASIC_TYPE,
    &E0104_INVALID_PARAMETER,
    &E0105_INVALID_STATEMENT,
    &E0106_INVALID_FACTOR,
    &E0107_INVALID_COMPARATOR,
    &E0200_DUPLICATE_IDENT,
    &E0201_UNDECLARED_CONSTANT,
    &E0202_UNDECLARED_TYPE,
    &E0203_UNDECLARED_VARIABLE,
    &E0204_UNDECLARED_FUNCTION,
    &E0205_UNDECLARED_PROCEDURE,
    &E0206_UNDECLARED_IDENT,
];

/// 按错误码字符串查找，大小写不敏感。
pub fn lookup(code: &str) -> Option<&'static ErrorCode> {
    ALL.iter().copied().find(|c| c.code.eq_ignore_ascii_case(code))
}

// --- E00xx: Lexical Analysis Errors ---

pub const E0001_INVALID_SYMBOL: ErrorCode = ErrorCode {
    code: "E0001",
    message: "Invalid symbol",
    explanation: "The scanner encountered a character that does not start any KPL token. \
                  Check for typos or symbols such as `#` or `&` that the language does not use.",
};

pub const E0002_INVALID_CHAR_CONSTANT: ErrorCode = ErrorCode {
    code: "E0002",
    message: "Invalid char constant",
    explanation: "A character constant is exactly one character between single quotes, for example `'a'`. \
                  Empty, multi-character and unclosed quotes are rejected.",
};

pub const E0003_UNTERMINATED_COMMENT: ErrorCode = ErrorCode {
    code: "E0003",
    message: "End of comment expected",
    explanation: "A comment opened with `(*` reached the end of the file without a closing `*)`.",
};

pub const E0004_NUMBER_TOO_LARGE: ErrorCode = ErrorCode {
    code: "E0004",
    message: "Number is too large",
    explanation: "Integer literals must fit into a 64-bit signed integer.",
};

// --- E01xx: Syntax Analysis (Parsing) Errors ---

pub const E0100_MISSING_TOKEN: ErrorCode = ErrorCode {
    code: "E0100",
    message: "Missing token",
    explanation: "The grammar requires a specific token at this point (a `;`, a keyword such as `then`, \
                  an identifier, ...) but the next token is something else. The label names the token \
                  the parser expected.",
};

pub const E0101_INVALID_CONSTANT: ErrorCode = ErrorCode {
    code: "E0101",
    message: "Invalid constant",
    explanation: "A constant is an optionally signed number, an optionally signed name of another integer \
                  constant, or a character literal. Signs cannot be applied to character constants.",
};

pub const E0102_INVALID_TYPE: ErrorCode = ErrorCode {
    code: "E0102",
    message: "Invalid type",
    explanation: "A type is `integer`, `char`, `array[N] of <type>` or the name of a declared type.",
};

pub const E0103_INVALID_BASIC_TYPE: ErrorCode = ErrorCode {
    code: "E0103",
    message: "Invalid basic type",
    explanation: "Parameters and function results must have a basic type: `integer` or `char`.",
};

pub const E0104_INVALID_PARAMETER: ErrorCode = ErrorCode {
    code: "E0104",
    message: "Invalid parameter",
    explanation: "A parameter group starts with an identifier, or with `var` for by-reference parameters.",
};

pub const E0105_INVALID_STATEMENT: ErrorCode = ErrorCode {
    code: "E0105",
    message: "Invalid statement",
    explanation: "A statement starts with an identifier (assignment), `call`, `begin`, `if`, `while`, \
                  `for` or `repeat`. An empty statement is only allowed before `;`, `end` or `else`.",
};

pub const E0106_INVALID_FACTOR: ErrorCode = ErrorCode {
    code: "E0106",
    message: "Invalid factor",
    explanation: "An operand of an expression is a number, a character literal, a constant, a variable \
                  (optionally indexed), a function call, or a parenthesised expression.",
};

pub const E0107_INVALID_COMPARATOR: ErrorCode = ErrorCode {
    code: "E0107",
    message: "Invalid comparator",
    explanation: "A condition compares two expressions with one of `=`, `<>`, `<`, `<=`, `>`, `>=`.",
};

// --- E02xx: Semantic Analysis Errors ---

pub const E0200_DUPLICATE_IDENT: ErrorCode = ErrorCode {
    code: "E0200",
    message: "Duplicate identifier",
    explanation: "A name can be declared only once per scope. Declaring the same name again in an inner \
                  procedure or function is allowed and shadows the outer declaration.",
};

pub const E0201_UNDECLARED_CONSTANT: ErrorCode = ErrorCode {
    code: "E0201",
    message: "Undeclared constant",
    explanation: "The name is used where a constant is required, but no constant with this name is visible. \
                  The same error is reported when the name exists but denotes something else.",
};

pub const E0202_UNDECLARED_TYPE: ErrorCode = ErrorCode {
    code: "E0202",
    message: "Undeclared type",
    explanation: "The name is used as a type, but no type with this name is visible. \
                  The same error is reported when the name exists but denotes something else.",
};

pub const E0203_UNDECLARED_VARIABLE: ErrorCode = ErrorCode {
    code: "E0203",
    message: "Undeclared variable",
    explanation: "The name is used where a variable or parameter is required (for example as a `for` \
                  control variable), but no such variable is visible.",
};

pub const E0204_UNDECLARED_FUNCTION: ErrorCode = ErrorCode {
    code: "E0204",
    message: "Undeclared function",
    explanation: "The name is called as a function, but no function with this name is visible.",
};

pub const E0205_UNDECLARED_PROCEDURE: ErrorCode = ErrorCode {
    code: "E0205",
    message: "Undeclared procedure",
    explanation: "The target of a `call` statement must be a visible procedure.",
};

pub const E0206_UNDECLARED_IDENT: ErrorCode = ErrorCode {
    code: "E0206",
    message: "Undeclared identifier",
    explanation: "The name is not declared in any enclosing scope, or it cannot be used here. \
                  The left-hand side of an assignment must be a variable, a parameter, or the name of \
                  the function currently being defined (which sets its result).",
};

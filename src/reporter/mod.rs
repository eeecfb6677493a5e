//! 这个模块是整个编译器错误处理系统的核心。
//! 它使用 `thiserror` 来定义所有结构化的错误；渲染交给 `diagnostics`。
//!
//! 所有错误都是致命的：第一个错误沿着 `?` 一路返回到会话边界，不做任何恢复。

use crate::diagnostics::codes::{self, ErrorCode};
use crate::lexer::TokenKind;
use crate::utils::Span;
use thiserror::Error;

pub type CompileResult<T> = Result<T, CompileError>;

/// 一次编译会话中止时带出来的错误。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} (line {}, column {})", .span.line, .span.column)]
pub struct CompileError {
    pub kind: ErrorKind,
    pub span: Span,
}

impl CompileError {
    pub fn new(kind: ErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn code(&self) -> &'static ErrorCode {
        self.kind.code()
    }
}

/// 所有可能的错误种类：词法、语法、语义三类。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    // --- 词法分析 ---
    #[error("invalid symbol")]
    InvalidSymbol,
    #[error("invalid char constant")]
    InvalidCharConstant,
    #[error("end of comment expected")]
    UnterminatedComment,
    #[error("number is too large")]
    NumberTooLarge,

    // --- 语法分析 ---
    #[error("missing {expected}")]
    MissingToken { expected: TokenKind },
    #[error("invalid constant")]
    InvalidConstant,
    #[error("invalid type")]
    InvalidType,
    #[error("invalid basic type")]
    InvalidBasicType,
    #[error("invalid parameter")]
    InvalidParameter,
    #[error("invalid statement")]
    InvalidStatement,
    #[error("invalid factor")]
    InvalidFactor,
    #[error("invalid comparator")]
    InvalidComparator,

    // --- 语义分析 ---
    #[error("duplicate identifier `{name}`")]
    DuplicateIdent { name: String },
    #[error("undeclared constant `{name}`")]
    UndeclaredConstant { name: String },
    #[error("undeclared type `{name}`")]
    UndeclaredType { name: String },
    #[error("undeclared variable `{name}`")]
    UndeclaredVariable { name: String },
    #[error("undeclared function `{name}`")]
    UndeclaredFunction { name: String },
    #[error("undeclared procedure `{name}`")]
    UndeclaredProcedure { name: String },
    #[error("undeclared identifier `{name}`")]
    UndeclaredIdent { name: String },
}

impl ErrorKind {
    /// 每个错误种类对应唯一的错误码。
    pub fn code(&self) -> &'static ErrorCode {
        match self {
            ErrorKind::InvalidSymbol => &codes::E0001_INVALID_SYMBOL,
            ErrorKind::InvalidCharConstant => &codes::E0002_INVALID_CHAR_CONSTANT,
            ErrorKind::UnterminatedComment => &codes::E0003_UNTERMINATED_COMMENT,
            ErrorKind::NumberTooLarge => &codes::E0004_NUMBER_TOO_LARGE,
            ErrorKind::MissingToken { .. } => &codes::E0100_MISSING_TOKEN,
            ErrorKind::InvalidConstant => &codes::E0101_INVALID_CONSTANT,
            ErrorKind::InvalidType => &codes::E0102_INVALID_TYPE,
            ErrorKind::InvalidBasicType => &codes::E0103_INVALID_BASIC_TYPE,
            ErrorKind::InvalidParameter => &codes::E0104_INVALID_PARAMETER,
            ErrorKind::InvalidStatement => &codes::E0105_INVALID_STATEMENT,
            ErrorKind::InvalidFactor => &codes::E0106_INVALID_FACTOR,
            ErrorKind::InvalidComparator => &codes::E0107_INVALID_COMPARATOR,
            ErrorKind::DuplicateIdent { .. } => &codes::E0200_DUPLICATE_IDENT,
            ErrorKind::UndeclaredConstant { .. } => &codes::E0201_UNDECLARED_CONSTANT,
            ErrorKind::UndeclaredType { .. } => &codes::E0202_UNDECLARED_TYPE,
            ErrorKind::UndeclaredVariable { .. } => &codes::E0203_UNDECLARED_VARIABLE,
            ErrorKind::UndeclaredFunction { .. } => &codes::E0204_UNDECLARED_FUNCTION,
            ErrorKind::UndeclaredProcedure { .. } => &codes::E0205_UNDECLARED_PROCEDURE,
            ErrorKind::UndeclaredIdent { .. } => &codes::E0206_UNDECLARED_IDENT,
        }
    }
}

use crate::utils::Span;
use logos::{FilterResult, Logos};
use std::fmt::{Display, Formatter, Result};

/// logos 解析时需要使用的错误类型
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LexingError {
    /// 使用 `#[default]` 来指定当 logos 遇到无法识别的字符时使用哪个变体。
    #[default]
    InvalidToken,
    /// `(*` 之后直到文件末尾都没有 `*)`。
    UnterminatedComment,
}

/// KPL 语言中所有可能的词法单元种类。
///
/// 这是一个不带数据的封闭枚举：解析器只按种类做分派和 `eat`，
/// 词素和数值放在 [`Token`] 里。
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(error = LexingError)]
// 跳过空白
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    // 关键字（大小写不敏感）
    #[token("program", ignore(ascii_case))]
    Program,
    #[token("const", ignore(ascii_case))]
    Const,
    #[token("type", ignore(ascii_case))]
    Type,
    #[token("var", ignore(ascii_case))]
    Var,
    #[token("integer", ignore(ascii_case))]
    Integer,
    #[token("char", ignore(ascii_case))]
    Char,
    #[token("array", ignore(ascii_case))]
    Array,
    #[token("of", ignore(ascii_case))]
    Of,
    #[token("function", ignore(ascii_case))]
    Function,
    #[token("procedure", ignore(ascii_case))]
    Procedure,
    #[token("begin", ignore(ascii_case))]
    Begin,
    #[token("end", ignore(ascii_case))]
    End,
    #[token("call", ignore(ascii_case))]
    Call,
    #[token("if", ignore(ascii_case))]
    If,
    #[token("then", ignore(ascii_case))]
    Then,
    #[token("else", ignore(ascii_case))]
    Else,
    #[token("while", ignore(ascii_case))]
    While,
    #[token("do", ignore(ascii_case))]
    Do,
    #[token("for", ignore(ascii_case))]
    For,
    #[token("to", ignore(ascii_case))]
    To,
    #[token("repeat", ignore(ascii_case))]
    Repeat,
    #[token("until", ignore(ascii_case))]
    Until,

    // 标识符与字面量
    #[regex("[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
    #[regex("[0-9]+")]
    Number,
    #[regex(r"'[^'\n]'")]
    CharLiteral,

    // 运算符号
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Times,
    #[token("/")]
    Slash,
    #[token("=")]
    Eq,
    #[token("<>")]
    #[token("!=")]
    Neq,
    #[token("<")]
    Lt,
    #[token("<=")]
    Le,
    #[token(">")]
    Gt,
    #[token(">=")]
    Ge,
    #[token(":=")]
    Assign,

    // 分隔符号
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Period,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    #[token("(.")]
    LBracket,
    #[token("]")]
    #[token(".)")]
    RBracket,

    /// `(* ... *)` 注释，回调总是跳过它，解析器永远看不到这个种类。
    #[token("(*", block_comment)]
    Comment,

    /// 文件结束标志。logos 不会产生它，由 [`super::Lexer`] 在输入耗尽时补上。
    Eof,
}

/// 块注释的辅助函数：一直吃到 `*)` 为止。
fn block_comment(lex: &mut logos::Lexer<TokenKind>) -> FilterResult<(), LexingError> {
    match lex.remainder().find("*)") {
        Some(end) => {
            lex.bump(end + 2);
            FilterResult::Skip
        }
        None => {
            lex.bump(lex.remainder().len());
            FilterResult::Error(LexingError::UnterminatedComment)
        }
    }
}

impl TokenKind {
    /// 关系运算符 `= <> < <= > >=`
    pub fn is_comparator(self) -> bool {
        matches!(
            self,
            TokenKind::Eq | TokenKind::Neq | TokenKind::Lt | TokenKind::Le | TokenKind::Gt | TokenKind::Ge
        )
    }

    fn keyword(self) -> Option<&'static str> {
        let s = match self {
            TokenKind::Program => "program",
            TokenKind::Const => "const",
            TokenKind::Type => "type",
            TokenKind::Var => "var",
            TokenKind::Integer => "integer",
            TokenKind::Char => "char",
            TokenKind::Array => "array",
            TokenKind::Of => "of",
            TokenKind::Function => "function",
            TokenKind::Procedure => "procedure",
            TokenKind::Begin => "begin",
            TokenKind::End => "end",
            TokenKind::Call => "call",
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::Do => "do",
            TokenKind::For => "for",
            TokenKind::To => "to",
            TokenKind::Repeat => "repeat",
            TokenKind::Until => "until",
            _ => return None,
        };
        Some(s)
    }

    fn symbol(self) -> Option<&'static str> {
        let s = match self {
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Times => "*",
            TokenKind::Slash => "/",
            TokenKind::Eq => "=",
            TokenKind::Neq => "<>",
            TokenKind::Lt => "<",
            TokenKind::Le => "<=",
            TokenKind::Gt => ">",
            TokenKind::Ge => ">=",
            TokenKind::Assign => ":=",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
            TokenKind::Period => ".",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            _ => return None,
        };
        Some(s)
    }
}

// 用于错误报告的可读表示，例如 "missing keyword `then`"。
impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if let Some(k) = self.keyword() {
            return write!(f, "keyword `{}`", k);
        }
        if let Some(s) = self.symbol() {
            return write!(f, "`{}`", s);
        }
        match self {
            TokenKind::Ident => write!(f, "an identifier"),
            TokenKind::Number => write!(f, "a number"),
            TokenKind::CharLiteral => write!(f, "a character literal"),
            TokenKind::Comment => write!(f, "a comment"),
            _ => write!(f, "end of file"),
        }
    }
}

/// 主体 Token 定义，包含其种类、词素和在源代码中的位置。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// 源代码中的原始切片。
    pub lexeme: String,
    /// `Number` 的整数值。
    pub value: Option<i64>,
    pub span: Span,
}

impl Token {
    /// 字符字面量 `'a'` 中的那个字符。
    pub fn char_value(&self) -> Option<char> {
        match self.kind {
            TokenKind::CharLiteral => self.lexeme.chars().nth(1),
            _ => None,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self.kind {
            TokenKind::Eof => write!(f, "{} at {}", self.kind, self.span),
            _ => write!(f, "`{}` at {}", self.lexeme, self.span),
        }
    }
}

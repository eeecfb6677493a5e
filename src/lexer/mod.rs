// 导入logos分词库
use logos::Logos;
// 导入错误处理模组
use crate::reporter::{CompileError, CompileResult, ErrorKind};
// 导入定位处理
use crate::utils::{LineIndex, Span};

mod token;

pub use token::{LexingError, Token, TokenKind};

// 声明单元测试模块
#[cfg(test)]
mod test;

/// 解析器从这里按需拉取 Token。
///
/// 输入耗尽后必须持续返回 `Eof`，而不是报告带外错误；
/// 无法识别的词素在这一层就变成致命错误，解析器永远看不到它们。
pub trait TokenSource {
    fn next_token(&mut self) -> CompileResult<Token>;
}

/// 基于 logos 的词法分析器。
pub struct Lexer<'src> {
    source: &'src str,
    inner: logos::Lexer<'src, TokenKind>,
    lines: LineIndex,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            inner: TokenKind::lexer(source),
            lines: LineIndex::new(source),
        }
    }

    fn eof(&self) -> Token {
        let end = self.source.len();
        Token {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            value: None,
            span: self.lines.span(self.source, end..end),
        }
    }

    fn lexical_error(&self, error: LexingError, span: Span) -> CompileError {
        let kind = match error {
            LexingError::UnterminatedComment => ErrorKind::UnterminatedComment,
            // 尽管得到了一个 LexingError，但它本身不包含无效字符的信息，
            // 需要从源码切片里判断是不是一个坏掉的字符字面量。
            LexingError::InvalidToken if self.source[span.into_range()].starts_with('\'') => {
                ErrorKind::InvalidCharConstant
            }
            LexingError::InvalidToken => ErrorKind::InvalidSymbol,
        };
        CompileError::new(kind, span)
    }
}

impl TokenSource for Lexer<'_> {
    fn next_token(&mut self) -> CompileResult<Token> {
        let Some(result) = self.inner.next() else {
            return Ok(self.eof());
        };
        let span = self.lines.span(self.source, self.inner.span());
        let kind = result.map_err(|e| self.lexical_error(e, span))?;
        let lexeme = self.inner.slice().to_string();

        let value = match kind {
            TokenKind::Number => Some(
                lexeme
                    .parse::<i64>()
                    .map_err(|_| CompileError::new(ErrorKind::NumberTooLarge, span))?,
            ),
            _ => None,
        };

        Ok(Token {
            kind,
            lexeme,
            value,
            span,
        })
    }
}

/// 对整段源代码做词法分析，直到（并包含）`Eof`。
pub fn lex(source: &str) -> CompileResult<Vec<Token>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let is_eof = token.kind == TokenKind::Eof;
        tokens.push(token);
        if is_eof {
            break;
        }
    }
    Ok(tokens)
}

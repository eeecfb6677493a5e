use super::Parser;
use crate::lexer::{TokenKind, TokenSource};
use crate::reporter::{CompileError, CompileResult, ErrorKind};
use crate::semantic::ObjectKind;

/// `ExpressionParser` Trait 负责条件、表达式、项和因子。
pub(super) trait ExpressionParser {
    /// Expression RelOp Expression
    fn compile_condition(&mut self) -> CompileResult<()>;
    /// [`+` | `-`] Term {(`+` | `-`) Term}
    fn compile_expression(&mut self) -> CompileResult<()>;
    /// Factor {(`*` | `/`) Factor}
    fn compile_term(&mut self) -> CompileResult<()>;
    /// NUMBER | CHAR | IDENT [Indexes | Arguments] | `(` Expression `)`
    fn compile_factor(&mut self) -> CompileResult<()>;
    /// {`[` Expression `]`}
    fn compile_indexes(&mut self) -> CompileResult<()>;
    /// [`(` [Expression {`,` Expression}] `)`]
    fn compile_arguments(&mut self) -> CompileResult<()>;
}

impl<S: TokenSource> ExpressionParser for Parser<S> {
    fn compile_condition(&mut self) -> CompileResult<()> {
        self.compile_expression()?;
        if !self.look_ahead.kind.is_comparator() {
            return Err(self.error_at_look_ahead(ErrorKind::InvalidComparator));
        }
        self.scan()?;
        self.compile_expression()
    }

    fn compile_expression(&mut self) -> CompileResult<()> {
        if matches!(self.look_ahead.kind, TokenKind::Plus | TokenKind::Minus) {
            self.scan()?;
        }
        self.compile_term()?;
        while matches!(self.look_ahead.kind, TokenKind::Plus | TokenKind::Minus) {
            self.scan()?;
            self.compile_term()?;
        }
        Ok(())
    }

    fn compile_term(&mut self) -> CompileResult<()> {
        self.compile_factor()?;
        while matches!(self.look_ahead.kind, TokenKind::Times | TokenKind::Slash) {
            self.scan()?;
            self.compile_factor()?;
        }
        Ok(())
    }

    fn compile_factor(&mut self) -> CompileResult<()> {
        match self.look_ahead.kind {
            TokenKind::Number => {
                self.eat(TokenKind::Number)?;
                Ok(())
            }
            TokenKind::CharLiteral => {
                self.eat(TokenKind::CharLiteral)?;
                Ok(())
            }
            TokenKind::Ident => {
                let (name, span) = self.eat_ident()?;
                let id = self.symtab.check_declared_ident(&name, span)?;
                match self.symtab.object(id).kind {
                    ObjectKind::Constant(_) | ObjectKind::Variable(_) | ObjectKind::Parameter { .. } => {
                        self.compile_indexes()
                    }
                    ObjectKind::Function { .. } => self.compile_arguments(),
                    // 类型、过程、程序名都不是值
                    _ => Err(CompileError::new(ErrorKind::InvalidFactor, span)),
                }
            }
            TokenKind::LParen => {
                self.eat(TokenKind::LParen)?;
                self.compile_expression()?;
                self.eat(TokenKind::RParen)?;
                Ok(())
            }
            _ => Err(self.error_at_look_ahead(ErrorKind::InvalidFactor)),
        }
    }

    fn compile_indexes(&mut self) -> CompileResult<()> {
        while self.check(TokenKind::LBracket) {
            self.eat(TokenKind::LBracket)?;
            self.compile_expression()?;
            self.eat(TokenKind::RBracket)?;
        }
        Ok(())
    }

    fn compile_arguments(&mut self) -> CompileResult<()> {
        if !self.check(TokenKind::LParen) {
            return Ok(());
        }
        self.eat(TokenKind::LParen)?;
        if !self.check(TokenKind::RParen) {
            self.compile_expression()?;
            while self.check(TokenKind::Comma) {
                self.eat(TokenKind::Comma)?;
                self.compile_expression()?;
            }
        }
        self.eat(TokenKind::RParen)?;
        Ok(())
    }
}

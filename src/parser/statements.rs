use super::Parser;
use super::expressions::ExpressionParser;
use crate::lexer::{TokenKind, TokenSource};
use crate::reporter::{CompileResult, ErrorKind};
use tracing::trace;

/// `StatementParser` Trait 负责解析各类语句。
///
/// 按前瞻 Token 直接分派，不回溯。
pub(super) trait StatementParser {
    /// Statement {`;` Statement}
    fn compile_statements(&mut self) -> CompileResult<()>;
    /// 解析任意类型的语句（分发函数）。
    fn compile_statement(&mut self) -> CompileResult<()>;
    /// LValue {`,` LValue} `:=` Expression {`,` Expression}
    fn compile_assign_st(&mut self) -> CompileResult<()>;
    /// IDENT Indexes，IDENT 必须能被赋值。
    fn compile_lvalue(&mut self) -> CompileResult<()>;
    /// `call` IDENT [Arguments]
    fn compile_call_st(&mut self) -> CompileResult<()>;
    /// `begin` Statements `end`
    fn compile_group_st(&mut self) -> CompileResult<()>;
    /// `if` Condition `then` Statement [`else` Statement]
    fn compile_if_st(&mut self) -> CompileResult<()>;
    /// `while` Condition `do` Statement
    fn compile_while_st(&mut self) -> CompileResult<()>;
    /// `for` IDENT `:=` Expression `to` Expression `do` Statement
    fn compile_for_st(&mut self) -> CompileResult<()>;
    /// `repeat` Statements `until` Condition
    fn compile_repeat_st(&mut self) -> CompileResult<()>;
}

impl<S: TokenSource> StatementParser for Parser<S> {
    fn compile_statements(&mut self) -> CompileResult<()> {
        self.compile_statement()?;
        while self.check(TokenKind::Semicolon) {
            self.eat(TokenKind::Semicolon)?;
            self.compile_statement()?;
        }
        Ok(())
    }

    fn compile_statement(&mut self) -> CompileResult<()> {
        match self.look_ahead.kind {
            TokenKind::Ident => self.compile_assign_st(),
            TokenKind::Call => self.compile_call_st(),
            TokenKind::Begin => self.compile_group_st(),
            TokenKind::If => self.compile_if_st(),
            TokenKind::While => self.compile_while_st(),
            TokenKind::For => self.compile_for_st(),
            TokenKind::Repeat => self.compile_repeat_st(),
            // 空语句：什么都不消费
            TokenKind::Semicolon | TokenKind::End | TokenKind::Else => Ok(()),
            _ => Err(self.error_at_look_ahead(ErrorKind::InvalidStatement)),
        }
    }

    fn compile_assign_st(&mut self) -> CompileResult<()> {
        trace!("parsing an assign statement");
        self.compile_lvalue()?;
        while self.check(TokenKind::Comma) {
            self.eat(TokenKind::Comma)?;
            self.compile_lvalue()?;
        }

        self.eat(TokenKind::Assign)?;

        self.compile_expression()?;
        while self.check(TokenKind::Comma) {
            self.eat(TokenKind::Comma)?;
            self.compile_expression()?;
        }
        Ok(())
    }

    fn compile_lvalue(&mut self) -> CompileResult<()> {
        let (name, span) = self.eat_ident()?;
        self.symtab.check_declared_lvalue(&name, span)?;
        self.compile_indexes()
    }

    fn compile_call_st(&mut self) -> CompileResult<()> {
        trace!("parsing a call statement");
        self.eat(TokenKind::Call)?;
        let (name, span) = self.eat_ident()?;
        self.symtab.check_declared_procedure(&name, span)?;
        self.compile_arguments()
    }

    fn compile_group_st(&mut self) -> CompileResult<()> {
        self.eat(TokenKind::Begin)?;
        self.compile_statements()?;
        self.eat(TokenKind::End)?;
        Ok(())
    }

    fn compile_if_st(&mut self) -> CompileResult<()> {
        trace!("parsing an if statement");
        self.eat(TokenKind::If)?;
        self.compile_condition()?;
        self.eat(TokenKind::Then)?;
        self.compile_statement()?;
        if self.check(TokenKind::Else) {
            self.eat(TokenKind::Else)?;
            self.compile_statement()?;
        }
        Ok(())
    }

    fn compile_while_st(&mut self) -> CompileResult<()> {
        trace!("parsing a while statement");
        self.eat(TokenKind::While)?;
        self.compile_condition()?;
        self.eat(TokenKind::Do)?;
        self.compile_statement()
    }

    fn compile_for_st(&mut self) -> CompileResult<()> {
        trace!("parsing a for statement");
        self.eat(TokenKind::For)?;
        let (name, span) = self.eat_ident()?;
        self.symtab.check_declared_variable(&name, span)?;

        self.eat(TokenKind::Assign)?;
        self.compile_expression()?;
        self.eat(TokenKind::To)?;
        self.compile_expression()?;
        self.eat(TokenKind::Do)?;
        self.compile_statement()
    }

    fn compile_repeat_st(&mut self) -> CompileResult<()> {
        trace!("parsing a repeat statement");
        self.eat(TokenKind::Repeat)?;
        self.compile_statements()?;
        self.eat(TokenKind::Until)?;
        self.compile_condition()
    }
}

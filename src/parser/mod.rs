//! src/parser/mod.rs
//!
//! KPL 的递归下降解析器。每个语法范畴对应一个产生式函数，
//! 解析的同时在符号表里声明对象、解析名字引用，不单独做一遍语义分析。
//!
//! 解析纪律：一个前瞻 Token（`look_ahead`）用于选择产生式，
//! 一个当前 Token（`current`）是刚刚被消费的那个。任何错误都直接中止整个会话。

mod constants;
mod declarations;
mod expressions;
mod statements;


use crate::lexer::{Token, TokenKind, TokenSource};
use crate::reporter::{CompileError, CompileResult, ErrorKind};
use crate::semantic::{ObjectId, SymbolTable};
use crate::utils::Span;
use std::mem;

use declarations::DeclarationParser;

/// 解析器结构体，持有一次编译会话的全部状态：
/// Token 源、两格的 Token 窗口，以及这次会话独占的符号表。
pub struct Parser<S: TokenSource> {
    source: S,
    /// 刚刚被消费的 Token；会话开始时还没有。
    current: Option<Token>,
    look_ahead: Token,
    symtab: SymbolTable,
}

impl<S: TokenSource> Parser<S> {
    /// 创建解析器并读入第一个前瞻 Token。
    pub fn new(mut source: S) -> CompileResult<Self> {
        let look_ahead = source.next_token()?;
        Ok(Self {
            source,
            current: None,
            look_ahead,
            symtab: SymbolTable::new(),
        })
    }

    /// 运行 Program 产生式，返回程序对象。
    pub fn parse(&mut self) -> CompileResult<ObjectId> {
        self.compile_program()
    }

    pub fn look_ahead(&self) -> &Token {
        &self.look_ahead
    }

    pub fn current(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symtab
    }

    pub fn into_symbols(self) -> SymbolTable {
        self.symtab
    }

    // --- Token 窗口操作 ---

    /// 丢弃旧的当前 Token，前瞻变成当前，再拉取一个新的前瞻。
    fn scan(&mut self) -> CompileResult<&Token> {
        let next = self.source.next_token()?;
        let consumed = mem::replace(&mut self.look_ahead, next);
        let token: &Token = self.current.insert(consumed);
        Ok(token)
    }

    /// 只有前瞻是期望的种类时才消费它；否则报告缺少 Token，且不消费。
    fn eat(&mut self, expected: TokenKind) -> CompileResult<&Token> {
        if self.look_ahead.kind == expected {
            self.scan()
        } else {
            Err(self.error_at_look_ahead(ErrorKind::MissingToken { expected }))
        }
    }

    /// 消费一个标识符，返回它的名字和位置。
    fn eat_ident(&mut self) -> CompileResult<(String, Span)> {
        let token = self.eat(TokenKind::Ident)?;
        Ok((token.lexeme.clone(), token.span))
    }

    /// 检查前瞻 Token 是否是指定的种类。
    fn check(&self, kind: TokenKind) -> bool {
        self.look_ahead.kind == kind
    }

    fn error_at_look_ahead(&self, kind: ErrorKind) -> CompileError {
        CompileError::new(kind, self.look_ahead.span)
    }
}

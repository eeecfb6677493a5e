use super::Parser;
use super::constants::{ConstantParser, TypeParser};
use super::statements::StatementParser;
use crate::lexer::{TokenKind, TokenSource};
use crate::reporter::{CompileError, CompileResult, ErrorKind};
use crate::semantic::{ObjectId, ParamMode};
use crate::utils::Span;
use tracing::trace;

/// `DeclarationParser` Trait 负责程序、块和各类声明。
pub(super) trait DeclarationParser {
    /// `program` IDENT `;` Block `.`
    fn compile_program(&mut self) -> CompileResult<ObjectId>;
    /// 常量段 → 类型段 → 变量段 → 子程序段 → 语句段。
    fn compile_block(&mut self) -> CompileResult<()>;
    /// 常量段中的一项：IDENT `=` Constant `;`
    fn compile_const_decl(&mut self) -> CompileResult<()>;
    /// 类型段中的一项：IDENT `=` Type `;`
    fn compile_type_decl(&mut self) -> CompileResult<()>;
    /// 变量段中的一项：IDENT {`,` IDENT} `:` Type `;`
    fn compile_var_decl(&mut self) -> CompileResult<()>;
    /// 只要前瞻是 `function`/`procedure` 就继续。
    fn compile_sub_decls(&mut self) -> CompileResult<()>;
    fn compile_func_decl(&mut self) -> CompileResult<()>;
    fn compile_proc_decl(&mut self) -> CompileResult<()>;
    /// 可选的 `(` [Param {`;` Param}] `)`
    fn compile_params(&mut self, owner: ObjectId) -> CompileResult<()>;
    /// [`var`] IDENT {`,` IDENT} `:` BasicType
    fn compile_param(&mut self, owner: ObjectId) -> CompileResult<()>;
    /// 一串以逗号分隔、在当前作用域里都是新名字的标识符。
    fn compile_fresh_idents(&mut self) -> CompileResult<Vec<(String, Span)>>;
}

impl<S: TokenSource> DeclarationParser for Parser<S> {
    fn compile_program(&mut self) -> CompileResult<ObjectId> {
        trace!("parsing a program");
        self.eat(TokenKind::Program)?;
        // 全局作用域此时还是空的，程序名不需要查重
        let (name, span) = self.eat_ident()?;

        let program = self.symtab.create_program(&name, span);
        self.symtab.declare(program);
        self.symtab.enter_block_of(program);

        self.eat(TokenKind::Semicolon)?;
        self.compile_block()?;
        self.eat(TokenKind::Period)?;

        self.symtab.exit_block();
        trace!("program parsed");
        Ok(program)
    }

    fn compile_block(&mut self) -> CompileResult<()> {
        // 每一段都是 do-while：关键字之后至少一项，之后只要前瞻还是标识符就继续。
        // 同一段的关键字可以连续出现多次（`var x: integer; var y: char;`），但段的顺序固定。
        while self.check(TokenKind::Const) {
            self.eat(TokenKind::Const)?;
            loop {
                self.compile_const_decl()?;
                if !self.check(TokenKind::Ident) {
                    break;
                }
            }
        }

        while self.check(TokenKind::Type) {
            self.eat(TokenKind::Type)?;
            loop {
                self.compile_type_decl()?;
                if !self.check(TokenKind::Ident) {
                    break;
                }
            }
        }

        while self.check(TokenKind::Var) {
            self.eat(TokenKind::Var)?;
            loop {
                self.compile_var_decl()?;
                if !self.check(TokenKind::Ident) {
                    break;
                }
            }
        }

        self.compile_sub_decls()?;

        self.eat(TokenKind::Begin)?;
        self.compile_statements()?;
        self.eat(TokenKind::End)?;
        Ok(())
    }

    fn compile_const_decl(&mut self) -> CompileResult<()> {
        let (name, span) = self.eat_ident()?;
        self.symtab.check_fresh_ident(&name, span)?;
        self.eat(TokenKind::Eq)?;

        let value = self.compile_constant()?;
        let constant = self.symtab.create_constant(&name, span, value);
        self.symtab.declare(constant);

        self.eat(TokenKind::Semicolon)?;
        Ok(())
    }

    fn compile_type_decl(&mut self) -> CompileResult<()> {
        let (name, span) = self.eat_ident()?;
        self.symtab.check_fresh_ident(&name, span)?;
        self.eat(TokenKind::Eq)?;

        let ty = self.compile_type()?;
        let type_obj = self.symtab.create_type(&name, span, ty);
        self.symtab.declare(type_obj);

        self.eat(TokenKind::Semicolon)?;
        Ok(())
    }

    fn compile_var_decl(&mut self) -> CompileResult<()> {
        let names = self.compile_fresh_idents()?;
        self.eat(TokenKind::Colon)?;

        let ty = self.compile_type()?;
        for (name, span) in names {
            let variable = self.symtab.create_variable(&name, span, ty.clone());
            self.symtab.declare(variable);
        }

        self.eat(TokenKind::Semicolon)?;
        Ok(())
    }

    fn compile_sub_decls(&mut self) -> CompileResult<()> {
        loop {
            match self.look_ahead.kind {
                TokenKind::Function => self.compile_func_decl()?,
                TokenKind::Procedure => self.compile_proc_decl()?,
                _ => return Ok(()),
            }
        }
    }

    fn compile_func_decl(&mut self) -> CompileResult<()> {
        trace!("parsing a function");
        self.eat(TokenKind::Function)?;
        let (name, span) = self.eat_ident()?;
        self.symtab.check_fresh_ident(&name, span)?;

        // 先声明进外层作用域，函数体里才能引用（和赋值）它自己
        let function = self.symtab.create_function(&name, span);
        self.symtab.declare(function);
        self.symtab.enter_block_of(function);

        self.compile_params(function)?;
        self.eat(TokenKind::Colon)?;
        let return_type = self.compile_basic_type()?;
        self.symtab.set_return_type(function, return_type);

        self.eat(TokenKind::Semicolon)?;
        self.compile_block()?;
        self.eat(TokenKind::Semicolon)?;

        self.symtab.exit_block();
        trace!(function = %name, "function parsed");
        Ok(())
    }

    fn compile_proc_decl(&mut self) -> CompileResult<()> {
        trace!("parsing a procedure");
        self.eat(TokenKind::Procedure)?;
        let (name, span) = self.eat_ident()?;
        self.symtab.check_fresh_ident(&name, span)?;

        let procedure = self.symtab.create_procedure(&name, span);
        self.symtab.declare(procedure);
        self.symtab.enter_block_of(procedure);

        self.compile_params(procedure)?;
        self.eat(TokenKind::Semicolon)?;
        self.compile_block()?;
        self.eat(TokenKind::Semicolon)?;

        self.symtab.exit_block();
        trace!(procedure = %name, "procedure parsed");
        Ok(())
    }

    fn compile_params(&mut self, owner: ObjectId) -> CompileResult<()> {
        if !self.check(TokenKind::LParen) {
            return Ok(());
        }
        self.eat(TokenKind::LParen)?;
        if !self.check(TokenKind::RParen) {
            self.compile_param(owner)?;
            while self.check(TokenKind::Semicolon) {
                self.eat(TokenKind::Semicolon)?;
                self.compile_param(owner)?;
            }
        }
        self.eat(TokenKind::RParen)?;
        Ok(())
    }

    fn compile_param(&mut self, owner: ObjectId) -> CompileResult<()> {
        // `var` 作用于它后面的整个标识符列表
        let mode = match self.look_ahead.kind {
            TokenKind::Var => {
                self.eat(TokenKind::Var)?;
                ParamMode::Reference
            }
            TokenKind::Ident => ParamMode::Value,
            _ => return Err(self.error_at_look_ahead(ErrorKind::InvalidParameter)),
        };

        let names = self.compile_fresh_idents()?;
        self.eat(TokenKind::Colon)?;
        let ty = self.compile_basic_type()?;

        for (name, span) in names {
            let param = self.symtab.create_parameter(&name, span, ty.clone(), mode, owner);
            self.symtab.declare(param);
        }
        Ok(())
    }

    fn compile_fresh_idents(&mut self) -> CompileResult<Vec<(String, Span)>> {
        let mut names: Vec<(String, Span)> = Vec::new();
        loop {
            let (name, span) = self.eat_ident()?;
            self.symtab.check_fresh_ident(&name, span)?;
            // 同一列表里的名字还没声明进作用域，要单独比较
            if names.iter().any(|(seen, _)| *seen == name) {
                return Err(CompileError::new(ErrorKind::DuplicateIdent { name }, span));
            }
            names.push((name, span));

            if !self.check(TokenKind::Comma) {
                return Ok(names);
            }
            self.eat(TokenKind::Comma)?;
        }
    }
}

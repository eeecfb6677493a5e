use super::Parser;
use crate::lexer::{TokenKind, TokenSource};
use crate::reporter::{CompileError, CompileResult, ErrorKind};
use crate::semantic::{ConstantValue, Type};

/// `ConstantParser` Trait 负责常量表达式的求值。
///
/// 求值是纯的：同样的 Token 总是得到同样的值，唯一的副作用是查符号表。
pub(super) trait ConstantParser {
    /// [`+` | `-`] UnsignedConstant
    fn compile_constant(&mut self) -> CompileResult<ConstantValue>;
    /// NUMBER | IDENT（已声明的常量，值被复制）| CHAR
    fn compile_unsigned_constant(&mut self) -> CompileResult<ConstantValue>;
}

/// `TypeParser` Trait 负责类型的解析与构造。
pub(super) trait TypeParser {
    /// `integer` | `char` | `array` `[` NUMBER `]` `of` Type | IDENT（已声明的类型）
    fn compile_type(&mut self) -> CompileResult<Type>;
    /// `integer` | `char`，用于参数和函数返回值。
    fn compile_basic_type(&mut self) -> CompileResult<Type>;
}

impl<S: TokenSource> ConstantParser for Parser<S> {
    fn compile_constant(&mut self) -> CompileResult<ConstantValue> {
        let negate = match self.look_ahead.kind {
            TokenKind::Plus => false,
            TokenKind::Minus => true,
            _ => return self.compile_unsigned_constant(),
        };
        let sign_span = self.scan()?.span;

        // 符号只能作用在整数上
        match self.compile_unsigned_constant()? {
            ConstantValue::Int(value) if negate => Ok(ConstantValue::Int(value.wrapping_neg())),
            ConstantValue::Int(value) => Ok(ConstantValue::Int(value)),
            ConstantValue::Char(_) => Err(CompileError::new(ErrorKind::InvalidConstant, sign_span)),
        }
    }

    fn compile_unsigned_constant(&mut self) -> CompileResult<ConstantValue> {
        match self.look_ahead.kind {
            TokenKind::Number => {
                let token = self.eat(TokenKind::Number)?;
                Ok(ConstantValue::Int(token.value.unwrap_or_default()))
            }
            TokenKind::Ident => {
                let (name, span) = self.eat_ident()?;
                self.symtab.check_declared_constant(&name, span)
            }
            TokenKind::CharLiteral => {
                let token = self.eat(TokenKind::CharLiteral)?;
                Ok(ConstantValue::Char(token.char_value().unwrap_or_default()))
            }
            _ => Err(self.error_at_look_ahead(ErrorKind::InvalidConstant)),
        }
    }
}

impl<S: TokenSource> TypeParser for Parser<S> {
    fn compile_type(&mut self) -> CompileResult<Type> {
        match self.look_ahead.kind {
            TokenKind::Integer => {
                self.eat(TokenKind::Integer)?;
                Ok(Type::Int)
            }
            TokenKind::Char => {
                self.eat(TokenKind::Char)?;
                Ok(Type::Char)
            }
            TokenKind::Array => {
                self.eat(TokenKind::Array)?;
                self.eat(TokenKind::LBracket)?;
                // 数组大小只能是数字字面量，不允许表达式
                let size = self
                    .eat(TokenKind::Number)?
                    .value
                    .and_then(|v| usize::try_from(v).ok())
                    .unwrap_or_default();
                self.eat(TokenKind::RBracket)?;
                self.eat(TokenKind::Of)?;
                let element = self.compile_type()?;
                Ok(Type::array(size, element))
            }
            TokenKind::Ident => {
                let (name, span) = self.eat_ident()?;
                self.symtab.check_declared_type(&name, span)
            }
            _ => Err(self.error_at_look_ahead(ErrorKind::InvalidType)),
        }
    }

    fn compile_basic_type(&mut self) -> CompileResult<Type> {
        match self.look_ahead.kind {
            TokenKind::Integer => {
                self.eat(TokenKind::Integer)?;
                Ok(Type::Int)
            }
            TokenKind::Char => {
                self.eat(TokenKind::Char)?;
                Ok(Type::Char)
            }
            _ => Err(self.error_at_look_ahead(ErrorKind::InvalidBasicType)),
        }
    }
}

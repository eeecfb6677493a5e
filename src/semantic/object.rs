use super::types::{ConstantValue, Type};
use crate::utils::Span;
use std::fmt;

/// 符号表对象的句柄（对象竞技场中的下标）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub(crate) usize);

/// 作用域的句柄（作用域竞技场中的下标）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(pub(crate) usize);

/// 参数的传递方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamMode {
    Value,
    Reference,
}

/// 一个被声明的名字：程序、常量、类型、变量、参数、函数或过程。
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    pub name: String,
    /// 声明处的位置；预声明的运行时例程没有源码位置，用默认值。
    pub span: Span,
    pub kind: ObjectKind,
}

/// 按种类区分的对象属性。每个种类只带自己的字段。
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectKind {
    Program {
        scope: ScopeId,
    },
    Constant(ConstantValue),
    Type(Type),
    Variable(Type),
    Parameter {
        ty: Type,
        mode: ParamMode,
        /// 声明这个参数的函数或过程。
        owner: ObjectId,
    },
    Function {
        params: Vec<ObjectId>,
        /// 只有在解析函数头的过程中才是 `None`。
        return_type: Option<Type>,
        scope: ScopeId,
    },
    Procedure {
        params: Vec<ObjectId>,
        scope: ScopeId,
    },
}

impl ObjectKind {
    /// 这个对象拥有的内部作用域（程序、函数、过程）。
    pub fn scope(&self) -> Option<ScopeId> {
        match self {
            ObjectKind::Program { scope }
            | ObjectKind::Function { scope, .. }
            | ObjectKind::Procedure { scope, .. } => Some(*scope),
            _ => None,
        }
    }

    pub fn params(&self) -> &[ObjectId] {
        match self {
            ObjectKind::Function { params, .. } | ObjectKind::Procedure { params, .. } => params,
            _ => &[],
        }
    }

    /// 变量和参数的类型。
    pub fn storage_type(&self) -> Option<&Type> {
        match self {
            ObjectKind::Variable(ty) | ObjectKind::Parameter { ty, .. } => Some(ty),
            _ => None,
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ObjectKind::Program { .. } => "program",
            ObjectKind::Constant(_) => "constant",
            ObjectKind::Type(_) => "type",
            ObjectKind::Variable(_) => "variable",
            ObjectKind::Parameter { .. } => "parameter",
            ObjectKind::Function { .. } => "function",
            ObjectKind::Procedure { .. } => "procedure",
        };
        write!(f, "{}", s)
    }
}

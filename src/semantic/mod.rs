//! 作用域、对象与类型模型。解析器在解析的同时调用这里的接口完成名字解析。

mod object;
pub mod printer;
mod symbol;
mod types;

pub use object::{Object, ObjectId, ObjectKind, ParamMode, ScopeId};
pub use symbol::{Scope, SymbolTable};
pub use types::{ConstantValue, Type};

#[cfg(test)]
mod test;

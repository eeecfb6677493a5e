//! 把解析完的声明树打印成缩进文本。

use super::object::{ObjectId, ObjectKind, ParamMode};
use super::symbol::SymbolTable;
use std::fmt::Write;

const INDENT: usize = 4;

/// 从程序对象开始，按声明顺序逐个打印对象；函数、过程会递归打印其作用域。
/// 还没有程序对象时返回空字符串。
pub fn render(table: &SymbolTable) -> String {
    let mut out = String::new();
    if let Some(program) = table.program() {
        write_object(&mut out, table, program, 0);
    }
    out
}

fn write_object(out: &mut String, table: &SymbolTable, id: ObjectId, depth: usize) {
    let object = table.object(id);
    let pad = " ".repeat(depth * INDENT);
    // 写入 String 不会失败
    let _ = match &object.kind {
        ObjectKind::Program { .. } => writeln!(out, "{pad}Program {}", object.name),
        ObjectKind::Constant(value) => writeln!(out, "{pad}Const {} = {}", object.name, value),
        ObjectKind::Type(ty) => writeln!(out, "{pad}Type {} = {}", object.name, ty),
        ObjectKind::Variable(ty) => writeln!(out, "{pad}Var {} : {}", object.name, ty),
        ObjectKind::Parameter { ty, mode, .. } => match mode {
            ParamMode::Value => writeln!(out, "{pad}Param {} : {}", object.name, ty),
            ParamMode::Reference => writeln!(out, "{pad}Param VAR {} : {}", object.name, ty),
        },
        ObjectKind::Function { return_type, .. } => match return_type {
            Some(ty) => writeln!(out, "{pad}Function {} : {}", object.name, ty),
            None => writeln!(out, "{pad}Function {}", object.name),
        },
        ObjectKind::Procedure { .. } => writeln!(out, "{pad}Procedure {}", object.name),
    };

    if let Some(scope) = object.kind.scope() {
        for &child in table.scope(scope).objects() {
            write_object(out, table, child, depth + 1);
        }
    }
}

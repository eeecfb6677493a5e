pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod reporter;
pub mod semantic;
pub mod utils;

use lexer::Lexer;
use parser::Parser;
use reporter::CompileResult;
use semantic::SymbolTable;
use tracing::debug;

/// 编译 KPL 源代码字符串。
///
/// 一次调用就是一次完整的编译会话：一个词法分析器、一个解析器、一张新的符号表。
/// 第一个错误就会中止会话。
///
/// # Returns
/// * `Ok(SymbolTable)` 包含解析完成的声明树（从 [`SymbolTable::program`] 开始遍历）。
/// * `Err(CompileError)` 中止编译的那个错误。
pub fn compile(source: &str) -> CompileResult<SymbolTable> {
    debug!(bytes = source.len(), "compile session started");

    let mut parser = Parser::new(Lexer::new(source))?;
    let program = parser.parse()?;

    debug!(program = %parser.symbols().object(program).name, "compile session finished");
    Ok(parser.into_symbols())
}

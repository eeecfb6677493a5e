use super::printer;
use super::*;
use crate::reporter::ErrorKind;
use crate::utils::Span;

fn at(column: usize) -> Span {
    Span::new(column - 1, column, 1, column)
}

/// 建一张带程序 P 的表，并停在程序作用域里。
fn table_with_program() -> (SymbolTable, ObjectId) {
    let mut table = SymbolTable::new();
    let program = table.create_program("P", at(9));
    table.declare(program);
    table.enter_block_of(program);
    (table, program)
}

#[test]
fn test_runtime_routines_are_predeclared() {
    let table = SymbolTable::new();
    let global = table.global_scope();
    let runtime = table.runtime_scope();

    for name in ["readc", "readi"] {
        assert!(matches!(
            table.find_in(runtime, name).map(|o| &o.kind),
            Some(ObjectKind::Function { .. })
        ));
    }
    for name in ["writei", "writec", "writeln"] {
        assert!(matches!(
            table.find_in(runtime, name).map(|o| &o.kind),
            Some(ObjectKind::Procedure { .. })
        ));
    }

    let writei = table.lookup("writei").unwrap();
    assert_eq!(table.object(writei).kind.params().len(), 1);
    let writeln = table.lookup("writeln").unwrap();
    assert!(table.object(writeln).kind.params().is_empty());

    // 参数放在例程自己的作用域里，不会漏到外面
    assert!(table.find_in(runtime, "i").is_none());
    // 全局作用域一开始是空的，外层才是运行时例程
    assert!(table.scope(global).objects().is_empty());
    assert_eq!(table.scope(global).outer(), Some(runtime));
    assert_eq!(table.current_scope(), global);
    assert!(table.program().is_none());
}

#[test]
fn test_lookup_walks_outward_to_nearest() {
    let (mut table, _) = table_with_program();
    let s3_x = table.create_variable("x", at(1), Type::Int);
    table.declare(s3_x);

    let q = table.create_procedure("Q", at(2));
    table.declare(q);
    table.enter_block_of(q);
    let s2_x = table.create_variable("x", at(3), Type::Char);
    table.declare(s2_x);

    let r = table.create_procedure("R", at(4));
    table.declare(r);
    table.enter_block_of(r);
    let s1_x = table.create_variable("x", at(5), Type::array(2, Type::Int));
    table.declare(s1_x);

    assert_eq!(table.lookup("x"), Some(s1_x));
    table.exit_block();
    assert_eq!(table.lookup("x"), Some(s2_x));
    table.exit_block();
    assert_eq!(table.lookup("x"), Some(s3_x));
    assert_eq!(table.lookup("nope"), None);
}

#[test]
fn test_exit_block_stops_at_global() {
    let mut table = SymbolTable::new();
    table.exit_block();
    assert_eq!(table.current_scope(), table.global_scope());
}

#[test]
fn test_program_may_reuse_runtime_name() {
    let mut table = SymbolTable::new();
    assert!(table.check_fresh_ident("writeln", at(9)).is_ok());
    let program = table.create_program("writeln", at(9));
    table.declare(program);

    // 程序名遮蔽了同名的运行时过程
    assert_eq!(table.lookup("writeln"), Some(program));
    let error = table.check_declared_procedure("writeln", at(1)).unwrap_err();
    assert_eq!(error.kind, ErrorKind::UndeclaredProcedure { name: "writeln".into() });
}

#[test]
fn test_fresh_ident_only_checks_current_scope() {
    let (mut table, _) = table_with_program();
    let x = table.create_variable("x", at(1), Type::Int);
    table.declare(x);

    let error = table.check_fresh_ident("x", at(7)).unwrap_err();
    assert_eq!(error.kind, ErrorKind::DuplicateIdent { name: "x".into() });
    assert_eq!(error.span, at(7));

    // 遮蔽外层的名字是允许的
    let f = table.create_function("F", at(2));
    table.declare(f);
    table.enter_block_of(f);
    assert!(table.check_fresh_ident("x", at(3)).is_ok());
    // 运行时例程也可以被遮蔽
    assert!(table.check_fresh_ident("writeln", at(3)).is_ok());
}

#[test]
fn test_kind_mismatch_reports_undeclared() {
    let (mut table, _) = table_with_program();
    let c = table.create_constant("c", at(1), ConstantValue::Int(3));
    table.declare(c);
    let t = table.create_type("T", at(2), Type::Char);
    table.declare(t);
    let v = table.create_variable("v", at(3), Type::Int);
    table.declare(v);

    assert_eq!(table.check_declared_constant("c", at(1)), Ok(ConstantValue::Int(3)));
    assert_eq!(table.check_declared_type("T", at(1)), Ok(Type::Char));
    assert_eq!(table.check_declared_variable("v", at(1)), Ok(v));

    let error = table.check_declared_type("v", at(4)).unwrap_err();
    assert_eq!(error.kind, ErrorKind::UndeclaredType { name: "v".into() });
    assert_eq!(error.span, at(4));

    let error = table.check_declared_constant("T", at(4)).unwrap_err();
    assert_eq!(error.kind, ErrorKind::UndeclaredConstant { name: "T".into() });

    let error = table.check_declared_variable("c", at(4)).unwrap_err();
    assert_eq!(error.kind, ErrorKind::UndeclaredVariable { name: "c".into() });

    let error = table.check_declared_function("writeln", at(4)).unwrap_err();
    assert_eq!(error.kind, ErrorKind::UndeclaredFunction { name: "writeln".into() });
    assert!(table.check_declared_function("readc", at(4)).is_ok());

    let error = table.check_declared_procedure("readc", at(4)).unwrap_err();
    assert_eq!(error.kind, ErrorKind::UndeclaredProcedure { name: "readc".into() });

    let error = table.check_declared_ident("missing", at(4)).unwrap_err();
    assert_eq!(error.kind, ErrorKind::UndeclaredIdent { name: "missing".into() });
}

#[test]
fn test_lvalue_accepts_only_current_function() {
    let (mut table, _) = table_with_program();
    let f = table.create_function("F", at(1));
    table.declare(f);
    let g = table.create_function("G", at(2));
    table.declare(g);

    // 在 F 的作用域里可以给 F 赋值，但不能给 G
    table.enter_block_of(f);
    let p = table.create_parameter("n", at(3), Type::Int, ParamMode::Reference, f);
    table.declare(p);
    assert_eq!(table.check_declared_lvalue("F", at(1)), Ok(f));
    assert_eq!(table.check_declared_lvalue("n", at(1)), Ok(p));
    let error = table.check_declared_lvalue("G", at(5)).unwrap_err();
    assert_eq!(error.kind, ErrorKind::UndeclaredIdent { name: "G".into() });
    table.exit_block();

    // 在程序作用域里两个都不行
    assert!(table.check_declared_lvalue("F", at(1)).is_err());
    assert!(table.check_declared_lvalue("P", at(1)).is_err());
    assert!(table.check_declared_lvalue("writei", at(1)).is_err());
}

#[test]
fn test_parameters_attach_to_owner_in_order() {
    let (mut table, _) = table_with_program();
    let q = table.create_procedure("Q", at(1));
    table.declare(q);
    table.enter_block_of(q);
    let a = table.create_parameter("a", at(2), Type::Int, ParamMode::Value, q);
    table.declare(a);
    let b = table.create_parameter("b", at(3), Type::Char, ParamMode::Reference, q);
    table.declare(b);

    assert_eq!(table.object(q).kind.params(), &[a, b]);
    assert_eq!(table.scope(table.current_scope()).owner(), Some(q));
    assert_eq!(table.object(b).kind.storage_type(), Some(&Type::Char));
}

#[test]
fn test_type_display() {
    assert_eq!(Type::Int.to_string(), "Int");
    assert_eq!(Type::array(10, Type::Char).to_string(), "Arr(10,Char)");
    assert_eq!(
        Type::array(3, Type::array(4, Type::Int)).to_string(),
        "Arr(3,Arr(4,Int))"
    );
    assert_eq!(ConstantValue::Int(-5).to_string(), "-5");
    assert_eq!(ConstantValue::Char('a').to_string(), "'a'");
}

#[test]
fn test_printer_renders_declaration_tree() {
    let (mut table, program) = table_with_program();
    let c = table.create_constant("c", at(1), ConstantValue::Int(5));
    table.declare(c);
    let t = table.create_type("T", at(2), Type::array(10, Type::Int));
    table.declare(t);
    let x = table.create_variable("x", at(3), Type::Int);
    table.declare(x);

    let f = table.create_function("f", at(4));
    table.declare(f);
    table.enter_block_of(f);
    let n = table.create_parameter("n", at(5), Type::Int, ParamMode::Value, f);
    table.declare(n);
    table.set_return_type(f, Type::Int);
    table.exit_block();

    let p = table.create_procedure("p", at(6));
    table.declare(p);
    table.enter_block_of(p);
    let r = table.create_parameter("r", at(7), Type::Char, ParamMode::Reference, p);
    table.declare(r);
    table.exit_block();
    table.exit_block();

    assert_eq!(table.program(), Some(program));
    let expected = "\
Program P
    Const c = 5
    Type T = Arr(10,Int)
    Var x : Int
    Function f : Int
        Param n : Int
    Procedure p
        Param VAR r : Char
";
    assert_eq!(printer::render(&table), expected);
}

#[test]
fn test_printer_without_program_is_empty() {
    assert_eq!(printer::render(&SymbolTable::new()), "");
}

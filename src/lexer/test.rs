// 导入父模块（也就是 lexer 模块）的所有内容
use super::*;

/// 一个辅助函数，用于简化测试。
/// 它只返回 Token 的种类（忽略词素和位置），因为大多数测试只关心种类和顺序。
fn lex_kinds(source: &str) -> Vec<TokenKind> {
    lex(source)
        .expect("lexing should succeed")
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

// --- 成功案例 (Happy Path) ---

#[test]
fn test_keywords_and_identifiers() {
    let source = "PROGRAM Example; Var count: Integer;";
    let expected = vec![
        TokenKind::Program,
        TokenKind::Ident,
        TokenKind::Semicolon,
        TokenKind::Var,
        TokenKind::Ident,
        TokenKind::Colon,
        TokenKind::Integer,
        TokenKind::Semicolon,
        TokenKind::Eof,
    ];
    assert_eq!(lex_kinds(source), expected);
}

#[test]
fn test_all_symbols() {
    let source = "+ - * / = <> != < <= > >= := : ; , . ( ) [ ] (. .)";
    let expected = vec![
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Times,
        TokenKind::Slash,
        TokenKind::Eq,
        TokenKind::Neq,
        TokenKind::Neq,
        TokenKind::Lt,
        TokenKind::Le,
        TokenKind::Gt,
        TokenKind::Ge,
        TokenKind::Assign,
        TokenKind::Colon,
        TokenKind::Semicolon,
        TokenKind::Comma,
        TokenKind::Period,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBracket,
        TokenKind::RBracket,
        TokenKind::LBracket,
        TokenKind::RBracket,
        TokenKind::Eof,
    ];
    assert_eq!(lex_kinds(source), expected);
}

#[test]
fn test_literals_carry_values() {
    let tokens = lex("42 'x' endless").unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].value, Some(42));
    assert_eq!(tokens[1].kind, TokenKind::CharLiteral);
    assert_eq!(tokens[1].char_value(), Some('x'));
    // 关键字前缀不会吞掉更长的标识符
    assert_eq!(tokens[2].kind, TokenKind::Ident);
    assert_eq!(tokens[2].lexeme, "endless");
}

#[test]
fn test_comments_and_whitespace_are_skipped() {
    let source = "begin (* 这是一个\n 块注释 *) end.";
    assert_eq!(
        lex_kinds(source),
        vec![TokenKind::Begin, TokenKind::End, TokenKind::Period, TokenKind::Eof]
    );
}

#[test]
fn test_positions_and_repeated_eof() {
    let mut lexer = Lexer::new("program\n  P");
    let first = lexer.next_token().unwrap();
    let second = lexer.next_token().unwrap();
    assert_eq!((first.span.line, first.span.column), (1, 1));
    assert_eq!((second.span.line, second.span.column), (2, 3));
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
    assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Eof);
}

// --- 失败案例 (Sad Path) ---

#[test]
fn test_unrecognized_character() {
    let error = lex("x := #;").unwrap_err();
    assert_eq!(error.kind, ErrorKind::InvalidSymbol);
    assert_eq!(error.span.column, 6);
}

#[test]
fn test_unterminated_comment() {
    let error = lex("begin (* never closed").unwrap_err();
    assert_eq!(error.kind, ErrorKind::UnterminatedComment);
}

#[test]
fn test_bad_char_literal() {
    let error = lex("c := 'ab'").unwrap_err();
    assert_eq!(error.kind, ErrorKind::InvalidCharConstant);
}

#[test]
fn test_number_too_large() {
    let error = lex("99999999999999999999").unwrap_err();
    assert_eq!(error.kind, ErrorKind::NumberTooLarge);
}

// ABOUTME: Reader converting the parse tree into values, never evaluating

use crate::parser::{NodeKind, SyntaxNode};
use crate::value::Value;

/// Converts a parse-tree node into a value. Number lexemes outside the
/// 64-bit range become `invalid number` error values; comments disappear.
pub fn read(node: &SyntaxNode) -> Value {
    match node.kind {
        NodeKind::Number => read_number(&node.contents),
        NodeKind::Symbol => Value::Symbol(node.contents.clone()),
        NodeKind::Str => read_string(&node.contents),
        NodeKind::Root | NodeKind::SExpr => Value::SExpr(read_children(&node.children)),
        NodeKind::QExpr => Value::QExpr(read_children(&node.children)),
        NodeKind::Comment => Value::empty_sexpr(),
    }
}

fn read_children(children: &[SyntaxNode]) -> Vec<Value> {
    children
        .iter()
        .filter(|child| child.kind != NodeKind::Comment)
        .map(read)
        .collect()
}

fn read_number(lexeme: &str) -> Value {
    match lexeme.parse::<i64>() {
        Ok(n) => Value::Number(n),
        Err(_) => Value::error("invalid number"),
    }
}

/// Strip the surrounding quotes and resolve the C-style escapes. An unknown
/// escape stands for the escaped character itself.
fn read_string(lexeme: &str) -> Value {
    let inner = &lexeme[1..lexeme.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some(other) => out.push(other),
            None => {}
        }
    }

    Value::Str(out)
}

// ABOUTME: Parser turning source text into a syntax tree using nom combinators

use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, digit1},
    combinator::{opt, recognize},
    IResult, Parser,
};

use crate::error::ParseError;

/// Characters allowed in a symbol besides ASCII letters and digits.
const SYMBOL_CHARS: &str = "_+-*/\\=<>!&";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Number,
    Symbol,
    Str,
    SExpr,
    QExpr,
    Comment,
}

/// One node of the parse tree: a kind, the raw lexeme for leaves (string
/// lexemes keep their surrounding quotes), and children for groupings.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    pub contents: String,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    fn leaf(kind: NodeKind, contents: &str) -> Self {
        SyntaxNode {
            kind,
            contents: contents.to_string(),
            children: Vec::new(),
        }
    }

    fn branch(kind: NodeKind, children: Vec<SyntaxNode>) -> Self {
        SyntaxNode {
            kind,
            contents: String::new(),
            children,
        }
    }
}

/// Parse a whole source text into a root node holding every top-level
/// expression (and comment) in order.
pub fn parse(input: &str) -> Result<SyntaxNode, ParseError> {
    let mut children = Vec::new();
    let mut remaining = input.trim_start();

    while !remaining.is_empty() {
        match parse_item(remaining) {
            Ok((rest, node)) => {
                children.push(node);
                remaining = rest.trim_start();
            }
            Err(_) => {
                let snippet: String = remaining.chars().take(20).collect();
                return Err(ParseError::UnexpectedInput(snippet));
            }
        }
    }

    Ok(SyntaxNode::branch(NodeKind::Root, children))
}

fn parse_item(input: &str) -> IResult<&str, SyntaxNode> {
    alt((
        parse_comment,
        parse_string,
        parse_number,
        parse_sexpr,
        parse_qexpr,
        parse_symbol,
    ))
    .parse(input)
}

/// Parse a line comment: `;` up to the end of the line.
fn parse_comment(input: &str) -> IResult<&str, SyntaxNode> {
    let (input, _) = char(';')(input)?;
    let (input, text) = take_while(|c| c != '\n')(input)?;
    Ok((input, SyntaxNode::leaf(NodeKind::Comment, text.trim())))
}

/// Parse an integer literal: `-?[0-9]+`. The lexeme is kept as written; the
/// reader decides whether it fits the numeric range.
fn parse_number(input: &str) -> IResult<&str, SyntaxNode> {
    recognize((opt(char('-')), digit1))
        .map(|lexeme| SyntaxNode::leaf(NodeKind::Number, lexeme))
        .parse(input)
}

/// Parse a symbol: letters, digits and the operator characters.
fn parse_symbol(input: &str) -> IResult<&str, SyntaxNode> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || SYMBOL_CHARS.contains(c))
        .map(|lexeme| SyntaxNode::leaf(NodeKind::Symbol, lexeme))
        .parse(input)
}

/// Parse a string literal. The lexeme keeps both quotes and the raw escape
/// sequences; unescaping happens in the reader.
fn parse_string(input: &str) -> IResult<&str, SyntaxNode> {
    let (rest, _) = char('"')(input)?;

    let mut escaped = false;
    for (i, c) in rest.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '"' => {
                let lexeme = &input[..i + 2];
                return Ok((&rest[i + 1..], SyntaxNode::leaf(NodeKind::Str, lexeme)));
            }
            _ => {}
        }
    }

    // Unterminated literal
    Err(nom::Err::Failure(nom::error::Error::new(
        input,
        nom::error::ErrorKind::Char,
    )))
}

fn parse_sexpr(input: &str) -> IResult<&str, SyntaxNode> {
    parse_grouped(input, '(', ')', NodeKind::SExpr)
}

fn parse_qexpr(input: &str) -> IResult<&str, SyntaxNode> {
    parse_grouped(input, '{', '}', NodeKind::QExpr)
}

fn parse_grouped(input: &str, open: char, close: char, kind: NodeKind) -> IResult<&str, SyntaxNode> {
    let (mut remaining, _) = char(open)(input)?;
    let mut children = Vec::new();

    loop {
        remaining = remaining.trim_start();

        if let Ok((rest, _)) = char::<_, nom::error::Error<_>>(close)(remaining) {
            return Ok((rest, SyntaxNode::branch(kind, children)));
        }

        let (rest, node) = parse_item(remaining)?;
        children.push(node);
        remaining = rest;
    }
}

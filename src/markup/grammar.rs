//! Parser implementation using chumsky

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::markup::ast::{Attribute, Document, Node};
use crate::markup::lexer::Token;

/// Parse markup source into a document tree
pub fn parse(input: &str) -> Result<Document, Vec<crate::ParseError>> {
    let len = input.len();

    // Create a logos lexer and convert to token stream
    let token_iter = crate::markup::lexer::lex(input).map(|(tok, span)| (tok, span.into()));

    // Turn the token iterator into a stream that chumsky can use
    let token_stream = Stream::from_iter(token_iter)
        // Split (Token, SimpleSpan) into token and span parts
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    document_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| errs.into_iter().map(|e| e.into()).collect())
}

/// Helper to extract span range from chumsky's MapExtra
fn span_range(e: &impl chumsky::span::Span<Offset = usize>) -> std::ops::Range<usize> {
    e.start()..e.end()
}

fn document_parser<'a, I>() -> impl Parser<'a, I, Document, extra::Err<Rich<'a, Token>>>
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    let identifier = select! {
        Token::Ident(s) => s,
    };

    // Attribute values: quoted strings (unit expressions, ids, data payloads),
    // bare numbers (cell counts) or bare words (booleans)
    let attribute_value = select! {
        Token::String(s) => s,
        Token::Number(n) => n,
        Token::Ident(w) => w,
    };

    let attribute = identifier
        .clone()
        .then_ignore(just(Token::Colon))
        .then(attribute_value)
        .map_with(|(name, value), e| Attribute {
            name,
            value,
            span: span_range(&e.span()),
        });

    let attribute_block = attribute
        .separated_by(just(Token::Comma))
        .allow_trailing()
        .collect::<Vec<_>>()
        .delimited_by(just(Token::BracketOpen), just(Token::BracketClose));

    // Element: kind [attributes] { children }, both blocks optional
    let node = recursive(|node| {
        identifier
            .then(attribute_block.or_not())
            .then(
                node.repeated()
                    .collect::<Vec<_>>()
                    .delimited_by(just(Token::BraceOpen), just(Token::BraceClose))
                    .or_not(),
            )
            .map_with(|((kind, attributes), children), e| Node {
                kind,
                attributes: attributes.unwrap_or_default(),
                children: children.unwrap_or_default(),
                span: span_range(&e.span()),
            })
            .boxed()
    });

    // A document is a single root element
    node.then_ignore(end()).map(|root| Document { root })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leaf_element() {
        let doc = parse(r#"grid { control [id: "ok"] }"#).expect("Should parse");
        assert_eq!(doc.root.kind, "grid");
        assert_eq!(doc.root.children.len(), 1);
        assert_eq!(doc.root.children[0].raw_attribute("id"), Some("ok"));
    }

    #[test]
    fn test_parse_nested_containers() {
        let input = r#"
            grid {
                table [width-cell: 4, height-cell: 1] {
                    control [id: "a"]
                    control [id: "b"]
                }
                control [id: "c"]
            }
        "#;
        let doc = parse(input).expect("Should parse");
        assert_eq!(doc.root.children.len(), 2);
        assert_eq!(doc.root.children[0].kind, "table");
        assert_eq!(doc.root.children[0].children.len(), 2);
        assert_eq!(doc.root.children[0].raw_attribute("width-cell"), Some("4"));
    }

    #[test]
    fn test_parse_element_without_blocks() {
        let doc = parse("grid { control }").expect("Should parse");
        assert!(doc.root.children[0].attributes.is_empty());
        assert!(doc.root.children[0].children.is_empty());
    }

    #[test]
    fn test_parse_trailing_comma() {
        let doc = parse(r#"grid { control [id: "ok",] }"#).expect("Should parse");
        assert_eq!(doc.root.children[0].attributes.len(), 1);
    }

    #[test]
    fn test_parse_rejects_trailing_garbage() {
        assert!(parse("grid { } control").is_err());
    }

    #[test]
    fn test_parse_rejects_unclosed_block() {
        assert!(parse("grid { control").is_err());
    }
}

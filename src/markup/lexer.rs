//! Lexer for the uiwarp markup language using logos

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum Token {
    // Delimiters
    #[token("{")]
    BraceOpen,
    #[token("}")]
    BraceClose,
    #[token("[")]
    BracketOpen,
    #[token("]")]
    BracketClose,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,

    // Element and attribute names. Hyphens are allowed in the middle so that
    // attribute names like `width-cell` lex as a single token.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*", |lex| lex.slice().to_string())]
    Ident(String),

    #[regex(r#""([^"\\]|\\.)*""#, |lex| {
        let s = lex.slice();
        s[1..s.len()-1].to_string()
    })]
    String(String),

    // Attribute values stay raw text; typed reads happen at the
    // AttributeSource boundary, like pugixml's as_int/as_bool family.
    #[regex(r"-?[0-9]+(\.[0-9]+)?", |lex| lex.slice().to_string())]
    Number(String),

    // Comments (skip)
    #[regex(r"//[^\n]*", logos::skip)]
    LineComment,

    #[regex(r"/\*([^*]|\*[^/])*\*/", logos::skip)]
    BlockComment,
}

/// Lex input string into tokens with spans
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_names() {
        let tokens: Vec<_> = lex("grid table control").map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                Token::Ident("grid".to_string()),
                Token::Ident("table".to_string()),
                Token::Ident("control".to_string()),
            ]
        );
    }

    #[test]
    fn test_hyphenated_attribute_names() {
        let tokens: Vec<_> = lex("width-cell height-cell").map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                Token::Ident("width-cell".to_string()),
                Token::Ident("height-cell".to_string()),
            ]
        );
    }

    #[test]
    fn test_strings_keep_unit_expressions_raw() {
        let tokens: Vec<_> = lex(r#""100%-20px" "1c""#).map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                Token::String("100%-20px".to_string()),
                Token::String("1c".to_string()),
            ]
        );
    }

    #[test]
    fn test_numbers_stay_raw() {
        let tokens: Vec<_> = lex("4 -2 3.5").map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                Token::Number("4".to_string()),
                Token::Number("-2".to_string()),
                Token::Number("3.5".to_string()),
            ]
        );
    }

    #[test]
    fn test_delimiters() {
        let tokens: Vec<_> = lex("{ } [ ] , :").map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                Token::BraceOpen,
                Token::BraceClose,
                Token::BracketOpen,
                Token::BracketClose,
                Token::Comma,
                Token::Colon,
            ]
        );
    }

    #[test]
    fn test_comments_skipped() {
        let tokens: Vec<_> = lex("grid // trailing\ncontrol").map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                Token::Ident("grid".to_string()),
                Token::Ident("control".to_string()),
            ]
        );
    }

    #[test]
    fn test_block_comments_skipped() {
        let tokens: Vec<_> = lex("grid /* note */ control").map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                Token::Ident("grid".to_string()),
                Token::Ident("control".to_string()),
            ]
        );
    }

    #[test]
    fn test_complete_element() {
        let input = r#"control [id: "ok", x: "1c", width-cell: 4]"#;
        let tokens: Vec<_> = lex(input).map(|(t, _)| t).collect();
        assert_eq!(
            tokens,
            vec![
                Token::Ident("control".to_string()),
                Token::BracketOpen,
                Token::Ident("id".to_string()),
                Token::Colon,
                Token::String("ok".to_string()),
                Token::Comma,
                Token::Ident("x".to_string()),
                Token::Colon,
                Token::String("1c".to_string()),
                Token::Comma,
                Token::Ident("width-cell".to_string()),
                Token::Colon,
                Token::Number("4".to_string()),
                Token::BracketClose,
            ]
        );
    }
}

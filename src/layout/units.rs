//! Length expression resolver
//!
//! A length is a sum of signed terms, each a magnitude with a unit suffix:
//! `px` is an absolute pixel count, `%` a share of the parent extent on the
//! same axis, `c` a share of the parent extent divided by the table's cell
//! count. `100%-20px` reads "full extent minus a 20 pixel margin". A total
//! that comes out negative is offset by the parent extent, anchoring the
//! value to the far edge: `-10px` under a 500 wide parent resolves to 490.

use logos::Logos;

use super::error::LayoutError;

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t]+")]
enum UnitToken {
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,

    #[regex(r"[0-9]+px", |lex| strip_suffix(lex.slice(), 2))]
    Px(i32),
    #[regex(r"[0-9]+%", |lex| strip_suffix(lex.slice(), 1))]
    Percent(i32),
    #[regex(r"[0-9]+c", |lex| strip_suffix(lex.slice(), 1))]
    Cell(i32),
}

fn strip_suffix(slice: &str, suffix_len: usize) -> Option<i32> {
    slice[..slice.len() - suffix_len].parse().ok()
}

/// Resolve a length expression to pixels against one axis of the parent.
///
/// `parent_extent` is the parent's resolved width or height, matching the
/// axis this expression is used on. `cell_count` carries the table's
/// `width-cell`/`height-cell` value and is `None` under non-table parents;
/// a `c` term under `None` is a contract violation in the document.
///
/// The empty expression resolves to zero, which is how omitted `x`/`y`
/// attributes fall back to the parent origin.
pub fn resolve(
    expr: &str,
    parent_extent: i32,
    cell_count: Option<i32>,
) -> Result<i32, LayoutError> {
    let mut total: i64 = 0;
    let mut sign: i64 = 1;
    let mut last_was_term = false;
    let mut consumed_any = false;

    let mut lexer = UnitToken::lexer(expr);
    while let Some(token) = lexer.next() {
        let token = token.map_err(|()| LayoutError::malformed(expr))?;
        consumed_any = true;

        let magnitude: i64 = match token {
            UnitToken::Plus => {
                sign = 1;
                last_was_term = false;
                continue;
            }
            UnitToken::Minus => {
                sign = -1;
                last_was_term = false;
                continue;
            }
            UnitToken::Px(n) => i64::from(n),
            UnitToken::Percent(n) => i64::from(parent_extent) * i64::from(n) / 100,
            UnitToken::Cell(n) => match cell_count {
                None => return Err(LayoutError::cell_outside_table(expr)),
                Some(count) if count <= 0 => {
                    return Err(LayoutError::InvalidCellCount {
                        expr: expr.to_string(),
                        count,
                    })
                }
                Some(count) => i64::from(n) * i64::from(parent_extent) / i64::from(count),
            },
        };

        // Two adjacent terms with no sign between them
        if last_was_term {
            return Err(LayoutError::malformed(expr));
        }
        total += sign * magnitude;
        sign = 1;
        last_was_term = true;
    }

    // Dangling trailing sign, e.g. "10px+"
    if consumed_any && !last_was_term {
        return Err(LayoutError::malformed(expr));
    }

    // Negative totals anchor to the far edge of the parent
    if total < 0 {
        total += i64::from(parent_extent);
    }
    Ok(total as i32)
}

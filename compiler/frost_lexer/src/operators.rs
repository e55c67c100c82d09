//! Operator and punctuation lookahead table.
//!
//! Each leading byte maps to up to five kinds reachable by lookahead:
//! the bare single-byte kind, the doubled kind (`++`), the doubled kind
//! with a trailing `=` (`<<=`), the `=`-suffixed kind (`+=`), and the
//! `>`-suffixed kind (`->`, `=>`). Maximal munch lives in the scanner's
//! disambiguation order; this module is pure table.
//!
//! `//` is absent on purpose: a doubled slash starts a line comment, which
//! the scanner handles before consulting [`OperatorEntry::doubled`].

use crate::token::TokenKind;

/// Lookahead slots for one leading operator byte.
#[derive(Clone, Copy, Debug)]
pub(crate) struct OperatorEntry {
    /// The bare single-byte kind.
    pub(crate) single: TokenKind,
    /// Kind when the byte is doubled (`++`, `**`, `<<`, ...).
    pub(crate) doubled: Option<TokenKind>,
    /// Kind when the doubled byte is followed by `=` (`**=`, `<<=`, `>>=`).
    pub(crate) doubled_assign: Option<TokenKind>,
    /// Kind when the byte is followed by `=` (`+=`, `!=`, `<=`, ...).
    pub(crate) assign: Option<TokenKind>,
    /// Kind when the byte is followed by `>` (`->`, `=>`).
    pub(crate) arrow: Option<TokenKind>,
}

/// Entry with only the single-byte kind (plain punctuation).
const fn single(kind: TokenKind) -> OperatorEntry {
    OperatorEntry {
        single: kind,
        doubled: None,
        doubled_assign: None,
        assign: None,
        arrow: None,
    }
}

/// Table lookup for the byte heading an operator or punctuation token.
///
/// Returns `None` for bytes that never start an operator; those either
/// extend an identifier or are reported as invalid characters.
pub(crate) const fn lookup(byte: u8) -> Option<OperatorEntry> {
    use TokenKind::{
        And, Assign, BitAnd, BitAndAssign, BitLeftShift, BitLeftShiftAssign, BitNot, BitOr,
        BitOrAssign, BitRightShift, BitRightShiftAssign, BitXor, BitXorAssign, Colon, Comma,
        Decrement, Divide, DivideAssign, Dot, Equal, Exponent, ExponentAssign, Greater,
        GreaterEqual, Increment, LeftBrace, LeftBracket, LeftParen, Less, LessEqual, Minus,
        MinusAssign, Modulo, ModuloAssign, Multiply, MultiplyAssign, Not, NotEqual, Or, Plus,
        PlusAssign, Question, RightBrace, RightBracket, RightParen, RightwardsArrow,
        RightwardsDoubleArrow, Semicolon,
    };

    let entry = match byte {
        b'+' => OperatorEntry {
            single: Plus,
            doubled: Some(Increment),
            doubled_assign: None,
            assign: Some(PlusAssign),
            arrow: None,
        },
        b'-' => OperatorEntry {
            single: Minus,
            doubled: Some(Decrement),
            doubled_assign: None,
            assign: Some(MinusAssign),
            arrow: Some(RightwardsArrow),
        },
        b'*' => OperatorEntry {
            single: Multiply,
            doubled: Some(Exponent),
            doubled_assign: Some(ExponentAssign),
            assign: Some(MultiplyAssign),
            arrow: None,
        },
        b'/' => OperatorEntry {
            single: Divide,
            doubled: None, // `//` is a comment, handled by the scanner
            doubled_assign: None,
            assign: Some(DivideAssign),
            arrow: None,
        },
        b'%' => OperatorEntry {
            single: Modulo,
            doubled: None,
            doubled_assign: None,
            assign: Some(ModuloAssign),
            arrow: None,
        },
        b'=' => OperatorEntry {
            single: Assign,
            doubled: Some(Equal),
            doubled_assign: None,
            assign: None,
            arrow: Some(RightwardsDoubleArrow),
        },
        b'!' => OperatorEntry {
            single: Not,
            doubled: None,
            doubled_assign: None,
            assign: Some(NotEqual),
            arrow: None,
        },
        b'>' => OperatorEntry {
            single: Greater,
            doubled: Some(BitRightShift),
            doubled_assign: Some(BitRightShiftAssign),
            assign: Some(GreaterEqual),
            arrow: None,
        },
        b'<' => OperatorEntry {
            single: Less,
            doubled: Some(BitLeftShift),
            doubled_assign: Some(BitLeftShiftAssign),
            assign: Some(LessEqual),
            arrow: None,
        },
        b'&' => OperatorEntry {
            single: BitAnd,
            doubled: Some(And),
            doubled_assign: None,
            assign: Some(BitAndAssign),
            arrow: None,
        },
        b'|' => OperatorEntry {
            single: BitOr,
            doubled: Some(Or),
            doubled_assign: None,
            assign: Some(BitOrAssign),
            arrow: None,
        },
        b'^' => OperatorEntry {
            single: BitXor,
            doubled: None,
            doubled_assign: None,
            assign: Some(BitXorAssign),
            arrow: None,
        },
        b'~' => single(BitNot),
        b'{' => single(LeftBrace),
        b'}' => single(RightBrace),
        b'(' => single(LeftParen),
        b')' => single(RightParen),
        b'[' => single(LeftBracket),
        b']' => single(RightBracket),
        b'.' => single(Dot),
        b',' => single(Comma),
        b';' => single(Semicolon),
        b':' => single(Colon),
        b'?' => single(Question),
        _ => return None,
    };
    Some(entry)
}

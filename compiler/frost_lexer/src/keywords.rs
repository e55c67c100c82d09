//! Keyword resolution.
//!
//! Identifiers are matched against the reserved-word table only once their
//! full extent is known; on a hit the token's kind is promoted from
//! [`TokenKind::Identifier`] to the keyword kind. The table is a
//! compile-time constant — no process-wide mutable state.
//!
//! Lookup is length-bucketed: every keyword is 2–8 bytes, so the
//! identifier's length rejects most candidates before any string compare.

use crate::token::TokenKind;

/// Look up a reserved keyword by its exact text.
///
/// Returns `None` for regular identifiers. Case-sensitive: `self` and
/// `Self` are distinct keywords, `Function` is an identifier.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    // Guard: all keywords are 2-8 bytes
    if !(2..=8).contains(&text.len()) {
        return None;
    }

    match text.len() {
        2 => match text {
            "as" => Some(TokenKind::AsKeyword),
            "do" => Some(TokenKind::DoKeyword),
            "if" => Some(TokenKind::IfKeyword),
            "is" => Some(TokenKind::IsKeyword),
            _ => None,
        },
        3 => match text {
            "any" => Some(TokenKind::AnyKeyword),
            "for" => Some(TokenKind::ForKeyword),
            "let" => Some(TokenKind::LetKeyword),
            "mut" => Some(TokenKind::MutKeyword),
            "new" => Some(TokenKind::NewKeyword),
            "pub" => Some(TokenKind::PubKeyword),
            "try" => Some(TokenKind::TryKeyword),
            "var" => Some(TokenKind::VarKeyword),
            _ => None,
        },
        4 => match text {
            "Self" => Some(TokenKind::UpperSelfKeyword),
            "bool" => Some(TokenKind::BoolKeyword),
            "case" => Some(TokenKind::CaseKeyword),
            "char" => Some(TokenKind::CharKeyword),
            "else" => Some(TokenKind::ElseKeyword),
            "enum" => Some(TokenKind::EnumKeyword),
            "impl" => Some(TokenKind::ImplKeyword),
            "int8" => Some(TokenKind::Int8Keyword),
            "null" => Some(TokenKind::NullKeyword),
            "priv" => Some(TokenKind::PrivKeyword),
            "self" => Some(TokenKind::LowerSelfKeyword),
            "true" => Some(TokenKind::TrueKeyword),
            "void" => Some(TokenKind::VoidKeyword),
            _ => None,
        },
        5 => match text {
            "break" => Some(TokenKind::BreakKeyword),
            "catch" => Some(TokenKind::CatchKeyword),
            "char8" => Some(TokenKind::Char8Keyword),
            "false" => Some(TokenKind::FalseKeyword),
            "int16" => Some(TokenKind::Int16Keyword),
            "int32" => Some(TokenKind::Int32Keyword),
            "int64" => Some(TokenKind::Int64Keyword),
            "throw" => Some(TokenKind::ThrowKeyword),
            "trait" => Some(TokenKind::TraitKeyword),
            "uint8" => Some(TokenKind::UInt8Keyword),
            "while" => Some(TokenKind::WhileKeyword),
            _ => None,
        },
        6 => match text {
            "import" => Some(TokenKind::ImportKeyword),
            "int128" => Some(TokenKind::Int128Keyword),
            "intptr" => Some(TokenKind::IntPtrKeyword),
            "module" => Some(TokenKind::ModuleKeyword),
            "number" => Some(TokenKind::NumberKeyword),
            "object" => Some(TokenKind::ObjectKeyword),
            "return" => Some(TokenKind::ReturnKeyword),
            "sizeof" => Some(TokenKind::SizeOfKeyword),
            "string" => Some(TokenKind::StringKeyword),
            "struct" => Some(TokenKind::StructKeyword),
            "switch" => Some(TokenKind::SwitchKeyword),
            "typeof" => Some(TokenKind::TypeOfKeyword),
            "uint16" => Some(TokenKind::UInt16Keyword),
            "uint32" => Some(TokenKind::UInt32Keyword),
            "uint64" => Some(TokenKind::UInt64Keyword),
            _ => None,
        },
        7 => match text {
            "finally" => Some(TokenKind::FinallyKeyword),
            "float32" => Some(TokenKind::Float32Keyword),
            "float64" => Some(TokenKind::Float64Keyword),
            "string8" => Some(TokenKind::String8Keyword),
            "uint128" => Some(TokenKind::UInt128Keyword),
            "uintptr" => Some(TokenKind::UIntPtrKeyword),
            _ => None,
        },
        _ => match text {
            "continue" => Some(TokenKind::ContinueKeyword),
            "function" => Some(TokenKind::FunctionKeyword),
            "operator" => Some(TokenKind::OperatorKeyword),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests;

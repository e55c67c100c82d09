use pretty_assertions::assert_eq;

use super::lookup;
use crate::token::TokenKind;

/// Every keyword with its kind, in table order.
const ALL_KEYWORDS: &[(&str, TokenKind)] = &[
    ("module", TokenKind::ModuleKeyword),
    ("import", TokenKind::ImportKeyword),
    ("int8", TokenKind::Int8Keyword),
    ("int16", TokenKind::Int16Keyword),
    ("int32", TokenKind::Int32Keyword),
    ("int64", TokenKind::Int64Keyword),
    ("int128", TokenKind::Int128Keyword),
    ("intptr", TokenKind::IntPtrKeyword),
    ("uint8", TokenKind::UInt8Keyword),
    ("uint16", TokenKind::UInt16Keyword),
    ("uint32", TokenKind::UInt32Keyword),
    ("uint64", TokenKind::UInt64Keyword),
    ("uint128", TokenKind::UInt128Keyword),
    ("uintptr", TokenKind::UIntPtrKeyword),
    ("float32", TokenKind::Float32Keyword),
    ("float64", TokenKind::Float64Keyword),
    ("number", TokenKind::NumberKeyword),
    ("void", TokenKind::VoidKeyword),
    ("bool", TokenKind::BoolKeyword),
    ("true", TokenKind::TrueKeyword),
    ("false", TokenKind::FalseKeyword),
    ("char", TokenKind::CharKeyword),
    ("char8", TokenKind::Char8Keyword),
    ("string", TokenKind::StringKeyword),
    ("string8", TokenKind::String8Keyword),
    ("null", TokenKind::NullKeyword),
    ("any", TokenKind::AnyKeyword),
    ("object", TokenKind::ObjectKeyword),
    ("enum", TokenKind::EnumKeyword),
    ("struct", TokenKind::StructKeyword),
    ("self", TokenKind::LowerSelfKeyword),
    ("Self", TokenKind::UpperSelfKeyword),
    ("trait", TokenKind::TraitKeyword),
    ("impl", TokenKind::ImplKeyword),
    ("pub", TokenKind::PubKeyword),
    ("priv", TokenKind::PrivKeyword),
    ("is", TokenKind::IsKeyword),
    ("as", TokenKind::AsKeyword),
    ("function", TokenKind::FunctionKeyword),
    ("return", TokenKind::ReturnKeyword),
    ("operator", TokenKind::OperatorKeyword),
    ("if", TokenKind::IfKeyword),
    ("else", TokenKind::ElseKeyword),
    ("switch", TokenKind::SwitchKeyword),
    ("case", TokenKind::CaseKeyword),
    ("for", TokenKind::ForKeyword),
    ("while", TokenKind::WhileKeyword),
    ("do", TokenKind::DoKeyword),
    ("break", TokenKind::BreakKeyword),
    ("continue", TokenKind::ContinueKeyword),
    ("var", TokenKind::VarKeyword),
    ("let", TokenKind::LetKeyword),
    ("mut", TokenKind::MutKeyword),
    ("new", TokenKind::NewKeyword),
    ("throw", TokenKind::ThrowKeyword),
    ("try", TokenKind::TryKeyword),
    ("catch", TokenKind::CatchKeyword),
    ("finally", TokenKind::FinallyKeyword),
    ("sizeof", TokenKind::SizeOfKeyword),
    ("typeof", TokenKind::TypeOfKeyword),
];

#[test]
fn every_keyword_resolves() {
    for &(text, kind) in ALL_KEYWORDS {
        assert_eq!(lookup(text), Some(kind), "keyword {text:?}");
    }
}

#[test]
fn identifiers_do_not_resolve() {
    for text in ["x", "counter", "function2", "int", "uint", "modul", "Function"] {
        assert_eq!(lookup(text), None, "identifier {text:?}");
    }
}

#[test]
fn case_sensitive_self_pair() {
    assert_eq!(lookup("self"), Some(TokenKind::LowerSelfKeyword));
    assert_eq!(lookup("Self"), Some(TokenKind::UpperSelfKeyword));
    assert_eq!(lookup("SELF"), None);
}

#[test]
fn length_guard_rejects_out_of_range() {
    assert_eq!(lookup(""), None);
    assert_eq!(lookup("a"), None);
    assert_eq!(lookup("continues!"), None);
}

#[test]
fn keyword_with_suffix_is_identifier() {
    assert_eq!(lookup("function2"), None);
    assert_eq!(lookup("whiles"), None);
}

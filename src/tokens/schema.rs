use std::{
    ops::{Deref, DerefMut},
    sync::LazyLock,
};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A design-token document: fixed categories mapping short keys to leaf
/// values. Loaded once, never mutated; absent keys stay `None`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct TokenDocument {
    #[serde(default)]
    pub color: ColorTokens,
    #[serde(default)]
    pub spacing: SpacingTokens,
    #[serde(default)]
    pub radius: RadiusTokens,
    /// Categories this crate does not project. Kept as-is so callers can
    /// still inspect them.
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

macro_rules! generate_builtin_token_documents {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub const $name: LazyLockTokenDocument = LazyLockTokenDocument::new(|| TokenDocument::from_string(include_str!($path)).unwrap());
        )+
    };
}

pub struct LazyLockTokenDocument(LazyLock<TokenDocument>);

impl LazyLockTokenDocument {
    #[inline(always)]
    const fn new(f: fn() -> TokenDocument) -> Self {
        Self(LazyLock::new(f))
    }
}

impl Deref for LazyLockTokenDocument {
    type Target = TokenDocument;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for LazyLockTokenDocument {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl AsRef<TokenDocument> for LazyLockTokenDocument {
    fn as_ref(&self) -> &TokenDocument {
        &self.0
    }
}

impl TokenDocument {
    generate_builtin_token_documents!(["../../tokens/default.json", DEFAULT]);

    /// Parses a token document from a JSON string.
    pub fn from_string<S: AsRef<str>>(str: S) -> Result<TokenDocument, serde_json::Error> {
        serde_json::from_str(str.as_ref())
    }
}

/// A single token leaf value, copied through untouched. Colors are strings;
/// spacing and radii may be strings or bare numbers.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum TokenValue {
    String(String),
    Number(f64),
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<f64> for TokenValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ColorTokens {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<TokenValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<TokenValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<TokenValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface: Option<TokenValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TokenValue>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct SpacingTokens {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xs: Option<TokenValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sm: Option<TokenValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md: Option<TokenValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lg: Option<TokenValue>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct RadiusTokens {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sm: Option<TokenValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md: Option<TokenValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xl: Option<TokenValue>,
}

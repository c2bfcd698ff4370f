use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::deserializers::de_string_or_non_empty_list;
use super::kinds::{ColorSlotKind, RadiusSlotKind, SpacingSlotKind};
use crate::tokens::{TokenDocument, TokenValue};

/// Glob the external build pipeline scans for class names. Fixed; not
/// populated from the token document.
pub const DEFAULT_CONTENT_GLOB: &str = "./templates/**/*.html";

/// The theme configuration handed to the external build pipeline.
///
/// Only the `theme.extend` slots are populated from a token document;
/// `content` and `plugins` are fixed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ThemeConfig {
    #[serde(deserialize_with = "de_string_or_non_empty_list")]
    pub content: SmallVec<[String; 1]>,
    pub theme: ThemeSection,
    pub plugins: Vec<serde_json::Value>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            content: SmallVec::from_buf([DEFAULT_CONTENT_GLOB.to_owned()]),
            theme: ThemeSection::default(),
            plugins: Vec::new(),
        }
    }
}

impl ThemeConfig {
    /// Projects a token document into a theme configuration.
    ///
    /// A pure copy over the fixed slot enumeration: each populated slot
    /// holds exactly the corresponding token leaf value, and slots whose
    /// source token is absent stay unset (and are omitted when serialized).
    pub fn from_tokens(tokens: &TokenDocument) -> ThemeConfig {
        ThemeConfig {
            theme: ThemeSection {
                extend: ThemeExtend {
                    colors: ThemeColors {
                        primary: ColorSlotKind::Primary.resolve(tokens).cloned(),
                        secondary: ColorSlotKind::Secondary.resolve(tokens).cloned(),
                        background: ColorSlotKind::Background.resolve(tokens).cloned(),
                        surface: ColorSlotKind::Surface.resolve(tokens).cloned(),
                        text: ColorSlotKind::Text.resolve(tokens).cloned(),
                    },
                    spacing: ThemeSpacing {
                        xs: SpacingSlotKind::Xs.resolve(tokens).cloned(),
                        sm: SpacingSlotKind::Sm.resolve(tokens).cloned(),
                        md: SpacingSlotKind::Md.resolve(tokens).cloned(),
                        lg: SpacingSlotKind::Lg.resolve(tokens).cloned(),
                    },
                    border_radius: ThemeBorderRadius {
                        sm: RadiusSlotKind::Sm.resolve(tokens).cloned(),
                        md: RadiusSlotKind::Md.resolve(tokens).cloned(),
                        xl: RadiusSlotKind::Xl.resolve(tokens).cloned(),
                    },
                },
            },
            ..ThemeConfig::default()
        }
    }
}

impl From<&TokenDocument> for ThemeConfig {
    fn from(tokens: &TokenDocument) -> Self {
        Self::from_tokens(tokens)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ThemeSection {
    pub extend: ThemeExtend,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ThemeExtend {
    pub colors: ThemeColors,
    pub spacing: ThemeSpacing,
    #[serde(rename = "borderRadius")]
    pub border_radius: ThemeBorderRadius,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ThemeColors {
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
pub struct ThemeSpacing {
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
pub struct ThemeBorderRadius {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sm: Option<TokenValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md: Option<TokenValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xl: Option<TokenValue>,
}

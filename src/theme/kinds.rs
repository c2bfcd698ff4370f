#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;

use crate::tokens::{TokenDocument, TokenValue};

/// Color slots of the theme configuration.
///
/// Each variant names one fixed (source token, target slot) pair of the
/// projection; `resolve()` looks the source token up in a document.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub const fn source_path(&self) -> &'static str)]
#[func(pub const fn target_slot(&self) -> &'static str)]
pub enum ColorSlotKind {
    /// Main brand color.
    #[assoc(source_path = "color.primary")]
    #[assoc(target_slot = "colors.primary")]
    Primary,
    /// Supporting brand color.
    #[assoc(source_path = "color.secondary")]
    #[assoc(target_slot = "colors.secondary")]
    Secondary,
    /// Page background.
    #[assoc(source_path = "color.background")]
    #[assoc(target_slot = "colors.background")]
    Background,
    /// Elevated surfaces such as cards.
    #[assoc(source_path = "color.surface")]
    #[assoc(target_slot = "colors.surface")]
    Surface,
    /// Body text.
    #[assoc(source_path = "color.text")]
    #[assoc(target_slot = "colors.text")]
    Text,
}

impl ColorSlotKind {
    pub fn resolve<'a>(&self, tokens: &'a TokenDocument) -> Option<&'a TokenValue> {
        match self {
            Self::Primary => tokens.color.primary.as_ref(),
            Self::Secondary => tokens.color.secondary.as_ref(),
            Self::Background => tokens.color.background.as_ref(),
            Self::Surface => tokens.color.surface.as_ref(),
            Self::Text => tokens.color.text.as_ref(),
        }
    }
}

pub const COLOR_SLOTS: [ColorSlotKind; 5] = [
    ColorSlotKind::Primary,
    ColorSlotKind::Secondary,
    ColorSlotKind::Background,
    ColorSlotKind::Surface,
    ColorSlotKind::Text,
];

/// Spacing slots of the theme configuration.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub const fn source_path(&self) -> &'static str)]
#[func(pub const fn target_slot(&self) -> &'static str)]
pub enum SpacingSlotKind {
    /// Extra small spacing step.
    #[assoc(source_path = "spacing.xs")]
    #[assoc(target_slot = "spacing.xs")]
    Xs,
    /// Small spacing step.
    #[assoc(source_path = "spacing.sm")]
    #[assoc(target_slot = "spacing.sm")]
    Sm,
    /// Medium spacing step.
    #[assoc(source_path = "spacing.md")]
    #[assoc(target_slot = "spacing.md")]
    Md,
    /// Large spacing step.
    #[assoc(source_path = "spacing.lg")]
    #[assoc(target_slot = "spacing.lg")]
    Lg,
}

impl SpacingSlotKind {
    pub fn resolve<'a>(&self, tokens: &'a TokenDocument) -> Option<&'a TokenValue> {
        match self {
            Self::Xs => tokens.spacing.xs.as_ref(),
            Self::Sm => tokens.spacing.sm.as_ref(),
            Self::Md => tokens.spacing.md.as_ref(),
            Self::Lg => tokens.spacing.lg.as_ref(),
        }
    }
}

pub const SPACING_SLOTS: [SpacingSlotKind; 4] = [
    SpacingSlotKind::Xs,
    SpacingSlotKind::Sm,
    SpacingSlotKind::Md,
    SpacingSlotKind::Lg,
];

/// Border radius slots of the theme configuration.
///
/// The source category is `radius`; the target slot lives under the
/// framework's `borderRadius` extension field.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub const fn source_path(&self) -> &'static str)]
#[func(pub const fn target_slot(&self) -> &'static str)]
pub enum RadiusSlotKind {
    /// Small corner radius.
    #[assoc(source_path = "radius.sm")]
    #[assoc(target_slot = "borderRadius.sm")]
    Sm,
    /// Medium corner radius.
    #[assoc(source_path = "radius.md")]
    #[assoc(target_slot = "borderRadius.md")]
    Md,
    /// Extra large corner radius.
    #[assoc(source_path = "radius.xl")]
    #[assoc(target_slot = "borderRadius.xl")]
    Xl,
}

impl RadiusSlotKind {
    pub fn resolve<'a>(&self, tokens: &'a TokenDocument) -> Option<&'a TokenValue> {
        match self {
            Self::Sm => tokens.radius.sm.as_ref(),
            Self::Md => tokens.radius.md.as_ref(),
            Self::Xl => tokens.radius.xl.as_ref(),
        }
    }
}

pub const RADIUS_SLOTS: [RadiusSlotKind; 3] =
    [RadiusSlotKind::Sm, RadiusSlotKind::Md, RadiusSlotKind::Xl];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_slot_kind_resolves_every_variant() {
        let tokens = &TokenDocument::DEFAULT;

        for slot in COLOR_SLOTS {
            assert!(
                slot.resolve(tokens).is_some(),
                "Builtin document should resolve {}",
                slot.source_path()
            );
        }
    }

    #[test]
    fn test_spacing_slot_kind_resolves_every_variant() {
        let tokens = &TokenDocument::DEFAULT;

        for slot in SPACING_SLOTS {
            assert!(
                slot.resolve(tokens).is_some(),
                "Builtin document should resolve {}",
                slot.source_path()
            );
        }
    }

    #[test]
    fn test_radius_slot_kind_resolves_every_variant() {
        let tokens = &TokenDocument::DEFAULT;

        for slot in RADIUS_SLOTS {
            assert!(
                slot.resolve(tokens).is_some(),
                "Builtin document should resolve {}",
                slot.source_path()
            );
        }
    }

    #[test]
    fn test_source_paths_follow_the_token_categories() {
        assert_eq!(ColorSlotKind::Primary.source_path(), "color.primary");
        assert_eq!(SpacingSlotKind::Xs.source_path(), "spacing.xs");
        assert_eq!(RadiusSlotKind::Xl.source_path(), "radius.xl");
    }

    #[test]
    fn test_radius_slots_target_border_radius() {
        for slot in RADIUS_SLOTS {
            assert!(
                slot.target_slot().starts_with("borderRadius."),
                "Radius slots should land under borderRadius, got: {}",
                slot.target_slot()
            );
        }
    }

    #[test]
    fn test_resolve_is_none_for_absent_tokens() {
        let tokens = TokenDocument::default();

        assert_eq!(ColorSlotKind::Secondary.resolve(&tokens), None);
        assert_eq!(SpacingSlotKind::Lg.resolve(&tokens), None);
        assert_eq!(RadiusSlotKind::Md.resolve(&tokens), None);
    }
}

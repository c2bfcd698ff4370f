use std::{fs, path::Path};

use anyhow::Context;
use log::debug;

use crate::{
    theme::{COLOR_SLOTS, RADIUS_SLOTS, SPACING_SLOTS, ThemeConfig},
    tokens::TokenDocument,
};

/// Loads a token document, projects it, and writes the resulting theme
/// configuration as pretty-printed JSON.
///
/// Load failures are fatal; absent tokens are not. Slots whose source
/// token is missing are logged at debug level and omitted from the output.
pub fn emit_theme_config<P: AsRef<Path>, Q: AsRef<Path>>(
    tokens_path: P,
    out_path: Q,
) -> anyhow::Result<()> {
    let tokens = TokenDocument::load(tokens_path.as_ref())?;

    for slot in COLOR_SLOTS {
        if slot.resolve(&tokens).is_none() {
            debug!(
                "token \"{}\" absent, leaving \"{}\" unset",
                slot.source_path(),
                slot.target_slot()
            );
        }
    }
    for slot in SPACING_SLOTS {
        if slot.resolve(&tokens).is_none() {
            debug!(
                "token \"{}\" absent, leaving \"{}\" unset",
                slot.source_path(),
                slot.target_slot()
            );
        }
    }
    for slot in RADIUS_SLOTS {
        if slot.resolve(&tokens).is_none() {
            debug!(
                "token \"{}\" absent, leaving \"{}\" unset",
                slot.source_path(),
                slot.target_slot()
            );
        }
    }

    let config = ThemeConfig::from_tokens(&tokens);
    let json =
        serde_json::to_string_pretty(&config).context("could not serialize theme configuration")?;

    let out_path = out_path.as_ref();
    fs::write(out_path, json)
        .with_context(|| format!("could not write theme configuration to \"{}\"", out_path.display()))?;

    debug!("wrote theme configuration to \"{}\"", out_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_emit_writes_the_projected_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r##"{{"color": {{"primary": "#111827"}}, "spacing": {{"xs": "4px"}}, "radius": {{"sm": "2px"}}}}"##
        )
        .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("theme.config.json");

        emit_theme_config(file.path(), &out).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(written["theme"]["extend"]["colors"]["primary"], "#111827");
        assert_eq!(written["theme"]["extend"]["spacing"]["xs"], "4px");
        assert_eq!(written["theme"]["extend"]["borderRadius"]["sm"], "2px");
    }

    #[test]
    fn test_emit_fails_without_writing_when_tokens_are_missing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("theme.config.json");

        let result = emit_theme_config(dir.path().join("design-tokens.json"), &out);

        assert!(result.is_err());
        assert!(!out.exists(), "No output should be written on a load failure");
    }

    #[test]
    fn test_emit_fails_without_writing_on_malformed_tokens() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("theme.config.json");

        let result = emit_theme_config(file.path(), &out);

        assert!(result.is_err());
        assert!(!out.exists(), "No output should be written on a parse failure");
    }
}

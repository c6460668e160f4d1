//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The file controls
//! how the page looks and moves; what it says lives in `content.toml` (see
//! [`crate::content`]). Both files are sparse overlays on stock defaults and
//! share the merge logic defined here.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! lang = "es"               # <html lang>
//! avatar = "avatar.png"     # Profile image, relative to the source directory
//! assets_dir = "assets"     # Copied verbatim to the output root
//!
//! [colors]
//! background = "#000000"
//! surface = "#0a0a0a"       # Project tiles, social chips
//! border = "#262626"
//! text = "#e5e5e5"
//! text_muted = "#a3a3a3"    # Periods, descriptions, section titles
//! text_strong = "#ffffff"
//! accent = "#581c87"        # Card gradient tint
//! button_bg = "#ffffff"
//! button_text = "#000000"
//!
//! [animation]
//! sweep_duration_ms = 900   # Highlight sweep across a card
//! sweep_easing = "ease-in-out"
//! reveal_stagger_ms = 80    # Delay between cards on first paint
//! reveal_duration_ms = 350
//! hover_lift_px = 6
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Appearance configuration loaded from `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Document-level settings.
    pub site: SiteSettings,
    /// Dark color scheme.
    pub colors: ColorScheme,
    /// Timings for the sweep, reveal and hover motions.
    pub animation: AnimationConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.lang.trim().is_empty() {
            return Err(ConfigError::Validation("site.lang must not be empty".into()));
        }
        if Path::new(&self.site.avatar).is_absolute() {
            return Err(ConfigError::Validation(
                "site.avatar must be relative to the source directory".into(),
            ));
        }
        if Path::new(&self.site.avatar)
            .components()
            .any(|c| c == Component::ParentDir)
        {
            return Err(ConfigError::Validation(
                "site.avatar must not contain '..'".into(),
            ));
        }
        if self.animation.sweep_duration_ms == 0 {
            return Err(ConfigError::Validation(
                "animation.sweep_duration_ms must be greater than zero".into(),
            ));
        }
        if self.animation.sweep_easing.trim().is_empty() {
            return Err(ConfigError::Validation(
                "animation.sweep_easing must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSettings {
    /// Value of `<html lang>`.
    pub lang: String,
    /// Profile image path, relative to the source directory.
    pub avatar: String,
    /// Directory (relative to source) copied verbatim into the output root.
    pub assets_dir: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            lang: "es".to_string(),
            avatar: "avatar.png".to_string(),
            assets_dir: "assets".to_string(),
        }
    }
}

/// The page's single (dark) color scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    /// Fill of inner tiles (project tiles, social chips).
    pub surface: String,
    pub border: String,
    pub text: String,
    /// Secondary text: periods, places, descriptions, section titles.
    pub text_muted: String,
    /// Headings and titles.
    pub text_strong: String,
    /// Tint at the end of the card gradient.
    pub accent: String,
    /// Primary buttons (CTA, contact links).
    pub button_bg: String,
    pub button_text: String,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            background: "#000000".to_string(),
            surface: "#0a0a0a".to_string(),
            border: "#262626".to_string(),
            text: "#e5e5e5".to_string(),
            text_muted: "#a3a3a3".to_string(),
            text_strong: "#ffffff".to_string(),
            accent: "#581c87".to_string(),
            button_bg: "#ffffff".to_string(),
            button_text: "#000000".to_string(),
        }
    }
}

/// Motion settings shared by the stylesheet and the page runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    /// Duration of the highlight sweep across a card.
    pub sweep_duration_ms: u32,
    /// CSS easing function for the sweep.
    pub sweep_easing: String,
    /// Delay between consecutive cards when the grid first appears.
    pub reveal_stagger_ms: u32,
    /// Duration of each card's fade-and-rise on first paint.
    pub reveal_duration_ms: u32,
    /// How far a card lifts on hover.
    pub hover_lift_px: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            sweep_duration_ms: 900,
            sweep_easing: "ease-in-out".to_string(),
            reveal_stagger_ms: 80,
            reveal_duration_ms: 350,
            hover_lift_px: 6,
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("stock config does not serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely, arrays included.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `file_name` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_toml(dir: &Path, file_name: &str) -> Result<Option<toml::Value>, ConfigError> {
    let path = dir.join(file_name);
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_toml(root, "config.toml")?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Folio Configuration
# ===================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.
#
# Page text (name, projects, socials...) lives in content.toml instead;
# run `folio gen-content` to print it.

# ---------------------------------------------------------------------------
# Document
# ---------------------------------------------------------------------------
[site]
# Value of the <html lang> attribute.
lang = "es"

# Profile image, relative to the source directory. Copied next to index.html.
avatar = "avatar.png"

# Directory copied verbatim into the output root (favicon, fonts...).
assets_dir = "assets"

# ---------------------------------------------------------------------------
# Colors (the page has a single dark scheme)
# ---------------------------------------------------------------------------
[colors]
background = "#000000"
surface = "#0a0a0a"       # Project tiles, social chips
border = "#262626"
text = "#e5e5e5"
text_muted = "#a3a3a3"    # Periods, descriptions, section titles
text_strong = "#ffffff"   # Headings
accent = "#581c87"        # Card gradient tint
button_bg = "#ffffff"     # "Contactame" and contact links
button_text = "#000000"

# ---------------------------------------------------------------------------
# Motion
# ---------------------------------------------------------------------------
[animation]
# Highlight sweep played on a card when the nav targets its section.
sweep_duration_ms = 900
sweep_easing = "ease-in-out"

# Cards fade and rise in one after another on first paint.
reveal_stagger_ms = 80
reveal_duration_ms = 350

# Hover lift distance for cards.
hover_lift_px = 6
"##
}

/// Generate CSS custom properties from the color scheme.
pub fn generate_color_css(colors: &ColorScheme) -> String {
    format!(
        r#":root {{
    --color-bg: {background};
    --color-surface: {surface};
    --color-border: {border};
    --color-text: {text};
    --color-text-muted: {text_muted};
    --color-text-strong: {text_strong};
    --color-accent: {accent};
    --color-button-bg: {button_bg};
    --color-button-text: {button_text};
}}"#,
        background = colors.background,
        surface = colors.surface,
        border = colors.border,
        text = colors.text,
        text_muted = colors.text_muted,
        text_strong = colors.text_strong,
        accent = colors.accent,
        button_bg = colors.button_bg,
        button_text = colors.button_text,
    )
}

/// Generate CSS custom properties from the animation config.
pub fn generate_animation_css(animation: &AnimationConfig) -> String {
    format!(
        r#":root {{
    --sweep-duration: {sweep}ms;
    --sweep-easing: {easing};
    --reveal-stagger: {stagger}ms;
    --reveal-duration: {reveal}ms;
    --hover-lift: -{lift}px;
}}"#,
        sweep = animation.sweep_duration_ms,
        easing = animation.sweep_easing,
        stagger = animation.reveal_stagger_ms,
        reveal = animation.reveal_duration_ms,
        lift = animation.hover_lift_px,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = SiteConfig::default();
        assert_eq!(config.site.lang, "es");
        assert_eq!(config.site.avatar, "avatar.png");
        assert_eq!(config.colors.background, "#000000");
        assert_eq!(config.animation.sweep_duration_ms, 900);
        assert_eq!(config.animation.sweep_easing, "ease-in-out");
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[colors]
accent = "#1e3a8a"
"##;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.colors.accent, "#1e3a8a");
        // Defaults preserved
        assert_eq!(config.colors.background, "#000000");
        assert_eq!(config.animation.sweep_duration_ms, 900);
    }

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
[site]
lang = "en"

[animation]
sweep_duration_ms = 1200
"#,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site.lang, "en");
        assert_eq!(config.animation.sweep_duration_ms, 1200);
        assert_eq!(config.animation.sweep_easing, "ease-in-out");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "not valid toml [[[").unwrap();
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unknown_key_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str(
            r#"
[animation]
sweep_duraton_ms = 900
"#,
        );
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str("[theme]\ngap = 1\n");
        assert!(result.is_err());
    }

    #[test]
    fn validate_zero_sweep_duration() {
        let mut config = SiteConfig::default();
        config.animation.sweep_duration_ms = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("sweep_duration_ms"));
    }

    #[test]
    fn validate_absolute_avatar() {
        let mut config = SiteConfig::default();
        config.site.avatar = "/etc/avatar.png".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_avatar_escaping_source() {
        for avatar in ["../../x.png", "img/../../x.png", ".."] {
            let mut config = SiteConfig::default();
            config.site.avatar = avatar.to_string();
            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains("'..'"), "{avatar}");
        }
    }

    #[test]
    fn validate_nested_avatar_ok() {
        let mut config = SiteConfig::default();
        config.site.avatar = "img/./me.webp".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_empty_lang() {
        let mut config = SiteConfig::default();
        config.site.lang = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "[animation]\nsweep_easing = \"\"\n",
        )
        .unwrap();
        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_table_merge() {
        let base: toml::Value = toml::from_str(
            r#"
[animation]
sweep_duration_ms = 900
hover_lift_px = 6
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str("[animation]\nhover_lift_px = 2\n").unwrap();
        let merged = merge_toml(base, overlay);
        let animation = merged.get("animation").unwrap();
        assert_eq!(animation.get("hover_lift_px").unwrap().as_integer(), Some(2));
        assert_eq!(
            animation.get("sweep_duration_ms").unwrap().as_integer(),
            Some(900)
        );
    }

    #[test]
    fn merge_toml_arrays_replace_wholesale() {
        let base: toml::Value = toml::from_str(r#"techs = ["Rust", "Go", "C"]"#).unwrap();
        let overlay: toml::Value = toml::from_str(r#"techs = ["Zig"]"#).unwrap();
        let merged = merge_toml(base, overlay);
        let techs = merged.get("techs").unwrap().as_array().unwrap();
        assert_eq!(techs.len(), 1);
        assert_eq!(techs[0].as_str(), Some("Zig"));
    }

    #[test]
    fn merge_toml_preserves_base_keys() {
        let base: toml::Value = toml::from_str("a = 1\nb = 2\n").unwrap();
        let overlay: toml::Value = toml::from_str("a = 10").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("a").unwrap().as_integer(), Some(10));
        assert_eq!(merged.get("b").unwrap().as_integer(), Some(2));
    }

    #[test]
    fn load_raw_toml_returns_none_when_no_file() {
        let tmp = TempDir::new().unwrap();
        assert!(load_raw_toml(tmp.path(), "config.toml").unwrap().is_none());
    }

    #[test]
    fn resolve_config_with_overlay() {
        let base = stock_defaults_value().unwrap();
        let overlay: toml::Value = toml::from_str("[colors]\ntext = \"#fafafa\"\n").unwrap();
        let config = resolve_config(base, Some(overlay)).unwrap();
        assert_eq!(config.colors.text, "#fafafa");
        assert_eq!(config.colors.border, "#262626");
    }

    // =========================================================================
    // stock_config_toml / CSS generation
    // =========================================================================

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn stock_config_toml_contains_all_sections() {
        let content = stock_config_toml();
        assert!(content.contains("[site]"));
        assert!(content.contains("[colors]"));
        assert!(content.contains("[animation]"));
    }

    #[test]
    fn generate_color_css_uses_config_colors() {
        let mut colors = ColorScheme::default();
        colors.accent = "#123456".to_string();
        let css = generate_color_css(&colors);
        assert!(css.contains("--color-accent: #123456"));
        assert!(css.contains("--color-bg: #000000"));
        assert!(css.contains("--color-button-text: #000000"));
    }

    #[test]
    fn generate_animation_css_variables() {
        let css = generate_animation_css(&AnimationConfig::default());
        assert!(css.contains("--sweep-duration: 900ms"));
        assert!(css.contains("--sweep-easing: ease-in-out"));
        assert!(css.contains("--reveal-stagger: 80ms"));
        assert!(css.contains("--hover-lift: -6px"));
    }
}

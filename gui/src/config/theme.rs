// Theme palettes, surfaced to the markup as CSS custom properties.

#[derive(Debug, Clone, PartialEq)]
pub struct ThemePalette {
    pub background: String,
    pub surface: String,
    pub foreground: String,
    pub muted: String,
    pub primary: String,
    pub accent: String,
    pub danger: String,
}

impl ThemePalette {
    pub fn default_light() -> Self {
        Self {
            background: "#f3f4f6".to_string(),
            surface: "#ffffff".to_string(),
            foreground: "#111827".to_string(),
            muted: "#6b7280".to_string(),
            primary: "#2563eb".to_string(),
            accent: "#0ea5e9".to_string(),
            danger: "#dc2626".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#111827".to_string(),
            surface: "#1f2937".to_string(),
            foreground: "#e5e7eb".to_string(),
            muted: "#9ca3af".to_string(),
            primary: "#3b82f6".to_string(),
            accent: "#38bdf8".to_string(),
            danger: "#f87171".to_string(),
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::default_dark(),
            _ => Self::default_light(),
        }
    }

    /// Inline style string for the app root, consumed by the stylesheet's
    /// var() references.
    pub fn css_vars(&self) -> String {
        format!(
            "--background: {}; --surface: {}; --foreground: {}; --muted: {}; \
             --primary: {}; --accent: {}; --danger: {};",
            self.background,
            self.surface,
            self.foreground,
            self.muted,
            self.primary,
            self.accent,
            self.danger,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_falls_back_to_light() {
        assert_eq!(ThemePalette::from_name("dark"), ThemePalette::default_dark());
        assert_eq!(ThemePalette::from_name("nope"), ThemePalette::default_light());
    }

    #[test]
    fn test_css_vars_contains_every_slot() {
        let vars = ThemePalette::default_light().css_vars();
        for slot in ["--background", "--surface", "--foreground", "--muted", "--primary", "--accent", "--danger"] {
            assert!(vars.contains(slot), "missing {}", slot);
        }
    }
}

//! Settings that change how trees are rendered, but never what is rendered.

/// Environment variable holding the number of spaces per depth level.
pub const INDENT_ENV: &str = "STYIO_AST_INDENT";
/// Environment variable that turns on coloured kind names (`1` or `true`).
pub const COLOR_ENV: &str = "STYIO_AST_COLOR";
/// Widest indent [`RenderConfig::from_env`] accepts.
pub const MAX_INDENT_WIDTH: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Spaces of padding added per level of depth.
    pub indent_width: usize,
    /// Wraps every kind name in ANSI escapes.
    pub colorful: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig { indent_width: 2, colorful: false }
    }
}

impl RenderConfig {
    /// Reads [`INDENT_ENV`] and [`COLOR_ENV`]. Unset or unparseable values keep their defaults.
    pub fn from_env() -> RenderConfig {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](RenderConfig::from_env), reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> RenderConfig {
        let mut config = RenderConfig::default();

        if let Some(raw) = lookup(INDENT_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(width) if width <= MAX_INDENT_WIDTH => config.indent_width = width,
                Ok(width) => tracing::warn!(width, max = MAX_INDENT_WIDTH, "ignoring {INDENT_ENV}"),
                Err(err) => tracing::warn!(%raw, %err, "ignoring {INDENT_ENV}"),
            }
        }

        if let Some(raw) = lookup(COLOR_ENV) {
            match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" => config.colorful = true,
                "0" | "false" | "" => config.colorful = false,
                _ => tracing::warn!(%raw, "ignoring {COLOR_ENV}"),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key: &str| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| v.to_string())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(RenderConfig::from_lookup(|_| None), RenderConfig::default());
    }

    #[test]
    fn reads_indent_and_color() {
        let config = RenderConfig::from_lookup(lookup_from(&[(INDENT_ENV, "4"), (COLOR_ENV, "TRUE")]));

        assert_eq!(config, RenderConfig { indent_width: 4, colorful: true });
    }

    #[test]
    fn bad_values_fall_back() {
        let config = RenderConfig::from_lookup(lookup_from(&[(INDENT_ENV, "wide"), (COLOR_ENV, "maybe")]));

        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn oversized_indent_falls_back() {
        let huge = usize::MAX.to_string();
        let config = RenderConfig::from_lookup(lookup_from(&[(INDENT_ENV, huge.as_str())]));
        assert_eq!(config.indent_width, 2);

        let widest = MAX_INDENT_WIDTH.to_string();
        let config = RenderConfig::from_lookup(lookup_from(&[(INDENT_ENV, widest.as_str())]));
        assert_eq!(config.indent_width, MAX_INDENT_WIDTH);
    }
}

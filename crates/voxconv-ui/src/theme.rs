//! Theme configuration for `Voxconv`.
//!
//! Plain light page; the status text color is the only state-driven style.

use voxconv_core::StatusTone;

/// Color palette for the application.
pub mod colors {
    /// Status message colors.
    pub mod status {
        /// Progress text.
        pub const NEUTRAL: &str = "#333";
        /// Failure text.
        pub const ALERT: &str = "red";
    }

    /// Surface colors.
    pub mod surface {
        /// Page background.
        pub const PAGE: &str = "#f4f4f5";
        /// Card background.
        pub const CARD: &str = "#ffffff";
        /// Card border.
        pub const BORDER: &str = "#e4e4e7";
    }

    /// Accent used by the submit button and download link.
    pub const ACCENT: &str = "#7c3aed";
}

/// Color for a status message of the given tone.
pub const fn status_color(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Neutral => colors::status::NEUTRAL,
        StatusTone::Alert => colors::status::ALERT,
    }
}

/// CSS custom properties consumed by `styles/main.css`.
pub fn generate_css_variables() -> String {
    format!(
        ":root {{\n  --color-page: {};\n  --color-card: {};\n  --color-border: {};\n  --color-accent: {};\n}}",
        colors::surface::PAGE,
        colors::surface::CARD,
        colors::surface::BORDER,
        colors::ACCENT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_colors() {
        assert_eq!(status_color(StatusTone::Neutral), "#333");
        assert_eq!(status_color(StatusTone::Alert), "red");
    }

    #[test]
    fn test_css_variables_include_accent() {
        let css = generate_css_variables();
        assert!(css.starts_with(":root {"));
        assert!(css.contains("--color-accent: #7c3aed;"));
    }
}

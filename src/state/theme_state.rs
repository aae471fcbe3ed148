//! Theme and styling state management.
//!
//! This module encapsulates all state related to visual theming,
//! including the theme manager and the active theme.

use rtimeline::theme::DARK_THEME;
use rtimeline::{ThemeColors, ThemeManager};

/// State related to visual theme and styling.
///
/// Responsibilities:
/// - Managing theme instances
/// - Tracking the active theme
/// - Dark mode toggling
pub struct ThemeState {
    /// Theme manager instance
    theme_manager: ThemeManager,
    /// Name of the active theme
    current_theme_name: String,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("current_theme_name", &self.current_theme_name)
            .finish_non_exhaustive()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    /// Creates a new theme state with the Light theme.
    pub fn new() -> Self {
        Self::with_theme(rtimeline::theme::LIGHT_THEME.to_string())
    }

    /// Creates a new theme state with a specific theme.
    pub fn with_theme(theme_name: String) -> Self {
        Self {
            theme_manager: ThemeManager::new(),
            current_theme_name: theme_name,
        }
    }

    // ===== Theme Queries =====

    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    pub fn current_theme_name(&self) -> &str {
        &self.current_theme_name
    }

    /// Colors of the active theme.
    pub fn colors(&self) -> &ThemeColors {
        &self.theme_manager.theme_or_default(&self.current_theme_name).colors
    }

    pub fn is_dark_mode(&self) -> bool {
        self.current_theme_name == DARK_THEME
    }

    // ===== Theme Mutations =====

    /// Switches between the Light and Dark themes.
    pub fn set_dark_mode(&mut self, dark: bool) {
        if dark != self.is_dark_mode() {
            let next = self.theme_manager.toggled_name(&self.current_theme_name);
            self.current_theme_name = next.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_mode_toggle() {
        let mut state = ThemeState::new();
        assert!(!state.is_dark_mode());

        state.set_dark_mode(true);
        assert!(state.is_dark_mode());
        assert_eq!(state.current_theme_name(), DARK_THEME);

        state.set_dark_mode(true);
        assert!(state.is_dark_mode());

        state.set_dark_mode(false);
        assert!(!state.is_dark_mode());
    }
}

//! Terminal prompting backed by dialoguer

use anyhow::{Context, Result};
use crmsync_core::selection::{ChoiceOption, Prompter};
use dialoguer::Select;
use dialoguer::console::Term;
use dialoguer::theme::ColorfulTheme;

/// Arrow-key choice list on stderr; Esc or `q` aborts
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    /// Create a new terminal prompter
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    /// Whether stderr is attached to a terminal we can prompt on
    #[must_use]
    pub fn is_available() -> bool {
        Term::stderr().is_term()
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn choose(&mut self, message: &str, options: &[ChoiceOption]) -> Result<Option<String>> {
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();

        let picked = Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(&labels)
            .default(0)
            .interact_on_opt(&Term::stderr())
            .context("Failed to read selection")?;

        Ok(picked
            .and_then(|idx| options.get(idx))
            .map(|option| option.key.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompter_creation() {
        let _prompter = TerminalPrompter::new();
        let _default_prompter = TerminalPrompter::default();
    }
}

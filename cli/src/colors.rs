use colored::*;

pub struct ColorScheme;

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self
    }

    pub fn city_name(&self, text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn algorithm(&self, text: &str) -> ColoredString {
        text.cyan().bold()
    }

    pub fn success(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(&self, text: &str) -> ColoredString {
        text.red()
    }

    pub fn header(&self, text: &str) -> ColoredString {
        text.bold()
    }

    pub fn number(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn stats(&self, text: &str) -> ColoredString {
        text.blue()
    }

    pub fn optimal_flag(&self, is_optimal: bool) -> ColoredString {
        if is_optimal {
            "yes".green()
        } else {
            "no".normal()
        }
    }
}

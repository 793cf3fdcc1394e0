//! Form field value objects

use crate::validation::{FieldId, FieldStatus};

/// One choice in a selector field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    Select {
        options: Vec<SelectOption>,
        selected: usize,
    },
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// A single form field with its configuration, value, and reported validity
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: FieldId,
    pub label: String,
    pub value: FieldValue,
    pub status: FieldStatus,
}

impl FormField {
    /// Create a new text field
    pub fn text(id: FieldId) -> Self {
        Self {
            id,
            label: id.label().to_string(),
            value: FieldValue::Text(String::new()),
            status: FieldStatus::Normal,
        }
    }

    /// Create a new selector field; the first option starts selected
    pub fn select(id: FieldId, options: Vec<SelectOption>) -> Self {
        Self {
            id,
            label: id.label().to_string(),
            value: FieldValue::Select {
                options,
                selected: 0,
            },
            status: FieldStatus::Normal,
        }
    }

    pub fn is_select(&self) -> bool {
        matches!(self.value, FieldValue::Select { .. })
    }

    /// The submit-relevant value: raw text, or the selected option's value
    pub fn current_value(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Select { options, selected } => options
                .get(*selected)
                .map(|o| o.value.as_str())
                .unwrap_or(""),
        }
    }

    /// Set the text value
    #[allow(dead_code)]
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = FieldValue::Text(value.into());
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Clear the field value; selectors return to their placeholder
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Select { selected, .. } => *selected = 0,
        }
    }

    /// Advance a selector to its next option, wrapping
    pub fn select_next(&mut self) {
        if let FieldValue::Select { options, selected } = &mut self.value {
            if !options.is_empty() {
                *selected = (*selected + 1) % options.len();
            }
        }
    }

    /// Move a selector to its previous option, wrapping
    pub fn select_prev(&mut self) {
        if let FieldValue::Select { options, selected } = &mut self.value {
            if !options.is_empty() {
                *selected = selected.checked_sub(1).unwrap_or(options.len() - 1);
            }
        }
    }

    /// Select the option with the given value, if present
    #[allow(dead_code)]
    pub fn select_value(&mut self, value: &str) {
        if let FieldValue::Select { options, selected } = &mut self.value {
            if let Some(idx) = options.iter().position(|o| o.value == value) {
                *selected = idx;
            }
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Select { options, selected } => options
                .get(*selected)
                .map(|o| o.label.clone())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn occupation() -> FormField {
        FormField::select(
            FieldId::Occupation,
            vec![
                SelectOption::new("", "Select an occupation"),
                SelectOption::new("engineering", "Engineering"),
                SelectOption::new("other", "Other"),
            ],
        )
    }

    #[test]
    fn test_text_editing() {
        let mut field = FormField::text(FieldId::FirstName);
        field.push_char('A');
        field.push_char('d');
        field.push_char('a');
        assert_eq!(field.current_value(), "Ada");
        field.pop_char();
        assert_eq!(field.current_value(), "Ad");
        field.clear();
        assert_eq!(field.current_value(), "");
    }

    #[test]
    fn test_select_starts_on_placeholder() {
        let field = occupation();
        assert_eq!(field.current_value(), "");
        assert_eq!(field.display_value(), "Select an occupation");
    }

    #[test]
    fn test_select_cycles_and_wraps() {
        let mut field = occupation();
        field.select_next();
        assert_eq!(field.current_value(), "engineering");
        field.select_next();
        field.select_next();
        assert_eq!(field.current_value(), "");
        field.select_prev();
        assert_eq!(field.current_value(), "other");
    }

    #[test]
    fn test_select_ignores_text_editing() {
        let mut field = occupation();
        field.push_char('x');
        field.pop_char();
        assert_eq!(field.current_value(), "");
    }

    #[test]
    fn test_select_value() {
        let mut field = occupation();
        field.select_value("other");
        assert_eq!(field.current_value(), "other");
        field.select_value("missing");
        assert_eq!(field.current_value(), "other");
    }

    #[test]
    fn test_clear_resets_selector() {
        let mut field = occupation();
        field.select_value("other");
        field.clear();
        assert_eq!(field.current_value(), "");
    }
}

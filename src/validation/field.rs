//! Single-field required check

/// Visual validity marker reported back to the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStatus {
    #[default]
    Normal,
    Invalid,
}

/// Result of checking one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCheck {
    pub valid: bool,
    pub status: FieldStatus,
}

/// A required field is satisfied by any non-whitespace content.
///
/// The marker is reported, not applied; the caller owns the widget.
pub fn validate_required(value: &str) -> FieldCheck {
    let valid = !value.trim().is_empty();
    let status = if valid {
        FieldStatus::Normal
    } else {
        FieldStatus::Invalid
    };
    FieldCheck { valid, status }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_non_empty_is_valid() {
        let check = validate_required("Ada");
        assert!(check.valid);
        assert_eq!(check.status, FieldStatus::Normal);
    }

    #[test]
    fn test_inner_whitespace_is_valid() {
        assert!(validate_required("221B Baker St").valid);
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert!(validate_required("  x  ").valid);
    }

    #[test]
    fn test_empty_is_invalid() {
        let check = validate_required("");
        assert!(!check.valid);
        assert_eq!(check.status, FieldStatus::Invalid);
    }

    #[test]
    fn test_whitespace_only_is_invalid() {
        assert!(!validate_required("   \t ").valid);
        assert_eq!(validate_required(" \n").status, FieldStatus::Invalid);
    }
}

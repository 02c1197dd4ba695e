use crate::error::ApiError;

/// Strict required-field check: every named field must be present and
/// non-empty, otherwise the request fails with 400 and the list of missing
/// field names.
pub fn validate_required(fields: &[(&str, Option<&str>)]) -> Result<(), ApiError> {
    let missing = missing_fields(fields);

    if !missing.is_empty() {
        return Err(ApiError::Validation {
            message: "Missing required fields".to_string(),
            missing_fields: missing,
        });
    }

    Ok(())
}

/// Relaxed check for partial updates: passes as long as at least one named
/// field is present and non-empty.
pub fn validate_required_edit(fields: &[(&str, Option<&str>)]) -> Result<(), ApiError> {
    let missing = missing_fields(fields);

    if missing.len() == fields.len() {
        return Err(ApiError::Validation {
            message: "At least one field is required for edit".to_string(),
            missing_fields: missing,
        });
    }

    Ok(())
}

// Absent and empty-string are both treated as missing.
fn missing_fields(fields: &[(&str, Option<&str>)]) -> Vec<String> {
    fields
        .iter()
        .filter(|(_, value)| value.map_or(true, str::is_empty))
        .map(|(name, _)| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_passes_when_all_present() {
        assert!(validate_required(&[("name", Some("Stark")), ("logo", Some("l"))]).is_ok());
    }

    #[test]
    fn strict_rejects_any_missing_field() {
        let err = validate_required(&[
            ("name", Some("Stark")),
            ("logo", None),
            ("creator", Some("")),
        ])
        .unwrap_err();

        match err {
            ApiError::Validation {
                message,
                missing_fields,
            } => {
                assert_eq!(message, "Missing required fields");
                assert_eq!(missing_fields, vec!["logo", "creator"]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn edit_passes_with_a_single_field() {
        assert!(
            validate_required_edit(&[("name", Some("Stark")), ("logo", None), ("creator", None)])
                .is_ok()
        );
    }

    #[test]
    fn edit_rejects_when_all_fields_missing() {
        let err =
            validate_required_edit(&[("name", None), ("logo", Some("")), ("creator", None)])
                .unwrap_err();

        match err {
            ApiError::Validation {
                message,
                missing_fields,
            } => {
                assert_eq!(message, "At least one field is required for edit");
                assert_eq!(missing_fields.len(), 3);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn empty_string_counts_as_missing() {
        assert!(validate_required(&[("name", Some(""))]).is_err());
        assert!(validate_required_edit(&[("name", Some(""))]).is_err());
    }
}

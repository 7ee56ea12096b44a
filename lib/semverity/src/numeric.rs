use crate::{Component, ComponentError, ComponentResult, NumericError};

/// Converts a matched numeric group into a `u64`, tagging any failure with the component name.
///
/// Leading zeros are the grammar's concern and are not rejected here.
pub(crate) fn convert_numeric(text: &str, field: Component) -> ComponentResult<u64> {
    numeric_identifier(text).map_err(|source| ComponentError::Numeric { field, source })
}

fn numeric_identifier(text: &str) -> Result<u64, NumericError> {
    if text.is_empty() {
        return Err(NumericError::Empty);
    }

    let mut value = 0u64;
    for c in text.chars() {
        let digit = c.to_digit(10).ok_or(NumericError::InvalidDigit(c))?;
        value = value
            .checked_mul(10)
            .and_then(|value| value.checked_add(u64::from(digit)))
            .ok_or(NumericError::Overflow)?;
    }

    Ok(value)
}

use crate::error::ApiError;

/// Resolve the requested result count against the configured default and cap.
pub fn resolve_limit(
    requested: Option<usize>,
    default_limit: usize,
    max_limit: usize,
) -> Result<usize, ApiError> {
    let limit = requested.unwrap_or(default_limit);

    if !(1..=max_limit).contains(&limit) {
        return Err(ApiError::BadRequest(format!(
            "limit must be between 1 and {max_limit}"
        )));
    }

    Ok(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_limit_uses_default() {
        assert_eq!(resolve_limit(None, 10, 100).unwrap(), 10);
    }

    #[test]
    fn accepts_limits_within_bounds() {
        assert_eq!(resolve_limit(Some(1), 10, 100).unwrap(), 1);
        assert_eq!(resolve_limit(Some(100), 10, 100).unwrap(), 100);
    }

    #[test]
    fn rejects_out_of_range_limits() {
        assert!(matches!(
            resolve_limit(Some(0), 10, 100),
            Err(ApiError::BadRequest(_))
        ));
        assert!(matches!(
            resolve_limit(Some(101), 10, 100),
            Err(ApiError::BadRequest(msg)) if msg.contains("100")
        ));
    }
}

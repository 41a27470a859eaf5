use super::LoadError;

/// Parse delimited text into raw points, one point per line.
///
/// `delimiter: None` splits on ASCII whitespace (the reference input format's
/// default); `Some(sep)` splits on the literal separator. Blank lines are
/// skipped. The first data line fixes the arity for the whole input.
pub(super) fn parse_points(
    text: &str,
    delimiter: Option<&str>,
) -> Result<Vec<Vec<f64>>, LoadError> {
    let mut points: Vec<Vec<f64>> = Vec::new();
    let mut expected = 0usize;

    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = match delimiter {
            Some(sep) => line.split(sep).map(str::trim).collect(),
            None => line.split_whitespace().collect(),
        };

        let mut coords = Vec::with_capacity(fields.len());
        for field in &fields {
            let value: f64 = field.parse().map_err(|_| LoadError::BadField {
                line: lineno + 1,
                field: field.to_string(),
            })?;
            if !value.is_finite() {
                return Err(LoadError::NonFinite { line: lineno + 1 });
            }
            coords.push(value);
        }

        if points.is_empty() {
            expected = coords.len();
        } else if coords.len() != expected {
            return Err(LoadError::ArityMismatch {
                line: lineno + 1,
                expected,
                found: coords.len(),
            });
        }

        points.push(coords);
    }

    if points.is_empty() {
        return Err(LoadError::Empty);
    }

    Ok(points)
}

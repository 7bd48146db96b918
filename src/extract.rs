use crate::error::Error;

/// Pull the comma-separated integer array out of a source file.
///
/// The array body is whatever sits between the first `{` and the last `}` in
/// the file, so surrounding declarations and trailing semicolons are ignored.
/// Values outside 0-255 are not rejected here; byte narrowing happens in the
/// gzip stage.
pub fn byte_array(source: &str) -> Result<Vec<i64>, Error> {
    let braces = source.find('{').zip(source.rfind('}'));

    let Some((start, end)) = braces.filter(|(start, end)| start < end) else {
        return Err(Error::MalformedInput(
            "No valid byte array found in file (missing curly braces)".into(),
        ));
    };

    let mut values = Vec::new();
    for token in source[start + 1..end].split(',') {
        let token = token.trim();
        // tolerates trailing commas
        if token.is_empty() {
            continue;
        }
        values.push(parse_value(token)?);
    }

    if values.is_empty() {
        return Err(Error::MalformedInput(
            "No valid byte values found in array".into(),
        ));
    }

    Ok(values)
}

// Firmware arrays are usually emitted in hex, so 0x literals are accepted
// alongside plain decimal.
fn parse_value(token: &str) -> Result<i64, Error> {
    let parsed = match token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        Some(hex) => i64::from_str_radix(hex, 16),
        None => token.parse(),
    };

    parsed.map_err(|_| Error::MalformedInput(format!("Invalid byte value '{token}'")))
}

//! Utility functions and types.

use std::fmt::Debug;

/// Redacts secret material in Debug output.
///
/// Short values are fully masked. Longer values keep their last four
/// characters so users can tell two redacted values apart without the
/// output leaking anything useful.
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        match value {
            None => Redact(""),
            Some(v) => Redact(v),
        }
    }
}

impl<'a> Debug for Redact<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return f.write_str("EMPTY");
        }

        match self.0.char_indices().nth_back(3) {
            Some((idx, _)) if self.0.len() >= 16 => {
                f.write_str("***")?;
                f.write_str(&self.0[idx..])
            }
            _ => f.write_str("***"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact() {
        let cases = vec![
            ("", "EMPTY"),
            ("short", "***"),
            ("fifteen-chars..", "***"),
            ("a-much-longer-secret-key", "***-key"),
        ];

        for (input, expected) in cases {
            assert_eq!(
                format!("{:?}", Redact(input)),
                expected,
                "failed on input: {input}"
            );
        }
    }
}

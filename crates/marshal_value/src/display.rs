//! Compact JSON-like rendering.
//!
//! This is the textual representation used when a non-text map key has
//! to be coerced into text.

use core::fmt::{self, Write};

use crate::Value;

fn write_text(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in text.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if (c as u32) < 0x20 => write!(f, "\\u{:04x}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => fmt::Display::fmt(b, f),
            Self::Number(n) => fmt::Display::fmt(n, f),
            Self::Text(s) => write_text(f, s),
            Self::List(list) => {
                f.write_char('[')?;
                for (index, item) in list.iter().enumerate() {
                    if index > 0 {
                        f.write_char(',')?;
                    }
                    fmt::Display::fmt(item, f)?;
                }
                f.write_char(']')
            }
            Self::Map(map) => {
                f.write_char('{')?;
                for (index, (key, item)) in map.iter().enumerate() {
                    if index > 0 {
                        f.write_char(',')?;
                    }
                    write_text(f, key)?;
                    f.write_char(':')?;
                    fmt::Display::fmt(item, f)?;
                }
                f.write_char('}')
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Value;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn escapes_text() {
        let value = Value::from("a\"b\\c\n\u{1}");
        assert_eq!(value.to_string(), r#""a\"b\\c\n\u0001""#);
    }

    #[test]
    fn nested() {
        let value: Value = [("k", Value::from(vec![Value::Null, true.into(), 1.5_f64.into()]))]
            .into_iter()
            .collect();
        assert_eq!(value.to_string(), r#"{"k":[null,true,1.5]}"#);
    }
}

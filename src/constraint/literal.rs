//! Rendering of reference values inside descriptions
//!
//! Text renders double-quoted, a single character renders single-quoted (or
//! as a hex escape when it is not printable), everything else renders through
//! its `Display` implementation.

/// Returns `true` if `c` renders as itself.
///
/// Control and format characters, spaces other than `' '`, line and
/// paragraph separators, unassigned code points and combining marks are not
/// printable. Quotes and the backslash are.
pub(crate) fn is_printable(c: char) -> bool {
    matches!(c, '\\' | '\'' | '"') || c.escape_debug().count() == 1
}

/// Renders a value the way it should appear inside a constraint description.
///
/// # Example
///
/// ```rust
/// use constraints::constraint::Literal;
///
/// assert_eq!("abc".literal(), "\"abc\"");
/// assert_eq!('a'.literal(), "'a'");
/// assert_eq!('\0'.literal(), "'\\x00'");
/// assert_eq!(42_i32.literal(), "42");
/// ```
pub trait Literal {
    /// Returns the literal form of the value.
    fn literal(&self) -> String;
}

impl Literal for str {
    fn literal(&self) -> String {
        format!("{:?}", self)
    }
}

impl Literal for String {
    fn literal(&self) -> String {
        self.as_str().literal()
    }
}

impl Literal for char {
    fn literal(&self) -> String {
        let code = *self as u32;
        if is_printable(*self) {
            // Debug escapes quotes and backslashes for us.
            format!("{:?}", self)
        } else if code < 0x80 {
            format!("'\\x{:02x}'", code)
        } else {
            format!("'\\u{{{:04x}}}'", code)
        }
    }
}

impl<T: Literal + ?Sized> Literal for &T {
    fn literal(&self) -> String {
        (**self).literal()
    }
}

macro_rules! impl_display_literal {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Literal for $ty {
                fn literal(&self) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

impl_display_literal!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_quoted() {
        assert_eq!("hello".literal(), "\"hello\"");
        assert_eq!(String::from("a\"b").literal(), "\"a\\\"b\"");
    }

    #[test]
    fn test_char_rendering() {
        assert_eq!('z'.literal(), "'z'");
        assert_eq!('\''.literal(), "'\\''");
        assert_eq!('\n'.literal(), "'\\x0a'");
        assert_eq!('\u{85}'.literal(), "'\\u{0085}'");
        assert_eq!('\u{a0}'.literal(), "'\\u{00a0}'");
        assert_eq!('\u{200b}'.literal(), "'\\u{200b}'");
        assert_eq!('é'.literal(), "'é'");
        assert_eq!('\\'.literal(), "'\\\\'");
    }

    #[test]
    fn test_printable_rule() {
        for c in ['a', ' ', '~', 'é', '中', '\\', '\'', '"'] {
            assert!(is_printable(c), "{:?}", c);
        }
        for c in ['\0', '\t', '\u{7f}', '\u{a0}', '\u{ad}', '\u{200b}', '\u{2028}', '\u{378}'] {
            assert!(!is_printable(c), "{:?}", c);
        }
    }

    #[test]
    fn test_numbers_use_display() {
        assert_eq!((-3_i64).literal(), "-3");
        assert_eq!(2.5_f64.literal(), "2.5");
        assert_eq!(true.literal(), "true");
    }
}

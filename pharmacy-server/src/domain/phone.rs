//! Dialable phone numbers.

use std::fmt;

/// A phone number ready to dial.
///
/// Rosters publish phone numbers with a leading access-code character
/// (usually `+`). Dialing drops exactly that first character.
///
/// # Examples
///
/// ```
/// use pharmacy_server::domain::DialNumber;
///
/// let n = DialNumber::from_display("+35799000000").unwrap();
/// assert_eq!(n.as_str(), "35799000000");
/// assert_eq!(n.tel_uri(), "tel://35799000000");
///
/// assert!(DialNumber::from_display("").is_none());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DialNumber(String);

impl DialNumber {
    /// Strip the leading access-code character from a displayed number.
    ///
    /// Returns `None` when nothing would be left to dial.
    pub fn from_display(display: &str) -> Option<Self> {
        let mut chars = display.chars();
        chars.next()?;
        let rest = chars.as_str();

        if rest.is_empty() {
            return None;
        }

        Some(Self(rest.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `tel://` URI a dialer opens.
    pub fn tel_uri(&self) -> String {
        format!("tel://{}", self.0)
    }
}

impl fmt::Debug for DialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DialNumber({})", self.0)
    }
}

impl fmt::Display for DialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_plus() {
        let n = DialNumber::from_display("+35722000000").unwrap();
        assert_eq!(n.as_str(), "35722000000");
        assert_eq!(n.tel_uri(), "tel://35722000000");
    }

    #[test]
    fn strips_any_first_character() {
        // Only the first character goes, whatever it is
        let n = DialNumber::from_display("099123").unwrap();
        assert_eq!(n.as_str(), "99123");
    }

    #[test]
    fn strips_multibyte_first_character() {
        let n = DialNumber::from_display("☎22000000").unwrap();
        assert_eq!(n.as_str(), "22000000");
    }

    #[test]
    fn nothing_to_dial() {
        assert!(DialNumber::from_display("").is_none());
        assert!(DialNumber::from_display("+").is_none());
    }
}

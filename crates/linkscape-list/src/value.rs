use std::borrow::Cow;

/// A value that can live in a [`crate::LinkedList`].
///
/// Lists compare values with `==` when deleting, and refuse values that are
/// blank. Blank means "the user did not provide anything": empty or
/// whitespace-only text, or a missing `Option`. Numbers are never blank, so
/// `0` is a perfectly good node.
pub trait NodeValue: PartialEq {
    fn is_blank(&self) -> bool {
        false
    }
}

impl NodeValue for String {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl NodeValue for &str {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl NodeValue for Box<str> {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl NodeValue for Cow<'_, str> {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl<T: NodeValue> NodeValue for Option<T> {
    fn is_blank(&self) -> bool {
        match self {
            Some(value) => value.is_blank(),
            None => true,
        }
    }
}

macro_rules! never_blank {
    ($($ty:ty),* $(,)?) => {
        $(impl NodeValue for $ty {})*
    };
}

never_blank!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, char, bool);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text() {
        assert!("".is_blank());
        assert!("   \t".is_blank());
        assert!(String::new().is_blank());
        assert!(!"a".is_blank());
        assert!(!" a ".to_string().is_blank());
    }

    #[test]
    fn test_missing_option_is_blank() {
        assert!(None::<String>.is_blank());
        assert!(Some(String::new()).is_blank());
        assert!(!Some("x".to_string()).is_blank());
    }

    #[test]
    fn test_zero_is_not_blank() {
        assert!(!0i32.is_blank());
        assert!(!0u64.is_blank());
        assert!(!Some(0usize).is_blank());
        assert!(!false.is_blank());
    }
}

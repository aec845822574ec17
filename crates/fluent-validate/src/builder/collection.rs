use super::RuleBuilder;
use crate::message::ErrorMessage;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Values that can be empty: text, collections and optional values.
///
/// `None` is empty, and so is `Some` of an empty value.
pub trait IsEmpty {
    fn is_empty_value(&self) -> bool;
}

impl IsEmpty for String {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl IsEmpty for str {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl IsEmpty for &str {
    fn is_empty_value(&self) -> bool {
        str::is_empty(self)
    }
}

impl IsEmpty for Cow<'_, str> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsEmpty for Vec<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsEmpty for [T] {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T, const N: usize> IsEmpty for [T; N] {
    fn is_empty_value(&self) -> bool {
        N == 0
    }
}

impl<T> IsEmpty for VecDeque<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> IsEmpty for HashMap<K, V, S> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T, S> IsEmpty for HashSet<T, S> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> IsEmpty for BTreeMap<K, V> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> IsEmpty for BTreeSet<T> {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T: IsEmpty> IsEmpty for Option<T> {
    fn is_empty_value(&self) -> bool {
        self.as_ref().map_or(true, IsEmpty::is_empty_value)
    }
}

impl<'v, M: 'static, V> RuleBuilder<'v, M, V>
where
    V: IsEmpty + 'static,
{
    /// Value is not empty.
    pub fn not_empty(self) -> Self {
        self.register(
            "not_empty",
            |value| !value.is_empty_value(),
            |name| ErrorMessage::NotEmpty {
                name: name.to_string(),
            },
        )
    }
}

//! Typed property accessors and the keys derived from them.

use serde::{Deserialize, Serialize};
use std::borrow::{Borrow, Cow};
use std::fmt;

/// Label identifying a property in error messages and in the error index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyKey(Cow<'static, str>);

impl PropertyKey {
    /// Create a key from a static or owned label.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key used for rules that apply to the whole model.
    pub fn of_type<T: ?Sized>() -> Self {
        Self(Cow::Owned(short_type_name::<T>()))
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PropertyKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PropertyKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for PropertyKey {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

impl From<String> for PropertyKey {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

/// A labelled accessor from a model `M` to one of its values `V`.
///
/// The label is supplied explicitly, either by hand, through the
/// [`property!`](crate::property!) macro, or by `#[derive(Properties)]`.
///
/// ```rust,ignore
/// struct User {
///     name: String,
/// }
///
/// const NAME: Property<User, String> = Property::new("name", |user| &user.name);
/// ```
pub struct Property<M, V> {
    name: Cow<'static, str>,
    get: fn(&M) -> &V,
}

impl<M, V> Property<M, V> {
    /// Create a property with a static label.
    pub const fn new(name: &'static str, get: fn(&M) -> &V) -> Self {
        Self {
            name: Cow::Borrowed(name),
            get,
        }
    }

    /// Create a property whose label is only known at runtime.
    pub fn named(name: impl Into<Cow<'static, str>>, get: fn(&M) -> &V) -> Self {
        Self {
            name: name.into(),
            get,
        }
    }

    /// The property label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The key under which errors for this property are indexed.
    pub fn key(&self) -> PropertyKey {
        PropertyKey(self.name.clone())
    }

    /// Read the value from a model.
    pub fn get<'m>(&self, model: &'m M) -> &'m V {
        (self.get)(model)
    }

    pub(crate) fn getter(&self) -> fn(&M) -> &V {
        self.get
    }
}

impl<M> Property<M, M> {
    /// Identity accessor over the whole model, labelled with its short type name.
    pub fn model() -> Self {
        Self {
            name: Cow::Owned(short_type_name::<M>()),
            get: identity,
        }
    }
}

fn identity<M>(model: &M) -> &M {
    model
}

impl<M, V> Clone for Property<M, V> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            get: self.get,
        }
    }
}

impl<M, V> fmt::Debug for Property<M, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Build a [`Property`] from a model type and a field path.
///
/// The label is the field path as written, e.g. `"address.city"`.
///
/// ```rust,ignore
/// let name = property!(User, name);
/// let city = property!(User, address.city);
/// ```
#[macro_export]
macro_rules! property {
    ($model:ty, $first:ident $(. $rest:ident)*) => {
        $crate::Property::<$model, _>::new(
            concat!(stringify!($first) $(, ".", stringify!($rest))*),
            |model: &$model| &model.$first $(.$rest)*,
        )
    };
}

/// Type name with module paths stripped, including inside generic arguments.
///
/// `core::option::Option<alloc::string::String>` becomes `Option<String>`.
pub(crate) fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();
    let mut chars = full.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ':' if chars.peek() == Some(&':') => {
                chars.next();
                segment.clear();
            }
            c if c.is_alphanumeric() || c == '_' => segment.push(c),
            other => {
                out.push_str(&segment);
                segment.clear();
                out.push(other);
            }
        }
    }
    out.push_str(&segment);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Address {
        city: String,
    }

    struct User {
        name: String,
        address: Address,
    }

    fn user() -> User {
        User {
            name: "Ada".to_string(),
            address: Address {
                city: "London".to_string(),
            },
        }
    }

    #[test]
    fn property_reads_value_and_key() {
        let name: Property<User, String> = Property::new("name", |u| &u.name);
        assert_eq!(name.get(&user()), "Ada");
        assert_eq!(name.key().as_str(), "name");
    }

    #[test]
    fn property_macro_uses_field_path_as_label() {
        let name = property!(User, name);
        let city = property!(User, address.city);

        assert_eq!(name.name(), "name");
        assert_eq!(city.name(), "address.city");
        assert_eq!(city.get(&user()), "London");
    }

    #[test]
    fn model_property_uses_short_type_name() {
        assert_eq!(Property::<String, String>::model().name(), "String");
        assert_eq!(Property::<i32, i32>::model().name(), "i32");
        assert_eq!(
            Property::<Option<String>, Option<String>>::model().name(),
            "Option<String>"
        );
    }

    #[test]
    fn short_type_name_strips_nested_paths() {
        assert_eq!(
            short_type_name::<Vec<Option<String>>>(),
            "Vec<Option<String>>"
        );
        assert_eq!(short_type_name::<&str>(), "&str");
    }

    #[test]
    fn key_borrows_as_str() {
        let mut map = std::collections::HashMap::new();
        map.insert(PropertyKey::from("email"), 1);
        assert_eq!(map.get("email"), Some(&1));
    }
}

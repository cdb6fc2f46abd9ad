use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Object-safe bundle of everything a boxed item has to support so that
/// containers can deduplicate, hash and clone it without knowing its type.
///
/// Blanket-implemented for any `'static` type that is `Debug + PartialEq +
/// Hash + Clone`, so callers never implement this by hand.
trait AnyItem: Any + fmt::Debug {
    fn dyn_eq(&self, other: &dyn AnyItem) -> bool;
    fn dyn_hash(&self, state: &mut dyn Hasher);
    fn dyn_clone(&self) -> Box<dyn AnyItem>;
    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T> AnyItem for T
where
    T: Any + fmt::Debug + PartialEq + Hash + Clone,
{
    fn dyn_eq(&self, other: &dyn AnyItem) -> bool {
        other.as_any().downcast_ref::<T>().map_or(false, |o| self == o)
    }

    fn dyn_hash(&self, mut state: &mut dyn Hasher) {
        // two values of different types must not hash alike
        TypeId::of::<T>().hash(&mut state);
        self.hash(&mut state);
    }

    fn dyn_clone(&self) -> Box<dyn AnyItem> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// A uniformly boxed value: container items, bound invocation arguments,
/// resolved attributes and per-item results all travel as `Value`, whatever
/// their underlying primitive or object shape.
///
/// Equality and hashing are type-aware: a `Value` holding `2i64` is never
/// equal to one holding `"2"`.
pub struct Value(Box<dyn AnyItem>);

impl Value {
    pub fn new<T>(value: T) -> Self
    where
        T: Any + fmt::Debug + PartialEq + Hash + Clone,
    {
        Value(Box::new(value))
    }

    pub fn is<T: Any>(&self) -> bool {
        self.0.as_any().is::<T>()
    }

    pub fn type_id(&self) -> TypeId {
        self.0.as_any().type_id()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }

    /// Recover the underlying value, or give `self` back unchanged when the
    /// type does not match.
    pub fn downcast<T: Any>(self) -> Result<T, Value> {
        if self.is::<T>() {
            match self.0.into_any().downcast::<T>() {
                Ok(v) => Ok(*v),
                Err(_) => unreachable!("type was just checked"),
            }
        } else {
            Err(self)
        }
    }

    /// Boolean reading of this value, if it holds one.
    pub fn as_bool(&self) -> Option<bool> {
        self.downcast_ref::<bool>().copied()
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        Value(self.0.dyn_clone())
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.0.dyn_eq(&*other.0)
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.dyn_hash(state)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

macro_rules! value_from {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Value::new(v)
            }
        })*
    };
}

value_from!(bool, i32, i64, u32, u64, usize, char, String);

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::new(v.to_owned())
    }
}

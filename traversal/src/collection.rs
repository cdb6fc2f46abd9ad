use std::collections::HashSet;

use crate::value::Value;

/// The three supported container kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Ordered, duplicates allowed.
    Sequence,
    /// Unordered, unique by equality.
    Set,
    /// Insertion-ordered, unique by equality.
    OrderedSet,
}

/// The container surface the traversal engine consumes: forward iteration,
/// empty construction of the same kind, appending, and in-place removal.
///
/// The engine never owns a container; it borrows the source for the duration
/// of one call and, for `map`/`filter`, hands a freshly built result back to
/// the caller.
pub trait Collection: Clone {
    type Iter<'a>: Iterator<Item = &'a Value>
    where
        Self: 'a;

    const KIND: Kind;

    /// A new, empty container of the same kind.
    fn empty() -> Self;

    /// Add one item. For the unique kinds, appending an item already present
    /// is a silent no-op.
    fn append(&mut self, item: Value);

    /// Forward iteration. Positional for the ordered kinds; for `Set` the
    /// order is implementation-defined but stable while the set is unmutated.
    fn iter(&self) -> Self::Iter<'_>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, item: &Value) -> bool;

    /// Remove every listed item (by equality). In a `Sequence` this removes
    /// all positions holding an equal item.
    fn remove_all(&mut self, items: &[Value]);
}

/// Ordered container, duplicates allowed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sequence(Vec<Value>);

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Sequence(items.into_iter().map(Into::into).collect())
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }
}

impl Collection for Sequence {
    type Iter<'a> = std::slice::Iter<'a, Value>;

    const KIND: Kind = Kind::Sequence;

    fn empty() -> Self {
        Self::default()
    }

    fn append(&mut self, item: Value) {
        self.0.push(item);
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.0.iter()
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn contains(&self, item: &Value) -> bool {
        self.0.contains(item)
    }

    fn remove_all(&mut self, items: &[Value]) {
        self.0.retain(|v| !items.contains(v));
    }
}

impl FromIterator<Value> for Sequence {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Sequence(iter.into_iter().collect())
    }
}

/// Unordered container, unique by equality.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Set(HashSet<Value>);

impl Set {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Set(items.into_iter().map(Into::into).collect())
    }
}

impl Collection for Set {
    type Iter<'a> = std::collections::hash_set::Iter<'a, Value>;

    const KIND: Kind = Kind::Set;

    fn empty() -> Self {
        Self::default()
    }

    fn append(&mut self, item: Value) {
        self.0.insert(item);
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.0.iter()
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn contains(&self, item: &Value) -> bool {
        self.0.contains(item)
    }

    fn remove_all(&mut self, items: &[Value]) {
        for item in items {
            self.0.remove(item);
        }
    }
}

impl FromIterator<Value> for Set {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Set(iter.into_iter().collect())
    }
}

/// Insertion-ordered container, unique by equality.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderedSet(Vec<Value>);

impl OrderedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let mut set = Self::default();
        for item in items {
            set.append(item.into());
        }
        set
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }
}

impl Collection for OrderedSet {
    type Iter<'a> = std::slice::Iter<'a, Value>;

    const KIND: Kind = Kind::OrderedSet;

    fn empty() -> Self {
        Self::default()
    }

    fn append(&mut self, item: Value) {
        if !self.0.contains(&item) {
            self.0.push(item);
        }
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.0.iter()
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn contains(&self, item: &Value) -> bool {
        self.0.contains(item)
    }

    fn remove_all(&mut self, items: &[Value]) {
        self.0.retain(|v| !items.contains(v));
    }
}

impl FromIterator<Value> for OrderedSet {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut set = Self::default();
        for item in iter {
            set.append(item);
        }
        set
    }
}

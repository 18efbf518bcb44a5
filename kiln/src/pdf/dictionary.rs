use super::{Array, Name, Object, ObjectId};

/// Identity of one generic dictionary entry.
///
/// Ids are handed out by the owning dictionary in insertion order and are
/// never reused, so two entries whose names render identically stay two
/// separate entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u32);

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    id: EntryId,
    key: Name,
    value: Object,
}

/// Dictionary with the structural fields the writer knows about plus an
/// ordered list of generic entries.
///
/// Output order is `/Type`, `/Subtype`, `/Filter`, `/Length`, `/Parent`,
/// `/Contents`, `/Kids`, `/Count`, then the generic entries as inserted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    /// `/Type`
    pub kind: Option<Name>,
    pub subtype: Option<Name>,
    /// Decode order: the filter applied last when encoding comes first.
    pub filters: Array,
    pub length: Option<usize>,
    pub parent: Option<ObjectId>,
    /// `/Contents`
    pub content: Option<ObjectId>,
    pub kids: Array,
    pub count: Option<i64>,
    entries: Vec<Entry>,
    next_entry: u32,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dictionary with `/Type` set.
    pub fn typed(kind: impl Into<Name>) -> Self {
        Self {
            kind: Some(kind.into()),
            ..Self::default()
        }
    }

    pub fn with_subtype(mut self, subtype: impl Into<Name>) -> Self {
        self.subtype = Some(subtype.into());
        self
    }

    pub fn with_parent(mut self, parent: ObjectId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn with_content(mut self, content: ObjectId) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_count(mut self, count: i64) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with(mut self, key: impl Into<Name>, value: impl Into<Object>) -> Self {
        self.insert(key, value);
        self
    }

    /// Appends a generic entry.
    ///
    /// Existing entries with the same name are kept; the new entry is written
    /// after them.
    pub fn insert(&mut self, key: impl Into<Name>, value: impl Into<Object>) -> EntryId {
        let id = EntryId(self.next_entry);
        self.next_entry += 1;
        self.entries.push(Entry {
            id,
            key: key.into(),
            value: value.into(),
        });
        id
    }

    pub fn add_kids(&mut self, kids: impl IntoIterator<Item = ObjectId>) {
        self.kids.extend(kids.into_iter().map(Object::Reference));
    }

    /// First generic entry named `key`.
    pub fn get(&self, key: &str) -> Option<&Object> {
        self.entries.iter().find(|e| e.key.as_str() == key).map(|e| &e.value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Object> {
        self.entries
            .iter_mut()
            .find(|e| e.key.as_str() == key)
            .map(|e| &mut e.value)
    }

    /// All generic entries named `key`, in insertion order.
    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Object> + 'a {
        self.entries
            .iter()
            .filter(move |e| e.key.as_str() == key)
            .map(|e| &e.value)
    }

    pub fn entry(&self, id: EntryId) -> Option<(&Name, &Object)> {
        self.entries.iter().find(|e| e.id == id).map(|e| (&e.key, &e.value))
    }

    /// Replaces the value of one entry, returning the previous value.
    pub fn set(&mut self, id: EntryId, value: impl Into<Object>) -> Option<Object> {
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .map(|e| std::mem::replace(&mut e.value, value.into()))
    }

    pub fn remove(&mut self, id: EntryId) -> Option<(Name, Object)> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        let entry = self.entries.remove(index);
        Some((entry.key, entry.value))
    }

    /// Removes every generic entry named `key`.
    pub fn remove_all(&mut self, key: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| e.key.as_str() != key);
        before - self.entries.len()
    }

    /// Generic entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Name, &Object)> {
        self.entries.iter().map(|e| (&e.key, &e.value))
    }

    /// Number of generic entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when `/Type` is set to `kind`.
    pub fn is_type(&self, kind: &str) -> bool {
        self.kind.as_ref().map_or(false, |k| k.as_str() == kind)
    }

    /// True when the filter list holds the name `filter`.
    pub(crate) fn has_filter(&self, filter: &str) -> bool {
        self.filters
            .iter()
            .any(|f| f.name().map_or(false, |n| n.as_str() == filter))
    }
}

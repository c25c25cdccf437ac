use serde::{Deserialize, Serialize};

/// A named allow-list of top-level field names.
///
/// An empty `fields` list means "no filtering": matching such a declaration
/// leaves the tree untouched, the same as declaring no selector at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorDeclaration {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<String>,
}

impl SelectorDeclaration {
    pub fn new<N, I, F>(name: N, fields: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        Self {
            name: name.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_static(name: &str, fields: &[&str]) -> Self {
        Self::new(name, fields.iter().copied())
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }

    pub fn allows(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }

    pub fn is_unrestricted(&self) -> bool {
        self.fields.is_empty()
    }
}

/// All declarations attached to one type, in declaration order.
///
/// Names are not required to be unique; same-named declarations are kept and
/// each of them is applied when that name is requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorGroup {
    declarations: Vec<SelectorDeclaration>,
}

impl SelectorGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(declaration: SelectorDeclaration) -> Self {
        Self {
            declarations: vec![declaration],
        }
    }

    pub fn with(mut self, declaration: SelectorDeclaration) -> Self {
        self.declarations.push(declaration);
        self
    }

    pub fn extend<I>(&mut self, declarations: I)
    where
        I: IntoIterator<Item = SelectorDeclaration>,
    {
        self.declarations.extend(declarations);
    }

    pub fn declarations(&self) -> &[SelectorDeclaration] {
        &self.declarations
    }

    pub fn matching<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a SelectorDeclaration> + 'a {
        self.declarations.iter().filter(move |d| d.is_named(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.matching(name).next().is_some()
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl FromIterator<SelectorDeclaration> for SelectorGroup {
    fn from_iter<I: IntoIterator<Item = SelectorDeclaration>>(iter: I) -> Self {
        Self {
            declarations: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for SelectorGroup {
    type Item = SelectorDeclaration;
    type IntoIter = std::vec::IntoIter<SelectorDeclaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.declarations.into_iter()
    }
}

impl<'a> IntoIterator for &'a SelectorGroup {
    type Item = &'a SelectorDeclaration;
    type IntoIter = std::slice::Iter<'a, SelectorDeclaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.declarations.iter()
    }
}

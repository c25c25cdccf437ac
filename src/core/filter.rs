use crate::domain::model::SelectorDeclaration;
use serde_json::Value;

/// Prunes `tree` with every declaration named `name`.
///
/// Matching declarations are applied in order against the same tree, so two
/// same-named declarations narrow it progressively. A missing name, a name
/// with no matching declaration, or a declaration with an empty field list
/// leaves the tree as it is. Only the top-level object is touched.
///
/// Returns how many declarations matched.
pub fn apply_selector<'a, I>(tree: &mut Value, declarations: I, name: Option<&str>) -> usize
where
    I: IntoIterator<Item = &'a SelectorDeclaration>,
{
    let Some(name) = name else {
        return 0;
    };

    let mut matched = 0;
    for declaration in declarations.into_iter().filter(|d| d.is_named(name)) {
        matched += 1;
        if declaration.is_unrestricted() {
            tracing::debug!("Selector '{}' has no fields, keeping the tree unfiltered", name);
            continue;
        }
        retain_fields(tree, &declaration.fields);
    }

    if matched == 0 {
        tracing::debug!("No selector named '{}', keeping the tree unfiltered", name);
    }

    matched
}

/// Drops every top-level key of `tree` not listed in `fields`.
///
/// Returns `true` when pruning ran. An empty `fields` list or a tree that is
/// not an object is left untouched.
pub fn retain_fields(tree: &mut Value, fields: &[String]) -> bool {
    if fields.is_empty() {
        return false;
    }

    let Value::Object(map) = tree else {
        tracing::warn!("Selector applied to a non-object value, skipping field pruning");
        return false;
    };

    let before = map.len();
    map.retain(|key, _| fields.iter().any(|f| f == key));
    tracing::trace!("Pruned {} of {} top-level fields", before - map.len(), before);

    true
}

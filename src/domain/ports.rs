use crate::domain::model::SelectorGroup;

/// Selector declarations attached to a type at definition time.
///
/// Usually implemented through [`named_fields!`](crate::named_fields), which
/// builds the group once and hands out the same `&'static` reference on every
/// call.
pub trait NamedFields {
    fn selector_group() -> &'static SelectorGroup;
}

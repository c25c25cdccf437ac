/// Attaches selector declarations to a type by implementing
/// [`NamedFields`](crate::NamedFields).
///
/// A single declaration:
///
/// ```
/// use json_named_fields::{named_fields, NamedFields};
///
/// struct User;
/// named_fields!(User, "summary" => ["id", "name"]);
///
/// assert_eq!(User::selector_group().len(), 1);
/// ```
///
/// Several declarations on one type, kept in the order written:
///
/// ```
/// use json_named_fields::{named_fields, NamedFields};
///
/// struct Order;
/// named_fields!(Order {
///     "summary" => ["id", "total"],
///     "shipping" => ["id", "address", "status"],
/// });
///
/// let names: Vec<_> = Order::selector_group()
///     .declarations()
///     .iter()
///     .map(|d| d.name.as_str())
///     .collect();
/// assert_eq!(names, ["summary", "shipping"]);
/// ```
///
/// Generic types take an `impl<...>` prefix listing their type parameters.
/// Every instantiation shares one group:
///
/// ```
/// use json_named_fields::{named_fields, NamedFields};
///
/// struct Page<T> {
///     items: Vec<T>,
///     cursor: Option<String>,
/// }
/// named_fields!(impl<T> Page<T>, "items" => ["items"]);
///
/// assert!(Page::<u8>::selector_group().contains("items"));
/// assert!(std::ptr::eq(
///     Page::<u8>::selector_group(),
///     Page::<String>::selector_group(),
/// ));
/// ```
///
/// Only plain type parameters are accepted; types with lifetimes, const
/// parameters or bounds need a hand-written [`NamedFields`](crate::NamedFields)
/// impl.
#[macro_export]
macro_rules! named_fields {
    (@impl [$($gen:ident),*] $ty:ty => $group:expr) => {
        impl<$($gen),*> $crate::NamedFields for $ty {
            fn selector_group() -> &'static $crate::SelectorGroup {
                static GROUP: ::std::sync::LazyLock<$crate::SelectorGroup> =
                    ::std::sync::LazyLock::new(|| $group);
                &GROUP
            }
        }
    };
    (@single $name:literal [$($field:literal),*]) => {
        $crate::SelectorGroup::single($crate::SelectorDeclaration::from_static(
            $name,
            &[$($field),*],
        ))
    };
    (@group $($name:literal [$($field:literal),*])+) => {
        $crate::SelectorGroup::new()
            $(.with($crate::SelectorDeclaration::from_static(
                $name,
                &[$($field),*],
            )))+
    };
    (impl<$($gen:ident),+> $ty:ty, $name:literal => [$($field:literal),* $(,)?] $(,)?) => {
        $crate::named_fields!(@impl [$($gen),+] $ty =>
            $crate::named_fields!(@single $name [$($field),*]));
    };
    (impl<$($gen:ident),+> $ty:ty { $($name:literal => [$($field:literal),* $(,)?]),+ $(,)? }) => {
        $crate::named_fields!(@impl [$($gen),+] $ty =>
            $crate::named_fields!(@group $($name [$($field),*])+));
    };
    ($ty:ty, $name:literal => [$($field:literal),* $(,)?] $(,)?) => {
        $crate::named_fields!(@impl [] $ty =>
            $crate::named_fields!(@single $name [$($field),*]));
    };
    ($ty:ty { $($name:literal => [$($field:literal),* $(,)?]),+ $(,)? }) => {
        $crate::named_fields!(@impl [] $ty =>
            $crate::named_fields!(@group $($name [$($field),*])+));
    };
}

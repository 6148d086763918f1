/// Lifts submodule errors into `metroline::Error`, one variant each.
///
/// ```rust,ignore
/// metroline::impl_err! {
///     GraphError => Graph,
///     StoreError => Store,
/// }
/// ```
#[macro_export]
macro_rules! impl_err {
    ($($from:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$from> for $crate::Error {
                fn from(value: $from) -> Self {
                    $crate::Error::$variant(value)
                }
            }
        )+
    };
}

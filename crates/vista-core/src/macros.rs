/// Builds an [`options::Path`](crate::options::Path) from `/`-separated
/// identifiers, e.g. `path!(Builder / City / Name)`.
#[macro_export]
macro_rules! path {
    ( $( $step:ident )/+ ) => {
        $crate::options::Path::from_steps([ $( stringify!($step) ),+ ])
    };
}

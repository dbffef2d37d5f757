#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! pattern {
    (
        name: $name:expr,
        category: $category:expr,
        matcher: $pat:literal,
        eval: $eval:expr
        $(,)?
    ) => {{
        $crate::Pattern {
            name: $name,
            category: $category,
            matcher: $crate::regex!($pat),
            evaluate: {
                let eval: $crate::Eval = $eval;
                eval
            },
        }
    }};
}

#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! rule {
    (
        name: $name:expr,
        pattern: $pat:expr
        $(, requires: $requires:expr)?
        , response: $resp:expr
        $(,)?
    ) => {{
        $crate::RuleSpec {
            name: ($name).into(),
            pattern: ($pat).into(),
            response: ($resp).into(),
            requires: { $crate::InputFeatures::empty() $(| $requires)? },
        }
    }};
}

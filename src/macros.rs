// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression — works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Declare a lazily compiled CSS selector.
/// The literal is fixed at compile time, so a parse failure is a programming error.
#[macro_export]
macro_rules! selector {
    ($vis:vis $name:ident = $css:literal) => {
        $vis static $name: ::std::sync::LazyLock<::scraper::Selector> =
            ::std::sync::LazyLock::new(|| {
                ::scraper::Selector::parse($css).expect(concat!("bad selector: ", $css))
            });
    };
}

/// Declare a lazily compiled regex (same contract as `selector!`).
#[macro_export]
macro_rules! regex {
    ($vis:vis $name:ident = $re:literal) => {
        $vis static $name: ::std::sync::LazyLock<::regex::Regex> =
            ::std::sync::LazyLock::new(|| {
                ::regex::Regex::new($re).expect(concat!("bad regex: ", $re))
            });
    };
}

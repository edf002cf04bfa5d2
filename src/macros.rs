// src/macros.rs

/// Owned `String` from anything `String: From` accepts; `s!()` is empty.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate anything `AsRef<str>` into one `String`.
/// Used for docs URLs: `join!(base, slug)`.
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut out = ::std::string::String::new();
        out.push_str(::core::convert::AsRef::<str>::as_ref(&$first));
        $(
            out.push_str(::core::convert::AsRef::<str>::as_ref(&$rest));
        )+
        out
    }};
}

pub(crate) fn separated_by<T, F>(
    out: &mut String,
    values: impl IntoIterator<Item = T>,
    mut f: F,
    separator: &str,
) where
    F: FnMut(&mut String, T),
{
    let mut len = out.len();
    for v in values {
        if out.len() > len {
            out.push_str(separator);
        }
        len = out.len();
        f(out, v);
    }
}

pub(crate) fn floor_char_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Shortens long inputs (urls, queries) before they end up in error messages.
macro_rules! truncate_long {
    ($text:expr) => {
        format_args!(
            "{}{}",
            &$text[..$crate::util::floor_char_boundary(&$text, 497)].trim_end(),
            if $text.len() > 497 { "..." } else { "" },
        )
    };
}

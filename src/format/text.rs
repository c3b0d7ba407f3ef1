use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// One-line preview of a note: `prefix` followed by the content with
/// whitespace collapsed, cut to `max_width` display columns.
pub(crate) fn format_note_line(prefix: &str, content: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let prefix = format!("{}  ", prefix);
    let prefix_width = UnicodeWidthStr::width(prefix.as_str());
    if max_width <= prefix_width {
        return truncate_with_ellipsis(prefix.trim_end(), max_width);
    }

    let content_width = max_width - prefix_width;
    let truncated = truncate_with_ellipsis(&collapse_whitespace(content), content_width);
    format!("{}{}", prefix, truncated)
}

fn collapse_whitespace(content: &str) -> String {
    content.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate_with_ellipsis(value: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(value) <= max_width {
        return value.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let mut current_width = 0;
    let mut result = String::new();
    for ch in value.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if current_width + ch_width > max_width - 3 {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }
    result.push_str("...");
    result
}

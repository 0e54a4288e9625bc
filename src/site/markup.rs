use crate::prelude::*;

/// minimal escaping for text interpolated into markup
pub fn html_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// nav labels get their first letter capitalized
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// icon class for a social link, picked by label substring
pub fn icon_class(label: &str) -> &'static str {
    let name = label.to_lowercase();
    if name.contains("github") { "fa-brands fa-github" }
    else if name.contains("linkedin") { "fa-brands fa-linkedin" }
    else if name.contains("twitter") { "fa-brands fa-twitter" }
    else { "fa-solid fa-link" }
}

/// one span per tag
pub fn tag_spans(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| format!(r#"<span class="tag">{}</span>"#, html_escape(tag)))
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_the_usual_suspects() {
        assert_eq!(html_escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
        assert_eq!(html_escape("plain text"), "plain text");
    }

    #[test]
    fn capitalizes_only_the_first_letter() {
        assert_eq!(capitalize("home"), "Home");
        assert_eq!(capitalize("about me"), "About me");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn icon_classes_match_by_substring() {
        assert_eq!(icon_class("GitHub"), "fa-brands fa-github");
        assert_eq!(icon_class("My LinkedIn Page"), "fa-brands fa-linkedin");
        assert_eq!(icon_class("Twitter"), "fa-brands fa-twitter");
        assert_eq!(icon_class("Blog"), "fa-solid fa-link");
    }

    #[test]
    fn tags_become_spans_in_order() {
        let tags = vec!["rust".to_owned(), "wgpu".to_owned()];
        assert_eq!(
            tag_spans(&tags),
            r#"<span class="tag">rust</span><span class="tag">wgpu</span>"#
        );
    }
}

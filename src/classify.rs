use std::fmt;

/// Advisory tag inferred from the decompressed text, used only to pick a
/// default file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Html,
    Xml,
    Json,
    Css,
    Js,
    Txt,
}

impl ContentType {
    pub fn extension(self) -> &'static str {
        match self {
            ContentType::Html => "html",
            ContentType::Xml => "xml",
            ContentType::Json => "json",
            ContentType::Css => "css",
            ContentType::Js => "js",
            ContentType::Txt => "txt",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Guess what kind of text came out of the array. Checks run in order and the
/// first match wins, so a page opening with a doctype is html no matter what
/// scripts it embeds. Markup is matched at the start of the text, the css and
/// js keywords anywhere in it.
pub fn detect(content: &str) -> ContentType {
    let lower = content.trim().to_lowercase();

    if lower.starts_with("<!doctype html") || lower.starts_with("<html") {
        ContentType::Html
    } else if lower.starts_with("<?xml") {
        ContentType::Xml
    } else if lower.starts_with('{') || lower.starts_with('[') {
        ContentType::Json
    } else if lower.contains("body{") || lower.contains("html{") {
        ContentType::Css
    } else if lower.contains("function") || lower.contains("var ") {
        ContentType::Js
    } else {
        ContentType::Txt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_doctype_html() {
        assert_eq!(detect("<!DOCTYPE html><html></html>"), ContentType::Html);
    }

    #[test]
    fn detects_bare_html_tag() {
        assert_eq!(detect("<html><body></body></html>"), ContentType::Html);
    }

    #[test]
    fn detects_xml() {
        assert_eq!(detect("<?xml version=\"1.0\"?><root/>"), ContentType::Xml);
    }

    #[test]
    fn detects_json_object_and_array() {
        assert_eq!(detect("{\"key\": 1}"), ContentType::Json);
        assert_eq!(detect("[1, 2, 3]"), ContentType::Json);
    }

    #[test]
    fn detects_css_by_selector_block() {
        assert_eq!(detect("body{margin:0}"), ContentType::Css);
        assert_eq!(detect(".foo{color:red}\nhtml{height:100%}"), ContentType::Css);
    }

    #[test]
    fn detects_js_by_keyword() {
        assert_eq!(detect("function init() { return 1; }"), ContentType::Js);
        assert_eq!(detect("var x = 1;"), ContentType::Js);
    }

    #[test]
    fn falls_back_to_txt() {
        assert_eq!(detect("just some plain notes"), ContentType::Txt);
        assert_eq!(detect(""), ContentType::Txt);
    }

    #[test]
    fn html_wins_over_embedded_script() {
        let page = "<!doctype html><script>function f(){}</script>";
        assert_eq!(detect(page), ContentType::Html);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(detect("<HTML></HTML>"), ContentType::Html);
        assert_eq!(detect("BODY{margin:0}"), ContentType::Css);
    }

    #[test]
    fn leading_whitespace_is_ignored() {
        assert_eq!(detect("\n\t  <html></html>"), ContentType::Html);
        assert_eq!(detect("   [1]"), ContentType::Json);
    }
}

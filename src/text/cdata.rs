//! Removal of CDATA wrappers from XML-embedded script and style content

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// One wrapper style: an opening marker at the start of a line and a closing
/// marker at the very end of the text, each capturing adjacent whitespace
struct CdataForm {
    start: Regex,
    end: Regex,
}

static FORMS: Lazy<Vec<CdataForm>> = Lazy::new(|| {
    [
        // //<![CDATA[ ... //]]>
        (r"(?m)^(\s*)//\s*<!\[CDATA\[", r"//\s*\]\]>(\s*)\z"),
        // /*<![CDATA[*/ ... /*]]>*/
        (r"(?m)^(\s*)/\*\s*<!\[CDATA\[\s*\*/", r"/\*\s*\]\]>\s*\*/(\s*)\z"),
        // <![CDATA[ ... ]]>
        (r"(?m)^(\s*)<!\[CDATA\[", r"\]\]>(\s*)\z"),
    ]
    .iter()
    .filter_map(|(start, end)| {
        Some(CdataForm {
            start: Regex::new(start).ok()?,
            end: Regex::new(end).ok()?,
        })
    })
    .collect()
});

fn keep_whitespace(caps: &Captures<'_>) -> String {
    caps.get(1).map(|m| m.as_str()).unwrap_or("").to_string()
}

/// Strip the first matching CDATA wrapper form from `text`
///
/// Forms are tried in order (line-comment, block-comment, bare); only the
/// first form whose opening marker is found is applied.
pub fn strip_cdata(text: &str) -> String {
    for form in FORMS.iter() {
        if form.start.is_match(text) {
            let opened = form.start.replacen(text, 1, keep_whitespace);
            return form.end.replacen(&opened, 1, keep_whitespace).into_owned();
        }
    }
    text.to_string()
}

// src/html.rs
//
// Minimal HTML scanning for the dataset scraper: find elements by tag name,
// read an attribute, flatten an element to its text. No DOM, no parser
// recovery beyond "an unclosed element runs to the end of the document".

/// One element found in a document. Offsets are byte positions into it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element<'a> {
    pub name: String,
    /// `<div class="x">`, including the angle brackets
    pub open_tag: &'a str,
    pub inner: &'a str,
    pub start: usize,
}

impl Element<'_> {
    pub fn attr(&self, name: &str) -> Option<String> {
        attr_value(self.open_tag, name)
    }

    /// Whitespace-joined text of every text node inside the element.
    pub fn text(&self) -> String {
        text_content(self.inner)
    }
}

#[derive(Clone, Copy, Debug)]
enum Tag<'a> {
    Open { name: &'a str, start: usize, end: usize },
    Close { name: &'a str, start: usize },
}

/// Every element named in `names` (lowercase), in document order.
/// Nested matches are all returned.
pub fn elements<'a>(doc: &'a str, names: &[&str]) -> Vec<Element<'a>> {
    let tags = tokenize(doc);
    let mut out = Vec::new();

    for (i, tag) in tags.iter().enumerate() {
        let Tag::Open { name, start, end } = *tag else { continue };
        let lname = name.to_ascii_lowercase();
        if !names.contains(&lname.as_str()) {
            continue;
        }
        let close = matching_close(&tags[i + 1..], &lname).unwrap_or(doc.len());
        out.push(Element {
            name: lname,
            open_tag: &doc[start..end],
            inner: &doc[end..close.max(end)],
            start,
        });
    }
    out
}

/// Start offset of the close tag that balances an open `name` tag.
fn matching_close(rest: &[Tag<'_>], name: &str) -> Option<usize> {
    let mut depth = 1usize;
    for tag in rest {
        match *tag {
            Tag::Open { name: n, .. } if n.eq_ignore_ascii_case(name) => depth += 1,
            Tag::Close { name: n, start } if n.eq_ignore_ascii_case(name) => {
                depth -= 1;
                if depth == 0 {
                    return Some(start);
                }
            }
            _ => {}
        }
    }
    None
}

fn tokenize(doc: &str) -> Vec<Tag<'_>> {
    let bytes = doc.as_bytes();
    let mut tags = Vec::new();
    let mut pos = 0;

    while let Some(rel) = doc[pos..].find('<') {
        let start = pos + rel;
        let rest = &doc[start..];

        if rest.starts_with("<!--") {
            pos = rest.find("-->").map_or(doc.len(), |e| start + e + 3);
            continue;
        }
        let Some(gt) = rest.find('>') else { break };
        let end = start + gt + 1;

        let closing = bytes.get(start + 1) == Some(&b'/');
        let name_from = start + 1 + usize::from(closing);
        let name_len = doc[name_from..end]
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric())
            .count();
        if name_len == 0 {
            // "<!DOCTYPE", "< 3", stray brackets
            pos = start + 1;
            continue;
        }
        let name = &doc[name_from..name_from + name_len];

        if closing {
            tags.push(Tag::Close { name, start });
            pos = end;
            continue;
        }

        tags.push(Tag::Open { name, start, end });
        pos = end;

        // Raw-text elements: skip straight to their close tag
        if name.eq_ignore_ascii_case("script") || name.eq_ignore_ascii_case("style") {
            let lc = doc[end..].to_ascii_lowercase();
            let close_pat = format!("</{}", name.to_ascii_lowercase());
            pos = lc.find(&close_pat).map_or(doc.len(), |e| end + e);
        }
    }
    tags
}

/// Value of attribute `name` in an open tag, entity-decoded.
/// Unquoted values run to the next whitespace or `>`.
pub fn attr_value(open_tag: &str, name: &str) -> Option<String> {
    let lc = open_tag.to_ascii_lowercase();
    let name = name.to_ascii_lowercase();
    let bytes = lc.as_bytes();
    let mut from = 0;

    while let Some(rel) = lc[from..].find(&name) {
        let at = from + rel;
        from = at + name.len();

        let before_ok = at > 0 && bytes[at - 1].is_ascii_whitespace();
        let after = lc[from..].trim_start();
        if !before_ok || !after.starts_with('=') {
            continue;
        }

        let value_at = lc.len() - after[1..].trim_start().len();
        let raw = &open_tag[value_at..];
        let value = match raw.chars().next() {
            Some(q @ ('"' | '\'')) => raw[1..].split(q).next().unwrap_or(""),
            _ => raw
                .split(|c: char| c.is_whitespace() || c == '>')
                .next()
                .unwrap_or(""),
        };
        return Some(decode_entities(value));
    }
    None
}

/// Text nodes of an HTML fragment joined by single spaces. Tags separate
/// text nodes; comments and script/style bodies are dropped.
pub fn text_content(fragment: &str) -> String {
    let mut text = String::with_capacity(fragment.len());
    let mut pos = 0;

    for tag in tokenize(fragment) {
        let (start, end) = match tag {
            Tag::Open { start, end, .. } => (start, end),
            Tag::Close { start, .. } => {
                let end = fragment[start..].find('>').map_or(fragment.len(), |e| start + e + 1);
                (start, end)
            }
        };
        if start < pos {
            continue;
        }
        push_text(&mut text, &fragment[pos..start]);
        text.push(' ');
        pos = end;

        if let Tag::Open { name, .. } = tag {
            if name.eq_ignore_ascii_case("script") || name.eq_ignore_ascii_case("style") {
                let lc = fragment[end..].to_ascii_lowercase();
                let close_pat = format!("</{}", name.to_ascii_lowercase());
                pos = lc.find(&close_pat).map_or(fragment.len(), |e| end + e);
            }
        }
    }
    push_text(&mut text, &fragment[pos..]);

    normalize_ws(&decode_entities(&text))
}

/// Append a run of text, leaving out any comments it contains.
fn push_text(out: &mut String, run: &str) {
    let mut rest = run;
    while let Some(c) = rest.find("<!--") {
        out.push_str(&rest[..c]);
        out.push(' ');
        rest = rest[c..].find("-->").map_or("", |e| &rest[c + e + 3..]);
    }
    out.push_str(rest);
}

pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Named entities common in listing pages, plus numeric references.
/// Unknown entities are left as written.
pub fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let decoded = tail
            .find(';')
            .filter(|&semi| semi <= 10)
            .and_then(|semi| entity(&tail[1..semi]).map(|c| (c, semi)));
        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &tail[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let num = name.strip_prefix('#')?;
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}

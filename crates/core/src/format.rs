use regex::{Captures, Regex};

/// Convert LeetCode problem HTML into the markdown dialect understood by
/// the WeCom group robot.
///
/// The robot's renderer has no fenced-code support, so `<pre>` blocks are
/// rewritten as `> ` blockquote lines, which it displays in black.
/// `<br>` becomes a newline, `</p>` a paragraph break, every other tag is
/// stripped and HTML entities are decoded.
///
/// Pass order is load-bearing: code blocks are rewritten before generic
/// tag stripping so their content is never treated as markup.
pub fn html_to_markdown(html: &str) -> String {
    if html.is_empty() {
        return String::new();
    }

    // Code blocks become quoted lines, set off by a newline on each side.
    let pre = Regex::new(r"(?si)<pre[^>]*>(.*?)</pre\s*>").unwrap();
    let text = pre.replace_all(html, |caps: &Captures| {
        let code = caps[1].trim_matches('\n');
        let quoted: Vec<String> = code.lines().map(|line| format!("> {line}")).collect();
        format!("\n{}\n", quoted.join("\n"))
    });

    let br = Regex::new(r"(?i)<br\s*/?>").unwrap();
    let text = br.replace_all(&text, "\n");

    let close_p = Regex::new(r"(?i)</p\s*>").unwrap();
    let text = close_p.replace_all(&text, "\n\n");

    // Remaining tags, including spans across newlines. An unmatched '<'
    // never closes, so it stays in the output as literal text.
    let tag = Regex::new(r"(?s)<.*?>").unwrap();
    let text = tag.replace_all(&text, "");

    let text = html_escape::decode_html_entities(&text);

    let blank_runs = Regex::new(r"\n{3,}").unwrap();
    let text = blank_runs.replace_all(&text, "\n\n");

    let text = text
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n");

    text.trim().to_string()
}

//! SVG export of a laid-out cloud.

use crate::color::{Rgba, SHADOW};
use crate::layout::WordCloud;

impl WordCloud {
    /// Renders the cloud as a standalone SVG document over `background`.
    pub fn to_svg(&self, background: Rgba) -> String {
        let width = self.size.width();
        let height = self.size.height();
        let mut svg = String::with_capacity(256 + self.words.len() * 160);

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        ));
        svg.push_str(&format!(
            r#"<rect width="100%" height="100%" fill="{}"/>"#,
            background.to_hex()
        ));
        svg.push_str(&format!(
            r#"<style>text{{font-family:'{}',sans-serif;font-weight:bold}}</style>"#,
            escape_xml(&self.font_family)
        ));

        for word in &self.words {
            let text = escape_xml(&word.text);
            svg.push_str(&text_element(word.x + 1, word.y + 1, word.font_size, SHADOW, &text));
            svg.push_str(&text_element(word.x, word.y, word.font_size, word.color, &text));
        }

        svg.push_str("</svg>");
        svg
    }
}

fn text_element(x: i32, y: i32, font_size: u32, color: Rgba, text: &str) -> String {
    if color.a == u8::MAX {
        format!(
            r#"<text x="{x}" y="{y}" font-size="{font_size}" fill="{}">{text}</text>"#,
            color.to_hex()
        )
    } else {
        format!(
            r#"<text x="{x}" y="{y}" font-size="{font_size}" fill="{}" fill-opacity="{:.3}">{text}</text>"#,
            color.to_hex(),
            color.opacity()
        )
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

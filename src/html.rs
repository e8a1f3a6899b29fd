//! HTML projection
//!
//! Maps each buffer row to a `<div>` containing one `<span>` per chunk,
//! in order, followed by a newline text node. Span presentation is a
//! font-weight style plus a class list derived from the chunk's colors;
//! stylesheets bind the `ansi-*` classes to a palette.
//!
//! [`render`] is pure. [`Renderer`] memoizes per row: lines compare
//! cheaply and the buffer only ever changes by whole-row replacement, so
//! an unchanged row reuses its previous markup.

use ansilog_core::{Chunk, Color, Line, Model, Style};

/// Render the whole model.
pub fn render(model: &Model) -> String {
    model.buffer().lines().iter().map(render_line).collect()
}

/// Render a single row element.
pub fn render_line(line: &Line) -> String {
    let mut out = String::from("<div>");
    for chunk in line.chunks() {
        render_chunk(&mut out, chunk);
    }
    out.push('\n');
    out.push_str("</div>");
    out
}

fn render_chunk(out: &mut String, chunk: &Chunk) {
    let weight = if chunk.style.bold { "bold" } else { "normal" };
    let classes = span_classes(&chunk.style);

    out.push_str("<span style=\"font-weight: ");
    out.push_str(weight);
    out.push('"');
    if !classes.is_empty() {
        out.push_str(" class=\"");
        out.push_str(&classes.join(" "));
        out.push('"');
    }
    out.push('>');
    escape_into(out, &chunk.text);
    out.push_str("</span>");
}

/// The color class list for one span. Inversion swaps the roles before
/// class derivation; bold promotes standard colors to their bright
/// classes.
fn span_classes(style: &Style) -> Vec<String> {
    let (fg, bg) = if style.inverted {
        (style.background, style.foreground)
    } else {
        (style.foreground, style.background)
    };

    let mut classes = Vec::new();
    color_classes(&mut classes, fg, "-fg", style.bold);
    color_classes(&mut classes, bg, "-bg", style.bold);
    classes
}

fn color_classes(classes: &mut Vec<String>, color: Option<Color>, suffix: &str, bold: bool) {
    match color {
        None => {
            if bold {
                classes.push("ansi-bold".to_string());
            }
        }
        Some(color) if color.is_bright() || bold => {
            classes.push(format!("ansi-bright-{}{}", color.name(), suffix));
        }
        Some(color) => {
            classes.push(format!("ansi-{}{}", color.name(), suffix));
        }
    }
}

fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

/// A per-row memoizing renderer.
///
/// Keeps the last rendered markup per row, keyed on line equality.
/// Callers that re-render after every `update` pay only for the rows
/// that changed.
#[derive(Debug, Default)]
pub struct Renderer {
    cache: Vec<(Line, String)>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, model: &Model) -> String {
        let lines = model.buffer().lines();
        self.cache.truncate(lines.len());

        let mut out = String::new();
        for (row, line) in lines.iter().enumerate() {
            let fresh = self
                .cache
                .get(row)
                .map_or(true, |(cached, _)| cached != line);
            if fresh {
                let html = render_line(line);
                if row < self.cache.len() {
                    self.cache[row] = (line.clone(), html);
                } else {
                    self.cache.push((line.clone(), html));
                }
            }
            out.push_str(&self.cache[row].1);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ansilog_core::LineDiscipline;

    fn model_of(input: &str) -> Model {
        let mut model = Model::new(LineDiscipline::Cooked);
        model.update(input);
        model
    }

    #[test]
    fn test_render_plain_row() {
        let html = render(&model_of("hi"));
        assert_eq!(
            html,
            "<div><span style=\"font-weight: normal\">hi</span>\n</div>"
        );
    }

    #[test]
    fn test_render_standard_color() {
        let html = render(&model_of("\u{1b}[31merr"));
        assert!(html.contains("class=\"ansi-red-fg\""));
        assert!(html.contains("font-weight: normal"));
    }

    #[test]
    fn test_render_bold_promotes_to_bright() {
        let html = render(&model_of("\u{1b}[1;31merr"));
        // the colorless background side contributes ansi-bold
        assert!(html.contains("class=\"ansi-bright-red-fg ansi-bold\""));
        assert!(html.contains("font-weight: bold"));
    }

    #[test]
    fn test_render_bright_color_ignores_bold() {
        let html = render(&model_of("\u{1b}[91merr"));
        assert!(html.contains("class=\"ansi-bright-red-fg\""));
        assert!(html.contains("font-weight: normal"));
    }

    #[test]
    fn test_render_bold_without_color() {
        let html = render(&model_of("\u{1b}[1mx"));
        // one emission per side
        assert!(html.contains("class=\"ansi-bold ansi-bold\""));
    }

    #[test]
    fn test_render_background_class() {
        let html = render(&model_of("\u{1b}[44mx"));
        assert!(html.contains("class=\"ansi-blue-bg\""));
    }

    #[test]
    fn test_render_inverted_swaps_colors() {
        let html = render(&model_of("\u{1b}[7;31;44mx"));
        assert!(html.contains("class=\"ansi-blue-fg ansi-red-bg\""));
    }

    #[test]
    fn test_render_escapes_markup() {
        let html = render(&model_of("<b> & \"q\""));
        assert!(html.contains("&lt;b&gt; &amp; &quot;q&quot;"));
    }

    #[test]
    fn test_render_rows_in_order() {
        let html = render(&model_of("one\ntwo"));
        let first = html.find("one").unwrap();
        let second = html.find("two").unwrap();
        assert!(first < second);
        assert_eq!(html.matches("<div>").count(), 2);
    }

    #[test]
    fn test_memoized_renderer_matches_pure_render() {
        let mut renderer = Renderer::new();
        let mut model = Model::new(LineDiscipline::Cooked);

        model.update("a\nb\nc");
        assert_eq!(renderer.render(&model), render(&model));

        // touch only the last row; cached rows must still be correct
        model.update("!");
        assert_eq!(renderer.render(&model), render(&model));

        // rewrite an earlier row via a cursor jump
        model.update("\u{1b}[1;1HX");
        assert_eq!(renderer.render(&model), render(&model));
    }
}

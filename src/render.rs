//! # Rendering
//!
//! Turns a widget list into terminal lines.
//!
//! A frame is laid out in three blocks: the header (question and answer), the body
//! (the prompt-specific widgets) and the footer (validation errors and key hints).
//! Lines are word-wrapped to the terminal width, measured in display columns.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::{
    constants::{
        ANSWER_PREFIX, BELL, CODE_BLANK, EMPTY_ANSWER, ERROR_PREFIX, HIDE_MASK_CHAR,
        NAVIGATION_HEADING, QUESTION_PREFIX,
    },
    widget::{OptionItem, Widget},
};

/// Renders widgets for a terminal of the given size.
pub trait Formatter {
    fn format(&self, width: u16, height: u16, widgets: &[Widget]) -> Vec<String>;
}

/// The default plain-text formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleFormatter {
    /// Emit the terminal bell when an alert is present.
    pub bell: bool,
}

impl Default for SimpleFormatter {
    fn default() -> Self {
        Self { bell: true }
    }
}

impl SimpleFormatter {
    pub const fn new(bell: bool) -> Self {
        Self { bell }
    }
}

impl Formatter for SimpleFormatter {
    fn format(&self, width: u16, _height: u16, widgets: &[Widget]) -> Vec<String> {
        let width = usize::from(width);
        let mut question = Vec::new();
        let mut answer = Vec::new();
        let mut body = Vec::new();
        let mut footer = Vec::new();
        let mut alert = false;

        for widget in widgets {
            match widget {
                Widget::Alert => alert = true,
                Widget::Question(content) => {
                    question.extend(fill(content, QUESTION_PREFIX, width));
                }
                Widget::Answer(content) => {
                    if content.is_empty() {
                        answer.push(format!("{ANSWER_PREFIX}{EMPTY_ANSWER}"));
                    } else {
                        answer.extend(fill(content, ANSWER_PREFIX, width));
                    }
                }
                Widget::Error(content) => footer.extend(fill(content, ERROR_PREFIX, width)),
                Widget::Navigation(hints) => {
                    footer.extend(fill(NAVIGATION_HEADING, "", width));
                    for (key, action) in hints {
                        footer.extend(fill(&format!("{key}: {action}"), "  ", width));
                    }
                }
                Widget::Text {
                    content,
                    placeholder,
                    hide,
                } => {
                    let shown = match placeholder {
                        Some(placeholder) if content.is_empty() => format!("(e.g.: {placeholder})"),
                        _ if *hide => HIDE_MASK_CHAR.to_string().repeat(content.chars().count()),
                        _ => content.clone(),
                    };
                    body.extend(fill(&shown, "", width));
                }
                Widget::Confirm { default } => {
                    let default = if *default { 'y' } else { 'n' };
                    body.extend(fill(&format!("y/n [{default}]"), "", width));
                }
                Widget::Integer(value) => body.extend(fill(&format!("+/- {value}"), "", width)),
                Widget::Options(options) => {
                    for option in options {
                        body.extend(fill(&option.content, &option_marker(option), width));
                    }
                }
                Widget::SortableOptions(options) => {
                    for option in options {
                        body.extend(fill(&option.content, sortable_marker(option), width));
                    }
                }
                Widget::Code(digits) => {
                    let code: Vec<String> = digits
                        .iter()
                        .map(|digit| digit.map_or_else(|| CODE_BLANK.to_string(), |d| d.to_string()))
                        .collect();
                    body.extend(fill(&code.join(" "), "", width));
                }
            }
        }

        let mut lines = question;
        lines.extend(answer);
        lines.extend(body);
        lines.extend(footer);

        if alert && self.bell {
            match lines.first_mut() {
                Some(first) => first.insert(0, BELL),
                None => lines.push(BELL.to_string()),
            }
        }
        lines
    }
}

/// `x` when selected, `>` when hovered.
fn option_marker(option: &OptionItem) -> String {
    let select = if option.is_selected() { 'x' } else { ' ' };
    let hover = if option.is_hovered() { '>' } else { ' ' };
    format!("{select}{hover} ")
}

/// `|` when picked up, otherwise `>` when hovered.
fn sortable_marker(option: &OptionItem) -> &'static str {
    if option.is_selected() {
        "| "
    } else if option.is_hovered() {
        "> "
    } else {
        "  "
    }
}

/// Greedy word wrap; `indent` precedes the first line only.
///
/// Explicit newlines start a new line. Words wider than `width` are broken
/// between characters.
fn fill(text: &str, indent: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for (i, paragraph) in text.split('\n').enumerate() {
        let mut line = if i == 0 {
            indent.to_string()
        } else {
            String::new()
        };
        let mut line_width = line.width();
        let mut has_word = false;

        for word in paragraph.split(' ').filter(|word| !word.is_empty()) {
            if has_word && line_width + 1 + word.width() > width {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
                has_word = false;
            }
            if has_word {
                line.push(' ');
                line_width += 1;
            }
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if line_width > 0 && line_width + ch_width > width {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(ch);
                line_width += ch_width;
            }
            has_word = true;
        }
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::option_list;

    fn render(widgets: &[Widget]) -> Vec<String> {
        SimpleFormatter::default().format(80, 24, widgets)
    }

    #[test]
    fn test_question_and_answer() {
        let lines = render(&[
            Widget::Question("Continue?".into()),
            Widget::Answer("yes".into()),
        ]);
        assert_eq!(lines, vec!["? Continue?", "> yes"]);
    }

    #[test]
    fn test_empty_answer() {
        let lines = render(&[Widget::Question("Name".into()), Widget::Answer(String::new())]);
        assert_eq!(lines[1], "> (none)");
    }

    #[test]
    fn test_alert_rings_bell_on_first_line() {
        let lines = render(&[Widget::Question("Q".into()), Widget::Alert, Widget::Integer(3)]);
        assert_eq!(lines, vec!["\x07? Q", "+/- 3"]);

        let quiet = SimpleFormatter::new(false).format(80, 24, &[Widget::Alert, Widget::Integer(3)]);
        assert_eq!(quiet, vec!["+/- 3"]);
    }

    #[test]
    fn test_confirm_shows_default() {
        assert_eq!(render(&[Widget::Confirm { default: false }]), vec!["y/n [n]"]);
    }

    #[test]
    fn test_text_masked_and_placeholder() {
        let hidden = Widget::Text {
            content: "hunter2".into(),
            placeholder: None,
            hide: true,
        };
        assert_eq!(render(&[hidden]), vec!["*******"]);

        let empty = Widget::Text {
            content: String::new(),
            placeholder: Some("Jane".into()),
            hide: false,
        };
        assert_eq!(render(&[empty]), vec!["(e.g.: Jane)"]);
    }

    #[test]
    fn test_options_markers() {
        let mut options = option_list(["a", "b", "c"]);
        options[1].toggle_select();
        let lines = render(&[Widget::Options(options)]);
        assert_eq!(lines, vec![" > a", "x  b", "   c"]);
    }

    #[test]
    fn test_sortable_markers() {
        let mut options = option_list(["a", "b"]);
        let lines = render(&[Widget::SortableOptions(options.clone())]);
        assert_eq!(lines, vec!["> a", "  b"]);

        options[0].toggle_select();
        let lines = render(&[Widget::SortableOptions(options)]);
        assert_eq!(lines, vec!["| a", "  b"]);
    }

    #[test]
    fn test_code_blanks() {
        let lines = render(&[Widget::Code(vec![Some(1), Some(2), None, None])]);
        assert_eq!(lines, vec!["1 2 _ _"]);
    }

    #[test]
    fn test_footer_follows_body() {
        let lines = render(&[
            Widget::navigation([("ENTER", "done")]),
            Widget::Error("too short".into()),
            Widget::Question("Q".into()),
            Widget::Integer(0),
        ]);
        assert_eq!(lines, vec!["? Q", "+/- 0", "NAVIGATION", "  ENTER: done", "! too short"]);
    }

    #[test]
    fn test_every_line_fits_narrow_terminal() {
        let lines = SimpleFormatter::default().format(
            10,
            24,
            &[
                Widget::Question("Continue?".into()),
                Widget::Confirm { default: true },
                Widget::Integer(-1_234_567_890),
                Widget::Code(vec![Some(1), Some(2), Some(3), None, None, None]),
                Widget::navigation([("CTRL + H", "show text")]),
            ],
        );
        assert!(lines.iter().all(|line| line.width() <= 10), "{lines:?}");
        assert!(lines.contains(&"  CTRL +".to_string()), "{lines:?}");
    }

    #[test]
    fn test_fill_wraps_words() {
        assert_eq!(fill("aaa bbb ccc", "? ", 9), vec!["? aaa bbb", "ccc"]);
    }

    #[test]
    fn test_fill_breaks_long_words() {
        assert_eq!(fill("abcdefgh", "", 3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn test_fill_measures_wide_chars() {
        // Each CJK character takes two columns
        assert_eq!(fill("日本語", "", 4), vec!["日本", "語"]);
    }

    #[test]
    fn test_fill_keeps_newlines() {
        assert_eq!(fill("a\nb", "> ", 80), vec!["> a", "b"]);
    }
}

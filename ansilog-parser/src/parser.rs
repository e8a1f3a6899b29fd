//! ANSI escape sequence parser.
//!
//! Translates a stream of code units into a sequence of [`Action`]s. The
//! parser is designed to:
//! - Handle arbitrary chunk boundaries (streaming), including cuts
//!   mid-escape
//! - Be deterministic
//! - Not crash on malformed input
//!
//! Resumption works by hand-back rather than by parser state: when the
//! input ends inside an escape sequence, the unterminated tail is emitted
//! as a trailing [`Action::Remainder`] and the caller prepends it to the
//! next chunk. `parse` itself is a pure function.
//!
//! References:
//! - ECMA-48: https://ecma-international.org/wp-content/uploads/ECMA-48_5th_edition_june_1991.pdf

use crate::action::{Action, EraseMode};
use crate::color::Color;

const ESC: char = '\u{1b}';

/// Outcome of scanning one escape sequence at the head of the input.
enum Escape {
    /// A recognized CSI sequence and the actions it decodes to
    Csi { consumed: usize, emitted: Vec<Action> },
    /// A syntactically complete but unrecognized or invalid sequence
    Dropped { consumed: usize },
    /// The input ended before the sequence terminated
    Incomplete,
    /// ESC not followed by `[`; only the ESC itself is consumed
    Bare,
}

/// Parse one chunk of input into an ordered list of actions.
///
/// Consecutive printable code units coalesce into a single
/// [`Action::Print`]. An unterminated escape at the end of the input is
/// emitted as a trailing [`Action::Remainder`].
pub fn parse(input: &str) -> Vec<Action> {
    let mut actions = Vec::new();
    let mut pos = 0;
    let mut run_start = 0;

    while pos < input.len() {
        let ch = match input[pos..].chars().next() {
            Some(ch) => ch,
            None => break,
        };
        match ch {
            '\r' => {
                flush_print(&mut actions, &input[run_start..pos]);
                actions.push(Action::CarriageReturn);
                pos += 1;
                run_start = pos;
            }
            '\n' => {
                flush_print(&mut actions, &input[run_start..pos]);
                actions.push(Action::Linebreak);
                pos += 1;
                run_start = pos;
            }
            ESC => {
                flush_print(&mut actions, &input[run_start..pos]);
                match scan_escape(&input[pos..]) {
                    Escape::Csi { consumed, emitted } => {
                        actions.extend(emitted);
                        pos += consumed;
                    }
                    Escape::Dropped { consumed } => {
                        pos += consumed;
                    }
                    Escape::Incomplete => {
                        actions.push(Action::Remainder(input[pos..].to_string()));
                        pos = input.len();
                    }
                    Escape::Bare => {
                        pos += 1;
                    }
                }
                run_start = pos;
            }
            _ => {
                pos += ch.len_utf8();
            }
        }
    }

    flush_print(&mut actions, &input[run_start..]);
    actions
}

fn flush_print(actions: &mut Vec<Action>, text: &str) {
    if !text.is_empty() {
        actions.push(Action::Print(text.to_string()));
    }
}

/// Scan the escape sequence at the head of `s` (which starts with ESC).
fn scan_escape(s: &str) -> Escape {
    let mut chars = s.char_indices();
    chars.next();

    match chars.next() {
        None => return Escape::Incomplete,
        Some((_, '[')) => {}
        Some(_) => return Escape::Bare,
    }

    // ESC and `[` are each one byte
    let params_start = 2;
    // a parameter byte outside digits and `;` poisons the sequence, but
    // consumption still runs through the terminator (ECMA-48 final
    // bytes are 0x40-0x7E)
    let mut invalid = false;
    for (idx, ch) in chars {
        match ch {
            '0'..='9' | ';' if !invalid => {}
            '\u{40}'..='\u{7e}' => {
                let consumed = idx + ch.len_utf8();
                if invalid {
                    log::debug!("dropping malformed CSI sequence {:?}", &s[..consumed]);
                    return Escape::Dropped { consumed };
                }
                let raw = &s[params_start..idx];
                return match dispatch(raw, ch) {
                    Some(emitted) => Escape::Csi { consumed, emitted },
                    None => {
                        log::debug!("dropping unrecognized CSI sequence {:?}", &s[..consumed]);
                        Escape::Dropped { consumed }
                    }
                };
            }
            _ => {
                invalid = true;
            }
        }
    }

    Escape::Incomplete
}

/// Decode the parameter text of a CSI sequence. Items are `None` when the
/// text between separators is empty; accumulation saturates so digit runs
/// cannot overflow.
fn parse_params(raw: &str) -> Vec<Option<usize>> {
    raw.split(';')
        .map(|item| {
            if item.is_empty() {
                None
            } else {
                Some(item.chars().fold(0usize, |acc, digit| {
                    acc.saturating_mul(10)
                        .saturating_add(digit as usize - '0' as usize)
                }))
            }
        })
        .collect()
}

/// Map a complete CSI sequence to actions. `None` drops the sequence.
fn dispatch(raw: &str, terminator: char) -> Option<Vec<Action>> {
    let params = parse_params(raw);
    let nth = |index: usize, default: usize| params.get(index).copied().flatten().unwrap_or(default);

    match terminator {
        'm' => sgr(&params, raw),
        'A' => Some(vec![Action::CursorUp(nth(0, 1))]),
        'B' => Some(vec![Action::CursorDown(nth(0, 1))]),
        'C' => Some(vec![Action::CursorForward(nth(0, 1))]),
        'D' => Some(vec![Action::CursorBack(nth(0, 1))]),
        'H' | 'f' => Some(vec![Action::CursorPosition(nth(0, 1), nth(1, 1))]),
        'G' => Some(vec![Action::CursorColumn(nth(0, 1))]),
        's' => Some(vec![Action::SaveCursorPosition]),
        'u' => Some(vec![Action::RestoreCursorPosition]),
        'K' => match nth(0, 0) {
            0 => Some(vec![Action::EraseLine(EraseMode::ToEnd)]),
            1 => Some(vec![Action::EraseLine(EraseMode::ToBeginning)]),
            2 => Some(vec![Action::EraseLine(EraseMode::All)]),
            _ => None,
        },
        _ => None,
    }
}

/// Decode an SGR parameter list. An empty list or an empty item is
/// invalid and drops the whole sequence; unknown codes are ignored.
fn sgr(params: &[Option<usize>], raw: &str) -> Option<Vec<Action>> {
    if raw.is_empty() {
        return None;
    }

    let mut actions = Vec::new();
    for item in params {
        let code = (*item)?;
        match code {
            0 => actions.extend(reset_all()),
            1 => actions.push(Action::SetBold(true)),
            2 => actions.push(Action::SetFaint(true)),
            3 => actions.push(Action::SetItalic(true)),
            4 => actions.push(Action::SetUnderline(true)),
            7 => actions.push(Action::SetInverted(true)),
            30..=37 => actions.push(Action::SetForeground(Color::from_sgr_normal(code - 30))),
            40..=47 => actions.push(Action::SetBackground(Color::from_sgr_normal(code - 40))),
            90..=97 => actions.push(Action::SetForeground(Color::from_sgr_bright(code - 90))),
            100..=107 => actions.push(Action::SetBackground(Color::from_sgr_bright(code - 100))),
            _ => {}
        }
    }
    Some(actions)
}

fn reset_all() -> [Action; 7] {
    [
        Action::SetForeground(None),
        Action::SetBackground(None),
        Action::SetBold(false),
        Action::SetFaint(false),
        Action::SetItalic(false),
        Action::SetUnderline(false),
        Action::SetInverted(false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_coalesces() {
        let actions = parse("hello");
        assert_eq!(actions, vec![Action::Print("hello".to_string())]);
    }

    #[test]
    fn test_control_characters() {
        let actions = parse("a\r\nb");
        assert_eq!(
            actions,
            vec![
                Action::Print("a".to_string()),
                Action::CarriageReturn,
                Action::Linebreak,
                Action::Print("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_sgr_colors() {
        let actions = parse("\u{1b}[31;44mx");
        assert_eq!(
            actions,
            vec![
                Action::SetForeground(Some(Color::Red)),
                Action::SetBackground(Some(Color::Blue)),
                Action::Print("x".to_string()),
            ]
        );
    }

    #[test]
    fn test_sgr_bright_colors() {
        let actions = parse("\u{1b}[90m\u{1b}[107m");
        assert_eq!(
            actions,
            vec![
                Action::SetForeground(Some(Color::BrightBlack)),
                Action::SetBackground(Some(Color::BrightWhite)),
            ]
        );
    }

    #[test]
    fn test_sgr_reset_emits_all_defaults() {
        let actions = parse("\u{1b}[0m");
        assert_eq!(
            actions,
            vec![
                Action::SetForeground(None),
                Action::SetBackground(None),
                Action::SetBold(false),
                Action::SetFaint(false),
                Action::SetItalic(false),
                Action::SetUnderline(false),
                Action::SetInverted(false),
            ]
        );
    }

    #[test]
    fn test_sgr_flags() {
        let actions = parse("\u{1b}[1;2;3;4;7m");
        assert_eq!(
            actions,
            vec![
                Action::SetBold(true),
                Action::SetFaint(true),
                Action::SetItalic(true),
                Action::SetUnderline(true),
                Action::SetInverted(true),
            ]
        );
    }

    #[test]
    fn test_sgr_unknown_codes_ignored() {
        let actions = parse("\u{1b}[5;31mx");
        assert_eq!(
            actions,
            vec![
                Action::SetForeground(Some(Color::Red)),
                Action::Print("x".to_string()),
            ]
        );
    }

    #[test]
    fn test_sgr_empty_params_dropped() {
        assert_eq!(parse("\u{1b}[m"), vec![]);
        assert_eq!(
            parse("\u{1b}[;31mok"),
            vec![Action::Print("ok".to_string())]
        );
    }

    #[test]
    fn test_cursor_commands() {
        assert_eq!(parse("\u{1b}[5A"), vec![Action::CursorUp(5)]);
        assert_eq!(parse("\u{1b}[B"), vec![Action::CursorDown(1)]);
        assert_eq!(parse("\u{1b}[12C"), vec![Action::CursorForward(12)]);
        assert_eq!(parse("\u{1b}[2D"), vec![Action::CursorBack(2)]);
    }

    #[test]
    fn test_cursor_position_defaults() {
        assert_eq!(parse("\u{1b}[H"), vec![Action::CursorPosition(1, 1)]);
        assert_eq!(parse("\u{1b}[;5H"), vec![Action::CursorPosition(1, 5)]);
        assert_eq!(parse("\u{1b}[10;20f"), vec![Action::CursorPosition(10, 20)]);
    }

    #[test]
    fn test_cursor_column() {
        assert_eq!(parse("\u{1b}[7G"), vec![Action::CursorColumn(7)]);
        assert_eq!(parse("\u{1b}[G"), vec![Action::CursorColumn(1)]);
    }

    #[test]
    fn test_save_restore() {
        assert_eq!(
            parse("\u{1b}[s\u{1b}[u"),
            vec![Action::SaveCursorPosition, Action::RestoreCursorPosition]
        );
    }

    #[test]
    fn test_erase_line_modes() {
        assert_eq!(parse("\u{1b}[K"), vec![Action::EraseLine(EraseMode::ToEnd)]);
        assert_eq!(
            parse("\u{1b}[0K"),
            vec![Action::EraseLine(EraseMode::ToEnd)]
        );
        assert_eq!(
            parse("\u{1b}[1K"),
            vec![Action::EraseLine(EraseMode::ToBeginning)]
        );
        assert_eq!(parse("\u{1b}[2K"), vec![Action::EraseLine(EraseMode::All)]);
        assert_eq!(parse("\u{1b}[3K"), vec![]);
    }

    #[test]
    fn test_unknown_csi_dropped() {
        let actions = parse("a\u{1b}[2Jb");
        assert_eq!(
            actions,
            vec![
                Action::Print("a".to_string()),
                Action::Print("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_invalid_param_bytes_drop_through_terminator() {
        // the private-mode marker poisons the sequence; everything
        // through the terminator goes with it
        let actions = parse("a\u{1b}[?25hb");
        assert_eq!(
            actions,
            vec![
                Action::Print("a".to_string()),
                Action::Print("b".to_string()),
            ]
        );

        // colon subparameters are outside the recognized subset
        let actions = parse("x\u{1b}[38:2:255:0:0my");
        assert_eq!(
            actions,
            vec![
                Action::Print("x".to_string()),
                Action::Print("y".to_string()),
            ]
        );
    }

    #[test]
    fn test_esc_without_bracket_dropped() {
        let actions = parse("a\u{1b}cb");
        assert_eq!(
            actions,
            vec![
                Action::Print("a".to_string()),
                Action::Print("cb".to_string()),
            ]
        );
    }

    #[test]
    fn test_remainder_lone_esc() {
        let actions = parse("abc\u{1b}");
        assert_eq!(
            actions,
            vec![
                Action::Print("abc".to_string()),
                Action::Remainder("\u{1b}".to_string()),
            ]
        );
    }

    #[test]
    fn test_remainder_incomplete_csi() {
        let actions = parse("abc\u{1b}[31");
        assert_eq!(
            actions,
            vec![
                Action::Print("abc".to_string()),
                Action::Remainder("\u{1b}[31".to_string()),
            ]
        );
    }

    #[test]
    fn test_chunk_boundary_resumes() {
        let first = parse("abc\u{1b}[2");
        assert_eq!(
            first.last(),
            Some(&Action::Remainder("\u{1b}[2".to_string()))
        );

        let tail = match first.last() {
            Some(Action::Remainder(tail)) => tail.clone(),
            _ => unreachable!(),
        };
        let second = parse(&format!("{}Dxx", tail));
        assert_eq!(
            second,
            vec![Action::CursorBack(2), Action::Print("xx".to_string())]
        );
    }

    #[test]
    fn test_params_saturate() {
        let actions = parse("\u{1b}[99999999999999999999999999A");
        assert_eq!(actions, vec![Action::CursorUp(usize::MAX)]);
    }

    #[test]
    fn test_utf8_print() {
        let actions = parse("héllo \u{1b}[32m世界");
        assert_eq!(
            actions,
            vec![
                Action::Print("héllo ".to_string()),
                Action::SetForeground(Some(Color::Green)),
                Action::Print("世界".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse(""), vec![]);
    }
}

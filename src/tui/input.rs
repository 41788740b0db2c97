use crossterm::event::{Event, KeyCode, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Raw-mode line editor shared by the text and numeric inputs.
///
/// Returns None when cancelled with Esc or Ctrl+Q. Ctrl+C exits the
/// process after restoring the terminal.
fn line_editor(prompt: &str, initial_value: &str, digits_only: bool) -> Option<String> {
    let mut input = initial_value.to_string();
    let mut cursor_pos = input.len() + 1; // 1-based: 1 = before first char
    let mut cancelled = false;

    // RawModeGuard ensures raw mode is disabled even if we return early
    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(input), // Can't enable raw mode, return default
    };

    print!("{}: {}", prompt, input);
    flush();

    let mut last_len = input.len();

    loop {
        match read() {
            Ok(Event::Key(key_event)) => {
                match key_event.code {
                    KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                        // Reset terminal BEFORE exit since process::exit doesn't run destructors
                        reset_terminal();
                        println!();
                        std::process::exit(0);
                    }
                    KeyCode::Char('q') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                        cancelled = true;
                        break;
                    }
                    KeyCode::Esc => {
                        cancelled = true;
                        break;
                    }
                    KeyCode::Char('u') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                        input.clear();
                        cursor_pos = 1;
                    }
                    KeyCode::Enter => {
                        break;
                    }
                    KeyCode::Backspace => {
                        if cursor_pos > 1 {
                            cursor_pos -= 1;
                            input.remove(cursor_pos - 1);
                        }
                    }
                    KeyCode::Delete => {
                        if cursor_pos <= input.len() {
                            input.remove(cursor_pos - 1);
                        }
                    }
                    KeyCode::Left => {
                        if cursor_pos > 1 {
                            cursor_pos -= 1;
                        }
                    }
                    KeyCode::Right => {
                        if cursor_pos < input.len() + 1 {
                            cursor_pos += 1;
                        }
                    }
                    KeyCode::Home => {
                        cursor_pos = 1;
                    }
                    KeyCode::End => {
                        cursor_pos = input.len() + 1;
                    }
                    KeyCode::Char(c) if !digits_only || c.is_ascii_digit() => {
                        input.insert(cursor_pos - 1, c);
                        cursor_pos += 1;
                    }
                    _ => {}
                }

                // Redraw the input line
                print!("\r{}: {}", prompt, " ".repeat(last_len + 1));
                print!("\r{}: {}", prompt, input);
                flush();
                last_len = input.len();

                // Move cursor to correct position
                print!("\x1b[{}G", prompt.len() + 2 + cursor_pos);
                flush();
            }
            Err(_) => break,
            _ => {}
        }
    }

    // Explicitly drop guard to disable raw mode BEFORE println
    drop(_guard);
    println!();
    if cancelled { None } else { Some(input) }
}

/// Get a line of text input with basic editing.
pub fn get_editable_input(prompt: &str, initial_value: &str) -> Option<String> {
    line_editor(prompt, initial_value, false)
}

/// Get numeric input (digits only). Returns None when cancelled or left
/// empty, so the caller keeps its current value.
pub fn get_numeric_input(prompt: &str, initial_value: usize) -> Option<usize> {
    let initial = if initial_value > 0 {
        initial_value.to_string()
    } else {
        String::new()
    };

    let digits = line_editor(prompt, &initial, true)?;
    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}

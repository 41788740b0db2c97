use zeroize::Zeroize;

use crate::clipboard::{self, CopiedIndicator};
use crate::options::{MAX_LENGTH, MIN_LENGTH, Options};
use crate::pass;
use crate::terminal::{clear, reset_terminal};

use super::{enter_prompt, get_editable_input, get_numeric_input, print_form, print_help};

/// Interactive form loop: edit the selection, generate, copy.
pub fn run() {
    reset_terminal();
    clear();

    let mut options = Options::default();
    let mut password = String::new();
    let mut error: Option<String> = None;
    let mut flash: Option<String> = None;
    let copied = CopiedIndicator::new();

    loop {
        print_form(
            &options,
            &password,
            error.as_deref(),
            copied.is_visible(),
            &mut flash,
        );

        let input = match get_editable_input(enter_prompt(), "") {
            Some(s) => s,
            None => {
                clear();
                continue;
            }
        };

        match input.trim() {
            "" => {
                generate_into(&options, &mut password, &mut error, &copied);
                clear();
            }
            "1" => {
                if let Some(length) = get_numeric_input("Password length (1-12)", options.length) {
                    if Options::length_in_range(length) {
                        options.length = length;
                    } else {
                        flash = Some(format!(
                            "Password length must be between {} and {}.",
                            MIN_LENGTH, MAX_LENGTH
                        ));
                    }
                }
                clear();
            }
            "2" => {
                options.uppercase = !options.uppercase;
                clear();
            }
            "3" => {
                options.lowercase = !options.lowercase;
                clear();
            }
            "4" => {
                options.numbers = !options.numbers;
                clear();
            }
            "5" => {
                options.symbols = !options.symbols;
                clear();
            }
            "c" => {
                copy_current(&password, &copied, &mut flash);
                clear();
            }
            "h" | "help" => {
                clear();
                print_help();
            }
            "q" | "quit" => {
                clear();
                break;
            }
            _ => {
                clear();
                flash = Some("Invalid option.".to_string());
            }
        }
    }

    password.zeroize();
}

/// Run the builder + synthesizer against the current selection.
fn generate_into(
    options: &Options,
    password: &mut String,
    error: &mut Option<String>,
    copied: &CopiedIndicator,
) {
    match pass::generate(options) {
        Ok(next) => {
            password.zeroize();
            *password = next;
            *error = None;
        }
        Err(e) => {
            // Abort and clear any displayed password
            password.zeroize();
            *error = Some(e.to_string());
        }
    }
    // Whatever was copied is no longer what is on screen
    copied.clear();
}

fn copy_current(password: &str, copied: &CopiedIndicator, flash: &mut Option<String>) {
    if password.is_empty() {
        *flash = Some("Nothing to copy yet.".to_string());
        return;
    }

    match clipboard::copy(password) {
        Ok(()) => copied.trigger(),
        Err(e) => *flash = Some(format!("Clipboard error: {}", e)),
    }
}

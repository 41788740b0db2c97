//! CLI context - bundles options, flags, and output handling.

use zeroize::Zeroize;

use super::{CliFlags, prompts, quiet};
use crate::clipboard;
use crate::options::Options;
use crate::pass::{self, strength};
use crate::terminal::{box_bottom, box_line, box_top};
use crate::tui::print_help;

/// Early exit - not an error, just done.
pub struct Done;

/// Application context for CLI mode.
pub struct Context {
    pub options: Options,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;

        Ok(Self {
            options: Options::default(),
            flags,
        })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        quiet::set(self.flags.quiet);
        self.apply_flags();
        self.generate_output();
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("pickpass {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    /// Apply CLI flags to the option selection.
    fn apply_flags(&mut self) {
        if let Some(length) = self.flags.length {
            self.options.length = length;
        }

        if self.flags.all {
            self.options.uppercase = true;
            self.options.lowercase = true;
            self.options.numbers = true;
            self.options.symbols = true;
        }
        if self.flags.uppercase {
            self.options.uppercase = true;
        }
        if self.flags.lowercase {
            self.options.lowercase = true;
        }
        if self.flags.numbers {
            self.options.numbers = true;
        }
        if self.flags.symbols {
            self.options.symbols = true;
        }
    }

    /// Generate one password and hand it to the requested output.
    fn generate_output(&mut self) {
        let mut password = match pass::generate(&self.options) {
            Ok(p) => p,
            Err(e) => {
                prompts::error(&e.to_string());
                std::process::exit(1);
            }
        };

        if self.flags.clipboard {
            match clipboard::copy(&password) {
                Ok(()) => prompts::clipboard_copied(),
                Err(e) => prompts::clipboard_error(&e),
            }
        } else if quiet::plain_output() {
            println!("{}", password);
        } else {
            box_top("Generated");
            box_line(&password);
            box_line(&format!("Strength: {}", strength::of_options(&self.options)));
            box_bottom();
        }

        password.zeroize();
    }
}

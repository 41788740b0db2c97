use crate::options::Options;
use crate::pass::strength;
use crate::terminal::{
    box_bottom, box_line, box_line_center, box_opt, box_top, flush, print_error, print_rule,
};

pub fn enter_prompt() -> &'static str {
    "Enter option (or press Enter to generate)"
}

fn checkbox(on: bool) -> &'static str {
    if on { "[x]" } else { "[ ]" }
}

pub fn print_form(
    options: &Options,
    password: &str,
    error: Option<&str>,
    copied: bool,
    flash: &mut Option<String>,
) {
    box_top("Password Generator");
    box_line_center("Esc/CTRL+Q: cancel | CTRL+U: clear input");
    box_line("");

    if password.is_empty() {
        box_line("  (press Enter to generate)");
    } else if copied {
        box_line(&format!("  {}  (copied)", password));
    } else {
        box_line(&format!("  {}", password));
    }
    // Strength follows the selection, not the last generated password
    box_line(&format!("  Strength: {}", strength::of_options(options)));

    box_line("");
    print_rule();
    box_line("");
    box_line(&format!("  1) Password length: {}", options.length));
    box_line(&format!(
        "  2) {} Uppercase letters",
        checkbox(options.uppercase)
    ));
    box_line(&format!(
        "  3) {} Lowercase letters",
        checkbox(options.lowercase)
    ));
    box_line(&format!("  4) {} Numbers", checkbox(options.numbers)));
    box_line(&format!("  5) {} Symbols", checkbox(options.symbols)));
    box_line("");
    print_rule();
    box_line("     c) copy  |  h) help  |  q) quit");
    box_bottom();

    // Validation message, one-shot notice, or a blank line
    if let Some(msg) = error {
        print_error(msg);
    } else if let Some(msg) = flash.take() {
        print_error(&msg);
    } else {
        println!();
    }
    flush();
}

pub fn print_help() {
    box_top("Pickpass");
    box_line_center("Password generator with selectable classes");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments. Opens a");
    box_line("     form to pick length and character classes.");
    box_line("  2) Client: Pass flags directly (e.g., -l 12 -a)");
    box_line("     to generate one password without the form.");
    box_line("");
    box_line("USAGE:");
    box_line("  pickpass [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Selection:");
    box_opt("  -l, --length <N>", "Password length, 1-12 (default: 8)");
    box_opt("  -U, --uppercase", "Include uppercase letters (A-Z)");
    box_opt("  -L, --lowercase", "Include lowercase letters (a-z)");
    box_opt("  -D, --numbers", "Include digits (0-9)");
    box_opt("  -S, --symbols", "Include symbols");
    box_opt("  -a, --all", "Enable all four character classes");
    box_line("");
    box_line(" Output:");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Print the bare password only");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  pickpass                Interactive form");
    box_line("  pickpass -a -l 12       Strongest selection");
    box_line("  pickpass -U -L -D       Letters and digits");
    box_line("  pickpass -a -b          Generate to clipboard");
    box_line("");
    box_bottom();
    println!();
}

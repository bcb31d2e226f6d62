use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const SPINNER: &str = "\x1b[33m{spinner}\x1b[0m {wide_msg}";
const OK: &str = "\x1b[32m✔\x1b[0m {wide_msg}";
const ERR: &str = "\x1b[31m✘\x1b[0m {wide_msg}";

fn style(template: &str) -> ProgressStyle {
    ProgressStyle::with_template(template).unwrap_or_else(|_| ProgressStyle::default_spinner())
}

/// Yellow braille spinner followed by the current step.
pub fn spinner_style() -> ProgressStyle {
    style(SPINNER).tick_strings(&["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"])
}

/// Green check mark followed by the final message.
pub fn ok_style() -> ProgressStyle {
    style(OK)
}

/// Red cross followed by the error message.
pub fn err_style() -> ProgressStyle {
    style(ERR)
}

/// A ticking spinner for a multi-step command.
pub fn step_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(spinner_style());
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_parse() {
        for t in [SPINNER, OK, ERR] {
            assert!(ProgressStyle::with_template(t).is_ok(), "{t}");
        }
    }
}

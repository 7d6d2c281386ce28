//! Report output. Every line goes through `tracing` on the print target so it
//! interleaves cleanly with the progress bar.

use crate::terminal::colors;
use crate::terminal::format::Detail;
use crate::terminal::logging::PRINT_TARGET;
use colored::*;
use tracing::info;

pub const TOTAL_WIDTH: usize = 64;
const LABEL_WIDTH: usize = 24;

#[macro_export]
macro_rules! sprint {
    () => {
        $crate::terminal::print::print("");
    };
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

/// Centers `text` on a rule of `fill` characters spanning the report width.
fn ruled(text: &str, fill: &str) -> String {
    let padding: usize = TOTAL_WIDTH.saturating_sub(console::measure_text_width(text));
    let left: usize = padding / 2;
    format!(
        "{}{}{}",
        fill.repeat(left).color(colors::SEPARATOR),
        text,
        fill.repeat(padding - left).color(colors::SEPARATOR)
    )
}

pub fn banner(no_banner: bool) {
    if !no_banner {
        let title: String = format!("⟦ SCREENER v{} ⟧", env!("CARGO_PKG_VERSION"));
        print(&ruled(&title.bright_green().bold().to_string(), "═"));
    }
}

pub fn header(msg: &str) {
    let title: String = format!("⟦ {} ⟧", msg.to_uppercase());
    print(&ruled(&title.color(colors::PRIMARY).to_string(), "─"));
}

pub fn fat_separator() {
    print(&"═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR).to_string());
}

/// `> label........: value`, with labels padded to a common width.
pub fn aligned_line(label: &str, value: ColoredString) {
    let dots: String = ".".repeat(LABEL_WIDTH.saturating_sub(label.len()));
    print(&format!(
        "{} {}{}{} {}",
        ">".color(colors::SEPARATOR),
        label.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value
    ));
}

pub fn tree_head(idx: usize, name: &str) {
    print(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    ));
}

/// Prints `details` as the branches of the tree opened by [`tree_head`].
pub fn as_tree_one_level(details: Vec<Detail>) {
    let key_width: usize = details
        .iter()
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);

    let last: usize = details.len().saturating_sub(1);
    for (i, (key, value)) in details.iter().enumerate() {
        let branch: &str = if i == last { "└─" } else { "├─" };
        let dots: String = ".".repeat(key_width - key.chars().count());
        print(&format!(
            " {} {}{}{} {}",
            branch.color(colors::SEPARATOR),
            key.color(colors::TEXT_DEFAULT),
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

pub fn centerln(msg: &str) {
    let space: String = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{space}{msg}"));
}

const NO_RESULTS: &str = r#"
      _   _  ___    __  __    _  _____ ____ _   _ _____ ____
     | \ | |/ _ \  |  \/  |  / \|_   _/ ___| | | | ____/ ___|
     |  \| | | | | | |\/| | / _ \ | || |   | |_| |  _| \___ \
     | |\  | |_| | | |  | |/ ___ \| || |___|  _  | |___ ___) |
     |_| \_|\___/  |_|  |_/_/   \_\_| \____|_| |_|_____|____/
"#;

pub fn no_results() {
    print(&NO_RESULTS.red().bold().to_string());
}

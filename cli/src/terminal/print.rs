use std::time::Duration;

use colored::*;
use tracing::info;

pub const TOTAL_WIDTH: usize = 64;

/// Log target for lines meant for the user as-is.
pub const PRINT_TARGET: &str = "isonline::print";

#[macro_export]
macro_rules! iprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{msg}");
}

pub fn separator() {
    let sep: ColoredString = "─".repeat(TOTAL_WIDTH).bright_black();
    print(&format!("{}", sep));
}

pub fn centerln(msg: &str) {
    let pad: usize = TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2;
    let space: String = " ".repeat(pad);
    print(&format!("{}{}", space, msg));
}

/// Closes a pretty-mode run.
pub fn summary(online: usize, total: usize, elapsed: Duration) {
    separator();
    centerln(&summary_line(online, total, elapsed));
}

/// e.g. `2/3 targets online in 0.41s`
fn summary_line(online: usize, total: usize, elapsed: Duration) -> String {
    let ratio: String = format!("{online}/{total}");
    let ratio: ColoredString = if online == total {
        ratio.green().bold()
    } else {
        ratio.red().bold()
    };
    let unit: &str = if total == 1 { "target" } else { "targets" };
    let elapsed: ColoredString = format!("{:.2}s", elapsed.as_secs_f64()).bold().yellow();

    format!("{ratio} {unit} online in {elapsed}")
}

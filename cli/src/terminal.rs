pub mod logging;
pub mod print;
pub mod reporter;
pub mod spinner;

/// Turns off colors when stderr, where status lines go, cannot show them.
pub fn detect_colors() {
    if !console::Term::stderr().features().colors_supported() {
        colored::control::set_override(false);
    }
}

use crate::color;

// Print a debug statement if in verbose mode
pub fn maybe_print(verbose: bool, text: String) {
    if verbose {
        print(text)
    }
}

// Print a debug statement
fn print(text: String) {
    let text = format!("=== DEBUG ===\n{text}\n===");
    let text = color::debug_string(&text);

    println!("{text}");
}

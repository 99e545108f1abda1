pub fn handle_unrecognized_line(first_word: &str, line_count: usize, line: &str) {
    if first_word.starts_with('#') {
        return;
    }
    log::debug!("Obj parser: line {line_count} (\"{line}\"): \"{first_word}\" is not supported");
}

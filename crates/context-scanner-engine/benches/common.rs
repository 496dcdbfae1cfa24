// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_flat_document(size: usize) -> String {
    let base = "\\startsection[title={Section}]\n\nParagraph with \\em{some} content. % remark\n\n\\startitemize[packed]\n  \\item First \\type{\\verb}\n  \\item Second\n\\stopitemize\n\n\\stopsection\n\n";
    format!("\\starttext\n{}\\stoptext\n", base.repeat(size))
}

#[allow(dead_code)]
pub fn generate_nested_document(sections: usize, depth: usize) -> String {
    let mut content = String::from("\\starttext\n");

    for section in 0..sections {
        content.push_str(&format!("\\startchapter[title={{Chapter {}}}]\n", section));
        content.push_str(&generate_nested_content(depth, 1));
        content.push_str("\\stopchapter\n");
    }

    content.push_str("\\stoptext\n");
    content
}

#[allow(dead_code)]
fn generate_nested_content(remaining_depth: usize, current_level: usize) -> String {
    if remaining_depth == 0 {
        return String::new();
    }

    let mut content = String::new();
    let indent = "  ".repeat(current_level);

    content.push_str(&format!(
        "{}\\startsubject[title={{Level {}}}]\n",
        indent, current_level
    ));
    content.push_str(&format!(
        "{}Some \\bold{{paragraph}} content with \\color[red]{{nested \\em{{markup}}}}. % note\n",
        indent
    ));

    // Recurse to deeper levels
    if remaining_depth > 1 {
        content.push_str(&generate_nested_content(
            remaining_depth - 1,
            current_level + 1,
        ));
    }

    content.push_str(&format!("{}\\stopsubject\n", indent));
    content
}

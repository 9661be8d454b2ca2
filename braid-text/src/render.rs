use std::fmt::Display;

/// Renders a template against an ordered argument list.
///
/// Each `{}` placeholder is replaced, left to right, by the `Display` form
/// of the next argument. Placeholders left over once the arguments run out
/// stay in the output verbatim; surplus arguments are ignored.
///
/// # Example
///
/// ```
/// use braid_text::render;
///
/// let line = render("{} of {} spools", &[&3, &7]);
/// assert_eq!(line, "3 of 7 spools");
/// ```
pub fn render(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut args = args.iter();

    while let Some(i) = rest.find("{}") {
        match args.next() {
            Some(arg) => {
                out.push_str(&rest[..i]);
                out.push_str(&arg.to_string());
                rest = &rest[i + 2..];
            }
            None => break,
        }
    }

    out.push_str(rest);
    out
}

/// Renders a template and prints it to stdout with exactly one trailing
/// newline.
///
/// A template that already ends in a newline is printed as-is; one that
/// does not gets a newline appended.
pub fn log(template: &str, args: &[&dyn Display]) {
    let out = render(template, args);

    if out.ends_with('\n') {
        print!("{out}");
    } else {
        println!("{out}");
    }
}

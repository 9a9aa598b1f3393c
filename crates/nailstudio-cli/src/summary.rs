use std::path::Path;

use console::Style;
use nailstudio_core::design::NailDesign;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    choice: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().magenta().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            choice: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_generate_summary(input: &Path, output: &Path, design: &NailDesign, model: &str) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Nail Studio"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(11)));
    println!();

    println!("  {:<14}{}", s.label.apply_to("Photo"), s.path.apply_to(input.display()));
    println!("  {:<14}{}", s.label.apply_to("Output"), s.path.apply_to(output.display()));
    println!("  {:<14}{}", s.label.apply_to("Model"), s.value.apply_to(model));
    println!();

    println!("  {:<14}{}", s.label.apply_to("Shape"), s.choice.apply_to(design.shape));
    println!("  {:<14}{}", s.label.apply_to("Length"), s.choice.apply_to(design.length));
    println!("  {:<14}{}", s.label.apply_to("Finish"), s.choice.apply_to(design.finish));
    println!("  {:<14}{}", s.label.apply_to("Color"), s.value.apply_to(design.color));
    match design.pattern() {
        Some(pattern) => println!("  {:<14}{}", s.label.apply_to("Pattern"), s.value.apply_to(pattern)),
        None => println!("  {:<14}{}", s.label.apply_to("Pattern"), s.disabled.apply_to("solid color")),
    }
    println!();
}

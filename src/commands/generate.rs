//! `forgeid generate` command.

use crate::forge::{Generator, Prefix, Style};

/// Produce `count` identifiers.
#[must_use]
pub fn render(
    generator: &Generator,
    prefix: Option<&Prefix>,
    style: Style,
    count: u32,
) -> Vec<String> {
    (0..count).map(|_| generator.generate(prefix, style)).collect()
}

/// Execute the `generate` command, printing one identifier per line.
///
/// # Errors
///
/// Always returns `Ok` after writing every identifier to stdout.
pub fn run(
    generator: &Generator,
    prefix: Option<&Prefix>,
    style: Style,
    count: u32,
) -> Result<(), String> {
    for id in render(generator, prefix, style, count) {
        println!("{id}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forge::GeneratorConfig;

    #[test]
    fn renders_requested_count_with_prefix() {
        let generator = Generator::live(GeneratorConfig::default()).unwrap();
        let prefix = Prefix::new("INV").unwrap();
        let ids = render(&generator, Some(&prefix), Style::Space, 3);

        assert_eq!(ids.len(), 3);
        for id in &ids {
            assert!(id.starts_with("INV-"));
            assert!(generator.verify(id));
        }
    }

    #[test]
    fn zero_count_renders_nothing() {
        let generator = Generator::live(GeneratorConfig::default()).unwrap();
        assert!(render(&generator, None, Style::None, 0).is_empty());
    }
}

//! `forgeid format` command.

use crate::forge::{Generator, Style};

/// Execute the `format` command, printing the re-rendered identifier.
///
/// # Errors
///
/// Returns an error string if the identifier is empty.
pub fn run(generator: &Generator, id: &str, style: Style) -> Result<(), String> {
    if id.is_empty() {
        return Err("identifier cannot be empty".to_string());
    }
    println!("{}", generator.format(id, style));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forge::GeneratorConfig;

    #[test]
    fn rejects_empty_identifier() {
        let generator = Generator::live(GeneratorConfig::default()).unwrap();
        assert!(run(&generator, "", Style::Dash).is_err());
        assert!(run(&generator, "TRX-abcdefghij", Style::Dash).is_ok());
    }
}

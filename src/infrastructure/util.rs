// src/infrastructure/util.rs
use crate::application::ports::util::SlugGenerator;
use slug::slugify;

/// ASCII slugs: transliterated, lowercased, hyphen separated.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugifies_titles() {
        let slugger = DefaultSlugGenerator;
        assert_eq!(slugger.slugify("Hello, World!"), "hello-world");
        assert_eq!(slugger.slugify("  Rust 2024  edition "), "rust-2024-edition");
    }

    #[test]
    fn symbol_only_input_yields_empty_slug() {
        assert_eq!(DefaultSlugGenerator.slugify("!!!"), "");
    }
}

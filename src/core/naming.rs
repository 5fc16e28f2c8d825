//! Resource name derivation from type names

use serde::{Deserialize, Serialize};

/// How a resource name is derived from a type name when no path is declared
///
/// Both strategies lower-case the first character of the type name. They only
/// differ in how the plural is formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingStrategy {
    /// Append `s` (`Category` → `categorys`)
    #[default]
    Naive,
    /// English plural rules (`Category` → `categories`, `Box` → `boxes`)
    English,
}

impl NamingStrategy {
    /// Derive the resource name for a simple type name
    ///
    /// # Examples
    ///
    /// ```
    /// use tiered::core::NamingStrategy;
    ///
    /// assert_eq!(NamingStrategy::Naive.resource_name("Order"), "orders");
    /// assert_eq!(NamingStrategy::Naive.resource_name("Category"), "categorys");
    /// assert_eq!(NamingStrategy::English.resource_name("Category"), "categories");
    /// assert_eq!(NamingStrategy::English.resource_name("LineItem"), "lineItems");
    /// ```
    pub fn resource_name(&self, simple_name: &str) -> String {
        let singular = lower_first(simple_name);
        match self {
            NamingStrategy::Naive => format!("{}s", singular),
            NamingStrategy::English => english_plural(&singular),
        }
    }
}

fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Pluralize the last word of a camelCase name
fn english_plural(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let chars: Vec<char> = word.chars().collect();
    let last = chars[chars.len() - 1];
    let before_last = chars.len().checked_sub(2).map(|i| chars[i]);
    let stem: String = chars[..chars.len() - 1].iter().collect();

    match (before_last, last) {
        (Some(prev), 'y') if !is_vowel(prev) => format!("{}ies", stem),
        (Some('f'), 'e') => format!("{}ves", &stem[..stem.len() - 1]),
        (Some(_), 'f') => format!("{}ves", stem),
        (Some(prev), 'h') if prev == 's' || prev == 'c' => format!("{}es", word),
        (_, 's' | 'x' | 'z') => format!("{}es", word),
        (Some(prev), 'o') if !is_vowel(prev) => {
            if ["photo", "piano", "halo"].iter().any(|w| word.ends_with(w)) {
                format!("{}s", word)
            } else {
                format!("{}es", word)
            }
        }
        _ => format!("{}s", word),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive_lowercases_and_appends_s() {
        let naming = NamingStrategy::Naive;
        assert_eq!(naming.resource_name("Order"), "orders");
        assert_eq!(naming.resource_name("Comment"), "comments");
        assert_eq!(naming.resource_name("LineItem"), "lineItems");
    }

    #[test]
    fn test_naive_keeps_irregular_plurals() {
        let naming = NamingStrategy::Naive;
        assert_eq!(naming.resource_name("Category"), "categorys");
        assert_eq!(naming.resource_name("Address"), "addresss");
    }

    #[test]
    fn test_naive_empty_name() {
        assert_eq!(NamingStrategy::Naive.resource_name(""), "s");
    }

    #[test]
    fn test_naive_is_default() {
        assert_eq!(NamingStrategy::default(), NamingStrategy::Naive);
    }

    #[test]
    fn test_english_regular() {
        let naming = NamingStrategy::English;
        assert_eq!(naming.resource_name("User"), "users");
        assert_eq!(naming.resource_name("Day"), "days");
        assert_eq!(naming.resource_name("Key"), "keys");
    }

    #[test]
    fn test_english_y_ending() {
        let naming = NamingStrategy::English;
        assert_eq!(naming.resource_name("Company"), "companies");
        assert_eq!(naming.resource_name("Category"), "categories");
    }

    #[test]
    fn test_english_sibilants() {
        let naming = NamingStrategy::English;
        assert_eq!(naming.resource_name("Address"), "addresses");
        assert_eq!(naming.resource_name("Box"), "boxes");
        assert_eq!(naming.resource_name("Church"), "churches");
        assert_eq!(naming.resource_name("Dish"), "dishes");
        assert_eq!(naming.resource_name("Buzz"), "buzzes");
    }

    #[test]
    fn test_english_f_endings() {
        let naming = NamingStrategy::English;
        assert_eq!(naming.resource_name("Knife"), "knives");
        assert_eq!(naming.resource_name("Wolf"), "wolves");
    }

    #[test]
    fn test_english_o_endings() {
        let naming = NamingStrategy::English;
        assert_eq!(naming.resource_name("Hero"), "heroes");
        assert_eq!(naming.resource_name("Photo"), "photos");
        assert_eq!(naming.resource_name("Video"), "videos");
    }

    #[test]
    fn test_english_camel_case_pluralizes_last_word() {
        assert_eq!(
            NamingStrategy::English.resource_name("ProductCategory"),
            "productCategories"
        );
    }

    #[test]
    fn test_strategy_from_yaml() {
        let naming: NamingStrategy = serde_yaml::from_str("english").unwrap();
        assert_eq!(naming, NamingStrategy::English);
    }
}

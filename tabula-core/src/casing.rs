//! Identifier casing primitives shared by every naming decision.
//!
//! All functions here are total: empty or separator-only input produces an
//! empty string rather than an error.

use std::{fmt, ops::Range, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::inflect::{pluralize, singularize};

/// Textual rendering convention for a multi-word identifier.
///
/// "Unset" is modelled as `Option<CaseStyle>::None`, see [`format_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStyle {
    /// `userName`
    Camel,
    /// `UserName`
    Pascal,
    /// `user_name`
    LowerSnake,
    /// `USER_NAME`
    UpperSnake,
    /// `user-name`
    Kebab,
}

impl CaseStyle {
    /// Every recognized style, in declaration order.
    pub const ALL: [CaseStyle; 5] = [
        CaseStyle::Camel,
        CaseStyle::Pascal,
        CaseStyle::LowerSnake,
        CaseStyle::UpperSnake,
        CaseStyle::Kebab,
    ];

    /// Name used in tabula.toml
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStyle::Camel => "camel",
            CaseStyle::Pascal => "pascal",
            CaseStyle::LowerSnake => "lower_snake",
            CaseStyle::UpperSnake => "upper_snake",
            CaseStyle::Kebab => "kebab",
        }
    }

    /// Render `name` in this style.
    pub fn apply(&self, name: &str) -> String {
        match self {
            CaseStyle::Camel => to_camel_case(name),
            CaseStyle::Pascal => to_pascal_case(name),
            CaseStyle::LowerSnake => to_snake_case(name),
            CaseStyle::UpperSnake => to_upper_snake_case(name),
            CaseStyle::Kebab => to_kebab_case(name),
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CaseStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| {
                format!("unknown case style '{s}' (expected camel, pascal, lower_snake, upper_snake or kebab)")
            })
    }
}

/// Whether a resolved name is forced singular, forced plural, or left alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SingularizationMode {
    #[default]
    Unset,
    Singular,
    Plural,
}

impl SingularizationMode {
    /// Name used in tabula.toml
    pub fn as_str(&self) -> &'static str {
        match self {
            SingularizationMode::Unset => "unset",
            SingularizationMode::Singular => "singular",
            SingularizationMode::Plural => "plural",
        }
    }
}

impl fmt::Display for SingularizationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Lower,
    Upper,
    Digit,
    /// Combining mark; belongs to the word it follows.
    Mark,
    Separator,
}

fn is_combining_mark(c: char) -> bool {
    matches!(
        c,
        '\u{0300}'..='\u{036F}'
            | '\u{1AB0}'..='\u{1AFF}'
            | '\u{1DC0}'..='\u{1DFF}'
            | '\u{20D0}'..='\u{20FF}'
            | '\u{FE20}'..='\u{FE2F}'
    )
}

fn classify(c: char) -> CharClass {
    if is_combining_mark(c) {
        CharClass::Mark
    } else if c.is_uppercase() {
        CharClass::Upper
    } else if c.is_numeric() {
        CharClass::Digit
    } else if c.is_alphanumeric() {
        // Lowercase letters and caseless scripts
        CharClass::Lower
    } else {
        CharClass::Separator
    }
}

fn is_boundary(prev: CharClass, cur: CharClass, next: Option<CharClass>) -> bool {
    use CharClass::*;

    match (prev, cur) {
        (Lower, Upper) => true,
        (Digit, Upper | Lower) | (Upper | Lower, Digit) => true,
        // End of an acronym: "HTMLParser" splits before the "P"
        (Upper, Upper) => next == Some(Lower),
        _ => false,
    }
}

/// Byte ranges of every word in `s`, in order.
pub(crate) fn word_spans(s: &str) -> Vec<Range<usize>> {
    let classes: Vec<(usize, CharClass)> = s
        .char_indices()
        .map(|(i, c)| (i, classify(c)))
        .collect();
    let mut spans = Vec::new();
    let mut start: Option<usize> = None;
    // Last non-mark class inside the current word
    let mut prev: Option<CharClass> = None;

    for (i, &(idx, class)) in classes.iter().enumerate() {
        match class {
            CharClass::Separator => {
                if let Some(st) = start.take() {
                    spans.push(st..idx);
                }
                prev = None;
                continue;
            }
            CharClass::Mark => {
                start.get_or_insert(idx);
                continue;
            }
            _ => {}
        }

        match (start, prev) {
            (Some(st), Some(prev)) => {
                let next = classes[i + 1..]
                    .iter()
                    .map(|&(_, class)| class)
                    .find(|&class| class != CharClass::Mark);
                if is_boundary(prev, class, next) {
                    spans.push(st..idx);
                    start = Some(idx);
                }
            }
            _ => {
                start.get_or_insert(idx);
            }
        }
        prev = Some(class);
    }

    if let Some(st) = start {
        spans.push(st..s.len());
    }
    spans
}

fn words(s: &str) -> Vec<String> {
    word_spans(s)
        .into_iter()
        .map(|span| s[span].to_lowercase())
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase `name` and separate its words with single spaces
/// (e.g., "UserName" -> "user name", "table_name" -> "table name").
pub fn normalize(name: &str) -> String {
    words(name).join(" ")
}

/// [`normalize`], then singularize the last word (e.g., "BlogPosts" -> "blog post").
pub fn normalize_singular(name: &str) -> String {
    let mut words = words(name);
    if let Some(last) = words.last_mut() {
        *last = singularize(last);
    }
    words.join(" ")
}

/// Convert a string to camelCase (e.g., "hello_world" -> "helloWorld")
pub fn to_camel_case(s: &str) -> String {
    words(s)
        .iter()
        .enumerate()
        .map(|(i, word)| if i == 0 { word.clone() } else { capitalize(word) })
        .collect()
}

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
pub fn to_pascal_case(s: &str) -> String {
    words(s).iter().map(|word| capitalize(word)).collect()
}

/// Convert a string to snake_case (e.g., "HelloWorld" -> "hello_world")
pub fn to_snake_case(s: &str) -> String {
    words(s).join("_")
}

/// Convert a string to UPPER_SNAKE_CASE.
///
/// Always snake_case first, then uppercased.
pub fn to_upper_snake_case(s: &str) -> String {
    to_snake_case(s).to_uppercase()
}

/// Convert a string to kebab-case (e.g., "HelloWorld" -> "hello-world")
pub fn to_kebab_case(s: &str) -> String {
    words(s).join("-")
}

/// Singular PascalCase type name for a table (e.g., "blog_posts" -> "BlogPost").
pub fn table_to_model(table: &str) -> String {
    to_pascal_case(&singularize(table))
}

/// camelCase property name for a column.
pub fn to_property_name(column: &str) -> String {
    to_camel_case(column)
}

/// Remove every occurrence of `_id` and `Id` from `name`, optionally
/// rendering the remainder in PascalCase.
///
/// Matches anywhere in the string, not only as a suffix, so "IdentityCard"
/// becomes "entityCard".
pub fn omit_id(name: &str, pascalize: bool) -> String {
    let mut stripped = String::with_capacity(name.len());
    let mut rest = name;
    while let Some(c) = rest.chars().next() {
        if let Some(after) = rest.strip_prefix("_id") {
            rest = after;
        } else if let Some(after) = rest.strip_prefix("Id") {
            rest = after;
        } else {
            stripped.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }

    if pascalize {
        to_pascal_case(&stripped)
    } else {
        stripped
    }
}

/// Composite enum type name for an enum-like column
/// (e.g., ("users", "roles") -> "UserRole").
pub fn to_configurable_enum_name(table: &str, column: &str) -> String {
    to_pascal_case(&format!("{}_{}", singularize(table), singularize(column)))
}

/// Apply the singular/plural transform selected by `mode`.
pub fn get_mode_singularize(name: &str, mode: SingularizationMode) -> String {
    match mode {
        SingularizationMode::Unset => name.to_string(),
        SingularizationMode::Singular => singularize(name),
        SingularizationMode::Plural => pluralize(name),
    }
}

/// Render `name` in `style`; `None` returns it unchanged.
pub fn format_name(name: &str, style: Option<CaseStyle>) -> String {
    match style {
        Some(style) => style.apply(name),
        None => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("UserName"), "user name");
        assert_eq!(normalize("table_name"), "table name");
        assert_eq!(normalize("HTMLParser"), "html parser");
        assert_eq!(normalize("address2Line"), "address 2 line");
        assert_eq!(normalize("  kebab-case--name "), "kebab case name");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("__"), "");
        assert_eq!(normalize("i\u{307}aB"), "i\u{307}a b");
        assert_eq!(normalize("Cafe\u{301}Menu"), "cafe\u{301} menu");
    }

    #[test]
    fn test_normalize_singular() {
        assert_eq!(normalize_singular("BlogPosts"), "blog post");
        assert_eq!(normalize_singular("user_categories"), "user category");
        assert_eq!(normalize_singular(""), "");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("foo-bar baz"), "FooBarBaz");
        assert_eq!(to_pascal_case("helloWorld"), "HelloWorld");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("hello_world"), "helloWorld");
        assert_eq!(to_camel_case("HelloWorld"), "helloWorld");
        assert_eq!(to_camel_case("get_user_id"), "getUserId");
        assert_eq!(to_camel_case("USER_ID"), "userId");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("Hello"), "hello");
        assert_eq!(to_snake_case("HelloWorld"), "hello_world");
        assert_eq!(to_snake_case("hello-world"), "hello_world");
        assert_eq!(to_snake_case("line2"), "line_2");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_to_kebab_case() {
        assert_eq!(to_kebab_case("hello_world"), "hello-world");
        assert_eq!(to_kebab_case("HelloWorld"), "hello-world");
    }

    #[test]
    fn test_upper_snake_is_uppercased_snake() {
        for input in ["userName", "HTMLParser", "address2", "blog-posts", "Straße", ""] {
            assert_eq!(
                format_name(input, Some(CaseStyle::UpperSnake)),
                format_name(input, Some(CaseStyle::LowerSnake)).to_uppercase(),
                "input: {input}"
            );
        }
    }

    #[test]
    fn test_format_name_is_idempotent() {
        let inputs = [
            "user_name",
            "UserProfile",
            "blogPosts",
            "HTMLParser",
            "created_at",
            "address2",
            "order-items",
            "ID",
            "İa_b",
            "Ёлка_Ïn",
        ];
        for style in CaseStyle::ALL {
            for input in inputs {
                let once = format_name(input, Some(style));
                assert_eq!(
                    format_name(&once, Some(style)),
                    once,
                    "style {style}, input {input}"
                );
            }
        }
    }

    #[test]
    fn test_format_name_unset_is_identity() {
        assert_eq!(format_name("Some_weird-Name", None), "Some_weird-Name");
    }

    #[test]
    fn test_table_to_model() {
        assert_eq!(table_to_model("blog_posts"), "BlogPost");
        assert_eq!(table_to_model("users"), "User");
        assert_eq!(table_to_model("user_profiles"), "UserProfile");
        assert_eq!(table_to_model("people"), "Person");
        assert_eq!(table_to_model(""), "");
        assert_eq!(table_to_model("menus"), "Menu");
        assert_eq!(table_to_model("valves"), "Valve");
        assert_eq!(table_to_model("statuses"), "Status");
    }

    #[test]
    fn test_to_property_name() {
        assert_eq!(to_property_name("created_at"), "createdAt");
        assert_eq!(to_property_name("FirstName"), "firstName");
    }

    #[test]
    fn test_omit_id() {
        assert_eq!(omit_id("user_id", false), "user");
        assert_eq!(omit_id("postId", false), "post");
        assert_eq!(omit_id("postId", true), "Post");
        assert_eq!(omit_id("author_id", true), "Author");
    }

    #[test]
    fn test_omit_id_matches_anywhere() {
        assert_eq!(omit_id("IdentityCard", false), "entityCard");
        assert_eq!(omit_id("parent_id_ref", false), "parent_ref");
        assert_eq!(omit_id("id", false), "id");
        assert_eq!(omit_id("", true), "");
    }

    #[test]
    fn test_to_configurable_enum_name() {
        assert_eq!(to_configurable_enum_name("users", "roles"), "UserRole");
        assert_eq!(to_configurable_enum_name("blog_posts", "status"), "BlogPostStatus");
    }

    #[test]
    fn test_get_mode_singularize() {
        assert_eq!(get_mode_singularize("users", SingularizationMode::Unset), "users");
        assert_eq!(get_mode_singularize("users", SingularizationMode::Singular), "user");
        assert_eq!(get_mode_singularize("user", SingularizationMode::Plural), "users");
    }

    #[test]
    fn test_plural_then_singular_round_trips() {
        let nouns = [
            "user", "post", "category", "box", "address", "status", "wolf", "wife", "menu", "wiki",
            "emoji", "guru", "pie", "calorie", "valve", "gas", "atlas", "canvas", "campus",
        ];
        for noun in nouns {
            let plural = get_mode_singularize(noun, SingularizationMode::Plural);
            assert_eq!(
                get_mode_singularize(&plural, SingularizationMode::Singular),
                normalize_singular(noun),
                "noun: {noun}"
            );
        }
    }

    #[test]
    fn test_case_style_from_str() {
        assert_eq!("lower_snake".parse::<CaseStyle>(), Ok(CaseStyle::LowerSnake));
        assert!("snake".parse::<CaseStyle>().is_err());
        for style in CaseStyle::ALL {
            assert_eq!(style.as_str().parse::<CaseStyle>(), Ok(style));
        }
    }
}

//! English singular/plural inflection.
//!
//! Only the trailing word of an identifier is inflected; everything before it
//! is kept verbatim and the word's letter case is restored afterwards, so
//! "blog_posts" -> "blog_post" and "BlogPosts" -> "BlogPost".

use crate::casing::word_spans;

const UNCOUNTABLE: &[&str] = &[
    "audio",
    "data",
    "deer",
    "equipment",
    "feedback",
    "fish",
    "hardware",
    "information",
    "media",
    "metadata",
    "money",
    "news",
    "rice",
    "series",
    "sheep",
    "software",
    "species",
    "staff",
    "traffic",
];

/// (singular, plural)
const IRREGULAR: &[(&str, &str)] = &[
    ("cache", "caches"),
    ("child", "children"),
    ("cookie", "cookies"),
    ("criterion", "criteria"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("life", "lives"),
    ("man", "men"),
    ("mouse", "mice"),
    ("movie", "movies"),
    ("octopus", "octopi"),
    ("ox", "oxen"),
    ("person", "people"),
    ("phenomenon", "phenomena"),
    ("tooth", "teeth"),
    ("woman", "women"),
];

/// Singular words ending in "s" that must not lose it.
const SINGULAR_ENDING_IN_S: &[&str] = &[
    "abacus", "alias", "alumnus", "apparatus", "atlas", "axis", "bias", "bonus", "bus", "cactus",
    "campus", "cannabis", "canvas", "census", "chassis", "chorus", "circus", "citrus", "consensus",
    "corpus", "debris", "exodus", "focus", "fungus", "gas", "genius", "genus", "hiatus", "ibis",
    "iris", "lotus", "mantis", "marquis", "metropolis", "minus", "nexus", "nucleus", "onus", "opus",
    "pelvis", "plus", "prospectus", "radius", "sinus", "stimulus", "status", "surplus", "syllabus",
    "tennis", "terminus", "thesaurus", "torus", "trellis", "us", "uterus", "virus", "walrus",
];

/// Suffixes that only ever end a singular word.
const SINGULAR_S_SUFFIXES: &[&str] = &["ss", "ous", "sis", "itis"];

/// Singular nouns ending in "ie", whose plural would otherwise become "-y".
const IE_NOUNS: &[&str] = &[
    "brownie", "calorie", "die", "freebie", "genie", "goalie", "hippie", "lie", "newbie", "pie",
    "prairie", "rookie", "selfie", "smoothie", "sortie", "tie", "zombie",
];

/// Ordered (plural suffix, singular suffix) replacements.
const SINGULAR_SUFFIXES: &[(&str, &str)] = &[
    ("quizzes", "quiz"),
    ("atrices", "atrix"),
    ("ertices", "ertex"),
    ("ndices", "ndex"),
    ("aliases", "alias"),
    ("atlases", "atlas"),
    ("biases", "bias"),
    ("canvases", "canvas"),
    ("gases", "gas"),
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("diagnoses", "diagnosis"),
    ("parentheses", "parenthesis"),
    ("prognoses", "prognosis"),
    ("synopses", "synopsis"),
    ("theses", "thesis"),
    ("shoes", "shoe"),
    ("canoes", "canoe"),
    ("toes", "toe"),
    ("oes", "o"),
    ("xes", "x"),
    ("ches", "ch"),
    ("sses", "ss"),
    ("shes", "sh"),
    ("zzes", "zz"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("arves", "arf"),
    ("wolves", "wolf"),
    ("valves", "valve"),
    ("salves", "salve"),
    ("alves", "alf"),
    ("elves", "elf"),
    ("eaves", "eaf"),
    ("oaves", "oaf"),
];

/// Ordered (singular suffix, plural suffix) replacements.
const PLURAL_SUFFIXES: &[(&str, &str)] = &[
    ("quiz", "quizzes"),
    ("atrix", "atrices"),
    ("ertex", "ertices"),
    ("ndex", "ndices"),
    ("sis", "ses"),
    ("as", "ases"),
    ("x", "xes"),
    ("ch", "ches"),
    ("ss", "sses"),
    ("sh", "shes"),
    ("zz", "zzes"),
    ("ife", "ives"),
    ("arf", "arves"),
    ("olf", "olves"),
    ("alf", "alves"),
    ("elf", "elves"),
    ("eaf", "eaves"),
    ("oaf", "oaves"),
    ("tato", "tatoes"),
    ("mato", "matoes"),
    ("hero", "heroes"),
    ("echo", "echoes"),
];

/// Singularize the trailing word of `s`.
pub fn singularize(s: &str) -> String {
    inflect_last_word(s, singular_of)
}

/// Pluralize the trailing word of `s`. Already-plural words are unchanged.
pub fn pluralize(s: &str) -> String {
    inflect_last_word(s, plural_of)
}

fn inflect_last_word(s: &str, inflect: fn(&str) -> String) -> String {
    let Some(span) = word_spans(s).pop() else {
        return s.to_string();
    };
    let word = &s[span.clone()];
    if !word.chars().all(char::is_alphabetic) {
        return s.to_string();
    }

    let inflected = inflect(&word.to_lowercase());
    format!(
        "{}{}{}",
        &s[..span.start],
        restore_case(word, &inflected),
        &s[span.end..]
    )
}

fn restore_case(original: &str, word: &str) -> String {
    let mut chars = original.chars();
    let first_upper = chars.next().is_some_and(char::is_uppercase);
    let rest_upper = original.chars().count() > 1 && chars.all(char::is_uppercase);

    if first_upper && rest_upper {
        word.to_uppercase()
    } else if first_upper {
        let mut chars = word.chars();
        match chars.next() {
            None => String::new(),
            Some(c) => c.to_uppercase().chain(chars).collect(),
        }
    } else {
        word.to_string()
    }
}

fn replace_suffix(word: &str, suffix: &str, replacement: &str) -> Option<String> {
    word.strip_suffix(suffix)
        .map(|stem| format!("{stem}{replacement}"))
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn singular_of(word: &str) -> String {
    if UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }
    if let Some((singular, _)) = IRREGULAR.iter().find(|(_, plural)| *plural == word) {
        return singular.to_string();
    }
    if IRREGULAR.iter().any(|(singular, _)| *singular == word) {
        return word.to_string();
    }

    for (suffix, replacement) in SINGULAR_SUFFIXES {
        if let Some(singular) = replace_suffix(word, suffix, replacement) {
            return singular;
        }
    }

    if let Some(stem) = word.strip_suffix('s') {
        if IE_NOUNS.contains(&stem) {
            return stem.to_string();
        }
    }

    // "categories" -> "category", "queries" -> "query"
    if let Some(stem) = word.strip_suffix("ies") {
        let consonant = stem.chars().last().is_some_and(|c| !is_vowel(c) && c != 'y');
        if consonant || stem.ends_with("qu") {
            return format!("{stem}y");
        }
    }

    // "statuses" -> "status", but "houses" -> "house"
    if let Some(stem) = word.strip_suffix("uses") {
        if stem.chars().last().is_some_and(|c| !matches!(c, 'a' | 'o' | 'u')) {
            return format!("{stem}us");
        }
    }

    if SINGULAR_ENDING_IN_S.contains(&word)
        || SINGULAR_S_SUFFIXES.iter().any(|suffix| word.ends_with(suffix))
    {
        return word.to_string();
    }

    match word.strip_suffix('s') {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => word.to_string(),
    }
}

fn plural_of(word: &str) -> String {
    if word.is_empty() || UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }
    if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == word) {
        return plural.to_string();
    }
    // Already plural
    if singular_of(word) != word {
        return word.to_string();
    }

    // "status" -> "statuses", "bus" -> "buses"
    if let Some(stem) = word.strip_suffix("us") {
        if stem.chars().last().is_none_or(|c| !matches!(c, 'a' | 'o' | 'u')) {
            return format!("{word}es");
        }
    }

    for (suffix, replacement) in PLURAL_SUFFIXES {
        if let Some(plural) = replace_suffix(word, suffix, replacement) {
            return plural;
        }
    }

    if let Some(stem) = word.strip_suffix('y') {
        let consonant = stem.chars().last().is_some_and(|c| !is_vowel(c));
        if consonant || stem.ends_with("qu") {
            return format!("{stem}ies");
        }
    }

    format!("{word}s")
}

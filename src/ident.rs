//! Identifier normalization.
//!
//! JSON keys can be anything (`"first-name"`, `"HTTPStatus"`, `"a b.c"`);
//! target languages want identifiers in a particular casing. We split a raw
//! key into words on non-alphanumeric delimiters and on lower→upper case
//! transitions, then recompose per the requested convention.
//!
//! Normalization is idempotent: feeding an already-normalized identifier back
//! through the same convention returns it unchanged. It does NOT resolve
//! collisions: if two distinct keys normalize to the same identifier, the
//! second field is emitted with the colliding name (known limitation).

/// Casing convention requested by an emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convention {
    Pascal,
    Camel,
    Snake,
    /// Keep the raw key untouched (C#/Java/TypeScript field names).
    AsIs,
}

/// Split a raw key into lowercase words.
///
/// Delimiters are any non-alphanumeric characters. Within an alphanumeric
/// run, a lower→upper transition also starts a new word, so `"userId"` and
/// `"user_id"` split identically.
fn split_words(raw: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in raw.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.extend(c.to_lowercase());
        prev_lower = c.is_lowercase() || c.is_numeric();
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Normalize `raw` into an identifier following `convention`.
pub fn normalize(raw: &str, convention: Convention) -> String {
    if raw.is_empty() || convention == Convention::AsIs {
        return raw.to_string();
    }
    let words = split_words(raw);
    if words.is_empty() {
        return raw.to_string();
    }
    match convention {
        Convention::Pascal => words.iter().map(|w| capitalize(w)).collect(),
        Convention::Camel => {
            let mut out = words[0].clone();
            for w in &words[1..] {
                out.push_str(&capitalize(w));
            }
            out
        }
        Convention::Snake => words.join("_"),
        Convention::AsIs => unreachable!("handled above"),
    }
}

/// PascalCase shorthand; this is the casing nested type names use in most
/// emitters.
pub fn pascal_case(raw: &str) -> String {
    normalize(raw, Convention::Pascal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_delimiters_and_case_transitions() {
        assert_eq!(split_words("first-name"), vec!["first", "name"]);
        assert_eq!(split_words("user_id"), vec!["user", "id"]);
        assert_eq!(split_words("userId"), vec!["user", "id"]);
        assert_eq!(split_words("a b.c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn pascal_camel_snake() {
        assert_eq!(normalize("first-name", Convention::Pascal), "FirstName");
        assert_eq!(normalize("first-name", Convention::Camel), "firstName");
        assert_eq!(normalize("firstName", Convention::Snake), "first_name");
        assert_eq!(normalize("first-name", Convention::AsIs), "first-name");
    }

    #[test]
    fn idempotent_for_every_convention() {
        let keys = ["first-name", "HTTPStatus", "user_id", "Items", "x9y"];
        for convention in [
            Convention::Pascal,
            Convention::Camel,
            Convention::Snake,
            Convention::AsIs,
        ] {
            for key in keys {
                let once = normalize(key, convention);
                let twice = normalize(&once, convention);
                assert_eq!(once, twice, "{key} under {convention:?}");
            }
        }
    }

    #[test]
    fn degenerate_keys_pass_through() {
        assert_eq!(normalize("", Convention::Pascal), "");
        assert_eq!(normalize("---", Convention::Pascal), "---");
        assert_eq!(normalize("123", Convention::Pascal), "123");
    }
}

//! Clause rendering helpers.
//!
//! Statement text is assembled from small templates carrying `@name`
//! tokens. Expansion is a single pass: replacement values are emitted
//! verbatim and never re-scanned for tokens of their own.

/// Replace every occurrence of every token in `template`.
///
/// At each position the longest matching token wins, its replacement is
/// appended, and scanning resumes after the token. Tokens without a
/// replacement pass through verbatim. Never fails.
pub(crate) fn substitute(template: &str, replacements: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(ch) = rest.chars().next() {
        let matched = replacements
            .iter()
            .filter(|(token, _)| !token.is_empty() && rest.starts_with(token))
            .max_by_key(|(token, _)| token.len());

        match matched {
            Some((token, value)) => {
                out.push_str(value);
                rest = &rest[token.len()..];
            }
            None => {
                out.push(ch);
                rest = &rest[ch.len_utf8()..];
            }
        }
    }

    out
}

/// Join `items` with `,`, with no trailing separator; an empty input
/// yields `""`.
pub(crate) fn comma_list(items: &[String]) -> String {
    items.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitute_replaces_all_occurrences() {
        let out = substitute(
            "hello @name, good @time @name",
            &[("@name", "ada"), ("@time", "morning")],
        );
        assert_eq!(out, "hello ada, good morning ada");
    }

    #[test]
    fn substitute_is_single_pass() {
        // A replacement value containing another token is not re-substituted.
        let out = substitute("@a @b", &[("@a", "@b"), ("@b", "x")]);
        assert_eq!(out, "@b x");
    }

    #[test]
    fn substitute_leaves_unmatched_tokens() {
        let out = substitute("@known and @unknown", &[("@known", "k")]);
        assert_eq!(out, "k and @unknown");
    }

    #[test]
    fn substitute_prefers_longest_token() {
        let out = substitute("@cols", &[("@col", "short"), ("@cols", "long")]);
        assert_eq!(out, "long");
    }

    #[test]
    fn substitute_empty_template() {
        assert_eq!(substitute("", &[("@a", "x")]), "");
    }

    #[test]
    fn comma_list_empty_is_empty_string() {
        assert_eq!(comma_list(&[]), "");
    }

    #[test]
    fn comma_list_has_no_trailing_separator() {
        let items = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(comma_list(&items), "a,b,c");
    }

    #[test]
    fn comma_list_single_item() {
        assert_eq!(comma_list(&["a".to_string()]), "a");
    }
}

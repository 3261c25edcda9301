use wortwirbel_core::{Article, WordClass};

/// Suffix groups, checked in order; the first matching group wins.
const SUFFIX_RULES: &[(&[&str], Article)] = &[
    (&["ung", "heit", "keit", "schaft", "ion"], Article::Die),
    (&["chen", "lein", "ment", "um"], Article::Das),
    (&["er", "ling", "ig"], Article::Der),
];

/// Most common article, used when no suffix matches
const FALLBACK_ARTICLE: Article = Article::Der;

/// Guess the article of a noun from its ending. Non-nouns get none.
pub fn infer_article(word: &str, part_of_speech: &str) -> Option<Article> {
    if WordClass::from_tag(part_of_speech) != WordClass::Noun {
        return None;
    }

    let lower = word.to_lowercase();

    let article = SUFFIX_RULES
        .iter()
        .find(|(suffixes, _)| suffixes.iter().any(|s| lower.ends_with(s)))
        .map(|(_, article)| *article)
        .unwrap_or(FALLBACK_ARTICLE);

    Some(article)
}

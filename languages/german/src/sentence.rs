use wortwirbel_core::{Article, WordClass};

/// All sentence templates for a headword, in preference order.
/// Never empty.
pub fn sentence_candidates(
    word: &str,
    part_of_speech: &str,
    article: Option<Article>,
) -> Vec<String> {
    match (WordClass::from_tag(part_of_speech), article) {
        (WordClass::Noun, Some(article)) => vec![
            format!("{article} {word} ist schön."),
            format!("Ich sehe {} {word}.", article.accusative()),
            format!("{article} {word} ist hier."),
        ],
        (WordClass::Verb, _) => vec![
            format!("Ich {word}."),
            format!("Wir {word} gern."),
            format!("Sie {word} heute."),
        ],
        (WordClass::Adjective, _) => vec![
            format!("Das ist {word}."),
            format!("Er ist sehr {word}."),
            format!("Die Blume ist {word}."),
        ],
        _ => vec![default_sentence(word)],
    }
}

/// The sentence that gets persisted: always the first template
pub fn example_sentence(word: &str, part_of_speech: &str, article: Option<Article>) -> String {
    sentence_candidates(word, part_of_speech, article)
        .into_iter()
        .next()
        .unwrap_or_else(|| default_sentence(word))
}

fn default_sentence(word: &str) -> String {
    format!("Das ist {word}.")
}

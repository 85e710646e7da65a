//! Sentence cleaning and word tokenization.
//!
//! Cleaning works on ASCII punctuation only: apostrophes and backticks are
//! dropped so contractions stay a single token, hyphens are kept so hyphenated
//! terms stay a single token, and every other ASCII punctuation mark becomes a
//! space. Case is left untouched; callers lower-case first when they need to.
//!
//! Tokenizing splits fused forms such as `cannot` into `can` `not`.

/// Punctuation removed without leaving a gap.
const DROPPED: [char; 2] = ['\'', '`'];

pub fn clean_sentence(sentence: &str) -> String {
    sentence
        .replace("\\n", " ")
        .chars()
        .filter(|c| !DROPPED.contains(c))
        .map(|c| {
            if c.is_ascii_punctuation() && c != '-' {
                ' '
            } else {
                c
            }
        })
        .collect()
}

/// Splits cleaned text into word tokens, optionally reduced to base forms.
pub fn tokenize(cleaned: &str, lemmatize: bool) -> Vec<String> {
    if lemmatize {
        tokenize_with(cleaned, &NounLemmatizer)
    } else {
        split_words(cleaned)
    }
}

pub fn tokenize_with(cleaned: &str, lemmatizer: &dyn Lemmatizer) -> Vec<String> {
    split_words(cleaned)
        .into_iter()
        .map(|token| lemmatizer.lemmatize(&token))
        .collect()
}

/// Cleans then tokenizes a sentence.
pub fn clean_tokenize(sentence: &str, lemmatize: bool) -> Vec<String> {
    tokenize(&clean_sentence(sentence), lemmatize)
}

fn split_words(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for chunk in text.split_whitespace() {
        split_chunk(chunk, &mut tokens);
    }
    tokens
}

// Dash runs and non-ASCII symbols (curly quotes, ellipses, long dashes) stand
// alone; a single hyphen stays inside its word.
fn split_chunk(chunk: &str, tokens: &mut Vec<String>) {
    let chars: Vec<char> = chunk.chars().collect();
    let mut word = String::new();
    let mut index = 0;

    while index < chars.len() {
        let c = chars[index];
        if c == '-' && chars.get(index + 1) == Some(&'-') {
            flush(&mut word, tokens);
            let start = index;
            while index < chars.len() && chars[index] == '-' {
                index += 1;
            }
            tokens.push(chars[start..index].iter().collect());
            continue;
        }
        if !c.is_ascii() && !c.is_alphanumeric() {
            flush(&mut word, tokens);
            tokens.push(c.to_string());
        } else {
            word.push(c);
        }
        index += 1;
    }
    flush(&mut word, tokens);
}

fn flush(word: &mut String, tokens: &mut Vec<String>) {
    if word.is_empty() {
        return;
    }
    let word = std::mem::take(word);
    match contraction_split(&word) {
        Some(split) => {
            tokens.push(word[..split].to_string());
            tokens.push(word[split..].to_string());
        }
        None => tokens.push(word),
    }
}

/// Fused forms split in two, as a Treebank word tokenizer does. The number is
/// the length of the first part.
const CONTRACTIONS: &[(&str, usize)] = &[
    ("cannot", 3),
    ("gimme", 3),
    ("gonna", 3),
    ("gotta", 3),
    ("lemme", 3),
    ("wanna", 3),
];

fn contraction_split(word: &str) -> Option<usize> {
    CONTRACTIONS
        .iter()
        .find(|(form, _)| word.eq_ignore_ascii_case(form))
        .map(|(_, split)| *split)
}

pub trait Lemmatizer {
    fn lemmatize(&self, token: &str) -> String;
}

/// Rule-based noun lemmatizer using WordNet's noun detachment suffixes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NounLemmatizer;

const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("children", "child"),
    ("people", "person"),
    ("women", "woman"),
    ("men", "man"),
    ("chairmen", "chairman"),
    ("businessmen", "businessman"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
];

const INVARIANT_NOUNS: &[&str] = &[
    "news", "series", "species", "means", "this", "thus", "always", "perhaps", "whereas",
];

const INVARIANT_ENDINGS: &[&str] = &["ss", "us", "is"];

// Longest suffix first so "ches" wins over "s".
const NOUN_SUFFIXES: &[(&str, &str)] = &[
    ("ches", "ch"),
    ("shes", "sh"),
    ("sses", "ss"),
    ("xes", "x"),
    ("ies", "y"),
    ("s", ""),
];

const MIN_LEMMA_LEN: usize = 3;

impl Lemmatizer for NounLemmatizer {
    fn lemmatize(&self, token: &str) -> String {
        if let Some((_, lemma)) = IRREGULAR_NOUNS.iter().find(|(form, _)| *form == token) {
            return (*lemma).to_string();
        }
        if INVARIANT_NOUNS.contains(&token)
            || INVARIANT_ENDINGS.iter().any(|ending| token.ends_with(ending))
        {
            return token.to_string();
        }

        for (suffix, replacement) in NOUN_SUFFIXES {
            if let Some(stem) = token.strip_suffix(suffix) {
                let lemma = format!("{stem}{replacement}");
                if lemma.chars().count() >= MIN_LEMMA_LEN {
                    return lemma;
                }
            }
        }
        token.to_string()
    }
}

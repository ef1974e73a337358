//! Rule-based noun lemmatizer.
//!
//! Reduces plural nouns to their singular form with an exception table and a
//! short list of suffix rules. Words the rules would mangle (invariant plurals,
//! Latin-style singulars, common tool names) are returned unchanged.

const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("children", "child"),
    ("people", "person"),
    ("men", "man"),
    ("women", "woman"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("analyses", "analysis"),
    ("diagnoses", "diagnosis"),
    ("hypotheses", "hypothesis"),
    ("theses", "thesis"),
    ("crises", "crisis"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("vertices", "vertex"),
    ("appendices", "appendix"),
    ("lives", "life"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("halves", "half"),
    ("selves", "self"),
    ("shelves", "shelf"),
    ("wolves", "wolf"),
    ("movies", "movie"),
    ("cookies", "cookie"),
    ("ties", "tie"),
    ("lies", "lie"),
    ("pies", "pie"),
    ("caches", "cache"),
    ("niches", "niche"),
    ("headaches", "headache"),
    ("quizzes", "quiz"),
];

const INVARIANT: &[&str] = &[
    "news",
    "series",
    "species",
    "means",
    "headquarters",
    "canvas",
    "atlas",
    "alias",
    "bias",
    "chaos",
    "devops",
    "kubernetes",
    "jenkins",
    "pandas",
    "redis",
    "postgres",
    "sass",
    "aws",
    "gcs",
];

const PROTECTED_SUFFIXES: &[&str] = &["ss", "us", "is", "ics"];

/// Suffix replacements, longest first. Only the first match applies.
const SUFFIX_RULES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("xes", "x"),
    ("zzes", "zz"),
    ("tzes", "tz"),
    ("ies", "y"),
    ("s", ""),
];

const MIN_LEMMATIZE_LEN: usize = 4;

/// Returns the singular (lemma) form of a lowercase noun.
pub fn lemmatize(word: &str) -> String {
    if let Some((_, lemma)) = IRREGULAR_PLURALS.iter().find(|(plural, _)| *plural == word) {
        return (*lemma).to_string();
    }

    if word.chars().count() < MIN_LEMMATIZE_LEN
        || !word.chars().all(char::is_alphabetic)
        || INVARIANT.contains(&word)
        || PROTECTED_SUFFIXES.iter().any(|s| word.ends_with(s))
    {
        return word.to_string();
    }

    for (suffix, replacement) in SUFFIX_RULES {
        if let Some(stem) = word.strip_suffix(suffix) {
            // "ies" needs a real stem in front of it ("dies" is not "dy").
            if *suffix == "ies" && stem.chars().count() < 2 {
                break;
            }
            return format!("{stem}{replacement}");
        }
    }

    word.to_string()
}

/// Levenshtein edit distance, rolling single-row variant.
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let target: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return target.len();
    }
    if target.is_empty() {
        return a.chars().count();
    }

    let mut row: Vec<usize> = (0..=target.len()).collect();

    for (i, source_char) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &target_char) in target.iter().enumerate() {
            let substitution = if source_char == target_char {
                diagonal
            } else {
                diagonal + 1
            };
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(row[j + 1] + 1);
        }
    }

    row[target.len()]
}

/// Plain similarity ratio between two strings, 0-100.
///
/// 100 = identical, 0 = nothing in common, based on normalized edit distance.
pub fn ratio(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 100.0;
    }
    let distance = levenshtein_distance(a, b);
    (1.0 - distance as f64 / max_len as f64) * 100.0
}

/// Token-set similarity ratio between two strings, 0-100.
///
/// Case-folds, splits on non-alphanumeric characters, and compares the
/// sorted token intersection against each side's remainder, so word order
/// and repeated words don't matter: "analyst data" scores 100 against
/// "data analyst", and "data analyst" scores high against
/// "senior data analyst".
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a = tokenize(a);
    let tokens_b = tokenize(b);

    if tokens_a.is_empty() && tokens_b.is_empty() {
        return 100.0;
    }
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    // BTreeSet iteration keeps each group sorted
    let intersection: Vec<&String> = tokens_a.iter().filter(|t| tokens_b.contains(*t)).collect();
    let only_a: Vec<&String> = tokens_a.iter().filter(|t| !tokens_b.contains(*t)).collect();
    let only_b: Vec<&String> = tokens_b.iter().filter(|t| !tokens_a.contains(*t)).collect();

    let base = join(&intersection, &[]);
    let combined_a = join(&intersection, &only_a);
    let combined_b = join(&intersection, &only_b);

    ratio(&base, &combined_a)
        .max(ratio(&base, &combined_b))
        .max(ratio(&combined_a, &combined_b))
}

fn tokenize(input: &str) -> std::collections::BTreeSet<String> {
    input
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn join(head: &[&String], tail: &[&String]) -> String {
    head.iter()
        .chain(tail.iter())
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

//! Single-field fuzzy scorer.
//!
//! Not edit-distance matching: a field scores by contiguous substring
//! first, then by ordered subsequence with positional decay. The band
//! ordering (prefix 1.0 > interior 0.8 > subsequence < 0.8-ish > miss 0)
//! is what keeps relevance ranking stable, so it must not be reshuffled.

/// Score `text` against `query`, in `[0, 1]`.
///
/// - empty query: 1.0 (neutral)
/// - case-insensitive substring: 1.0 at the start of `text`, else 0.8
/// - otherwise: greedy left-to-right subsequence match; a query character
///   matched at 0-indexed text position `i` contributes `1/(i+1)`, and the
///   accumulator is divided by the query length. If the scan cannot place
///   every query character in order, the score is 0.
pub fn match_score(query: &str, text: &str) -> f64 {
    if query.is_empty() {
        return 1.0;
    }

    let query = query.to_lowercase();
    let text = text.to_lowercase();

    if let Some(at) = text.find(&query) {
        return if at == 0 { 1.0 } else { 0.8 };
    }

    let mut score = 0.0;
    let mut pending = query.chars();
    let mut wanted = pending.next();
    for (i, c) in text.chars().enumerate() {
        match wanted {
            Some(q) if q == c => {
                // Earlier matches are worth more.
                score += 1.0 / (i as f64 + 1.0);
                wanted = pending.next();
            }
            Some(_) => {}
            None => break,
        }
    }

    if wanted.is_none() {
        let query_len = query.chars().count();
        score / query_len as f64
    } else {
        0.0
    }
}

/// Case-fold for matching: trimmed, Unicode-lowercased. Display keeps the
/// stored casing; only comparisons go through here.
pub fn fold(s: &str) -> String {
    s.trim().to_lowercase()
}

//! Subject-id normalization and synthesis.

use wac_core::AclRule;

/// Normalize a subject id against the document's `access_to`.
///
/// `https://pod.example/file#rule1` becomes `#rule1` when the document governs
/// `https://pod.example/file`. Any other id is returned unchanged.
pub fn normalize_subject_id(access_to: &str, subject_id: &str) -> String {
    match subject_id.strip_prefix(access_to) {
        Some(fragment) if fragment.starts_with('#') => fragment.to_string(),
        _ => subject_id.to_string(),
    }
}

/// Build a readable subject id for `rule` that `taken` does not reject.
///
/// The id is the rule's permission label, with `Default` appended for
/// inherited rules and a counter appended on collision: `#ReadWrite`,
/// `#ReadWrite1`, `#ReadWrite2`, ...
pub fn synthesize_subject_id<F>(rule: &AclRule, taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    let label = rule.permissions.label();
    let mut base = String::from("#");
    base.push_str(if label.is_empty() { "Rule" } else { &label });
    if rule.is_default() {
        base.push_str("Default");
    }

    if !taken(&base) {
        return base;
    }

    let mut index: u64 = 1;
    loop {
        let candidate = format!("{base}{index}");
        if !taken(&candidate) {
            return candidate;
        }
        index += 1;
    }
}

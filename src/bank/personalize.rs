//! Recipient-name substitution.

/// Weave `recipient_name` into `text`.
///
/// The first matching rule wins:
///
/// 1. Text starting with `"You"`: the prefix is replaced by the name.
/// 2. Text containing `"your"`: the first occurrence becomes `"{name}'s"`.
/// 3. Anything else: `"{name}, "` is prepended and the first character
///    lower-cased.
///
/// Matching is literal and case-sensitive. A missing or empty name returns
/// `text` unchanged.
///
/// ```rust
/// # use plaudit::bank::personalize;
/// assert_eq!(personalize("You are wonderful", Some("Sam")), "Sam are wonderful");
/// assert_eq!(personalize("I love your style", Some("Sam")), "I love Sam's style");
/// assert_eq!(personalize("Something great", Some("Sam")), "Sam, something great");
/// ```
pub fn personalize(text: &str, recipient_name: Option<&str>) -> String {
    let name = match recipient_name {
        Some(name) if !name.is_empty() => name,
        _ => return text.to_string(),
    };

    if let Some(rest) = text.strip_prefix("You") {
        return format!("{name} {}", rest.trim());
    }

    if text.contains("your") {
        return text.replacen("your", &format!("{name}'s"), 1);
    }

    let mut chars = text.chars();
    let lowered: String = match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    };
    format!("{name}, {lowered}")
}

/// Fixed mask segment used for secret values.
const MASK: &str = "••••••••";

/// Display transform for a possibly secret value.
///
/// Non-secret values, and secret values while visibility is toggled on, pass
/// through unmodified. Masked values of 8 or fewer characters render as the
/// fixed mask; longer values keep their first and last 4 characters around
/// it. The stored value is never altered, so toggling visibility is lossless.
pub fn mask_value(value: &str, is_secret: bool, show_secrets: bool) -> String {
    if !is_secret || show_secrets {
        return value.to_string();
    }

    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= 8 {
        return MASK.to_string();
    }

    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}{MASK}{tail}")
}

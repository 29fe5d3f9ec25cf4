use crate::domain::ports::RandomSource;

pub const NAME_TOKEN: &str = "{name}";
pub const DATE_TOKEN: &str = "{date}";
pub const DAY_OF_WEEK_TOKEN: &str = "{dayOfWeek}";

pub fn pick_message<'a, R: RandomSource + ?Sized>(
    messages: &'a [String],
    rng: &mut R,
) -> Option<&'a str> {
    if messages.is_empty() {
        return None;
    }
    let index = rng.next_index(messages.len()).min(messages.len() - 1);
    Some(messages[index].as_str())
}

/// Literal substring replacement, applied in order. Braces that are not one of
/// the tokens are left untouched.
pub fn render_template(template: &str, replacements: &[(&str, &str)]) -> String {
    replacements
        .iter()
        .fold(template.to_string(), |text, (token, value)| {
            text.replace(token, value)
        })
}

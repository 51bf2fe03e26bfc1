//! Turns a model completion into plan steps.
//!
//! Recognized list items:
//!
//! - numbered: `1.`, `1)`, `1:`, `1 -`, optionally prefixed with `Step`
//! - bulleted: `-`, `*`, `•`
//!
//! Numbered items win: once any line is numbered, bullets are taken as
//! sub-points of those items and ignored. Bullets are steps only in an
//! answer without numbers, and when no line is a list item at all the whole
//! answer is one step per non-empty line. Markdown bold (`**`) is removed
//! wherever it appears.

use crate::models::MAX_STEPS;

/// A classified line of the model's answer.
enum Line {
    Numbered(String),
    Bullet(String),
    Text(String),
}

/// Extracts at most `MAX_STEPS + 1` candidate steps from `text`.
///
/// One extra step is kept so the caller can tell "exactly five" from "more
/// than five" when logging.
pub fn parse_plan_steps(text: &str) -> Vec<String> {
    let lines: Vec<Line> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(classify)
        .collect();

    let has_numbered = lines.iter().any(|line| matches!(line, Line::Numbered(_)));
    let has_bullets = lines.iter().any(|line| matches!(line, Line::Bullet(_)));

    lines
        .into_iter()
        .filter_map(|line| match line {
            Line::Numbered(item) => Some(item),
            Line::Bullet(item) if !has_numbered => Some(item),
            Line::Text(item) if !has_numbered && !has_bullets => Some(item),
            _ => None,
        })
        .filter(|item| !item.is_empty())
        .take(MAX_STEPS + 1)
        .collect()
}

fn classify(line: &str) -> Line {
    let unbolded = line.trim_start_matches("**").trim_start();

    if let Some(rest) = ["- ", "* ", "• "]
        .iter()
        .find_map(|bullet| unbolded.strip_prefix(bullet))
    {
        return Line::Bullet(clean_text(rest));
    }

    match numbered_item(strip_step_word(unbolded)) {
        Some(rest) => Line::Numbered(clean_text(rest)),
        None => Line::Text(clean_text(line)),
    }
}

/// Returns the text after a leading `N.`, `N)`, `N:` or `N -` marker.
fn numbered_item(line: &str) -> Option<&str> {
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let rest = line[digits..].trim_start_matches("**");
    let mut chars = rest.chars();
    match chars.next() {
        Some('.' | ')' | ':') => Some(chars.as_str()),
        Some(' ') => chars.as_str().trim_start().strip_prefix(['-', ':']),
        _ => None,
    }
}

/// Drops a leading `Step` word (any case) so `Step 2: ...` parses like `2:`.
fn strip_step_word(line: &str) -> &str {
    match line.get(..4) {
        Some(word) if word.eq_ignore_ascii_case("step") => line[4..].trim_start(),
        _ => line,
    }
}

/// Trims whitespace and removes `**` bold markers from a step.
fn clean_text(text: &str) -> String {
    let mut cleaned = text.trim().to_string();

    // Paired markers anywhere, e.g. `**Title**: detail`
    while let Some(open) = cleaned.find("**") {
        match cleaned[open + 2..].find("**") {
            Some(offset) => {
                let close = open + 2 + offset;
                cleaned.replace_range(close..close + 2, "");
                cleaned.replace_range(open..open + 2, "");
            }
            None => break,
        }
    }

    cleaned
        .trim()
        .trim_start_matches("**")
        .trim_end_matches("**")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_list() {
        let text = "1. Pick date\n2. Book venue\n3. Send invites";
        assert_eq!(parse_plan_steps(text), ["Pick date", "Book venue", "Send invites"]);
    }

    #[test]
    fn test_preamble_and_mixed_markers_are_handled() {
        let text = "Here is your plan:\n\n\
                    1) Define requirements\n\
                    **2.** Design the schema\n\
                    Step 3: Implement the API\n\
                    4 - Write tests\n\
                    \nGood luck!";
        assert_eq!(
            parse_plan_steps(text),
            [
                "Define requirements",
                "Design the schema",
                "Implement the API",
                "Write tests"
            ]
        );
    }

    #[test]
    fn test_bullets_and_bold_text() {
        let text = "- **Gather feedback**\n* Prioritize fixes\n• Ship release";
        assert_eq!(
            parse_plan_steps(text),
            ["Gather feedback", "Prioritize fixes", "Ship release"]
        );
    }

    #[test]
    fn test_sub_bullets_under_numbered_items_are_ignored() {
        let text = "1. **Define Requirements**: Identify stakeholders\n   \
                    - Interview users\n   \
                    - Collect metrics\n\
                    2. **Design**: Sketch the UI\n\
                    3. **Build**: Implement features\n   \
                    * Write tests\n\
                    4. **Launch**: Ship it";
        assert_eq!(
            parse_plan_steps(text),
            [
                "Define Requirements: Identify stakeholders",
                "Design: Sketch the UI",
                "Build: Implement features",
                "Launch: Ship it"
            ]
        );
    }

    #[test]
    fn test_bold_inside_step_is_removed() {
        assert_eq!(clean_text("**Book** the **venue** early"), "Book the venue early");
        assert_eq!(clean_text("Pick date**"), "Pick date");
        assert_eq!(clean_text("2 ** 3 rule"), "2 ** 3 rule");
    }

    #[test]
    fn test_plain_lines_without_markers() {
        let text = "Pick date\n\nBook venue\nSend invites\n";
        assert_eq!(parse_plan_steps(text), ["Pick date", "Book venue", "Send invites"]);
    }

    #[test]
    fn test_empty_numbered_items_are_skipped() {
        // The model echoing the prompt's blank template
        let text = "1. Pick date\n2. \n3. Book venue\n4.\n5. Send invites";
        assert_eq!(parse_plan_steps(text), ["Pick date", "Book venue", "Send invites"]);
    }

    #[test]
    fn test_numbers_inside_text_are_not_markers() {
        let text = "2024 budget review\n1. Collect invoices\n2. Reconcile\n3. Report";
        assert_eq!(
            parse_plan_steps(text),
            ["Collect invoices", "Reconcile", "Report"]
        );
    }

    #[test]
    fn test_collection_stops_after_one_extra_step() {
        let text: String = (1..=9).map(|i| format!("{i}. Step number {i}\n")).collect();
        assert_eq!(parse_plan_steps(&text).len(), MAX_STEPS + 1);
    }

    #[test]
    fn test_empty_text() {
        assert!(parse_plan_steps("").is_empty());
        assert!(parse_plan_steps("  \n \n").is_empty());
    }
}

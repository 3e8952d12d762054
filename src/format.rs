//! Markdown-to-`§`-code conversion for chat output.
//!
//! Gemini replies arrive with markdown emphasis; game chat only understands
//! legacy `§` formatting codes. This is a lossy, best-effort transform, not a
//! markdown parser: paired `**` spans become bold, everything else involving
//! asterisks is simply stripped.

/// Green tag + white text, prepended to every successful reply.
pub const AI_TAG: &str = "§a[AI] §f";
/// Red, prepended to every error line.
pub const ERROR_TAG: &str = "§c";
/// Gray acknowledgement sent by the glue while a request is in flight.
pub const THINKING_LINE: &str = "§7[AI] Thinking...";

const BOLD: &str = "§l";

/// Convert a reply to display form: a `**…**` span turns into `§l` followed
/// by the span text, an unpaired `**` is dropped, and any remaining single
/// `*` characters are stripped.
pub fn markdown_to_display(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(open) = rest.find("**") {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];
        match after_open.find("**") {
            Some(close) => {
                out.push_str(BOLD);
                out.push_str(&after_open[..close]);
                rest = &after_open[close + 2..];
            }
            None => {
                // Unpaired opener: drop the marker, keep the text.
                rest = after_open;
            }
        }
    }
    out.push_str(rest);

    out.replace('*', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paired_double_markers_become_bold() {
        assert_eq!(markdown_to_display("Hello **world**"), "Hello §lworld");
    }

    #[test]
    fn multiple_bold_spans() {
        assert_eq!(
            markdown_to_display("**one** and **two**"),
            "§lone and §ltwo"
        );
    }

    #[test]
    fn single_markers_are_stripped() {
        assert_eq!(markdown_to_display("a *bullet* point"), "a bullet point");
    }

    #[test]
    fn unpaired_double_marker_is_dropped() {
        assert_eq!(markdown_to_display("oops ** trailing"), "oops  trailing");
    }

    #[test]
    fn no_asterisk_survives() {
        let converted = markdown_to_display("***mixed** *mess* **");
        assert!(!converted.contains('*'), "got {converted:?}");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(markdown_to_display("just a sentence."), "just a sentence.");
    }

    #[test]
    fn empty_input() {
        assert_eq!(markdown_to_display(""), "");
    }
}

//! Width-based line wrapping

/// Something that can measure the rendered width of a string
///
/// Implemented for any `Fn(&str) -> f64`, so a closure over a font and
/// size works directly.
pub trait TextMeasure {
    /// Rendered width of `text`, in the same unit as the wrap width
    fn width(&self, text: &str) -> f64;
}

impl<F> TextMeasure for F
where
    F: Fn(&str) -> f64,
{
    fn width(&self, text: &str) -> f64 {
        self(text)
    }
}

/// Split text into lines that fit within `max_width`
///
/// Explicit newlines always start a new line. Words are joined with single
/// spaces; a word wider than `max_width` on its own is broken between
/// characters. Blank input yields a single empty line.
///
/// # Arguments
/// * `text` - Text to wrap
/// * `max_width` - Maximum line width (non-positive disables wrapping)
/// * `measure` - Width function for the font in use
pub fn wrap_to_width<M>(text: &str, max_width: f64, measure: &M) -> Vec<String>
where
    M: TextMeasure + ?Sized,
{
    if max_width <= 0.0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current_line = String::new();

        for word in paragraph.split_whitespace() {
            let candidate = if current_line.is_empty() {
                word.to_string()
            } else {
                format!("{current_line} {word}")
            };

            if measure.width(&candidate) <= max_width {
                current_line = candidate;
                continue;
            }

            // Word doesn't fit, start new line
            if !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
            }

            if measure.width(word) <= max_width {
                current_line = word.to_string();
            } else {
                let mut pieces = break_word(word, max_width, measure);
                // Last piece stays open so following words can join it
                current_line = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
            }
        }

        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// Break a single over-long word between characters
fn break_word<M>(word: &str, max_width: f64, measure: &M) -> Vec<String>
where
    M: TextMeasure + ?Sized,
{
    let mut pieces = Vec::new();
    let mut current = String::new();

    for c in word.chars() {
        current.push(c);
        // Always keep at least one character per piece
        if measure.width(&current) > max_width && current.chars().count() > 1 {
            current.pop();
            pieces.push(std::mem::take(&mut current));
            current.push(c);
        }
    }

    if !current.is_empty() {
        pieces.push(current);
    }

    pieces
}

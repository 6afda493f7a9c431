/// Operator symbols that [`spacing`] pads with spaces.
///
/// `&` and `|` are not arithmetic operators here but are padded all the
/// same, so the transform can be applied to any infix text.
pub const SPACED_OPERATORS: &[char] = &['+', '-', '%', '*', '/', '^', '&', '|'];

/// How expression text is normalized before it is echoed back.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Normalization {
    /// Leave the text exactly as written.
    #[default]
    Preserve,
    /// Remove all whitespace, see [`compact`].
    Compact,
    /// Put one space on each side of every binary operator, see [`spacing`].
    Spacing,
}

impl Normalization {
    /// Applies this normalization to `expression`.
    ///
    /// # Example
    /// ```
    /// use reckon::util::format::Normalization;
    ///
    /// assert_eq!(Normalization::Compact.apply(" 1 +  2 "), "1+2");
    /// assert_eq!(Normalization::Spacing.apply("1+2"), "1 + 2");
    /// assert_eq!(Normalization::Preserve.apply("1 +2"), "1 +2");
    /// ```
    #[must_use]
    pub fn apply(self, expression: &str) -> String {
        match self {
            Self::Preserve => expression.to_string(),
            Self::Compact => compact(expression),
            Self::Spacing => spacing(expression),
        }
    }
}

/// Removes all whitespace from `expression`.
///
/// # Example
/// ```
/// use reckon::util::format::compact;
///
/// assert_eq!(compact(" 2 * ( 4 - 5 ) "), "2*(4-5)");
/// ```
#[must_use]
pub fn compact(expression: &str) -> String {
    expression.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Puts exactly one space on each side of every binary operator.
///
/// An operator counts as binary when the closest non-blank character before
/// it is a digit or a closing parenthesis. Any other operator, such as the unary
/// minus in `-3` or `2*-3`, is copied through unchanged. Blanks around a
/// binary operator are replaced by the single spaces; blanks elsewhere are
/// kept. Applying the transform twice gives the same text as applying it
/// once.
///
/// # Example
/// ```
/// use reckon::util::format::spacing;
///
/// assert_eq!(spacing("2*(4-5)"), "2 * (4 - 5)");
/// assert_eq!(spacing("-3+4"), "-3 + 4");
/// assert_eq!(spacing("2*-3"), "2 * -3");
/// assert_eq!(spacing("(-3)-(4)"), "(-3) - (4)");
/// assert_eq!(spacing(&spacing("4^7-12^3")), "4 ^ 7 - 12 ^ 3");
/// ```
#[must_use]
pub fn spacing(expression: &str) -> String {
    let mut out = String::with_capacity(expression.len() * 2);
    let mut chars = expression.chars().peekable();

    while let Some(c) = chars.next() {
        if SPACED_OPERATORS.contains(&c) && follows_operand(&out) {
            out.truncate(out.trim_end().len());
            out.push(' ');
            out.push(c);

            while chars.next_if(|n| n.is_whitespace()).is_some() {}
            if chars.peek().is_some() {
                out.push(' ');
            }
        } else {
            out.push(c);
        }
    }

    out
}

/// Whether the last non-blank character of `text` ends an operand.
fn follows_operand(text: &str) -> bool {
    text.trim_end()
        .chars()
        .next_back()
        .is_some_and(|c| c.is_ascii_digit() || c == ')')
}

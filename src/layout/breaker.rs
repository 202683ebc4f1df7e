use super::measure::{advance, check_positive, input_lines, width_of_line};
use super::policy::{BreakPolicy, Placement};
use crate::font::FontMetrics;
use crate::units::Pt;
use crate::TextError;

/// Where an overflowing line can be broken, relative to the start of the text
/// being scanned
#[derive(Debug, Copy, Clone)]
struct BreakPoint {
    /// byte offset of the delimiter itself
    delimiter: usize,
    /// byte offset just past the delimiter
    resume: usize,
}

/// Everything learned while growing a candidate line until it overflowed
struct Window {
    /// rightmost break point of each policy tier, in tier order
    breaks: Vec<Option<BreakPoint>>,
    /// longest prefix (in bytes) that still fits once the continuation marker is appended
    marked: Option<usize>,
}

impl Window {
    /// Whether nothing but a split before the first character could end the line
    fn is_empty(&self) -> bool {
        self.marked.is_none() && self.breaks.iter().all(Option::is_none)
    }
}

/// Breaks paragraphs into lines that fit a fixed width when set in a given font.
///
/// Each explicit line break in the input starts a new line. Lines that are still
/// too wide are broken according to the [BreakPolicy]: preferably between words,
/// then after punctuation, and as a last resort by size, appending the policy's
/// continuation marker to show that the word carries on.
///
/// ```
/// use pdf_linebreak::{layout::LineBreaker, In, StandardFont, Pt};
///
/// let breaker = LineBreaker::new(&StandardFont::Courier, Pt(10.0), In(1.0).into())
///     .expect("size and width are positive");
/// // twelve Courier characters fit in an inch
/// let lines = breaker.break_lines("a monospaced paragraph").expect("Courier covers ASCII");
/// assert_eq!(lines, vec!["a monospaced", "paragraph"]);
/// ```
pub struct LineBreaker<'f, F: ?Sized> {
    font: &'f F,
    size: Pt,
    max_width: Pt,
    policy: BreakPolicy,
}

impl<'f, F: FontMetrics + ?Sized> LineBreaker<'f, F> {
    /// Create a line breaker using the default [BreakPolicy]. Fails if either the size or the
    /// maximum width isn't a finite, positive number.
    pub fn new(font: &'f F, size: Pt, max_width: Pt) -> Result<LineBreaker<'f, F>, TextError> {
        check_positive("size", size)?;
        check_positive("max_width", max_width)?;

        Ok(LineBreaker {
            font,
            size,
            max_width,
            policy: BreakPolicy::default(),
        })
    }

    /// Replace the default [BreakPolicy]
    pub fn with_policy(mut self, policy: BreakPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The policy used to pick break points
    pub fn policy(&self) -> &BreakPolicy {
        &self.policy
    }

    /// The widest a line may be, unless a single glyph is wider
    pub fn max_width(&self) -> Pt {
        self.max_width
    }

    /// Break `text` into lines that each fit within the maximum width. Only lines
    /// produced by splitting a single glyph that is wider than the maximum width on
    /// its own can overflow.
    pub fn break_lines(&self, text: &str) -> Result<Vec<String>, TextError> {
        let mut lines: Vec<String> = Vec::new();

        for line in input_lines(text) {
            if width_of_line(line, self.font, self.size)? <= self.max_width {
                lines.push(line.to_string());
            } else {
                self.wrap_line(line, &mut lines)?;
            }
        }

        Ok(lines)
    }

    fn advance(&self, ch: char) -> Result<f64, TextError> {
        advance(self.font, ch, self.size.0 as f64)
    }

    // narrowing here matches what width_of_text reports for the same characters
    fn fits(&self, width: f64) -> bool {
        width as f32 <= self.max_width.0
    }

    fn wrap_line(&self, line: &str, lines: &mut Vec<String>) -> Result<(), TextError> {
        let produced_before = lines.len();

        // the marker is only needed for forced splits, so a font that can't draw it
        // is only an error once one happens
        let marker: Option<Vec<f64>> = self
            .policy
            .continuation_marker
            .chars()
            .map(|ch| self.advance(ch))
            .collect::<Result<_, _>>()
            .ok();

        // indentation is kept unless it leaves no room for anything after it
        let indent = self.leading_dropped(line);
        let mut start = 0;
        loop {
            if start > 0 {
                start += self.leading_dropped(&line[start..]);
            }
            if start >= line.len() {
                break;
            }

            let rest = &line[start..];
            match self.scan(rest, marker.as_deref())? {
                None => {
                    lines.push(self.trim_dropped(rest).to_string());
                    break;
                }
                Some(window) if start == 0 && indent > 0 && window.is_empty() => {
                    log::trace!("indentation of {indent} bytes doesn't fit, dropping it");
                    start = indent;
                }
                Some(window) => {
                    let (text, consumed) = self.choose_break(rest, window, marker.is_some())?;
                    lines.push(text);
                    start += consumed;
                }
            }
        }

        log::debug!(
            "wrapped a line of {} characters into {} lines",
            line.chars().count(),
            lines.len() - produced_before
        );
        Ok(())
    }

    /// Grow a candidate line from the start of `text` one character at a time,
    /// keeping a running width, until the next character would overflow. Returns
    /// [None] if all of `text` fits.
    fn scan(&self, text: &str, marker: Option<&[f64]>) -> Result<Option<Window>, TextError> {
        let mut window = Window {
            breaks: vec![None; self.policy.tiers.len()],
            marked: None,
        };
        let mut width = 0.0;
        // only indentation so far, which can't end a line on its own
        let mut blank = true;

        for (i, ch) in text.char_indices() {
            let advance = self.advance(ch)?;
            let resume = i + ch.len_utf8();
            let dropped = self.policy.drops(ch);

            if !self.fits(width + advance) {
                // a dropped delimiter doesn't need to fit, so the line can end right before it
                if dropped && !blank {
                    if let Some(tier) = self.policy.tier_of(ch) {
                        window.breaks[tier] = Some(BreakPoint {
                            delimiter: i,
                            resume,
                        });
                    }
                }
                return Ok(Some(window));
            }
            width += advance;
            blank &= dropped;
            if blank {
                continue;
            }

            if let Some(marker) = marker {
                if self.fits(marker.iter().fold(width, |w, a| w + a)) {
                    window.marked = Some(resume);
                }
            }
            if let Some(tier) = self.policy.tier_of(ch) {
                window.breaks[tier] = Some(BreakPoint {
                    delimiter: i,
                    resume,
                });
            }
        }

        Ok(None)
    }

    /// Pick the line to emit from an overflowing window, returning it along with
    /// how many bytes of `text` it consumed
    fn choose_break(
        &self,
        text: &str,
        window: Window,
        marker_measurable: bool,
    ) -> Result<(String, usize), TextError> {
        let preferred = window
            .breaks
            .iter()
            .enumerate()
            .find_map(|(tier, point)| point.map(|point| (tier, point)));

        if let Some((tier, point)) = preferred {
            let tier = &self.policy.tiers[tier];
            log::trace!("breaking on {} at byte {}", tier.name, point.resume);
            let line = match tier.placement {
                Placement::Drop => self.trim_dropped(&text[..point.delimiter]),
                Placement::Keep => &text[..point.resume],
            };
            return Ok((line.to_string(), point.resume));
        }

        // always consume at least one character, even if it alone overflows
        let first = text.chars().next().map_or(text.len(), char::len_utf8);
        let split = window.marked.unwrap_or(first);
        if split >= text.len() {
            return Ok((text.to_string(), text.len()));
        }

        if !marker_measurable {
            // surface which marker glyph is missing
            for ch in self.policy.continuation_marker.chars() {
                self.advance(ch)?;
            }
        }
        log::trace!("no break point found, splitting after byte {split}");
        Ok((
            format!("{}{}", &text[..split], self.policy.continuation_marker),
            split,
        ))
    }

    /// Length in bytes of the run of dropped delimiters at the start of `text`
    fn leading_dropped(&self, text: &str) -> usize {
        text.len() - text.trim_start_matches(|ch: char| self.policy.drops(ch)).len()
    }

    fn trim_dropped<'t>(&self, text: &'t str) -> &'t str {
        text.trim_end_matches(|ch: char| self.policy.drops(ch))
    }
}

/// Break `text` into lines no wider than `max_width` when set in `font` at `size`,
/// using the default [BreakPolicy].
///
/// ```
/// use pdf_linebreak::{layout::{break_lines, width_of_text}, Pt, StandardFont};
///
/// let font = StandardFont::Helvetica;
/// let max_width = width_of_text("This.should.be.splitted.on.a.dot.", &font, Pt(12.0))?;
/// let lines = break_lines(
///     "This.should.be.splitted.on.a.dot.No.spaces.in.here.",
///     &font,
///     Pt(12.0),
///     max_width,
/// )?;
/// assert_eq!(lines, vec!["This.should.be.splitted.on.a.dot.", "No.spaces.in.here."]);
/// # Ok::<(), pdf_linebreak::TextError>(())
/// ```
pub fn break_lines<F: FontMetrics + ?Sized>(
    text: &str,
    font: &F,
    size: Pt,
    max_width: Pt,
) -> Result<Vec<String>, TextError> {
    LineBreaker::new(font, size, max_width)?.break_lines(text)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::layout::{width_of_text, DelimiterTier};
    use crate::{StandardFont, WithFallback};

    /// Every glyph is 500 per-mille wide, so at 10pt each character is 5pt
    struct Fixed;

    impl FontMetrics for Fixed {
        fn glyph_width(&self, ch: char) -> Option<f32> {
            if ch == '\u{1F600}' {
                None
            } else {
                Some(500.0)
            }
        }
    }

    /// A breaker where exactly `chars` characters fit on a line
    fn fixed_breaker(chars: usize) -> LineBreaker<'static, Fixed> {
        LineBreaker::new(&Fixed, Pt(10.0), Pt(5.0 * chars as f32)).expect("valid parameters")
    }

    fn lines(breaker: &LineBreaker<'_, Fixed>, text: &str) -> Vec<String> {
        breaker.break_lines(text).expect("can break lines")
    }

    #[test]
    fn fitting_lines_are_untouched() {
        assert_eq!(lines(&fixed_breaker(20), "  keeps   spacing  "), vec!["  keeps   spacing  "]);
        assert_eq!(lines(&fixed_breaker(5), "12345"), vec!["12345"]);
    }

    #[test]
    fn explicit_breaks_are_preserved() {
        assert_eq!(lines(&fixed_breaker(20), "one\ntwo\n\nfour"), vec!["one", "two", "", "four"]);
        assert_eq!(lines(&fixed_breaker(20), "trailing\n"), vec!["trailing", ""]);
        assert_eq!(lines(&fixed_breaker(20), ""), vec![""]);
        assert_eq!(lines(&fixed_breaker(20), "windows\r\nbreaks"), vec!["windows", "breaks"]);
    }

    #[test]
    fn breaks_between_words() {
        assert_eq!(
            lines(&fixed_breaker(10), "the quick brown fox jumps"),
            vec!["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn the_overflowing_space_is_a_break_point() {
        assert_eq!(lines(&fixed_breaker(4), "abcd efgh"), vec!["abcd", "efgh"]);
    }

    #[test]
    fn runs_of_spaces_collapse_at_breaks() {
        assert_eq!(lines(&fixed_breaker(6), "aaa    bbb   "), vec!["aaa", "bbb"]);
    }

    #[test]
    fn wrapped_lines_keep_their_indentation() {
        assert_eq!(lines(&fixed_breaker(8), "   abc defgh"), vec!["   abc", "defgh"]);
        assert_eq!(lines(&fixed_breaker(8), "   abcde fg"), vec!["   abcde", "fg"]);
        assert_eq!(
            lines(&fixed_breaker(6), "   leading words"),
            vec!["   le-", "ading", "words"]
        );
    }

    #[test]
    fn indentation_wider_than_the_line_is_dropped() {
        assert_eq!(lines(&fixed_breaker(3), "      abc def"), vec!["abc", "def"]);
        assert_eq!(lines(&fixed_breaker(4), "    abcdefg"), vec!["abc-", "defg"]);
    }

    #[test]
    fn spaces_win_over_later_punctuation() {
        assert_eq!(lines(&fixed_breaker(10), "ab cd.ef.gh.ij"), vec!["ab", "cd.ef.gh.", "ij"]);
    }

    #[test]
    fn rightmost_punctuation_wins_regardless_of_kind() {
        assert_eq!(lines(&fixed_breaker(8), "a.b,c/d-efgh"), vec!["a.b,c/d-", "efgh"]);
        assert_eq!(lines(&fixed_breaker(8), "a-b/c,d.efgh"), vec!["a-b/c,d.", "efgh"]);
    }

    #[test]
    fn forced_splits_leave_room_for_the_marker() {
        assert_eq!(
            lines(&fixed_breaker(5), "abcdefghijkl"),
            vec!["abcd-", "efgh-", "ijkl"]
        );
    }

    #[test]
    fn glyphs_wider_than_the_line_still_make_progress() {
        let breaker = LineBreaker::new(&Fixed, Pt(10.0), Pt(3.0)).expect("valid parameters");
        assert_eq!(lines(&breaker, "abc"), vec!["a-", "b-", "c"]);
        assert_eq!(lines(&breaker, "a"), vec!["a"]);
    }

    #[test]
    fn multi_byte_characters_split_on_char_boundaries() {
        assert_eq!(lines(&fixed_breaker(4), "ééééééé"), vec!["ééé-", "éééé"]);
    }

    #[test]
    fn custom_policies_change_the_break_points() {
        let policy = BreakPolicy::default()
            .with_tier(DelimiterTier::new("colons", [':'], Placement::Keep))
            .with_continuation_marker("");
        let colons = fixed_breaker(6).with_policy(policy);
        assert_eq!(lines(&colons, "ab:cdefgh"), vec!["ab:", "cdefgh"]);
        assert_eq!(lines(&colons, "abcdefghij"), vec!["abcdef", "ghij"]);

        let policy = BreakPolicy {
            continuation_marker: "...".to_string(),
            tiers: Vec::new(),
        };
        let size_only = fixed_breaker(6).with_policy(policy);
        assert_eq!(size_only.policy().tiers.len(), 0);
        assert_eq!(lines(&size_only, "ab cdefgh"), vec!["ab ...", "cdefgh"]);
    }

    #[test]
    fn missing_glyphs_propagate() {
        let err = fixed_breaker(4)
            .break_lines("abc \u{1F600} def")
            .expect_err("the emoji has no metrics");
        assert!(matches!(err, TextError::UnsupportedGlyph { ch: '\u{1F600}' }));
    }

    #[test]
    fn an_undrawable_marker_only_fails_forced_splits() {
        let policy = BreakPolicy::default().with_continuation_marker("\u{1F600}");
        let emoji_marker = fixed_breaker(5).with_policy(policy);
        assert_eq!(lines(&emoji_marker, "abc def"), vec!["abc", "def"]);
        let err = emoji_marker
            .break_lines("abcdefgh")
            .expect_err("the marker has no metrics");
        assert!(matches!(err, TextError::UnsupportedGlyph { ch: '\u{1F600}' }));
    }

    #[test]
    fn parameters_are_validated_up_front() {
        assert!(matches!(
            LineBreaker::new(&Fixed, Pt(0.0), Pt(10.0)),
            Err(TextError::InvalidParameter { name: "size", .. })
        ));
        assert!(matches!(
            break_lines("text", &Fixed, Pt(10.0), Pt(-1.0)),
            Err(TextError::InvalidParameter { name: "max_width", .. })
        ));
    }

    #[test]
    fn fallback_fonts_can_break_anything() {
        let font = WithFallback::new(StandardFont::Helvetica);
        let max_width = width_of_text("naive cafe", &font, Pt(12.0)).expect("can measure");
        let lines = break_lines("naïve café, déjà vu", &font, Pt(12.0), max_width)
            .expect("fallback covers everything");
        assert_eq!(lines, vec!["naïve", "café, déjà", "vu"]);
    }

    #[test]
    fn breakers_report_their_width() {
        assert_eq!(fixed_breaker(4).max_width(), Pt(20.0));
    }
}

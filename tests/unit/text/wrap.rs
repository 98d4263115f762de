use super::*;

/// Fixed-advance measurement: every char is 10px wide.
struct FixedAdvance;

impl TextMeasurer for FixedAdvance {
    fn measure_width(&mut self, text: &str) -> crate::StickerResult<f32> {
        Ok(text.chars().count() as f32 * 10.0)
    }
}

#[test]
fn short_caption_stays_on_one_line() {
    let lines = wrap_caption("hi there", 400.0, &mut FixedAdvance).unwrap();
    assert_eq!(lines, vec!["hi there".to_string()]);
}

#[test]
fn caption_wraps_and_preserves_word_sequence() {
    let caption = "The quick brown fox jumps";
    // Narrower than the whole string, wider than any single word.
    let lines = wrap_caption(caption, 110.0, &mut FixedAdvance).unwrap();
    assert!(lines.len() > 1);

    let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split_whitespace()).collect();
    let original: Vec<&str> = caption.split_whitespace().collect();
    assert_eq!(rejoined, original);

    for line in &lines {
        assert!(line.chars().count() as f32 * 10.0 <= 110.0, "line too wide: {line}");
    }
}

#[test]
fn empty_caption_yields_exactly_one_empty_line() {
    let lines = wrap_caption("", 100.0, &mut FixedAdvance).unwrap();
    assert_eq!(lines, vec![String::new()]);

    let lines = wrap_caption("   \t  ", 100.0, &mut FixedAdvance).unwrap();
    assert_eq!(lines, vec![String::new()]);
}

#[test]
fn overlong_word_gets_its_own_unbroken_line() {
    let lines = wrap_caption("a Supercalifragilistic b", 80.0, &mut FixedAdvance).unwrap();
    assert_eq!(
        lines,
        vec![
            "a".to_string(),
            "Supercalifragilistic".to_string(),
            "b".to_string(),
        ]
    );
}

#[test]
fn whitespace_runs_collapse_to_single_separators() {
    let lines = wrap_caption("one   two\t three", 400.0, &mut FixedAdvance).unwrap();
    assert_eq!(lines, vec!["one two three".to_string()]);
}

#[test]
fn line_middles_stack_above_the_bottom_margin() {
    let style = StickerStyle::default();

    // One line: centered within a 42px slot ending 20px above the bottom.
    let single = line_middles(1, &style);
    assert_eq!(single, vec![512.0 - 42.0 - 20.0 + 21.0]);

    // Two lines: consecutive slots, one line height apart.
    let double = line_middles(2, &style);
    assert_eq!(double.len(), 2);
    assert_eq!(double[1] - double[0], 42.0);
    assert_eq!(double[1], single[0]);
}

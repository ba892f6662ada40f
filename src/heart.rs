//! Heart art generation.
//!
//! The widget only requires "something that returns heart art as a string";
//! [`ArtSource`] is that seam. [`HeartArtist`] is the built-in
//! implementation: it rasterizes the implicit heart curve
//! `(x^2 + y^2 - 1)^3 <= x^2 * y^3` into a character grid, with randomized
//! width, fill style and an occasional centered message. Output varies per
//! call but is fully determined by the injected random source.

use crate::rng::RandomSource;

/// Anything that can produce a piece of heart art for the panel.
/// Synchronous and infallible; the session stores whatever comes back.
pub trait ArtSource {
    fn generate_art(&mut self) -> String;
}

/// Glyphs hearts get filled or outlined with.
pub const HEART_FILL_GLYPHS: &[char] = &['♥', '@', '#', '*', '%', '&', '8', 'o'];

/// Short notes occasionally centered on the heart body.
pub const HEART_MESSAGES: &[&str] = &["I LOVE U", "BE MINE", "XOXO", "4 EVER", "U + ME"];

/// Narrowest heart, in columns.
pub const MIN_WIDTH: usize = 34;
/// Widest heart, in columns.
pub const MAX_WIDTH: usize = 46;

// Sampling window around the curve. One row covers about twice the x-span
// of one column, compensating for characters being taller than wide.
const X_HALF: f64 = 1.35;
const Y_TOP: f64 = 1.3;
const Y_SPAN: f64 = 2.4;

#[derive(Debug, Clone, Copy)]
enum FillStyle {
    Solid(char),
    Checker(char, char),
    Outline(char),
}

/// Procedural heart generator over an injected random source.
pub struct HeartArtist<R: RandomSource> {
    rng: R,
}

impl<R: RandomSource> HeartArtist<R> {
    pub fn new(rng: R) -> Self {
        HeartArtist { rng }
    }

    fn pick_glyph(&mut self) -> char {
        HEART_FILL_GLYPHS[self.rng.next_index(HEART_FILL_GLYPHS.len())]
    }
}

impl<R: RandomSource> ArtSource for HeartArtist<R> {
    fn generate_art(&mut self) -> String {
        let width = MIN_WIDTH + self.rng.next_index(MAX_WIDTH - MIN_WIDTH + 1);
        let style = match self.rng.next_index(4) {
            2 => FillStyle::Checker(self.pick_glyph(), self.pick_glyph()),
            3 => FillStyle::Outline(self.pick_glyph()),
            _ => FillStyle::Solid(self.pick_glyph()),
        };
        let message = if self.rng.next_index(2) == 0 {
            Some(HEART_MESSAGES[self.rng.next_index(HEART_MESSAGES.len())])
        } else {
            None
        };
        render_heart(width, style, message)
    }
}

fn inside_heart(x: f64, y: f64) -> bool {
    let a = x * x + y * y - 1.0;
    a * a * a - x * x * y * y * y <= 0.0
}

/// Boolean raster of the curve, `width / 2` rows tall.
fn heart_mask(width: usize) -> Vec<Vec<bool>> {
    let height = width / 2;
    let mut mask = Vec::with_capacity(height);
    for r in 0..height {
        let y = Y_TOP - Y_SPAN * r as f64 / (height as f64 - 1.0);
        let mut row = Vec::with_capacity(width);
        for c in 0..width {
            let x = -X_HALF + 2.0 * X_HALF * c as f64 / (width as f64 - 1.0);
            row.push(inside_heart(x, y));
        }
        mask.push(row);
    }
    mask
}

/// True for body cells that touch the outside (or the grid border).
/// Only called for cells already inside the body.
fn on_edge(mask: &[Vec<bool>], r: usize, c: usize) -> bool {
    let h = mask.len();
    let w = mask[r].len();
    if r == 0 || r + 1 == h || c == 0 || c + 1 == w {
        return true;
    }
    !(mask[r - 1][c] && mask[r + 1][c] && mask[r][c - 1] && mask[r][c + 1])
}

fn fill_char(mask: &[Vec<bool>], r: usize, c: usize, inside: bool, style: FillStyle) -> char {
    if !inside {
        return ' ';
    }
    match style {
        FillStyle::Solid(g) => g,
        FillStyle::Checker(a, b) => {
            if (r + c) % 2 == 0 {
                a
            } else {
                b
            }
        }
        FillStyle::Outline(g) => {
            if on_edge(mask, r, c) {
                g
            } else {
                ' '
            }
        }
    }
}

/// Writes the message across the widest part of the body, just below the
/// lobes. Skipped when any target cell falls outside the body, so narrow
/// hearts simply go without.
fn place_message(grid: &mut [Vec<char>], mask: &[Vec<bool>], message: &str) {
    let height = mask.len();
    if height < 2 {
        return;
    }
    let row = ((Y_TOP / Y_SPAN) * (height as f64 - 1.0)).round() as usize;
    let chars: Vec<char> = message.chars().collect();
    let width = mask[row].len();
    if chars.len() + 2 > width {
        return;
    }
    let start = (width - chars.len()) / 2;
    if !(start..start + chars.len()).all(|c| mask[row][c]) {
        return;
    }
    for (i, ch) in chars.iter().enumerate() {
        grid[row][start + i] = *ch;
    }
}

fn render_heart(width: usize, style: FillStyle, message: Option<&str>) -> String {
    let mask = heart_mask(width);
    let mut grid: Vec<Vec<char>> = mask
        .iter()
        .enumerate()
        .map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(|(c, &inside)| fill_char(&mask, r, c, inside, style))
                .collect()
        })
        .collect();
    if let Some(m) = message {
        place_message(&mut grid, &mask, m);
    }
    let lines: Vec<String> = grid
        .iter()
        .map(|row| row.iter().collect::<String>().trim_end().to_string())
        .collect();
    let first = lines.iter().position(|l| !l.is_empty()).unwrap_or(0);
    let last = lines.iter().rposition(|l| !l.is_empty()).unwrap_or(0);
    lines[first..=last].join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Lcg;

    /// Random source replaying a fixed script of raw draws.
    struct Seq {
        vals: &'static [u32],
        at: usize,
    }

    impl Seq {
        fn new(vals: &'static [u32]) -> Self {
            Seq { vals, at: 0 }
        }
    }

    impl RandomSource for Seq {
        fn next_u32(&mut self) -> u32 {
            let v = self.vals[self.at % self.vals.len()];
            self.at += 1;
            v
        }
    }

    fn runs_in(row: &[bool]) -> usize {
        let mut runs = 0;
        let mut prev = false;
        for &cell in row {
            if cell && !prev {
                runs += 1;
            }
            prev = cell;
        }
        runs
    }

    #[test]
    fn test_mask_is_symmetric() {
        let mask = heart_mask(40);
        for row in &mask {
            let mut rev = row.clone();
            rev.reverse();
            assert_eq!(*row, rev, "heart must be left-right symmetric");
        }
    }

    #[test]
    fn test_mask_has_two_lobes_and_one_belly() {
        let mask = heart_mask(40);
        assert!(
            mask.iter().any(|row| runs_in(row) == 2),
            "some upper row must split into two lobes"
        );
        assert!(
            mask.iter().any(|row| runs_in(row) == 1),
            "the body must merge into a single run"
        );
    }

    #[test]
    fn test_solid_heart_with_message() {
        // width 34, solid first glyph, message "I LOVE U"
        let mut artist = HeartArtist::new(Seq::new(&[0, 0, 0, 0, 0]));
        let art = artist.generate_art();
        assert!(art.contains("I LOVE U"), "scripted draws must place the message");
        assert!(art.contains('♥'), "scripted draws must fill with the first glyph");
    }

    #[test]
    fn test_message_can_be_skipped() {
        let mut artist = HeartArtist::new(Seq::new(&[0, 0, 0, 1]));
        let art = artist.generate_art();
        for m in HEART_MESSAGES {
            assert!(!art.contains(m), "no-message draw must not place {m:?}");
        }
    }

    #[test]
    fn test_checker_uses_both_glyphs() {
        // width 34, checker of glyphs 1 and 2, no message
        let mut artist = HeartArtist::new(Seq::new(&[0, 2, 1, 2, 1]));
        let art = artist.generate_art();
        assert!(art.contains('@') && art.contains('#'));
    }

    #[test]
    fn test_outline_is_sparser_than_solid() {
        let glyphs = |s: &str| s.chars().filter(|c| *c == '*').count();
        let mut outline = HeartArtist::new(Seq::new(&[0, 3, 3, 1]));
        let mut solid = HeartArtist::new(Seq::new(&[0, 0, 3, 1]));
        let hollow = glyphs(&outline.generate_art());
        let full = glyphs(&solid.generate_art());
        assert!(
            hollow > 0 && hollow < full,
            "outline ({hollow} glyphs) must draw fewer cells than solid ({full})"
        );
    }

    #[test]
    fn test_art_never_exceeds_max_width() {
        let mut artist = HeartArtist::new(Lcg::new(2024));
        for _ in 0..20 {
            let art = artist.generate_art();
            assert!(!art.is_empty());
            for line in art.lines() {
                assert!(
                    line.chars().count() <= MAX_WIDTH,
                    "line wider than {MAX_WIDTH}: {line:?}"
                );
            }
        }
    }

    #[test]
    fn test_art_deterministic_per_seed() {
        let mut a = HeartArtist::new(Lcg::new(31337));
        let mut b = HeartArtist::new(Lcg::new(31337));
        for _ in 0..5 {
            assert_eq!(a.generate_art(), b.generate_art());
        }
    }

    #[test]
    fn test_trimmed_edges() {
        let mut artist = HeartArtist::new(Seq::new(&[0, 0, 0, 1]));
        let art = artist.generate_art();
        let lines: Vec<&str> = art.lines().collect();
        assert!(!lines.first().map(|l| l.is_empty()).unwrap_or(true));
        assert!(!lines.last().map(|l| l.is_empty()).unwrap_or(true));
        assert!(art.lines().all(|l| l == l.trim_end()));
    }
}

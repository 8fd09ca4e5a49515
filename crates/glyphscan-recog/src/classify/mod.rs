//! Rule-based glyph classification
//!
//! Every class except [`GlyphClass::Unclassified`] owns one predicate in
//! [`rules::RULES`]. A firing predicate scores 1.0, a silent one 0.0, and
//! `Unclassified` always scores 0.5. The winner is the first class whose
//! score beats every score before it, so when several rules fire the
//! lowest class index wins and when none fires the glyph stays
//! unclassified.

mod class;
pub mod rules;

pub use class::{CLASS_COUNT, GlyphClass};

use crate::features::FeatureVector;
use rules::{RULES, Rule};

/// Score of [`GlyphClass::Unclassified`]
pub const UNCLASSIFIED_SCORE: f64 = 0.5;

/// Maps feature vectors to glyph classes
///
/// # Examples
///
/// ```
/// use glyphscan_recog::classify::{Classifier, GlyphClass};
/// use glyphscan_recog::features::FeatureVector;
///
/// let classifier = Classifier::new();
/// assert_eq!(classifier.classify(&FeatureVector::new()), GlyphClass::Unclassified);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    rules: &'static [(GlyphClass, Rule)],
}

impl Default for Classifier {
    fn default() -> Self {
        Self { rules: &RULES }
    }
}

impl Classifier {
    /// Create a classifier over the built-in rule table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries in the score array.
    pub fn class_count(&self) -> usize {
        CLASS_COUNT
    }

    /// Score every class.
    pub fn scores(&self, v: &FeatureVector) -> [f64; CLASS_COUNT] {
        let mut scores = [0.0; CLASS_COUNT];
        scores[GlyphClass::Unclassified.index()] = UNCLASSIFIED_SCORE;
        for &(class, rule) in self.rules {
            if rule(v) {
                scores[class.index()] = 1.0;
            }
        }
        log::trace!("class scores: {scores:?}");
        scores
    }

    /// The winning class for `v`.
    pub fn classify(&self, v: &FeatureVector) -> GlyphClass {
        let scores = self.scores(v);
        let mut best = 0;
        for (i, &score) in scores.iter().enumerate().skip(1) {
            if score > scores[best] {
                best = i;
            }
        }
        GlyphClass::from_index(best).unwrap_or(GlyphClass::Unclassified)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::index::*;

    fn vector(values: &[(usize, f64)], flags: &[usize]) -> FeatureVector {
        let mut v = FeatureVector::new();
        for &(i, value) in values {
            v.set(i, value);
        }
        for &i in flags {
            v.set(i, 1.0);
        }
        v
    }

    fn firing_vectors() -> Vec<(GlyphClass, FeatureVector)> {
        vec![
        (
            GlyphClass::Alef,
            vector(
                &[
                    (HEIGHT, 0.5),
                    (WIDTH, 0.5),
                    (TOP, 0.5),
                    (BOTTOM, 0.5),
                    (BOTTOM_RIGHT, 0.3),
                    (TOP_MID, 0.5),
                ],
                &[
                    DIAGONAL_BAR,
                    LEFT_TOP_EDGE,
                    MID_TOP_EDGE,
                    MID_RIGHT_NOTCH,
                    MID_TOP_NOTCH,
                    MID_MID_CROSS,
                    TWO_HLINES_DOWN,
                ],
            ),
        ),
        (
            GlyphClass::Bet,
            vector(
                &[
                    (HEIGHT, 0.5),
                    (WIDTH, 0.5),
                    (TOP, 0.5),
                    (BOTTOM, 0.5),
                    (TOP_RIGHT, 0.6),
                    (BOTTOM_LEFT, 0.2),
                    (BOTTOM_RIGHT, 0.3),
                    (MID_RIGHT, 0.5),
                ],
                &[
                    TOP_BAR,
                    BOTTOM_BAR,
                    BOTTOM_RIGHT_EDGE,
                    BIG_TOP_LEFT_EDGE,
                    BIG_BOTTOM_LEFT_EDGE,
                    TOP_LEFT_END,
                    BOTTOM_LEFT_END,
                ],
            ),
        ),
        (
            GlyphClass::Gimel,
            vector(
                &[(HEIGHT, 0.5), (WIDTH, 0.4), (TOP, 0.5), (BOTTOM, 0.5)],
                &[
                    RIGHT_BOTTOM_EDGE,
                    TOP_LEFT_EDGE,
                    BOTTOM_LEFT_END,
                    TOP_LEFT_END,
                    BIG_RIGHT_BOTTOM_EDGE,
                ],
            ),
        ),
        (
            GlyphClass::Dalet,
            vector(
                &[(HEIGHT, 0.5), (WIDTH, 0.5), (TOP, 0.5), (BOTTOM, 0.54), (BOTTOM_LEFT, 0.6)],
                &[TOP_BAR, BIG_TOP_RIGHT_EDGE, BOTTOM_MID_END, TOP_LEFT_END],
            ),
        ),
        (
            GlyphClass::He,
            vector(
                &[(HEIGHT, 0.5), (WIDTH, 0.5), (TOP, 0.5), (BOTTOM, 0.5), (BOTTOM_RIGHT, 0.2)],
                &[
                    TOP_LEFT_EDGE,
                    RIGHT_BOTTOM_EDGE,
                    TOP_LEFT_END,
                    BOTTOM_LEFT_END,
                    BOTTOM_RIGHT_END,
                    HEY_PART,
                ],
            ),
        ),
        (
            GlyphClass::Vav,
            vector(
                &[(HEIGHT, 0.5), (WIDTH, 0.2), (TOP, 0.5), (BOTTOM, 0.5), (BOTTOM_LEFT, 0.7)],
                &[RIGHT_BAR, BOTTOM_RIGHT_END],
            ),
        ),
        (
            GlyphClass::Zayin,
            vector(
                &[(HEIGHT, 0.5), (WIDTH, 0.2), (TOP, 0.5), (BOTTOM, 0.5)],
                &[BIG_TOP_RIGHT_EDGE, BOTTOM_MID_END, TOP_MID_END],
            ),
        ),
        (
            GlyphClass::Het,
            vector(
                &[
                    (HEIGHT, 0.5),
                    (WIDTH, 0.5),
                    (TOP, 0.5),
                    (BOTTOM, 0.5),
                    (BOTTOM_LEFT, 0.4),
                    (BOTTOM_RIGHT, 0.2),
                    (MID_LEFT, 0.5),
                ],
                &[TOP_BAR, LEFT_BOTTOM_EDGE, RIGHT_BOTTOM_EDGE, BOTTOM_LEFT_END, BOTTOM_RIGHT_END],
            ),
        ),
        (
            GlyphClass::Tet,
            vector(
                &[(HEIGHT, 0.5), (WIDTH, 0.5), (TOP, 0.5), (BOTTOM, 0.5)],
                &[ONE_HOLE, HOLE_LEFT_TOP_EDGE, HOLE_RIGHT_TOP_EDGE, TOP_LEFT_END],
            ),
        ),
        (
            GlyphClass::Yod,
            vector(
                &[(HEIGHT, 0.3), (WIDTH, 0.2), (TOP, 0.5), (BOTTOM, 0.6), (BOTTOM_LEFT, 0.7)],
                &[TOP_BAR, RIGHT_BAR, MID_BOTTOM_EDGE, BOTTOM_MID_END],
            ),
        ),
        (
            GlyphClass::Kaf,
            vector(
                &[
                    (HEIGHT, 0.5),
                    (WIDTH, 0.5),
                    (TOP, 0.5),
                    (BOTTOM, 0.5),
                    (BOTTOM_LEFT, 0.2),
                    (BOTTOM_RIGHT, 0.3),
                    (MID_RIGHT, 0.2),
                ],
                &[
                    TOP_BAR,
                    BOTTOM_BAR,
                    BIG_TOP_LEFT_EDGE,
                    BIG_BOTTOM_LEFT_EDGE,
                    TOP_LEFT_END,
                    BOTTOM_LEFT_END,
                ],
            ),
        ),
        (
            GlyphClass::FinalKaf,
            vector(
                &[(HEIGHT, 0.7), (WIDTH, 0.5), (TOP, 0.5), (BOTTOM, 0.3), (BOTTOM_LEFT, 0.6)],
                &[TOP_BAR, BIG_TOP_LEFT_EDGE, BOTTOM_MID_END, TOP_LEFT_END],
            ),
        ),
        (
            GlyphClass::Lamed,
            vector(
                &[(HEIGHT, 0.7), (WIDTH, 0.4), (TOP, 0.7), (BOTTOM, 0.5), (TOP_RIGHT, 0.6)],
                &[BOTTOM_LEFT_EDGE],
            ),
        ),
        (
            GlyphClass::Mem,
            vector(
                &[(HEIGHT, 0.5), (WIDTH, 0.5), (TOP, 0.5), (BOTTOM, 0.5), (BOTTOM_RIGHT, 0.2)],
                &[
                    TOP_LEFT_EDGE,
                    LEFT_BOTTOM_EDGE,
                    LEFT_TOP_NOTCH,
                    LEFT_BOTTOM_NOTCH,
                    TOP_LEFT_END,
                    TOP_LEFT_CROSS,
                ],
            ),
        ),
        (
            GlyphClass::FinalMem,
            vector(
                &[
                    (HEIGHT, 0.5),
                    (WIDTH, 0.5),
                    (TOP, 0.5),
                    (BOTTOM, 0.5),
                    (BOTTOM_LEFT, 0.1),
                    (BOTTOM_RIGHT, 0.1),
                ],
                &[TOP_BAR, BOTTOM_BAR, ONE_HOLE],
            ),
        ),
        (
            GlyphClass::Nun,
            vector(
                &[
                    (HEIGHT, 0.5),
                    (WIDTH, 0.3),
                    (TOP, 0.5),
                    (BOTTOM, 0.5),
                    (TOP_LEFT, 0.5),
                    (BOTTOM_LEFT, 0.1),
                ],
                &[BOTTOM_BAR],
            ),
        ),
        (
            GlyphClass::FinalNun,
            vector(
                &[(HEIGHT, 0.7), (WIDTH, 0.2), (TOP, 0.5), (BOTTOM, 0.3), (BOTTOM_LEFT, 0.6)],
                &[BOTTOM_MID_END],
            ),
        ),
        (
            GlyphClass::Samekh,
            vector(
                &[(HEIGHT, 0.5), (WIDTH, 0.5), (TOP, 0.5), (BOTTOM, 0.5), (BOTTOM_LEFT, 0.4)],
                &[TOP_BAR, BOTTOM_BAR, ONE_HOLE],
            ),
        ),
        (
            GlyphClass::Ayin,
            vector(
                &[(HEIGHT, 0.5), (WIDTH, 0.5), (TOP, 0.5), (BOTTOM, 0.5), (BOTTOM_RIGHT, 0.2)],
                &[MID_TOP_NOTCH, TOP_LEFT_END, TOP_RIGHT_END, BOTTOM_LEFT_END, MID_MID_CROSS],
            ),
        ),
        (
            GlyphClass::Pe,
            vector(
                &[(HEIGHT, 0.5), (WIDTH, 0.5), (TOP, 0.5), (BOTTOM, 0.5)],
                &[BOTTOM_BAR, MID_LEFT_END],
            ),
        ),
        (
            GlyphClass::FinalPe,
            vector(
                &[(HEIGHT, 0.7), (WIDTH, 0.5), (TOP, 0.5), (BOTTOM, 0.3), (BOTTOM_LEFT, 1.0)],
                &[TOP_BAR, RIGHT_BOTTOM_EDGE, BOTTOM_RIGHT_END, MID_LEFT_END],
            ),
        ),
        (
            GlyphClass::Tsadi,
            vector(
                &[(HEIGHT, 0.5), (WIDTH, 0.5), (TOP, 0.5), (BOTTOM, 0.5)],
                &[
                    DIAGONAL_BAR,
                    BOTTOM_BAR,
                    MID_TOP_NOTCH,
                    TOP_RIGHT_END,
                    BOTTOM_LEFT_END,
                    MID_MID_CROSS,
                ],
            ),
        ),
        (
            GlyphClass::FinalTsadi,
            vector(
                &[(HEIGHT, 0.7), (WIDTH, 0.5), (TOP, 0.5), (BOTTOM, 0.3), (BOTTOM_LEFT, 0.6)],
                &[LEFT_BOTTOM_EDGE, TOP_LEFT_END, TOP_RIGHT_END, MID_LEFT_CROSS],
            ),
        ),
        (
            GlyphClass::Qof,
            vector(
                &[
                    (HEIGHT, 0.7),
                    (WIDTH, 0.5),
                    (TOP, 0.5),
                    (BOTTOM, 0.3),
                    (BOTTOM_LEFT, 0.1),
                    (BOTTOM_RIGHT, 0.6),
                ],
                &[TOP_BAR, TOP_LEFT_EDGE, LEFT_BOTTOM_EDGE, TOP_LEFT_NOTCH, BOTTOM_LEFT_END],
            ),
        ),
        (
            GlyphClass::Resh,
            vector(
                &[(HEIGHT, 0.5), (WIDTH, 0.4), (TOP, 0.5), (BOTTOM, 0.5), (BOTTOM_LEFT, 0.6)],
                &[TOP_BAR, RIGHT_BAR, BOTTOM_RIGHT_END],
            ),
        ),
        (
            GlyphClass::Shin,
            vector(
                &[(HEIGHT, 0.5), (WIDTH, 0.5), (TOP, 0.5), (BOTTOM, 0.5), (BOTTOM_LEFT, 0.1)],
                &[TOP_LEFT_END, TOP_MID_END, TOP_RIGHT_END, BOTTOM_LEFT_CROSS],
            ),
        ),
        (
            GlyphClass::Tav,
            vector(
                &[
                    (HEIGHT, 0.5),
                    (WIDTH, 0.5),
                    (TOP, 0.5),
                    (BOTTOM, 0.5),
                    (TOP_LEFT, 0.5),
                    (BOTTOM_LEFT, 0.1),
                    (BOTTOM_RIGHT, 0.2),
                ],
                &[TOP_BAR, RIGHT_BOTTOM_EDGE, BOTTOM_LEFT_END, BOTTOM_RIGHT_END],
            ),
        ),
        (
            GlyphClass::Dot,
            vector(
                &[
                    (HEIGHT, 0.1),
                    (WIDTH, 0.1),
                    (TOP, 0.1),
                    (BOTTOM, 0.5),
                    (TOP_LEFT, 0.1),
                    (BOTTOM_LEFT, 0.2),
                ],
                &[],
            ),
        ),
        (
            GlyphClass::Comma,
            vector(
                &[
                    (HEIGHT, 0.1),
                    (WIDTH, 0.15),
                    (TOP, 0.1),
                    (BOTTOM, 0.5),
                    (TOP_LEFT, 0.4),
                    (BOTTOM_LEFT, 0.1),
                ],
                &[],
            ),
        ),
        (
            GlyphClass::Geresh,
            vector(
                &[(HEIGHT, 0.2), (WIDTH, 0.1), (TOP, 0.5), (BOTTOM, 0.6), (BOTTOM_LEFT, 0.2)],
                &[MID_BOTTOM_EDGE, TOP_RIGHT_END, BOTTOM_MID_END],
            ),
        ),
        (
            GlyphClass::Question,
            vector(
                &[(HEIGHT, 0.5), (WIDTH, 0.3), (TOP, 0.5), (BOTTOM, 0.5)],
                &[BIG_BOTTOM_LEFT_EDGE, BOTTOM_MID_END, DOT_PART],
            ),
        ),
        (
            GlyphClass::Exclamation,
            vector(
                &[(HEIGHT, 0.5), (WIDTH, 0.1), (TOP, 0.57), (BOTTOM, 0.5)],
                &[BIG_BOTTOM_LEFT_EDGE, BOTTOM_MID_END, TOP_MID_END, DOT_PART],
            ),
        ),
        (
            GlyphClass::Colon,
            vector(
                &[(HEIGHT, 0.4), (WIDTH, 0.1), (TOP, 0.4), (BOTTOM, 0.5)],
                &[BIG_BOTTOM_LEFT_EDGE, BOTTOM_MID_END, TOP_MID_END, DOT_PART],
            ),
        ),
        ]
    }

    #[test]
    fn test_every_rule_fires() {
        let classifier = Classifier::new();
        let cases = firing_vectors();
        assert_eq!(cases.len(), CLASS_COUNT - 1);
        for (expected, v) in &cases {
            assert_eq!(classifier.classify(v), *expected, "{expected:?}");
        }
    }

    #[test]
    fn test_rule_table_order() {
        for (i, (class, _)) in RULES.iter().enumerate() {
            assert_eq!(class.index(), i + 1);
        }
    }

    #[test]
    fn test_no_match_is_unclassified() {
        let classifier = Classifier::new();
        let v = FeatureVector::new();
        let scores = classifier.scores(&v);
        assert_eq!(scores[0], UNCLASSIFIED_SCORE);
        assert!(scores[1..].iter().all(|&s| s == 0.0));
        assert_eq!(classifier.classify(&v), GlyphClass::Unclassified);
        assert_eq!(GlyphClass::Unclassified.label(), "");
    }

    #[test]
    fn test_lowest_index_wins_ties() {
        // a narrow single hole also satisfies the shin rule
        let (_, v) = firing_vectors()
            .into_iter()
            .find(|(class, _)| *class == GlyphClass::Tet)
            .unwrap();
        let classifier = Classifier::new();
        let scores = classifier.scores(&v);
        assert_eq!(scores[GlyphClass::Tet.index()], 1.0);
        assert_eq!(scores[GlyphClass::Shin.index()], 1.0);
        assert_eq!(classifier.classify(&v), GlyphClass::Tet);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let classifier = Classifier::new();
        for (_, v) in firing_vectors() {
            assert_eq!(classifier.scores(&v), classifier.scores(&v));
            assert_eq!(classifier.classify(&v), classifier.classify(&v));
        }
        assert_eq!(classifier.class_count(), CLASS_COUNT);
    }
}

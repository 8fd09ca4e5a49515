//! The rule table
//!
//! Each class has one pure predicate over the feature vector. Indicator
//! entries count as present above 0.5 and absent below it; a few rules
//! only need an entry to be non-zero.

use super::GlyphClass;
use crate::features::FeatureVector;
use crate::features::index::*;

/// A class predicate.
pub type Rule = fn(&FeatureVector) -> bool;

/// Predicates for classes 1 to 33, in class order.
pub static RULES: [(GlyphClass, Rule); 33] = [
    (GlyphClass::Alef, alef),
    (GlyphClass::Bet, bet),
    (GlyphClass::Gimel, gimel),
    (GlyphClass::Dalet, dalet),
    (GlyphClass::He, he),
    (GlyphClass::Vav, vav),
    (GlyphClass::Zayin, zayin),
    (GlyphClass::Het, het),
    (GlyphClass::Tet, tet),
    (GlyphClass::Yod, yod),
    (GlyphClass::Kaf, kaf),
    (GlyphClass::FinalKaf, final_kaf),
    (GlyphClass::Lamed, lamed),
    (GlyphClass::Mem, mem),
    (GlyphClass::FinalMem, final_mem),
    (GlyphClass::Nun, nun),
    (GlyphClass::FinalNun, final_nun),
    (GlyphClass::Samekh, samekh),
    (GlyphClass::Ayin, ayin),
    (GlyphClass::Pe, pe),
    (GlyphClass::FinalPe, final_pe),
    (GlyphClass::Tsadi, tsadi),
    (GlyphClass::FinalTsadi, final_tsadi),
    (GlyphClass::Qof, qof),
    (GlyphClass::Resh, resh),
    (GlyphClass::Shin, shin),
    (GlyphClass::Tav, tav),
    (GlyphClass::Dot, dot),
    (GlyphClass::Comma, comma),
    (GlyphClass::Geresh, geresh),
    (GlyphClass::Question, question),
    (GlyphClass::Exclamation, exclamation),
    (GlyphClass::Colon, colon),
];

fn on(v: &FeatureVector, i: usize) -> bool {
    v[i] > 0.5
}

fn off(v: &FeatureVector, i: usize) -> bool {
    v[i] < 0.5
}

fn truthy(v: &FeatureVector, i: usize) -> bool {
    v[i] > 0.0
}

fn all_on(v: &FeatureVector, indices: &[usize]) -> bool {
    indices.iter().all(|&i| on(v, i))
}

fn all_off(v: &FeatureVector, indices: &[usize]) -> bool {
    indices.iter().all(|&i| off(v, i))
}

fn any_on(v: &FeatureVector, indices: &[usize]) -> bool {
    indices.iter().any(|&i| on(v, i))
}

/// Open interval test.
fn within(v: &FeatureVector, i: usize, lo: f64, hi: f64) -> bool {
    lo < v[i] && v[i] < hi
}

/// Height, width, top and bottom each inside its open interval.
fn placed(
    v: &FeatureVector,
    height: (f64, f64),
    width: (f64, f64),
    top: (f64, f64),
    bottom: (f64, f64),
) -> bool {
    within(v, HEIGHT, height.0, height.1)
        && within(v, WIDTH, width.0, width.1)
        && within(v, TOP, top.0, top.1)
        && within(v, BOTTOM, bottom.0, bottom.1)
}

/// A full-height letter of ordinary width sitting on the line.
fn standard(v: &FeatureVector) -> bool {
    placed(v, (0.40, 0.60), (0.30, 0.60), (0.40, 0.60), (0.40, 0.60))
}

fn no_parts(v: &FeatureVector) -> bool {
    all_off(v, &[ONE_HOLE, TWO_HOLES, HEY_PART])
}

pub fn alef(v: &FeatureVector) -> bool {
    standard(v)
        && v[BOTTOM_RIGHT] < 0.8
        && v[TOP_MID] > 0.1
        && on(v, DIAGONAL_BAR)
        && (off(v, BOTTOM_BAR)
            || all_on(v, &[BOTTOM_LEFT_END, BOTTOM_RIGHT_END])
            || on(v, BIG_RIGHT_BOTTOM_EDGE)
            || all_on(
                v,
                &[
                    TOP_LEFT_END,
                    TOP_RIGHT_END,
                    BOTTOM_LEFT_END,
                    BOTTOM_RIGHT_END,
                    MID_MID_CROSS,
                ],
            ))
        && any_on(v, &[LEFT_TOP_EDGE, MID_TOP_EDGE])
        && any_on(v, &[MID_TOP_EDGE, RIGHT_TOP_EDGE, TOP_RIGHT_END, TOP_RIGHT_EDGE])
        && all_on(v, &[MID_RIGHT_NOTCH, MID_TOP_NOTCH, MID_MID_CROSS])
        && any_on(v, &[TWO_HLINES_DOWN, BOTTOM_MID])
        && off(v, HEY_PART)
}

pub fn bet(v: &FeatureVector) -> bool {
    placed(v, (0.40, 0.60), (0.30, 0.60), (0.40, 0.55), (0.40, 0.60))
        && v[BOTTOM_LEFT] < 0.5
        && v[TOP_RIGHT] > v[BOTTOM_RIGHT]
        && v[MID_RIGHT] * 1.2 > v[BOTTOM_RIGHT]
        && all_on(
            v,
            &[
                TOP_BAR,
                BOTTOM_BAR,
                BOTTOM_RIGHT_EDGE,
                BIG_TOP_LEFT_EDGE,
                BIG_BOTTOM_LEFT_EDGE,
            ],
        )
        && all_off(
            v,
            &[
                MID_TOP_NOTCH,
                LEFT_TOP_NOTCH,
                MID_BOTTOM_NOTCH,
                RIGHT_BOTTOM_NOTCH,
            ],
        )
        && any_on(v, &[TOP_LEFT_END, TOP_MID_END])
        && on(v, BOTTOM_LEFT_END)
        && no_parts(v)
}

pub fn gimel(v: &FeatureVector) -> bool {
    placed(v, (0.40, 0.60), (0.20, 0.50), (0.40, 0.60), (0.40, 0.60))
        && v[BOTTOM_MID] < 0.5
        && all_off(v, &[ANTI_DIAGONAL_BAR, LEFT_BAR])
        && all_on(v, &[RIGHT_BOTTOM_EDGE, TOP_LEFT_EDGE])
        && all_off(v, &[MID_TOP_NOTCH, LEFT_TOP_NOTCH])
        && any_on(v, &[MID_BOTTOM_NOTCH, RIGHT_BOTTOM_NOTCH, RIGHT_BOTTOM_EDGE])
        && all_off(v, &[MID_LEFT_END, MID_MID_END])
        && any_on(v, &[BOTTOM_LEFT_END, BOTTOM_MID_END])
        && any_on(v, &[TOP_LEFT_END, TOP_MID_END])
        && any_on(
            v,
            &[
                BIG_RIGHT_BOTTOM_EDGE,
                MID_BOTTOM_NOTCH,
                MID_MID_CROSS,
                MID_RIGHT_CROSS,
                BOTTOM_MID_CROSS,
            ],
        )
        && all_off(v, &[ONE_HOLE, HEY_PART])
}

pub fn dalet(v: &FeatureVector) -> bool {
    within(v, HEIGHT, 0.40, 0.60)
        && within(v, WIDTH, 0.30, 0.60)
        && within(v, TOP, 0.45, 0.55)
        && (0.50..0.58).contains(&v[BOTTOM])
        && v[BOTTOM_LEFT] > 0.45
        && on(v, TOP_BAR)
        && off(v, BOTTOM_BAR)
        && on(v, BIG_TOP_RIGHT_EDGE)
        && any_on(v, &[BOTTOM_MID_END, BOTTOM_RIGHT_END])
        && (on(v, TOP_LEFT_END) || truthy(v, TOP_MID_END))
        && no_parts(v)
}

pub fn he(v: &FeatureVector) -> bool {
    standard(v)
        && v[BOTTOM_RIGHT] < 0.5
        && all_on(v, &[TOP_LEFT_EDGE, RIGHT_BOTTOM_EDGE])
        && (on(v, TOP_LEFT_END) || v[TOP_LEFT] < 0.25)
        && all_on(v, &[BOTTOM_LEFT_END, BOTTOM_RIGHT_END])
        && all_off(v, &[MID_MID_CROSS, BOTTOM_MID_CROSS, ONE_HOLE])
        && on(v, HEY_PART)
}

pub fn vav(v: &FeatureVector) -> bool {
    within(v, HEIGHT, 0.40, 0.55)
        && within(v, WIDTH, 0.05, 0.28)
        && within(v, TOP, 0.42, 0.55)
        && (0.42..0.58).contains(&v[BOTTOM])
        && v[BOTTOM_LEFT] > 0.5
        && on(v, RIGHT_BAR)
        && (off(v, BOTTOM_BAR) || off(v, LEFT_BAR))
        && off(v, BIG_TOP_RIGHT_EDGE)
        && any_on(v, &[BOTTOM_RIGHT_END, BOTTOM_MID_END])
        && off(v, TOP_MID_CROSS)
        && no_parts(v)
}

pub fn zayin(v: &FeatureVector) -> bool {
    placed(v, (0.40, 0.55), (0.05, 0.43), (0.45, 0.55), (0.45, 0.60))
        && off(v, BOTTOM_BAR)
        && on(v, BIG_TOP_RIGHT_EDGE)
        && off(v, BIG_BOTTOM_LEFT_EDGE)
        && any_on(v, &[BOTTOM_MID_END, BOTTOM_RIGHT_END])
        && any_on(v, &[TOP_MID_END, TOP_LEFT_END, TOP_RIGHT_END])
        && !(on(v, BOTTOM_LEFT_END) && off(v, BOTTOM_MID_END) && on(v, BOTTOM_RIGHT_END))
        && off(v, MID_MID_CROSS)
        && no_parts(v)
}

pub fn het(v: &FeatureVector) -> bool {
    standard(v)
        && v[BOTTOM_RIGHT] < 0.5
        && all_on(v, &[TOP_BAR, LEFT_BOTTOM_EDGE, RIGHT_BOTTOM_EDGE])
        && all_off(v, &[BOTTOM_BAR, BIG_BOTTOM_LEFT_EDGE])
        && v[MID_LEFT] < v[BOTTOM_LEFT] * 3.1
        && on(v, BOTTOM_LEFT_END)
        && off(v, BOTTOM_MID_END)
        && on(v, BOTTOM_RIGHT_END)
        && all_off(v, &[MID_MID_CROSS, BOTTOM_MID_CROSS, ONE_HOLE, HEY_PART])
}

pub fn tet(v: &FeatureVector) -> bool {
    standard(v)
        && (all_on(v, &[ONE_HOLE, HOLE_LEFT_TOP_EDGE, HOLE_RIGHT_TOP_EDGE])
            || (all_off(
                v,
                &[BOTTOM_LEFT_END, BIG_RIGHT_BOTTOM_EDGE, BIG_BOTTOM_LEFT_EDGE],
            ) && on(v, MID_TOP_NOTCH)))
        && all_off(v, &[LEFT_BOTTOM_NOTCH, MID_BOTTOM_NOTCH])
        && (on(v, TOP_LEFT_END) || (on(v, ONE_HOLE) && v[TOP_LEFT] < 0.30))
        && (all_off(v, &[BOTTOM_MID_END, BOTTOM_RIGHT_END]) || on(v, BOTTOM_BAR))
        && !all_on(v, &[TOP_LEFT_END, TOP_MID_END, TOP_RIGHT_END])
        && off(v, MID_MID_CROSS)
        && (off(v, BOTTOM_MID_CROSS) || on(v, BOTTOM_BAR))
        && all_off(v, &[BOTTOM_LEFT_CROSS, HEY_PART])
}

pub fn yod(v: &FeatureVector) -> bool {
    placed(v, (0.18, 0.40), (0.12, 0.30), (0.42, 0.58), (0.45, 0.85))
        && v[BOTTOM_LEFT] > 0.5
        && all_on(v, &[TOP_BAR, RIGHT_BAR])
        && all_off(v, &[BOTTOM_BAR, LEFT_BAR, ANTI_DIAGONAL_BAR])
        && any_on(v, &[MID_BOTTOM_EDGE, RIGHT_BOTTOM_EDGE])
        && all_off(v, &[MID_RIGHT_NOTCH, BOTTOM_RIGHT_NOTCH])
        && any_on(v, &[BOTTOM_MID_END, BOTTOM_RIGHT_END])
        && all_off(v, &[BOTTOM_LEFT_END, BOTTOM_LEFT_CROSS, BOTTOM_MID_CROSS])
        && no_parts(v)
}

pub fn kaf(v: &FeatureVector) -> bool {
    placed(v, (0.40, 0.60), (0.30, 0.60), (0.40, 0.55), (0.40, 0.60))
        && v[BOTTOM_LEFT] < 0.5
        && all_on(v, &[TOP_BAR, BOTTOM_BAR])
        && (off(v, BOTTOM_RIGHT_EDGE) || v[MID_RIGHT] < v[BOTTOM_RIGHT] * 1.1)
        && all_on(v, &[BIG_TOP_LEFT_EDGE, BIG_BOTTOM_LEFT_EDGE])
        && (on(v, TOP_LEFT_END) || (truthy(v, TOP_MID_END) && v[TOP_LEFT] < 0.25))
        && any_on(v, &[BOTTOM_LEFT_END, BOTTOM_MID_END])
        && no_parts(v)
}

pub fn final_kaf(v: &FeatureVector) -> bool {
    placed(v, (0.50, 0.85), (0.30, 0.60), (0.45, 0.55), (0.15, 0.45))
        && v[BOTTOM_LEFT] > 0.45
        && on(v, TOP_BAR)
        && off(v, BOTTOM_BAR)
        && on(v, BIG_TOP_LEFT_EDGE)
        && any_on(v, &[BOTTOM_MID_END, BOTTOM_RIGHT_END])
        && on(v, TOP_LEFT_END)
        && all_off(v, &[MID_LEFT_CROSS, MID_MID_CROSS, MID_RIGHT_CROSS])
        && no_parts(v)
}

pub fn lamed(v: &FeatureVector) -> bool {
    placed(v, (0.50, 0.85), (0.25, 0.50), (0.50, 0.85), (0.41, 0.60))
        && v[TOP_RIGHT] > 0.5
        && all_off(v, &[TOP_BAR, BOTTOM_BAR])
        && on(v, BOTTOM_LEFT_EDGE)
        && no_parts(v)
}

pub fn mem(v: &FeatureVector) -> bool {
    standard(v)
        && v[BOTTOM_RIGHT] < 0.5
        && all_on(v, &[TOP_LEFT_EDGE, LEFT_BOTTOM_EDGE])
        && any_on(
            v,
            &[LEFT_TOP_NOTCH, MID_TOP_NOTCH, TOP_LEFT_NOTCH, MID_LEFT_NOTCH],
        )
        && any_on(v, &[LEFT_BOTTOM_NOTCH, MID_BOTTOM_NOTCH])
        && off(v, MID_RIGHT_NOTCH)
        && on(v, TOP_LEFT_END)
        && (off(v, BOTTOM_RIGHT_END) || on(v, BOTTOM_MID_END))
        && any_on(
            v,
            &[TOP_LEFT_CROSS, TOP_MID_CROSS, MID_LEFT_CROSS, MID_MID_CROSS],
        )
        && off(v, HEY_PART)
}

pub fn final_mem(v: &FeatureVector) -> bool {
    standard(v)
        && !(v[BOTTOM_RIGHT] >= 0.35 || v[BOTTOM_LEFT] >= 0.35)
        && all_on(v, &[TOP_BAR, BOTTOM_BAR])
        && all_off(v, &[DIAGONAL_BAR, ANTI_DIAGONAL_BAR, RIGHT_BOTTOM_EDGE])
        && (all_off(v, &[MID_LEFT_CROSS, MID_MID_CROSS]) || off(v, BOTTOM_LEFT_END))
        && on(v, ONE_HOLE)
}

pub fn nun(v: &FeatureVector) -> bool {
    let wide = placed(v, (0.40, 0.60), (0.20, 0.50), (0.30, 0.60), (0.40, 0.60))
        && v[TOP_LEFT] > 1.5 * v[BOTTOM_LEFT];
    let narrow = within(v, HEIGHT, 0.40, 0.60)
        && v[WIDTH] > 0.15
        && v[WIDTH] <= 0.30
        && within(v, TOP, 0.40, 0.60)
        && within(v, BOTTOM, 0.40, 0.60);
    (wide || narrow)
        && on(v, BOTTOM_BAR)
        && all_off(
            v,
            &[
                LEFT_BAR,
                ANTI_DIAGONAL_BAR,
                RIGHT_BOTTOM_EDGE,
                MID_BOTTOM_NOTCH,
                RIGHT_BOTTOM_NOTCH,
                MID_LEFT_END,
                MID_MID_END,
                MID_LEFT_CROSS,
                MID_MID_CROSS,
                BOTTOM_LEFT_CROSS,
                BOTTOM_MID_CROSS,
                ONE_HOLE,
                HEY_PART,
                DOT_PART,
                COMMA_PART,
            ],
        )
}

pub fn final_nun(v: &FeatureVector) -> bool {
    within(v, HEIGHT, 0.40, 0.85)
        && within(v, WIDTH, 0.05, 0.33)
        && within(v, TOP, 0.42, 0.55)
        && v[BOTTOM] > 0.15
        && v[BOTTOM] <= 0.48
        && v[BOTTOM_LEFT] > 0.5
        && all_off(v, &[BOTTOM_BAR, BIG_BOTTOM_LEFT_EDGE])
        && any_on(v, &[BOTTOM_MID_END, BOTTOM_RIGHT_END])
        && off(v, MID_MID_CROSS)
        && no_parts(v)
}

pub fn samekh(v: &FeatureVector) -> bool {
    standard(v)
        && (v[BOTTOM_RIGHT] >= 0.3 || v[BOTTOM_LEFT] >= 0.3)
        && all_on(v, &[TOP_BAR, BOTTOM_BAR, ONE_HOLE])
        && all_off(
            v,
            &[
                DIAGONAL_BAR,
                ANTI_DIAGONAL_BAR,
                MID_TOP_EDGE,
                RIGHT_TOP_EDGE,
                RIGHT_BOTTOM_EDGE,
                TOP_RIGHT_END,
                BIG_BOTTOM_LEFT_EDGE,
                MID_LEFT_CROSS,
                MID_MID_CROSS,
            ],
        )
}

pub fn ayin(v: &FeatureVector) -> bool {
    placed(v, (0.40, 0.67), (0.30, 0.60), (0.40, 0.60), (0.30, 0.60))
        && v[BOTTOM_RIGHT] < 0.8
        && all_off(v, &[RIGHT_BOTTOM_EDGE, MID_RIGHT_NOTCH, MID_BOTTOM_NOTCH])
        && on(v, MID_TOP_NOTCH)
        && ((on(v, ONE_HOLE) && v[HOLE_WIDTH] < 0.2)
            || (any_on(v, &[TOP_LEFT_END, TOP_MID_END])
                && any_on(v, &[TOP_RIGHT_END, TOP_MID_END])))
        && on(v, BOTTOM_LEFT_END)
        && any_on(
            v,
            &[
                MID_MID_CROSS,
                MID_RIGHT_CROSS,
                BOTTOM_MID_CROSS,
                BOTTOM_RIGHT_CROSS,
            ],
        )
        && off(v, HEY_PART)
}

pub fn pe(v: &FeatureVector) -> bool {
    placed(v, (0.40, 0.60), (0.25, 0.60), (0.40, 0.60), (0.40, 0.60))
        && on(v, BOTTOM_BAR)
        && all_off(v, &[RIGHT_BOTTOM_EDGE, MID_BOTTOM_NOTCH, RIGHT_BOTTOM_NOTCH])
        && any_on(v, &[MID_LEFT_END, MID_MID_END])
        && all_off(v, &[BOTTOM_RIGHT_END, MID_MID_CROSS, ONE_HOLE, HEY_PART])
}

pub fn final_pe(v: &FeatureVector) -> bool {
    placed(v, (0.50, 0.80), (0.25, 0.60), (0.40, 0.60), (0.10, 0.50))
        && v[BOTTOM_LEFT] >= 1.0
        && all_on(v, &[TOP_BAR, RIGHT_BOTTOM_EDGE, BOTTOM_RIGHT_END])
        && off(v, RIGHT_BOTTOM_NOTCH)
        && any_on(v, &[MID_LEFT_END, MID_MID_END])
        && all_off(v, &[MID_LEFT_CROSS, MID_MID_CROSS, ONE_HOLE, HEY_PART])
}

pub fn tsadi(v: &FeatureVector) -> bool {
    standard(v)
        && v[BOTTOM_RIGHT] < 0.8
        && (on(v, DIAGONAL_BAR)
            || (v[BOTTOM_MID] < 0.1 && on(v, BOTTOM_LEFT_END) && off(v, BOTTOM_RIGHT_END)))
        && on(v, BOTTOM_BAR)
        && all_off(v, &[LEFT_BOTTOM_EDGE, RIGHT_BOTTOM_EDGE, MID_BOTTOM_NOTCH])
        && on(v, MID_TOP_NOTCH)
        && any_on(v, &[TOP_RIGHT_END, TOP_MID_END])
        && any_on(v, &[BOTTOM_LEFT_END, BOTTOM_MID_END])
        && any_on(v, &[MID_MID_CROSS, BOTTOM_MID_CROSS, BOTTOM_RIGHT_CROSS])
        && all_off(v, &[ONE_HOLE, HEY_PART])
}

pub fn final_tsadi(v: &FeatureVector) -> bool {
    placed(v, (0.50, 0.80), (0.25, 0.60), (0.40, 0.60), (0.10, 0.50))
        && (v[BOTTOM_LEFT] > 0.5 || v[BOTTOM_RIGHT] > 0.5)
        && (off(v, TOP_BAR)
            || all_on(v, &[BIG_TOP_RIGHT_EDGE, MID_TOP_NOTCH])
            || all_on(v, &[TOP_LEFT_END, TOP_RIGHT_END, MID_MID_CROSS]))
        && any_on(v, &[LEFT_BOTTOM_EDGE, MID_BOTTOM_EDGE, RIGHT_BOTTOM_EDGE])
        && !all_on(v, &[LEFT_BOTTOM_EDGE, RIGHT_BOTTOM_EDGE])
        && all_off(v, &[MID_BOTTOM_NOTCH, RIGHT_BOTTOM_NOTCH])
        && on(v, TOP_LEFT_END)
        && (on(v, TOP_RIGHT_END)
            || (truthy(v, BIG_TOP_RIGHT_EDGE) && truthy(v, MID_TOP_NOTCH)))
        && any_on(v, &[MID_LEFT_CROSS, MID_MID_CROSS])
        && all_off(v, &[ONE_HOLE, HEY_PART])
}

pub fn qof(v: &FeatureVector) -> bool {
    placed(v, (0.50, 0.90), (0.30, 0.60), (0.40, 0.60), (0.20, 0.50))
        && v[BOTTOM_LEFT] < 0.5
        && v[BOTTOM_RIGHT] > 0.5
        && all_on(v, &[TOP_BAR, TOP_LEFT_EDGE, LEFT_BOTTOM_EDGE])
        && off(v, RIGHT_TOP_EDGE)
        && (all_on(v, &[ONE_HOLE, HOLE_BOTTOM_RIGHT, HOLE_TOP_LEFT_EDGE])
            || any_on(v, &[TOP_LEFT_NOTCH, MID_LEFT_NOTCH]))
        && all_off(v, &[TOP_RIGHT_NOTCH, MID_RIGHT_NOTCH, TOP_RIGHT_END])
        && (on(v, BOTTOM_LEFT_END) || (v[BOTTOM_LEFT] < 0.2 && v[BOTTOM_RIGHT] > 0.8))
}

pub fn resh(v: &FeatureVector) -> bool {
    within(v, HEIGHT, 0.40, 0.55)
        && (0.28..0.55).contains(&v[WIDTH])
        && within(v, TOP, 0.45, 0.60)
        && within(v, BOTTOM, 0.45, 0.60)
        && v[BOTTOM_LEFT] > 0.5
        && all_on(v, &[TOP_BAR, RIGHT_BAR, BOTTOM_RIGHT_END])
        && all_off(v, &[BOTTOM_BAR, BIG_TOP_RIGHT_EDGE, TOP_MID_CROSS])
        && no_parts(v)
}

/// Shin with its three arms either fused at the base or separate.
pub fn shin(v: &FeatureVector) -> bool {
    shin_joined(v) || shin_open(v)
}

fn shin_joined(v: &FeatureVector) -> bool {
    let narrow_hole = |limit: f64| on(v, ONE_HOLE) && v[HOLE_WIDTH] < limit;
    placed(v, (0.40, 0.60), (0.40, 0.60), (0.40, 0.60), (0.40, 0.60))
        && v[BOTTOM_LEFT] < 0.5
        && (on(v, MID_TOP_EDGE)
            || on(v, TOP_MID_END)
            || on(v, TOP_MID_CROSS)
            || narrow_hole(0.20)
            || on(v, TWO_HOLES))
        && (off(v, MID_LEFT_NOTCH) || off(v, BOTTOM_LEFT_END))
        && all_off(v, &[MID_BOTTOM_NOTCH, BOTTOM_MID_END, BOTTOM_RIGHT_END])
        && (all_on(v, &[TOP_LEFT_END, TOP_MID_END, TOP_RIGHT_END])
            || on(v, TOP_MID_CROSS)
            || (truthy(v, ONE_HOLE) && v[HOLE_WIDTH] < 0.20)
            || (on(v, TOP_RIGHT_END)
                && all_off(v, &[TOP_LEFT_END, MID_LEFT_END, BOTTOM_LEFT_END])
                && on(v, BOTTOM_MID_CROSS)
                && off(v, MID_MID_CROSS)))
        && (on(v, BOTTOM_LEFT_CROSS) || on(v, BOTTOM_MID_CROSS) || narrow_hole(0.25))
        && off(v, HEY_PART)
}

fn shin_open(v: &FeatureVector) -> bool {
    placed(v, (0.40, 0.60), (0.40, 0.70), (0.40, 0.60), (0.40, 0.60))
        && v[BOTTOM_LEFT] < 0.5
        && all_on(v, &[TOP_LEFT_END, TOP_MID_END, TOP_RIGHT_END])
        && all_off(
            v,
            &[
                BOTTOM_LEFT_END,
                BOTTOM_MID_END,
                BOTTOM_RIGHT_END,
                MID_MID_CROSS,
                MID_RIGHT_CROSS,
            ],
        )
        && any_on(v, &[BOTTOM_LEFT_CROSS, BOTTOM_MID_CROSS])
        && no_parts(v)
}

pub fn tav(v: &FeatureVector) -> bool {
    standard(v)
        && v[BOTTOM_RIGHT] < 0.5
        && all_on(v, &[TOP_BAR, RIGHT_BOTTOM_EDGE])
        && off(v, BOTTOM_BAR)
        && (on(v, BIG_BOTTOM_LEFT_EDGE) || v[TOP_LEFT] > v[BOTTOM_LEFT] * 2.0)
        && on(v, BOTTOM_LEFT_END)
        && off(v, BOTTOM_MID_END)
        && on(v, BOTTOM_RIGHT_END)
        && all_off(v, &[MID_MID_CROSS, BOTTOM_MID_CROSS, ONE_HOLE, HEY_PART])
}

pub fn dot(v: &FeatureVector) -> bool {
    placed(v, (0.05, 0.30), (0.05, 0.30), (0.00, 0.22), (0.35, 0.65))
        && v[TOP_LEFT] < 2.0 * v[BOTTOM_LEFT]
}

pub fn comma(v: &FeatureVector) -> bool {
    within(v, HEIGHT, 0.05, 0.30)
        && within(v, WIDTH, 0.10, 0.20)
        && (0.00..0.22).contains(&v[TOP])
        && within(v, BOTTOM, 0.35, 0.65)
        && v[TOP_LEFT] >= 2.0 * v[BOTTOM_LEFT]
}

pub fn geresh(v: &FeatureVector) -> bool {
    placed(v, (0.05, 0.30), (0.05, 0.25), (0.42, 0.58), (0.45, 0.85))
        && v[BOTTOM_LEFT] < 0.5
        && any_on(v, &[MID_BOTTOM_EDGE, LEFT_BOTTOM_EDGE])
        && all_off(v, &[MID_RIGHT_NOTCH, BOTTOM_RIGHT_NOTCH])
        && any_on(v, &[TOP_RIGHT_END, TOP_MID_END])
        && any_on(
            v,
            &[BOTTOM_MID_END, BOTTOM_LEFT_END, MID_LEFT_END, MID_MID_END],
        )
        && all_off(v, &[BOTTOM_LEFT_CROSS, BOTTOM_MID_CROSS])
        && no_parts(v)
}

pub fn question(v: &FeatureVector) -> bool {
    placed(v, (0.40, 0.55), (0.05, 0.45), (0.45, 0.55), (0.45, 0.60))
        && off(v, BOTTOM_BAR)
        && any_on(v, &[BIG_MID_LEFT_EDGE, BIG_BOTTOM_LEFT_EDGE])
        && on(v, BOTTOM_MID_END)
        && all_off(v, &[TOP_RIGHT_END, MID_MID_CROSS, ONE_HOLE, TWO_HOLES])
        && on(v, DOT_PART)
}

pub fn exclamation(v: &FeatureVector) -> bool {
    placed(v, (0.40, 0.55), (0.05, 0.20), (0.45, 0.60), (0.45, 0.60))
        && all_on(
            v,
            &[BIG_BOTTOM_LEFT_EDGE, BOTTOM_MID_END, TOP_MID_END, DOT_PART],
        )
        && off(v, MID_MID_CROSS)
        && no_parts(v)
}

pub fn colon(v: &FeatureVector) -> bool {
    placed(v, (0.30, 0.55), (0.05, 0.20), (0.30, 0.50), (0.45, 0.55))
        && any_on(v, &[BIG_BOTTOM_LEFT_EDGE, BIG_MID_LEFT_EDGE])
        && all_on(v, &[BOTTOM_MID_END, TOP_MID_END, DOT_PART])
        && all_off(v, &[MID_MID_END, MID_MID_CROSS])
        && no_parts(v)
}

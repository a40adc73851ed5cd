//! Built-in letter guides
//!
//! Stroke-order guides in the 400x400 viewbox. Cap height runs from y=60 to
//! y=340; x-height starts at y=160. Straight-line letters are authored as
//! point lists, curved ones as path strings. Round letters are split into a
//! left and a right arc so that no stroke ends near its own start.

use lexi_geom::Point;

use crate::guides::GuideInput;

enum Glyph {
    Paths(&'static [&'static str]),
    Points(&'static [&'static [(f32, f32)]]),
}

const LETTERS: &[(char, Glyph)] = &[
    ('A', Glyph::Points(&[
        &[(200.0, 60.0), (90.0, 340.0)],
        &[(200.0, 60.0), (310.0, 340.0)],
        &[(135.0, 230.0), (265.0, 230.0)],
    ])),
    ('B', Glyph::Paths(&[
        "M 110 60 L 110 340",
        "M 110 60 L 220 60 C 300 60 300 195 220 195 L 110 195",
        "M 110 195 L 235 195 C 320 195 320 340 235 340 L 110 340",
    ])),
    ('C', Glyph::Paths(&[
        "M 300 110 C 260 50 110 50 100 200 C 110 350 260 350 300 290",
    ])),
    ('D', Glyph::Paths(&[
        "M 110 60 L 110 340",
        "M 110 60 L 180 60 C 340 60 340 340 180 340 L 110 340",
    ])),
    ('E', Glyph::Points(&[
        &[(110.0, 60.0), (110.0, 340.0)],
        &[(110.0, 60.0), (290.0, 60.0)],
        &[(110.0, 200.0), (260.0, 200.0)],
        &[(110.0, 340.0), (290.0, 340.0)],
    ])),
    ('F', Glyph::Points(&[
        &[(110.0, 60.0), (110.0, 340.0)],
        &[(110.0, 60.0), (290.0, 60.0)],
        &[(110.0, 200.0), (260.0, 200.0)],
    ])),
    ('G', Glyph::Paths(&[
        "M 300 110 C 260 50 110 50 100 200 C 110 350 280 350 300 260 L 300 210 L 220 210",
    ])),
    ('H', Glyph::Points(&[
        &[(110.0, 60.0), (110.0, 340.0)],
        &[(290.0, 60.0), (290.0, 340.0)],
        &[(110.0, 200.0), (290.0, 200.0)],
    ])),
    ('I', Glyph::Points(&[
        &[(200.0, 60.0), (200.0, 340.0)],
        &[(140.0, 60.0), (260.0, 60.0)],
        &[(140.0, 340.0), (260.0, 340.0)],
    ])),
    ('J', Glyph::Paths(&[
        "M 260 60 L 260 270 C 260 350 140 350 130 280",
    ])),
    ('K', Glyph::Points(&[
        &[(110.0, 60.0), (110.0, 340.0)],
        &[(290.0, 60.0), (110.0, 220.0)],
        &[(170.0, 170.0), (300.0, 340.0)],
    ])),
    ('L', Glyph::Points(&[
        &[(110.0, 60.0), (110.0, 340.0), (280.0, 340.0)],
    ])),
    ('M', Glyph::Points(&[
        &[(90.0, 340.0), (90.0, 60.0), (200.0, 240.0), (310.0, 60.0), (310.0, 340.0)],
    ])),
    ('N', Glyph::Points(&[
        &[(110.0, 340.0), (110.0, 60.0), (290.0, 340.0), (290.0, 60.0)],
    ])),
    ('O', Glyph::Paths(&[
        "M 200 60 C 80 60 80 340 200 340",
        "M 200 60 C 320 60 320 340 200 340",
    ])),
    ('P', Glyph::Paths(&[
        "M 110 60 L 110 340",
        "M 110 60 L 220 60 C 310 60 310 210 220 210 L 110 210",
    ])),
    ('Q', Glyph::Paths(&[
        "M 200 60 C 80 60 80 340 200 340",
        "M 200 60 C 320 60 320 340 200 340",
        "M 230 280 L 310 350",
    ])),
    ('R', Glyph::Paths(&[
        "M 110 60 L 110 340",
        "M 110 60 L 220 60 C 310 60 310 210 220 210 L 110 210",
        "M 200 210 L 300 340",
    ])),
    ('S', Glyph::Paths(&[
        "M 290 100 C 250 40 110 50 120 130 C 130 200 280 190 285 270 C 290 350 140 360 100 300",
    ])),
    ('T', Glyph::Points(&[
        &[(90.0, 60.0), (310.0, 60.0)],
        &[(200.0, 60.0), (200.0, 340.0)],
    ])),
    ('U', Glyph::Paths(&[
        "M 110 60 L 110 250 C 110 360 290 360 290 250 L 290 60",
    ])),
    ('V', Glyph::Points(&[
        &[(90.0, 60.0), (200.0, 340.0), (310.0, 60.0)],
    ])),
    ('W', Glyph::Points(&[
        &[(70.0, 60.0), (135.0, 340.0), (200.0, 140.0), (265.0, 340.0), (330.0, 60.0)],
    ])),
    ('X', Glyph::Points(&[
        &[(100.0, 60.0), (300.0, 340.0)],
        &[(300.0, 60.0), (100.0, 340.0)],
    ])),
    ('Y', Glyph::Points(&[
        &[(100.0, 60.0), (200.0, 200.0)],
        &[(300.0, 60.0), (200.0, 200.0), (200.0, 340.0)],
    ])),
    ('Z', Glyph::Points(&[
        &[(100.0, 60.0), (300.0, 60.0), (100.0, 340.0), (300.0, 340.0)],
    ])),
    ('a', Glyph::Paths(&[
        "M 270 190 C 240 140 140 150 140 240 C 140 330 240 340 270 280",
        "M 270 170 L 270 340",
    ])),
    ('c', Glyph::Paths(&[
        "M 270 190 C 240 140 130 150 130 250 C 130 350 240 350 270 300",
    ])),
    ('l', Glyph::Points(&[
        &[(200.0, 60.0), (200.0, 340.0)],
    ])),
    ('o', Glyph::Paths(&[
        "M 200 160 C 120 160 120 340 200 340",
        "M 200 160 C 280 160 280 340 200 340",
    ])),
];

/// Built-in guide for `letter`, or `None` if there is no data for it
pub fn guide_for(letter: char) -> Option<GuideInput> {
    let (_, glyph) = LETTERS.iter().find(|(c, _)| *c == letter)?;
    let input = match glyph {
        Glyph::Paths(paths) => GuideInput::from_paths(*paths),
        Glyph::Points(strokes) => GuideInput::Points(
            strokes
                .iter()
                .map(|s| s.iter().map(|&(x, y)| Point::new(x, y)).collect())
                .collect(),
        ),
    };
    Some(input)
}

/// Letters with built-in guides, in table order
pub fn available() -> Vec<char> {
    LETTERS.iter().map(|(c, _)| *c).collect()
}

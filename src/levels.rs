//! The authored level pack, in play order.

use crate::builder::{InvalidLevel, LevelBuilder};
use crate::level::{Difficulty, Level};

type LevelFn = fn() -> Result<Level, InvalidLevel>;

const PACK: &[LevelFn] = &[
    the_beginning,
    the_bow,
    hourglass,
    kite,
    bowtie,
    envelope,
    house,
    star,
    dumbbell,
    vase,
    butterfly,
    ice_cream,
    cat_head,
    boat,
    crown,
    glasses,
    mug,
    umbrella,
    infinity,
    heart_weave,
    arrow_block,
    double_square,
    window_solvable,
    the_prism,
    lantern,
];

/// Number of levels in the pack.
pub fn count() -> usize {
    PACK.len()
}

/// Build the level at `index`, or [`None`] past the end of the pack.
pub fn get(index: usize) -> Option<Result<Level, InvalidLevel>> {
    PACK.get(index).map(|build| build())
}

/// Build every level of the pack, stopping at the first malformed one.
pub fn load() -> Result<Vec<Level>, InvalidLevel> {
    PACK.iter().map(|build| build()).collect()
}

fn the_beginning() -> Result<Level, InvalidLevel> {
    LevelBuilder::new("The Beginning", Difficulty::Easy)
        .add_node(0, (0.2, 0.8))
        .add_node(1, (0.5, 0.2))
        .add_node(2, (0.8, 0.8))
        .add_edge(0, 1)
        .add_edge(1, 2)
        .add_edge(2, 0)
        .build()
}

fn the_bow() -> Result<Level, InvalidLevel> {
    LevelBuilder::new("The Bow", Difficulty::Easy)
        .add_node(0, (0.2, 0.2))
        .add_node(1, (0.8, 0.2))
        .add_node(2, (0.5, 0.8))
        .add_curve(0, 1, (0.5, 0.4))
        .add_edge(1, 2)
        .add_edge(2, 0)
        .build()
}

fn hourglass() -> Result<Level, InvalidLevel> {
    LevelBuilder::new("Hourglass", Difficulty::Easy)
        .add_node(0, (0.3, 0.2))
        .add_node(1, (0.7, 0.2))
        .add_node(2, (0.5, 0.5))
        .add_node(3, (0.3, 0.8))
        .add_node(4, (0.7, 0.8))
        .add_edge(0, 1)
        .add_edge(1, 2)
        .add_edge(2, 0)
        .add_edge(2, 3)
        .add_edge(3, 4)
        .add_edge(4, 2)
        .build()
}

fn kite() -> Result<Level, InvalidLevel> {
    LevelBuilder::new("Kite", Difficulty::Easy)
        .add_node(0, (0.5, 0.1))
        .add_node(1, (0.2, 0.4))
        .add_node(2, (0.8, 0.4))
        .add_node(3, (0.5, 0.9))
        .add_edge(0, 1)
        .add_edge(1, 3)
        .add_edge(3, 2)
        .add_edge(2, 0)
        .add_edge(1, 2)
        .build()
}

fn bowtie() -> Result<Level, InvalidLevel> {
    LevelBuilder::new("Bowtie", Difficulty::Easy)
        .add_node(0, (0.2, 0.3))
        .add_node(1, (0.2, 0.7))
        .add_node(2, (0.5, 0.5))
        .add_node(3, (0.8, 0.3))
        .add_node(4, (0.8, 0.7))
        .add_edge(0, 1)
        .add_edge(1, 2)
        .add_edge(2, 0)
        .add_edge(2, 3)
        .add_edge(3, 4)
        .add_edge(4, 2)
        .build()
}

fn envelope() -> Result<Level, InvalidLevel> {
    LevelBuilder::new("Envelope", Difficulty::Easy)
        .add_node(0, (0.2, 0.4))
        .add_node(1, (0.8, 0.4))
        .add_node(2, (0.8, 0.8))
        .add_node(3, (0.2, 0.8))
        .add_node(4, (0.5, 0.2))
        .add_edge(0, 1)
        .add_edge(1, 2)
        .add_edge(2, 3)
        .add_edge(3, 0)
        .add_edge(0, 4)
        .add_edge(4, 1)
        .build()
}

fn house() -> Result<Level, InvalidLevel> {
    LevelBuilder::new("House", Difficulty::Easy)
        .add_node(0, (0.2, 0.8))
        .add_node(1, (0.8, 0.8))
        .add_node(2, (0.8, 0.4))
        .add_node(3, (0.2, 0.4))
        .add_node(4, (0.5, 0.1))
        .add_edge(0, 1)
        .add_edge(1, 2)
        .add_edge(2, 4)
        .add_edge(4, 3)
        .add_edge(3, 0)
        .add_edge(3, 2)
        .add_edge(3, 1)
        .build()
}

fn star() -> Result<Level, InvalidLevel> {
    LevelBuilder::new("Star", Difficulty::Easy)
        .add_node(0, (0.5, 0.1))
        .add_node(1, (0.65, 0.4))
        .add_node(2, (0.9, 0.4))
        .add_node(3, (0.7, 0.6))
        .add_node(4, (0.8, 0.9))
        .add_node(5, (0.5, 0.75))
        .add_node(6, (0.2, 0.9))
        .add_node(7, (0.3, 0.6))
        .add_node(8, (0.1, 0.4))
        .add_node(9, (0.35, 0.4))
        .add_edge(0, 1)
        .add_edge(1, 2)
        .add_edge(2, 3)
        .add_edge(3, 4)
        .add_edge(4, 5)
        .add_edge(5, 6)
        .add_edge(6, 7)
        .add_edge(7, 8)
        .add_edge(8, 9)
        .add_edge(9, 0)
        .build()
}

fn dumbbell() -> Result<Level, InvalidLevel> {
    LevelBuilder::new("Dumbbell", Difficulty::Easy)
        .add_node(0, (0.2, 0.5))
        .add_node(1, (0.4, 0.3))
        .add_node(2, (0.4, 0.7))
        .add_node(3, (0.6, 0.3))
        .add_node(4, (0.6, 0.7))
        .add_node(5, (0.8, 0.5))
        .add_edge(0, 1)
        .add_edge(1, 2)
        .add_edge(2, 0)
        .add_edge(1, 3)
        .add_edge(3, 5)
        .add_edge(5, 4)
        .add_edge(4, 3)
        .add_edge(4, 2)
        .add_edge(1, 4)
        .build()
}

fn vase() -> Result<Level, InvalidLevel> {
    LevelBuilder::new("Vase", Difficulty::Easy)
        .add_node(0, (0.4, 0.2))
        .add_node(1, (0.6, 0.2))
        .add_node(2, (0.7, 0.4))
        .add_node(3, (0.6, 0.8))
        .add_node(4, (0.4, 0.8))
        .add_node(5, (0.3, 0.4))
        .add_edge(0, 1)
        .add_edge(1, 2)
        .add_edge(2, 3)
        .add_edge(3, 4)
        .add_edge(4, 5)
        .add_edge(5, 0)
        .add_edge(2, 5)
        .build()
}

fn butterfly() -> Result<Level, InvalidLevel> {
    LevelBuilder::new("Butterfly", Difficulty::Medium)
        .add_node(0, (0.5, 0.5))
        .add_node(1, (0.2, 0.2))
        .add_node(2, (0.2, 0.5))
        .add_node(3, (0.5, 0.2))
        .add_node(4, (0.8, 0.2))
        .add_node(5, (0.8, 0.5))
        .add_edge(0, 1)
        .add_edge(1, 2)
        .add_edge(2, 0)
        .add_edge(0, 3)
        .add_edge(3, 4)
        .add_edge(4, 5)
        .add_edge(5, 0)
        .build()
}

fn ice_cream() -> Result<Level, InvalidLevel> {
    LevelBuilder::new("Ice Cream", Difficulty::Medium)
        .add_node(0, (0.3, 0.4))
        .add_node(1, (0.7, 0.4))
        .add_node(2, (0.5, 0.9))
        .add_node(3, (0.3, 0.2))
        .add_node(4, (0.5, 0.1))
        .add_node(5, (0.7, 0.2))
        .add_edge(0, 1)
        .add_edge(1, 2)
        .add_edge(2, 0)
        .add_curve(0, 3, (0.2, 0.3))
        .add_curve(3, 4, (0.4, 0.1))
        .add_curve(4, 5, (0.6, 0.1))
        .add_curve(5, 1, (0.8, 0.3))
        .build()
}

fn cat_head() -> Result<Level, InvalidLevel> {
    LevelBuilder::new("Cat Head", Difficulty::Medium)
        .add_node(0, (0.3, 0.4))
        .add_node(1, (0.2, 0.2))
        .add_node(2, (0.4, 0.3))
        .add_node(3, (0.6, 0.3))
        .add_node(4, (0.8, 0.2))
        .add_node(5, (0.7, 0.4))
        .add_node(6, (0.5, 0.7))
        .add_edge(0, 1)
        .add_edge(1, 2)
        .add_edge(2, 0)
        .add_edge(3, 4)
        .add_edge(4, 5)
        .add_edge(5, 3)
        .add_edge(2, 3)
        .add_edge(0, 6)
        .add_edge(6, 5)
        .add_edge(0, 5)
        .build()
}

fn boat() -> Result<Level, InvalidLevel> {
    LevelBuilder::new("Boat", Difficulty::Medium)
        .add_node(0, (0.2, 0.6))
        .add_node(1, (0.8, 0.6))
        .add_node(2, (0.6, 0.8))
        .add_node(3, (0.4, 0.8))
        .add_node(4, (0.5, 0.2))
        .add_edge(0, 1)
        .add_edge(1, 2)
        .add_edge(2, 3)
        .add_edge(3, 0)
        .add_edge(0, 4)
        .add_edge(4, 1)
        .build()
}

fn crown() -> Result<Level, InvalidLevel> {
    LevelBuilder::new("Crown", Difficulty::Medium)
        .add_node(0, (0.2, 0.6))
        .add_node(1, (0.2, 0.3))
        .add_node(2, (0.35, 0.5))
        .add_node(3, (0.5, 0.2))
        .add_node(4, (0.65, 0.5))
        .add_node(5, (0.8, 0.3))
        .add_node(6, (0.8, 0.6))
        .add_edge(0, 1)
        .add_edge(1, 2)
        .add_edge(2, 3)
        .add_edge(3, 4)
        .add_edge(4, 5)
        .add_edge(5, 6)
        .add_edge(6, 0)
        .build()
}

fn glasses() -> Result<Level, InvalidLevel> {
    LevelBuilder::new("Glasses", Difficulty::Medium)
        .add_node(0, (0.1, 0.4))
        .add_node(1, (0.4, 0.4))
        .add_node(2, (0.6, 0.4))
        .add_node(3, (0.9, 0.4))
        .add_node(4, (0.25, 0.6))
        .add_node(5, (0.75, 0.6))
        .add_edge(0, 1)
        .add_edge(1, 4)
        .add_edge(4, 0)
        .add_curve(1, 2, (0.5, 0.3))
        .add_edge(2, 3)
        .add_edge(3, 5)
        .add_edge(5, 2)
        .build()
}

fn mug() -> Result<Level, InvalidLevel> {
    LevelBuilder::new("Mug", Difficulty::Medium)
        .add_node(0, (0.3, 0.3))
        .add_node(1, (0.6, 0.3))
        .add_node(2, (0.6, 0.7))
        .add_node(3, (0.3, 0.7))
        .add_node(4, (0.8, 0.4))
        .add_node(5, (0.8, 0.6))
        .add_curve(0, 1, (0.45, 0.25))
        .add_edge(1, 2)
        .add_curve(2, 3, (0.45, 0.75))
        .add_edge(3, 0)
        .add_curve(1, 4, (0.7, 0.35))
        .add_curve(4, 5, (0.9, 0.5))
        .add_curve(5, 2, (0.7, 0.65))
        .build()
}

fn umbrella() -> Result<Level, InvalidLevel> {
    LevelBuilder::new("Umbrella", Difficulty::Medium)
        .add_node(0, (0.2, 0.5))
        .add_node(1, (0.5, 0.2))
        .add_node(2, (0.8, 0.5))
        .add_node(3, (0.5, 0.5))
        .add_node(4, (0.5, 0.8))
        .add_node(5, (0.4, 0.9))
        .add_curve(0, 1, (0.3, 0.3))
        .add_curve(1, 2, (0.7, 0.3))
        .add_edge(2, 3)
        .add_edge(3, 0)
        .add_edge(3, 4)
        .add_curve(4, 5, (0.4, 0.8))
        .add_edge(1, 3)
        .build()
}

fn infinity() -> Result<Level, InvalidLevel> {
    LevelBuilder::new("Infinity", Difficulty::Medium)
        .add_node(0, (0.5, 0.5))
        .add_node(1, (0.2, 0.3))
        .add_node(2, (0.2, 0.7))
        .add_node(3, (0.8, 0.3))
        .add_node(4, (0.8, 0.7))
        .add_curve(0, 1, (0.35, 0.4))
        .add_curve(1, 2, (0.1, 0.5))
        .add_curve(2, 0, (0.35, 0.6))
        .add_curve(0, 3, (0.65, 0.4))
        .add_curve(3, 4, (0.9, 0.5))
        .add_curve(4, 0, (0.65, 0.6))
        .build()
}

fn heart_weave() -> Result<Level, InvalidLevel> {
    LevelBuilder::new("Heart Weave", Difficulty::Medium)
        .add_node(0, (0.5, 0.3))
        .add_node(1, (0.2, 0.2))
        .add_node(2, (0.1, 0.5))
        .add_node(3, (0.5, 0.9))
        .add_node(4, (0.9, 0.5))
        .add_node(5, (0.8, 0.2))
        .add_curve(0, 1, (0.35, 0.15))
        .add_curve(1, 2, (0.1, 0.3))
        .add_curve(2, 3, (0.2, 0.8))
        .add_curve(3, 4, (0.8, 0.8))
        .add_curve(4, 5, (0.9, 0.3))
        .add_curve(5, 0, (0.65, 0.15))
        .add_edge(0, 3)
        .build()
}

fn arrow_block() -> Result<Level, InvalidLevel> {
    LevelBuilder::new("Arrow Block", Difficulty::Medium)
        .add_node(0, (0.5, 0.1))
        .add_node(1, (0.2, 0.4))
        .add_node(2, (0.4, 0.4))
        .add_node(3, (0.4, 0.9))
        .add_node(4, (0.6, 0.9))
        .add_node(5, (0.6, 0.4))
        .add_node(6, (0.8, 0.4))
        .add_edge(0, 1)
        .add_edge(1, 2)
        .add_edge(2, 3)
        .add_edge(3, 4)
        .add_edge(4, 5)
        .add_edge(5, 6)
        .add_edge(6, 0)
        .add_edge(2, 5)
        .build()
}

fn double_square() -> Result<Level, InvalidLevel> {
    LevelBuilder::new("Double Square", Difficulty::Medium)
        .add_node(0, (0.2, 0.2))
        .add_node(1, (0.5, 0.2))
        .add_node(2, (0.5, 0.5))
        .add_node(3, (0.2, 0.5))
        .add_node(4, (0.8, 0.5))
        .add_node(5, (0.8, 0.8))
        .add_node(6, (0.5, 0.8))
        .add_edge(0, 1)
        .add_edge(1, 2)
        .add_edge(2, 3)
        .add_edge(3, 0)
        .add_edge(2, 4)
        .add_edge(4, 5)
        .add_edge(5, 6)
        .add_edge(6, 2)
        .build()
}

fn window_solvable() -> Result<Level, InvalidLevel> {
    LevelBuilder::new("Window Solvable", Difficulty::Medium)
        .add_node(0, (0.2, 0.2))
        .add_node(1, (0.8, 0.2))
        .add_node(2, (0.8, 0.8))
        .add_node(3, (0.2, 0.8))
        .add_node(4, (0.5, 0.2))
        .add_node(5, (0.5, 0.8))
        .add_node(6, (0.2, 0.5))
        .add_node(7, (0.8, 0.5))
        .add_node(8, (0.5, 0.5))
        .add_edge(0, 4)
        .add_edge(4, 1)
        .add_edge(1, 7)
        .add_edge(7, 2)
        .add_edge(2, 5)
        .add_edge(5, 3)
        .add_edge(3, 6)
        .add_edge(6, 0)
        .add_edge(4, 8)
        .add_edge(8, 5)
        .add_edge(6, 8)
        .add_edge(8, 7)
        .add_edge(4, 6)
        .add_edge(5, 7)
        .build()
}

fn the_prism() -> Result<Level, InvalidLevel> {
    LevelBuilder::new("The Prism", Difficulty::Hard)
        .add_node(0, (0.4, 0.3))
        .add_node(1, (0.6, 0.3))
        .add_node(2, (0.7, 0.5))
        .add_node(3, (0.6, 0.7))
        .add_node(4, (0.4, 0.7))
        .add_node(5, (0.3, 0.5))
        .add_edge(0, 1)
        .add_edge(1, 2)
        .add_edge(2, 3)
        .add_edge(3, 4)
        .add_edge(4, 5)
        .add_edge(5, 0)
        .add_edge(0, 2)
        .add_edge(2, 4)
        .add_edge(4, 0)
        .add_edge(1, 3)
        .add_edge(3, 5)
        .add_edge(5, 1)
        .build()
}

fn lantern() -> Result<Level, InvalidLevel> {
    LevelBuilder::new("Lantern", Difficulty::Hard)
        .add_node(0, (0.3, 0.2))
        .add_node(1, (0.7, 0.2))
        .add_node(2, (0.8, 0.5))
        .add_node(3, (0.7, 0.8))
        .add_node(4, (0.3, 0.8))
        .add_node(5, (0.2, 0.5))
        .add_node(6, (0.5, 0.1))
        .add_node(7, (0.5, 0.9))
        .add_edge(0, 1)
        .add_edge(1, 2)
        .add_edge(2, 3)
        .add_edge(3, 4)
        .add_edge(4, 5)
        .add_edge(5, 0)
        .add_edge(0, 6)
        .add_edge(6, 1)
        .add_edge(4, 7)
        .add_edge(7, 3)
        .add_edge(0, 4)
        .add_edge(1, 3)
        .build()
}

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{cmp::Reverse, collections::BinaryHeap};

use itertools::Itertools;
use rand::Rng;
use tabled::Tabled;
use tracing::debug;
use typed_builder::TypedBuilder;

use crate::constants::{
    SPRITE_DURATION_SECS, SPRITE_FONT_REM, SPRITE_LEFT_VW, SPRITE_START_OFFSET_SECS, SYMBOL_COUNT,
    SYMBOLS,
};

/// One decorative glyph floating across the background. Carries no
/// semantic data, only presentation parameters; plays a single animation
/// cycle and is replaced.
#[derive(Debug, Clone, TypedBuilder)]
pub struct SymbolSprite {
    /// Identity within the background layer.
    id:                u64,
    /// The glyph drawn, from the fixed palette.
    glyph:             &'static str,
    /// Horizontal position, as a percentage of the viewport width.
    left_vw:           f64,
    /// Font size, in rem.
    font_rem:          f64,
    /// Animation duration, in seconds.
    duration_secs:     f64,
    /// Animation start offset, in seconds. Negative: the sprite appears
    /// already partway through its cycle.
    start_offset_secs: f64,
    /// Timeline instant the sprite was appended to the layer.
    spawned_at:        f64,
}

impl SymbolSprite {
    /// Returns the sprite's identity.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the glyph drawn.
    pub fn glyph(&self) -> &'static str {
        self.glyph
    }

    /// Returns the horizontal position in viewport-width percent.
    pub fn left_vw(&self) -> f64 {
        self.left_vw
    }

    /// Returns the font size in rem.
    pub fn font_rem(&self) -> f64 {
        self.font_rem
    }

    /// Returns the animation duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    /// Returns the animation start offset in seconds.
    pub fn start_offset_secs(&self) -> f64 {
        self.start_offset_secs
    }

    /// The timeline instant this sprite's animation cycle completes.
    pub fn completes_at(&self) -> f64 {
        self.spawned_at + self.duration_secs + self.start_offset_secs
    }

    /// Fraction of the animation cycle played at a timeline instant,
    /// clamped into [0, 1].
    pub fn progress(&self, at: f64) -> f64 {
        ((at - self.spawned_at - self.start_offset_secs) / self.duration_secs).clamp(0.0, 1.0)
    }
}

/// The background container sprites live in.
#[derive(Debug, Clone, Default)]
pub struct BackgroundLayer {
    /// The live sprite population.
    sprites: Vec<SymbolSprite>,
}

impl BackgroundLayer {
    /// Returns the live sprite population.
    pub fn sprites(&self) -> &[SymbolSprite] {
        &self.sprites
    }

    /// Returns the population size.
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    /// Returns whether the layer holds no sprites.
    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Appends a sprite to the layer.
    fn append(&mut self, sprite: SymbolSprite) {
        self.sprites.push(sprite);
    }

    /// Removes a sprite by identity.
    fn retire(&mut self, id: u64) -> Option<SymbolSprite> {
        let index = self.sprites.iter().position(|sprite| sprite.id() == id)?;
        Some(self.sprites.remove(index))
    }
}

/// A pending animation-completion event on the simulated timeline.
#[derive(Debug, Clone, Copy)]
struct Completion {
    /// The timeline instant the animation finishes.
    at:     f64,
    /// The sprite completing.
    sprite: u64,
}

impl PartialEq for Completion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for Completion {}

impl PartialOrd for Completion {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Completion {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.at.total_cmp(&other.at).then(self.sprite.cmp(&other.sprite))
    }
}

/// Maintains a constant-size swarm of decorative glyphs on an explicit
/// simulated timeline. On each sprite's animation completion the sprite is
/// removed and exactly one replacement is spawned, so the population never
/// drifts.
pub struct SymbolField<R: Rng> {
    /// Source of sprite parameters.
    rng:       R,
    /// Current timeline instant, in seconds.
    clock:     f64,
    /// Identity handed to the next sprite.
    next_id:   u64,
    /// Pending completions, soonest first. Ties resolve in spawn order.
    pending:   BinaryHeap<Reverse<Completion>>,
    /// Completions processed so far.
    completed: u64,
}

impl<R: Rng> SymbolField<R> {
    /// Creates an idle field at timeline instant zero.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            clock: 0.0,
            next_id: 0,
            pending: BinaryHeap::new(),
            completed: 0,
        }
    }

    /// Spawns the full startup population synchronously.
    pub fn startup(&mut self, layer: &mut BackgroundLayer) {
        for _ in 0..SYMBOL_COUNT {
            self.spawn_sprite(layer);
        }
        debug!("ambient field populated with {} sprites", layer.len());
    }

    /// Creates one sprite with random presentation parameters, appends it
    /// to the layer, and schedules its completion.
    pub fn spawn_sprite(&mut self, layer: &mut BackgroundLayer) {
        let id = self.next_id;
        self.next_id += 1;

        let sprite = SymbolSprite::builder()
            .id(id)
            .glyph(SYMBOLS[self.rng.gen_range(0..SYMBOLS.len())])
            .left_vw(self.rng.gen_range(SPRITE_LEFT_VW))
            .font_rem(self.rng.gen_range(SPRITE_FONT_REM))
            .duration_secs(self.rng.gen_range(SPRITE_DURATION_SECS))
            .start_offset_secs(self.rng.gen_range(SPRITE_START_OFFSET_SECS))
            .spawned_at(self.clock)
            .build();

        self.pending.push(Reverse(Completion {
            at: sprite.completes_at(),
            sprite: id,
        }));
        layer.append(sprite);
    }

    /// Advances the timeline to `until`, processing every completion due
    /// on the way, one at a time in timestamp order. Each completion
    /// atomically removes its sprite and spawns one replacement. Returns
    /// how many completions were processed.
    pub fn advance(&mut self, layer: &mut BackgroundLayer, until: f64) -> usize {
        let mut processed = 0;

        while let Some(Reverse(next)) = self.pending.peek().copied() {
            if next.at > until {
                break;
            }
            self.pending.pop();
            self.clock = self.clock.max(next.at);

            if layer.retire(next.sprite).is_some() {
                self.completed += 1;
                processed += 1;
                self.spawn_sprite(layer);
            }
        }

        self.clock = self.clock.max(until);
        processed
    }

    /// Returns the current timeline instant.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Returns how many completions have been processed so far.
    pub fn completed(&self) -> u64 {
        self.completed
    }
}

/// One row of the glyph-distribution table.
#[derive(Tabled)]
pub struct GlyphCount {
    /// The glyph.
    #[tabled(rename = "Glyph")]
    glyph: &'static str,
    /// How many live sprites currently draw it.
    #[tabled(rename = "Sprites")]
    count: usize,
}

impl GlyphCount {
    /// Returns the glyph.
    pub fn glyph(&self) -> &'static str {
        self.glyph
    }

    /// Returns how many live sprites currently draw the glyph.
    pub fn count(&self) -> usize {
        self.count
    }
}

/// Counts the live population per palette glyph, in palette order.
pub fn glyph_census(layer: &BackgroundLayer) -> Vec<GlyphCount> {
    let counts = layer.sprites().iter().map(SymbolSprite::glyph).counts();
    SYMBOLS
        .iter()
        .copied()
        .map(|glyph| GlyphCount {
            glyph,
            count: counts.get(glyph).copied().unwrap_or(0),
        })
        .collect()
}

/// Renders one coarse text frame of the swarm: sprites rise bottom-to-top
/// with their animation progress, at their horizontal viewport position.
pub fn render_frame(layer: &BackgroundLayer, at: f64, cols: usize, rows: usize) -> String {
    if cols == 0 || rows == 0 {
        return String::new();
    }

    let mut grid = vec![vec![' '; cols]; rows];

    for sprite in layer.sprites() {
        let col = ((sprite.left_vw() / 100.0) * cols as f64) as usize;
        let row_from_bottom = (sprite.progress(at) * rows as f64) as usize;
        let row = rows.saturating_sub(1).saturating_sub(row_from_bottom.min(rows - 1));

        for (offset, c) in sprite.glyph().chars().enumerate() {
            if col + offset < cols {
                grid[row][col + offset] = c;
            }
        }
    }

    grid.into_iter().map(String::from_iter).join("\n")
}

//! End-to-end scenarios on small flat worlds
//!
//! These drive the public API the way a host would: build a `WorldState`,
//! queue or apply edits, and step it with `tick`.

use glam::Vec2;

use tile_world::Settings;
use tile_world::settings::WorldSettings;
use tile_world::sim::{
    Block, Body, EditOutcome, HOTBAR, PointerEvent, Rect, TickInput, TileGrid, WorldState,
    is_grounded, place, resolve_horizontal, tick,
};

const T: f32 = 16.0;

/// 10x10 world, no hills, surface on row 5
fn small_world(physics_size: Option<f32>) -> WorldState {
    let mut settings = Settings {
        world: WorldSettings::flat(10, 10, 5),
        ..Settings::default()
    };
    if let Some(size) = physics_size {
        settings.physics.player_width = size;
        settings.physics.player_height = size;
    }
    WorldState::new(settings, 9).unwrap()
}

fn run(state: &mut WorldState, ticks: usize) {
    let idle = TickInput::default();
    for _ in 0..ticks {
        tick(state, &idle);
    }
}

#[test]
fn farmland_grows_to_stage_two() {
    let mut state = small_world(None);
    assert_eq!(state.grid.get(3, 4), Some(Block::Air));
    assert!(!Rect::tile(3, 4, T).overlaps(&state.player.body.rect()));

    assert_eq!(state.place(3, 4, Block::Farmland), EditOutcome::Placed(Block::Farmland));
    assert_eq!(state.crop_stage(3, 4), Some(1));

    run(&mut state, 298);
    assert_eq!(state.grid.crop_timer(3, 4), Some(299));
    assert_eq!(state.crop_stage(3, 4), Some(1));

    run(&mut state, 1);
    assert_eq!(state.crop_stage(3, 4), Some(2));
}

#[test]
fn farmland_placed_through_pointer_queue() {
    let mut state = small_world(None);
    let slot = HOTBAR.iter().position(|b| *b == Block::Farmland).unwrap();
    state.push_pointer(PointerEvent::place_at(3.0 * T + 4.0, 4.0 * T + 4.0, slot));

    run(&mut state, 1);
    assert_eq!(state.last_edits, vec![EditOutcome::Placed(Block::Farmland)]);
    // Seeded to 1 and grown once in the same tick
    assert_eq!(state.grid.crop_timer(3, 4), Some(2));

    run(&mut state, 1);
    assert!(state.last_edits.is_empty());
}

#[test]
fn break_under_player_refused_until_player_moves() {
    let mut state = small_world(Some(16.0));
    state.set_player_position(Vec2::new(5.0 * T, 5.0 * T));
    assert_eq!(state.player.body.rect(), Rect::tile(5, 5, T));

    let before = state.grid.clone();
    assert_eq!(state.break_block(5, 5), EditOutcome::OverlapsPlayer);
    assert_eq!(state.grid, before);

    state.set_player_position(Vec2::new(T, 4.0 * T));
    assert_eq!(state.break_block(5, 5), EditOutcome::Broken(Block::Grass));
    assert_eq!(state.grid.get(5, 5), Some(Block::Air));
}

#[test]
fn break_then_place_reseeds_timer() {
    let mut state = small_world(None);
    state.place(2, 4, Block::Farmland);
    run(&mut state, 50);
    assert_eq!(state.grid.crop_timer(2, 4), Some(51));

    assert!(state.break_block(2, 4).applied());
    assert_eq!(state.grid.crop_timer(2, 4), None);
    assert!(state.place(2, 4, Block::Farmland).applied());
    assert_eq!(state.grid.crop_timer(2, 4), Some(1));

    state.break_block(2, 4);
    state.place(2, 4, Block::Dirt);
    assert_eq!(state.crop_stage(2, 4), None);
}

#[test]
fn breaking_air_twice_changes_nothing() {
    let mut state = small_world(None);
    let before = state.grid.clone();
    assert_eq!(state.break_block(1, 1), EditOutcome::AlreadyEmpty);
    assert_eq!(state.break_block(1, 1), EditOutcome::AlreadyEmpty);
    assert_eq!(state.grid, before);
}

#[test]
fn resting_player_stays_grounded() {
    let mut state = small_world(None);
    let start = state.player.body.pos;
    assert!(is_grounded(&state.player.body, &state.grid, T));

    run(&mut state, 1);
    let body = &state.player.body;
    assert!(!body.airborne);
    assert_eq!(body.vel.y, 0.0);
    assert_eq!(body.pos, start);
}

#[test]
fn wall_blocks_only_the_side_it_is_on() {
    let mut grid = TileGrid::new(6, 6).unwrap();
    let far = Rect::new(Vec2::splat(1000.0), Vec2::splat(1.0));
    for y in 0..6 {
        assert!(place(&mut grid, 3, y, Block::Stone, &far, T).applied());
    }

    // One tile wide, its right edge touching column 3
    let mut body = Body::new(Vec2::new(2.0 * T, 3.0 * T), Vec2::splat(T));
    let right = resolve_horizontal(&mut body, &grid, 3.0, T);
    assert!(right.blocked);
    assert_eq!(body.pos.x, 2.0 * T);

    let left = resolve_horizontal(&mut body, &grid, -3.0, T);
    assert!(!left.blocked);
    assert_eq!(body.pos.x, 2.0 * T - 3.0);
}

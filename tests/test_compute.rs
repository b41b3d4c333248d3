mod common;

use common::{Op, Recorder, Script};
use fight_kokaton::assets::{Assets, Direction, SpriteId};
use fight_kokaton::compute::*;
use fight_kokaton::consts::{
    BIRD_START, BOMB_COLOR, BOMB_RADIUS, MOOD_CRYING, MOOD_HAPPY, NUM_OF_BOMBS,
};
use fight_kokaton::entities::{Bomb, Timer};
use fight_kokaton::input::{HeldKeys, InputEvent};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Centre of the spot a right-facing beam fired from the start position
/// occupies on its first tick.
const MUZZLE: (i32, i32) = (390, 200);
/// Well away from the bird's start and from the muzzle.
const FAR: (i32, i32) = (1000, 560);

fn bomb_at(assets: &Assets, center: (i32, i32)) -> Bomb {
    Bomb::at(center, BOMB_COLOR, BOMB_RADIUS, assets)
}

/// Tick until the game stops continuing, with a safety cap.
fn run_until_stopped(game: &mut Game<'_>, input: &mut Script, canvas: &mut Recorder) -> Flow {
    for _ in 0..10_000 {
        let flow = game.tick(input, canvas).unwrap();
        if flow != Flow::Continue {
            return flow;
        }
    }
    panic!("game never stopped");
}

// ── Setup ─────────────────────────────────────────────────────────────────────

#[test]
fn new_game_has_standard_bombs() {
    let assets = Assets::load();
    let mut rng = StdRng::seed_from_u64(42);
    let game = Game::new(&assets, &mut rng);
    assert_eq!(game.bombs.len(), NUM_OF_BOMBS);
    assert!(game.beams.is_empty());
    assert!(game.explosions.is_empty());
    assert_eq!(game.score.value(), 0);
    assert_eq!(game.timer.remaining(), 10);
    assert_eq!(game.status, GameStatus::Running);
    assert_eq!(game.bird.rect.center(), BIRD_START);
}

// ── Input ─────────────────────────────────────────────────────────────────────

#[test]
fn quit_leaves_without_drawing() {
    let assets = Assets::load();
    let mut game = Game::with_bombs(&assets, vec![bomb_at(&assets, FAR)]);
    let mut input = Script::idle().then(vec![InputEvent::Quit]);
    let mut canvas = Recorder::new();
    assert_eq!(game.tick(&mut input, &mut canvas).unwrap(), Flow::Quit);
    assert!(canvas.ops.is_empty());
}

#[test]
fn held_keys_move_the_bird() {
    let assets = Assets::load();
    let mut game = Game::with_bombs(&assets, vec![bomb_at(&assets, FAR)]);
    let mut input = Script::idle();
    input.held = HeldKeys { up: false, down: true, left: false, right: false };
    let mut canvas = Recorder::new();
    game.tick(&mut input, &mut canvas).unwrap();
    assert_eq!(game.bird.rect.center(), (BIRD_START.0, BIRD_START.1 + 5));
    assert_eq!(game.bird.direction(), Direction::Down);
}

#[test]
fn regular_tick_draws_everything_then_presents_once() {
    let assets = Assets::load();
    let mut game = Game::with_bombs(&assets, vec![bomb_at(&assets, FAR)]);
    let mut canvas = Recorder::new();
    let flow = game.tick(&mut Script::idle(), &mut canvas).unwrap();

    assert_eq!(flow, Flow::Continue);
    assert_eq!(game.frame, 1);
    assert_eq!(canvas.ops.first(), Some(&Op::Background));
    assert_eq!(canvas.ops.last(), Some(&Op::Present));
    assert_eq!(canvas.presents(), 1);
    assert_eq!(canvas.texts(), vec!["score: 0", "time remaining: 10 seconds"]);
}

// ── Scoring ───────────────────────────────────────────────────────────────────

#[test]
fn beam_hit_scores_and_leaves_explosion() {
    let assets = Assets::load();
    let mut game = Game::with_bombs(&assets, vec![bomb_at(&assets, MUZZLE), bomb_at(&assets, FAR)]);
    let mut input = Script::idle().then(vec![InputEvent::Fire]);
    let mut canvas = Recorder::new();

    assert_eq!(game.tick(&mut input, &mut canvas).unwrap(), Flow::Continue);
    assert_eq!(game.score.value(), 1);
    assert_eq!(game.bombs.len(), 1);
    assert!(game.beams.is_empty());
    assert_eq!(game.explosions.len(), 1);
    assert_eq!(game.explosions[0].center(), MUZZLE);
    // Hit feedback face, flushed mid-tick and again at the end.
    assert_eq!(game.bird.image(), SpriteId::Mood(MOOD_HAPPY));
    assert_eq!(canvas.presents(), 2);
}

#[test]
fn one_beam_destroys_at_most_one_bomb() {
    let assets = Assets::load();
    let bombs = vec![bomb_at(&assets, MUZZLE), bomb_at(&assets, MUZZLE)];
    let mut game = Game::with_bombs(&assets, bombs);
    let mut input = Script::idle().then(vec![InputEvent::Fire]);
    let mut canvas = Recorder::new();

    game.tick(&mut input, &mut canvas).unwrap();
    assert_eq!(game.score.value(), 1);
    assert_eq!(game.bombs.len(), 1);
}

#[test]
fn spent_bomb_does_not_absorb_second_beam() {
    let assets = Assets::load();
    let mut game = Game::with_bombs(&assets, vec![bomb_at(&assets, MUZZLE)]);
    let mut input = Script::idle().then(vec![InputEvent::Fire, InputEvent::Fire]);
    let mut canvas = Recorder::new();

    game.tick(&mut input, &mut canvas).unwrap();
    assert_eq!(game.score.value(), 1);
    assert!(game.bombs.is_empty());
    assert_eq!(game.beams.len(), 1);
}

#[test]
fn explosion_is_pruned_after_its_lifetime() {
    let assets = Assets::load();
    let mut game = Game::with_bombs(&assets, vec![bomb_at(&assets, MUZZLE)]);
    let mut input = Script::idle().then(vec![InputEvent::Fire]);
    let mut canvas = Recorder::new();

    for _ in 0..21 {
        game.tick(&mut input, &mut canvas).unwrap();
    }
    assert_eq!(game.explosions.len(), 1);
    assert_eq!(game.explosions[0].life(), -1);
    game.tick(&mut input, &mut canvas).unwrap();
    assert!(game.explosions.is_empty());
}

#[test]
fn beam_leaving_the_screen_is_pruned() {
    let assets = Assets::load();
    let mut game = Game::with_bombs(&assets, Vec::new());
    let mut input = Script::idle().then(vec![InputEvent::Fire]);
    let mut canvas = Recorder::new();

    game.tick(&mut input, &mut canvas).unwrap();
    assert_eq!(game.beams.len(), 1);
    for _ in 0..200 {
        game.tick(&mut input, &mut canvas).unwrap();
    }
    assert!(game.beams.is_empty());
}

// ── Endings ───────────────────────────────────────────────────────────────────

#[test]
fn touching_a_bomb_is_game_over() {
    let assets = Assets::load();
    let mut game = Game::with_bombs(&assets, vec![bomb_at(&assets, BIRD_START)]);
    let mut canvas = Recorder::new();

    let flow = game.tick(&mut Script::idle(), &mut canvas).unwrap();
    assert_eq!(flow, Flow::Ended(Ending::GameOver));
    assert_eq!(game.status, GameStatus::Ended(Ending::GameOver));
    assert_eq!(game.bird.image(), SpriteId::Mood(MOOD_CRYING));
    assert_eq!(canvas.texts(), vec!["Game Over"]);
    assert_eq!(canvas.ops.last(), Some(&Op::Present));
}

#[test]
fn game_over_wins_regardless_of_time_left() {
    let assets = Assets::load();
    let mut game = Game::with_bombs(&assets, vec![bomb_at(&assets, BIRD_START)]);
    game.timer = Timer::new(1000);
    let flow = game.tick(&mut Script::idle(), &mut Recorder::new()).unwrap();
    assert_eq!(flow, Flow::Ended(Ending::GameOver));
}

#[test]
fn ended_game_stays_ended() {
    let assets = Assets::load();
    let mut game = Game::with_bombs(&assets, vec![bomb_at(&assets, BIRD_START)]);
    game.tick(&mut Script::idle(), &mut Recorder::new()).unwrap();

    let mut canvas = Recorder::new();
    let mut input = Script::idle().then(vec![InputEvent::Fire]);
    let flow = game.tick(&mut input, &mut canvas).unwrap();
    assert_eq!(flow, Flow::Ended(Ending::GameOver));
    assert!(canvas.ops.is_empty());
    assert!(game.beams.is_empty());
}

#[test]
fn time_over_with_bombs_left() {
    let assets = Assets::load();
    let mut game = Game::with_bombs(&assets, vec![bomb_at(&assets, FAR)]);
    game.timer = Timer::new(-1);
    let mut canvas = Recorder::new();

    let flow = game.tick(&mut Script::idle(), &mut canvas).unwrap();
    assert_eq!(flow, Flow::Ended(Ending::TimeOver));
    assert_eq!(game.bird.image(), SpriteId::Mood(MOOD_CRYING));
    assert_eq!(canvas.texts(), vec!["Time Over"]);
}

#[test]
fn clearing_every_bomb_then_timing_out_is_game_clear() {
    let assets = Assets::load();
    let bombs = (0..5).map(|_| bomb_at(&assets, MUZZLE)).collect();
    let mut game = Game::with_bombs(&assets, bombs);
    let mut input = Script::idle().then(vec![InputEvent::Fire; 5]);
    let mut canvas = Recorder::new();

    game.tick(&mut input, &mut canvas).unwrap();
    assert_eq!(game.score.value(), 5);
    assert!(game.bombs.is_empty());
    assert_eq!(game.explosions.len(), 5);

    let flow = run_until_stopped(&mut game, &mut input, &mut canvas);
    assert_eq!(flow, Flow::Ended(Ending::GameClear));
    assert_eq!(game.bird.image(), SpriteId::Mood(MOOD_HAPPY));
    assert_eq!(canvas.texts().last(), Some(&"Game Clear"));
    // 11 seconds of 50 ticks each take the timer from 10 to -1.
    assert_eq!(game.frame, 550);
}

use eyre::{Result, bail};
use rubik3_core::{Face, Puzzle, QUARTER_TURN_DEGREES, Turn, parse_turns};

/// Number of ticks used to animate each turn during verification.
const TICKS_PER_TURN: u32 = 9;
/// Second starting state for the checks, besides solved.
const SCRAMBLE: &str = "R U F' L D2 B";

/// Animates `turn` to completion on `puzzle`, checking invariants on the way.
fn animate(puzzle: &mut Puzzle, turn: Turn) -> Result<()> {
    if !puzzle.request_turn(turn) {
        bail!("turn {turn} was refused while idle");
    }
    let step = QUARTER_TURN_DEGREES / TICKS_PER_TURN as f32;
    // One spare tick in case of rounding.
    for _ in 0..=TICKS_PER_TURN {
        if let Some(done) = puzzle.tick(step)? {
            if done != turn {
                bail!("completed {done} instead of {turn}");
            }
            return Ok(puzzle.cube().check_invariants()?);
        }
    }
    bail!("turn {turn} did not complete after {TICKS_PER_TURN} ticks")
}

/// Checks `turn` starting from `start`.
fn check_turn(start: &Puzzle, turn: Turn) -> Result<()> {
    // Four quarter turns return to the start.
    let mut puzzle = start.clone();
    for _ in 0..4 {
        animate(&mut puzzle, turn)?;
    }
    if puzzle.cube() != start.cube() {
        bail!("{turn} repeated four times does not restore the cube");
    }

    // A turn followed by its inverse is a no-op.
    let mut puzzle = start.clone();
    animate(&mut puzzle, turn)?;
    if puzzle.cube() == start.cube() {
        bail!("{turn} does not change the cube");
    }
    animate(&mut puzzle, turn.rev())?;
    if puzzle.cube() != start.cube() {
        bail!("{turn} followed by {} does not restore the cube", turn.rev());
    }
    Ok(())
}

/// Returns the puzzle after animating `turns` from solved.
fn puzzle_after(turns: &str) -> Result<Puzzle> {
    let mut puzzle = Puzzle::new();
    for turn in parse_turns(turns)? {
        animate(&mut puzzle, turn)?;
    }
    Ok(puzzle)
}

/// Checks that every turn has order four, is undone by its inverse, and keeps
/// the cube valid.
pub fn run() -> Result<()> {
    let starts = [Puzzle::new(), puzzle_after(SCRAMBLE)?];
    let mut failures = 0;
    for face in Face::iter() {
        for turn in [Turn::cw(face), Turn::ccw(face)] {
            match starts.iter().try_for_each(|start| check_turn(start, turn)) {
                Ok(()) => println!("{:<3}ok", turn.to_string()),
                Err(e) => {
                    failures += 1;
                    println!("{:<3}FAILED: {e}", turn.to_string());
                }
            }
        }
    }
    if failures > 0 {
        bail!("{failures} turn(s) failed verification");
    }
    println!("all turns ok");
    Ok(())
}

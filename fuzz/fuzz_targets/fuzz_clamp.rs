#![no_main]

use arbitrary::Arbitrary;
use fieldhand::geometry::{Bounds, clamp_to_budget, distance, is_reachable};
use fieldhand::Coord;
use libfuzzer_sys::fuzz_target;

/// Structured input for budget clamping.
#[derive(Arbitrary, Debug)]
struct ClampInput {
    width: u16,
    height: u16,
    budget: u32,
    from: (u16, u16),
    desired: (u16, u16),
}

fuzz_target!(|input: ClampInput| {
    let width = input.width.clamp(1, 512);
    let height = input.height.clamp(1, 512);
    let bounds = Bounds::new(width, height);

    let from = bounds.clamp(Coord::new(input.from.0, input.from.1));
    let desired = Coord::new(input.desired.0, input.desired.1);
    let result = clamp_to_budget(input.budget, from, desired, bounds);

    assert!(bounds.contains(result), "{result} left a {width}x{height} board");
    assert!(
        distance(from, result) <= input.budget,
        "{from} -> {result} exceeds budget {}",
        input.budget
    );

    let on_board = bounds.clamp(desired);
    if input.budget > 0 && is_reachable(input.budget, from, on_board) {
        assert_eq!(result, on_board, "reachable target was moved");
    }
});

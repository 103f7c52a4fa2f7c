//! Behavioural tests for the calculator history.
//!
//! These scenarios validate that operations are recorded in call order, that
//! clearing is idempotent, and that callers only ever receive copies.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use sample_kit::Calculator;

#[derive(Default, ScenarioState)]
struct World {
    calculator: Slot<Calculator<i64>>,
    last_result: Slot<i64>,
}

impl World {
    /// Extracts the calculator from the world state.
    fn calculator(&self) -> Calculator<i64> {
        self.calculator.get().expect("calculator should be set")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("a fresh calculator")]
fn a_fresh_calculator(world: &World) {
    world.calculator.set(Calculator::new());
}

// ============================================================================
// When steps
// ============================================================================

#[when("the calculator adds {a:i64} and {b:i64}")]
fn the_calculator_adds(world: &World, a: i64, b: i64) {
    let mut calculator = world.calculator();
    let result = calculator.add(a, b).expect("sum should fit in i64");
    world.calculator.set(calculator);
    world.last_result.set(result);
}

#[when("the calculator multiplies {a:i64} and {b:i64}")]
fn the_calculator_multiplies(world: &World, a: i64, b: i64) {
    let mut calculator = world.calculator();
    let result = calculator.multiply(a, b).expect("product should fit in i64");
    world.calculator.set(calculator);
    world.last_result.set(result);
}

#[when("the history is cleared")]
fn the_history_is_cleared(world: &World) {
    let mut calculator = world.calculator();
    calculator.clear_history();
    world.calculator.set(calculator);
}

#[when("the caller empties its copy of the history")]
fn the_caller_empties_its_copy_of_the_history(world: &World) {
    let calculator = world.calculator();
    let mut copy = calculator.history();
    copy.clear();
    assert!(copy.is_empty());
    world.calculator.set(calculator);
}

// ============================================================================
// Then steps
// ============================================================================

#[then("the result is {expected:i64}")]
fn the_result_is(world: &World, expected: i64) {
    let result = world.last_result.get().expect("result should be set");
    assert_eq!(result, expected);
}

#[then("the history contains exactly \"{entry}\"")]
fn the_history_contains_exactly(world: &World, entry: String) {
    assert_eq!(world.calculator().history(), vec![entry]);
}

#[then("the history has {count:usize} entries")]
fn the_history_has_entries(world: &World, count: usize) {
    assert_eq!(world.calculator().len(), count);
}

#[then("entry {position:usize} of the history is \"{entry}\"")]
fn entry_of_the_history_is(world: &World, position: usize, entry: String) {
    let history = world.calculator().history();
    let actual = position
        .checked_sub(1)
        .and_then(|index| history.get(index))
        .expect("history entry should exist");
    assert_eq!(actual, &entry);
}

#[then("the history is empty")]
fn the_history_is_empty(world: &World) {
    let calculator = world.calculator();
    assert!(calculator.is_empty());
    assert!(calculator.history().is_empty());
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(path = "tests/features/calculator.feature", name = "Addition is recorded")]
fn addition_is_recorded(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/calculator.feature",
    name = "Operations are recorded in call order"
)]
fn operations_are_recorded_in_call_order(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/calculator.feature",
    name = "Clearing empties the history"
)]
fn clearing_empties_the_history(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/calculator.feature",
    name = "Clearing an empty history is harmless"
)]
fn clearing_an_empty_history_is_harmless(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/calculator.feature",
    name = "Returned history is a copy"
)]
fn returned_history_is_a_copy(world: World) {
    let _ = world;
}

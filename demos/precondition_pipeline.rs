//! Gating list operations behind preconditions, with call-path provenance.
//!
//! Run with: cargo run --example precondition_pipeline

use guard_rail::condition::HardCondition;
use guard_rail::{FailureValue, PreconditionPipeline, ResultState};

/// A list whose failed operations produce a failed list instead of raising.
#[derive(Debug, Clone, PartialEq)]
enum GuardedList {
    Items(Vec<String>),
    Failed(FailureValue),
}

impl GuardedList {
    fn new() -> Self {
        Self::Items(Vec::new())
    }

    fn items(&self) -> ResultState<&Vec<String>> {
        match self {
            Self::Items(items) => ResultState::success(items),
            Self::Failed(failure) => ResultState::Failure(failure.clone()),
        }
    }

    fn insert(&self, index: usize, item: &str) -> Self {
        let state = self.items().map(Vec::clone);
        let len = state.success_ref().map_or(0, Vec::len);
        PreconditionPipeline::from_state(state)
            .precondition(HardCondition::of(index).is(|i| *i <= len, "index out of range"))
            .precondition(HardCondition::of(item).is_not(|s| s.trim().is_empty(), "item is blank"))
            .map(|mut items| {
                items.insert(index, item.to_string());
                items
            })
            .tracked_as("insert")
            .map(Self::Items)
            .get_or_convert_to_failure_state(Self::Failed)
    }

    fn add(&self, item: &str) -> Self {
        let len = self.items().map(Vec::len).get_or_else(0);
        match self.insert(len, item) {
            Self::Failed(failure) => Self::Failed(failure.tracked("add")),
            list => list,
        }
    }

    fn get(&self, index: usize) -> ResultState<String> {
        PreconditionPipeline::from_state(self.items())
            .precondition_with(|items| HardCondition::of(index).is(|i| *i < items.len(), "index out of range"))
            .map(|items| items[index].clone())
            .tracked_as("get")
    }
}

fn main() {
    let list = GuardedList::new().add("alpha").add("beta").insert(1, "between");
    println!("list: {list:?}");
    println!("get(1): {:?}", list.get(1));
    println!("get(9): {}", list.get(9).failure_value());

    let broken = list.insert(42, "far away");
    println!("insert(42): {broken:?}");
    println!("add on failed list: {:?}", broken.add("anything"));
}

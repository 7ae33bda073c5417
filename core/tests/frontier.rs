use roadpath_core::PriorityFrontier;

#[test]
fn test_pop_returns_lowest_priority_first() {
    let mut frontier = PriorityFrontier::new();
    frontier.push("far", 30.0);
    frontier.push("near", 5.0);
    frontier.push("middle", 12.5);

    assert_eq!(frontier.pop(), "near");
    assert_eq!(frontier.pop(), "middle");
    assert_eq!(frontier.pop(), "far");
    assert!(frontier.is_empty());
}

#[test]
fn test_equal_priorities_pop_in_insertion_order() {
    let mut frontier = PriorityFrontier::new();
    frontier.push("first", 1.0);
    frontier.push("second", 1.0);
    frontier.push("earlier", 0.5);
    frontier.push("third", 1.0);

    let order: Vec<&str> = std::iter::from_fn(|| (!frontier.is_empty()).then(|| frontier.pop()))
        .collect();
    assert_eq!(order, vec!["earlier", "first", "second", "third"]);
}

#[test]
fn test_same_item_can_be_pushed_twice() {
    let mut frontier = PriorityFrontier::new();
    frontier.push("Albany", 10.0);
    frontier.push("Albany", 4.0);

    assert_eq!(frontier.len(), 2);
    assert_eq!(frontier.pop(), "Albany");
    assert_eq!(frontier.pop(), "Albany");
    assert!(frontier.is_empty());
}

#[test]
fn test_len_tracks_pushes_and_pops() {
    let mut frontier: PriorityFrontier<u32> = PriorityFrontier::default();
    assert_eq!(frontier.len(), 0);

    for value in 0..5 {
        frontier.push(value, f64::from(5 - value));
    }
    assert_eq!(frontier.len(), 5);

    assert_eq!(frontier.pop(), 4);
    assert_eq!(frontier.len(), 4);
}

#[test]
fn test_infinite_priority_sorts_last() {
    let mut frontier = PriorityFrontier::new();
    frontier.push('z', f64::INFINITY);
    frontier.push('a', 1e12);

    assert_eq!(frontier.pop(), 'a');
    assert_eq!(frontier.pop(), 'z');
}

#[test]
#[should_panic(expected = "empty frontier")]
fn test_pop_on_empty_frontier_panics() {
    let mut frontier: PriorityFrontier<&str> = PriorityFrontier::new();
    frontier.pop();
}

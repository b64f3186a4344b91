use bed_layout::logic::codes::{find_duplicate_codes, find_invalid_codes, CodeAllocator};
use bed_layout::models::code::BedCode;
use bed_layout::{
    generate_next_letter_code, is_valid_letter_code, sort_letter_codes, LayoutConfig, LayoutError,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// ---------------------------------------------------------------------------
// Scenario 1: A new garden fills up bed by bed
// ---------------------------------------------------------------------------
#[test]
fn scenario_garden_grows_bed_by_bed() {
    init_logging();
    let mut garden: Vec<String> = Vec::new();
    for _ in 0..80 {
        let code = generate_next_letter_code(&garden).expect("capacity is far from reached");
        assert!(is_valid_letter_code(&code), "Allocated '{code}' must be valid");
        assert!(!garden.contains(&code), "Allocated '{code}' must be new");
        garden.push(code);
    }

    // Display order groups compounds under their letter.
    let sorted = sort_letter_codes(&garden);
    assert_eq!(&sorted[..4], &["A", "A1", "A2", "A3"]);
    assert_eq!(sort_letter_codes(&sorted), sorted, "Sorting twice must not change anything");
}

// ---------------------------------------------------------------------------
// Scenario 2: A deleted bed frees its code for the next allocation
// ---------------------------------------------------------------------------
#[test]
fn scenario_deleted_bed_code_is_reused() {
    init_logging();
    let mut garden = vec!["A", "B", "C", "D"];
    garden.retain(|c| *c != "B");
    assert_eq!(generate_next_letter_code(&garden).unwrap(), "B");
}

// ---------------------------------------------------------------------------
// Scenario 3: Allocate-then-persist retry at the caller
// ---------------------------------------------------------------------------
#[test]
fn scenario_concurrent_creations_retry_with_fresh_snapshot() {
    init_logging();
    let snapshot = vec!["A".to_string(), "B".to_string()];

    // Two requests read the same snapshot and compute the same candidate.
    let first = generate_next_letter_code(&snapshot).unwrap();
    let second = generate_next_letter_code(&snapshot).unwrap();
    assert_eq!(first, second, "Same snapshot must give the same candidate");

    // The store accepts the first write; the loser re-snapshots.
    let mut stored = snapshot.clone();
    stored.push(first.clone());
    let retried = generate_next_letter_code(&stored).unwrap();
    assert_ne!(retried, first);
    assert_eq!(retried, "D");
}

// ---------------------------------------------------------------------------
// Scenario 4: Corrupted stored codes are reported, not fatal
// ---------------------------------------------------------------------------
#[test]
fn scenario_corrupted_codes_are_reported() {
    init_logging();
    let stored = vec!["A", "b", "A1", "A01", "C", "C"];
    assert_eq!(find_invalid_codes(&stored), vec!["b", "A01"]);
    assert_eq!(find_duplicate_codes(&stored), vec!["C"]);

    let next = generate_next_letter_code(&stored).unwrap();
    assert!(is_valid_letter_code(&next));
    assert!(!stored.contains(&next.as_str()));

    let sorted = sort_letter_codes(&stored);
    assert_eq!(sorted, vec!["A", "A1", "C", "C", "A01", "b"]);
}

// ---------------------------------------------------------------------------
// Scenario 5: Configured suffix cap surfaces as a capacity error
// ---------------------------------------------------------------------------
#[test]
fn scenario_capacity_from_config() {
    init_logging();
    let config = LayoutConfig::from_json(r#"{ "maxCompoundSuffix": 2 }"#).unwrap();
    let allocator = CodeAllocator::from_config(&config);

    let mut garden: Vec<String> = Vec::new();
    while let Ok(code) = allocator.next_code(&garden) {
        garden.push(code);
    }
    assert_eq!(garden.len(), 26 * 3, "26 bare codes plus two compounds per letter");

    let err = allocator.next_code(&garden).unwrap_err();
    assert!(matches!(err, LayoutError::CapacityExceeded { max_suffix: 2 }));
    assert!(err.to_string().contains("suffix 2"));
}

// ---------------------------------------------------------------------------
// Scenario 6: Typed codes agree with the string functions
// ---------------------------------------------------------------------------
#[test]
fn scenario_typed_codes_match_string_order() {
    let raw = ["B2", "A", "B10", "B", "A3"];
    let mut typed: Vec<BedCode> = raw.iter().map(|c| c.parse().unwrap()).collect();
    typed.sort();
    let typed: Vec<String> = typed.iter().map(ToString::to_string).collect();
    assert_eq!(typed, sort_letter_codes(&raw));
}

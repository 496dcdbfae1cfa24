use crate::scanning::{outline::OutlineEntry, runs::Run};

/// Validates classifier output for a document of `len` bytes.
///
/// Asserts that:
/// - The first run starts at 0 and each run starts where the previous ended
/// - No run is empty
/// - The runs end exactly at the end of the document
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check_runs(len: usize, runs: &[Run]) {
    let mut expected_start = 0;
    for r in runs {
        assert_eq!(
            r.start, expected_start,
            "gap or overlap before run {:?} (expected start {})",
            r, expected_start
        );
        assert!(r.len > 0, "empty run {:?}", r);
        expected_start = r.end();
    }
    assert_eq!(
        expected_start, len,
        "runs cover {} of {} bytes",
        expected_start, len
    );
}

/// Validates outline output for a document of `len` bytes.
///
/// Asserts that:
/// - Every entry span is within bounds
/// - Entries are ordered by start
/// - Each entry at depth `d > 0` lies inside the nearest preceding entry at
///   depth `d - 1`, and depth never jumps by more than one
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check_outline(len: usize, entries: &[OutlineEntry]) {
    // Stack of enclosing entries, rebuilt from depths alone.
    let mut parents: Vec<&OutlineEntry> = vec![];
    let mut last_start = 0;

    for e in entries {
        assert!(
            e.start < e.end && e.end <= len,
            "entry span out of bounds: {:?} (document len: {})",
            e.span(),
            len
        );
        assert!(
            e.start >= last_start,
            "entry {:?} out of order (previous start {})",
            e.name,
            last_start
        );
        last_start = e.start;

        assert!(
            e.depth <= parents.len(),
            "entry {:?} at depth {} skips a level (only {} open)",
            e.name,
            e.depth,
            parents.len()
        );
        parents.truncate(e.depth);
        if let Some(parent) = parents.last() {
            assert!(
                parent.span().contains(e.span()),
                "entry {:?} {:?} escapes its parent {:?} {:?}",
                e.name,
                e.span(),
                parent.name,
                parent.span()
            );
        }
        parents.push(e);
    }
}

use chrono::NaiveDate;
use utimeline::core::layout::{compute_grid, date_period, sort_records};
use utimeline::models::grid::{CellState, GridModel, Weekday};
use utimeline::models::record::UsageRecord;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

fn rec(
    no: usize,
    equipment: &str,
    user: &str,
    begin: NaiveDate,
    end: Option<NaiveDate>,
) -> UsageRecord {
    UsageRecord::new(no, equipment, user, begin, end)
}

#[test]
fn test_empty_input_yields_empty_grid() {
    let grid = compute_grid(&[]);
    assert_eq!(grid, GridModel::default());
    assert!(grid.days.is_empty());
    assert!(grid.rows.is_empty());
}

#[test]
fn test_mixed_open_and_closed_loans_layout() {
    // alice closes her loan, bob never returns the equipment
    let records = vec![
        rec(1, "E1", "alice", d(2024, 1, 2), Some(d(2024, 1, 3))),
        rec(2, "E1", "bob", d(2024, 1, 1), None),
    ];

    let grid = compute_grid(&records);

    // range 2024-01-01 ..= 2024-01-03
    let labels: Vec<&str> = grid.days.iter().map(|c| c.day_of_month.as_str()).collect();
    assert_eq!(labels, vec!["01", "02", "03"]);

    // bob sorts first (earlier begin date, same equipment)
    assert_eq!(grid.rows.len(), 2);
    assert_eq!(grid.rows[0].label, "bob");
    assert_eq!(grid.rows[1].label, "alice");

    // one separator before the first row only
    assert!(grid.rows[0].group_start);
    assert!(!grid.rows[1].group_start);

    assert_eq!(
        grid.rows[0].cells,
        vec![
            CellState::OpenEnded,
            CellState::OpenEnded,
            CellState::OpenEnded
        ]
    );
    assert_eq!(
        grid.rows[1].cells,
        vec![CellState::Empty, CellState::Occupied, CellState::Occupied]
    );
}

#[test]
fn test_determinism() {
    let records = vec![
        rec(1, "B", "u1", d(2025, 3, 10), Some(d(2025, 3, 20))),
        rec(2, "A", "u2", d(2025, 3, 1), None),
        rec(3, "A", "u3", d(2025, 3, 5), Some(d(2025, 3, 7))),
    ];

    let first = compute_grid(&records);
    let second = compute_grid(&records);
    assert_eq!(first, second);
}

#[test]
fn test_day_count_invariant() {
    let records = vec![
        rec(1, "A", "u1", d(2024, 2, 27), Some(d(2024, 3, 2))),
        rec(2, "B", "u2", d(2024, 2, 28), Some(d(2024, 2, 29))),
    ];

    let grid = compute_grid(&records);

    // leap year: 02-27 ..= 03-02 is 5 days
    assert_eq!(grid.days.len(), 5);
    for row in &grid.rows {
        assert_eq!(row.cells.len(), grid.days.len());
    }
}

#[test]
fn test_grouping_invariant() {
    let records = vec![
        rec(1, "printer", "u1", d(2024, 5, 1), Some(d(2024, 5, 2))),
        rec(2, "printer", "u2", d(2024, 5, 3), Some(d(2024, 5, 4))),
        rec(3, "scanner", "u3", d(2024, 5, 1), Some(d(2024, 5, 2))),
        rec(4, "scanner", "u4", d(2024, 5, 2), Some(d(2024, 5, 3))),
    ];

    let grid = compute_grid(&records);

    let starts: Vec<bool> = grid.rows.iter().map(|r| r.group_start).collect();
    assert_eq!(starts, vec![true, false, true, false]);

    // adjacent rows with equal group key never carry a separator
    for pair in grid.rows.windows(2) {
        if pair[0].group_key == pair[1].group_key {
            assert!(!pair[1].group_start);
        } else {
            assert!(pair[1].group_start);
        }
    }
}

#[test]
fn test_open_end_never_widens_range() {
    let records = vec![rec(1, "E1", "solo", d(2024, 6, 5), None)];

    let (min_date, max_date) = date_period(&records).expect("non-empty");
    assert_eq!(min_date, d(2024, 6, 5));
    assert_eq!(max_date, d(2024, 6, 5));

    let grid = compute_grid(&records);
    assert_eq!(grid.days.len(), 1);
    assert_eq!(grid.rows[0].cells, vec![CellState::OpenEnded]);
}

#[test]
fn test_open_end_is_unbounded_to_the_right() {
    // bob's loan is open; carol's closed loan stretches the range
    let records = vec![
        rec(1, "E1", "bob", d(2024, 1, 1), None),
        rec(2, "E2", "carol", d(2024, 1, 3), Some(d(2024, 1, 4))),
    ];

    let grid = compute_grid(&records);
    assert_eq!(grid.days.len(), 4);

    let bob = &grid.rows[0];
    assert_eq!(bob.label, "bob");
    assert!(bob.cells.iter().all(|c| *c == CellState::OpenEnded));
}

#[test]
fn test_closed_interval_bounds_are_inclusive() {
    let records = vec![rec(1, "E1", "u", d(2024, 4, 10), Some(d(2024, 4, 12)))];

    let grid = compute_grid(&records);
    assert_eq!(
        grid.rows[0].cells,
        vec![
            CellState::Occupied,
            CellState::Occupied,
            CellState::Occupied
        ]
    );
}

#[test]
fn test_past_end_date_is_not_open_ended() {
    // ended loan followed by someone else's later activity
    let records = vec![
        rec(1, "E1", "done", d(2024, 7, 1), Some(d(2024, 7, 2))),
        rec(2, "E2", "late", d(2024, 7, 4), Some(d(2024, 7, 5))),
    ];

    let grid = compute_grid(&records);
    assert_eq!(
        grid.rows[0].cells,
        vec![
            CellState::Occupied,
            CellState::Occupied,
            CellState::Empty,
            CellState::Empty,
            CellState::Empty
        ]
    );
}

#[test]
fn test_sort_is_stable_for_equal_keys() {
    let begin = d(2024, 9, 1);
    let end = Some(d(2024, 9, 2));
    let mut records = vec![
        rec(1, "E1", "first", begin, end),
        rec(2, "E1", "second", begin, end),
        rec(3, "E1", "third", begin, end),
    ];

    sort_records(&mut records);
    let users: Vec<&str> = records.iter().map(|r| r.user.as_str()).collect();
    assert_eq!(users, vec!["first", "second", "third"]);

    let grid = compute_grid(&records);
    let labels: Vec<&str> = grid.rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, vec!["first", "second", "third"]);
}

#[test]
fn test_open_end_sorts_before_closed_end() {
    let begin = d(2024, 9, 1);
    let mut records = vec![
        rec(1, "E1", "closed", begin, Some(d(2024, 9, 3))),
        rec(2, "E1", "open", begin, None),
    ];

    sort_records(&mut records);
    assert_eq!(records[0].user, "open");
    assert_eq!(records[1].user, "closed");
}

#[test]
fn test_weekday_labels_start_sunday() {
    // 2024-01-01 is a Monday, 2024-01-06 Saturday, 2024-01-07 Sunday
    let records = vec![rec(1, "E1", "u", d(2024, 1, 1), Some(d(2024, 1, 7)))];

    let grid = compute_grid(&records);
    let weekdays: Vec<Weekday> = grid.days.iter().map(|c| c.weekday).collect();
    assert_eq!(
        weekdays,
        vec![
            Weekday::Mo,
            Weekday::Tu,
            Weekday::We,
            Weekday::Th,
            Weekday::Fr,
            Weekday::Sa,
            Weekday::Su
        ]
    );
    assert_eq!(grid.days[5].weekday.abbrev(), "Sa");
}

#[test]
fn test_inverted_span_renders_without_failing() {
    // begin after end: accepted, lays out with an empty span
    let records = vec![rec(1, "E1", "u", d(2024, 3, 10), Some(d(2024, 3, 1)))];

    let grid = compute_grid(&records);
    assert!(grid.days.is_empty());
    assert_eq!(grid.rows.len(), 1);
    assert!(grid.rows[0].cells.is_empty());
}

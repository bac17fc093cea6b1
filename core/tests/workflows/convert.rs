// SPDX-FileCopyrightText: 2025 cahfofpai
//
// SPDX-License-Identifier: Apache-2.0

//! Birthday list to calendar file workflow tests.

use birthdaymd_core::{Birthday, parse_file};

use crate::common::{setup_input, test_generator};

#[test]
fn convert_example_list() {
    // Arrange
    let (_dir, input, output) = setup_input(
        "# Family\n15.03.1990 Jane Doe\n01.01. John Smith\nnot a real line\n",
    );

    // Act
    let parsed = parse_file(&input).unwrap();
    test_generator()
        .generate_file(&output, &parsed.birthdays)
        .unwrap();

    // Assert
    assert_eq!(parsed.birthdays.len(), 2);
    assert_eq!(parsed.birthdays[0], Birthday::new("Jane Doe", 15, 3, Some(1990)));
    assert_eq!(parsed.birthdays[1], Birthday::new("John Smith", 1, 1, None));
    assert_eq!(parsed.diagnostics.len(), 1);
    assert_eq!(parsed.diagnostics[0].line, 4);
    assert!(parsed.diagnostics[0].to_string().contains("not a real line"));

    let ics = std::fs::read_to_string(&output).unwrap();
    assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
    assert!(ics.ends_with("END:VCALENDAR\r\n"));
    assert_eq!(ics.matches("BEGIN:VEVENT\r\n").count(), 2);
    assert_eq!(ics.matches("END:VEVENT\r\n").count(), 2);

    let summaries: Vec<_> = ics
        .lines()
        .filter_map(|a| a.strip_prefix("SUMMARY:"))
        .collect();
    assert_eq!(summaries, ["Jane Doe's Birthday", "John Smith's Birthday"]);

    let starts: Vec<_> = ics
        .lines()
        .filter_map(|a| a.strip_prefix("DTSTART;VALUE=DATE:"))
        .collect();
    assert_eq!(starts, ["19900315", "20250101"]);
    assert!(ics.contains("DTSTAMP:20250601T120000Z\r\n"));
}

#[test]
fn convert_list_without_birthdays() {
    // Arrange
    let (_dir, input, output) = setup_input("# Nothing here yet\n\n<!-- todo -->\n");

    // Act
    let parsed = parse_file(&input).unwrap();
    test_generator()
        .generate_file(&output, &parsed.birthdays)
        .unwrap();

    // Assert
    assert!(parsed.diagnostics.is_empty());
    let ics = std::fs::read_to_string(&output).unwrap();
    assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
    assert!(ics.ends_with("METHOD:PUBLISH\r\nEND:VCALENDAR\r\n"));
    assert!(!ics.contains("VEVENT"));
}

#[test]
fn regenerating_yields_identical_uids() {
    // Arrange
    let (_dir, input, output) = setup_input("15.03.1990 Jane Doe\n2.2. Ann Marie Lee\n");
    let uids = |ics: &str| -> Vec<String> {
        ics.lines()
            .filter_map(|a| a.strip_prefix("UID:"))
            .map(ToString::to_string)
            .collect()
    };

    // Act
    let parsed = parse_file(&input).unwrap();
    test_generator()
        .generate_file(&output, &parsed.birthdays)
        .unwrap();
    let first = std::fs::read_to_string(&output).unwrap();
    test_generator()
        .generate_file(&output, &parsed.birthdays)
        .unwrap();
    let second = std::fs::read_to_string(&output).unwrap();

    // Assert
    assert_eq!(uids(&first), uids(&second));
    assert_eq!(
        uids(&first),
        [
            "birthday-1503-Jane_Doe@birthday-md",
            "birthday-0202-Ann_Marie_Lee@birthday-md",
        ]
    );
}

#[test]
fn output_file_is_overwritten() {
    // Arrange
    let (_dir, input, output) = setup_input("01.01. A\n");
    std::fs::write(&output, "stale content that is much longer than nothing".repeat(100)).unwrap();

    // Act
    let parsed = parse_file(&input).unwrap();
    test_generator()
        .generate_file(&output, &parsed.birthdays)
        .unwrap();

    // Assert
    let ics = std::fs::read_to_string(&output).unwrap();
    assert!(!ics.contains("stale"));
    assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
}

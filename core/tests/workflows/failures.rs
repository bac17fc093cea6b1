// SPDX-FileCopyrightText: 2025 cahfofpai
//
// SPDX-License-Identifier: Apache-2.0

//! Fatal error workflow tests.

use birthdaymd_core::{Error, parse_file};

use crate::common::{setup_input, test_generator};

#[test]
fn missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = parse_file(&dir.path().join("missing.md")).unwrap_err();
    assert!(matches!(err, Error::Open { .. }));
    assert!(err.to_string().contains("missing.md"));
}

#[test]
fn input_with_invalid_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.md");
    std::fs::write(&input, b"01.01. A\n\xc3\x28\n").unwrap();

    let err = parse_file(&input).unwrap_err();
    assert!(matches!(err, Error::Read(_)));
}

#[test]
fn output_directory_does_not_exist() {
    let (dir, input, _) = setup_input("01.01. A\n");
    let output = dir.path().join("no").join("such").join("dir").join("out.ics");

    let parsed = parse_file(&input).unwrap();
    let err = test_generator()
        .generate_file(&output, &parsed.birthdays)
        .unwrap_err();

    assert!(matches!(err, Error::Create { .. }));
    assert!(!output.exists());
}

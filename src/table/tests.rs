// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Unit tests for [super::WordTable]

use super::*;

#[test]
fn empty() {
    let table = WordTable::new(&[]);
    assert_eq!(table.to_string(), "");
    assert_eq!(table.lines(), 0);
}

#[test]
fn single_word() {
    assert_eq!(WordTable::new(&[4660]).to_string(), "dw 4660");
}

#[test]
fn one_line() {
    let table = WordTable::new(&[0, 1, 65535]);
    assert_eq!(table.to_string(), "dw 0, 1, 65535");
}

#[test]
fn grouping() {
    // 300 words: two full lines and one of 44
    let words: Vec<Word> = (0..300).collect();
    let text = WordTable::new(&words).to_string();
    let lines: Vec<&str> = text.split('\n').collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(WordTable::new(&words).lines(), 3);
    for line in &lines {
        assert!(line.starts_with("dw "), "{line}");
    }
    assert_eq!(lines[0].split(", ").count(), 128);
    assert_eq!(lines[1].split(", ").count(), 128);
    assert_eq!(lines[2].split(", ").count(), 44);
    assert!(lines[1].starts_with("dw 128, 129"));
    assert!(lines[2].ends_with("298, 299"));
}

#[test]
fn no_leading_or_trailing_newline() {
    let words = [7; 256];
    let text = WordTable::new(&words).to_string();
    assert!(!text.starts_with('\n'));
    assert!(!text.ends_with('\n'));
    assert_eq!(text.matches('\n').count(), 1);
}

#[test]
fn directive_and_line_length() -> Result<()> {
    let table = WordTable::new(&[1, 2, 3, 4, 5])
        .directive(".word")
        .per_line(2)?;
    assert_eq!(table.to_string(), ".word 1, 2\n.word 3, 4\n.word 5");
    Ok(())
}

#[test]
fn zero_per_line() {
    WordTable::new(&[1])
        .per_line(0)
        .expect_err("Zero words per line should be rejected");
}

#[test]
fn write_to_matches_display() -> Result<()> {
    let words: Vec<Word> = (0..1000).map(|w| w * 31).collect();
    let table = WordTable::new(&words);
    let mut first: Vec<u8> = vec![];
    let mut second: Vec<u8> = vec![];
    table.write_to(&mut first)?;
    table.write_to(&mut second)?;
    assert_eq!(first, second);
    assert_eq!(first, table.to_string().into_bytes());
    Ok(())
}

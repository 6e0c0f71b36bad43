// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Tests for bmp2dw's argument handling

use super::*;
use gumdrop::ParsingStyle;

fn parse(args: &[&str]) -> Arguments {
    Arguments::parse_args(args, ParsingStyle::default()).expect("Arguments should parse")
}

fn options(args: &[&str]) -> bmp2dw::Options {
    (&parse(args)).into()
}

#[test]
fn defaults() {
    let args = parse(&["in.bmp"]);
    assert_eq!(args.file, PathBuf::from("in.bmp"));
    assert_eq!(args.output(), PathBuf::from("jura.dat"));
    assert_eq!(options(&["in.bmp"]), bmp2dw::Options::default());
}

#[test]
fn output() {
    assert_eq!(
        parse(&["-o", "table.inc", "in.bmp"]).output(),
        PathBuf::from("table.inc")
    );
    assert_eq!(
        parse(&["in.bmp", "--output", "t.dat"]).output(),
        PathBuf::from("t.dat")
    );
}

#[test]
fn flip() {
    assert_eq!(options(&["--flip", "in.bmp"]).order, Order::Display);
    assert_eq!(options(&["-f", "in.bmp"]).order, Order::Display);
    assert_eq!(options(&["in.bmp"]).order, Order::File);
}

#[test]
fn size_and_header() {
    let layout = options(&["--size", "64x32", "-H", "54", "in.bmp"]).layout;
    assert_eq!(layout, Layout::new(64, 32, 54));
    let layout = options(&["-s", "16X16", "in.bmp"]).layout;
    assert_eq!(layout, Layout::new(16, 16, 72));
}

#[test]
fn invalid_size() {
    Arguments::parse_args(&["--size", "0x16", "in.bmp"], ParsingStyle::default())
        .expect_err("A zero-width image should not parse");
    Arguments::parse_args(&["--size", "wide", "in.bmp"], ParsingStyle::default())
        .expect_err("\"wide\" is not a size");
}

#[test]
fn directive() {
    assert_eq!(options(&["-d", ".word", "in.bmp"]).directive, ".word");
    assert_eq!(options(&["in.bmp"]).directive, "dw");
}

#[test]
fn flags() {
    let opts = options(&["--strict", "--dump", "-r", "out.bmp", "in.bmp"]);
    assert!(opts.strict);
    assert!(opts.dump);
    assert_eq!(opts.rebuild, Some(PathBuf::from("out.bmp")));
}

#[test]
fn verbose_counts() {
    assert_eq!(parse(&["in.bmp"]).verbose, 0);
    assert_eq!(parse(&["-vvv", "in.bmp"]).verbose, 3);
}

#[test]
fn missing_file() {
    Arguments::parse_args::<&str>(&[], ParsingStyle::default())
        .expect_err("The input file is required");
}

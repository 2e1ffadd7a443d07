#![cfg(test)]

mod helpers;

use std::collections::BTreeMap;

use helpers::instance_path;
use helpers::run_colouring_solver;
use helpers::Run;
use regex::Regex;

/// Parses the `Var <id> -> Color <value>` lines of a run, checking that every line of stdout
/// before the statistics is one of them.
fn parse_colouring(run: &Run) -> Vec<(i32, u32)> {
    let line_pattern = Regex::new(r"^Var (-?\d+) -> Color (\d+)$").expect("valid regex");

    run.stdout
        .lines()
        .take_while(|line| !line.starts_with("%%%"))
        .map(|line| {
            let captures = line_pattern
                .captures(line)
                .unwrap_or_else(|| panic!("unexpected output line '{line}'"));
            (
                captures[1].parse().expect("matched an integer"),
                captures[2].parse().expect("matched an integer"),
            )
        })
        .collect()
}

/// Reads the edges and palette from an instance file, ignoring vertex declarations.
fn read_edges_and_palette(instance_name: &str) -> (Vec<(i32, i32)>, u32) {
    let source = std::fs::read_to_string(instance_path(instance_name)).expect("instance exists");
    let mut edges = Vec::new();
    let mut palette = 0;

    for line in source.lines().map(str::trim) {
        if line.starts_with('#') {
            continue;
        }
        if let Some(value) = line.strip_prefix("colors=") {
            palette = value.trim().parse().expect("valid palette");
        } else if let Some((u, v)) = line.split_once(',') {
            edges.push((
                u.trim().parse().expect("valid label"),
                v.trim().parse().expect("valid label"),
            ));
        }
    }

    (edges, palette)
}

/// Checks that the output of a run is a proper colouring of the instance, listed in ascending
/// label order.
fn assert_valid_colouring(instance_name: &str, run: &Run) {
    assert!(run.status.success(), "stderr: {}", run.stderr);

    let colouring = parse_colouring(run);
    let labels = colouring.iter().map(|&(label, _)| label).collect::<Vec<_>>();
    let mut sorted_labels = labels.clone();
    sorted_labels.sort_unstable();
    sorted_labels.dedup();
    assert_eq!(labels, sorted_labels, "labels must be unique and ascending");

    let colours = colouring.into_iter().collect::<BTreeMap<_, _>>();
    let (edges, palette) = read_edges_and_palette(instance_name);

    for (u, v) in edges {
        let colour_u = colours.get(&u).expect("every vertex is coloured");
        let colour_v = colours.get(&v).expect("every vertex is coloured");
        assert_ne!(colour_u, colour_v, "edge ({u}, {v}) joins equal colours");
    }
    assert!(colours.values().all(|colour| (1..=palette).contains(colour)));
}

fn assert_failure(run: &Run) {
    assert!(run.status.success(), "stderr: {}", run.stderr);
    assert_eq!(run.stdout, "failure\n");
}

macro_rules! colouring_test {
    ($name:ident) => {
        #[test]
        fn $name() {
            for args in [
                &[][..],
                &["--propagate-assignments"],
                &["--variable-selection", "input-order"],
                &["--value-selection", "in-domain-order"],
            ] {
                let run = run_colouring_solver(stringify!($name), args);
                assert_valid_colouring(stringify!($name), &run);
            }
        }
    };
}

macro_rules! failure_test {
    ($name:ident) => {
        #[test]
        fn $name() {
            for args in [&[][..], &["--propagate-assignments"]] {
                let run = run_colouring_solver(stringify!($name), args);
                assert_failure(&run);
            }
        }
    };
}

colouring_test!(triangle_three_colours);
colouring_test!(path_two_colours);
colouring_test!(lone_vertex);
colouring_test!(petersen);
colouring_test!(labels_out_of_order);

failure_test!(triangle_two_colours);
failure_test!(edge_one_colour);
failure_test!(wheel_three_colours);

#[test]
fn triangle_is_coloured_in_heuristic_order() {
    let run = run_colouring_solver("triangle_three_colours", &[]);

    assert_eq!(
        run.stdout,
        "Var 1 -> Color 1\nVar 2 -> Color 2\nVar 3 -> Color 3\n"
    );
}

#[test]
fn path_alternates_colours() {
    let run = run_colouring_solver("path_two_colours", &[]);

    assert_eq!(
        run.stdout,
        "Var 1 -> Color 1\nVar 2 -> Color 2\nVar 3 -> Color 1\n"
    );
}

#[test]
fn lone_vertex_gets_the_only_colour() {
    let run = run_colouring_solver("lone_vertex", &[]);

    assert_eq!(run.stdout, "Var 1 -> Color 1\n");
}

#[test]
fn statistics_follow_the_colouring() {
    let run = run_colouring_solver("triangle_three_colours", &["--log-statistics"]);
    assert!(run.status.success(), "stderr: {}", run.stderr);

    let statistic_pattern = Regex::new(r"^%%%colouring-stat: (\w+)=(\S+)$").expect("valid regex");
    let mut lines = run.stdout.lines();

    assert_eq!(parse_colouring(&run).len(), 3);
    let statistics = lines
        .by_ref()
        .skip(3)
        .take_while(|line| *line != "%%%colouring-stat-end")
        .map(|line| {
            let captures = statistic_pattern
                .captures(line)
                .unwrap_or_else(|| panic!("unexpected statistic line '{line}'"));
            (captures[1].to_owned(), captures[2].to_owned())
        })
        .collect::<BTreeMap<_, _>>();

    assert_eq!(statistics.get("nodes").map(String::as_str), Some("3"));
    assert_eq!(statistics.get("backtracks").map(String::as_str), Some("0"));
    assert_eq!(statistics.get("ac3Calls").map(String::as_str), Some("3"));
    assert!(statistics.contains_key("solveTime"));
    assert_eq!(lines.next(), None);
}

#[test]
fn verbose_logging_goes_to_stderr() {
    let run = run_colouring_solver("path_two_colours", &["--verbose"]);

    assert!(run.status.success());
    assert_eq!(parse_colouring(&run).len(), 3);
    assert!(!run.stderr.is_empty());
}

macro_rules! invalid_instance_test {
    ($name:ident, $message:literal) => {
        #[test]
        fn $name() {
            let run = run_colouring_solver(stringify!($name), &[]);

            assert!(!run.status.success());
            assert!(run.stdout.is_empty(), "no partial output: {}", run.stdout);
            assert!(
                run.stderr.contains($message),
                "expected '{}' in stderr: {}",
                $message,
                run.stderr
            );
        }
    };
}

invalid_instance_test!(invalid_label, "line 3: 'x' is not a valid vertex label");
invalid_instance_test!(missing_palette, "does not declare a palette size");
invalid_instance_test!(self_loop, "line 2: vertex 3 cannot be adjacent to itself");

#[test]
fn missing_instance_file_fails() {
    let run = run_colouring_solver("does_not_exist", &[]);

    assert!(!run.status.success());
    assert!(run.stdout.is_empty());
    assert!(run.stderr.contains("failed to read instance: "));
    assert!(run.stderr.contains("No such file or directory"));
}

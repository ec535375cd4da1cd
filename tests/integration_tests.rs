use clap::Parser;
use indelscan::{
    cli::{Cli, Command},
    commands::{catalog, lengths, pairwise, population},
    indel::{analyze_pair, writers::write_polygons, GapClosing, Polygon},
};
use std::{fs, path::Path};

fn parse(args: &[&str]) -> Command {
    let mut argv = vec!["indelscan"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap().command
}

fn read_polygons(path: &Path) -> Vec<Polygon> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    assert_eq!(
        reader.headers().unwrap(),
        &csv::StringRecord::from(vec!["X1", "X2", "X3", "X4"])
    );
    reader
        .records()
        .map(|record| {
            let record = record.unwrap();
            let values: Vec<i64> = record.iter().map(|v| v.parse().unwrap()).collect();
            Polygon {
                x1: values[0],
                x2: values[1],
                y1: values[2],
                y2: values[3],
            }
        })
        .collect()
}

#[test]
fn polygon_csv_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("coords.csv");
    let result = analyze_pair(b"ACGGD--EFG", b"AC--DTTE-G", GapClosing::Both).unwrap();
    write_polygons(fs::File::create(&path).unwrap(), &result.polygons).unwrap();
    assert_eq!(read_polygons(&path), result.polygons);
}

#[test]
fn pairwise_command_writes_coords_and_indels() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pair.fasta");
    fs::write(&input, ">allele_a\nAC-DE\n>allele_b\nACXDE\n").unwrap();
    let prefix = dir.path().join("pair");

    match parse(&[
        "pairwise",
        "-i",
        input.to_str().unwrap(),
        "-o",
        prefix.to_str().unwrap(),
    ]) {
        Command::Pairwise(args) => pairwise::pairwise(args).unwrap(),
        _ => unreachable!(),
    }

    assert_eq!(
        fs::read_to_string(dir.path().join("pair.coords.csv")).unwrap(),
        "X1,X2,X3,X4\n0,2,0,2\n2,4,3,5\n"
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("pair.indels.csv")).unwrap(),
        "Allele,Position,Length\n2,2,1\n"
    );
}

#[test]
fn pairwise_command_missing_sequence_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pair.fasta");
    fs::write(&input, ">a\nAC-DE\n>b\nACXDE\n").unwrap();
    let prefix = dir.path().join("pair");

    let result = match parse(&[
        "pairwise",
        "-i",
        input.to_str().unwrap(),
        "-o",
        prefix.to_str().unwrap(),
        "--seq1",
        "a",
        "--seq2",
        "c",
    ]) {
        Command::Pairwise(args) => pairwise::pairwise(args),
        _ => unreachable!(),
    };
    assert_eq!(
        result,
        Err("Sequence not found in alignment: c".to_string())
    );
}

#[test]
fn pairwise_command_unwritable_output_leaves_coords_empty() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pair.fasta");
    fs::write(&input, ">a\nAC-DE\n>b\nACXDE\n").unwrap();
    let prefix = dir.path().join("pair");
    fs::create_dir(dir.path().join("pair.indels.csv")).unwrap();

    let result = match parse(&[
        "pairwise",
        "-i",
        input.to_str().unwrap(),
        "-o",
        prefix.to_str().unwrap(),
    ]) {
        Command::Pairwise(args) => pairwise::pairwise(args),
        _ => unreachable!(),
    };
    assert!(result.is_err());

    let coords = dir.path().join("pair.coords.csv");
    assert!(!coords.exists() || fs::metadata(&coords).unwrap().len() == 0);
}

#[test]
fn pairwise_command_mixed_runs() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pair.fasta");
    fs::write(&input, ">a\nAB--CDE-F\n>b\n--XYCDEGF\n").unwrap();
    let prefix = dir.path().join("pair");

    match parse(&[
        "pairwise",
        "-i",
        input.to_str().unwrap(),
        "-o",
        prefix.to_str().unwrap(),
    ]) {
        Command::Pairwise(args) => pairwise::pairwise(args).unwrap(),
        _ => unreachable!(),
    }
    let polygons = read_polygons(&dir.path().join("pair.coords.csv"));
    assert_eq!(polygons.len(), 4);
    for p in &polygons {
        assert!(0 <= p.x1 && p.x1 <= p.x2 && p.x2 <= 6, "{:?}", p);
        assert!(0 <= p.y1 && p.y1 <= p.y2 && p.y2 <= 7, "{:?}", p);
    }

    let both_prefix = dir.path().join("both");
    let result = match parse(&[
        "pairwise",
        "-i",
        input.to_str().unwrap(),
        "-o",
        both_prefix.to_str().unwrap(),
        "--gap-closing",
        "both",
    ]) {
        Command::Pairwise(args) => pairwise::pairwise(args),
        _ => unreachable!(),
    };
    assert!(result.unwrap_err().contains("holds residues of both sequences"));
    assert!(!dir.path().join("both.coords.csv").exists());
}

#[cfg(unix)]
#[test]
fn pairwise_command_runs_aligner() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pair.fasta");
    fs::write(&input, ">a\nACDE\n>b\nACDE\n").unwrap();
    let prefix = dir.path().join("pair");

    match parse(&[
        "pairwise",
        "-i",
        input.to_str().unwrap(),
        "-o",
        prefix.to_str().unwrap(),
        "--align",
        "--aligner-cmd",
        "cp {input} {output}",
    ]) {
        Command::Pairwise(args) => pairwise::pairwise(args).unwrap(),
        _ => unreachable!(),
    }

    assert!(dir.path().join("pair.aligned.fasta").exists());
    assert_eq!(
        read_polygons(&dir.path().join("pair.coords.csv")),
        vec![Polygon {
            x1: 0,
            x2: 4,
            y1: 0,
            y2: 4
        }]
    );
}

#[test]
fn population_command_writes_consecutive_pairs() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("population.fasta");
    fs::write(
        &input,
        ">1_1\nAC--DE\n>1_2\nACX-DE\n>2_1\nAC-YDE\n",
    )
    .unwrap();
    let order = dir.path().join("order.txt");
    fs::write(&order, "2_1\n1_1\n1_2\n").unwrap();
    let out_dir = dir.path().join("coords");

    match parse(&[
        "population",
        "-i",
        input.to_str().unwrap(),
        "-o",
        out_dir.to_str().unwrap(),
        "--order",
        order.to_str().unwrap(),
    ]) {
        Command::Population(args) => population::population(args).unwrap(),
        _ => unreachable!(),
    }

    let first = read_polygons(&out_dir.join("2_1vs1_1coords.csv"));
    assert_eq!(
        first,
        vec![
            Polygon {
                x1: 0,
                x2: 2,
                y1: 0,
                y2: 2
            },
            Polygon {
                x1: 3,
                x2: 5,
                y1: 2,
                y2: 4
            },
        ]
    );
    let second = read_polygons(&out_dir.join("1_1vs1_2coords.csv"));
    assert_eq!(
        second,
        vec![
            Polygon {
                x1: 0,
                x2: 2,
                y1: 0,
                y2: 2
            },
            Polygon {
                x1: 2,
                x2: 4,
                y1: 3,
                y2: 5
            },
        ]
    );
    assert!(!out_dir.join("2_1vs1_2coords.csv").exists());
}

#[test]
fn catalog_and_lengths_commands() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cohort.fasta");
    fs::write(
        &input,
        ">1_1\nACD---EF\n>2_1\nACDXYZEF\n>10_2\nACD---EF\n",
    )
    .unwrap();
    let prefix = dir.path().join("cohort");

    match parse(&[
        "catalog",
        "-i",
        input.to_str().unwrap(),
        "-o",
        prefix.to_str().unwrap(),
    ]) {
        Command::Catalog(args) => catalog::catalog(args).unwrap(),
        _ => unreachable!(),
    }

    let catalog_path = dir.path().join("cohort.indels.csv");
    assert_eq!(
        fs::read_to_string(&catalog_path).unwrap(),
        "Population,Individual,Allele,Position,ID,Full Length,Amino Acid Length\n\
         1,2,1,3,0,3,3\n\
         \n\
         \n\
         ID,Count,Insertion\n\
         0,1,XYZ\n"
    );

    match parse(&[
        "lengths",
        "-i",
        catalog_path.to_str().unwrap(),
        "-o",
        prefix.to_str().unwrap(),
        "--max-len",
        "4",
    ]) {
        Command::Lengths(args) => lengths::lengths(args).unwrap(),
        _ => unreachable!(),
    }
    assert_eq!(
        fs::read_to_string(dir.path().join("cohort.lengths.csv")).unwrap(),
        "Length,Count\n1,0\n2,0\n3,1\n4,0\n"
    );
}

#[test]
fn catalog_command_rejects_unknown_individual() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("cohort.fasta");
    fs::write(&input, ">1_1\nAC-D\n>30_1\nACXD\n").unwrap();
    let prefix = dir.path().join("cohort");

    let result = match parse(&[
        "catalog",
        "-i",
        input.to_str().unwrap(),
        "-o",
        prefix.to_str().unwrap(),
        "-p",
        "1-20:1",
    ]) {
        Command::Catalog(args) => catalog::catalog(args),
        _ => unreachable!(),
    };
    assert!(result.unwrap_err().contains("Individual 30"));
}

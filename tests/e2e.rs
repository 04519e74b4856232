use std::fs;
use std::path::{Path, PathBuf};

use truthtab::TruthTable;

fn table_for_file<P: AsRef<Path>>(file: P) -> TruthTable {
    let contents = fs::read_to_string(&file).expect("Could not read input file");

    TruthTable::generate(contents.trim()).expect("Could not generate table")
}

fn data_files(pattern: &str) -> Vec<PathBuf> {
    let files: Vec<PathBuf> = glob::glob(pattern)
        .expect("invalid glob pattern")
        .map(|file| file.expect("unreadable path"))
        .collect();

    assert!(!files.is_empty(), "no data files match {pattern}");

    files
}

#[test]
fn test_files_true() {
    for file in data_files("tests/data/*_is_true.txt") {
        println!("testing {}", file.display());

        let table = table_for_file(&file);

        assert!(
            table.rows.iter().all(|row| row.result),
            "{} has a false row",
            file.display()
        );
    }
}

#[test]
fn test_files_false() {
    for file in data_files("tests/data/*_is_false.txt") {
        println!("testing {}", file.display());

        let table = table_for_file(&file);

        assert!(
            table.rows.iter().all(|row| !row.result),
            "{} has a true row",
            file.display()
        );
    }
}

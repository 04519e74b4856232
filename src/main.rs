use std::fs::File;
use std::io;
use std::io::{BufWriter, Read, Write};
use std::iter;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use truthtab::TruthTable;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Generates exhaustive truth tables for boolean expressions", long_about = None)]
struct Args {
    #[clap(value_parser, value_name = "EXPRESSION")]
    /// The expression to tabulate, e.g. "a & (b | !c)" (reads stdin if not provided)
    expression: Option<String>,

    #[clap(short, long, value_parser)]
    /// Read the expression from a file instead of the command line
    input: Option<PathBuf>,

    #[clap(short, long, value_parser)]
    /// The output filename (or stdout if not provided)
    output: Option<PathBuf>,

    #[clap(short, long)]
    /// Output in CSV format; the table size doubles with every variable
    csv: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let expression = if let Some(input_file) = args.input {
        let mut contents = String::new();
        File::open(&input_file)
            .with_context(|| format!("could not open {}", input_file.display()))?
            .read_to_string(&mut contents)?;
        contents
    } else if let Some(expression) = args.expression {
        expression
    } else {
        let mut contents = String::new();
        io::stdin().read_to_string(&mut contents)?;
        contents
    };

    let expression = expression.trim();

    let table = TruthTable::generate(expression)
        .with_context(|| format!("could not tabulate {expression:?}"))?;

    let mut writer = if let Some(output_file) = args.output {
        let file = File::create(output_file)?;
        Box::new(BufWriter::new(file)) as Box<dyn Write>
    } else {
        Box::new(BufWriter::new(io::stdout())) as Box<dyn Write>
    };

    if args.csv {
        write_csv(&table, expression, &mut writer)?;
    } else {
        write!(writer, "{table}")?;
    }

    writer.flush()?;

    Ok(())
}

/// Writes the table in the same delimited form the values are usually
/// shared in: variable columns, then the expression itself as the result
/// column header, with T/F cells.
fn write_csv<W: Write>(table: &TruthTable, expression: &str, writer: W) -> anyhow::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let header: Vec<&str> = table
        .variables
        .iter()
        .map(String::as_str)
        .chain(iter::once(expression))
        .collect();
    csv_writer.write_record(&header)?;

    for row in &table.rows {
        let record: Vec<&str> = row
            .values
            .iter()
            .chain(iter::once(&row.result))
            .map(|&value| if value { "T" } else { "F" })
            .collect();
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;

    Ok(())
}

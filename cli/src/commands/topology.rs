use std::collections::BTreeMap;

use anyhow::Result;
use sparselife::{CsrMatrix, build_topology_for};

use crate::cli::{Cli, TopologyArgs};

pub fn run(_cli: &Cli, args: &TopologyArgs) -> Result<()> {
    let matrix = build_topology_for(args.rows, args.cols)?;

    println!("[topology] grid {}x{}: {} cells, {} nonzeros", args.rows, args.cols, matrix.row_count(), matrix.nnz());
    for (degree, cells) in degree_histogram(&matrix) {
        println!("[topology]   {degree} neighbors: {cells} cells");
    }

    Ok(())
}

/// Number of cells for each neighbor count, ascending by count.
fn degree_histogram(matrix: &CsrMatrix<u32>) -> BTreeMap<usize, usize> {
    let mut histogram = BTreeMap::new();
    for row in 0..matrix.row_count() {
        *histogram.entry(matrix.degree(row)).or_insert(0) += 1;
    }
    histogram
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_of_four_by_five() {
        let matrix = build_topology_for(4, 5).unwrap();
        let histogram = degree_histogram(&matrix);
        assert_eq!(histogram.into_iter().collect::<Vec<_>>(), vec![(3, 4), (5, 10), (8, 6)]);
    }

    #[test]
    fn zero_rows_fail() {
        let cli = <Cli as clap::Parser>::parse_from(["sparselife", "topology", "0", "3"]);
        let crate::cli::Commands::Topology(args) = &cli.command else { panic!("expected topology") };
        assert!(run(&cli, args).is_err());
    }
}

use pivotab_solver::TableauSnapshot;

/// Renders a snapshot as a bordered table: a `C` row of objective
/// coefficients, one row per basic variable with its right-hand side, and a
/// `D` row of deltas once they have been computed.
pub fn render(snapshot: &TableauSnapshot) -> String {
    let width = snapshot.width();
    let border = border_line(width + 1);
    let mut out = String::new();

    out.push_str(&border);
    out.push_str("|  C  |");
    for coefficient in &snapshot.objective {
        out.push_str(&cell(*coefficient));
    }
    out.push_str("           |\n");

    out.push_str(&border);
    out.push_str("|basis|");
    for &variable in &snapshot.variables {
        out.push_str(&format!("    x{:<2}    |", variable + 1));
    }
    out.push_str("     b     |\n");
    out.push_str(&border);

    for (row, &basic) in snapshot.rows.iter().zip(&snapshot.basis) {
        out.push_str(&format!("| x{:<3}|", basic + 1));
        for coefficient in &row.coefficients {
            out.push_str(&cell(*coefficient));
        }
        out.push_str(&cell(row.rhs));
        out.push('\n');
    }
    out.push_str(&border);

    if let Some(deltas) = &snapshot.deltas {
        out.push_str("|  D  |");
        for delta in deltas {
            out.push_str(&cell(*delta));
        }
        out.push('\n');
        out.push_str(&border);
    }

    out
}

fn cell(value: f64) -> String {
    format!(" {value:>9.2} |")
}

fn border_line(cells: usize) -> String {
    let mut line = String::from("+-----+");
    for _ in 0..cells {
        line.push_str("-----------+");
    }
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use pivotab_solver::SnapshotRow;

    fn snapshot(deltas: Option<Vec<f64>>) -> TableauSnapshot {
        TableauSnapshot {
            variables: vec![0, 1],
            objective: vec![3.0, 0.0],
            basis: vec![1],
            rows: vec![SnapshotRow {
                coefficients: vec![1.0, 1.0],
                rhs: 4.0,
            }],
            deltas,
        }
    }

    #[test]
    fn renders_all_rows() {
        let rendered = render(&snapshot(Some(vec![3.0, 0.0, 0.0])));
        let border = "+-----+-----------+-----------+-----------+";
        let expected = [
            border,
            "|  C  |      3.00 |      0.00 |           |",
            border,
            "|basis|    x1     |    x2     |     b     |",
            border,
            "| x2  |      1.00 |      1.00 |      4.00 |",
            border,
            "|  D  |      3.00 |      0.00 |      0.00 |",
            border,
        ];

        assert_eq!(rendered.lines().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn omits_the_delta_row_before_first_computation() {
        let rendered = render(&snapshot(None));

        assert!(!rendered.contains("|  D  |"));
        assert_eq!(rendered.lines().count(), 7);
    }

    #[test]
    fn every_line_is_equally_wide() {
        let rendered = render(&snapshot(Some(vec![3.0, 0.0, 0.0])));
        let lines: Vec<&str> = rendered.lines().collect();

        assert!(lines.iter().all(|line| line.len() == lines[0].len()));
    }
}

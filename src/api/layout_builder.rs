use crate::core::{Column, Row, TableSource, TemporalFormats, encode_cell_value, raw_cell_value};
use crate::error::{ChartError, ChartResult};

use super::chart_config::{ChartLayout, DonutSegment, RowObject};

/// Builds the xkey/ykeys layout around the column at `axis_position`.
///
/// Every row must carry exactly one cell per column, in column order.
pub(super) fn build_categorical_layout<T: TableSource>(
    table: &T,
    axis_position: usize,
    formats: &TemporalFormats,
) -> ChartResult<ChartLayout> {
    let columns = table.columns();
    let axis = columns
        .get(axis_position)
        .ok_or(ChartError::EmptyTable)?;

    let (ykeys, labels): (Vec<String>, Vec<String>) = columns
        .iter()
        .enumerate()
        .filter(|(position, _)| *position != axis_position)
        .map(|(_, column)| (column.id.clone(), column.label.clone()))
        .unzip();

    let data = table
        .rows()
        .iter()
        .enumerate()
        .map(|(row_index, row)| encode_row(columns, row_index, row, formats))
        .collect::<ChartResult<Vec<_>>>()?;

    Ok(ChartLayout::Categorical {
        xkey: axis.id.clone(),
        ykeys,
        labels,
        data,
    })
}

/// Builds the label/value layout from the first column.
///
/// Temporal values keep their plain serde form here; only categorical rows
/// apply the configured date formats.
pub(super) fn build_single_series_layout<T: TableSource>(table: &T) -> ChartResult<ChartLayout> {
    let first_column = table.columns().first().ok_or(ChartError::EmptyTable)?;

    let data = table
        .rows()
        .iter()
        .enumerate()
        .map(|(row_index, row)| {
            let cell = row.cells().first().ok_or(ChartError::RowShape {
                row_index,
                expected: 1,
                actual: 0,
            })?;
            check_cell_column(first_column, cell.column_id(), row_index, 0)?;
            Ok(DonutSegment {
                label: first_column.label.clone(),
                value: raw_cell_value(cell.value())?,
            })
        })
        .collect::<ChartResult<Vec<_>>>()?;

    Ok(ChartLayout::SingleSeries { data })
}

fn encode_row(
    columns: &[Column],
    row_index: usize,
    row: &Row,
    formats: &TemporalFormats,
) -> ChartResult<RowObject> {
    let cells = row.cells();
    if cells.len() != columns.len() {
        return Err(ChartError::RowShape {
            row_index,
            expected: columns.len(),
            actual: cells.len(),
        });
    }

    let mut object = RowObject::with_capacity(columns.len());
    for (position, (column, cell)) in columns.iter().zip(cells).enumerate() {
        check_cell_column(column, cell.column_id(), row_index, position)?;
        let found = cell.value().value_type();
        if found != column.column_type {
            return Err(ChartError::CellTypeMismatch {
                column_id: column.id.clone(),
                expected: column.column_type,
                found,
            });
        }
        object.insert(column.id.clone(), encode_cell_value(cell.value(), formats)?);
    }
    Ok(object)
}

fn check_cell_column(
    column: &Column,
    cell_column_id: &str,
    row_index: usize,
    position: usize,
) -> ChartResult<()> {
    if cell_column_id != column.id {
        return Err(ChartError::CellColumnMismatch {
            row_index,
            position,
            expected: column.id.clone(),
            found: cell_column_id.to_owned(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{build_categorical_layout, build_single_series_layout};
    use crate::api::ChartLayout;
    use crate::core::{Cell, Column, ColumnType, Row, Table, TemporalFormats};
    use crate::error::ChartError;

    fn two_column_table() -> (Table, Column, Column) {
        let name = Column::new("name", ColumnType::String);
        let score = Column::new("score", ColumnType::Number).with_label("Score");
        let mut table = Table::new();
        table.add_column(name.clone()).expect("name");
        table.add_column(score.clone()).expect("score");
        (table, name, score)
    }

    #[test]
    fn axis_in_middle_keeps_remaining_order() {
        let (mut table, name, score) = two_column_table();
        let extra = Column::new("extra", ColumnType::Boolean);
        table.add_column(extra.clone()).expect("extra");
        table.insert_row(
            Row::new()
                .with_cell(Cell::new(&name, "a").expect("cell"))
                .with_cell(Cell::new(&score, 1).expect("cell"))
                .with_cell(Cell::new(&extra, true).expect("cell")),
        );

        let layout =
            build_categorical_layout(&table, 1, &TemporalFormats::default()).expect("layout");
        let ChartLayout::Categorical {
            xkey,
            ykeys,
            labels,
            data,
        } = layout
        else {
            panic!("expected categorical layout");
        };
        assert_eq!(xkey, "score");
        assert_eq!(ykeys, ["name", "extra"]);
        assert_eq!(labels, ["name", "extra"]);
        assert_eq!(data[0].get("score"), Some(&json!(1)));
    }

    #[test]
    fn short_row_is_rejected() {
        let (mut table, name, _) = two_column_table();
        table.insert_row(Row::new().with_cell(Cell::new(&name, "a").expect("cell")));

        let err = build_categorical_layout(&table, 0, &TemporalFormats::default())
            .expect_err("short row must fail");
        assert!(matches!(
            err,
            ChartError::RowShape {
                row_index: 0,
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn swapped_cells_are_rejected() {
        let (mut table, name, score) = two_column_table();
        table.insert_row(
            Row::new()
                .with_cell(Cell::new(&score, 1).expect("cell"))
                .with_cell(Cell::new(&name, "a").expect("cell")),
        );

        let err = build_categorical_layout(&table, 0, &TemporalFormats::default())
            .expect_err("misaligned row must fail");
        assert!(matches!(err, ChartError::CellColumnMismatch { position: 0, .. }));
    }

    #[test]
    fn single_series_rejects_empty_row() {
        let (mut table, _, _) = two_column_table();
        table.insert_row(Row::new());

        let err = build_single_series_layout(&table).expect_err("empty row must fail");
        assert!(matches!(err, ChartError::RowShape { actual: 0, .. }));
    }
}

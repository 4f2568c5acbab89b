use morris_chart::api::{Chart, ChartKind, ChartLayout};
use morris_chart::core::{Cell, CellValue, Column, ColumnType, Row, Table};
use proptest::prelude::*;
use serde_json::Value;

fn column_type() -> impl Strategy<Value = ColumnType> {
    prop_oneof![
        Just(ColumnType::Boolean),
        Just(ColumnType::Number),
        Just(ColumnType::String),
        Just(ColumnType::Date),
        Just(ColumnType::DateTime),
    ]
}

fn sample_value(column_type: ColumnType, seed: i64) -> CellValue {
    let base = chrono::NaiveDate::from_ymd_opt(2000, 1, 1).expect("base date");
    let day = base + chrono::Duration::days(seed.rem_euclid(10_000));
    match column_type {
        ColumnType::Boolean => CellValue::from(seed % 2 == 0),
        ColumnType::Number => CellValue::from(seed),
        ColumnType::String => CellValue::from(format!("v{seed}")),
        ColumnType::Date => CellValue::from(day),
        ColumnType::DateTime => CellValue::from(
            day.and_hms_opt(0, 0, 0).expect("midnight")
                + chrono::Duration::seconds(seed.rem_euclid(86_400)),
        ),
    }
}

fn build_table(types: &[ColumnType], seeds: &[i64]) -> Table {
    let columns: Vec<Column> = types
        .iter()
        .enumerate()
        .map(|(index, column_type)| {
            Column::new(format!("c{index}"), *column_type).with_label(format!("Label {index}"))
        })
        .collect();

    let mut table = Table::new();
    for column in &columns {
        table.add_column(column.clone()).expect("unique column");
    }
    for seed in seeds {
        let row: Row = columns
            .iter()
            .map(|column| {
                Cell::new(column, sample_value(column.column_type, *seed)).expect("typed cell")
            })
            .collect();
        table.insert_row(row);
    }
    table
}

fn categorical_kind() -> impl Strategy<Value = ChartKind> {
    prop_oneof![
        Just(ChartKind::Area),
        Just(ChartKind::Bar),
        Just(ChartKind::Line)
    ]
}

proptest! {
    #[test]
    fn categorical_series_exclude_axis_and_preserve_order(
        types in prop::collection::vec(column_type(), 1..8),
        seeds in prop::collection::vec(-50_000i64..50_000, 0..12),
        axis_pick in any::<prop::sample::Index>(),
        kind in categorical_kind()
    ) {
        let table = build_table(&types, &seeds);
        let axis_position = axis_pick.index(types.len());
        let axis_id = format!("c{axis_position}");

        let mut chart = Chart::new(kind, table);
        chart.set_x_axis(&axis_id).expect("axis from table");
        let config = chart.convert().expect("convert");

        let ChartLayout::Categorical { xkey, ykeys, labels, data } = config.layout else {
            panic!("categorical kinds use the categorical layout");
        };
        let expected_ykeys: Vec<String> = (0..types.len())
            .filter(|index| *index != axis_position)
            .map(|index| format!("c{index}"))
            .collect();

        prop_assert_eq!(xkey, axis_id);
        prop_assert_eq!(ykeys.len(), types.len() - 1);
        prop_assert_eq!(labels.len(), ykeys.len());
        prop_assert_eq!(&ykeys, &expected_ykeys);
        prop_assert_eq!(data.len(), seeds.len());
        for row in &data {
            prop_assert_eq!(row.len(), types.len());
        }
    }

    #[test]
    fn donut_emits_one_segment_per_row(
        types in prop::collection::vec(column_type(), 1..6),
        seeds in prop::collection::vec(-50_000i64..50_000, 0..12)
    ) {
        let table = build_table(&types, &seeds);
        let config = Chart::new(ChartKind::Donut, table).convert().expect("convert");

        let ChartLayout::SingleSeries { data } = config.layout else {
            panic!("donut uses the single-series layout");
        };
        prop_assert_eq!(data.len(), seeds.len());
        prop_assert!(data.iter().all(|segment| segment.label == "Label 0"));
    }

    #[test]
    fn conversion_is_idempotent_and_round_trips(
        types in prop::collection::vec(column_type(), 1..6),
        seeds in prop::collection::vec(-50_000i64..50_000, 0..8),
        kind in prop_oneof![categorical_kind(), Just(ChartKind::Donut)]
    ) {
        let mut chart = Chart::new(kind, build_table(&types, &seeds));
        chart.set_options([("resize", Value::Bool(true))]);

        let first = chart.convert_data_to_javascript().expect("first");
        let second = chart.convert_data_to_javascript().expect("second");
        prop_assert_eq!(&first, &second);

        let parsed: Value = serde_json::from_str(&first).expect("valid json");
        let expected = chart.convert().expect("convert").to_json_value().expect("json");
        prop_assert_eq!(parsed, expected);
    }
}

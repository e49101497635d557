use calamine::{Data, Range};
use chrono::Timelike;
use contracts::domain::a001_business::{BulkImportRequest, ImportedRow};
use serde_json::{Number, Value};
use std::collections::HashSet;

/// Ключ для колонки без заголовка
const EMPTY_HEADER: &str = "__EMPTY";

/// Метаданные Excel файла
#[derive(Debug, Clone, PartialEq)]
pub struct ExcelMetadata {
    /// Имя файла
    pub file_name: String,
    /// Имя листа, из которого взяты строки
    pub sheet_name: String,
    /// Количество строк данных (без заголовка и пустых строк)
    pub row_count: usize,
}

/// Результат разбора первого листа книги
#[derive(Debug, Clone, PartialEq)]
pub struct ExcelData {
    pub metadata: ExcelMetadata,
    /// Ключи объектов, построенные из первой строки листа
    pub headers: Vec<String>,
    /// Строки данных: заголовок -> значение ячейки
    pub rows: Vec<ImportedRow>,
}

impl ExcelData {
    /// Построить объекты строк из диапазона листа.
    /// Первая строка - заголовки, пустые ячейки в объект не попадают,
    /// полностью пустые строки пропускаются.
    pub fn from_range(range: &Range<Data>, file_name: &str, sheet_name: &str) -> Self {
        let mut rows_iter = range.rows();
        let headers = rows_iter.next().map(header_keys).unwrap_or_default();

        let rows: Vec<ImportedRow> = rows_iter
            .filter_map(|cells| row_object(&headers, cells))
            .collect();

        ExcelData {
            metadata: ExcelMetadata {
                file_name: file_name.to_string(),
                sheet_name: sheet_name.to_string(),
                row_count: rows.len(),
            },
            headers,
            rows,
        }
    }

    /// Обернуть строки в тело запроса массового импорта
    pub fn into_request(self) -> BulkImportRequest {
        BulkImportRequest::new(self.rows)
    }
}

/// Заголовки колонок: текст ячейки, пустые получают `__EMPTY`,
/// повторы - суффикс `_1`, `_2`, ...
fn header_keys(cells: &[Data]) -> Vec<String> {
    let mut taken = HashSet::new();
    cells
        .iter()
        .map(|cell| {
            let base = cell_text(cell).unwrap_or_else(|| EMPTY_HEADER.to_string());
            unique_key(base, &mut taken)
        })
        .collect()
}

fn unique_key(base: String, taken: &mut HashSet<String>) -> String {
    if taken.insert(base.clone()) {
        return base;
    }
    let mut n = 1;
    loop {
        let candidate = format!("{}_{}", base, n);
        if taken.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

fn row_object(headers: &[String], cells: &[Data]) -> Option<ImportedRow> {
    let mut row = ImportedRow::new();
    for (key, cell) in headers.iter().zip(cells) {
        if let Some(value) = cell_value(cell) {
            row.insert(key.clone(), value);
        }
    }
    if row.is_empty() {
        None
    } else {
        Some(row)
    }
}

/// Отображаемый текст ячейки (для заголовков)
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) if s.is_empty() => None,
        Data::Bool(b) => Some(if *b { "TRUE" } else { "FALSE" }.to_string()),
        Data::Error(e) => Some(e.to_string()),
        other => match cell_value(other)? {
            Value::String(s) => Some(s),
            v => Some(v.to_string()),
        },
    }
}

/// Значение ячейки в JSON. `None` - ячейку пропускаем.
fn cell_value(cell: &Data) -> Option<Value> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(Value::String(s.clone())),
        Data::Int(i) => Some(Value::Number(Number::from(*i))),
        Data::Float(f) => float_value(*f),
        Data::Bool(b) => Some(Value::Bool(*b)),
        Data::DateTime(dt) => {
            if dt.is_duration() {
                return float_value(dt.as_f64());
            }
            match dt.as_datetime() {
                Some(d) if d.num_seconds_from_midnight() == 0 => {
                    Some(Value::String(d.format("%Y-%m-%d").to_string()))
                }
                Some(d) => Some(Value::String(d.format("%Y-%m-%dT%H:%M:%S").to_string())),
                None => float_value(dt.as_f64()),
            }
        }
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(Value::String(s.clone())),
    }
}

/// Целые числа из Excel (хранятся как f64) отдаём без дробной части
fn float_value(f: f64) -> Option<Value> {
    const MAX_SAFE_INT: f64 = 9_007_199_254_740_992.0;
    if f.fract() == 0.0 && f.abs() < MAX_SAFE_INT {
        Some(Value::Number(Number::from(f as i64)))
    } else {
        Number::from_f64(f).map(Value::Number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn range_of(rows: Vec<Vec<Data>>) -> Range<Data> {
        let height = rows.len() as u32;
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(1) as u32;
        let mut range = Range::new((0, 0), (height - 1, width - 1));
        for (r, row) in rows.into_iter().enumerate() {
            for (c, cell) in row.into_iter().enumerate() {
                range.set_value((r as u32, c as u32), cell);
            }
        }
        range
    }

    fn s(v: &str) -> Data {
        Data::String(v.to_string())
    }

    #[test]
    fn test_header_and_data_row() {
        let range = range_of(vec![
            vec![s("name"), s("phone")],
            vec![s("Joe's Shop"), s("555-1234")],
        ]);
        let data = ExcelData::from_range(&range, "shops.xlsx", "Sheet1");

        assert_eq!(data.headers, vec!["name", "phone"]);
        assert_eq!(data.metadata.row_count, 1);
        assert_eq!(
            Value::Object(data.rows[0].clone()),
            json!({"name": "Joe's Shop", "phone": "555-1234"})
        );
        assert_eq!(
            serde_json::to_string(&data.into_request()).unwrap(),
            r#"{"businesses":[{"name":"Joe's Shop","phone":"555-1234"}]}"#
        );
    }

    #[test]
    fn test_empty_cells_are_omitted() {
        let range = range_of(vec![
            vec![s("name"), s("phone"), s("email")],
            vec![s("Acme"), Data::Empty, s("info@acme.test")],
            vec![Data::Empty, Data::Empty, Data::Empty],
            vec![s("Beta"), s(""), Data::Empty],
        ]);
        let data = ExcelData::from_range(&range, "f.xlsx", "Sheet1");

        assert_eq!(data.rows.len(), 2);
        assert_eq!(
            Value::Object(data.rows[0].clone()),
            json!({"name": "Acme", "email": "info@acme.test"})
        );
        assert_eq!(Value::Object(data.rows[1].clone()), json!({"name": "Beta"}));
    }

    #[test]
    fn test_key_order_follows_columns() {
        let range = range_of(vec![
            vec![s("website"), s("name"), s("corporateId")],
            vec![s("acme.test"), s("Acme"), s("77")],
        ]);
        let data = ExcelData::from_range(&range, "f.xlsx", "Sheet1");
        let keys: Vec<_> = data.rows[0].keys().cloned().collect();
        assert_eq!(keys, vec!["website", "name", "corporateId"]);
    }

    #[test]
    fn test_missing_and_duplicate_headers() {
        let range = range_of(vec![
            vec![s("name"), Data::Empty, s("name"), Data::Empty, s("name")],
            vec![s("a"), s("b"), s("c"), s("d"), s("e")],
        ]);
        let data = ExcelData::from_range(&range, "f.xlsx", "Sheet1");
        assert_eq!(
            data.headers,
            vec!["name", "__EMPTY", "name_1", "__EMPTY_1", "name_2"]
        );
        assert_eq!(
            Value::Object(data.rows[0].clone()),
            json!({"name": "a", "__EMPTY": "b", "name_1": "c", "__EMPTY_1": "d", "name_2": "e"})
        );
    }

    #[test]
    fn test_scalar_cell_values() {
        let range = range_of(vec![
            vec![s("employees"), s("rating"), s("isOpen"), Data::Float(2024.0)],
            vec![Data::Float(12.0), Data::Float(4.5), Data::Bool(false), Data::Int(7)],
        ]);
        let data = ExcelData::from_range(&range, "f.xlsx", "Sheet1");

        assert_eq!(data.headers[3], "2024");
        assert_eq!(
            Value::Object(data.rows[0].clone()),
            json!({"employees": 12, "rating": 4.5, "isOpen": false, "2024": 7})
        );
    }

    #[test]
    fn test_date_cells_become_iso_strings() {
        use calamine::{ExcelDateTime, ExcelDateTimeType};

        // 43905 = 2020-03-15 в системе дат 1900
        let date = ExcelDateTime::new(43905.0, ExcelDateTimeType::DateTime, false);
        let datetime = ExcelDateTime::new(43905.75, ExcelDateTimeType::DateTime, false);
        let duration = ExcelDateTime::new(1.5, ExcelDateTimeType::TimeDelta, false);

        let range = range_of(vec![
            vec![s("founded"), s("ts"), s("shift")],
            vec![
                Data::DateTime(date),
                Data::DateTime(datetime),
                Data::DateTime(duration),
            ],
        ]);
        let data = ExcelData::from_range(&range, "f.xlsx", "Sheet1");

        assert_eq!(
            Value::Object(data.rows[0].clone()),
            json!({"founded": "2020-03-15", "ts": "2020-03-15T18:00:00", "shift": 1.5})
        );
    }

    #[test]
    fn test_header_only_sheet_has_no_rows() {
        let range = range_of(vec![vec![s("name"), s("phone")]]);
        let data = ExcelData::from_range(&range, "f.xlsx", "Sheet1");
        assert!(data.rows.is_empty());
        assert_eq!(data.metadata.row_count, 0);
    }

    #[test]
    fn test_empty_range() {
        let range: Range<Data> = Range::empty();
        let data = ExcelData::from_range(&range, "f.xlsx", "Sheet1");
        assert!(data.headers.is_empty());
        assert!(data.rows.is_empty());
    }
}

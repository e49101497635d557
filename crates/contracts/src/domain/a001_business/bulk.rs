use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Строка листа Excel: заголовок колонки -> значение ячейки.
/// Схема не фиксирована, набор ключей определяется загруженным файлом.
pub type ImportedRow = Map<String, Value>;

/// Тело запроса `POST /api/businesses/bulk`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkImportRequest {
    pub businesses: Vec<ImportedRow>,
}

impl BulkImportRequest {
    pub fn new(businesses: Vec<ImportedRow>) -> Self {
        Self { businesses }
    }
}

use super::types::ExcelData;
use async_trait::async_trait;
use calamine::{open_workbook_auto_from_rs, Reader};
use std::io::Cursor;
use thiserror::Error;

/// Ошибки чтения и разбора Excel файла
#[derive(Debug, Error)]
pub enum ExcelError {
    #[error("failed to read file: {0}")]
    Read(String),

    #[error("failed to decode workbook: {0}")]
    Decode(#[from] calamine::Error),

    #[error("workbook has no sheets")]
    NoSheets,
}

/// Источник бинарного содержимого выбранного файла
#[async_trait(?Send)]
pub trait BinarySource {
    fn file_name(&self) -> String;

    async fn read_bytes(&self) -> Result<Vec<u8>, ExcelError>;
}

#[async_trait(?Send)]
impl BinarySource for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }

    /// Читает файл целиком как ArrayBuffer
    async fn read_bytes(&self) -> Result<Vec<u8>, ExcelError> {
        use wasm_bindgen_futures::JsFuture;

        let array_buffer = JsFuture::from(self.array_buffer())
            .await
            .map_err(|e| ExcelError::Read(format!("{:?}", e)))?;

        // Конвертируем ArrayBuffer в Uint8Array
        let uint8_array = js_sys::Uint8Array::new(&array_buffer);
        let mut bytes = vec![0; uint8_array.length() as usize];
        uint8_array.copy_to(&mut bytes);

        Ok(bytes)
    }
}

/// Разбирает книгу (xlsx, xls, xlsb, ods - формат определяется по содержимому)
/// и строит объекты строк из первого листа.
pub fn parse_workbook(bytes: Vec<u8>, file_name: &str) -> Result<ExcelData, ExcelError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(ExcelError::NoSheets)?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ExcelError::NoSheets)??;

    Ok(ExcelData::from_range(&range, file_name, &sheet_name))
}

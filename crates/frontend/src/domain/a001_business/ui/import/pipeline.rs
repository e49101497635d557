//! Импорт предприятий из Excel: чтение файла -> разбор первого листа -> POST /api/businesses/bulk
//!
//! Одновременно актуален только последний выбранный файл: каждый запуск берёт
//! билет у `ImportGuard`, и после каждой точки ожидания устаревший запуск
//! молча завершается, не трогая состояние, не отправляя запрос и не навигируя.

use std::cell::Cell;
use std::rc::Rc;

use thiserror::Error;

use crate::domain::a001_business::api::BusinessApi;
use crate::domain::a001_business::BUSINESS_LIST_ROUTE;
use crate::shared::api_utils::ApiError;
use crate::shared::excel_importer::{parse_workbook, BinarySource, ExcelError};
use crate::shared::navigation::Navigator;

pub const READ_ERROR_MESSAGE: &str = "Error reading file";
pub const PROCESS_ERROR_MESSAGE: &str = "Error processing file";
pub const SUBMIT_ERROR_MESSAGE: &str =
    "Failed to import businesses. Please check your spreadsheet format.";

/// Состояние импорта, отображаемое в UI
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ImportState {
    #[default]
    Idle,
    Reading,
    Submitting,
    Error(String),
}

impl ImportState {
    pub fn is_busy(&self) -> bool {
        matches!(self, ImportState::Reading | ImportState::Submitting)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ImportState::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("file read failed: {0}")]
    Read(ExcelError),

    #[error("file processing failed: {0}")]
    Decode(ExcelError),

    #[error("bulk import request failed: {0}")]
    Submit(ApiError),
}

impl ImportError {
    /// Сообщение для пользователя; подробности только в логе
    pub fn user_message(&self) -> &'static str {
        match self {
            ImportError::Read(_) => READ_ERROR_MESSAGE,
            ImportError::Decode(_) => PROCESS_ERROR_MESSAGE,
            ImportError::Submit(_) => SUBMIT_ERROR_MESSAGE,
        }
    }
}

/// Куда пишется состояние импорта
pub trait ImportStateSink {
    fn set_state(&self, state: ImportState);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportTicket(u64);

/// Счётчик запусков: актуален только последний выданный билет
#[derive(Debug, Clone, Default)]
pub struct ImportGuard {
    latest: Rc<Cell<u64>>,
}

impl ImportGuard {
    pub fn begin(&self) -> ImportTicket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        ImportTicket(next)
    }

    pub fn is_current(&self, ticket: ImportTicket) -> bool {
        self.latest.get() == ticket.0
    }
}

#[derive(Debug)]
pub enum ImportOutcome {
    /// Файл не выбран, ничего не делали
    NoFile,
    Imported { rows: usize },
    Failed(ImportError),
    /// Во время выполнения был выбран другой файл
    Superseded,
}

/// Выполнить импорт выбранного файла
pub async fn run_import<S, A, N, K>(
    source: Option<&S>,
    guard: &ImportGuard,
    api: &A,
    navigator: &N,
    sink: &K,
) -> ImportOutcome
where
    S: BinarySource + ?Sized,
    A: BusinessApi + ?Sized,
    N: Navigator + ?Sized,
    K: ImportStateSink + ?Sized,
{
    let Some(source) = source else {
        return ImportOutcome::NoFile;
    };

    let ticket = guard.begin();
    let file_name = source.file_name();
    log::debug!("import: reading {}", file_name);
    sink.set_state(ImportState::Reading);

    let bytes = source.read_bytes().await;
    if !guard.is_current(ticket) {
        log::debug!("import: {} superseded while reading", file_name);
        return ImportOutcome::Superseded;
    }
    let bytes = match bytes {
        Ok(bytes) => bytes,
        Err(e) => return fail(sink, ImportError::Read(e)),
    };

    let data = match parse_workbook(bytes, &file_name) {
        Ok(data) => data,
        Err(e) => return fail(sink, ImportError::Decode(e)),
    };
    let rows = data.metadata.row_count;
    log::debug!(
        "import: {} rows from sheet '{}' of {}",
        rows,
        data.metadata.sheet_name,
        file_name
    );

    sink.set_state(ImportState::Submitting);
    let response = api.import_businesses(&data.into_request()).await;
    if !guard.is_current(ticket) {
        log::debug!("import: response for {} ignored, newer import started", file_name);
        return ImportOutcome::Superseded;
    }

    match response {
        Ok(body) => {
            log::info!("Businesses imported: {}", body);
            sink.set_state(ImportState::Idle);
            navigator.navigate(BUSINESS_LIST_ROUTE);
            ImportOutcome::Imported { rows }
        }
        Err(e) => fail(sink, ImportError::Submit(e)),
    }
}

fn fail<K: ImportStateSink + ?Sized>(sink: &K, error: ImportError) -> ImportOutcome {
    log::error!("Error importing businesses: {}", error);
    sink.set_state(ImportState::Error(error.user_message().to_string()));
    ImportOutcome::Failed(error)
}

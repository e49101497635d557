//! In-memory fakes for the API and router

use std::cell::RefCell;

use async_trait::async_trait;
use contracts::domain::a001_business::{BulkImportRequest, BusinessDto};
use serde_json::{json, Value};

use super::api::BusinessApi;
use crate::shared::api_utils::ApiError;
use crate::shared::navigation::Navigator;

pub struct FakeBusinessApi {
    pub created: RefCell<Vec<Value>>,
    pub imported: RefCell<Vec<Value>>,
    create_result: Result<(), ApiError>,
    import_result: Result<Value, ApiError>,
}

impl FakeBusinessApi {
    pub fn ok() -> Self {
        Self {
            created: RefCell::new(Vec::new()),
            imported: RefCell::new(Vec::new()),
            create_result: Ok(()),
            import_result: Ok(json!({"imported": 1})),
        }
    }

    pub fn failing_create(err: ApiError) -> Self {
        Self {
            create_result: Err(err),
            ..Self::ok()
        }
    }

    pub fn failing_import(err: ApiError) -> Self {
        Self {
            import_result: Err(err),
            ..Self::ok()
        }
    }

    pub fn calls(&self) -> usize {
        self.created.borrow().len() + self.imported.borrow().len()
    }
}

#[async_trait(?Send)]
impl BusinessApi for FakeBusinessApi {
    async fn create_business(&self, dto: &BusinessDto) -> Result<(), ApiError> {
        self.created
            .borrow_mut()
            .push(serde_json::to_value(dto).expect("dto serializes"));
        self.create_result.clone()
    }

    async fn import_businesses(&self, request: &BulkImportRequest) -> Result<Value, ApiError> {
        self.imported
            .borrow_mut()
            .push(serde_json::to_value(request).expect("request serializes"));
        self.import_result.clone()
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub visited: RefCell<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited.borrow_mut().push(path.to_string());
    }
}

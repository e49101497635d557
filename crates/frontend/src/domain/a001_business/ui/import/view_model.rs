use super::pipeline::{self, ImportGuard, ImportState, ImportStateSink};
use crate::domain::a001_business::api::BusinessApi;
use crate::shared::navigation::Navigator;
use leptos::prelude::*;
use std::rc::Rc;

impl ImportStateSink for RwSignal<ImportState> {
    fn set_state(&self, state: ImportState) {
        // После навигации страница может быть уже размонтирована
        self.try_set(state);
    }
}

/// ViewModel импорта из Excel
#[derive(Clone)]
pub struct BusinessImportViewModel {
    pub state: RwSignal<ImportState>,
    guard: ImportGuard,
}

impl BusinessImportViewModel {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(ImportState::Idle),
            guard: ImportGuard::default(),
        }
    }

    pub fn is_busy(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_busy()))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error().map(str::to_string)))
    }

    /// Запустить импорт выбранного файла; предыдущий незавершённый импорт устаревает
    pub fn import_command(
        &self,
        file: Option<web_sys::File>,
        api: Rc<dyn BusinessApi>,
        navigator: Rc<dyn Navigator>,
    ) {
        let state = self.state;
        let guard = self.guard.clone();

        leptos::task::spawn_local(async move {
            let outcome = pipeline::run_import(
                file.as_ref(),
                &guard,
                api.as_ref(),
                navigator.as_ref(),
                &state,
            )
            .await;
            log::debug!("import finished: {:?}", outcome);
        });
    }
}

impl Default for BusinessImportViewModel {
    fn default() -> Self {
        Self::new()
    }
}

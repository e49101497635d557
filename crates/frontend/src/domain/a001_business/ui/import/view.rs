use super::view_model::BusinessImportViewModel;
use crate::domain::a001_business::api::BusinessApi;
use crate::shared::excel_importer::ExcelImporter;
use crate::shared::icons::icon;
use crate::shared::navigation::Navigator;
use leptos::prelude::*;
use std::rc::Rc;

/// Массовый импорт предприятий из первого листа Excel файла.
/// Первая строка листа задаёт имена полей.
#[component]
pub fn BusinessImport(
    api: Rc<dyn BusinessApi>,
    navigator: Rc<dyn Navigator>,
) -> impl IntoView {
    let vm = BusinessImportViewModel::new();
    let busy = vm.is_busy();
    let error = vm.error();

    let on_file: Rc<dyn Fn(Option<web_sys::File>)> = Rc::new(move |file| {
        vm.import_command(file, api.clone(), navigator.clone());
    });

    view! {
        <div class="details-container business-import">
            <div class="details-header">
                <h3>{icon("upload")}" Import from spreadsheet"</h3>
            </div>
            <p class="business-import__hint">
                "The first row of the first sheet holds column names (name, corporateId, phone, email, ...). Each following row becomes one business."
            </p>
            <ExcelImporter
                on_file=on_file
                busy=busy
                error=error
                label="Choose Excel file"
            />
        </div>
    }
}

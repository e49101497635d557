use crate::shared::icons::icon;
use leptos::prelude::*;
use std::rc::Rc;
use thaw::*;
use wasm_bindgen::JsCast;

/// Выбор Excel файла для импорта.
///
/// Сам файл не читает: отдаёт `web_sys::File` наружу через `on_file`,
/// показывает состояние обработки и ошибку, которые ведёт владелец.
#[component]
pub fn ExcelImporter(
    /// Вызывается при каждом выборе файла (`None`, если выбор пуст)
    on_file: Rc<dyn Fn(Option<web_sys::File>)>,
    /// Идёт чтение или отправка
    #[prop(into)]
    busy: Signal<bool>,
    /// Сообщение об ошибке последней попытки
    #[prop(into)]
    error: Signal<Option<String>>,
    /// Подпись кнопки выбора
    #[prop(optional, into)]
    label: MaybeProp<String>,
) -> impl IntoView {
    let (selected_file_name, set_selected_file_name) = signal(Option::<String>::None);
    let (selected_file_size, set_selected_file_size) = signal(0u64);

    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());

        let file = input
            .as_ref()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        match &file {
            Some(f) => {
                set_selected_file_name.set(Some(f.name()));
                set_selected_file_size.set(f.size() as u64);
            }
            None => set_selected_file_name.set(None),
        }

        // Сбрасываем input, чтобы повторный выбор того же файла снова вызвал change
        if let Some(input) = input {
            input.set_value("");
        }

        (on_file)(file);
    };

    let button_label = move || format!(" {}", label.get().unwrap_or_else(|| "Import from Excel".to_string()));

    view! {
        <div class="excel-importer">
            <div class="excel-importer__filebar">
                <div class="excel-importer__filebar-row">
                    <label class="button button--secondary excel-importer__file-btn" for="excel-file-input">
                        {icon("upload")}
                        {button_label}
                    </label>
                    <input
                        id="excel-file-input"
                        type="file"
                        accept=".xlsx,.xls"
                        on:change=handle_file_select
                        class="hidden"
                    />
                    {move || if let Some(name) = selected_file_name.get() {
                        let size = selected_file_size.get();
                        view! {
                            <span class="excel-importer__fileinfo">
                                {icon("file")}
                                <strong>{name}</strong>
                                {" ("}
                                {format!("{:.2} KB", size as f64 / 1024.0)}
                                {")"}
                            </span>
                        }.into_any()
                    } else {
                        view! {
                            <span class="excel-importer__filehint">".xlsx / .xls"</span>
                        }.into_any()
                    }}
                    <Show when=move || busy.get()>
                        <Space gap=SpaceGap::Small>
                            <Spinner />
                            <span style="color: var(--color-text-tertiary);">"Importing..."</span>
                        </Space>
                    </Show>
                </div>
            </div>

            {move || error.get().map(|e| {
                view! {
                    <div class="warning-box warning-box--error excel-importer__error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                }
            })}
        </div>
    }
}

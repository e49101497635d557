use super::model;
use crate::domain::a001_business::api::BusinessApi;
use crate::shared::navigation::Navigator;
use contracts::domain::a001_business::{BusinessDto, BusinessField, BusinessFlag, MachineField};
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for the business registration form.
///
/// Owns the record for the lifetime of the form; every change goes through
/// the builder operations of `BusinessDto`.
#[derive(Clone, Copy)]
pub struct BusinessDetailsViewModel {
    pub form: RwSignal<BusinessDto>,
    pub error: RwSignal<Option<String>>,
    pub is_saving: RwSignal<bool>,
}

impl BusinessDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(BusinessDto::default()),
            error: RwSignal::new(None),
            is_saving: RwSignal::new(false),
        }
    }

    pub fn field(&self, field: BusinessField) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.field(field).to_string()))
    }

    pub fn flag(&self, flag: BusinessFlag) -> Signal<bool> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.flag(flag)))
    }

    pub fn machine_field(&self, index: usize, field: MachineField) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || {
            form.with(|f| {
                f.machinery
                    .get(index)
                    .and_then(|m| m.get(field))
                    .unwrap_or_default()
                    .to_string()
            })
        })
    }

    /// Количество единиц оборудования; меняется только при добавлении/удалении
    pub fn machine_count(&self) -> Memo<usize> {
        let form = self.form;
        Memo::new(move |_| form.with(|f| f.machinery.len()))
    }

    pub fn is_form_valid(&self) -> Signal<bool> {
        let form = self.form;
        Signal::derive(move || form.with(|f| f.validate().is_ok()))
    }

    pub fn set_field(&self, field: BusinessField, value: String) {
        self.form.update(|f| f.set_field(field, value));
    }

    pub fn set_flag(&self, flag: BusinessFlag, checked: bool) {
        self.form.update(|f| f.set_flag(flag, checked));
    }

    pub fn add_machine(&self) {
        self.form.update(|f| {
            f.add_machine();
        });
    }

    pub fn remove_machine(&self, index: usize) {
        self.form.update(|f| {
            if let Err(e) = f.remove_machine(index) {
                log::warn!("remove_machine: {}", e);
            }
        });
    }

    pub fn set_machine_field(&self, index: usize, field: MachineField, value: String) {
        self.form.update(|f| {
            if let Err(e) = f.set_machine_field(index, field, value) {
                log::warn!("set_machine_field: {}", e);
            }
        });
    }

    /// Save form data to server
    pub fn save_command(&self, api: Rc<dyn BusinessApi>, navigator: Rc<dyn Navigator>) {
        if self.is_saving.get_untracked() {
            return;
        }

        let current = self.form.get_untracked();
        let error = self.error;
        let is_saving = self.is_saving;

        error.set(None);
        is_saving.set(true);

        leptos::task::spawn_local(async move {
            // При успехе форма уже закрыта навигацией, сигналы не трогаем
            if let Err(e) = model::submit_business(&current, api.as_ref(), navigator.as_ref()).await {
                error.try_set(Some(e.user_message()));
                is_saving.try_set(false);
            }
        });
    }
}

impl Default for BusinessDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::RecordError;

// ============================================================================
// Field addressing
// ============================================================================

/// Строковые поля верхнего уровня записи предприятия
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusinessField {
    Name,
    CorporateId,
    Phone,
    Website,
    Description,
    BusinessType,
    Location,
    Email,
}

impl BusinessField {
    pub const ALL: [BusinessField; 8] = [
        BusinessField::Name,
        BusinessField::CorporateId,
        BusinessField::Phone,
        BusinessField::Website,
        BusinessField::Description,
        BusinessField::BusinessType,
        BusinessField::Location,
        BusinessField::Email,
    ];

    /// Имя поля в JSON
    pub fn wire_name(&self) -> &'static str {
        match self {
            BusinessField::Name => "name",
            BusinessField::CorporateId => "corporateId",
            BusinessField::Phone => "phone",
            BusinessField::Website => "website",
            BusinessField::Description => "description",
            BusinessField::BusinessType => "businessType",
            BusinessField::Location => "location",
            BusinessField::Email => "email",
        }
    }
}

impl FromStr for BusinessField {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.wire_name() == s)
            .ok_or_else(|| RecordError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for BusinessField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Булевы флаги записи предприятия
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusinessFlag {
    IsOpen,
    OpenToNewBusiness,
}

impl BusinessFlag {
    pub fn wire_name(&self) -> &'static str {
        match self {
            BusinessFlag::IsOpen => "isOpen",
            BusinessFlag::OpenToNewBusiness => "openToNewBusiness",
        }
    }
}

impl fmt::Display for BusinessFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for BusinessFlag {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "isOpen" => Ok(BusinessFlag::IsOpen),
            "openToNewBusiness" => Ok(BusinessFlag::OpenToNewBusiness),
            other => Err(RecordError::UnknownField(other.to_string())),
        }
    }
}

/// Поля вложенной записи оборудования
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MachineField {
    Name,
    Description,
    Manufacturer,
    YearOfManufacture,
    Specifications,
}

impl MachineField {
    pub const ALL: [MachineField; 5] = [
        MachineField::Name,
        MachineField::Description,
        MachineField::Manufacturer,
        MachineField::YearOfManufacture,
        MachineField::Specifications,
    ];

    pub fn wire_name(&self) -> &'static str {
        match self {
            MachineField::Name => "name",
            MachineField::Description => "description",
            MachineField::Manufacturer => "manufacturer",
            MachineField::YearOfManufacture => "yearOfManufacture",
            MachineField::Specifications => "specifications",
        }
    }
}

impl FromStr for MachineField {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.wire_name() == s)
            .ok_or_else(|| RecordError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for MachineField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

// ============================================================================
// DTOs
// ============================================================================

/// Единица оборудования предприятия. Идентификатора нет, адресуется позицией в списке.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,

    #[serde(rename = "yearOfManufacture", skip_serializing_if = "Option::is_none")]
    pub year_of_manufacture: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub specifications: Option<String>,
}

impl MachineDto {
    pub fn get(&self, field: MachineField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn set(&mut self, field: MachineField, value: String) {
        *self.slot_mut(field) = non_empty(value);
    }

    fn slot(&self, field: MachineField) -> &Option<String> {
        match field {
            MachineField::Name => &self.name,
            MachineField::Description => &self.description,
            MachineField::Manufacturer => &self.manufacturer,
            MachineField::YearOfManufacture => &self.year_of_manufacture,
            MachineField::Specifications => &self.specifications,
        }
    }

    fn slot_mut(&mut self, field: MachineField) -> &mut Option<String> {
        match field {
            MachineField::Name => &mut self.name,
            MachineField::Description => &mut self.description,
            MachineField::Manufacturer => &mut self.manufacturer,
            MachineField::YearOfManufacture => &mut self.year_of_manufacture,
            MachineField::Specifications => &mut self.specifications,
        }
    }
}

/// Предприятие для регистрации через `POST /api/businesses`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessDto {
    pub name: String,

    #[serde(rename = "corporateId", skip_serializing_if = "Option::is_none")]
    pub corporate_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "businessType", skip_serializing_if = "Option::is_none")]
    pub business_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(rename = "isOpen", default = "default_true")]
    pub is_open: bool,

    #[serde(rename = "openToNewBusiness", default = "default_true")]
    pub open_to_new_business: bool,

    #[serde(default)]
    pub machinery: Vec<MachineDto>,
}

fn default_true() -> bool {
    true
}

impl Default for BusinessDto {
    fn default() -> Self {
        Self {
            name: String::new(),
            corporate_id: None,
            phone: None,
            website: None,
            description: None,
            business_type: None,
            location: None,
            email: None,
            is_open: true,
            open_to_new_business: true,
            machinery: Vec::new(),
        }
    }
}

impl BusinessDto {
    /// Текущее значение строкового поля (пустая строка для незаполненного)
    pub fn field(&self, field: BusinessField) -> &str {
        match field {
            BusinessField::Name => &self.name,
            other => self
                .optional_slot(other)
                .and_then(|slot| slot.as_deref())
                .unwrap_or_default(),
        }
    }

    /// Перезаписать строковое поле. Пустое значение очищает необязательное поле.
    pub fn set_field(&mut self, field: BusinessField, value: String) {
        if field == BusinessField::Name {
            self.name = value;
        } else if let Some(slot) = self.optional_slot_mut(field) {
            *slot = non_empty(value);
        }
    }

    pub fn flag(&self, flag: BusinessFlag) -> bool {
        match flag {
            BusinessFlag::IsOpen => self.is_open,
            BusinessFlag::OpenToNewBusiness => self.open_to_new_business,
        }
    }

    pub fn set_flag(&mut self, flag: BusinessFlag, checked: bool) {
        match flag {
            BusinessFlag::IsOpen => self.is_open = checked,
            BusinessFlag::OpenToNewBusiness => self.open_to_new_business = checked,
        }
    }

    /// Добавить пустую запись оборудования в конец списка, вернуть её индекс
    pub fn add_machine(&mut self) -> usize {
        self.machinery.push(MachineDto::default());
        self.machinery.len() - 1
    }

    /// Удалить оборудование по индексу; остальные сдвигаются, порядок сохраняется
    pub fn remove_machine(&mut self, index: usize) -> Result<MachineDto, RecordError> {
        self.check_machine_index(index)?;
        Ok(self.machinery.remove(index))
    }

    /// Перезаписать поле оборудования; индекс должен указывать на существующий элемент
    pub fn set_machine_field(
        &mut self,
        index: usize,
        field: MachineField,
        value: String,
    ) -> Result<(), RecordError> {
        self.check_machine_index(index)?;
        self.machinery[index].set(field, value);
        Ok(())
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.name.trim().is_empty() {
            return Err(RecordError::NameRequired);
        }
        Ok(())
    }

    fn check_machine_index(&self, index: usize) -> Result<(), RecordError> {
        if index >= self.machinery.len() {
            return Err(RecordError::MachineIndexOutOfRange {
                index,
                len: self.machinery.len(),
            });
        }
        Ok(())
    }

    fn optional_slot(&self, field: BusinessField) -> Option<&Option<String>> {
        match field {
            BusinessField::Name => None,
            BusinessField::CorporateId => Some(&self.corporate_id),
            BusinessField::Phone => Some(&self.phone),
            BusinessField::Website => Some(&self.website),
            BusinessField::Description => Some(&self.description),
            BusinessField::BusinessType => Some(&self.business_type),
            BusinessField::Location => Some(&self.location),
            BusinessField::Email => Some(&self.email),
        }
    }

    fn optional_slot_mut(&mut self, field: BusinessField) -> Option<&mut Option<String>> {
        match field {
            BusinessField::Name => None,
            BusinessField::CorporateId => Some(&mut self.corporate_id),
            BusinessField::Phone => Some(&mut self.phone),
            BusinessField::Website => Some(&mut self.website),
            BusinessField::Description => Some(&mut self.description),
            BusinessField::BusinessType => Some(&mut self.business_type),
            BusinessField::Location => Some(&mut self.location),
            BusinessField::Email => Some(&mut self.email),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_default_record() {
        let dto = BusinessDto::default();
        assert!(dto.is_open);
        assert!(dto.open_to_new_business);
        assert!(dto.machinery.is_empty());
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({"name": "", "isOpen": true, "openToNewBusiness": true, "machinery": []})
        );
    }

    #[test]
    fn test_set_field_and_clear() {
        let mut dto = BusinessDto::default();
        dto.set_field(BusinessField::Name, "Acme".to_string());
        dto.set_field(BusinessField::CorporateId, "12-345".to_string());
        assert_eq!(dto.field(BusinessField::CorporateId), "12-345");

        dto.set_field(BusinessField::CorporateId, String::new());
        assert_eq!(dto.corporate_id, None);
        assert_eq!(dto.field(BusinessField::CorporateId), "");

        // name хранится как есть, даже пустой
        dto.set_field(BusinessField::Name, String::new());
        assert_eq!(dto.name, "");
    }

    #[test]
    fn test_set_flag() {
        let mut dto = BusinessDto::default();
        dto.set_flag(BusinessFlag::IsOpen, false);
        assert!(!dto.flag(BusinessFlag::IsOpen));
        assert!(dto.flag(BusinessFlag::OpenToNewBusiness));
    }

    #[test]
    fn test_wire_names_round_trip_through_from_str() {
        for field in BusinessField::ALL {
            assert_eq!(field.wire_name().parse::<BusinessField>(), Ok(field));
        }
        for field in MachineField::ALL {
            assert_eq!(field.wire_name().parse::<MachineField>(), Ok(field));
        }
        assert_eq!(
            "isOpen".parse::<BusinessFlag>(),
            Ok(BusinessFlag::IsOpen)
        );
        assert_eq!(
            "fax".parse::<BusinessField>(),
            Err(RecordError::UnknownField("fax".to_string()))
        );
    }

    #[test]
    fn test_serialized_keys_are_camel_case() {
        let mut dto = BusinessDto::default();
        dto.set_field(BusinessField::Name, "Acme".to_string());
        dto.set_field(BusinessField::BusinessType, "Manufacturing".to_string());
        dto.set_flag(BusinessFlag::OpenToNewBusiness, false);
        let idx = dto.add_machine();
        dto.set_machine_field(idx, MachineField::YearOfManufacture, "1998".to_string())
            .unwrap();

        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            json!({
                "name": "Acme",
                "businessType": "Manufacturing",
                "isOpen": true,
                "openToNewBusiness": false,
                "machinery": [{"yearOfManufacture": "1998"}]
            })
        );
    }

    #[test]
    fn test_deserialize_applies_defaults() {
        let dto: BusinessDto = serde_json::from_str(r#"{"name":"Acme"}"#).unwrap();
        assert_eq!(dto.name, "Acme");
        assert!(dto.is_open);
        assert!(dto.open_to_new_business);
        assert!(dto.machinery.is_empty());
    }

    #[test]
    fn test_validate_requires_name() {
        let mut dto = BusinessDto::default();
        assert_eq!(dto.validate(), Err(RecordError::NameRequired));
        dto.set_field(BusinessField::Name, "   ".to_string());
        assert_eq!(dto.validate(), Err(RecordError::NameRequired));
        dto.set_field(BusinessField::Name, "Acme".to_string());
        assert_eq!(dto.validate(), Ok(()));
    }

    #[test]
    fn test_remove_machine_shifts_left() {
        let mut dto = BusinessDto::default();
        for name in ["lathe", "press", "mill"] {
            let idx = dto.add_machine();
            dto.set_machine_field(idx, MachineField::Name, name.to_string())
                .unwrap();
        }

        let removed = dto.remove_machine(1).unwrap();
        assert_eq!(removed.name.as_deref(), Some("press"));

        let names: Vec<_> = dto
            .machinery
            .iter()
            .map(|m| m.get(MachineField::Name))
            .collect();
        assert_eq!(names, vec![Some("lathe"), Some("mill")]);
    }

    #[test]
    fn test_machine_index_out_of_range_does_not_grow() {
        let mut dto = BusinessDto::default();
        dto.add_machine();

        assert_eq!(
            dto.set_machine_field(1, MachineField::Name, "x".to_string()),
            Err(RecordError::MachineIndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(
            dto.remove_machine(5),
            Err(RecordError::MachineIndexOutOfRange { index: 5, len: 1 })
        );
        assert_eq!(dto.machinery, vec![MachineDto::default()]);
    }

    /// Последовательность операций над оборудованием сверяется с эталонным Vec
    #[test]
    fn test_machinery_matches_reference_model() {
        #[derive(Clone, Copy)]
        enum Op {
            Add,
            Remove(usize),
            Set(usize, MachineField, &'static str),
        }

        let ops = [
            Op::Add,
            Op::Set(0, MachineField::Name, "a"),
            Op::Add,
            Op::Add,
            Op::Set(2, MachineField::Manufacturer, "acme"),
            Op::Remove(0),
            Op::Set(7, MachineField::Name, "ignored"),
            Op::Add,
            Op::Set(0, MachineField::Specifications, "5kW"),
            Op::Remove(3),
            Op::Remove(9),
            Op::Add,
            Op::Remove(1),
            Op::Set(1, MachineField::Name, "b"),
        ];

        let mut dto = BusinessDto::default();
        let mut reference: Vec<MachineDto> = Vec::new();

        for op in ops {
            match op {
                Op::Add => {
                    dto.add_machine();
                    reference.push(MachineDto::default());
                }
                Op::Remove(i) => {
                    let result = dto.remove_machine(i);
                    if i < reference.len() {
                        assert_eq!(result.unwrap(), reference.remove(i));
                    } else {
                        assert!(result.is_err());
                    }
                }
                Op::Set(i, field, value) => {
                    let result = dto.set_machine_field(i, field, value.to_string());
                    if let Some(m) = reference.get_mut(i) {
                        m.set(field, value.to_string());
                        assert!(result.is_ok());
                    } else {
                        assert!(result.is_err());
                    }
                }
            }
            assert_eq!(dto.machinery, reference);
        }

        assert_eq!(dto.machinery.len(), 3);
    }

    #[test]
    fn test_field_enums_display_wire_names() {
        assert_eq!(BusinessField::CorporateId.to_string(), "corporateId");
        assert_eq!(BusinessFlag::OpenToNewBusiness.to_string(), "openToNewBusiness");
        assert_eq!(MachineField::YearOfManufacture.to_string(), "yearOfManufacture");
    }

    #[derive(Debug, Clone)]
    enum MachineOp {
        Add,
        Remove(usize),
        Set(usize, MachineField, String),
    }

    fn machine_op() -> impl Strategy<Value = MachineOp> {
        prop_oneof![
            Just(MachineOp::Add),
            (0usize..8).prop_map(MachineOp::Remove),
            (
                0usize..8,
                prop::sample::select(MachineField::ALL.to_vec()),
                "[a-z0-9]{0,4}",
            )
                .prop_map(|(i, field, value)| MachineOp::Set(i, field, value)),
        ]
    }

    proptest! {
        /// Любая последовательность add/remove/set даёт тот же список, что и эталонный Vec
        #[test]
        fn test_any_machinery_ops_match_reference_model(
            ops in prop::collection::vec(machine_op(), 0..48)
        ) {
            let mut dto = BusinessDto::default();
            let mut reference: Vec<MachineDto> = Vec::new();

            for op in ops {
                match op {
                    MachineOp::Add => {
                        let idx = dto.add_machine();
                        reference.push(MachineDto::default());
                        prop_assert_eq!(idx, reference.len() - 1);
                    }
                    MachineOp::Remove(i) => {
                        let result = dto.remove_machine(i);
                        if i < reference.len() {
                            let expected = reference.remove(i);
                            prop_assert_eq!(result, Ok(expected));
                        } else {
                            prop_assert!(result.is_err());
                        }
                    }
                    MachineOp::Set(i, field, value) => {
                        let result = dto.set_machine_field(i, field, value.clone());
                        match reference.get_mut(i) {
                            Some(m) => {
                                m.set(field, value);
                                prop_assert!(result.is_ok());
                            }
                            None => prop_assert!(result.is_err()),
                        }
                    }
                }
                prop_assert_eq!(&dto.machinery, &reference);
            }
        }
    }
}

use crate::libs::dob;

/// A stored student record.
///
/// Optional fields hold `None` when the column is NULL; they are never the
/// empty string. `dob` carries the stored `YYYY-MM-DD` text and is converted
/// to display form only at the presentation boundary.
#[derive(Debug, Clone)]
pub struct Student {
    pub id: Option<i64>,
    pub name: String,
    pub age: Option<i64>,
    pub grade: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub dob: Option<String>,
}

impl Student {
    /// Date of birth in display form (DD/MM/YYYY), blank when absent.
    pub fn dob_display(&self) -> String {
        self.dob.as_deref().map(dob::format).unwrap_or_default()
    }
}

/// Raw field values collected from the user before validation.
///
/// Every field is the text exactly as typed (trimmed); blanks mean "absent"
/// for the optional fields. Conversion to typed, `Option`-based values
/// happens once, inside the data layer, after validation.
#[derive(Debug, Clone, Default)]
pub struct StudentForm {
    pub name: String,
    pub age: String,
    pub grade: String,
    pub phone: String,
    pub address: String,
    pub dob: String,
}

impl StudentForm {
    pub fn new(name: &str, age: &str, grade: &str, phone: &str, address: &str, dob: &str) -> Self {
        StudentForm {
            name: name.trim().to_string(),
            age: age.trim().to_string(),
            grade: grade.trim().to_string(),
            phone: phone.trim().to_string(),
            address: address.trim().to_string(),
            dob: dob.trim().to_string(),
        }
    }

    /// Pre-fills a form with a stored record's displayed values, the way a
    /// row selection copies values back into the entry fields.
    pub fn from_student(student: &Student) -> Self {
        StudentForm {
            name: student.name.clone(),
            age: student.age.map(|a| a.to_string()).unwrap_or_default(),
            grade: student.grade.clone().unwrap_or_default(),
            phone: student.phone.clone().unwrap_or_default(),
            address: student.address.clone().unwrap_or_default(),
            dob: student.dob_display(),
        }
    }
}

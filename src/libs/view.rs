use super::student::Student;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders student records as a terminal table.
    ///
    /// Absent fields render blank and the date of birth appears in its
    /// DD/MM/YYYY display form, matching the register's row shape.
    pub fn students(students: &[Student]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "AGE", "GRADE", "PHONE", "ADDRESS", "DOB"]);
        for student in students {
            table.add_row(row![
                student.id.unwrap_or(0),
                student.name,
                student.age.map(|a| a.to_string()).unwrap_or_default(),
                student.grade.as_deref().unwrap_or(""),
                student.phone.as_deref().unwrap_or(""),
                student.address.as_deref().unwrap_or(""),
                student.dob_display()
            ]);
        }
        table.printstd();

        Ok(())
    }
}

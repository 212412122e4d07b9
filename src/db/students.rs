use super::db::Db;
use crate::libs::config::DbConfig;
use crate::libs::dob;
use crate::libs::student::{Student, StudentForm};
use crate::libs::validation::{self, ValidationError};
use anyhow::Result;
use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};

const SELECT_FIELDS: &str = "SELECT id, name, age, grade, phone, address, dob FROM students";
const SELECT_ALL_STUDENTS: &str = "SELECT id, name, age, grade, phone, address, dob FROM students ORDER BY id";
const SELECT_STUDENT_BY_ID: &str = "SELECT id, name, age, grade, phone, address, dob FROM students WHERE id = ?1";
const INSERT_STUDENT: &str = "INSERT INTO students (name, age, grade, phone, address, dob) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const UPDATE_STUDENT: &str = "UPDATE students SET name = ?2, age = ?3, grade = ?4, phone = ?5, address = ?6, dob = ?7 WHERE id = ?1";
const DELETE_STUDENT: &str = "DELETE FROM students WHERE id = ?1";
const WHERE_NUMERIC: &str = "WHERE id = ?1 OR age = ?1 OR name LIKE ?2 OR grade LIKE ?2 OR phone LIKE ?2 OR address LIKE ?2 ORDER BY id";
const WHERE_TEXT: &str = "WHERE name LIKE ?1 OR grade LIKE ?1 OR phone LIKE ?1 OR address LIKE ?1 ORDER BY id";

/// Form fields after validation: typed, with blanks collapsed to `None`.
struct ValidatedFields {
    name: String,
    age: Option<i64>,
    grade: Option<String>,
    phone: Option<String>,
    address: Option<String>,
    dob: Option<NaiveDate>,
}

pub struct Students {
    conn: Connection,
}

impl Students {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Opens the student table in an explicitly configured database.
    pub fn with_config(config: &DbConfig) -> Result<Self> {
        let db = Db::with_config(config)?;
        Ok(Self { conn: db.conn })
    }

    /// Inserts a new record and returns the generated id.
    ///
    /// Validation runs before the write, so a rejected form performs no
    /// insert at all.
    pub fn insert(&mut self, form: &StudentForm) -> Result<i64> {
        let fields = Self::validated(form)?;
        self.conn
            .execute(INSERT_STUDENT, params![fields.name, fields.age, fields.grade, fields.phone, fields.address, fields.dob])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Updates all mutable fields of a record in one statement.
    ///
    /// Returns the affected-row count; 0 means no record has that id and
    /// nothing was changed. The caller decides how to report it.
    pub fn update(&mut self, id: i64, form: &StudentForm) -> Result<usize> {
        let fields = Self::validated(form)?;
        let affected = self
            .conn
            .execute(UPDATE_STUDENT, params![id, fields.name, fields.age, fields.grade, fields.phone, fields.address, fields.dob])?;
        Ok(affected)
    }

    /// Deletes a record. Deleting a missing id is a no-op returning 0.
    pub fn delete(&mut self, id: i64) -> Result<usize> {
        let affected = self.conn.execute(DELETE_STUDENT, params![id])?;
        Ok(affected)
    }

    /// Every record, ordered by ascending id.
    pub fn fetch_all(&mut self) -> Result<Vec<Student>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_STUDENTS)?;
        let student_iter = stmt.query_map([], Self::map_row)?;

        let mut students = Vec::new();
        for student in student_iter {
            students.push(student?);
        }
        Ok(students)
    }

    /// Records matching a search query, ordered by ascending id.
    ///
    /// An all-digit query matches id or age exactly as well as substrings of
    /// the text fields; any other query matches substrings only. Matching is
    /// case-insensitive and partial. Rejecting an empty query is the
    /// caller's responsibility.
    pub fn search(&mut self, query: &str) -> Result<Vec<Student>> {
        let like = format!("%{}%", query);
        // A digit string too large for i64 falls back to text matching
        let numeric = if validation::is_digits(query) { query.parse::<i64>().ok() } else { None };

        let mut students = Vec::new();
        match numeric {
            Some(n) => {
                let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_FIELDS, WHERE_NUMERIC))?;
                let student_iter = stmt.query_map(params![n, like], Self::map_row)?;
                for student in student_iter {
                    students.push(student?);
                }
            }
            None => {
                let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_FIELDS, WHERE_TEXT))?;
                let student_iter = stmt.query_map(params![like], Self::map_row)?;
                for student in student_iter {
                    students.push(student?);
                }
            }
        }
        Ok(students)
    }

    /// Fetches a single record by id.
    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Student>> {
        self.conn.query_row(SELECT_STUDENT_BY_ID, params![id], Self::map_row).optional().map_err(Into::into)
    }

    fn map_row(row: &Row<'_>) -> rusqlite::Result<Student> {
        Ok(Student {
            id: row.get(0)?,
            name: row.get(1)?,
            age: row.get(2)?,
            grade: row.get(3)?,
            phone: row.get(4)?,
            address: row.get(5)?,
            dob: row.get(6)?,
        })
    }

    /// Applies the shared field rules, parses the date of birth and
    /// collapses blank optional fields to `None`.
    fn validated(form: &StudentForm) -> Result<ValidatedFields, ValidationError> {
        validation::validate_fields(form)?;

        let age = match form.age.trim() {
            "" => None,
            text => Some(text.parse::<i64>().map_err(|_| ValidationError::AgeNotNumeric)?),
        };
        let dob = match form.dob.trim() {
            "" => None,
            text => Some(dob::parse(text)?),
        };

        Ok(ValidatedFields {
            name: form.name.trim().to_string(),
            age,
            grade: Self::blank_to_none(&form.grade),
            phone: Self::blank_to_none(&form.phone),
            address: Self::blank_to_none(&form.address),
            dob,
        })
    }

    fn blank_to_none(text: &str) -> Option<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

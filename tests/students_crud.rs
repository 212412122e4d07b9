#[cfg(test)]
mod tests {
    use rollbook::db::students::Students;
    use rollbook::libs::student::StudentForm;
    use std::sync::{Mutex, MutexGuard, OnceLock};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // Tests redirect HOME/LOCALAPPDATA, so they must not run concurrently
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    struct StudentTestContext {
        _temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for StudentTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            StudentTestContext {
                _temp_dir: temp_dir,
                _guard: guard,
            }
        }
    }

    #[test_context(StudentTestContext)]
    #[test]
    fn test_insert_and_fetch_all(_ctx: &mut StudentTestContext) {
        let mut students = Students::new().unwrap();

        let form = StudentForm::new("Alice", "12", "5", "555", "X", "01/01/2012");
        let id = students.insert(&form).unwrap();
        assert!(id > 0);

        let all = students.fetch_all().unwrap();
        assert_eq!(all.len(), 1);
        let row = &all[0];
        assert_eq!(row.id, Some(id));
        assert_eq!(row.name, "Alice");
        assert_eq!(row.age, Some(12));
        assert_eq!(row.grade, Some("5".to_string()));
        assert_eq!(row.phone, Some("555".to_string()));
        assert_eq!(row.address, Some("X".to_string()));
        assert_eq!(row.dob_display(), "01/01/2012");
    }

    #[test_context(StudentTestContext)]
    #[test]
    fn test_blank_optional_fields_stored_as_absent(_ctx: &mut StudentTestContext) {
        let mut students = Students::new().unwrap();

        let form = StudentForm::new("Bob", "", "", "", "", "");
        let id = students.insert(&form).unwrap();

        let row = students.get_by_id(id).unwrap().unwrap();
        assert_eq!(row.age, None);
        assert_eq!(row.grade, None);
        assert_eq!(row.phone, None);
        assert_eq!(row.address, None);
        assert_eq!(row.dob, None);
        // Absent renders blank at the presentation boundary
        assert_eq!(row.dob_display(), "");
    }

    #[test_context(StudentTestContext)]
    #[test]
    fn test_fetch_all_ordered_by_ascending_id(_ctx: &mut StudentTestContext) {
        let mut students = Students::new().unwrap();

        for name in ["Carol", "Dave", "Erin"] {
            let form = StudentForm::new(name, "", "", "", "", "");
            students.insert(&form).unwrap();
        }

        let all = students.fetch_all().unwrap();
        assert_eq!(all.len(), 3);
        let ids: Vec<i64> = all.iter().filter_map(|s| s.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test_context(StudentTestContext)]
    #[test]
    fn test_update_changes_all_fields(_ctx: &mut StudentTestContext) {
        let mut students = Students::new().unwrap();

        let form = StudentForm::new("Alice", "12", "5", "555", "X", "01/01/2012");
        let id = students.insert(&form).unwrap();

        let updated = StudentForm::new("Alicia", "13", "6", "777", "Y", "02/03/2011");
        let affected = students.update(id, &updated).unwrap();
        assert_eq!(affected, 1);

        let row = students.get_by_id(id).unwrap().unwrap();
        assert_eq!(row.id, Some(id));
        assert_eq!(row.name, "Alicia");
        assert_eq!(row.age, Some(13));
        assert_eq!(row.grade, Some("6".to_string()));
        assert_eq!(row.phone, Some("777".to_string()));
        assert_eq!(row.address, Some("Y".to_string()));
        assert_eq!(row.dob_display(), "02/03/2011");
    }

    #[test_context(StudentTestContext)]
    #[test]
    fn test_update_can_clear_optional_fields(_ctx: &mut StudentTestContext) {
        let mut students = Students::new().unwrap();

        let form = StudentForm::new("Alice", "12", "5", "555", "X", "01/01/2012");
        let id = students.insert(&form).unwrap();

        let cleared = StudentForm::new("Alice", "", "", "", "", "");
        students.update(id, &cleared).unwrap();

        let row = students.get_by_id(id).unwrap().unwrap();
        assert_eq!(row.age, None);
        assert_eq!(row.dob, None);
    }

    #[test_context(StudentTestContext)]
    #[test]
    fn test_update_missing_id_affects_nothing(_ctx: &mut StudentTestContext) {
        let mut students = Students::new().unwrap();

        let form = StudentForm::new("Alice", "12", "", "", "", "");
        let id = students.insert(&form).unwrap();

        let other = StudentForm::new("Nobody", "", "", "", "", "");
        let affected = students.update(id + 100, &other).unwrap();
        assert_eq!(affected, 0);

        // The existing record is untouched
        let row = students.get_by_id(id).unwrap().unwrap();
        assert_eq!(row.name, "Alice");
    }

    #[test_context(StudentTestContext)]
    #[test]
    fn test_delete_removes_record(_ctx: &mut StudentTestContext) {
        let mut students = Students::new().unwrap();

        let form = StudentForm::new("Alice", "", "", "", "", "");
        let id = students.insert(&form).unwrap();

        let affected = students.delete(id).unwrap();
        assert_eq!(affected, 1);

        assert!(students.get_by_id(id).unwrap().is_none());
        let all = students.fetch_all().unwrap();
        assert!(all.iter().all(|s| s.id != Some(id)));
    }

    #[test_context(StudentTestContext)]
    #[test]
    fn test_delete_missing_id_is_idempotent(_ctx: &mut StudentTestContext) {
        let mut students = Students::new().unwrap();

        let form = StudentForm::new("Alice", "", "", "", "", "");
        let id = students.insert(&form).unwrap();

        let affected = students.delete(id + 100).unwrap();
        assert_eq!(affected, 0);

        // No existing record was altered
        let all = students.fetch_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Alice");
    }

    #[test_context(StudentTestContext)]
    #[test]
    fn test_explicit_db_config_selects_database_file(_ctx: &mut StudentTestContext) {
        use rollbook::libs::config::DbConfig;

        let config = DbConfig {
            file: "register-a.db".to_string(),
        };
        let mut students_a = Students::with_config(&config).unwrap();
        students_a.insert(&StudentForm::new("Alice", "", "", "", "", "")).unwrap();

        // A differently configured database starts empty
        let other = DbConfig {
            file: "register-b.db".to_string(),
        };
        let mut students_b = Students::with_config(&other).unwrap();
        assert!(students_b.fetch_all().unwrap().is_empty());
        assert_eq!(students_a.fetch_all().unwrap().len(), 1);
    }

    #[test_context(StudentTestContext)]
    #[test]
    fn test_bootstrap_is_idempotent(_ctx: &mut StudentTestContext) {
        let mut students = Students::new().unwrap();
        let form = StudentForm::new("Alice", "", "", "", "", "");
        students.insert(&form).unwrap();
        drop(students);

        // Re-opening runs the schema bootstrap again and keeps the data
        let mut students = Students::new().unwrap();
        assert_eq!(students.fetch_all().unwrap().len(), 1);
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    // === STUDENT MESSAGES ===
    StudentAdded(i64),
    StudentUpdated(i64),
    StudentDeleted(i64),
    StudentNotFound(String),
    NoStudentsFound,
    StudentListHeader,
    EditingStudent(String),

    // === SEARCH MESSAGES ===
    SearchResultsHeader(String),
    NoSearchResults(String),
    EmptySearchQuery,

    // === FORM MESSAGES ===
    SelectFormAction,
    SelectStudentToEdit,
    SelectStudentToDelete,
    ConfirmDeleteStudent(i64, String),
    FormCleared,
    OperationCancelled,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,

    // === FILE SYSTEM MESSAGES ===
    DataStoragePathError,

    // === PROMPTS ===
    PromptName,
    PromptAge,
    PromptGrade,
    PromptPhone,
    PromptAddress,
    PromptDob,
    PromptSearchQuery,
}

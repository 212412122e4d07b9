#[cfg(test)]
mod tests {
    use rollbook::libs::messages::Message;
    use rollbook::msg_error_anyhow;

    #[test]
    fn test_student_messages_format() {
        assert_eq!(Message::StudentAdded(7).to_string(), "Student #7 added");
        assert_eq!(Message::StudentUpdated(7).to_string(), "Student #7 updated");
        assert_eq!(Message::StudentDeleted(7).to_string(), "Student #7 deleted");
        assert_eq!(Message::StudentNotFound("9".to_string()).to_string(), "No student with id 9");
    }

    #[test]
    fn test_search_messages_carry_the_query() {
        assert_eq!(Message::SearchResultsHeader("ali".to_string()).to_string(), "🔍 Results for 'ali'");
        assert_eq!(Message::NoSearchResults("zzz".to_string()).to_string(), "No students match 'zzz'");
    }

    #[test]
    fn test_data_storage_path_error_becomes_anyhow_error() {
        let err = msg_error_anyhow!(Message::DataStoragePathError);
        assert_eq!(err.to_string(), "❌ Failed to resolve application data directory");
    }
}

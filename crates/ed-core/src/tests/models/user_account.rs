use crate::UserAccount;

#[test]
fn test_from_row_reads_three_columns() {
    let row: Vec<String> = ["a@x.com", "sha256$ab$cd", "user-1"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let account = UserAccount::from_row(&row).unwrap();
    assert_eq!(account.email, "a@x.com");
    assert_eq!(account.password, "sha256$ab$cd");
    assert_eq!(account.user_id, "user-1");
}

#[test]
fn test_from_row_ignores_incomplete_rows() {
    let row: Vec<String> = ["a@x.com", "sha256$ab$cd"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    assert!(UserAccount::from_row(&row).is_none());
}

#[test]
fn test_row_round_trip() {
    let account = UserAccount {
        email: "a@x.com".to_string(),
        password: "sha256$ab$cd".to_string(),
        user_id: "user-1".to_string(),
    };

    assert_eq!(UserAccount::from_row(&account.to_row()), Some(account));
}

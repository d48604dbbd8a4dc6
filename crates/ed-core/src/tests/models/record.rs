use crate::{CoreError, Position, RECORD_HEADER, Record};

fn sample_record() -> Record {
    Record {
        timestamp: "2025-03-14-09:26".to_string(),
        emotion: "기쁨".to_string(),
        category: "일상".to_string(),
        text: "오늘 하루는 평온했다".to_string(),
        position: Position::new(1.5, -2.0, 0.25),
    }
}

#[test]
fn test_to_row_layout() {
    let row = sample_record().to_row();

    assert_eq!(row.len(), 7);
    assert_eq!(row[0], "2025-03-14-09:26");
    assert_eq!(row[1], "기쁨");
    assert_eq!(row[2], "일상");
    assert_eq!(row[3], "오늘 하루는 평온했다");
    assert_eq!(row[4], "1.5");
    assert_eq!(row[5], "-2");
    assert_eq!(row[6], "0.25");
}

#[test]
fn test_row_round_trip() {
    let record = sample_record();
    let decoded = Record::from_row(&record.to_row()).unwrap();

    assert_eq!(decoded, record);
}

#[test]
fn test_from_row_rejects_short_row() {
    let row: Vec<String> = ["2025-03-14-09:26", "기쁨", "일상"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let err = Record::from_row(&row).unwrap_err();
    assert!(matches!(err, CoreError::ShortRow { actual: 3, .. }));
}

#[test]
fn test_from_row_rejects_bad_position() {
    let mut row = sample_record().to_row();
    row[5] = "not-a-number".to_string();

    let err = Record::from_row(&row).unwrap_err();
    assert!(matches!(err, CoreError::InvalidNumber { column: "y", .. }));
}

#[test]
fn test_header_row_detection() {
    let header: Vec<String> = RECORD_HEADER.iter().map(|s| s.to_string()).collect();
    assert!(Record::is_header_row(&header));

    let data = sample_record().to_row();
    assert!(!Record::is_header_row(&data));

    let short: Vec<String> = RECORD_HEADER[..4].iter().map(|s| s.to_string()).collect();
    assert!(!Record::is_header_row(&short));
}

#[test]
fn test_record_serializes_with_nested_position() {
    let json = serde_json::to_value(sample_record()).unwrap();

    assert_eq!(json["timestamp"], "2025-03-14-09:26");
    assert_eq!(json["position"]["x"], 1.5);
    assert_eq!(json["position"]["z"], 0.25);
}

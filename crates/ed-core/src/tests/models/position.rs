use crate::Position;

#[test]
fn test_position_json_round_trip() {
    let position = Position::new(0.5, 12.0, -3.25);

    let json = serde_json::to_string(&position).unwrap();
    let back: Position = serde_json::from_str(&json).unwrap();

    assert_eq!(back, position);
}

#[test]
fn test_position_deserializes_from_object() {
    let position: Position = serde_json::from_str(r#"{"x":1.0,"y":2.0,"z":3.0}"#).unwrap();

    assert_eq!(position, Position::new(1.0, 2.0, 3.0));
}

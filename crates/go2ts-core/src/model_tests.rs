use crate::model::{Field, PrimitiveKind, StructRecord, Type};

#[test]
fn primitive_display() {
    assert_eq!(Type::STRING.to_string(), "string");
    assert_eq!(Type::NUMBER.to_string(), "number");
}

#[test]
fn nullable_display() {
    assert_eq!(Type::nullable(Type::NUMBER).to_string(), "number | null");
}

#[test]
fn array_display() {
    assert_eq!(Type::array(Type::STRING).to_string(), "(string)[]");
}

#[test]
fn wrappers_compose() {
    let nullable_array = Type::nullable(Type::array(Type::STRING));
    assert_eq!(nullable_array.to_string(), "(string)[] | null");

    let array_of_nullable = Type::array(Type::nullable(Type::STRING));
    assert_eq!(array_of_nullable.to_string(), "(string | null)[]");
}

#[test]
fn structural_equality() {
    assert_eq!(
        Type::nullable(Type::array(Type::NUMBER)),
        Type::Nullable(Box::new(Type::Array(Box::new(Type::Primitive(
            PrimitiveKind::Number
        )))))
    );
    assert_ne!(Type::nullable(Type::STRING), Type::array(Type::STRING));
}

#[test]
fn field_display() {
    let field = Field::new("age", Type::nullable(Type::NUMBER));
    assert_eq!(field.to_string(), "age: number | null;");
}

#[test]
fn record_display() {
    let record = StructRecord::new(
        "PointerRequest",
        vec![
            Field::new("age", Type::nullable(Type::NUMBER)),
            Field::new("ids", Type::array(Type::STRING)),
        ],
        true,
    );
    assert_eq!(
        record.to_string(),
        "export type PointerRequest = {\n  age: number | null;\n  ids: (string)[];\n};\n"
    );
}

#[test]
fn empty_record_display() {
    let record = StructRecord::new("Empty", Vec::new(), false);
    assert!(record.fields.is_empty());
    assert_eq!(record.to_string(), "type Empty = {\n};\n");
}

#[test]
fn record_serializes_to_json() {
    let record = StructRecord::new(
        "Req",
        vec![Field::new("ids", Type::array(Type::nullable(Type::STRING)))],
        true,
    );
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "name": "Req",
            "fields": [
                { "name": "ids", "type": { "array": { "nullable": { "primitive": "string" } } } }
            ],
            "exported": true
        })
    );
}

#[test]
fn field_display_quotes_non_identifier_names() {
    let field = Field::new("user-id", Type::STRING);
    assert_eq!(field.to_string(), "\"user-id\": string;");

    let field = Field::new("$ref", Type::STRING);
    assert_eq!(field.to_string(), "$ref: string;");
}

use safenum::{SafeFloat, SafeInteger};

#[test]
fn deserializes_safe_integer_from_string() {
    let value: SafeInteger = serde_json::from_str("\"-1099511627776\"").expect("safe integer");
    assert_eq!(value.get(), -1_099_511_627_776);
}

#[test]
fn rejects_unsafe_integer_with_strict_message() {
    let error = serde_json::from_str::<SafeInteger>("\"9007199254740992\"").unwrap_err();
    assert!(
        error
            .to_string()
            .contains("cannot be parsed to a safe integer"),
        "{error}"
    );
}

#[test]
fn rejects_json_numbers() {
    assert!(serde_json::from_str::<SafeInteger>("42").is_err());
    assert!(serde_json::from_str::<SafeFloat>("0.5").is_err());
}

#[test]
fn deserializes_safe_float_fields_in_structs() {
    #[derive(serde::Deserialize)]
    struct Reading {
        value: SafeFloat,
        count: SafeInteger,
    }

    let reading: Reading =
        serde_json::from_str(r#"{"value": "1.7e-308", "count": "00003"}"#).expect("exact");
    assert_eq!(reading.value.get(), 1.7e-308);
    assert_eq!(reading.count.get(), 3);

    let lossy = serde_json::from_str::<Reading>(r#"{"value": "0.1000000000000001", "count": "1"}"#);
    assert!(lossy.is_err());
}

#[test]
fn serializes_as_strings() {
    let float: SafeFloat = "123.e53".parse().expect("exact");
    assert_eq!(serde_json::to_string(&float).expect("serialize"), "\"1.23e55\"");

    let integer: SafeInteger = "-000".parse().expect("safe");
    assert_eq!(serde_json::to_string(&integer).expect("serialize"), "\"0\"");
}

#[test]
fn serialized_values_deserialize_to_the_same_bits() {
    for text in ["0.1", "-0.", "17e307", "0.17e-309", "1234567890"] {
        let value: SafeFloat = text.parse().expect(text);
        let json = serde_json::to_string(&value).expect("serialize");
        let back: SafeFloat = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.get().to_bits(), value.get().to_bits(), "{text:?}");
    }
}

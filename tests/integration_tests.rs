use serde::{Deserialize, Serialize};
use serde_mjon::{
    decode, encode, from_str, from_value, to_string, to_string_with_options, to_value, MjonOptions,
    MjonValue, Number,
};
use std::collections::BTreeMap;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    active: bool,
    tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Product {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Order {
    order_id: u32,
    customer: User,
    items: Vec<Product>,
    total: f64,
    note: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
enum Shape {
    Point,
    Circle(f64),
    Rect { w: u32, h: u32 },
}

fn assert_roundtrip<T>(value: &T)
where
    T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug,
{
    let mjon = to_string(value).unwrap();
    let back: T = from_str(&mjon).unwrap();
    assert_eq!(*value, back, "roundtrip failed for:\n{}", mjon);
}

fn sample_order(note: Option<String>) -> Order {
    Order {
        order_id: 12345,
        customer: User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["vip".to_string()],
        },
        items: vec![
            Product {
                sku: "WIDGET-001".to_string(),
                price: 29.99,
                quantity: 2,
            },
            Product {
                sku: "GADGET-002".to_string(),
                price: 49.5,
                quantity: 1,
            },
        ],
        total: 109.48,
        note,
    }
}

#[test]
fn test_simple_struct() {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        active: true,
        tags: vec!["admin".to_string(), "developer".to_string()],
    };

    let mjon = to_string(&user).unwrap();
    assert_eq!(
        mjon,
        "@id: 123\n@name: Alice\n@active: true\n@tags:\n  * admin\n  * developer"
    );
    assert_roundtrip(&user);
}

#[test]
fn test_nested_struct() {
    let order = sample_order(Some("leave at the door".to_string()));
    let mjon = to_string(&order).unwrap();
    println!("Order MJON:\n{}", mjon);

    assert!(mjon.contains("@customer:\n  @id: 123"));
    assert!(mjon.contains("@items:\n  *\n    @sku: WIDGET-001"));
    assert_roundtrip(&order);
}

#[test]
fn test_none_field_is_omitted() {
    let order = sample_order(None);
    let mjon = to_string(&order).unwrap();
    assert!(!mjon.contains("@note"));
    assert_roundtrip(&order);
}

#[test]
fn test_enums() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Canvas {
        shapes: Vec<Shape>,
    }

    let canvas = Canvas {
        shapes: vec![Shape::Point, Shape::Circle(1.5), Shape::Rect { w: 3, h: 4 }],
    };
    let mjon = to_string(&canvas).unwrap();
    assert_eq!(
        mjon,
        "@shapes:\n  * Point\n  *\n    @Circle: 1.5\n  *\n    @Rect:\n      @w: 3\n      @h: 4"
    );
    assert_roundtrip(&canvas);
}

#[test]
fn test_numeric_looking_string_field_is_lenient() {
    #[derive(Deserialize, Debug, PartialEq)]
    struct Release {
        version: String,
        build: String,
        stable: String,
    }

    let release: Release = from_str("@version: 2.5\n@build: 42\n@stable: TRUE").unwrap();
    assert_eq!(release.version, "2.5");
    assert_eq!(release.build, "42");
    assert_eq!(release.stable, "true");
}

#[test]
fn test_integer_into_float_field() {
    #[derive(Deserialize, Debug, PartialEq)]
    struct Reading {
        value: f64,
    }

    let reading: Reading = from_str("@value: 3").unwrap();
    assert_eq!(reading.value, 3.0);
}

#[test]
fn test_type_mismatch_is_reported() {
    #[derive(Deserialize, Debug)]
    #[allow(dead_code)]
    struct Counter {
        count: u32,
    }

    assert!(from_str::<Counter>("@count: many").is_err());
}

#[test]
fn test_map_with_integer_keys() {
    let mut scores = BTreeMap::new();
    scores.insert(1u32, "gold".to_string());
    scores.insert(2u32, "silver".to_string());

    let mjon = to_string(&scores).unwrap();
    assert_eq!(mjon, "@1: gold\n@2: silver");
    assert_roundtrip(&scores);
}

#[test]
fn test_list_of_lists() {
    let grid = vec![vec![1, 2], vec![3, 4]];
    assert_eq!(to_string(&grid).unwrap(), "*\n  * 1\n  * 2\n*\n  * 3\n  * 4");
    assert_roundtrip(&grid);
}

#[test]
fn test_custom_indent_still_decodes() {
    let order = sample_order(None);
    let options = MjonOptions::new().with_indent(4);
    let mjon = to_string_with_options(&order, options).unwrap();
    assert!(mjon.contains("@customer:\n    @id: 123"));

    let back: Order = from_str(&mjon).unwrap();
    assert_eq!(order, back);
}

#[test]
fn test_zero_indent_still_decodes() {
    let order = sample_order(None);
    let mjon = to_string_with_options(&order, MjonOptions::new().with_indent(0)).unwrap();
    let back: Order = from_str(&mjon).unwrap();
    assert_eq!(order, back);
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Settings {
    theme: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Profile {
    id: u32,
    tags: Vec<String>,
    scores: BTreeMap<String, i32>,
    settings: Settings,
}

#[test]
fn test_empty_collections_roundtrip() {
    let profile = Profile {
        id: 1,
        tags: vec![],
        scores: BTreeMap::new(),
        settings: Settings { theme: None },
    };
    let mjon = to_string(&profile).unwrap();
    assert_eq!(mjon, "@id: 1\n@tags:\n@scores:\n@settings:");
    assert_roundtrip(&profile);
}

#[test]
fn test_empty_vec_next_to_filled_one() {
    let user = User {
        id: 1,
        name: "Bob".to_string(),
        active: false,
        tags: vec![],
    };
    assert_roundtrip(&user);
}

#[test]
fn test_char_fields() {
    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Grade {
        digit: char,
        letter: char,
        flag: char,
    }

    let grade = Grade {
        digit: '7',
        letter: 'B',
        flag: 'é',
    };
    assert_roundtrip(&grade);
}

#[test]
fn test_to_value_and_from_value() {
    let user = User {
        id: 7,
        name: "Bob".to_string(),
        active: false,
        tags: vec!["ops".to_string()],
    };

    let value = to_value(&user).unwrap();
    assert_eq!(value.get("id"), Some(&MjonValue::Number(Number::Integer(7))));
    assert_eq!(value.get("active"), Some(&MjonValue::Bool(false)));

    let back: User = from_value(value).unwrap();
    assert_eq!(user, back);
}

#[test]
fn test_dynamic_and_typed_agree() {
    let order = sample_order(None);
    let text = to_string(&order).unwrap();
    assert_eq!(encode(&decode(&text).unwrap(), 0), text);
}

#[test]
fn test_matches_json_model() {
    let json = serde_json::json!({
        "summary": "compact format",
        "meta": { "version": 1.5, "timestamp": 1716361440 },
        "tags": ["compression", "nesting"],
        "steps": [
            { "order": 1, "action": "build" },
            { "order": 2, "action": "ship" }
        ]
    });

    let from_json: MjonValue = serde_json::from_value(json.clone()).unwrap();
    let decoded = decode(&encode(&from_json, 0)).unwrap();
    assert_eq!(decoded, from_json);

    let back_to_json = serde_json::to_value(&decoded).unwrap();
    assert_eq!(back_to_json, json);
}

use std::collections::HashMap;

use serde_json::json;

use super::to_json;
use crate::sdk::{ErrorClass, MapError, Mapper, Model, NullLogger, Object, Registry, ScalarList, ScalarMap, Value};

#[derive(Debug, Default, PartialEq, Model)]
struct Simple {
	#[hcl(name = "string")]
	string: String,
	#[hcl(name = "number")]
	number: i32,
	#[hcl(name = "price")]
	price: f64,
	#[hcl(name = "enabled")]
	enabled: bool,
	#[hcl(name = "list_of_numbers")]
	list_of_numbers: Vec<i32>,
	#[hcl(name = "map_of_strings")]
	map_of_strings: HashMap<String, String>,
}

#[derive(Debug, Default, PartialEq, Model)]
struct Inner {
	#[hcl(name = "value")]
	value: String,
}

#[derive(Debug, Default, PartialEq, Model)]
struct Wrapper {
	#[hcl(name = "inner")]
	inner: Vec<Inner>,
	#[hcl(name = "tags")]
	tags: Vec<String>,
}

fn scenario() -> Simple {
	Simple {
		string: "world".to_owned(),
		number: 42,
		price: 129.99,
		enabled: true,
		list_of_numbers: vec![1, 2, 3],
		map_of_strings: HashMap::from([("hello".to_owned(), "there".to_owned())]),
	}
}

#[test]
fn encoded_tree_renders_natural_json() {
	let registry = Registry::new();
	let mapper = Mapper::new(&registry, &NullLogger);
	let tree = mapper.encode(&scenario()).expect("encode succeeds");
	assert_eq!(
		to_json(&tree).expect("serializes"),
		json!({
			"string": "world",
			"number": 42,
			"price": 129.99,
			"enabled": true,
			"list_of_numbers": [1, 2, 3],
			"map_of_strings": { "hello": "there" },
		})
	);
}

#[test]
fn json_state_decodes_through_the_shape() {
	let registry = Registry::new();
	let mapper = Mapper::new(&registry, &NullLogger);
	let state = json!({
		"string": "world",
		"number": 42,
		"price": 129.99,
		"enabled": true,
		"list_of_numbers": [1, 2, 3],
		"map_of_strings": { "hello": "there" },
	});
	assert_eq!(mapper.decode_json::<Simple>(&state).expect("decode succeeds"), scenario());
	assert_eq!(mapper.encode_json(&scenario()).expect("encode succeeds"), state);
}

#[test]
fn integers_are_accepted_for_float_fields() {
	let registry = Registry::new();
	let mapper = Mapper::new(&registry, &NullLogger);
	let object = mapper.object_from_json::<Simple>(&json!({ "price": 130 })).expect("converts");
	assert_eq!(object.get("price"), Some(&Value::Float(130.0)));
}

#[test]
fn floats_are_rejected_for_integer_fields() {
	let registry = Registry::new();
	let mapper = Mapper::new(&registry, &NullLogger);
	match mapper.object_from_json::<Simple>(&json!({ "number": 4.5 })) {
		Err(MapError::TypeMismatch { tag, expected, actual }) => {
			assert_eq!(tag, "number");
			assert_eq!(expected, "integer");
			assert_eq!(actual, "float");
		}
		other => panic!("unexpected result: {other:?}"),
	}
}

#[test]
fn null_and_missing_keys_are_absent() {
	let registry = Registry::new();
	let mapper = Mapper::new(&registry, &NullLogger);
	let object = mapper
		.object_from_json::<Simple>(&json!({ "string": null, "enabled": true }))
		.expect("converts");
	assert_eq!(object.len(), 1);
	assert_eq!(object.get("enabled"), Some(&Value::Bool(true)));
}

#[test]
fn empty_arrays_take_the_shape_element_kind() {
	let registry = Registry::new();
	let mapper = Mapper::new(&registry, &NullLogger);
	let object = mapper
		.object_from_json::<Wrapper>(&json!({ "inner": [], "tags": [] }))
		.expect("converts");
	assert_eq!(object.get("inner"), Some(&Value::Objects(Vec::new())));
	assert_eq!(object.get("tags"), Some(&Value::List(ScalarList::String(Vec::new()))));
}

#[test]
fn non_object_documents_are_rejected() {
	let registry = Registry::new();
	let mapper = Mapper::new(&registry, &NullLogger);
	let err = mapper.object_from_json::<Simple>(&json!([1, 2])).expect_err("arrays are not state");
	assert!(matches!(err, MapError::NotAnObject { actual: "array" }));
}

#[test]
fn non_object_nested_elements_name_their_index() {
	let registry = Registry::new();
	let mapper = Mapper::new(&registry, &NullLogger);
	let err = mapper
		.object_from_json::<Wrapper>(&json!({ "inner": [{ "value": "a" }, "b"] }))
		.expect_err("second element is a string");
	match err {
		MapError::TypeMismatch { tag, expected, actual } => {
			assert_eq!(tag, "inner[1]");
			assert_eq!(expected, "object");
			assert_eq!(actual, "string");
		}
		other => panic!("unexpected error: {other}"),
	}
}

#[test]
fn malformed_nested_objects_report_nested_failure() {
	let registry = Registry::new();
	let mapper = Mapper::new(&registry, &NullLogger);
	let err = mapper
		.object_from_json::<Wrapper>(&json!({ "inner": [{ "value": "a" }, { "value": 7 }] }))
		.expect_err("nested value is not a string");
	assert!(matches!(err, MapError::NestedDecodeFailed { ref tag, index: 1, .. } if tag == "inner"));
	assert!(matches!(err.root_cause(), MapError::TypeMismatch { actual: "integer", .. }));
}

#[test]
fn list_elements_report_their_position() {
	let registry = Registry::new();
	let mapper = Mapper::new(&registry, &NullLogger);
	let err = mapper
		.object_from_json::<Simple>(&json!({ "list_of_numbers": [1, "two", 3] }))
		.expect_err("element is not an integer");
	assert!(matches!(err, MapError::TypeMismatch { ref tag, .. } if tag == "list_of_numbers[1]"));

	let err = mapper
		.object_from_json::<Simple>(&json!({ "map_of_strings": { "hello": false } }))
		.expect_err("map value is not a string");
	assert!(matches!(err, MapError::TypeMismatch { ref tag, .. } if tag == "map_of_strings.hello"));
}

#[test]
fn integers_beyond_i64_overflow() {
	let registry = Registry::new();
	let mapper = Mapper::new(&registry, &NullLogger);
	let err = mapper
		.object_from_json::<Simple>(&json!({ "number": u64::MAX }))
		.expect_err("does not fit in i64");
	match err {
		MapError::IntegerOverflow { tag, value, target } => {
			assert_eq!(tag, "number");
			assert_eq!(value, i128::from(u64::MAX));
			assert_eq!(target, "i64");
		}
		other => panic!("unexpected error: {other}"),
	}
}

#[test]
fn non_finite_floats_are_rejected_instead_of_rendered_as_null() {
	let top: Object = [("price".to_owned(), Value::Float(f64::NAN))].into_iter().collect();
	let err = to_json(&top).expect_err("NaN has no JSON form");
	assert!(matches!(err, MapError::NonFiniteFloat { ref tag, .. } if tag == "price"));
	assert_eq!(err.class(), ErrorClass::Json);

	let nested: Object = [(
		"inner".to_owned(),
		Value::Objects(vec![
			Object::new(),
			[("weights".to_owned(), Value::Map(ScalarMap::Float([("a".to_owned(), f64::INFINITY)].into_iter().collect())))]
				.into_iter()
				.collect(),
		]),
	)]
	.into_iter()
	.collect();
	match to_json(&nested) {
		Err(MapError::NonFiniteFloat { tag, value }) => {
			assert_eq!(tag, "inner[1].weights.a");
			assert_eq!(value, f64::INFINITY);
		}
		other => panic!("unexpected result: {other:?}"),
	}
}

#[test]
fn encode_json_surfaces_non_finite_fields() {
	let registry = Registry::new();
	let mapper = Mapper::new(&registry, &NullLogger);
	let input = Simple {
		price: f64::NEG_INFINITY,
		..Simple::default()
	};
	let err = mapper.encode_json(&input).expect_err("infinity has no JSON form");
	assert!(matches!(err, MapError::NonFiniteFloat { ref tag, .. } if tag == "price"));
}

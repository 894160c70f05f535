use std::collections::{BTreeMap, HashMap};

use crate::sdk::{ErrorClass, MapError, Mapper, Model, NullLogger, Object, Registry, ScalarKind, ScalarList, ScalarMap, Value, decode, encode};

#[derive(Debug, Default, Clone, PartialEq, Model)]
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
struct Narrow {
	#[hcl(name = "small")]
	small: u8,
	#[hcl(name = "ratio")]
	ratio: f32,
}

#[derive(Debug, Default, Clone, PartialEq, Model)]
struct Inner {
	#[hcl(name = "value")]
	value: String,
}

#[derive(Debug, Default, PartialEq, Model)]
struct Wrapper {
	#[hcl(name = "inner")]
	inner: Vec<Inner>,
}

#[derive(Debug, Default, PartialEq, Model)]
struct Second {
	#[hcl(name = "value")]
	value: String,
	#[hcl(name = "third")]
	third: Vec<Inner>,
}

#[derive(Debug, Default, PartialEq, Model)]
struct First {
	#[hcl(name = "value")]
	value: String,
	#[hcl(name = "second")]
	second: Vec<Second>,
}

#[derive(Debug, Default, PartialEq, Model)]
struct ThreeLevels {
	#[hcl(name = "first")]
	first: Vec<First>,
}

#[derive(Debug, Default, PartialEq, Model)]
struct WithUntagged {
	#[hcl(name = "name")]
	name: String,
	scratch: Vec<u64>,
}

fn object<const N: usize>(entries: [(&str, Value); N]) -> Object {
	entries.into_iter().map(|(key, value)| (key.to_owned(), value)).collect()
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
fn encoded_tree_decodes_back_to_the_same_value() {
	let tree = encode(&scenario()).expect("encode succeeds");
	let decoded: Simple = decode(&tree).expect("decode succeeds");
	assert_eq!(decoded, scenario());
}

#[test]
fn missing_keys_leave_defaults() {
	let node = object([("string", Value::from("only this"))]);
	let decoded: Simple = decode(&node).expect("decode succeeds");
	assert_eq!(
		decoded,
		Simple {
			string: "only this".to_owned(),
			..Simple::default()
		}
	);
}

#[test]
fn untagged_fields_are_left_alone() {
	let node = object([("name", Value::from("kept")), ("scratch", Value::from("ignored"))]);
	let decoded: WithUntagged = decode(&node).expect("decode succeeds");
	assert_eq!(decoded.name, "kept");
	assert!(decoded.scratch.is_empty());
}

#[test]
fn unknown_keys_are_ignored() {
	let node = object([("value", Value::from("a")), ("extra", Value::Int(1))]);
	let decoded: Inner = decode(&node).expect("decode succeeds");
	assert_eq!(decoded.value, "a");
}

#[test]
fn scalar_kind_mismatch_names_tag_and_kinds() {
	let node = object([("number", Value::from("forty-two"))]);
	match decode::<Simple>(&node) {
		Err(MapError::TypeMismatch { tag, expected, actual }) => {
			assert_eq!(tag, "number");
			assert_eq!(expected, "integer");
			assert_eq!(actual, "string");
		}
		other => panic!("unexpected result: {other:?}"),
	}
}

#[test]
fn empty_list_of_the_wrong_element_kind_is_a_mismatch() {
	let node = object([("list_of_numbers", Value::List(ScalarList::empty(ScalarKind::String)))]);
	let err = decode::<Simple>(&node).expect_err("element kinds differ");
	assert!(matches!(err, MapError::TypeMismatch { ref tag, .. } if tag == "list_of_numbers"));
	assert_eq!(err.class(), ErrorClass::Conversion);
}

#[test]
fn map_of_the_wrong_value_kind_is_a_mismatch() {
	let node = object([("map_of_strings", Value::Map(ScalarMap::empty(ScalarKind::Bool)))]);
	match decode::<Simple>(&node) {
		Err(MapError::TypeMismatch { expected, actual, .. }) => {
			assert_eq!(expected, "map of string");
			assert_eq!(actual, "map of bool");
		}
		other => panic!("unexpected result: {other:?}"),
	}
}

#[test]
fn integer_narrowing_reports_overflow() {
	let node = object([("small", Value::Int(300))]);
	match decode::<Narrow>(&node) {
		Err(MapError::IntegerOverflow { tag, value, target }) => {
			assert_eq!(tag, "small");
			assert_eq!(value, 300);
			assert_eq!(target, "u8");
		}
		other => panic!("unexpected result: {other:?}"),
	}

	let fits = object([("small", Value::Int(255)), ("ratio", Value::Float(0.5))]);
	assert_eq!(decode::<Narrow>(&fits).expect("decode succeeds"), Narrow { small: 255, ratio: 0.5 });
}

#[test]
fn nested_failure_reports_element_index() {
	let node = object([(
		"inner",
		Value::Objects(vec![
			object([("value", Value::from("ok"))]),
			object([("value", Value::Bool(true))]),
		]),
	)]);
	let err = decode::<Wrapper>(&node).expect_err("second element is malformed");
	match &err {
		MapError::NestedDecodeFailed { tag, index, source } => {
			assert_eq!(tag, "inner");
			assert_eq!(*index, 1);
			assert!(matches!(**source, MapError::TypeMismatch { ref tag, .. } if tag == "value"));
		}
		other => panic!("unexpected error: {other}"),
	}
	assert!(matches!(err.root_cause(), MapError::TypeMismatch { actual: "bool", .. }));
}

#[test]
fn nested_order_is_preserved() {
	let node = object([(
		"inner",
		Value::Objects(["first", "second", "third"].iter().map(|value| object([("value", Value::from(*value))])).collect()),
	)]);
	let decoded: Wrapper = decode(&node).expect("decode succeeds");
	let values: Vec<&str> = decoded.inner.iter().map(|inner| inner.value.as_str()).collect();
	assert_eq!(values, ["first", "second", "third"]);
}

#[test]
fn empty_containers_decode_to_empty_collections() {
	let node = object([
		("list_of_numbers", Value::List(ScalarList::Int(Vec::new()))),
		("map_of_strings", Value::Map(ScalarMap::String(BTreeMap::new()))),
	]);
	let decoded: Simple = decode(&node).expect("decode succeeds");
	assert!(decoded.list_of_numbers.is_empty());
	assert!(decoded.map_of_strings.is_empty());

	let wrapper: Wrapper = decode(&object([("inner", Value::Objects(Vec::new()))])).expect("decode succeeds");
	assert!(wrapper.inner.is_empty());
}

#[test]
fn three_level_empty_nesting_round_trips() {
	let registry = Registry::new();
	let mapper = Mapper::new(&registry, &NullLogger);
	let input = ThreeLevels {
		first: vec![First {
			value: String::new(),
			second: vec![Second::default()],
		}],
	};
	let tree = mapper.encode(&input).expect("encode succeeds");
	let decoded: ThreeLevels = mapper.decode(&tree).expect("decode succeeds");
	assert_eq!(decoded, input);
}

#[test]
fn nested_object_where_a_list_is_expected_is_a_mismatch() {
	let node = object([("inner", Value::Object(object([("value", Value::from("solo"))])))]);
	match decode::<Wrapper>(&node) {
		Err(MapError::TypeMismatch { expected, actual, .. }) => {
			assert_eq!(expected, "list of object");
			assert_eq!(actual, "object");
		}
		other => panic!("unexpected result: {other:?}"),
	}
}

#[test]
fn float_narrowing_rejects_finite_values_beyond_f32() {
	let node = object([("ratio", Value::Float(1e300))]);
	match decode::<Narrow>(&node) {
		Err(MapError::FloatOutOfRange { tag, value, target }) => {
			assert_eq!(tag, "ratio");
			assert_eq!(value, 1e300);
			assert_eq!(target, "f32");
		}
		other => panic!("unexpected result: {other:?}"),
	}

	let infinite: Narrow = decode(&object([("ratio", Value::Float(f64::INFINITY))])).expect("infinity is representable");
	assert_eq!(infinite.ratio, f32::INFINITY);
}

#[derive(Debug, Default, PartialEq, Model)]
struct Wide {
	#[hcl(name = "bytes")]
	bytes: u64,
	#[hcl(name = "count")]
	count: usize,
}

#[test]
fn wide_unsigned_fields_decode_non_negative_values() {
	let node = object([("bytes", Value::Int(i64::MAX)), ("count", Value::Int(3))]);
	let decoded: Wide = decode(&node).expect("decode succeeds");
	assert_eq!(decoded, Wide { bytes: i64::MAX as u64, count: 3 });

	let err = decode::<Wide>(&object([("bytes", Value::Int(-1))])).expect_err("negative into u64");
	assert!(matches!(err, MapError::IntegerOverflow { value: -1, target: "u64", .. }));
}

#[test]
fn nested_failures_are_classified_as_nested() {
	let node = object([("inner", Value::Objects(vec![object([("value", Value::Int(1))])]))]);
	let err = decode::<Wrapper>(&node).expect_err("value is not a string");
	assert_eq!(err.class(), ErrorClass::Nested);
	assert_eq!(err.root_cause().class(), ErrorClass::Conversion);
}

#![allow(missing_docs)]

use std::collections::BTreeMap;

use hclmap::sdk::{MapError, Mapper, Model, NullLogger, Object, Registry, Value};
use proptest::prelude::*;

#[derive(Debug, Default, Clone, PartialEq, Model)]
struct Leaf {
	#[hcl(name = "label")]
	label: String,
	#[hcl(name = "weight")]
	weight: i16,
}

#[derive(Debug, Default, Clone, PartialEq, Model)]
struct Record {
	#[hcl(name = "name")]
	name: String,
	#[hcl(name = "count")]
	count: i32,
	#[hcl(name = "size")]
	size: u32,
	#[hcl(name = "ratio")]
	ratio: f64,
	#[hcl(name = "enabled")]
	enabled: bool,
	#[hcl(name = "tags")]
	tags: Vec<String>,
	#[hcl(name = "limits")]
	limits: BTreeMap<String, i64>,
	#[hcl(name = "leaves")]
	leaves: Vec<Leaf>,
	#[hcl(name = "note", computed)]
	note: String,
}

#[derive(Debug, Default, PartialEq, Model)]
struct Narrow {
	#[hcl(name = "value")]
	value: i32,
}

fn leaf() -> impl Strategy<Value = Leaf> {
	("[a-z]{0,8}", any::<i16>()).prop_map(|(label, weight)| Leaf { label, weight })
}

fn record() -> impl Strategy<Value = Record> {
	(
		"[a-z0-9-]{0,12}",
		any::<i32>(),
		any::<u32>(),
		-1.0e9..1.0e9f64,
		any::<bool>(),
		prop::collection::vec("[a-z]{1,6}", 0..5),
		prop::collection::btree_map("[a-z]{1,6}", any::<i64>(), 0..5),
		prop::collection::vec(leaf(), 0..4),
		".{0,10}",
	)
		.prop_map(|(name, count, size, ratio, enabled, tags, limits, leaves, note)| Record {
			name,
			count,
			size,
			ratio,
			enabled,
			tags,
			limits,
			leaves,
			note,
		})
}

const TAGS: [&str; 9] = ["name", "count", "size", "ratio", "enabled", "tags", "limits", "leaves", "note"];

proptest! {
	#[test]
	fn decode_inverts_encode(input in record()) {
		let registry = Registry::new();
		let mapper = Mapper::new(&registry, &NullLogger);
		let tree = mapper.encode(&input).expect("encode succeeds");
		let output: Record = mapper.decode(&tree).expect("decode succeeds");
		prop_assert_eq!(output, input);
	}

	#[test]
	fn every_tag_is_present_after_encode(input in record()) {
		let registry = Registry::new();
		let tree = Mapper::new(&registry, &NullLogger).encode(&input).expect("encode succeeds");
		prop_assert_eq!(tree.len(), TAGS.len());
		for tag in TAGS {
			prop_assert!(tree.contains_key(tag), "missing {}", tag);
		}
	}

	#[test]
	fn integers_encode_as_i64(count in any::<i32>(), size in any::<u32>(), weight in any::<i16>()) {
		let registry = Registry::new();
		let mapper = Mapper::new(&registry, &NullLogger);
		let input = Record {
			count,
			size,
			leaves: vec![Leaf { label: String::new(), weight }],
			..Record::default()
		};
		let tree = mapper.encode(&input).expect("encode succeeds");
		prop_assert_eq!(&tree["count"], &Value::Int(i64::from(count)));
		prop_assert_eq!(&tree["size"], &Value::Int(i64::from(size)));
		let Value::Objects(leaves) = &tree["leaves"] else {
			panic!("leaves should be a list of objects");
		};
		prop_assert_eq!(&leaves[0]["weight"], &Value::Int(i64::from(weight)));
	}

	#[test]
	fn narrowing_succeeds_exactly_when_the_value_fits(value in any::<i64>()) {
		let registry = Registry::new();
		let mapper = Mapper::new(&registry, &NullLogger);
		let node: Object = [("value".to_owned(), Value::Int(value))].into_iter().collect();
		match (i32::try_from(value), mapper.decode::<Narrow>(&node)) {
			(Ok(expected), Ok(decoded)) => prop_assert_eq!(decoded.value, expected),
			(Err(_), Err(MapError::IntegerOverflow { value: reported, target, .. })) => {
				prop_assert_eq!(reported, i128::from(value));
				prop_assert_eq!(target, "i32");
			}
			(expected, actual) => prop_assert!(false, "fits: {:?}, decode: {:?}", expected.is_ok(), actual),
		}
	}
}

use std::sync::Arc;

use hclmap::sdk::{Mapper, Shape};

use crate::cmd::util::emit_json;
use crate::error::Result;
use crate::example::ExampleObj;

#[derive(clap::Args)]
pub struct Args {
	#[arg(long)]
	pub json: bool,
}

/// Print the resolved descriptors of the example resource and its nested shapes.
pub fn run(args: Args) -> Result<()> {
	let mapper = Mapper::default();
	let shapes = collect_shapes(&mapper)?;

	if args.json {
		let payload = ShapesJson {
			root: shapes[0].name.to_owned(),
			shapes: shapes.iter().map(|shape| shape_to_json(shape)).collect(),
		};
		return emit_json(&payload);
	}

	for shape in &shapes {
		println!("shape: {}", shape.name);
		println!("  tag\tfield\tkind\tcomputed");
		for field in &shape.fields {
			println!("  {}\t{}\t{}\t{}", field.tag, field.field, field.kind, field.computed);
		}
	}
	Ok(())
}

/// Root shape first, then nested shapes in discovery order.
fn collect_shapes(mapper: &Mapper<'_>) -> Result<Vec<Arc<Shape>>> {
	let mut shapes = vec![mapper.registry().resolve::<ExampleObj>()?];
	let mut index = 0;
	while index < shapes.len() {
		let nested: Vec<_> = shapes[index].nested().collect();
		for item in nested {
			let resolved = mapper.registry().resolve_ref(item)?;
			if !shapes.iter().any(|shape| Arc::ptr_eq(shape, &resolved)) {
				shapes.push(resolved);
			}
		}
		index += 1;
	}
	Ok(shapes)
}

fn shape_to_json(shape: &Shape) -> ShapeJson {
	ShapeJson {
		name: shape.name.to_owned(),
		fields: shape
			.fields
			.iter()
			.map(|field| FieldJson {
				tag: field.tag.to_owned(),
				field: field.field.to_owned(),
				kind: field.kind.to_string(),
				computed: field.computed,
			})
			.collect(),
	}
}

#[derive(serde::Serialize)]
struct ShapesJson {
	root: String,
	shapes: Vec<ShapeJson>,
}

#[derive(serde::Serialize)]
struct ShapeJson {
	name: String,
	fields: Vec<FieldJson>,
}

#[derive(serde::Serialize)]
struct FieldJson {
	tag: String,
	field: String,
	kind: String,
	computed: bool,
}

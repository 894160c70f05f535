use std::fmt;

use hclmap::sdk::{Model, ResourceMetaData, Result};

/// Example resource model.
#[derive(Debug, Default, Clone, PartialEq, Model)]
pub struct ExampleObj {
	#[hcl(name = "name")]
	pub name: String,
	#[hcl(name = "number")]
	pub number: i64,
	#[hcl(name = "output", computed)]
	pub output: String,
	#[hcl(name = "enabled")]
	pub enabled: bool,
	#[hcl(name = "networks")]
	pub networks: Vec<String>,
	#[hcl(name = "networks_set")]
	pub networks_set: Vec<String>,
	#[hcl(name = "list")]
	pub list: Vec<NetworkList>,
	#[hcl(name = "set")]
	pub set: Vec<NetworkList>,
	#[hcl(name = "float")]
	pub float: f64,
}

/// Nested block of [`ExampleObj`].
#[derive(Debug, Default, Clone, PartialEq, Model)]
pub struct NetworkList {
	#[hcl(name = "name")]
	pub name: String,
}

/// Identifier assigned by the create/update function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubnetId {
	pub resource_group: String,
	pub virtual_network_name: String,
	pub name: String,
}

impl fmt::Display for SubnetId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"/resourceGroups/{}/providers/Microsoft.Network/virtualNetworks/{}/subnets/{}",
			self.resource_group, self.virtual_network_name, self.name
		)
	}
}

/// Read function: replaces the state with the object the remote side reports.
pub fn read(metadata: &mut ResourceMetaData<'_>) -> Result<()> {
	metadata.encode(&ExampleObj {
		name: "updated".to_owned(),
		number: 123,
		output: String::new(),
		enabled: true,
		networks: vec!["123".to_owned(), "124".to_owned()],
		networks_set: vec!["asdf".to_owned(), "qwer".to_owned()],
		list: vec![NetworkList { name: "test1232".to_owned() }],
		set: vec![NetworkList { name: "set1232".to_owned() }],
		float: 123.0,
	})
}

/// Create and update function: decodes the state, logs it and assigns the ID.
pub fn create_update(metadata: &mut ResourceMetaData<'_>) -> Result<()> {
	let obj: ExampleObj = metadata.decode()?;
	let logger = metadata.logger();

	logger.info(format_args!("Name is {}", obj.name));
	logger.info(format_args!("Number is {}", obj.number));
	logger.info(format_args!("Float is {}", obj.float));
	logger.info(format_args!("Networks are {:?}", obj.networks));
	logger.info(format_args!("Networks Set is {:?}", obj.networks_set));
	logger.info(format_args!("List is {:?}", obj.list));
	logger.info(format_args!("Set is {:?}", obj.set));

	let id = SubnetId {
		resource_group: "production-resources".to_owned(),
		virtual_network_name: "production-network".to_owned(),
		name: obj.name.clone(),
	};
	metadata.set_id(id.to_string());
	metadata.encode(&obj)
}

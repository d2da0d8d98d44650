mod collection;
pub use collection::ResultCollection;

mod config;
pub use config::{Config, NullRelations};

mod hit;
pub use hit::Hit;

pub mod hydrator;
pub use hydrator::{is_multi_level_array, Hydrator};

mod meta;
pub use meta::Meta;

mod model;
pub use model::{Instance, Loaded, Pivot};

pub mod page;
pub use page::{Page, PageContext};

pub mod relation;

pub use elastic_hydrate_core::{
    bail, err,
    schema::{self, ModelDef, RelationDef, Schema},
    Attributes, Error, Key, Result,
};

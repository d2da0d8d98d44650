//! Common imports for test files
//!
//! This module provides a convenient way to import frequently used items
//! in test files with `use tests::prelude::*;`

pub use crate::{blog, blog_models, blog_with, models};

pub use elastic_hydrate::{
    Attributes, Config, Hydrator, Instance, Key, Loaded, ModelDef, NullRelations, PageContext,
    RelationDef,
};

pub use serde_json::{json, Value};

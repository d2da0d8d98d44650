use super::Hydrator;
use crate::schema::{self, ModelDef};
use crate::{Config, NullRelations, Result};

/// Registers models and settings, then builds a [`Hydrator`].
#[derive(Debug, Default)]
pub struct Builder {
    /// Schema builder
    schema: schema::Builder,

    config: Config,
}

impl Builder {
    pub fn register(&mut self, model: ModelDef) -> &mut Self {
        self.schema.model(model);
        self
    }

    /// Replaces all settings.
    pub fn config(&mut self, config: Config) -> &mut Self {
        self.config = config;
        self
    }

    pub fn null_relations(&mut self, null_relations: NullRelations) -> &mut Self {
        self.config.null_relations = null_relations;
        self
    }

    pub fn unwrap_nested_hits(&mut self, unwrap: bool) -> &mut Self {
        self.config.unwrap_nested_hits = unwrap;
        self
    }

    pub fn page_size(&mut self, page_size: usize) -> &mut Self {
        self.config.page_size = page_size;
        self
    }

    pub fn page_name(&mut self, page_name: impl Into<String>) -> &mut Self {
        self.config.page_name = page_name.into();
        self
    }

    pub fn build(&self) -> Result<Hydrator> {
        let schema = self.schema.build()?;
        Ok(Hydrator::new(schema, self.config.clone()))
    }
}

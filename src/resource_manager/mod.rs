use std::any::{Any, TypeId};

use tracing::{debug, info};

/// Owns one value per type and drops them in reverse insertion order.
pub struct ResourceManager {
    resources: Vec<(TypeId, &'static str, Box<dyn Any>)>,
}

impl ResourceManager {
    pub fn new() -> Self {
        ResourceManager {
            resources: Vec::new(),
        }
    }

    /// Stores `resource`, replacing (and dropping) any earlier value of the
    /// same type. The new value counts as the most recently added.
    pub fn add<T: 'static>(&mut self, resource: T) {
        let type_id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();

        if let Some(index) = self.position(type_id) {
            self.resources.remove(index);
            debug!("Replacing resource {type_name}");
        }
        self.resources.push((type_id, type_name, Box::new(resource)));

        info!("Added resource {type_name}");
    }

    pub fn get<T: 'static>(&self) -> Option<&T> {
        let index = self.position(TypeId::of::<T>())?;
        self.resources[index].2.downcast_ref::<T>()
    }

    pub fn get_mut<T: 'static>(&mut self) -> Option<&mut T> {
        let index = self.position(TypeId::of::<T>())?;
        self.resources[index].2.downcast_mut::<T>()
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.position(TypeId::of::<T>()).is_some()
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Drops every resource, newest first.
    pub fn clear(&mut self) {
        while let Some((_, type_name, resource)) = self.resources.pop() {
            drop(resource);
            debug!("Released resource {type_name}");
        }
    }

    fn position(&self, type_id: TypeId) -> Option<usize> {
        self.resources.iter().position(|(id, _, _)| *id == type_id)
    }
}

impl Default for ResourceManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ResourceManager {
    fn drop(&mut self) {
        self.clear();
    }
}

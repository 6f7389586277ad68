use std::sync::{Arc, RwLock};

/// Receives notification whenever a tracked Property is mutated through the
/// normal (non-silent) path. The host's broadcast layer implements this to
/// learn which fields need to be sent to remote peers.
pub trait PropertyMutate: Send + Sync {
    fn mutate(&mut self, property_index: u8) -> bool;
}

/// Cloneable handle through which Properties report normal-path mutations
#[derive(Clone)]
pub struct PropertyMutator {
    inner: Arc<RwLock<dyn PropertyMutate>>,
}

impl PropertyMutator {
    pub fn new<M: PropertyMutate + 'static>(mutator: M) -> Self {
        Self {
            inner: Arc::new(RwLock::new(mutator)),
        }
    }

    pub fn clone_new(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }

    pub fn mutate(&mut self, property_index: u8) -> bool {
        if let Ok(mut inner) = self.inner.write() {
            return inner.mutate(property_index);
        }
        false
    }
}

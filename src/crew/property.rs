use std::ops::{Deref, DerefMut};

use log::warn;

use crate::crew::property_mutate::PropertyMutator;

/// A field of a CrewMember whose mutations must be tracked, so that locally
/// initiated changes can be broadcast to remote peers.
///
/// The normal mutation path (`mirror`, `DerefMut`) fires the attached
/// `PropertyMutator`. The silent path (`mirror_silently`) writes the value
/// without firing it, and exists so that a change *received from* a remote
/// peer is never re-broadcast as if it had originated here.
#[derive(Clone)]
pub struct Property<T> {
    inner: T,
    mutator: Option<PropertyMutator>,
    index: u8,
}

impl<T> Property<T> {
    /// Create a new Property with the given tracking index
    pub fn new(value: T, index: u8) -> Self {
        Self {
            inner: value,
            mutator: None,
            index,
        }
    }

    /// Set a PropertyMutator to track changes to the Property
    pub fn set_mutator(&mut self, mutator: &PropertyMutator) {
        self.mutator = Some(mutator.clone_new());
    }

    pub fn has_mutator(&self) -> bool {
        self.mutator.is_some()
    }

    /// Set the value, queueing the change for broadcast
    pub fn mirror(&mut self, value: T) {
        self.mutate();
        self.inner = value;
    }

    /// Set the value *without* firing the change notification. Used when
    /// applying a value that a remote peer already knows about; firing the
    /// mutator here would echo the change straight back across the network.
    pub fn mirror_silently(&mut self, value: T) {
        self.inner = value;
    }

    fn mutate(&mut self) {
        let Some(mutator) = &mut self.mutator else {
            warn!("Property mutated before a mutator was attached; change will not broadcast.");
            return;
        };
        let _success = mutator.mutate(self.index);
    }
}

impl<T> Deref for Property<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> DerefMut for Property<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // Just assume inner value will be changed, queue for update
        self.mutate();
        &mut self.inner
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use crate::crew::property_mutate::{PropertyMutate, PropertyMutator};

    use super::Property;

    struct CountingMutate {
        fired: Arc<Mutex<Vec<u8>>>,
    }

    impl PropertyMutate for CountingMutate {
        fn mutate(&mut self, property_index: u8) -> bool {
            self.fired
                .lock()
                .expect("mutation log poisoned")
                .push(property_index);
            true
        }
    }

    fn counting_mutator() -> (PropertyMutator, Arc<Mutex<Vec<u8>>>) {
        let fired = Arc::new(Mutex::new(Vec::new()));
        let mutator = PropertyMutator::new(CountingMutate {
            fired: fired.clone(),
        });
        (mutator, fired)
    }

    #[test]
    fn mirror_fires_mutator() {
        let (mutator, fired) = counting_mutator();
        let mut property = Property::new(1u32, 7);
        property.set_mutator(&mutator);

        property.mirror(2);

        assert_eq!(*property, 2);
        assert_eq!(*fired.lock().unwrap(), vec![7]);
    }

    #[test]
    fn mirror_silently_fires_nothing() {
        let (mutator, fired) = counting_mutator();
        let mut property = Property::new(1u32, 7);
        property.set_mutator(&mutator);

        property.mirror_silently(2);

        assert_eq!(*property, 2);
        assert!(fired.lock().unwrap().is_empty());
    }

    #[test]
    fn deref_mut_fires_mutator() {
        let (mutator, fired) = counting_mutator();
        let mut property = Property::new(1u32, 3);
        property.set_mutator(&mutator);

        *property += 1;

        assert_eq!(*property, 2);
        assert_eq!(*fired.lock().unwrap(), vec![3]);
    }

    #[test]
    fn unwired_property_still_accepts_writes() {
        let mut property = Property::new(1u32, 0);
        property.mirror(5);
        assert_eq!(*property, 5);
    }
}
